//! Server construction from configuration

mod harness;

use faultline_server::Server;
use harness::config::ConfigBuilder;

#[test]
fn unknown_advice_unit_fails_startup() {
    let config = ConfigBuilder::new().with_advice_units(&["members-v4"]).build();

    let Err(err) = Server::new(&config) else {
        panic!("server should refuse an unknown unit");
    };
    assert!(err.to_string().contains("members-v4"));
}

#[test]
fn listen_address_comes_from_config() {
    let server = Server::new(&ConfigBuilder::new().build()).unwrap();
    assert_eq!(server.listen_address().to_string(), "127.0.0.1:0");
}

#[test]
fn listen_address_can_be_overridden() {
    let server = Server::new(&ConfigBuilder::new().build())
        .unwrap()
        .with_listen_address("127.0.0.1:9999".parse().unwrap());
    assert_eq!(server.listen_address().port(), 9999);
}
