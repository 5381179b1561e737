use axum::Router;
use faultline_resolve::{HandlerScope, HandlerTable};

use crate::members;

pub const MEMBERS_V1: &str = "members-v1";
pub const MEMBERS_V2: &str = "members-v2";
pub const MEMBERS_V3: &str = "members-v3";

/// Names of every handling unit the server mounts
pub const UNIT_NAMES: [&str; 3] = [MEMBERS_V1, MEMBERS_V2, MEMBERS_V3];

/// Routes that share one fault boundary
pub struct HandlingUnit {
    pub name: &'static str,
    pub router: Router,
    /// Request-scoped handler table, consulted before the advice table
    pub table: Option<HandlerTable>,
}

/// The member API, one unit per resolution style
///
/// - v1 relies on the advice table (when covered) and the resolver chain
/// - v2 carries its own handler table
/// - v3 relies on the advice table alone
pub fn handling_units() -> Vec<HandlingUnit> {
    vec![
        HandlingUnit {
            name: MEMBERS_V1,
            router: members::router("/api/members/{id}"),
            table: None,
        },
        HandlingUnit {
            name: MEMBERS_V2,
            router: members::router("/api2/members/{id}"),
            table: Some(HandlerTable::standard(HandlerScope::Unit(MEMBERS_V2.to_owned()))),
        },
        HandlingUnit {
            name: MEMBERS_V3,
            router: members::router("/api3/members/{id}"),
            table: None,
        },
    ]
}
