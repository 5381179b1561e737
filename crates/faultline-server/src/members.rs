//! Member lookup endpoints
//!
//! Every handling unit serves the same lookup; what differs is how its faults
//! are resolved. Some ids raise faults on purpose:
//! - `ex`: unclassified
//! - `bad`: validation
//! - `user-ex`: domain

use axum::extract::Path;
use axum::{Json, Router, routing};
use faultline_core::Fault;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDto {
    pub member_id: String,
    pub name: String,
}

/// Router serving `GET {path}` where `path` captures `{id}`
pub fn router(path: &str) -> Router {
    Router::new().route(path, routing::get(get_member))
}

async fn get_member(Path(id): Path<String>) -> Result<Json<MemberDto>, Fault> {
    tracing::debug!(%id, "member lookup");
    find_member(&id).map(Json)
}

fn find_member(id: &str) -> Result<MemberDto, Fault> {
    match id {
        "ex" => Err(Fault::unclassified("invalid user")),
        "bad" => Err(Fault::validation("invalid input value")),
        "user-ex" => Err(Fault::domain("user error")),
        _ => Ok(MemberDto {
            member_id: id.to_owned(),
            name: format!("hello {id}"),
        }),
    }
}
