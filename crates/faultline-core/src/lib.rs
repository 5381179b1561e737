//! Fault model shared by the resolution layer and the HTTP surface
//!
//! A [`Fault`] is what a handling unit raises; an [`ErrorResult`] is what a
//! client receives once the fault has been resolved.

#![allow(clippy::must_use_candidate)]

mod error_result;
mod fault;
#[cfg(feature = "http")]
mod response;

pub use error_result::{ErrorCode, ErrorResult, INTERNAL_ERROR_MESSAGE};
pub use fault::{Cause, Fault, FaultKind, FaultPattern};
