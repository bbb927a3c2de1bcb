//! Core types shared across the botcmd crates
//!
//! - **Correlation types**: RequestId, RequestContext
//! - **Schema constants**: canonical field keys and event names for structured logging

pub mod correlation;
pub mod schema;

pub use correlation::{RequestContext, RequestId, REQUEST_ID_ENV};
