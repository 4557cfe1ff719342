//! Types shared between the dashboard front-end and anything else that talks
//! to the workflow API.

pub mod api;
pub mod models;
pub mod result;
pub mod validation;

pub use models::{RunStatus, Severity};
pub use result::{RequestError, RequestResult};
