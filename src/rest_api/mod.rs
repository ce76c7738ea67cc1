//! # REST API Module
//!
//! Error taxonomy and response bodies shared by the HTTP handlers.

pub mod errors;
pub mod response;

pub use errors::{ApiError, ApiResult, ErrorResponse, Operation};
pub use response::{HealthResponse, MessageResponse};
