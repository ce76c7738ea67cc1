//! # REST API Errors
//!
//! Error types for the product endpoints. Store failures are logged here and
//! reach the caller only as a fixed per-operation message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

use crate::catalog::{InputError, StoreError};

/// Result type for REST operations
pub type ApiResult<T> = Result<T, ApiError>;

/// The product operation a store failure happened in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    List,
    Get,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::List => "list",
            Operation::Get => "get",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }

    /// Message returned to the caller when the store fails
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::Create => "Failed to create product",
            Operation::List => "Failed to fetch products",
            Operation::Get => "Failed to fetch product",
            Operation::Update => "Failed to update product",
            Operation::Delete => "Failed to delete product",
        }
    }
}

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Body is not valid JSON or does not match the product input shape
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Path id is not an integer
    #[error("Invalid product id: {0}")]
    InvalidId(String),

    /// Body parsed but violates a field constraint
    #[error("{0}")]
    Validation(#[from] InputError),

    /// No row matched the requested id
    #[error("Product not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// The record store failed; details are only in the log
    #[error("{}", .0.failure_message())]
    Store(Operation),
}

impl ApiError {
    /// Log a store failure and turn it into its public form.
    pub fn store(operation: Operation, err: StoreError) -> Self {
        error!(operation = operation.as_str(), error = %err, "product store operation failed");
        ApiError::Store(operation)
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Product not found")]
    pub error: String,
    #[schema(example = 404)]
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
