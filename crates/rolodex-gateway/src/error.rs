use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rolodex_core::ContactError;
use thiserror::Error;

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

pub const NOT_FOUND_DETAIL: &str = "Contact not found";

/// The operation a request was performing, used to pick the fixed
/// message returned when storage fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    List,
    Update,
    Delete,
}

impl Operation {
    pub fn failure_detail(self) -> &'static str {
        match self {
            Operation::Create => "Error creating contact",
            Operation::List => "Error retrieving contacts",
            Operation::Update => "Error updating contact",
            Operation::Delete => "Error deleting contact",
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    /// The request body failed schema checks; no storage call was made.
    #[error("invalid request: {0}")]
    Validation(String),
    #[error("contact not found")]
    NotFound,
    /// Storage failed. The cause has already been logged and is not
    /// exposed to the caller.
    #[error("{}", .0.failure_detail())]
    Storage(Operation),
}

impl AppError {
    pub fn from_contact_error(err: ContactError, operation: Operation) -> Self {
        match err {
            ContactError::NotFound(_) => AppError::NotFound,
            ContactError::Storage(_) => AppError::Storage(operation),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(self) -> String {
        match self {
            AppError::Validation(reason) => reason,
            AppError::NotFound => NOT_FOUND_DETAIL.to_string(),
            AppError::Storage(operation) => operation.failure_detail().to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            detail: self.detail(),
        });

        (status, body).into_response()
    }
}
