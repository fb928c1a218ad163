use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use bank::BankError;
use thiserror::Error;
use tracing::{error, warn};

use crate::render::error_page;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error(transparent)]
    Bank(#[from] BankError),

    #[error("Invalid {key} value: {message}")]
    Config { key: String, message: String },

    #[error("Internal error: {0}")]
    InternalError(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            AppError::Bank(BankError::NotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Bank(BankError::InvalidArgument { .. }) => StatusCode::BAD_REQUEST,
            AppError::Bank(_) | AppError::Config { .. } | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!("{self}");
        } else {
            warn!("{self}");
        }

        (status, Html(error_page(status, &self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let not_found = AppError::from(BankError::NotFound { id: "99".into() });
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let invalid = AppError::from(BankError::invalid_argument("unknown field"));
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let malformed = AppError::from(BankError::malformed("line 3"));
        assert_eq!(malformed.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let payload = AppError::MalformedPayload("bad category".into());
        assert_eq!(payload.status(), StatusCode::BAD_REQUEST);
    }
}
