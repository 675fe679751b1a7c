//! Errors raised while serving the catalog and the responses they turn into.
//!
//! Handlers return `Result<_, AppError>`; the `IntoResponse` impl below decides the
//! status code and body. Clients see one of two body shapes: `{"error": ".."}` for a
//! missing resource or a server failure, `{"errors": [..]}` for a rejected request.

pub mod config;
pub mod validation;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, ErrorsDto},
    server::error::{config::ConfigError, validation::ValidationError},
};

/// Message sent to clients in place of any server-side failure detail.
const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error";

/// Every failure a request, or startup, can end in.
#[derive(Error, Debug)]
pub enum AppError {
    /// Unusable environment configuration; only raised before the server starts.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// A write broke a domain rule; answered with 400.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Binding or serving the listener failed.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// The entity named in the path doesn't exist, e.g. `"Pizza not found"`.
    #[error("{0}")]
    NotFound(String),

    /// The request body could not be used; answered with 400.
    #[error("{0}")]
    BadRequest(String),

    /// A state the server should never reach. Logged, then answered with a generic 500.
    #[error("{0}")]
    InternalError(String),
}

/// Malformed, missing or unexpected JSON bodies are the client's fault.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Ids that aren't an `i32` get the same 400 body as a bad payload.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::ValidationErr(err) => err.into_response(),
            Self::NotFound(error) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error })).into_response()
            }
            Self::BadRequest(msg) => {
                tracing::debug!("Bad request: {}", msg);

                let body = ErrorsDto { errors: vec![msg] };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Logs any displayable error and answers 500 without leaking its detail.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self.0);

        let body = ErrorDto {
            error: INTERNAL_SERVER_ERROR_MESSAGE.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
