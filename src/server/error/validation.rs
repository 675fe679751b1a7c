use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorsDto;

/// A write rejected because an attribute broke a domain rule.
///
/// Raised before any row is staged, so a rejected request never leaves a partial write.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Menu price outside of the accepted range (inclusive on both ends).
    #[error("Price must be between {min} and {max}")]
    PriceOutOfRange {
        /// The rejected price, as sent
        price: i64,
        /// Lowest accepted price
        min: i32,
        /// Highest accepted price
        max: i32,
    },
}

impl ValidationError {
    /// Name of the attribute that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::PriceOutOfRange { .. } => "price",
        }
    }
}

/// Converts validation errors into 400 Bad Request responses.
///
/// The body lists the violated rule as `{"errors": ["<message>"]}`.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected invalid {}: {:?}", self.field(), self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorsDto {
                errors: vec![self.to_string()],
            }),
        )
            .into_response()
    }
}
