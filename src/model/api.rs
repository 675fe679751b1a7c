use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned for a missing resource or an internal failure.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Body returned when a request is rejected as invalid.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorsDto {
    pub errors: Vec<String>,
}
