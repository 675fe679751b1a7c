//! HTTP request handlers.
//!
//! Controllers decode the path and JSON body, convert DTOs into domain params, call the
//! matching service and render the domain result back into a DTO. Body rejections are
//! taken as `Result<Json<_>, JsonRejection>` so malformed input goes through `AppError`
//! and shares its 400 body shape.

pub mod index;
pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

#[cfg(test)]
mod test;
