//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Enforcing domain rules such as the menu price range
//! - **Orchestration**: Coordinating repository calls, including reference checks
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Every write runs in a single transaction that is
//!   committed only when the whole operation succeeded
//!
//! Missing entities surface as `AppError::NotFound` with a `"<Entity> not found"` message.

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

#[cfg(test)]
mod test;
