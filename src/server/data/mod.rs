//! Database repository layer for the catalog entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! entity. Repositories use SeaORM entity models internally and return parameter models to
//! maintain separation between the data layer and business logic layer.
//!
//! Repositories borrow any `ConnectionTrait` implementor, so the same code runs against the
//! connection pool for reads and against a `DatabaseTransaction` for writes.

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
