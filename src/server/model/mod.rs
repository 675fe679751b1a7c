//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! catalog entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and projected into DTO views at the controller
//! boundary through explicitly named functions, one per view.

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
