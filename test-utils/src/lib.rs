//! Test support for the pizzeria workspace.
//!
//! Each test gets its own in-memory SQLite database holding only the tables it asks for:
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn serves_margherita() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (restaurant, pizza, menu_entry) =
//!         factory::helpers::create_restaurant_pizza_with_dependencies(db).await?;
//!     assert_eq!(menu_entry.restaurant_id, restaurant.id);
//!     assert_eq!(menu_entry.pizza_id, pizza.id);
//!
//!     Ok(())
//! }
//! ```
//!
//! `factory` inserts rows and returns the stored models; `fixture` builds models in
//! memory without touching a database.

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
