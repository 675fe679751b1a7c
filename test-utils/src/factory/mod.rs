//! Inserting catalog rows for tests.
//!
//! Each factory starts from the matching fixture, makes the name unique and stores the
//! row, returning the model with its generated ID. Chain setters to override fields:
//!
//! ```rust,ignore
//! let restaurant = factory::create_restaurant(db).await?;
//! let pizza = factory::pizza::PizzaFactory::new(db)
//!     .name("Hawaiian")
//!     .ingredients(None)
//!     .build()
//!     .await?;
//! let entry = factory::restaurant_pizza::RestaurantPizzaFactory::new(db, restaurant.id, pizza.id)
//!     .price(30)
//!     .build()
//!     .await?;
//! ```
//!
//! `helpers::create_restaurant_pizza_with_dependencies` builds all three in one call.

pub mod helpers;
pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

pub use pizza::create_pizza;
pub use restaurant::create_restaurant;
pub use restaurant_pizza::create_restaurant_pizza;
