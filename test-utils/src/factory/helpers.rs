//! Counters and multi-entity shortcuts shared by the factories.

use std::sync::atomic::{AtomicU64, Ordering};

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{pizza, restaurant, restaurant_pizza};

static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Returns a value no other factory call in this test binary has received.
///
/// Factories append it to default names so several rows of one kind stay
/// distinguishable within a test.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Inserts a default restaurant and pizza, then puts the pizza on the restaurant's menu.
///
/// # Returns
/// - `Ok((restaurant, pizza, restaurant_pizza))` - The three stored rows
/// - `Err(DbErr)` - An insert failed
pub async fn create_restaurant_pizza_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::restaurant::Model,
        entity::pizza::Model,
        entity::restaurant_pizza::Model,
    ),
    DbErr,
> {
    let restaurant = restaurant::create_restaurant(db).await?;
    let pizza = pizza::create_pizza(db).await?;
    let menu_entry =
        restaurant_pizza::create_restaurant_pizza(db, restaurant.id, pizza.id).await?;

    Ok((restaurant, pizza, menu_entry))
}
