use super::*;

/// Tests deleting a menu entry.
///
/// Verifies that both parents survive.
///
/// Expected: Ok(true) with only the entry removed
#[tokio::test]
async fn deletes_restaurant_pizza() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (restaurant, pizza, restaurant_pizza) =
        factory::helpers::create_restaurant_pizza_with_dependencies(db).await?;

    let deleted = RestaurantPizzaRepository::new(db)
        .delete(restaurant_pizza.id)
        .await?;

    assert!(deleted);
    assert!(entity::prelude::RestaurantPizza::find_by_id(restaurant_pizza.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Restaurant::find_by_id(restaurant.id)
        .one(db)
        .await?
        .is_some());
    assert!(entity::prelude::Pizza::find_by_id(pizza.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a menu entry that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_restaurant_pizza() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = RestaurantPizzaRepository::new(db).delete(999).await?;

    assert!(!deleted);

    Ok(())
}
