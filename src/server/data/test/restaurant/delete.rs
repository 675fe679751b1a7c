use super::*;

/// Tests deleting a restaurant.
///
/// Expected: Ok(true) with restaurant removed
#[tokio::test]
async fn deletes_restaurant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;

    let deleted = RestaurantRepository::new(db).delete(restaurant.id).await?;

    assert!(deleted);
    let check = entity::prelude::Restaurant::find_by_id(restaurant.id)
        .one(db)
        .await?;
    assert!(check.is_none());

    Ok(())
}

/// Tests deleting a restaurant cascades to its menu entries.
///
/// Verifies that the pizza itself survives.
///
/// Expected: Ok(true) with associations removed
#[tokio::test]
async fn cascades_to_restaurant_pizzas() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (restaurant, pizza, restaurant_pizza) =
        factory::helpers::create_restaurant_pizza_with_dependencies(db).await?;

    RestaurantRepository::new(db).delete(restaurant.id).await?;

    let entry = entity::prelude::RestaurantPizza::find_by_id(restaurant_pizza.id)
        .one(db)
        .await?;
    assert!(entry.is_none());
    assert_eq!(entity::prelude::RestaurantPizza::find().count(db).await?, 0);

    let pizza = entity::prelude::Pizza::find_by_id(pizza.id).one(db).await?;
    assert!(pizza.is_some());

    Ok(())
}

/// Tests deleting a restaurant that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_restaurant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = RestaurantRepository::new(db).delete(999).await?;

    assert!(!deleted);

    Ok(())
}
