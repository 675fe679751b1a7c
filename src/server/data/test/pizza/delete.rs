use super::*;

/// Tests deleting a pizza cascades to its menu entries.
///
/// Verifies that the restaurant itself survives.
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

    let (restaurant, pizza, _restaurant_pizza) =
        factory::helpers::create_restaurant_pizza_with_dependencies(db).await?;

    let deleted = PizzaRepository::new(db).delete(pizza.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Pizza::find_by_id(pizza.id)
        .one(db)
        .await?
        .is_none());
    assert_eq!(entity::prelude::RestaurantPizza::find().count(db).await?, 0);
    assert!(entity::prelude::Restaurant::find_by_id(restaurant.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a pizza that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_pizza() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = PizzaRepository::new(db).delete(999).await?;

    assert!(!deleted);

    Ok(())
}
