use super::*;

/// Tests changing the price of a menu entry.
///
/// Expected: Ok(Some) with new price and unchanged references
#[tokio::test]
async fn updates_price() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (restaurant, pizza, restaurant_pizza) =
        factory::helpers::create_restaurant_pizza_with_dependencies(db).await?;

    let updated = RestaurantPizzaRepository::new(db)
        .update(UpdateRestaurantPizzaParam {
            id: restaurant_pizza.id,
            price: Some(25),
            restaurant_id: None,
            pizza_id: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.price, 25);
    assert_eq!(updated.restaurant_id, restaurant.id);
    assert_eq!(updated.pizza_id, pizza.id);

    Ok(())
}

/// Tests moving a menu entry to another pizza.
///
/// Expected: Ok(Some) with the new pizza reference
#[tokio::test]
async fn updates_pizza_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_restaurant, _pizza, restaurant_pizza) =
        factory::helpers::create_restaurant_pizza_with_dependencies(db).await?;
    let other_pizza = factory::create_pizza(db).await?;

    let updated = RestaurantPizzaRepository::new(db)
        .update(UpdateRestaurantPizzaParam {
            id: restaurant_pizza.id,
            price: None,
            restaurant_id: None,
            pizza_id: Some(other_pizza.id),
        })
        .await?
        .unwrap();

    assert_eq!(updated.pizza_id, other_pizza.id);
    assert_eq!(updated.price, restaurant_pizza.price);

    Ok(())
}

/// Tests updating a menu entry that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_restaurant_pizza() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RestaurantPizzaRepository::new(db)
        .update(UpdateRestaurantPizzaParam {
            id: 999,
            price: Some(10),
            restaurant_id: None,
            pizza_id: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
