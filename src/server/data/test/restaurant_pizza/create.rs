use super::*;

/// Tests creating a menu entry between existing parents.
///
/// Expected: Ok with the stored entry
#[tokio::test]
async fn creates_restaurant_pizza() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let pizza = factory::create_pizza(db).await?;

    let restaurant_pizza = RestaurantPizzaRepository::new(db)
        .create(CreateRestaurantPizzaParam {
            price: 5,
            restaurant_id: restaurant.id,
            pizza_id: pizza.id,
        })
        .await?;

    assert!(restaurant_pizza.id > 0);
    assert_eq!(restaurant_pizza.price, 5);
    assert_eq!(restaurant_pizza.restaurant_id, restaurant.id);
    assert_eq!(restaurant_pizza.pizza_id, pizza.id);

    Ok(())
}

/// Tests that the same pair may appear on a menu more than once.
///
/// Expected: Ok with two distinct entries
#[tokio::test]
async fn allows_duplicate_pairs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (restaurant, pizza, existing) =
        factory::helpers::create_restaurant_pizza_with_dependencies(db).await?;

    let duplicate = RestaurantPizzaRepository::new(db)
        .create(CreateRestaurantPizzaParam {
            price: 9,
            restaurant_id: restaurant.id,
            pizza_id: pizza.id,
        })
        .await?;

    assert_ne!(duplicate.id, existing.id);

    Ok(())
}

/// Tests that the schema rejects a dangling reference.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_missing_restaurant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pizza = factory::create_pizza(db).await?;

    let result = RestaurantPizzaRepository::new(db)
        .create(CreateRestaurantPizzaParam {
            price: 5,
            restaurant_id: 999,
            pizza_id: pizza.id,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
