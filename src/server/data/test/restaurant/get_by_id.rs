use super::*;

/// Tests getting a restaurant by ID.
///
/// Expected: Ok(Some) with matching attributes
#[tokio::test]
async fn returns_restaurant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;

    let result = RestaurantRepository::new(db).get_by_id(restaurant.id).await?;

    let found = result.unwrap();
    assert_eq!(found.id, restaurant.id);
    assert_eq!(found.name, restaurant.name);
    assert_eq!(found.address, restaurant.address);

    Ok(())
}

/// Tests getting a restaurant that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_restaurant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RestaurantRepository::new(db).get_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests loading a restaurant with its menu entries.
///
/// Verifies that each entry carries the pizza it refers to.
///
/// Expected: Ok(Some) with one entry per association
#[tokio::test]
async fn returns_restaurant_with_pizzas() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (restaurant, pizza, restaurant_pizza) =
        factory::helpers::create_restaurant_pizza_with_dependencies(db).await?;
    let other_pizza = factory::create_pizza(db).await?;
    factory::restaurant_pizza::RestaurantPizzaFactory::new(db, restaurant.id, other_pizza.id)
        .price(20)
        .build()
        .await?;

    let result = RestaurantRepository::new(db)
        .get_with_pizzas_by_id(restaurant.id)
        .await?
        .unwrap();

    assert_eq!(result.restaurant.id, restaurant.id);
    assert_eq!(result.restaurant_pizzas.len(), 2);
    assert_eq!(result.restaurant_pizzas[0].restaurant_pizza.id, restaurant_pizza.id);
    assert_eq!(result.restaurant_pizzas[0].pizza.id, pizza.id);
    assert_eq!(result.restaurant_pizzas[1].pizza.id, other_pizza.id);
    assert_eq!(result.restaurant_pizzas[1].restaurant_pizza.price, 20);

    Ok(())
}

/// Tests loading a restaurant with an empty menu.
///
/// Expected: Ok(Some) with no entries
#[tokio::test]
async fn returns_empty_menu() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;

    let result = RestaurantRepository::new(db)
        .get_with_pizzas_by_id(restaurant.id)
        .await?
        .unwrap();

    assert!(result.restaurant_pizzas.is_empty());

    Ok(())
}
