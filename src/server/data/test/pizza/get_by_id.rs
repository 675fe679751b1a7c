use super::*;

/// Tests getting a pizza by ID.
///
/// Expected: Ok(Some) with matching attributes
#[tokio::test]
async fn returns_pizza() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pizza = factory::create_pizza(db).await?;

    let found = PizzaRepository::new(db).get_by_id(pizza.id).await?.unwrap();

    assert_eq!(found.id, pizza.id);
    assert_eq!(found.name, pizza.name);
    assert_eq!(found.ingredients, pizza.ingredients);

    Ok(())
}

/// Tests getting a pizza that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_pizza() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(PizzaRepository::new(db).get_by_id(999).await?.is_none());
    assert!(PizzaRepository::new(db)
        .get_with_restaurants_by_id(999)
        .await?
        .is_none());

    Ok(())
}

/// Tests loading a pizza with the restaurants serving it.
///
/// Expected: Ok(Some) with one entry per serving restaurant
#[tokio::test]
async fn returns_pizza_with_restaurants() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (restaurant, pizza, restaurant_pizza) =
        factory::helpers::create_restaurant_pizza_with_dependencies(db).await?;
    let other_restaurant = factory::create_restaurant(db).await?;
    factory::create_restaurant_pizza(db, other_restaurant.id, pizza.id).await?;

    let result = PizzaRepository::new(db)
        .get_with_restaurants_by_id(pizza.id)
        .await?
        .unwrap();

    assert_eq!(result.pizza.id, pizza.id);
    assert_eq!(result.restaurant_pizzas.len(), 2);
    assert_eq!(result.restaurant_pizzas[0].restaurant_pizza.id, restaurant_pizza.id);
    assert_eq!(result.restaurant_pizzas[0].restaurant.id, restaurant.id);
    assert_eq!(result.restaurant_pizzas[1].restaurant.id, other_restaurant.id);

    Ok(())
}
