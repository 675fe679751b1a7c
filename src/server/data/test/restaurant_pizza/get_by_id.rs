use super::*;

/// Tests loading a menu entry with both parents.
///
/// Expected: Ok(Some) with restaurant and pizza attached
#[tokio::test]
async fn returns_restaurant_pizza_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (restaurant, pizza, restaurant_pizza) =
        factory::helpers::create_restaurant_pizza_with_dependencies(db).await?;

    let result = RestaurantPizzaRepository::new(db)
        .get_with_relations_by_id(restaurant_pizza.id)
        .await?
        .unwrap();

    assert_eq!(result.restaurant_pizza.id, restaurant_pizza.id);
    assert_eq!(result.restaurant_pizza.price, restaurant_pizza.price);
    assert_eq!(result.restaurant.id, restaurant.id);
    assert_eq!(result.restaurant.name, restaurant.name);
    assert_eq!(result.pizza.id, pizza.id);
    assert_eq!(result.pizza.name, pizza.name);

    Ok(())
}

/// Tests getting a menu entry that doesn't exist.
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

    let repo = RestaurantPizzaRepository::new(db);

    assert!(repo.get_by_id(999).await?.is_none());
    assert!(repo.get_with_relations_by_id(999).await?.is_none());

    Ok(())
}
