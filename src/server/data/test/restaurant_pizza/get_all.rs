use super::*;

/// Tests listing menu entries with both parents.
///
/// Verifies that a pizza shared by several entries is attached to each of them.
///
/// Expected: Ok with entries in ID order
#[tokio::test]
async fn returns_entries_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first_restaurant, pizza, first) =
        factory::helpers::create_restaurant_pizza_with_dependencies(db).await?;
    let second_restaurant = factory::create_restaurant(db).await?;
    let second = factory::create_restaurant_pizza(db, second_restaurant.id, pizza.id).await?;

    let entries = RestaurantPizzaRepository::new(db)
        .get_all_with_relations()
        .await?;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].restaurant_pizza.id, first.id);
    assert_eq!(entries[0].restaurant.id, first_restaurant.id);
    assert_eq!(entries[0].pizza.id, pizza.id);
    assert_eq!(entries[1].restaurant_pizza.id, second.id);
    assert_eq!(entries[1].restaurant.id, second_restaurant.id);
    assert_eq!(entries[1].pizza.id, pizza.id);

    Ok(())
}

/// Tests listing menu entries when none exist.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entries = RestaurantPizzaRepository::new(db)
        .get_all_with_relations()
        .await?;

    assert!(entries.is_empty());

    Ok(())
}
