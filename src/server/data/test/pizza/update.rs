use super::*;

/// Tests updating the ingredients of a pizza.
///
/// Expected: Ok(Some) with new ingredients and unchanged name
#[tokio::test]
async fn updates_ingredients_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pizza = factory::create_pizza(db).await?;

    let updated = PizzaRepository::new(db)
        .update(UpdatePizzaParam {
            id: pizza.id,
            name: None,
            ingredients: Some(Some("Tomato, basil".to_string())),
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, pizza.name);
    assert_eq!(updated.ingredients.as_deref(), Some("Tomato, basil"));

    Ok(())
}

/// Tests clearing the ingredients of a pizza.
///
/// Expected: Ok(Some) with ingredients set to NULL
#[tokio::test]
async fn clears_ingredients() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pizza = factory::create_pizza(db).await?;

    let updated = PizzaRepository::new(db)
        .update(UpdatePizzaParam {
            id: pizza.id,
            name: None,
            ingredients: Some(None),
        })
        .await?
        .unwrap();

    assert!(updated.ingredients.is_none());

    Ok(())
}

/// Tests updating a pizza that doesn't exist.
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

    let result = PizzaRepository::new(db)
        .update(UpdatePizzaParam {
            id: 999,
            name: Some("Ghost".to_string()),
            ingredients: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
