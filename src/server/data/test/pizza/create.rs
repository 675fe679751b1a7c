use super::*;

/// Tests creating a pizza.
///
/// Expected: Ok with the stored pizza and a generated ID
#[tokio::test]
async fn creates_pizza() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pizza = PizzaRepository::new(db)
        .create(CreatePizzaParam {
            name: "Pepperoni".to_string(),
            ingredients: Some("Tomato, mozzarella, pepperoni".to_string()),
        })
        .await?;

    assert!(pizza.id > 0);
    assert_eq!(pizza.name, "Pepperoni");
    assert_eq!(
        pizza.ingredients.as_deref(),
        Some("Tomato, mozzarella, pepperoni")
    );

    Ok(())
}

/// Tests that empty strings are stored as given.
///
/// Expected: Ok with empty name kept
#[tokio::test]
async fn accepts_empty_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pizza = PizzaRepository::new(db)
        .create(CreatePizzaParam {
            name: String::new(),
            ingredients: None,
        })
        .await?;

    assert_eq!(pizza.name, "");
    assert!(pizza.ingredients.is_none());

    Ok(())
}
