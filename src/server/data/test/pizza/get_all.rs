use super::*;

/// Tests listing pizzas in ID order.
///
/// Expected: Ok with every pizza, lowest ID first
#[tokio::test]
async fn returns_pizzas_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_pizza(db).await?;
    let second = factory::pizza::PizzaFactory::new(db)
        .name("Hawaiian")
        .ingredients(None)
        .build()
        .await?;

    let pizzas = PizzaRepository::new(db).get_all().await?;

    assert_eq!(pizzas.len(), 2);
    assert_eq!(pizzas[0].id, first.id);
    assert_eq!(pizzas[1].id, second.id);
    assert_eq!(pizzas[1].name, "Hawaiian");
    assert!(pizzas[1].ingredients.is_none());

    Ok(())
}

/// Tests listing pizzas when none exist.
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

    let pizzas = PizzaRepository::new(db).get_all().await?;

    assert!(pizzas.is_empty());

    Ok(())
}
