use super::*;

/// Tests creating a restaurant with an address.
///
/// Expected: Ok with the stored restaurant and a generated ID
#[tokio::test]
async fn creates_restaurant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RestaurantRepository::new(db);
    let restaurant = repo
        .create(CreateRestaurantParam {
            name: "Slice House".to_string(),
            address: Some("42 Crust Ave".to_string()),
        })
        .await?;

    assert!(restaurant.id > 0);
    assert_eq!(restaurant.name, "Slice House");
    assert_eq!(restaurant.address.as_deref(), Some("42 Crust Ave"));

    let stored = entity::prelude::Restaurant::find_by_id(restaurant.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "Slice House");

    Ok(())
}

/// Tests creating a restaurant without an address.
///
/// Expected: Ok with address stored as NULL
#[tokio::test]
async fn creates_restaurant_without_address() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = RestaurantRepository::new(db)
        .create(CreateRestaurantParam {
            name: "Slice House".to_string(),
            address: None,
        })
        .await?;

    assert!(restaurant.address.is_none());

    Ok(())
}
