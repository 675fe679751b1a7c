//! Restaurant factory for creating test restaurant entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test restaurants with customizable fields.
///
/// Default values are sourced from the restaurant fixture, with a unique name per
/// factory so several restaurants can coexist in one test.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::restaurant::RestaurantFactory;
///
/// let restaurant = RestaurantFactory::new(&db)
///     .name("Slice House")
///     .address(None)
///     .build()
///     .await?;
/// ```
pub struct RestaurantFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::restaurant::Model,
}

impl<'a> RestaurantFactory<'a> {
    /// Creates a new RestaurantFactory with default values from fixture.
    ///
    /// Defaults:
    /// - name: `"Dough Bros {id}"` where id is auto-incremented
    /// - address: fixture default address
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::restaurant::entity_builder()
            .name(format!("{} {}", fixture::restaurant::DEFAULT_NAME, id))
            .build();

        Self { db, entity }
    }

    /// Sets the restaurant name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the restaurant address.
    pub fn address(mut self, address: Option<&str>) -> Self {
        self.entity.address = address.map(str::to_string);
        self
    }

    /// Builds and inserts the restaurant entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::restaurant::Model)` - Created restaurant entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::restaurant::Model, DbErr> {
        entity::restaurant::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            address: ActiveValue::Set(self.entity.address),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a restaurant with default values.
///
/// Shorthand for `RestaurantFactory::new(db).build().await`.
pub async fn create_restaurant(
    db: &DatabaseConnection,
) -> Result<entity::restaurant::Model, DbErr> {
    RestaurantFactory::new(db).build().await
}
