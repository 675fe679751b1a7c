//! Pizza factory for creating test pizza entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test pizzas with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::pizza::PizzaFactory;
///
/// let pizza = PizzaFactory::new(&db)
///     .name("Hawaiian")
///     .ingredients(Some("Ham, pineapple"))
///     .build()
///     .await?;
/// ```
pub struct PizzaFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::pizza::Model,
}

impl<'a> PizzaFactory<'a> {
    /// Creates a new PizzaFactory with default values from fixture.
    ///
    /// Defaults:
    /// - name: `"Margherita {id}"` where id is auto-incremented
    /// - ingredients: fixture default ingredients
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::pizza::entity_builder()
            .name(format!("{} {}", fixture::pizza::DEFAULT_NAME, id))
            .build();

        Self { db, entity }
    }

    /// Sets the pizza name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the ingredients description.
    pub fn ingredients(mut self, ingredients: Option<&str>) -> Self {
        self.entity.ingredients = ingredients.map(str::to_string);
        self
    }

    /// Builds and inserts the pizza entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::pizza::Model)` - Created pizza entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::pizza::Model, DbErr> {
        entity::pizza::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            ingredients: ActiveValue::Set(self.entity.ingredients),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pizza with default values.
///
/// Shorthand for `PizzaFactory::new(db).build().await`.
pub async fn create_pizza(db: &DatabaseConnection) -> Result<entity::pizza::Model, DbErr> {
    PizzaFactory::new(db).build().await
}
