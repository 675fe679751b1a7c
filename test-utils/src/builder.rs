use entity::prelude::{Pizza, Restaurant, RestaurantPizza};
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Collects the tables a test needs, then creates them in a fresh database.
///
/// ```rust,ignore
/// let test = TestBuilder::new().with_catalog_tables().build().await?;
/// let db = test.db.as_ref().unwrap();
/// ```
///
/// Tables are created in the order they are added, so parents go first.
pub struct TestBuilder {
    schema: Schema,
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            schema: Schema::new(DbBackend::Sqlite),
            tables: Vec::new(),
        }
    }

    /// Adds the table of a single entity, derived from its SeaORM model.
    ///
    /// Foreign keys declared through `belongs_to` relations come along with the table.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let stmt = self.schema.create_table_from_entity(entity);
        self.tables.push(stmt);
        self
    }

    /// Adds restaurants, pizzas and the menu entries joining them.
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(Restaurant)
            .with_table(Pizza)
            .with_table(RestaurantPizza)
    }

    /// Opens the database and creates every collected table.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::connect().await?;
        context.create_tables(&self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
