use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Connection string for a private, throwaway SQLite database.
const IN_MEMORY_URL: &str = "sqlite::memory:";

/// A prepared catalog database owned by a single test.
///
/// Every context gets its own in-memory SQLite database, so tests never observe each
/// other's rows and IDs always start at 1. Dropping the context drops the database.
pub struct TestContext {
    /// Connection to the test database, set once `connect` has run.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    /// Opens a fresh in-memory database with foreign key enforcement turned on.
    ///
    /// Enforcement matters here: cascading deletes from restaurants and pizzas to their
    /// menu entries only happen when SQLite checks the constraints.
    pub async fn connect() -> Result<Self, TestError> {
        let db = Database::connect(IN_MEMORY_URL).await?;
        db.execute_unprepared("PRAGMA foreign_keys = ON").await?;

        Ok(Self { db: Some(db) })
    }

    /// Runs the given `CREATE TABLE` statements in order.
    ///
    /// Referenced tables must come before the tables pointing at them.
    pub async fn create_tables(&self, stmts: &[TableCreateStatement]) -> Result<(), TestError> {
        let Some(db) = self.db.as_ref() else {
            return Ok(());
        };

        for stmt in stmts {
            db.execute(stmt).await?;
        }

        Ok(())
    }
}
