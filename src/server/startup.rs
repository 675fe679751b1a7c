use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::server::{config::Config, error::AppError};

/// Opens the catalog database and brings its schema up to date.
///
/// SQLx statement logging is turned off; request logging comes from the HTTP layer.
/// The server must not accept requests before this has returned `Ok`.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Pool over a database holding all catalog tables
/// - `Err(AppError::DbErr)` - The database is unreachable or a migration failed
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database ready at {}", config.database_url);

    Ok(db)
}
