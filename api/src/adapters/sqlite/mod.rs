//! SQLite adapters
//!
//! Implementations of repository traits using SeaORM and SQLite.

pub mod hero_power_repo;
pub mod hero_repo;
pub mod migrations;
pub mod power_repo;


pub use hero_power_repo::SqliteHeroPowerRepository;
pub use hero_repo::SqliteHeroRepository;
pub use power_repo::SqlitePowerRepository;

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::error::DomainError;

/// Lifetime and idle timeout of the connection behind an in-memory database
const MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// Open a connection pool and bring the schema up to date.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(connect_options(database_url)).await?;
    migrations::apply(&db).await?;

    Ok(db)
}

/// Pool options for `database_url`.
///
/// An in-memory database lives and dies with its connection, so it gets a
/// single pooled connection that is never recycled.
fn connect_options(database_url: &str) -> ConnectOptions {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options.sqlx_logging(false);
    if database_url.contains(":memory:") {
        options
            .max_connections(1)
            .min_connections(1)
            .max_lifetime(MEMORY_CONNECTION_LIFETIME)
            .idle_timeout(MEMORY_CONNECTION_LIFETIME);
    }
    options
}

/// Map a SeaORM error to a domain error.
///
/// `DbErr::Custom` only comes from the entity `before_save` hooks, which
/// carry a validation message.
fn db_error(e: DbErr) -> DomainError {
    match e {
        DbErr::Custom(msg) => DomainError::Validation(msg),
        e => DomainError::Database(e.to_string()),
    }
}
