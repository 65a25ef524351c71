//! Schema migrations
//!
//! Migrations are applied in order inside a single transaction. The applied
//! version is mirrored to `PRAGMA user_version`, so re-running is a no-op.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Statement, TransactionTrait};

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: i32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("../../../migrations/0001_init.sql"),
}];

/// Latest schema version this binary knows about
pub fn latest_version() -> i32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Apply every migration newer than the database's current version.
pub async fn apply(db: &DatabaseConnection) -> Result<(), DbErr> {
    let current = current_version(db).await?;
    let latest = latest_version();

    if current > latest {
        return Err(DbErr::Custom(format!(
            "Database schema version {} is newer than the latest supported version {}",
            current, latest
        )));
    }

    if current == latest {
        tracing::debug!(version = current, "Schema is up to date");
        return Ok(());
    }

    let txn = db.begin().await?;
    for migration in MIGRATIONS.iter().filter(|m| m.version > current) {
        for statement in migration
            .sql
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            txn.execute_unprepared(statement).await?;
        }
        txn.execute_unprepared(&format!("PRAGMA user_version = {}", migration.version))
            .await?;
        tracing::info!(version = migration.version, "Applied migration");
    }
    txn.commit().await?;

    Ok(())
}

/// Schema version recorded in the database (0 for a fresh file)
pub async fn current_version(db: &DatabaseConnection) -> Result<i32, DbErr> {
    let row = db
        .query_one(Statement::from_string(
            db.get_database_backend(),
            "PRAGMA user_version",
        ))
        .await?;

    match row {
        Some(row) => row.try_get_by_index::<i32>(0),
        None => Ok(0),
    }
}
