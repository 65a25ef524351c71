//! SeaORM entities
//!
//! Table-level models for the `heroes`, `powers` and `hero_powers` tables.
//! The `before_save` hooks re-run the domain validation so nothing invalid
//! reaches the store, whichever path the write comes from.

pub mod hero_powers;
pub mod heroes;
pub mod powers;

use sea_orm::DbErr;

use crate::error::DomainError;

/// Turn a failed domain check into the error a `before_save` hook returns.
///
/// Adapters map `DbErr::Custom` back to `DomainError::Validation`.
fn reject(error: DomainError) -> DbErr {
    match error {
        DomainError::Validation(msg) => DbErr::Custom(msg),
        other => DbErr::Custom(other.to_string()),
    }
}
