//! Power domain entity
//!
//! An ability that heroes can hold. Every stored description must pass
//! [`validate_description`].

use serde::{Deserialize, Serialize};

use super::hero_power::HeroPowerWithHero;
use crate::error::DomainError;

/// Minimum description length, in characters
pub const MIN_DESCRIPTION_LEN: usize = 20;

/// Unique identifier for a power (generated by the store)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PowerId(pub i32);

impl From<i32> for PowerId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PowerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A power
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Power {
    pub id: PowerId,
    pub name: String,
    pub description: String,
}

impl std::fmt::Display for Power {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Power {}>", self.id)
    }
}

/// Data needed to create a new power
#[derive(Debug, Clone)]
pub struct NewPower {
    pub name: String,
    pub description: String,
}

/// A power together with each of its hero links and the linked hero
#[derive(Debug, Clone)]
pub struct PowerWithHeroes {
    pub power: Power,
    pub hero_powers: Vec<HeroPowerWithHero>,
}

/// Check that a description is present and at least [`MIN_DESCRIPTION_LEN`] characters long.
///
/// Length is counted in characters, not bytes.
pub fn validate_description(description: &str) -> Result<(), DomainError> {
    if description.is_empty() || description.chars().count() < MIN_DESCRIPTION_LEN {
        return Err(DomainError::Validation(
            "Description must be present and at least 20 characters long.".to_string(),
        ));
    }
    Ok(())
}
