//! HeroPower domain entity
//!
//! The join between a hero and a power, carrying how strongly the hero
//! wields it.

use serde::{Deserialize, Serialize};

use super::hero::{Hero, HeroId};
use super::power::{Power, PowerId};
use crate::error::DomainError;

/// Unique identifier for a hero/power link (generated by the store)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HeroPowerId(pub i32);

impl From<i32> for HeroPowerId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for HeroPowerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How strongly a hero wields a power
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strength {
    Strong,
    Weak,
    Average,
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strength::Strong => write!(f, "Strong"),
            Strength::Weak => write!(f, "Weak"),
            Strength::Average => write!(f, "Average"),
        }
    }
}

impl std::str::FromStr for Strength {
    type Err = String;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Strong" => Ok(Strength::Strong),
            "Weak" => Ok(Strength::Weak),
            "Average" => Ok(Strength::Average),
            _ => Err(format!("Unknown strength: {}", s)),
        }
    }
}

/// Parse a strength, rejecting anything but `Strong`, `Weak` or `Average`.
pub fn validate_strength(strength: &str) -> Result<Strength, DomainError> {
    strength.parse().map_err(|_| {
        DomainError::Validation(
            "Strength must be one of the following values: 'Strong', 'Weak', 'Average'"
                .to_string(),
        )
    })
}

/// A link between a hero and a power
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroPower {
    pub id: HeroPowerId,
    pub strength: Strength,
    pub hero_id: HeroId,
    pub power_id: PowerId,
}

impl std::fmt::Display for HeroPower {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<HeroPower {}>", self.id)
    }
}

/// Data needed to create a new hero/power link
#[derive(Debug, Clone)]
pub struct NewHeroPower {
    pub strength: Strength,
    pub hero_id: HeroId,
    pub power_id: PowerId,
}

/// A link seen from the hero side: carries the linked power
#[derive(Debug, Clone)]
pub struct HeroPowerWithPower {
    pub hero_power: HeroPower,
    pub power: Power,
}

/// A link seen from the power side: carries the linked hero
#[derive(Debug, Clone)]
pub struct HeroPowerWithHero {
    pub hero_power: HeroPower,
    pub hero: Hero,
}

/// A freshly created link with both ends resolved
#[derive(Debug, Clone)]
pub struct HeroPowerDetail {
    pub hero_power: HeroPower,
    pub hero: Hero,
    pub power: Power,
}
