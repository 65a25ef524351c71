//! Hero domain entity
//!
//! A character with a name and an alias. Heroes gain powers through
//! [`HeroPower`](super::HeroPower) links.

use serde::{Deserialize, Serialize};

use super::hero_power::HeroPowerWithPower;

/// Unique identifier for a hero (generated by the store)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HeroId(pub i32);

impl From<i32> for HeroId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for HeroId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A hero
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
    pub super_name: String,
}

impl std::fmt::Display for Hero {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Hero {}>", self.id)
    }
}

/// Data needed to create a new hero
#[derive(Debug, Clone)]
pub struct NewHero {
    pub name: String,
    pub super_name: String,
}

/// A hero together with each of its power links and the linked power
#[derive(Debug, Clone)]
pub struct HeroWithPowers {
    pub hero: Hero,
    pub hero_powers: Vec<HeroPowerWithPower>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_display_matches_repr() {
        let hero = Hero {
            id: HeroId(7),
            name: "Kamala Khan".to_string(),
            super_name: "Ms. Marvel".to_string(),
        };
        assert_eq!(hero.to_string(), "<Hero 7>");
    }

    #[test]
    fn hero_id_serializes_as_bare_integer() {
        let json = serde_json::to_string(&HeroId(3)).unwrap();
        assert_eq!(json, "3");
    }
}
