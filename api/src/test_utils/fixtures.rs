//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use crate::domain::entities::{Hero, HeroId, NewHero, NewPower, Power, PowerId};

/// Create a test hero with the given id
pub fn test_hero(id: i32) -> Hero {
    Hero {
        id: HeroId(id),
        name: format!("Hero {}", id),
        super_name: format!("Super {}", id),
    }
}

/// Create a test power with the given id and a valid description
pub fn test_power(id: i32) -> Power {
    Power {
        id: PowerId(id),
        name: format!("power {}", id),
        description: format!("gives the wielder power number {}", id),
    }
}

/// Input for creating a hero
pub fn new_hero(name: &str, super_name: &str) -> NewHero {
    NewHero {
        name: name.to_string(),
        super_name: super_name.to_string(),
    }
}

/// Input for creating a power
pub fn new_power(name: &str, description: &str) -> NewPower {
    NewPower {
        name: name.to_string(),
        description: description.to_string(),
    }
}
