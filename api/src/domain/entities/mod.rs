//! Domain entities
//!
//! Pure domain models representing heroes, powers and the links between them.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod hero;
pub mod hero_power;
pub mod power;

pub use hero::{Hero, HeroId, HeroWithPowers, NewHero};
pub use hero_power::{
    validate_strength, HeroPower, HeroPowerDetail, HeroPowerId, HeroPowerWithHero,
    HeroPowerWithPower, NewHeroPower, Strength,
};
pub use power::{validate_description, NewPower, Power, PowerId, PowerWithHeroes};
