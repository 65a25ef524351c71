//! Response bodies
//!
//! One struct per JSON shape the API returns. Nested entities use the
//! summary shapes, which carry no links of their own, so a hero never
//! expands back into its powers' heroes (and vice versa).

use serde::Serialize;

use crate::domain::entities::{
    Hero, HeroPower, HeroPowerDetail, HeroPowerWithHero, HeroPowerWithPower, HeroWithPowers,
    Power, PowerWithHeroes, Strength,
};

/// A hero without links (`GET /heroes`, and nested under links)
#[derive(Debug, Serialize)]
pub struct HeroResponse {
    pub id: i32,
    pub name: String,
    pub super_name: String,
}

impl From<Hero> for HeroResponse {
    fn from(hero: Hero) -> Self {
        Self {
            id: hero.id.0,
            name: hero.name,
            super_name: hero.super_name,
        }
    }
}

/// A power without links (`GET /powers`, and nested under links)
#[derive(Debug, Serialize)]
pub struct PowerResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl From<Power> for PowerResponse {
    fn from(power: Power) -> Self {
        Self {
            id: power.id.0,
            name: power.name,
            description: power.description,
        }
    }
}

/// `GET /heroes/:id`
#[derive(Debug, Serialize)]
pub struct HeroDetailResponse {
    pub id: i32,
    pub name: String,
    pub super_name: String,
    pub hero_powers: Vec<HeroPowerWithPowerResponse>,
}

impl From<HeroWithPowers> for HeroDetailResponse {
    fn from(detail: HeroWithPowers) -> Self {
        Self {
            id: detail.hero.id.0,
            name: detail.hero.name,
            super_name: detail.hero.super_name,
            hero_powers: detail.hero_powers.into_iter().map(Into::into).collect(),
        }
    }
}

/// A link under a hero: carries its power
#[derive(Debug, Serialize)]
pub struct HeroPowerWithPowerResponse {
    pub id: i32,
    pub strength: Strength,
    pub hero_id: i32,
    pub power_id: i32,
    pub power: PowerResponse,
}

impl From<HeroPowerWithPower> for HeroPowerWithPowerResponse {
    fn from(link: HeroPowerWithPower) -> Self {
        let HeroPower {
            id,
            strength,
            hero_id,
            power_id,
        } = link.hero_power;
        Self {
            id: id.0,
            strength,
            hero_id: hero_id.0,
            power_id: power_id.0,
            power: link.power.into(),
        }
    }
}

/// `GET /powers/:id` and `PATCH /powers/:id`
#[derive(Debug, Serialize)]
pub struct PowerDetailResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub hero_powers: Vec<HeroPowerWithHeroResponse>,
}

impl From<PowerWithHeroes> for PowerDetailResponse {
    fn from(detail: PowerWithHeroes) -> Self {
        Self {
            id: detail.power.id.0,
            name: detail.power.name,
            description: detail.power.description,
            hero_powers: detail.hero_powers.into_iter().map(Into::into).collect(),
        }
    }
}

/// A link under a power: carries its hero
#[derive(Debug, Serialize)]
pub struct HeroPowerWithHeroResponse {
    pub id: i32,
    pub strength: Strength,
    pub hero_id: i32,
    pub power_id: i32,
    pub hero: HeroResponse,
}

impl From<HeroPowerWithHero> for HeroPowerWithHeroResponse {
    fn from(link: HeroPowerWithHero) -> Self {
        let HeroPower {
            id,
            strength,
            hero_id,
            power_id,
        } = link.hero_power;
        Self {
            id: id.0,
            strength,
            hero_id: hero_id.0,
            power_id: power_id.0,
            hero: link.hero.into(),
        }
    }
}

/// `POST /hero_powers`
#[derive(Debug, Serialize)]
pub struct HeroPowerResponse {
    pub id: i32,
    pub strength: Strength,
    pub hero_id: i32,
    pub power_id: i32,
    pub hero: HeroResponse,
    pub power: PowerResponse,
}

impl From<HeroPowerDetail> for HeroPowerResponse {
    fn from(detail: HeroPowerDetail) -> Self {
        Self {
            id: detail.hero_power.id.0,
            strength: detail.hero_power.strength,
            hero_id: detail.hero_power.hero_id.0,
            power_id: detail.hero_power.power_id.0,
            hero: detail.hero.into(),
            power: detail.power.into(),
        }
    }
}
