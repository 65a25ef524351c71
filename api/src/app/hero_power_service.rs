//! HeroPower service
//!
//! Links heroes to powers.

use std::sync::Arc;

use serde::Deserialize;

use crate::domain::entities::{validate_strength, HeroId, HeroPowerDetail, NewHeroPower, PowerId};
use crate::domain::ports::{HeroPowerRepository, HeroRepository, PowerRepository};
use crate::error::AppError;

/// A hero or power reference as it arrives in a request body
///
/// Clients send either a JSON number or a string. A string only matches a
/// row when it spells that row's integer id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(i32),
    Text(String),
}

impl RawId {
    /// `0` and `""` count as absent
    fn is_blank(&self) -> bool {
        match self {
            RawId::Number(id) => *id == 0,
            RawId::Text(text) => text.is_empty(),
        }
    }

    /// The row id this can match, if any
    fn as_id(&self) -> Option<i32> {
        match self {
            RawId::Number(id) => Some(*id),
            RawId::Text(text) => text.parse().ok(),
        }
    }
}

/// Service for creating hero/power links
pub struct HeroPowerService<HR, PR, HPR>
where
    HR: HeroRepository,
    PR: PowerRepository,
    HPR: HeroPowerRepository,
{
    heroes: Arc<HR>,
    powers: Arc<PR>,
    hero_powers: Arc<HPR>,
}

impl<HR, PR, HPR> HeroPowerService<HR, PR, HPR>
where
    HR: HeroRepository,
    PR: PowerRepository,
    HPR: HeroPowerRepository,
{
    pub fn new(heroes: Arc<HR>, powers: Arc<PR>, hero_powers: Arc<HPR>) -> Self {
        Self {
            heroes,
            powers,
            hero_powers,
        }
    }

    /// Link a hero to a power
    ///
    /// All three fields must be present and non-blank, the strength must be
    /// valid, and both referenced rows must exist.
    pub async fn create(
        &self,
        strength: Option<&str>,
        hero_id: Option<&RawId>,
        power_id: Option<&RawId>,
    ) -> Result<HeroPowerDetail, AppError> {
        let (strength, hero_id, power_id) = match (strength, hero_id, power_id) {
            (Some(s), Some(h), Some(p)) if !s.is_empty() && !h.is_blank() && !p.is_blank() => {
                (s, h, p)
            }
            _ => return Err(AppError::invalid("Missing required fields")),
        };

        let strength =
            validate_strength(strength).map_err(|_| AppError::invalid("validation errors"))?;

        let hero = match hero_id.as_id() {
            Some(id) => self.heroes.find_by_id(&HeroId(id)).await?,
            None => None,
        };
        let power = match power_id.as_id() {
            Some(id) => self.powers.find_by_id(&PowerId(id)).await?,
            None => None,
        };
        let (hero, power) = match (hero, power) {
            (Some(hero), Some(power)) => (hero, power),
            _ => {
                tracing::debug!(?hero_id, ?power_id, "Rejected link to unknown hero or power");
                return Err(AppError::UnresolvedReference(
                    "Hero or Power is not found".to_string(),
                ));
            }
        };

        let hero_power = self
            .hero_powers
            .create(&NewHeroPower {
                strength,
                hero_id: hero.id,
                power_id: power.id,
            })
            .await?;

        tracing::info!(
            hero_power_id = %hero_power.id,
            hero_id = %hero.id,
            power_id = %power.id,
            strength = %hero_power.strength,
            "Created {}",
            hero_power
        );

        Ok(HeroPowerDetail {
            hero_power,
            hero,
            power,
        })
    }
}
