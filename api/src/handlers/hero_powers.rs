//! HeroPower handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;

use super::responses::HeroPowerResponse;
use crate::app::RawId;
use crate::error::AppError;
use crate::AppState;

/// Request body for linking a hero to a power
///
/// Every field is optional here so that absent fields are reported as
/// "Missing required fields" rather than as a malformed body. Ids may be
/// numbers or numeric strings.
#[derive(Debug, Deserialize)]
pub struct CreateHeroPowerRequest {
    pub strength: Option<String>,
    pub power_id: Option<RawId>,
    pub hero_id: Option<RawId>,
}

/// POST /hero_powers
///
/// Link an existing hero to an existing power.
pub async fn create_hero_power(
    State(state): State<AppState>,
    body: Result<Json<CreateHeroPowerRequest>, JsonRejection>,
) -> Result<Json<HeroPowerResponse>, AppError> {
    let Json(request) = body?;

    let hero_power = state
        .hero_power_service
        .create(
            request.strength.as_deref(),
            request.hero_id.as_ref(),
            request.power_id.as_ref(),
        )
        .await?;

    Ok(Json(hero_power.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_create_request_full() {
        let json = r#"{"strength": "Average", "power_id": 1, "hero_id": 3}"#;
        let request: CreateHeroPowerRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.strength.as_deref(), Some("Average"));
        assert_eq!(request.power_id, Some(RawId::Number(1)));
        assert_eq!(request.hero_id, Some(RawId::Number(3)));
    }

    #[test]
    fn parse_create_request_missing_fields() {
        let request: CreateHeroPowerRequest = serde_json::from_str("{}").unwrap();
        assert!(request.strength.is_none());
        assert!(request.power_id.is_none());
        assert!(request.hero_id.is_none());
    }

    #[test]
    fn parse_create_request_null_counts_as_missing() {
        let json = r#"{"strength": null, "power_id": 1, "hero_id": 1}"#;
        let request: CreateHeroPowerRequest = serde_json::from_str(json).unwrap();
        assert!(request.strength.is_none());
    }

    #[test]
    fn parse_create_request_string_ids() {
        let json = r#"{"strength": "Weak", "power_id": "2", "hero_id": "abc"}"#;
        let request: CreateHeroPowerRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.power_id, Some(RawId::Text("2".to_string())));
        assert_eq!(request.hero_id, Some(RawId::Text("abc".to_string())));
    }

    #[test]
    fn parse_create_request_rejects_other_id_types() {
        let json = r#"{"strength": "Weak", "power_id": [1], "hero_id": 1}"#;
        let result: Result<CreateHeroPowerRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
