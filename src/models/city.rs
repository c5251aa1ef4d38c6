// src/models/city.rs
// DOCUMENTATION: City entity and its request DTOs
// PURPOSE: A city always belongs to exactly one state

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::BaseModel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct City {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub base: BaseModel,

    /// Owning state, fixed at creation
    pub state_id: String,

    pub name: String,
}

/// Body of POST /states/{state_id}/cities
/// DOCUMENTATION: `state_id` comes from the path, never from the body
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCityRequest {
    #[validate(length(max = 128))]
    pub name: String,
}

/// Body of PUT /cities/{id}
/// DOCUMENTATION: Only mutable fields are listed; `id`, `state_id` and the
/// timestamps are dropped by serde as unknown keys
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCityRequest {
    #[validate(length(max = 128))]
    pub name: Option<String>,
}

impl City {
    pub fn new(state_id: &str, req: CreateCityRequest) -> Self {
        City {
            base: BaseModel::new(),
            state_id: state_id.to_string(),
            name: req.name,
        }
    }

    pub fn apply(&mut self, req: UpdateCityRequest) {
        if let Some(name) = req.name {
            self.name = name;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_ignores_immutable_keys() {
        let mut city = City::new(
            "state-1",
            CreateCityRequest {
                name: "Lyon".to_string(),
            },
        );
        let before = city.base.clone();

        let req: UpdateCityRequest = serde_json::from_value(serde_json::json!({
            "id": "other",
            "state_id": "state-2",
            "created_at": "2001-01-01T00:00:00.000000",
            "name": "Marseille",
            "population": 870000
        }))
        .unwrap();
        city.apply(req);

        assert_eq!(city.base, before);
        assert_eq!(city.state_id, "state-1");
        assert_eq!(city.name, "Marseille");
    }

    #[test]
    fn test_name_fits_column_width() {
        let fits = CreateCityRequest {
            name: "a".repeat(128),
        };
        assert!(fits.validate().is_ok());

        let too_long = UpdateCityRequest {
            name: Some("a".repeat(129)),
        };
        assert!(too_long.validate().is_err());
    }
}
