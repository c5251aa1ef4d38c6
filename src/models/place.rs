// src/models/place.rs
// DOCUMENTATION: Core data structures for places
// PURPOSE: Place entity plus the validated create/update DTOs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use super::BaseModel;

/// Represents a rentable place listed in a city
/// DOCUMENTATION: Maps directly to the places table; reviews reference it
/// through `Review::place_id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Place {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub base: BaseModel,

    /// City the place is listed in (fixed at creation)
    pub city_id: String,

    /// Owner (fixed at creation)
    pub user_id: String,

    pub name: String,

    pub description: Option<String>,

    pub number_rooms: i32,

    pub number_bathrooms: i32,

    pub max_guest: i32,

    /// Nightly price, whole currency units
    pub price_by_night: i32,

    pub latitude: Option<f64>,

    pub longitude: Option<f64>,
}

/// Request DTO for creating a new place
/// DOCUMENTATION: Data transfer object for POST /cities/{city_id}/places
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePlaceRequest {
    pub user_id: String,

    #[validate(length(max = 128))]
    pub name: String,

    #[validate(length(max = 1024))]
    pub description: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0, message = "number_rooms must be >= 0"))]
    pub number_rooms: i32,

    #[serde(default)]
    #[validate(range(min = 0, message = "number_bathrooms must be >= 0"))]
    pub number_bathrooms: i32,

    #[serde(default)]
    #[validate(range(min = 0, message = "max_guest must be >= 0"))]
    pub max_guest: i32,

    #[serde(default)]
    #[validate(range(min = 0, message = "price_by_night must be >= 0"))]
    pub price_by_night: i32,

    #[validate(custom = "validate_latitude")]
    pub latitude: Option<f64>,

    #[validate(custom = "validate_longitude")]
    pub longitude: Option<f64>,
}

/// Request DTO for updating a place
/// DOCUMENTATION: All fields optional; `city_id`, `user_id`, `id` and the
/// timestamps are not part of the DTO and are therefore never applied.
/// Nullable columns use a double option: absent leaves the value, `null` clears it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePlaceRequest {
    #[validate(length(max = 128))]
    pub name: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 1024))]
    pub description: Option<Option<String>>,

    #[validate(range(min = 0, message = "number_rooms must be >= 0"))]
    pub number_rooms: Option<i32>,

    #[validate(range(min = 0, message = "number_bathrooms must be >= 0"))]
    pub number_bathrooms: Option<i32>,

    #[validate(range(min = 0, message = "max_guest must be >= 0"))]
    pub max_guest: Option<i32>,

    #[validate(range(min = 0, message = "price_by_night must be >= 0"))]
    pub price_by_night: Option<i32>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(custom = "validate_latitude")]
    pub latitude: Option<Option<f64>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(custom = "validate_longitude")]
    pub longitude: Option<Option<f64>>,
}

fn validate_latitude(value: f64) -> Result<(), ValidationError> {
    coordinate_in_range(value, 90.0, "latitude must be within [-90, 90]")
}

fn validate_longitude(value: f64) -> Result<(), ValidationError> {
    coordinate_in_range(value, 180.0, "longitude must be within [-180, 180]")
}

fn coordinate_in_range(value: f64, bound: f64, message: &'static str) -> Result<(), ValidationError> {
    if (-bound..=bound).contains(&value) {
        return Ok(());
    }
    let mut error = ValidationError::new("range");
    error.message = Some(message.into());
    Err(error)
}

impl Place {
    pub fn new(city_id: &str, req: CreatePlaceRequest) -> Self {
        Place {
            base: BaseModel::new(),
            city_id: city_id.to_string(),
            user_id: req.user_id,
            name: req.name,
            description: req.description,
            number_rooms: req.number_rooms,
            number_bathrooms: req.number_bathrooms,
            max_guest: req.max_guest,
            price_by_night: req.price_by_night,
            latitude: req.latitude,
            longitude: req.longitude,
        }
    }

    /// Merge the supplied fields into this place
    pub fn apply(&mut self, req: UpdatePlaceRequest) {
        if let Some(name) = req.name {
            self.name = name;
        }
        if let Some(description) = req.description {
            self.description = description;
        }
        if let Some(number_rooms) = req.number_rooms {
            self.number_rooms = number_rooms;
        }
        if let Some(number_bathrooms) = req.number_bathrooms {
            self.number_bathrooms = number_bathrooms;
        }
        if let Some(max_guest) = req.max_guest {
            self.max_guest = max_guest;
        }
        if let Some(price_by_night) = req.price_by_night {
            self.price_by_night = price_by_night;
        }
        if let Some(latitude) = req.latitude {
            self.latitude = latitude;
        }
        if let Some(longitude) = req.longitude {
            self.longitude = longitude;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_defaults_and_validation() {
        let req: CreatePlaceRequest = serde_json::from_value(json!({
            "user_id": "u-1",
            "name": "Loft"
        }))
        .unwrap();
        assert_eq!(req.number_rooms, 0);
        assert!(req.validate().is_ok());

        let req: CreatePlaceRequest = serde_json::from_value(json!({
            "user_id": "u-1",
            "name": "Loft",
            "latitude": 120.0
        }))
        .unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_apply_keeps_owner_and_city() {
        let req: CreatePlaceRequest = serde_json::from_value(json!({
            "user_id": "u-1",
            "name": "Loft",
            "max_guest": 2
        }))
        .unwrap();
        let mut place = Place::new("c-1", req);

        let update: UpdatePlaceRequest = serde_json::from_value(json!({
            "user_id": "u-2",
            "city_id": "c-2",
            "max_guest": 4,
            "description": "Top floor"
        }))
        .unwrap();
        place.apply(update);

        assert_eq!(place.user_id, "u-1");
        assert_eq!(place.city_id, "c-1");
        assert_eq!(place.max_guest, 4);
        assert_eq!(place.description.as_deref(), Some("Top floor"));
        assert_eq!(place.name, "Loft");
    }

    #[test]
    fn test_update_null_clears_optional_fields() {
        let req: CreatePlaceRequest = serde_json::from_value(json!({
            "user_id": "u-1",
            "name": "Loft",
            "description": "Top floor",
            "latitude": 45.5,
            "longitude": -122.6
        }))
        .unwrap();
        let mut place = Place::new("c-1", req);

        let update: UpdatePlaceRequest = serde_json::from_value(json!({
            "description": null,
            "latitude": null
        }))
        .unwrap();
        assert!(update.validate().is_ok());
        place.apply(update);

        assert_eq!(place.description, None);
        assert_eq!(place.latitude, None);
        assert_eq!(place.longitude, Some(-122.6));
    }

    #[test]
    fn test_update_rejects_out_of_range_values() {
        let update: UpdatePlaceRequest =
            serde_json::from_value(json!({ "longitude": -181.0 })).unwrap();
        assert!(update.validate().is_err());

        let update: UpdatePlaceRequest =
            serde_json::from_value(json!({ "name": "x".repeat(129) })).unwrap();
        assert!(update.validate().is_err());

        let update: UpdatePlaceRequest =
            serde_json::from_value(json!({ "latitude": -90.0, "max_guest": 3 })).unwrap();
        assert!(update.validate().is_ok());
    }
}
