// src/models/base.rs
// DOCUMENTATION: Fields and behaviour shared by every entity
// PURPOSE: Identifier/timestamp factory, entity kinds, and the dictionary form

use chrono::{NaiveDateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::{Amenity, City, Place, Review, State, User};

/// Wire and file format for `created_at` / `updated_at`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Server-assigned fields carried by every entity
/// DOCUMENTATION: Flattened into each entity, so the dictionary form stays flat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct BaseModel {
    /// Unique identifier (UUID v4, stored as text)
    pub id: String,

    #[serde(with = "timestamp")]
    pub created_at: NaiveDateTime,

    #[serde(with = "timestamp")]
    pub updated_at: NaiveDateTime,
}

impl BaseModel {
    /// Fresh identifier plus creation/update timestamps
    /// DOCUMENTATION: The only place server-assigned fields are produced.
    /// Timestamps are truncated to microseconds so they survive a Postgres
    /// TIMESTAMP column and the text format unchanged.
    pub fn new() -> Self {
        let now = Utc::now().naive_utc().trunc_subsecs(6);
        BaseModel {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Default for BaseModel {
    fn default() -> Self {
        Self::new()
    }
}

/// serde adapter for `TIMESTAMP_FORMAT`
pub mod timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}

/// The six resource types known to storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    Amenity,
    City,
    Place,
    Review,
    State,
    User,
}

impl Kind {
    pub const ALL: [Kind; 6] = [
        Kind::Amenity,
        Kind::City,
        Kind::Place,
        Kind::Review,
        Kind::State,
        Kind::User,
    ];

    /// Class name used as the `__class__` discriminator and file-storage key prefix
    pub fn class_name(&self) -> &'static str {
        match self {
            Kind::Amenity => "Amenity",
            Kind::City => "City",
            Kind::Place => "Place",
            Kind::Review => "Review",
            Kind::State => "State",
            Kind::User => "User",
        }
    }

    /// Plural name used by `/stats` and as the SQL table name
    pub fn plural(&self) -> &'static str {
        match self {
            Kind::Amenity => "amenities",
            Kind::City => "cities",
            Kind::Place => "places",
            Kind::Review => "reviews",
            Kind::State => "states",
            Kind::User => "users",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

impl FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.class_name() == s)
            .ok_or_else(|| format!("unknown class: {}", s))
    }
}

/// Dictionary form of any entity
/// DOCUMENTATION: Serializes as the entity's fields plus a `__class__` key.
/// Used for every API response and as the on-disk format of the file engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "__class__")]
pub enum Record {
    Amenity(Amenity),
    City(City),
    Place(Place),
    Review(Review),
    State(State),
    User(User),
}

impl Record {
    pub fn kind(&self) -> Kind {
        match self {
            Record::Amenity(_) => Kind::Amenity,
            Record::City(_) => Kind::City,
            Record::Place(_) => Kind::Place,
            Record::Review(_) => Kind::Review,
            Record::State(_) => Kind::State,
            Record::User(_) => Kind::User,
        }
    }

    pub fn base(&self) -> &BaseModel {
        match self {
            Record::Amenity(e) => &e.base,
            Record::City(e) => &e.base,
            Record::Place(e) => &e.base,
            Record::Review(e) => &e.base,
            Record::State(e) => &e.base,
            Record::User(e) => &e.base,
        }
    }

    pub fn id(&self) -> &str {
        &self.base().id
    }

    /// File-storage key: `<Class>.<id>`
    pub fn key(&self) -> String {
        storage_key(self.kind(), self.id())
    }
}

pub fn storage_key(kind: Kind, id: &str) -> String {
    format!("{}.{}", kind.class_name(), id)
}

/// Typed view over one `Record` variant
pub trait Entity: Clone + Send + Sync + Sized + 'static {
    const KIND: Kind;

    fn base(&self) -> &BaseModel;

    fn into_record(self) -> Record;

    fn from_record(record: Record) -> Option<Self>;

    fn id(&self) -> &str {
        &self.base().id
    }

    fn to_dict(&self) -> Record {
        self.clone().into_record()
    }
}

macro_rules! impl_entity {
    ($($ty:ident),* $(,)?) => {
        $(
            impl Entity for $ty {
                const KIND: Kind = Kind::$ty;

                fn base(&self) -> &BaseModel {
                    &self.base
                }

                fn into_record(self) -> Record {
                    Record::$ty(self)
                }

                fn from_record(record: Record) -> Option<Self> {
                    match record {
                        Record::$ty(entity) => Some(entity),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for Record {
                fn from(entity: $ty) -> Self {
                    Record::$ty(entity)
                }
            }
        )*
    };
}

impl_entity!(Amenity, City, Place, Review, State, User);

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_base_model_factory() {
        let a = BaseModel::new();
        let b = BaseModel::new();

        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
        assert_eq!(a.created_at, a.updated_at);
        assert_eq!(a.created_at.nanosecond() % 1000, 0);
    }

    #[test]
    fn test_dictionary_form_has_class_discriminator() {
        let state = State {
            base: BaseModel::new(),
            name: "California".to_string(),
        };
        let value = serde_json::to_value(state.to_dict()).unwrap();

        assert_eq!(value["__class__"], "State");
        assert_eq!(value["name"], "California");
        assert_eq!(value["id"], state.base.id.as_str());
        assert!(value["created_at"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn test_record_parses_back() {
        let city = City {
            base: BaseModel::new(),
            state_id: "s-1".to_string(),
            name: "Lyon".to_string(),
        };
        let text = serde_json::to_string(&city.to_dict()).unwrap();
        let record: Record = serde_json::from_str(&text).unwrap();

        assert_eq!(record.kind(), Kind::City);
        assert_eq!(City::from_record(record), Some(city));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!("Review".parse::<Kind>(), Ok(Kind::Review));
        assert!("Reviews".parse::<Kind>().is_err());
        assert_eq!(Kind::City.plural(), "cities");
        assert_eq!(storage_key(Kind::User, "42"), "User.42");
    }
}
