// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Mount every route group under /api/v1

pub mod amenities;
pub mod cities;
pub mod extract;
pub mod index;
pub mod places;
pub mod places_reviews;
pub mod states;
pub mod users;

pub use index::not_found;

use crate::models::{Entity, Record};
use actix_web::web;

/// Configuration for all API routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(index::config)
            .configure(states::config)
            .configure(cities::config)
            .configure(amenities::config)
            .configure(users::config)
            .configure(places::config)
            .configure(places_reviews::config),
    );
}

/// Dictionary forms of a list of entities
fn to_dicts<E: Entity>(entities: &[E]) -> Vec<Record> {
    entities.iter().map(Entity::to_dict).collect()
}
