// src/services/cascade.rs
// DOCUMENTATION: Parent -> child delete policy
// PURPOSE: Stage the deletion of an entity together with everything that references it

use crate::db::{Session, StorageError};
use crate::models::{City, Kind, Place, Review};
use std::collections::BTreeSet;

/// Stage `kind`/`id` and its dependents for deletion
/// DOCUMENTATION: Cascade rules:
///   State -> Cities, City -> Places, Place -> Reviews,
///   User  -> owned Places (and their Reviews) and authored Reviews.
/// Dependents are staged children first, the root last, so the db engine's
/// foreign keys hold at every step of the commit.
/// Returns the number of dependents staged (root excluded).
pub async fn stage_delete(
    session: &mut Session,
    kind: Kind,
    id: &str,
) -> Result<usize, StorageError> {
    let city_ids: BTreeSet<String> = match kind {
        Kind::State => session
            .all_of::<City>()
            .await?
            .into_iter()
            .filter(|city| city.state_id == id)
            .map(|city| city.base.id)
            .collect(),
        Kind::City => BTreeSet::from([id.to_string()]),
        _ => BTreeSet::new(),
    };

    let place_ids: BTreeSet<String> = match kind {
        Kind::State | Kind::City => session
            .all_of::<Place>()
            .await?
            .into_iter()
            .filter(|place| city_ids.contains(&place.city_id))
            .map(|place| place.base.id)
            .collect(),
        Kind::User => session
            .all_of::<Place>()
            .await?
            .into_iter()
            .filter(|place| place.user_id == id)
            .map(|place| place.base.id)
            .collect(),
        Kind::Place => BTreeSet::from([id.to_string()]),
        _ => BTreeSet::new(),
    };

    let review_ids: BTreeSet<String> = match kind {
        Kind::State | Kind::City | Kind::Place | Kind::User => session
            .all_of::<Review>()
            .await?
            .into_iter()
            .filter(|review| {
                place_ids.contains(&review.place_id) || (kind == Kind::User && review.user_id == id)
            })
            .map(|review| review.base.id)
            .collect(),
        _ => BTreeSet::new(),
    };

    let mut staged = 0;
    for (child_kind, ids) in [
        (Kind::Review, &review_ids),
        (Kind::Place, &place_ids),
        (Kind::City, &city_ids),
    ] {
        // the root itself may sit in its own kind's set
        for child_id in ids.iter().filter(|_| child_kind != kind) {
            session.delete_by_id(child_kind, child_id);
            staged += 1;
        }
    }
    session.delete_by_id(kind, id);

    if staged > 0 {
        log::info!("Deleting {} {} cascades to {} dependents", kind, id, staged);
    }
    Ok(staged)
}
