// src/services/stats_service.rs
// DOCUMENTATION: Aggregate counts for GET /stats
// PURPOSE: One count per known entity kind, keyed by plural name

use crate::db::Session;
use crate::errors::ApiError;
use crate::models::Kind;
use std::collections::BTreeMap;

pub struct StatsService;

impl StatsService {
    /// Count of every entity kind
    /// DOCUMENTATION: Any storage failure aborts the whole report
    pub async fn counts(session: &Session) -> Result<BTreeMap<&'static str, usize>, ApiError> {
        let mut counts = BTreeMap::new();
        for kind in Kind::ALL {
            counts.insert(kind.plural(), session.count(Some(kind)).await?);
        }
        Ok(counts)
    }
}
