//! In-memory campus cache adapter.

use async_trait::async_trait;
use pillars_application::CampusCache;
use pillars_core::AppResult;
use pillars_domain::Campus;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory cache over campus reference data.
#[derive(Default)]
pub struct InMemoryCampusCache {
    entries: RwLock<Vec<Campus>>,
}

impl InMemoryCampusCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces one cached campus.
    pub async fn prime(&self, campus: Campus) {
        let mut entries = self.entries.write().await;
        entries.retain(|entry| entry.id != campus.id);
        entries.push(campus);
    }
}

#[async_trait]
impl CampusCache for InMemoryCampusCache {
    async fn get_by_guid(&self, guid: Uuid) -> AppResult<Option<Campus>> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .find(|entry| entry.guid == guid)
            .cloned())
    }
}
