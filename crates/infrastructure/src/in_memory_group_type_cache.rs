//! In-memory group type cache adapter.

use async_trait::async_trait;
use pillars_application::GroupTypeCache;
use pillars_core::{AppResult, GroupTypeId};
use pillars_domain::GroupType;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory cache over group type reference data, primed by the host at
/// startup or as rows are first seen.
#[derive(Default)]
pub struct InMemoryGroupTypeCache {
    entries: RwLock<Vec<GroupType>>,
}

impl InMemoryGroupTypeCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces one cached group type.
    pub async fn prime(&self, group_type: GroupType) {
        let mut entries = self.entries.write().await;
        entries.retain(|entry| entry.id != group_type.id);
        entries.push(group_type);
    }
}

#[async_trait]
impl GroupTypeCache for InMemoryGroupTypeCache {
    async fn get_by_guid(&self, guid: Uuid) -> AppResult<Option<GroupType>> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .find(|entry| entry.guid == guid)
            .cloned())
    }

    async fn get_by_id(&self, id: GroupTypeId) -> AppResult<Option<GroupType>> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .find(|entry| entry.id == id)
            .cloned())
    }
}
