use async_trait::async_trait;
use pillars_core::{AppResult, GroupTypeId};
use pillars_domain::{Group, GroupMatch, GroupType, NewGroup};
use uuid::Uuid;

/// Port over groups and group type reference data.
#[async_trait]
pub trait GroupStore: Send + Sync {
    /// Returns one group type by GUID.
    async fn find_group_type_by_guid(&self, guid: Uuid) -> AppResult<Option<GroupType>>;

    /// Returns one group by GUID.
    async fn find_group_by_guid(&self, guid: Uuid) -> AppResult<Option<Group>>;

    /// Returns one group matching an exact (type, name, parent) tuple.
    async fn find_matching_group(&self, key: &GroupMatch) -> AppResult<Option<Group>>;

    /// Persists one group row.
    async fn add_group(&self, input: NewGroup) -> AppResult<Group>;
}

/// Cache port over group type reference data. The cache may lag the
/// datastore; callers fall back to [`GroupStore`] on a GUID miss.
#[async_trait]
pub trait GroupTypeCache: Send + Sync {
    /// Returns one cached group type by GUID.
    async fn get_by_guid(&self, guid: Uuid) -> AppResult<Option<GroupType>>;

    /// Returns one cached group type by row id.
    async fn get_by_id(&self, id: GroupTypeId) -> AppResult<Option<GroupType>>;
}
