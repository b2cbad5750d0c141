use async_trait::async_trait;
use pillars_core::{AppResult, PersonId};
use pillars_domain::Person;
use uuid::Uuid;

/// Read-only port over people and their aliases.
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Returns the person behind an alias GUID.
    async fn find_person_by_alias_guid(&self, alias_guid: Uuid) -> AppResult<Option<Person>>;

    /// Lists people by row id. Ids without a matching row are skipped.
    async fn list_people_by_ids(&self, ids: &[PersonId]) -> AppResult<Vec<Person>>;
}
