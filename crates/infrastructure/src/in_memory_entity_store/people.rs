use async_trait::async_trait;
use pillars_application::PersonStore;
use pillars_core::{AppResult, PersonId};
use pillars_domain::Person;
use uuid::Uuid;

use super::InMemoryEntityStore;

#[async_trait]
impl PersonStore for InMemoryEntityStore {
    async fn find_person_by_alias_guid(&self, alias_guid: Uuid) -> AppResult<Option<Person>> {
        let state = self.state.read().await;
        Ok(state
            .aliases
            .iter()
            .find(|alias| alias.guid == alias_guid)
            .and_then(|alias| state.people.get(&alias.person_id.as_i32()).cloned()))
    }

    async fn list_people_by_ids(&self, ids: &[PersonId]) -> AppResult<Vec<Person>> {
        let state = self.state.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| state.people.get(&id.as_i32()).cloned())
            .collect())
    }
}
