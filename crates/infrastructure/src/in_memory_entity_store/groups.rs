use async_trait::async_trait;
use pillars_application::GroupStore;
use pillars_core::{AppResult, GroupId};
use pillars_domain::{Group, GroupMatch, GroupType, NewGroup};
use uuid::Uuid;

use super::InMemoryEntityStore;

#[async_trait]
impl GroupStore for InMemoryEntityStore {
    async fn find_group_type_by_guid(&self, guid: Uuid) -> AppResult<Option<GroupType>> {
        Ok(self
            .state
            .read()
            .await
            .group_types
            .iter()
            .find(|group_type| group_type.guid == guid)
            .cloned())
    }

    async fn find_group_by_guid(&self, guid: Uuid) -> AppResult<Option<Group>> {
        Ok(self
            .state
            .read()
            .await
            .groups
            .iter()
            .find(|group| group.guid == guid)
            .cloned())
    }

    async fn find_matching_group(&self, key: &GroupMatch) -> AppResult<Option<Group>> {
        Ok(self
            .state
            .read()
            .await
            .groups
            .iter()
            .find(|group| group.matches(key))
            .cloned())
    }

    async fn add_group(&self, input: NewGroup) -> AppResult<Group> {
        let mut state = self.state.write().await;
        let id = state.reserve_id();
        let group = Group {
            id: GroupId::new(id),
            guid: Uuid::new_v4(),
            group_type_id: input.group_type_id,
            name: input.name,
            parent_group_id: input.parent_group_id,
        };
        state.groups.push(group.clone());
        Ok(group)
    }
}
