use async_trait::async_trait;
use pillars_application::{CategoryStore, PrayerRequestStore};
use pillars_core::{AppResult, PrayerRequestId};
use pillars_domain::{Category, NewPrayerRequest, PrayerRequest};
use uuid::Uuid;

use super::InMemoryEntityStore;

#[async_trait]
impl PrayerRequestStore for InMemoryEntityStore {
    async fn add_prayer_request(&self, input: NewPrayerRequest) -> AppResult<PrayerRequest> {
        let mut state = self.state.write().await;
        let id = state.reserve_id();
        let request = PrayerRequest {
            id: PrayerRequestId::new(id),
            requested_by_person_alias_id: input.requested_by_person_alias_id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            text: input.text,
            is_public: input.is_public,
            is_active: input.is_active,
            is_approved: input.is_approved,
            allow_comments: input.allow_comments,
            campus_id: input.campus_id,
            category_id: input.category_id,
            entered_at: input.entered_at,
        };
        state.prayer_requests.push(request.clone());
        Ok(request)
    }
}

#[async_trait]
impl CategoryStore for InMemoryEntityStore {
    async fn find_category_by_guid(&self, guid: Uuid) -> AppResult<Option<Category>> {
        Ok(self
            .state
            .read()
            .await
            .categories
            .iter()
            .find(|category| category.guid == guid)
            .cloned())
    }
}
