use async_trait::async_trait;
use pillars_core::AppResult;
use pillars_domain::{Campus, Category, NewPrayerRequest, PrayerRequest};
use uuid::Uuid;

/// Port over prayer requests.
#[async_trait]
pub trait PrayerRequestStore: Send + Sync {
    /// Persists one prayer request row.
    async fn add_prayer_request(&self, input: NewPrayerRequest) -> AppResult<PrayerRequest>;
}

/// Cache port over campus reference data.
#[async_trait]
pub trait CampusCache: Send + Sync {
    /// Returns one cached campus by GUID.
    async fn get_by_guid(&self, guid: Uuid) -> AppResult<Option<Campus>>;
}

/// Read-only port over categorization entries.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Returns one category by GUID.
    async fn find_category_by_guid(&self, guid: Uuid) -> AppResult<Option<Category>>;
}
