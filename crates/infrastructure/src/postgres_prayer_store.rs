//! Postgres adapter for the prayer request and category ports.

use async_trait::async_trait;
use pillars_application::{CategoryStore, PrayerRequestStore};
use pillars_core::{AppError, AppResult, CampusId, CategoryId, PrayerRequestId};
use pillars_domain::{Category, NewPrayerRequest, PrayerRequest};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// Postgres-backed prayer request store over the host's prayer tables.
#[derive(Clone)]
pub struct PostgresPrayerStore {
    pool: PgPool,
}

impl PostgresPrayerStore {
    /// Creates a prayer store with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i32,
    guid: Uuid,
    name: String,
}

#[async_trait]
impl PrayerRequestStore for PostgresPrayerStore {
    async fn add_prayer_request(&self, input: NewPrayerRequest) -> AppResult<PrayerRequest> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO prayer_requests (
                requested_by_person_alias_id,
                first_name,
                last_name,
                email,
                text,
                is_public,
                is_active,
                is_approved,
                allow_comments,
                campus_id,
                category_id,
                entered_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id
            "#,
        )
        .bind(input.requested_by_person_alias_id.as_i32())
        .bind(input.first_name.as_str())
        .bind(input.last_name.as_str())
        .bind(input.email.as_deref())
        .bind(input.text.as_str())
        .bind(input.is_public)
        .bind(input.is_active)
        .bind(input.is_approved)
        .bind(input.allow_comments)
        .bind(input.campus_id.map(CampusId::as_i32))
        .bind(input.category_id.map(CategoryId::as_i32))
        .bind(input.entered_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to insert prayer request: {error}")))?;

        Ok(PrayerRequest {
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
        })
    }
}

#[async_trait]
impl CategoryStore for PostgresPrayerStore {
    async fn find_category_by_guid(&self, guid: Uuid) -> AppResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, guid, name
            FROM categories
            WHERE guid = $1
            "#,
        )
        .bind(guid)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to resolve category: {error}")))?;

        Ok(row.map(|row| Category {
            id: CategoryId::new(row.id),
            guid: row.guid,
            name: row.name,
        }))
    }
}
