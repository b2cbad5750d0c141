//! Postgres adapter for the group store port.

use async_trait::async_trait;
use pillars_application::GroupStore;
use pillars_core::{AppError, AppResult, GroupId, GroupTypeId};
use pillars_domain::{Group, GroupMatch, GroupType, NewGroup};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// Postgres-backed group store over the host's group tables.
#[derive(Clone)]
pub struct PostgresGroupStore {
    pool: PgPool,
}

impl PostgresGroupStore {
    /// Creates a group store with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct GroupTypeRow {
    id: i32,
    guid: Uuid,
    name: String,
}

#[derive(Debug, FromRow)]
struct GroupRow {
    id: i32,
    guid: Uuid,
    group_type_id: i32,
    name: String,
    parent_group_id: Option<i32>,
}

impl From<GroupRow> for Group {
    fn from(row: GroupRow) -> Self {
        Self {
            id: GroupId::new(row.id),
            guid: row.guid,
            group_type_id: GroupTypeId::new(row.group_type_id),
            name: row.name,
            parent_group_id: row.parent_group_id.map(GroupId::new),
        }
    }
}

#[async_trait]
impl GroupStore for PostgresGroupStore {
    async fn find_group_type_by_guid(&self, guid: Uuid) -> AppResult<Option<GroupType>> {
        let row = sqlx::query_as::<_, GroupTypeRow>(
            r#"
            SELECT id, guid, name
            FROM group_types
            WHERE guid = $1
            "#,
        )
        .bind(guid)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to resolve group type: {error}")))?;

        Ok(row.map(|row| GroupType {
            id: GroupTypeId::new(row.id),
            guid: row.guid,
            name: row.name,
        }))
    }

    async fn find_group_by_guid(&self, guid: Uuid) -> AppResult<Option<Group>> {
        let row = sqlx::query_as::<_, GroupRow>(
            r#"
            SELECT id, guid, group_type_id, name, parent_group_id
            FROM groups
            WHERE guid = $1
            "#,
        )
        .bind(guid)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to resolve group: {error}")))?;

        Ok(row.map(Group::from))
    }

    async fn find_matching_group(&self, key: &GroupMatch) -> AppResult<Option<Group>> {
        let row = sqlx::query_as::<_, GroupRow>(
            r#"
            SELECT id, guid, group_type_id, name, parent_group_id
            FROM groups
            WHERE group_type_id = $1
              AND name = $2
              AND parent_group_id IS NOT DISTINCT FROM $3
            LIMIT 1
            "#,
        )
        .bind(key.group_type_id.as_i32())
        .bind(key.name.as_str())
        .bind(key.parent_group_id.map(GroupId::as_i32))
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to search for an existing group: {error}"))
        })?;

        Ok(row.map(Group::from))
    }

    async fn add_group(&self, input: NewGroup) -> AppResult<Group> {
        let guid = Uuid::new_v4();

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO groups (guid, group_type_id, name, parent_group_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(guid)
        .bind(input.group_type_id.as_i32())
        .bind(input.name.as_str())
        .bind(input.parent_group_id.map(GroupId::as_i32))
        .fetch_one(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to insert group: {error}")))?;

        Ok(Group {
            id: GroupId::new(id),
            guid,
            group_type_id: input.group_type_id,
            name: input.name,
            parent_group_id: input.parent_group_id,
        })
    }
}
