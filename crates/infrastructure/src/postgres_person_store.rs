//! Postgres adapter for the person store port.

use async_trait::async_trait;
use pillars_application::PersonStore;
use pillars_core::{AppError, AppResult, PersonAliasId, PersonId};
use pillars_domain::Person;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// Postgres-backed person store over the host's people and alias tables.
#[derive(Clone)]
pub struct PostgresPersonStore {
    pool: PgPool,
}

impl PostgresPersonStore {
    /// Creates a person store with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PersonRow {
    id: i32,
    nick_name: String,
    last_name: String,
    email: Option<String>,
    primary_alias_id: Option<i32>,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Self {
            id: PersonId::new(row.id),
            nick_name: row.nick_name,
            last_name: row.last_name,
            email: row.email,
            primary_alias_id: row.primary_alias_id.map(PersonAliasId::new),
        }
    }
}

#[async_trait]
impl PersonStore for PostgresPersonStore {
    async fn find_person_by_alias_guid(&self, alias_guid: Uuid) -> AppResult<Option<Person>> {
        let row = sqlx::query_as::<_, PersonRow>(
            r#"
            SELECT p.id, p.nick_name, p.last_name, p.email, p.primary_alias_id
            FROM people p
            INNER JOIN person_aliases pa ON pa.person_id = p.id
            WHERE pa.guid = $1
            LIMIT 1
            "#,
        )
        .bind(alias_guid)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to resolve person by alias guid: {error}"))
        })?;

        Ok(row.map(Person::from))
    }

    async fn list_people_by_ids(&self, ids: &[PersonId]) -> AppResult<Vec<Person>> {
        let id_values: Vec<i32> = ids.iter().map(|id| id.as_i32()).collect();

        let rows = sqlx::query_as::<_, PersonRow>(
            r#"
            SELECT id, nick_name, last_name, email, primary_alias_id
            FROM people
            WHERE id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(&id_values)
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list people by id: {error}")))?;

        Ok(rows.into_iter().map(Person::from).collect())
    }
}
