//! Postgres adapter for the event store port.

use async_trait::async_trait;
use pillars_application::EventStore;
use pillars_core::{
    AppError, AppResult, PersonAliasId, RegistrantId, RegistrationId, RegistrationInstanceId,
};
use pillars_domain::{
    NewRegistrant, NewRegistration, Registration, RegistrationInstance, RegistrationRegistrant,
};
use sqlx::{FromRow, PgPool};

/// Postgres-backed event store over the host's registration tables.
#[derive(Clone)]
pub struct PostgresEventStore {
    pool: PgPool,
}

impl PostgresEventStore {
    /// Creates an event store with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RegistrationInstanceRow {
    id: i32,
    name: String,
}

#[derive(Debug, FromRow)]
struct RegistrationRow {
    id: i32,
    registration_instance_id: i32,
    person_alias_id: i32,
    first_name: String,
    last_name: String,
    confirmation_email: Option<String>,
    is_temporary: bool,
}

impl From<RegistrationRow> for Registration {
    fn from(row: RegistrationRow) -> Self {
        Self {
            id: RegistrationId::new(row.id),
            registration_instance_id: RegistrationInstanceId::new(row.registration_instance_id),
            person_alias_id: PersonAliasId::new(row.person_alias_id),
            first_name: row.first_name,
            last_name: row.last_name,
            confirmation_email: row.confirmation_email,
            is_temporary: row.is_temporary,
        }
    }
}

#[async_trait]
impl EventStore for PostgresEventStore {
    async fn find_registration_instance(
        &self,
        id: RegistrationInstanceId,
    ) -> AppResult<Option<RegistrationInstance>> {
        let row = sqlx::query_as::<_, RegistrationInstanceRow>(
            r#"
            SELECT id, name
            FROM registration_instances
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to resolve registration instance: {error}"))
        })?;

        Ok(row.map(|row| RegistrationInstance {
            id: RegistrationInstanceId::new(row.id),
            name: row.name,
        }))
    }

    async fn find_registration(&self, id: RegistrationId) -> AppResult<Option<Registration>> {
        let row = sqlx::query_as::<_, RegistrationRow>(
            r#"
            SELECT id, registration_instance_id, person_alias_id, first_name,
                   last_name, confirmation_email, is_temporary
            FROM registrations
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to resolve registration: {error}")))?;

        Ok(row.map(Registration::from))
    }

    async fn add_registration(&self, input: NewRegistration) -> AppResult<Registration> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO registrations (
                registration_instance_id,
                person_alias_id,
                first_name,
                last_name,
                confirmation_email,
                is_temporary
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(input.registration_instance_id.as_i32())
        .bind(input.person_alias_id.as_i32())
        .bind(input.first_name.as_str())
        .bind(input.last_name.as_str())
        .bind(input.confirmation_email.as_deref())
        .bind(input.is_temporary)
        .fetch_one(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to insert registration: {error}")))?;

        Ok(Registration {
            id: RegistrationId::new(id),
            registration_instance_id: input.registration_instance_id,
            person_alias_id: input.person_alias_id,
            first_name: input.first_name,
            last_name: input.last_name,
            confirmation_email: input.confirmation_email,
            is_temporary: input.is_temporary,
        })
    }

    async fn add_registrant(&self, input: NewRegistrant) -> AppResult<RegistrationRegistrant> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO registration_registrants (registration_id, person_alias_id)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(input.registration_id.as_i32())
        .bind(input.person_alias_id.as_i32())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to insert registrant: {error}")))?;

        Ok(RegistrationRegistrant {
            id: RegistrantId::new(id),
            registration_id: input.registration_id,
            person_alias_id: input.person_alias_id,
        })
    }
}
