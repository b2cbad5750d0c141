use async_trait::async_trait;
use pillars_core::{AppResult, RegistrationId, RegistrationInstanceId};
use pillars_domain::{
    NewRegistrant, NewRegistration, Registration, RegistrationInstance, RegistrationRegistrant,
};

/// Port over registration instances, registrations, and registrants.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Returns one registration instance by row id.
    async fn find_registration_instance(
        &self,
        id: RegistrationInstanceId,
    ) -> AppResult<Option<RegistrationInstance>>;

    /// Returns one registration by row id.
    async fn find_registration(&self, id: RegistrationId) -> AppResult<Option<Registration>>;

    /// Persists one registration row.
    async fn add_registration(&self, input: NewRegistration) -> AppResult<Registration>;

    /// Persists one registrant row.
    async fn add_registrant(&self, input: NewRegistrant) -> AppResult<RegistrationRegistrant>;
}
