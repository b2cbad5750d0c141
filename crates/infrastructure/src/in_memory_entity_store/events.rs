use async_trait::async_trait;
use pillars_application::EventStore;
use pillars_core::{AppResult, RegistrantId, RegistrationId, RegistrationInstanceId};
use pillars_domain::{
    NewRegistrant, NewRegistration, Registration, RegistrationInstance, RegistrationRegistrant,
};

use super::InMemoryEntityStore;

#[async_trait]
impl EventStore for InMemoryEntityStore {
    async fn find_registration_instance(
        &self,
        id: RegistrationInstanceId,
    ) -> AppResult<Option<RegistrationInstance>> {
        Ok(self.state.read().await.instances.get(&id.as_i32()).cloned())
    }

    async fn find_registration(&self, id: RegistrationId) -> AppResult<Option<Registration>> {
        Ok(self
            .state
            .read()
            .await
            .registrations
            .get(&id.as_i32())
            .cloned())
    }

    async fn add_registration(&self, input: NewRegistration) -> AppResult<Registration> {
        let mut state = self.state.write().await;
        let id = state.reserve_id();
        let registration = Registration {
            id: RegistrationId::new(id),
            registration_instance_id: input.registration_instance_id,
            person_alias_id: input.person_alias_id,
            first_name: input.first_name,
            last_name: input.last_name,
            confirmation_email: input.confirmation_email,
            is_temporary: input.is_temporary,
        };
        state.registrations.insert(id, registration.clone());
        Ok(registration)
    }

    async fn add_registrant(&self, input: NewRegistrant) -> AppResult<RegistrationRegistrant> {
        let mut state = self.state.write().await;
        let id = state.reserve_id();
        let registrant = RegistrationRegistrant {
            id: RegistrantId::new(id),
            registration_id: input.registration_id,
            person_alias_id: input.person_alias_id,
        };
        state.registrants.insert(id, registrant);
        Ok(registrant)
    }
}
