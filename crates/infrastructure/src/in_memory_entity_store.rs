//! In-memory adapter implementing every entity store port, for tests and
//! development hosts.

mod events;
mod groups;
mod people;
mod prayer;

use std::collections::HashMap;

use pillars_domain::{
    Category, Group, GroupType, Person, PersonAlias, PrayerRequest, Registration,
    RegistrationInstance, RegistrationRegistrant,
};
use tokio::sync::RwLock;

#[derive(Default)]
struct EntityState {
    people: HashMap<i32, Person>,
    aliases: Vec<PersonAlias>,
    instances: HashMap<i32, RegistrationInstance>,
    registrations: HashMap<i32, Registration>,
    registrants: HashMap<i32, RegistrationRegistrant>,
    group_types: Vec<GroupType>,
    groups: Vec<Group>,
    prayer_requests: Vec<PrayerRequest>,
    categories: Vec<Category>,
    next_id: i32,
}

impl EntityState {
    fn reserve_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn bump_next_id(&mut self, seeded: i32) {
        if seeded > self.next_id {
            self.next_id = seeded;
        }
    }
}

/// One in-memory store standing in for the host datastore. Rows created
/// through the entity ports receive monotonically increasing ids above any
/// seeded row.
#[derive(Default)]
pub struct InMemoryEntityStore {
    state: RwLock<EntityState>,
}

impl InMemoryEntityStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds one person row.
    pub async fn seed_person(&self, person: Person) {
        let mut state = self.state.write().await;
        state.bump_next_id(person.id.as_i32());
        state.people.insert(person.id.as_i32(), person);
    }

    /// Seeds one person alias row.
    pub async fn seed_person_alias(&self, alias: PersonAlias) {
        let mut state = self.state.write().await;
        state.bump_next_id(alias.id.as_i32());
        state.aliases.push(alias);
    }

    /// Seeds one registration instance row.
    pub async fn seed_registration_instance(&self, instance: RegistrationInstance) {
        let mut state = self.state.write().await;
        state.bump_next_id(instance.id.as_i32());
        state.instances.insert(instance.id.as_i32(), instance);
    }

    /// Seeds one registration row.
    pub async fn seed_registration(&self, registration: Registration) {
        let mut state = self.state.write().await;
        state.bump_next_id(registration.id.as_i32());
        state
            .registrations
            .insert(registration.id.as_i32(), registration);
    }

    /// Seeds one group type row.
    pub async fn seed_group_type(&self, group_type: GroupType) {
        let mut state = self.state.write().await;
        state.bump_next_id(group_type.id.as_i32());
        state.group_types.push(group_type);
    }

    /// Seeds one group row.
    pub async fn seed_group(&self, group: Group) {
        let mut state = self.state.write().await;
        state.bump_next_id(group.id.as_i32());
        state.groups.push(group);
    }

    /// Seeds one category row.
    pub async fn seed_category(&self, category: Category) {
        let mut state = self.state.write().await;
        state.bump_next_id(category.id.as_i32());
        state.categories.push(category);
    }

    /// Returns all registrant rows, for assertions.
    pub async fn registrants(&self) -> Vec<RegistrationRegistrant> {
        self.state.read().await.registrants.values().copied().collect()
    }

    /// Returns all registration rows, for assertions.
    pub async fn registrations(&self) -> Vec<Registration> {
        self.state.read().await.registrations.values().cloned().collect()
    }

    /// Returns all group rows, for assertions.
    pub async fn groups(&self) -> Vec<Group> {
        self.state.read().await.groups.clone()
    }

    /// Returns all prayer request rows, for assertions.
    pub async fn prayer_requests(&self) -> Vec<PrayerRequest> {
        self.state.read().await.prayer_requests.clone()
    }
}

#[cfg(test)]
mod tests;
