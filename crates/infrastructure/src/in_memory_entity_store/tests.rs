use std::sync::Arc;

use pillars_application::{
    ActionContext, ActionStores, EventStore, GroupAdd, GroupStore, PersonStore,
    WorkflowAttributeStore, builtin_registry,
};
use pillars_core::{
    GroupId, GroupTypeId, PersonAliasId, PersonId, RegistrationInstanceId,
};
use pillars_domain::{
    Group, GroupMatch, GroupType, NewRegistration, Person, PersonAlias, RegistrationInstance,
};
use serde_json::json;
use uuid::Uuid;

use crate::in_memory_attribute_store::InMemoryWorkflowAttributeStore;
use crate::in_memory_campus_cache::InMemoryCampusCache;
use crate::in_memory_group_type_cache::InMemoryGroupTypeCache;

use super::InMemoryEntityStore;

fn person(id: i32, alias: i32) -> Person {
    Person {
        id: PersonId::new(id),
        nick_name: "Ted".to_owned(),
        last_name: "Decker".to_owned(),
        email: None,
        primary_alias_id: Some(PersonAliasId::new(alias)),
    }
}

#[tokio::test]
async fn person_lookup_follows_the_alias_to_its_person() {
    let store = InMemoryEntityStore::new();
    let alias_guid = Uuid::new_v4();
    store.seed_person(person(1, 11)).await;
    store
        .seed_person_alias(PersonAlias {
            id: PersonAliasId::new(11),
            guid: alias_guid,
            person_id: PersonId::new(1),
        })
        .await;

    let found = store.find_person_by_alias_guid(alias_guid).await;
    let missed = store.find_person_by_alias_guid(Uuid::new_v4()).await;

    assert!(found.is_ok_and(|person| person.is_some_and(|person| person.id == PersonId::new(1))));
    assert!(missed.is_ok_and(|person| person.is_none()));
}

#[tokio::test]
async fn created_rows_receive_ids_above_seeded_rows() {
    let store = InMemoryEntityStore::new();
    store
        .seed_registration_instance(RegistrationInstance {
            id: RegistrationInstanceId::new(40),
            name: "Fall Retreat".to_owned(),
        })
        .await;

    let added = store
        .add_registration(NewRegistration {
            registration_instance_id: RegistrationInstanceId::new(40),
            person_alias_id: PersonAliasId::new(1),
            first_name: "Ted".to_owned(),
            last_name: "Decker".to_owned(),
            confirmation_email: None,
            is_temporary: false,
        })
        .await;

    assert!(added.is_ok());
    let added = added.unwrap_or_else(|_| unreachable!());
    assert!(added.id.as_i32() > 40);
    assert_eq!(store.registrations().await.len(), 1);
}

#[tokio::test]
async fn group_matching_requires_the_exact_parent() {
    let store = InMemoryEntityStore::new();
    store
        .seed_group(Group {
            id: GroupId::new(7),
            guid: Uuid::new_v4(),
            group_type_id: GroupTypeId::new(3),
            name: "Alpha".to_owned(),
            parent_group_id: Some(GroupId::new(2)),
        })
        .await;

    let with_parent = store
        .find_matching_group(&GroupMatch {
            group_type_id: GroupTypeId::new(3),
            name: "Alpha".to_owned(),
            parent_group_id: Some(GroupId::new(2)),
        })
        .await;
    let without_parent = store
        .find_matching_group(&GroupMatch {
            group_type_id: GroupTypeId::new(3),
            name: "Alpha".to_owned(),
            parent_group_id: None,
        })
        .await;

    assert!(with_parent.is_ok_and(|group| group.is_some()));
    assert!(without_parent.is_ok_and(|group| group.is_none()));
}

#[tokio::test]
async fn group_add_wired_through_the_registry_creates_then_reuses() {
    let entities = Arc::new(InMemoryEntityStore::new());
    let group_types = Arc::new(InMemoryGroupTypeCache::new());
    let type_guid = Uuid::new_v4();
    entities
        .seed_group_type(GroupType {
            id: GroupTypeId::new(3),
            guid: type_guid,
            name: "Small Group".to_owned(),
        })
        .await;

    let registry = builtin_registry(&ActionStores {
        people: entities.clone(),
        events: entities.clone(),
        groups: entities.clone(),
        group_types,
        prayer: entities.clone(),
        campuses: Arc::new(InMemoryCampusCache::new()),
        categories: entities.clone(),
    });

    let action = registry.build(
        GroupAdd::ACTION_TYPE,
        json!({
            "group_type": {"literal": type_guid.to_string()},
            "group_name": {"literal": "Alpha"},
            "result_attribute": "NewGroup",
        }),
    );
    assert!(action.is_ok());
    let action = action.unwrap_or_else(|_| unreachable!());

    let attributes = Arc::new(InMemoryWorkflowAttributeStore::new());
    attributes.define_attribute("NewGroup", "").await;

    for _ in 0..2 {
        let mut context = ActionContext::new(attributes.clone());
        let completed = action.execute(&mut context).await;
        assert!(completed.is_ok_and(|completed| completed));
    }

    let groups = entities.groups().await;
    assert_eq!(groups.len(), 1);
    assert_eq!(
        attributes.value_of("NewGroup").await,
        Some(groups[0].guid.to_string())
    );
}

#[tokio::test]
async fn attribute_writes_only_touch_defined_attributes() {
    let attributes = InMemoryWorkflowAttributeStore::new();
    attributes.define_attribute("Known", "old").await;

    let known = attributes.set_attribute_value("Known", "new").await;
    let unknown = attributes.set_attribute_value("Unknown", "new").await;

    assert!(known.is_ok_and(|written| written.as_deref() == Some("Known")));
    assert!(unknown.is_ok_and(|written| written.is_none()));
    assert_eq!(attributes.value_of("Known").await.as_deref(), Some("new"));
    assert_eq!(attributes.value_of("Unknown").await, None);
}
