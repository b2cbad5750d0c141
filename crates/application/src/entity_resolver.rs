//! Shared entity lookup fallback chains over raw parameter values.

use pillars_core::{AppResult, PersonId};
use pillars_domain::{EntityKey, GroupType, Person};

use crate::store_ports::{GroupStore, GroupTypeCache, PersonStore};

/// Resolves one or more people from a raw parameter value: a person-alias
/// GUID first, then a delimited list of person row ids. The first strategy
/// that yields anyone wins; results are never merged across strategies.
pub async fn resolve_people(store: &dyn PersonStore, raw: &str) -> AppResult<Vec<Person>> {
    match EntityKey::parse(raw) {
        Some(EntityKey::Guid(guid)) => {
            Ok(store.find_person_by_alias_guid(guid).await?.into_iter().collect())
        }
        Some(EntityKey::Ids(ids)) => {
            let ids: Vec<PersonId> = ids.into_iter().map(PersonId::new).collect();
            store.list_people_by_ids(&ids).await
        }
        None => Ok(Vec::new()),
    }
}

/// Resolves one person from a person-alias GUID value. Input that is not a
/// GUID resolves to no one.
pub async fn person_by_alias_guid(
    store: &dyn PersonStore,
    raw: &str,
) -> AppResult<Option<Person>> {
    match EntityKey::parse(raw) {
        Some(EntityKey::Guid(guid)) => store.find_person_by_alias_guid(guid).await,
        _ => Ok(None),
    }
}

/// Resolves a group type by GUID through the cache with a datastore
/// fallback: cache by GUID, then datastore by GUID, then cache again by the
/// found row id. The cache can miss GUIDs it has not indexed yet; the
/// datastore row stands in when the id read also misses.
pub async fn resolve_group_type(
    cache: &dyn GroupTypeCache,
    store: &dyn GroupStore,
    raw: &str,
) -> AppResult<Option<GroupType>> {
    let Some(EntityKey::Guid(guid)) = EntityKey::parse(raw) else {
        return Ok(None);
    };

    if let Some(group_type) = cache.get_by_guid(guid).await? {
        return Ok(Some(group_type));
    }

    let Some(group_type) = store.find_group_type_by_guid(guid).await? else {
        return Ok(None);
    };

    Ok(cache.get_by_id(group_type.id).await?.or(Some(group_type)))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;
    use pillars_core::{AppResult, PersonAliasId, PersonId};
    use pillars_domain::Person;
    use uuid::Uuid;

    use super::{person_by_alias_guid, resolve_people};
    use crate::store_ports::PersonStore;

    struct FakePersonStore {
        by_alias_guid: HashMap<Uuid, Person>,
        by_id: HashMap<i32, Person>,
    }

    #[async_trait]
    impl PersonStore for FakePersonStore {
        async fn find_person_by_alias_guid(&self, alias_guid: Uuid) -> AppResult<Option<Person>> {
            Ok(self.by_alias_guid.get(&alias_guid).cloned())
        }

        async fn list_people_by_ids(&self, ids: &[PersonId]) -> AppResult<Vec<Person>> {
            Ok(ids
                .iter()
                .filter_map(|id| self.by_id.get(&id.as_i32()).cloned())
                .collect())
        }
    }

    fn person(id: i32, nick_name: &str) -> Person {
        Person {
            id: PersonId::new(id),
            nick_name: nick_name.to_owned(),
            last_name: "Decker".to_owned(),
            email: None,
            primary_alias_id: Some(PersonAliasId::new(id)),
        }
    }

    fn store(alias_guid: Uuid) -> Arc<FakePersonStore> {
        Arc::new(FakePersonStore {
            by_alias_guid: HashMap::from([(alias_guid, person(1, "Ted"))]),
            by_id: HashMap::from([(2, person(2, "Cindy")), (3, person(3, "Noah"))]),
        })
    }

    #[tokio::test]
    async fn alias_guid_wins_over_the_id_strategy() {
        let alias_guid = Uuid::new_v4();
        let store = store(alias_guid);

        let people = resolve_people(store.as_ref(), &alias_guid.to_string()).await;

        assert!(people.is_ok());
        let people = people.unwrap_or_default();
        assert_eq!(people.len(), 1);
        assert_eq!(people[0].nick_name, "Ted");
    }

    #[tokio::test]
    async fn id_list_resolves_only_known_people() {
        let store = store(Uuid::new_v4());

        let people = resolve_people(store.as_ref(), "2, 99, 3").await;

        assert!(people.is_ok());
        let names: Vec<String> = people
            .unwrap_or_default()
            .into_iter()
            .map(|person| person.nick_name)
            .collect();
        assert_eq!(names, ["Cindy".to_owned(), "Noah".to_owned()]);
    }

    #[tokio::test]
    async fn unparsable_input_resolves_to_no_one() {
        let store = store(Uuid::new_v4());

        let people = resolve_people(store.as_ref(), "nobody in particular").await;

        assert!(people.is_ok_and(|people| people.is_empty()));
    }

    #[tokio::test]
    async fn non_guid_input_is_not_a_person_alias() {
        let store = store(Uuid::new_v4());

        let person = person_by_alias_guid(store.as_ref(), "2").await;

        assert!(person.is_ok_and(|person| person.is_none()));
    }
}
