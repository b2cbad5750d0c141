//! Explicit registry of action constructors, populated at process start.

use std::collections::HashMap;
use std::sync::Arc;

use pillars_core::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::actions::{
    ActionComponent, GroupAdd, GroupAddConfig, RegistrantAdd, RegistrantAddConfig,
    RegistrationAdd, RegistrationAddConfig, RequestAdd, RequestAddConfig,
};
use crate::store_ports::{
    CampusCache, CategoryStore, EventStore, GroupStore, GroupTypeCache, PersonStore,
    PrayerRequestStore,
};

type ActionBuilder = Box<dyn Fn(Value) -> AppResult<Box<dyn ActionComponent>> + Send + Sync>;

/// Shared store port handles handed to action constructors.
#[derive(Clone)]
pub struct ActionStores {
    /// People and aliases.
    pub people: Arc<dyn PersonStore>,
    /// Registration instances, registrations, and registrants.
    pub events: Arc<dyn EventStore>,
    /// Groups.
    pub groups: Arc<dyn GroupStore>,
    /// Group type reference data.
    pub group_types: Arc<dyn GroupTypeCache>,
    /// Prayer requests.
    pub prayer: Arc<dyn PrayerRequestStore>,
    /// Campus reference data.
    pub campuses: Arc<dyn CampusCache>,
    /// Categorization entries.
    pub categories: Arc<dyn CategoryStore>,
}

/// Maps stable action identifiers to constructors that deserialize the
/// action's configuration and capture its store ports.
#[derive(Default)]
pub struct ActionRegistry {
    builders: HashMap<&'static str, ActionBuilder>,
}

impl ActionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a constructor for one action type. The constructor receives
    /// the configuration deserialized from JSON.
    pub fn register<C, F>(&mut self, action_type: &'static str, build: F)
    where
        C: DeserializeOwned,
        F: Fn(C) -> Box<dyn ActionComponent> + Send + Sync + 'static,
    {
        self.builders.insert(
            action_type,
            Box::new(move |config| {
                let config: C = serde_json::from_value(config).map_err(|error| {
                    AppError::Validation(format!(
                        "invalid configuration for action '{action_type}': {error}"
                    ))
                })?;

                Ok(build(config))
            }),
        );
    }

    /// Builds one configured action component by identifier.
    pub fn build(&self, action_type: &str, config: Value) -> AppResult<Box<dyn ActionComponent>> {
        let builder = self.builders.get(action_type).ok_or_else(|| {
            AppError::NotFound(format!("action type '{action_type}' is not registered"))
        })?;

        debug!(action_type = action_type, "building workflow action");
        builder(config)
    }

    /// Whether an action type is registered.
    #[must_use]
    pub fn is_registered(&self, action_type: &str) -> bool {
        self.builders.contains_key(action_type)
    }

    /// Returns all registered action types, sorted.
    #[must_use]
    pub fn registered_types(&self) -> Vec<&'static str> {
        let mut types: Vec<&'static str> = self.builders.keys().copied().collect();
        types.sort_unstable();
        types
    }
}

/// Builds the registry of all built-in actions over one set of store ports.
#[must_use]
pub fn builtin_registry(stores: &ActionStores) -> ActionRegistry {
    let mut registry = ActionRegistry::new();

    {
        let stores = stores.clone();
        registry.register(
            RegistrantAdd::ACTION_TYPE,
            move |config: RegistrantAddConfig| {
                Box::new(RegistrantAdd::new(
                    config,
                    stores.people.clone(),
                    stores.events.clone(),
                ))
            },
        );
    }

    {
        let stores = stores.clone();
        registry.register(
            RegistrationAdd::ACTION_TYPE,
            move |config: RegistrationAddConfig| {
                Box::new(RegistrationAdd::new(
                    config,
                    stores.people.clone(),
                    stores.events.clone(),
                ))
            },
        );
    }

    {
        let stores = stores.clone();
        registry.register(GroupAdd::ACTION_TYPE, move |config: GroupAddConfig| {
            Box::new(GroupAdd::new(
                config,
                stores.groups.clone(),
                stores.group_types.clone(),
            ))
        });
    }

    {
        let stores = stores.clone();
        registry.register(RequestAdd::ACTION_TYPE, move |config: RequestAddConfig| {
            Box::new(RequestAdd::new(
                config,
                stores.people.clone(),
                stores.prayer.clone(),
                stores.campuses.clone(),
                stores.categories.clone(),
            ))
        });
    }

    registry
}
