//! Service owning the registry of group milestone configurations.
//! Seeded from the embedded definitions at startup and mutated only
//! by configuration writes, nothing is persisted across restarts.

use crate::definitions::groups::{GroupConfig, GroupDefinition, seed_groups};
use crate::http::models::errors::HttpError;
use hyper::StatusCode;
use parking_lot::Mutex;
use std::collections::HashMap;
use thiserror::Error;

/// Service storing the milestone configuration for each group
pub struct GroupService {
    /// Registry of known groups
    ///
    /// This uses a blocking mutex as there is little to no overhead
    /// since all operations are just map read and writes which don't
    /// warrant the need for the async variant
    registry: Mutex<GroupRegistry>,
}

/// Mapping between group identifiers and their configuration.
///
/// Keys are tracked separately in insertion order so that group
/// listings come back in a stable order, replacing an existing
/// group keeps its position.
#[derive(Default)]
struct GroupRegistry {
    entries: HashMap<String, GroupConfig>,
    order: Vec<String>,
}

impl GroupRegistry {
    fn insert(&mut self, group_id: String, config: GroupConfig) {
        if self.entries.insert(group_id.clone(), config).is_none() {
            self.order.push(group_id);
        }
    }
}

impl GroupService {
    /// Creates the service seeded with the embedded group definitions
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self::from_definitions(seed_groups()?))
    }

    /// Creates the service from an explicit set of definitions
    pub fn from_definitions(definitions: Vec<GroupDefinition>) -> Self {
        let mut registry = GroupRegistry::default();
        for definition in definitions {
            registry.insert(definition.group_id, definition.config);
        }

        Self {
            registry: Mutex::new(registry),
        }
    }

    /// Looks up the configuration for `group_id`, on a miss the error
    /// carries the currently known identifiers so callers can self-correct
    pub fn get(&self, group_id: &str) -> Result<GroupConfig, GroupsError> {
        let registry = &*self.registry.lock();
        match registry.entries.get(group_id) {
            Some(value) => Ok(value.clone()),
            None => Err(GroupsError::UnknownGroup {
                group_id: group_id.to_string(),
                available: registry.order.clone(),
            }),
        }
    }

    /// All known group identifiers in insertion order
    pub fn group_ids(&self) -> Vec<String> {
        self.registry.lock().order.clone()
    }

    /// Replaces the configuration stored for `group_id` wholesale,
    /// creating the group if it didn't previously exist
    pub fn replace(&self, group_id: &str, config: GroupConfig) {
        let registry = &mut *self.registry.lock();
        registry.insert(group_id.to_string(), config);
    }
}

/// Errors that can occur while looking up group configurations
#[derive(Debug, Error)]
pub enum GroupsError {
    /// The requested group is not in the registry
    #[error("Group '{group_id}' not found")]
    UnknownGroup {
        group_id: String,
        /// Identifiers that were known at the time of the lookup
        available: Vec<String>,
    },
}

impl HttpError for GroupsError {
    fn status(&self) -> StatusCode {
        match self {
            GroupsError::UnknownGroup { .. } => StatusCode::NOT_FOUND,
        }
    }

    fn available_groups(&self) -> Option<Vec<String>> {
        match self {
            GroupsError::UnknownGroup { available, .. } => Some(available.clone()),
        }
    }
}
