//! Groups and group types.

use pillars_core::{GroupId, GroupTypeId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A group type; read-only reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupType {
    /// Row identifier.
    pub id: GroupTypeId,
    /// Stable GUID identity.
    pub guid: Uuid,
    /// Display name.
    pub name: String,
}

/// A group of people within the organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Row identifier.
    pub id: GroupId,
    /// Stable GUID identity.
    pub guid: Uuid,
    /// The type of this group.
    pub group_type_id: GroupTypeId,
    /// Display name.
    pub name: String,
    /// Optional parent group.
    pub parent_group_id: Option<GroupId>,
}

impl Group {
    /// Whether this group matches an exact (type, name, parent) tuple. An
    /// absent parent only matches groups that also have no parent.
    #[must_use]
    pub fn matches(&self, key: &GroupMatch) -> bool {
        self.group_type_id == key.group_type_id
            && self.name == key.name
            && self.parent_group_id == key.parent_group_id
    }
}

/// Exact-match key for locating an existing group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMatch {
    /// Required group type.
    pub group_type_id: GroupTypeId,
    /// Required group name.
    pub name: String,
    /// Required parent, or `None` for parentless groups.
    pub parent_group_id: Option<GroupId>,
}

/// Input for creating a group row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGroup {
    /// The type of the new group.
    pub group_type_id: GroupTypeId,
    /// Display name.
    pub name: String,
    /// Optional parent group.
    pub parent_group_id: Option<GroupId>,
}
