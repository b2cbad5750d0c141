//! Campus and category reference data, looked up by GUID and never mutated.

use pillars_core::{CampusId, CategoryId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A physical campus of the organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campus {
    /// Row identifier.
    pub id: CampusId,
    /// Stable GUID identity.
    pub guid: Uuid,
    /// Display name.
    pub name: String,
}

/// A categorization entry applied to host entities such as prayer requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Row identifier.
    pub id: CategoryId,
    /// Stable GUID identity.
    pub guid: Uuid,
    /// Display name.
    pub name: String,
}
