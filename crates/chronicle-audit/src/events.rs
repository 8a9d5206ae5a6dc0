use chronicle_id::EventToken;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Raw lifecycle signals carried by one occurrence.
///
/// A single occurrence may carry more than one kind, e.g. creation and
/// modification together when a resource is created with properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleKind {
    Creation,
    Deletion,
    Modification,
}

/// Normalized view of one observed change in the managed resource tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSignal {
    pub event_id: EventToken,
    /// Location of the affected resource, e.g. `/objects/obj1`.
    pub resource_path: String,
    /// Open-vocabulary type tags describing the resource.
    pub resource_types: BTreeSet<String>,
    pub lifecycle_kinds: BTreeSet<LifecycleKind>,
    /// Attribute URIs touched by a modification; empty otherwise.
    pub changed_attributes: BTreeSet<String>,
    pub timestamp: DateTime<Utc>,
    /// Acting identity.
    pub agent_id: String,
    /// Client-supplied descriptive string, e.g. a user agent.
    pub agent_label: Option<String>,
    /// Externally addressable root used to compose absolute URIs.
    pub base_location: String,
}

impl EventSignal {
    pub fn is_pure_modification(&self) -> bool {
        self.lifecycle_kinds.len() == 1
            && self.lifecycle_kinds.contains(&LifecycleKind::Modification)
    }
}
