//! Maps lifecycle signals and resource types to audit categories.

use crate::events::LifecycleKind;
use crate::vocabulary::{categories, repository};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Controlled vocabulary of audit event categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuditCategory {
    ContentAdded,
    ContentModified,
    ContentRemoved,
    ObjectAdded,
    ObjectModified,
    ObjectRemoved,
}

impl AuditCategory {
    pub fn as_uri(&self) -> &'static str {
        match self {
            AuditCategory::ContentAdded => categories::CONTENT_ADDED,
            AuditCategory::ContentModified => categories::CONTENT_MODIFIED,
            AuditCategory::ContentRemoved => categories::CONTENT_REMOVED,
            AuditCategory::ObjectAdded => categories::OBJECT_ADDED,
            AuditCategory::ObjectModified => categories::OBJECT_MODIFIED,
            AuditCategory::ObjectRemoved => categories::OBJECT_REMOVED,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuditCategory::ContentAdded => "content-added",
            AuditCategory::ContentModified => "content-modified",
            AuditCategory::ContentRemoved => "content-removed",
            AuditCategory::ObjectAdded => "object-added",
            AuditCategory::ObjectModified => "object-modified",
            AuditCategory::ObjectRemoved => "object-removed",
        }
    }
}

impl fmt::Display for AuditCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify one occurrence into an audit category.
///
/// Creation takes precedence over deletion, which takes precedence over
/// modification; an occurrence reporting several kinds at once resolves
/// deterministically. `None` means the occurrence maps to no category,
/// which is a valid outcome rather than an error.
pub fn classify(
    lifecycle_kinds: &BTreeSet<LifecycleKind>,
    resource_types: &BTreeSet<String>,
) -> Option<AuditCategory> {
    let binary = resource_types.contains(repository::BINARY_TYPE);
    if lifecycle_kinds.contains(&LifecycleKind::Creation) {
        Some(if binary { AuditCategory::ContentAdded } else { AuditCategory::ObjectAdded })
    } else if lifecycle_kinds.contains(&LifecycleKind::Deletion) {
        Some(if binary { AuditCategory::ContentRemoved } else { AuditCategory::ObjectRemoved })
    } else if lifecycle_kinds.contains(&LifecycleKind::Modification) {
        Some(if binary { AuditCategory::ContentModified } else { AuditCategory::ObjectModified })
    } else {
        None
    }
}
