//! Decides whether an occurrence is audit-worthy.

use crate::events::EventSignal;
use crate::vocabulary::repository;
use tracing::debug;

/// Returns true when `signal` should produce an audit record.
///
/// Rejections are a normal, silent outcome: traced at debug level, never
/// logged as errors.
pub fn should_audit(signal: &EventSignal, audit_root: &str) -> bool {
    if signal.resource_path.is_empty() {
        debug!(event_id = %signal.event_id, "event has no addressable path, skipping");
        return false;
    }
    if is_under_root(&signal.resource_path, audit_root) {
        // The audit trail must not audit itself.
        debug!(
            event_id = %signal.event_id,
            path = %signal.resource_path,
            "event inside audit container, skipping"
        );
        return false;
    }
    if is_parent_touch(signal) {
        // Adding or removing a child updates the parent's last-modified
        // attributes; those side-effects carry no independent audit value.
        debug!(
            event_id = %signal.event_id,
            path = %signal.resource_path,
            "parent last-modified side-effect, skipping"
        );
        return false;
    }
    true
}

fn is_under_root(path: &str, audit_root: &str) -> bool {
    path == audit_root || path.starts_with(&format!("{audit_root}/"))
}

/// A pure-modification signal whose non-empty changed attributes are all
/// last-modified bookkeeping.
fn is_parent_touch(signal: &EventSignal) -> bool {
    signal.is_pure_modification()
        && !signal.changed_attributes.is_empty()
        && signal.changed_attributes.iter().all(|attr| {
            attr == repository::LAST_MODIFIED || attr == repository::LAST_MODIFIED_BY
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::LifecycleKind;
    use chronicle_id::EventToken;
    use chrono::Utc;
    use std::collections::BTreeSet;

    fn signal(path: &str) -> EventSignal {
        EventSignal {
            event_id: EventToken::from_external("27c605e498c66a4f7d4fde8cca2167a8"),
            resource_path: path.to_string(),
            resource_types: BTreeSet::new(),
            lifecycle_kinds: [LifecycleKind::Modification].into_iter().collect(),
            changed_attributes: BTreeSet::new(),
            timestamp: Utc::now(),
            agent_id: "alice".to_string(),
            agent_label: None,
            base_location: "http://localhost:8080/rest".to_string(),
        }
    }

    fn attrs(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn rejects_empty_path() {
        assert!(!should_audit(&signal(""), "/audit"));
    }

    #[test]
    fn rejects_audit_root_and_descendants() {
        assert!(!should_audit(&signal("/audit"), "/audit"));
        assert!(!should_audit(&signal("/audit/27/c6/05/e4/rec"), "/audit"));
    }

    #[test]
    fn accepts_sibling_sharing_root_prefix() {
        assert!(should_audit(&signal("/audit2/obj"), "/audit"));
    }

    #[test]
    fn rejects_parent_last_modified_noise() {
        let mut s = signal("/parent");
        s.changed_attributes =
            attrs(&[repository::LAST_MODIFIED, repository::LAST_MODIFIED_BY]);
        assert!(!should_audit(&s, "/audit"));
    }

    #[test]
    fn rejects_noise_with_single_attribute() {
        let mut s = signal("/parent");
        s.changed_attributes = attrs(&[repository::LAST_MODIFIED]);
        assert!(!should_audit(&s, "/audit"));
    }

    #[test]
    fn accepts_modification_touching_other_attributes() {
        let mut s = signal("/obj1");
        s.changed_attributes = attrs(&[
            repository::LAST_MODIFIED,
            "http://purl.org/dc/elements/1.1/title",
        ]);
        assert!(should_audit(&s, "/audit"));
    }

    #[test]
    fn accepts_creation_with_noise_attributes() {
        let mut s = signal("/obj1");
        s.lifecycle_kinds =
            [LifecycleKind::Creation, LifecycleKind::Modification].into_iter().collect();
        s.changed_attributes = attrs(&[repository::LAST_MODIFIED]);
        assert!(should_audit(&s, "/audit"));
    }

    #[test]
    fn accepts_pure_modification_without_attributes() {
        assert!(should_audit(&signal("/obj1"), "/audit"));
    }
}
