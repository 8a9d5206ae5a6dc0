//! Audit trail configuration.

use std::env;

/// Environment variable naming the audit container location.
pub const AUDIT_ROOT_ENV: &str = "CHRONICLE_AUDIT_ROOT";

/// Configuration surface for the recorder.
///
/// A missing root location is the one externally visible off state: the
/// recorder stays inactive and drops events with a warning.
#[derive(Debug, Clone, Default)]
pub struct AuditConfig {
    pub root_location: Option<String>,
}

impl AuditConfig {
    pub fn with_root(root: impl Into<String>) -> Self {
        Self { root_location: Some(root.into()) }
    }

    pub fn from_env() -> Self {
        Self { root_location: env::var(AUDIT_ROOT_ENV).ok().filter(|v| !v.is_empty()) }
    }
}
