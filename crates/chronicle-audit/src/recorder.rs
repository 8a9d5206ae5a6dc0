//! Entry point wiring the pipeline: filter, classify, mint, build, sink.

use crate::classifier::classify;
use crate::config::{AUDIT_ROOT_ENV, AuditConfig};
use crate::error::{AuditError, Result};
use crate::events::EventSignal;
use crate::filter::should_audit;
use crate::record::RecordBuilder;
use crate::sink::AuditSink;
use chronicle_id::ShardedPathMinter;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Stateless per-event audit pipeline bound to a configured root and a
/// storage sink.
///
/// Each delivered event is processed independently; the recorder holds
/// no mutable state, so one task per delivery needs no locking here.
pub struct AuditRecorder {
    root: Option<String>,
    minter: ShardedPathMinter,
    sink: Arc<dyn AuditSink>,
}

impl AuditRecorder {
    /// Set up the recorder against `sink`.
    ///
    /// With a configured root location this normalizes it and ensures
    /// the root container exists. Without one the recorder comes up
    /// inactive: it logs a warning and rejects events with
    /// [`AuditError::NotConfigured`] until reinitialized.
    pub async fn initialize(config: AuditConfig, sink: Arc<dyn AuditSink>) -> Result<Self> {
        let root = match config.root_location {
            Some(raw) => {
                let root = normalize_root(&raw);
                info!(%root, "initializing audit trail");
                sink.find_or_create_container(&root).await?;
                Some(root)
            }
            None => {
                warn!("audit root not set ({AUDIT_ROOT_ENV}); audit trail inactive");
                None
            }
        };
        Ok(Self { root, minter: ShardedPathMinter::default(), sink })
    }

    pub fn with_minter(mut self, minter: ShardedPathMinter) -> Self {
        self.minter = minter;
        self
    }

    pub fn is_active(&self) -> bool {
        self.root.is_some()
    }

    pub fn root_location(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// Record one observed event.
    ///
    /// Filtered events and unmintable tokens are dropped without error;
    /// sink failures propagate to the caller, which owns retry policy.
    pub async fn on_event(&self, signal: &EventSignal) -> Result<()> {
        debug!(event_id = %signal.event_id, path = %signal.resource_path, "event received");
        let Some(root) = &self.root else {
            warn!(event_id = %signal.event_id, "audit trail not configured, dropping event");
            return Err(AuditError::NotConfigured { event_id: signal.event_id.to_string() });
        };
        if !should_audit(signal, root) {
            return Ok(());
        }

        let category = classify(&signal.lifecycle_kinds, &signal.resource_types);
        let minted = match self.minter.mint(signal.event_id.as_str()) {
            Ok(minted) => minted,
            Err(err) => {
                let err = AuditError::from(err);
                error!(event_id = %signal.event_id, %err, "cannot mint audit path, dropping event");
                return Ok(());
            }
        };
        let record_path = format!("{root}/{minted}");
        let record = RecordBuilder::new(signal, record_path.as_str()).category(category).build();

        self.sink.find_or_create_container(&record_path).await?;
        self.sink.write(&record_path, &record).await?;
        if let Some(uri) = &record.related_resource {
            self.sink.set_related_resource_link(&record_path, uri).await?;
        }
        debug!(event_id = %signal.event_id, path = %record_path, "audit record written");
        Ok(())
    }
}

fn normalize_root(raw: &str) -> String {
    let trimmed = raw.trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
