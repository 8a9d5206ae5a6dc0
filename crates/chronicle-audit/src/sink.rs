//! Pluggable audit storage interface and an in-memory implementation.

use crate::error::{AuditError, Result};
use crate::record::AuditRecord;
use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use tokio::sync::Mutex;
use tracing::{debug, info};

/// External collaborator that persists audit records.
///
/// The core calls these in sequence: the root container once at startup,
/// then per accepted event a container at the minted path, the record
/// itself, and finally the related-resource link. Each call either fully
/// succeeds or fails; retry policy belongs to the embedding system.
#[async_trait]
pub trait AuditSink: Send + Sync {
    async fn find_or_create_container(&self, path: &str) -> Result<()>;

    async fn write(&self, path: &str, record: &AuditRecord) -> Result<()>;

    async fn set_related_resource_link(&self, path: &str, uri: &str) -> Result<()>;
}

/// In-memory sink for tests and embedding without a backing repository.
#[derive(Default)]
pub struct InMemoryAuditSink {
    containers: Mutex<BTreeSet<String>>,
    records: Mutex<HashMap<String, AuditRecord>>,
    links: Mutex<HashMap<String, String>>,
}

impl InMemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn containers(&self) -> BTreeSet<String> {
        self.containers.lock().await.clone()
    }

    pub async fn records(&self) -> HashMap<String, AuditRecord> {
        self.records.lock().await.clone()
    }

    pub async fn record(&self, path: &str) -> Option<AuditRecord> {
        self.records.lock().await.get(path).cloned()
    }

    pub async fn links(&self) -> HashMap<String, String> {
        self.links.lock().await.clone()
    }
}

#[async_trait]
impl AuditSink for InMemoryAuditSink {
    async fn find_or_create_container(&self, path: &str) -> Result<()> {
        if self.containers.lock().await.insert(path.to_string()) {
            debug!(%path, "created container");
        }
        Ok(())
    }

    async fn write(&self, path: &str, record: &AuditRecord) -> Result<()> {
        debug!(%path, "writing audit record");
        self.records.lock().await.insert(path.to_string(), record.clone());
        Ok(())
    }

    async fn set_related_resource_link(&self, path: &str, uri: &str) -> Result<()> {
        self.links.lock().await.insert(path.to_string(), uri.to_string());
        Ok(())
    }
}

/// Log-only sink: emits each record as a structured log line instead of
/// persisting it. Useful as a proof-of-concept deployment target and for
/// tracing traffic without a backing repository.
pub struct TracingAuditSink;

#[async_trait]
impl AuditSink for TracingAuditSink {
    async fn find_or_create_container(&self, path: &str) -> Result<()> {
        debug!(%path, "container ensured");
        Ok(())
    }

    async fn write(&self, path: &str, record: &AuditRecord) -> Result<()> {
        let body = serde_json::to_string(record)
            .map_err(|err| AuditError::Sink(Box::new(err)))?;
        info!(
            occurred_at = %record.occurred_at,
            agent = %record.agents.first().map(String::as_str).unwrap_or(""),
            %path,
            %body,
            "audit record"
        );
        Ok(())
    }

    async fn set_related_resource_link(&self, path: &str, uri: &str) -> Result<()> {
        info!(%path, %uri, "related resource");
        Ok(())
    }
}
