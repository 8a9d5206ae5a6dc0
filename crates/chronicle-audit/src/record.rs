//! Immutable audit records and their assembly.

use crate::classifier::AuditCategory;
use crate::error::AuditError;
use crate::events::EventSignal;
use crate::vocabulary::{premis, rdf, record_types, repository};
use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

/// One immutable provenance record, created once per qualifying event
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// Sharded repository path the record is persisted at.
    pub record_path: String,
    /// Absolute URI of the record itself.
    pub record_uri: String,
    /// Fixed tags marking the record: internal event, provenance event,
    /// preservation event.
    pub types: [String; 3],
    /// UTC instant of the occurrence, `YYYY-MM-DDThh:mm:ssZ`.
    pub occurred_at: String,
    /// Acting identity first, then the client label when present.
    pub agents: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<AuditCategory>,
    /// Absolute URI of the audited resource, preserved verbatim even
    /// after the resource is deleted. Absent only when the composed URI
    /// was malformed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_resource: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TripleObject {
    Resource(String),
    Literal(String),
}

/// One flattened statement of a record, for sinks that persist triples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: TripleObject,
}

impl AuditRecord {
    /// Flatten the record into the statements a triple-oriented sink
    /// persists.
    pub fn triples(&self) -> Vec<Triple> {
        let subject = self.record_uri.clone();
        let mut triples = Vec::with_capacity(7);
        for tag in &self.types {
            triples.push(Triple {
                subject: subject.clone(),
                predicate: rdf::TYPE.to_string(),
                object: TripleObject::Resource(tag.clone()),
            });
        }
        triples.push(Triple {
            subject: subject.clone(),
            predicate: premis::HAS_EVENT_DATE_TIME.to_string(),
            object: TripleObject::Literal(self.occurred_at.clone()),
        });
        for agent in &self.agents {
            triples.push(Triple {
                subject: subject.clone(),
                predicate: premis::HAS_EVENT_RELATED_AGENT.to_string(),
                object: TripleObject::Literal(agent.clone()),
            });
        }
        if let Some(category) = &self.category {
            triples.push(Triple {
                subject: subject.clone(),
                predicate: premis::HAS_EVENT_TYPE.to_string(),
                object: TripleObject::Resource(category.as_uri().to_string()),
            });
        }
        if let Some(related) = &self.related_resource {
            triples.push(Triple {
                subject,
                predicate: premis::HAS_EVENT_RELATED_OBJECT.to_string(),
                object: TripleObject::Resource(related.clone()),
            });
        }
        triples
    }
}

/// Assembles an [`AuditRecord`] from a classified signal and its minted
/// record path.
pub struct RecordBuilder<'a> {
    signal: &'a EventSignal,
    record_path: String,
    category: Option<AuditCategory>,
}

impl<'a> RecordBuilder<'a> {
    pub fn new(signal: &'a EventSignal, record_path: impl Into<String>) -> Self {
        Self { signal, record_path: record_path.into(), category: None }
    }

    pub fn category(mut self, category: Option<AuditCategory>) -> Self {
        self.category = category;
        self
    }

    /// Build the record. A malformed related-resource URI is logged and
    /// omitted; it never blocks the record itself.
    pub fn build(self) -> AuditRecord {
        let base = self.signal.base_location.trim_end_matches('/');
        let record_uri = format!("{}{}", base, self.record_path);
        let related_resource = related_resource_uri(base, &self.signal.resource_path)
            .map_err(|err| warn!(error = %err, "malformed related resource uri, omitting link"))
            .ok();

        AuditRecord {
            record_path: self.record_path,
            record_uri,
            types: [
                record_types::INTERNAL_EVENT.to_string(),
                record_types::PREMIS_EVENT.to_string(),
                record_types::PROV_EVENT.to_string(),
            ],
            occurred_at: self.signal.timestamp.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            agents: agents(self.signal),
            category: self.category,
            related_resource,
        }
    }
}

fn agents(signal: &EventSignal) -> Vec<String> {
    let mut agents = vec![signal.agent_id.clone()];
    if let Some(label) = &signal.agent_label {
        agents.push(label.clone());
    }
    agents
}

/// Compose the audited resource's absolute URI.
///
/// A trailing content-stream segment addresses the same audited subject
/// as its owning resource, so it is collapsed before composition.
fn related_resource_uri(base: &str, resource_path: &str) -> Result<String, AuditError> {
    let suffix = format!("/{}", repository::CONTENT_STREAM_SEGMENT);
    let path = resource_path.strip_suffix(suffix.as_str()).unwrap_or(resource_path);
    let uri = format!("{base}{path}");
    match Url::parse(&uri) {
        Ok(_) => Ok(uri),
        Err(source) => Err(AuditError::MalformedUri { uri, source }),
    }
}
