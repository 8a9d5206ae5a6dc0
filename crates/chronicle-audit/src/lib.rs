//! Audit trail minting for a managed content repository.
//!
//! This crate observes lifecycle events on repository resources and
//! mints one immutable audit record per qualifying event: a filter
//! suppresses noise, a classifier assigns a controlled-vocabulary
//! category, a sharded path is minted from the event token, and the
//! assembled record is handed to a pluggable storage sink.

pub mod classifier;
pub mod config;
pub mod error;
pub mod events;
pub mod filter;
pub mod record;
pub mod recorder;
pub mod sink;
pub mod vocabulary;

pub use classifier::{AuditCategory, classify};
pub use config::{AUDIT_ROOT_ENV, AuditConfig};
pub use error::{AuditError, Result};
pub use events::{EventSignal, LifecycleKind};
pub use filter::should_audit;
pub use record::{AuditRecord, RecordBuilder, Triple, TripleObject};
pub use recorder::AuditRecorder;
pub use sink::{AuditSink, InMemoryAuditSink, TracingAuditSink};
