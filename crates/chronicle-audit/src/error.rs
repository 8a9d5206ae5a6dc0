use chronicle_id::InvalidTokenError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("audit sink error")]
    Sink(#[from] Box<dyn std::error::Error + Send + Sync>),
    #[error(transparent)]
    InvalidToken(#[from] InvalidTokenError),
    #[error("malformed resource uri `{uri}`")]
    MalformedUri {
        uri: String,
        #[source]
        source: url::ParseError,
    },
    #[error("audit root not configured; event {event_id} dropped")]
    NotConfigured { event_id: String },
}

pub type Result<T> = std::result::Result<T, AuditError>;
