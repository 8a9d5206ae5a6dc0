//! Audit vocabulary constants.
//!
//! Namespaces and terms used to tag audit records and to recognize the
//! repository-managed attributes the filter cares about.

pub mod namespaces {
    pub const REPOSITORY: &str = "http://chronicle.dev/definitions/v1/repository#";
    pub const AUDIT: &str = "http://chronicle.dev/definitions/v1/audit#";
    pub const EVENT_TYPE: &str = "http://id.loc.gov/vocabulary/preservation/eventType/";
    pub const PREMIS: &str = "http://www.loc.gov/premis/rdf/v1#";
    pub const PROV: &str = "http://www.w3.org/ns/prov#";
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
}

// Tags stamped on every audit record.
pub mod record_types {
    pub const INTERNAL_EVENT: &str = "http://chronicle.dev/definitions/v1/audit#InternalEvent";
    pub const PREMIS_EVENT: &str = "http://www.loc.gov/premis/rdf/v1#Event";
    pub const PROV_EVENT: &str = "http://www.w3.org/ns/prov#InstantaneousEvent";
}

// PREMIS predicates carried by a record's triples.
pub mod premis {
    pub const HAS_EVENT_DATE_TIME: &str = "http://www.loc.gov/premis/rdf/v1#hasEventDateTime";
    pub const HAS_EVENT_RELATED_AGENT: &str =
        "http://www.loc.gov/premis/rdf/v1#hasEventRelatedAgent";
    pub const HAS_EVENT_TYPE: &str = "http://www.loc.gov/premis/rdf/v1#hasEventType";
    pub const HAS_EVENT_RELATED_OBJECT: &str =
        "http://www.loc.gov/premis/rdf/v1#hasEventRelatedObject";
}

pub mod rdf {
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

// Repository-managed resource attributes and type tags.
pub mod repository {
    pub const LAST_MODIFIED: &str = "http://chronicle.dev/definitions/v1/repository#lastModified";
    pub const LAST_MODIFIED_BY: &str =
        "http://chronicle.dev/definitions/v1/repository#lastModifiedBy";
    /// Type tag marking a resource that carries binary content.
    pub const BINARY_TYPE: &str = "binary-content";
    /// Final path segment addressing a binary's content stream.
    pub const CONTENT_STREAM_SEGMENT: &str = "content-stream";
}

// Controlled audit event categories, by vocabulary URI.
pub mod categories {
    pub const CONTENT_ADDED: &str = "http://id.loc.gov/vocabulary/preservation/eventType/ing";
    pub const CONTENT_MODIFIED: &str =
        "http://chronicle.dev/definitions/v1/audit#contentModification";
    pub const CONTENT_REMOVED: &str = "http://chronicle.dev/definitions/v1/audit#contentRemoval";
    pub const OBJECT_ADDED: &str = "http://id.loc.gov/vocabulary/preservation/eventType/cre";
    pub const OBJECT_MODIFIED: &str =
        "http://chronicle.dev/definitions/v1/audit#metadataModification";
    pub const OBJECT_REMOVED: &str = "http://id.loc.gov/vocabulary/preservation/eventType/del";
}
