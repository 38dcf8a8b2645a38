use serde::{Deserialize, Serialize};

/// Record represents an opaque value produced by a backing retrieval service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// The unique identifier under which the record was retrieved
    pub record_id: String,

    /// The record payload, opaque to the cache
    pub payload: String,
}

impl Record {
    /// [Record] factory
    pub fn new(record_id: &str, payload: &str) -> Self {
        Self {
            record_id: record_id.to_string(),
            payload: payload.to_string(),
        }
    }
}
