use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Document represents the structured form of a recognized [OutboundFile][crate::entities::OutboundFile]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// The name of the file the document was recognized from
    pub name: String,

    /// The document content, signed as-is at dispatch time
    pub content: Vec<u8>,

    /// The document creation time, used for the freshness check
    pub created: DateTime<Utc>,

    /// The document format version
    pub format: String,
}
