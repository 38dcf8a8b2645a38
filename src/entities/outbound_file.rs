use serde::{Deserialize, Serialize};

/// OutboundFile represents a raw file submitted for dispatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundFile {
    /// The file name
    pub name: String,

    /// The raw file content
    pub content: Vec<u8>,
}

impl OutboundFile {
    /// [OutboundFile] factory
    pub fn new(name: &str, content: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            content,
        }
    }
}
