use std::collections::HashMap;
use std::sync::Arc;

use slog::{Logger, debug};
use thiserror::Error;

use super::RecordRetriever;
use crate::entities::Record;
use crate::logging::LoggerExtensions;

/// [LookupCache] related errors.
#[derive(Error, Debug)]
pub enum LookupCacheError {
    /// Raised when [get][LookupCache::get] is called with an empty identifier.
    #[error("record id must not be empty")]
    EmptyRecordId,
}

/// A [LookupCache] memoizes successful [Record] retrievals from a backing
/// [RecordRetriever].
///
/// Each identifier is looked up against the retriever at most once: after a
/// successful retrieval the record is served from the entry table and never
/// changes. A retrieval that yields nothing is not memoized, so the next
/// lookup for the same identifier consults the retriever again.
///
/// The entry table is exclusively owned by the cache and lives as long as it:
/// there is no eviction, expiry, nor removal operation.
pub struct LookupCache {
    entries: HashMap<String, Record>,
    retriever: Arc<dyn RecordRetriever>,
    logger: Logger,
}

impl LookupCache {
    /// [LookupCache] factory, starting with an empty entry table.
    pub fn new(retriever: Arc<dyn RecordRetriever>, logger: Logger) -> Self {
        Self {
            entries: HashMap::new(),
            retriever,
            logger: logger.new_with_component_name::<Self>(),
        }
    }

    /// Get the [Record] stored under the given identifier, consulting the
    /// backing retriever only when no entry exists yet.
    ///
    /// Returns `Ok(None)` when the retriever yields nothing; absence is a
    /// normal outcome and nothing is stored in that case.
    pub fn get(&mut self, record_id: &str) -> Result<Option<Record>, LookupCacheError> {
        if record_id.is_empty() {
            return Err(LookupCacheError::EmptyRecordId);
        }

        if let Some(record) = self.entries.get(record_id) {
            debug!(self.logger, "Cache hit"; "record_id" => record_id);
            return Ok(Some(record.clone()));
        }

        match self.retriever.retrieve(record_id) {
            Some(record) => {
                debug!(self.logger, "Cache miss, memoizing retrieved record"; "record_id" => record_id);
                self.entries.insert(record_id.to_string(), record.clone());
                Ok(Some(record))
            }
            None => {
                debug!(self.logger, "Cache miss, retriever yielded nothing"; "record_id" => record_id);
                Ok(None)
            }
        }
    }
}
