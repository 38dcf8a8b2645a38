//! Memoization of record retrievals against a backing retrieval service.
//!
//! A [LookupCache] consults its [RecordRetriever] at most once per identifier:
//! once a retrieval succeeded, later lookups are served from the entry table.
//! Failed retrievals are not memoized.

mod cache;
mod interface;

pub use cache::{LookupCache, LookupCacheError};
#[cfg(test)]
pub use interface::MockRecordRetriever;
pub use interface::RecordRetriever;
