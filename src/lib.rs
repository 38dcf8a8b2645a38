#![warn(missing_docs)]

//! Building blocks for dispatching signed documents and memoizing record lookups.
//!
//! Provide:
//! - A [LookupCache][lookup_cache::LookupCache] that memoizes successful record
//!   retrievals from a backing [RecordRetriever][lookup_cache::RecordRetriever].
//! - A [FileDispatcher][dispatch::FileDispatcher] that routes outbound files through
//!   recognition, validation, signing, and sending.
//! - The [entities] exchanged between the components and their collaborators.

pub mod dispatch;
pub mod entities;
pub mod logging;
pub mod lookup_cache;

#[cfg(test)]
pub(crate) mod test_tools;

/// Generic error type
pub type StdError = anyhow::Error;

/// Generic result type
pub type StdResult<T> = anyhow::Result<T>;
