use crate::entities::Record;

#[cfg(test)]
use mockall::automock;

/// RecordRetriever is in charge of retrieving a [Record] given its identifier
///
/// Yielding nothing is a normal outcome, not an error: the capability reports
/// whether a record exists for the identifier, and callers decide how to
/// handle absence.
#[cfg_attr(test, automock)]
pub trait RecordRetriever: Sync + Send {
    /// Attempt to retrieve the [Record] stored under the given identifier
    fn retrieve(&self, record_id: &str) -> Option<Record>;
}
