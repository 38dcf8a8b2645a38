use crate::StdResult;
use crate::entities::{Document, OutboundFile, SigningCertificate};

#[cfg(test)]
use mockall::automock;

/// DocumentRecognizer is in charge of interpreting raw outbound files as
/// structured [Document]s
#[cfg_attr(test, automock)]
pub trait DocumentRecognizer: Sync + Send {
    /// Attempt to recognize the given file, yielding its structured form
    ///
    /// An unrecognized file is a normal outcome, not an error.
    fn recognize(&self, file: &OutboundFile) -> Option<Document>;
}

/// Cryptographer is in charge of producing signed payloads on behalf of a
/// [SigningCertificate]
#[cfg_attr(test, automock)]
pub trait Cryptographer: Sync + Send {
    /// Sign the given content with the given certificate
    fn sign(&self, content: &[u8], certificate: &SigningCertificate) -> StdResult<Vec<u8>>;
}

/// SignedContentSender is in charge of transmitting signed payloads to their
/// destination
#[cfg_attr(test, automock)]
pub trait SignedContentSender: Sync + Send {
    /// Send the given signed content
    fn send(&self, signed_content: &[u8]) -> StdResult<()>;
}
