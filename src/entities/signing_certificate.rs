use serde::{Deserialize, Serialize};

/// SigningCertificate represents the signing identity handed to the cryptographer
///
/// The dispatcher never inspects it beyond passing it along.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningCertificate {
    /// The certificate subject
    pub subject: String,

    /// The certificate serial number
    pub serial_number: String,
}
