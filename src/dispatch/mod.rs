//! Routing of outbound files through recognition, validation, signing and sending.
//!
//! Each file is processed independently by the [FileDispatcher]: a failure at
//! any stage skips the affected file alone and the remaining files are
//! dispatched normally.

mod dispatcher;
mod interface;

pub use dispatcher::{DispatchReport, FileDispatcher};
#[cfg(test)]
pub use interface::{MockCryptographer, MockDocumentRecognizer, MockSignedContentSender};
pub use interface::{Cryptographer, DocumentRecognizer, SignedContentSender};
