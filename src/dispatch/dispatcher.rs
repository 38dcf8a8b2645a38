use std::sync::Arc;

use chrono::{Months, Utc};
use slog::{Logger, debug, warn};

use super::{Cryptographer, DocumentRecognizer, SignedContentSender};
use crate::entities::{Document, OutboundFile, SigningCertificate};
use crate::logging::LoggerExtensions;

/// Document format versions accepted for dispatch.
const SUPPORTED_FORMATS: [&str; 2] = ["4.0", "3.1"];

/// Outcome of a [FileDispatcher::dispatch] call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DispatchReport {
    /// The files for which a dispatch stage failed.
    pub skipped_files: Vec<OutboundFile>,
}

/// FileDispatcher routes outbound files through recognition, validation,
/// signing and sending.
///
/// Files are processed independently: a failure at any stage skips the
/// affected file alone, and the remaining files of the batch are dispatched
/// normally. A document is dispatched only if its format is supported and it
/// was created less than a month ago.
pub struct FileDispatcher {
    recognizer: Arc<dyn DocumentRecognizer>,
    cryptographer: Arc<dyn Cryptographer>,
    sender: Arc<dyn SignedContentSender>,
    logger: Logger,
}

impl FileDispatcher {
    /// [FileDispatcher] factory.
    pub fn new(
        recognizer: Arc<dyn DocumentRecognizer>,
        cryptographer: Arc<dyn Cryptographer>,
        sender: Arc<dyn SignedContentSender>,
        logger: Logger,
    ) -> Self {
        Self {
            recognizer,
            cryptographer,
            sender,
            logger: logger.new_with_component_name::<Self>(),
        }
    }

    /// Dispatch the given files, signing their recognized content with the
    /// given certificate.
    ///
    /// The report lists the files that could not be dispatched.
    pub fn dispatch(
        &self,
        files: &[OutboundFile],
        certificate: &SigningCertificate,
    ) -> DispatchReport {
        DispatchReport {
            skipped_files: files
                .iter()
                .filter(|file| !self.try_dispatch(file, certificate))
                .cloned()
                .collect(),
        }
    }

    fn try_dispatch(&self, file: &OutboundFile, certificate: &SigningCertificate) -> bool {
        let Some(document) = self.recognizer.recognize(file) else {
            warn!(self.logger, "File not recognized, skipping"; "file_name" => &file.name);
            return false;
        };
        if !Self::has_supported_format(&document) {
            warn!(
                self.logger, "Unsupported document format, skipping";
                "file_name" => &file.name, "format" => &document.format
            );
            return false;
        }
        if !Self::is_fresh(&document) {
            warn!(
                self.logger, "Document is more than a month old, skipping";
                "file_name" => &file.name
            );
            return false;
        }

        let signed_content = match self.cryptographer.sign(&document.content, certificate) {
            Ok(signed_content) => signed_content,
            Err(e) => {
                warn!(self.logger, "Could not sign document: {e}"; "file_name" => &file.name);
                return false;
            }
        };
        match self.sender.send(&signed_content) {
            Ok(()) => {
                debug!(
                    self.logger, "File dispatched";
                    "file_name" => &file.name, "signed_content" => hex::encode(&signed_content)
                );
                true
            }
            Err(e) => {
                warn!(self.logger, "Could not send signed content: {e}"; "file_name" => &file.name);
                false
            }
        }
    }

    fn has_supported_format(document: &Document) -> bool {
        SUPPORTED_FORMATS.contains(&document.format.as_str())
    }

    fn is_fresh(document: &Document) -> bool {
        document.created + Months::new(1) > Utc::now()
    }
}
