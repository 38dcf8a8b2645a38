//! Test doubles and helpers shared by the unit tests.

use std::{io, sync::Arc};

use slog::{Drain, Logger};
use slog_async::Async;
use slog_term::{CompactFormat, PlainDecorator};

/// Build [Logger] instances writing to the output captured by the test harness.
pub struct TestLogger;

impl TestLogger {
    fn from_writer<W: io::Write + Send + 'static>(writer: W) -> Logger {
        let decorator = PlainDecorator::new(writer);
        let drain = CompactFormat::new(decorator).build().fuse();
        let drain = Async::new(drain).build().fuse();
        Logger::root(Arc::new(drain), slog::o!())
    }

    /// A logger writing to stdout.
    pub fn stdout() -> Logger {
        Self::from_writer(slog_term::TestStdoutWriter)
    }
}
