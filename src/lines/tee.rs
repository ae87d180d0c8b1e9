use std::io;

use super::LineSink;

/// Fans every line out to a primary and a secondary sink.
///
/// Each `write_line` writes the primary, then the secondary, then flushes the
/// primary. A line that fails to reach the primary never shows up on the
/// secondary, and the primary is flushed per line rather than batched.
pub struct DualSinkWriter<P, S> {
    primary: P,
    secondary: S,
}

impl<P: LineSink, S: LineSink> DualSinkWriter<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

impl<P: LineSink, S: LineSink> LineSink for DualSinkWriter<P, S> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.primary.write_line(line)?;
        self.secondary.write_line(line)?;
        self.primary.flush()
    }

    fn flush(&mut self) -> io::Result<()> {
        self.primary.flush()?;
        self.secondary.flush()
    }
}
