//! Line-oriented sources and sinks the ranking engine reads from and writes to.

pub mod tee;

pub use tee::DualSinkWriter;

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Something that can be polled for the next line of input.
pub trait LineSource {
    /// Next line without its terminator, or `None` at end of input.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Something that accepts whole output lines.
pub trait LineSink {
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;
}

impl<T: LineSource + ?Sized> LineSource for &mut T {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        (**self).next_line()
    }
}

impl<T: LineSink + ?Sized> LineSink for &mut T {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

/// Reads lines from any buffered reader.
///
/// `\n`, `\r\n` and a lone `\r` all end a line and are stripped. A UTF-8
/// byte-order mark at the very start of the input is dropped.
pub struct TextSource<R> {
    reader: R,
    at_start: bool,
    skip_line_feed: bool,
}

impl<R: BufRead> TextSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            at_start: true,
            skip_line_feed: false,
        }
    }

    /// Raw bytes of the next line, or `None` at end of input.
    fn read_line_bytes(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        let mut read_any = false;

        loop {
            let available = self.reader.fill_buf()?;
            if available.is_empty() {
                break;
            }

            // The `\n` of a `\r\n` pair split across reads.
            if self.skip_line_feed {
                self.skip_line_feed = false;
                if available[0] == b'\n' {
                    self.reader.consume(1);
                    continue;
                }
            }

            read_any = true;
            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    line.extend_from_slice(&available[..end]);
                    let terminator = available[end];
                    self.reader.consume(end + 1);
                    self.skip_line_feed = terminator == b'\r';
                    return Ok(Some(line));
                }
                None => {
                    let len = available.len();
                    line.extend_from_slice(available);
                    self.reader.consume(len);
                }
            }
        }

        Ok(read_any.then_some(line))
    }
}

impl<R: BufRead> LineSource for TextSource<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let Some(bytes) = self.read_line_bytes()? else {
            return Ok(None);
        };
        let mut line = String::from_utf8(bytes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        if self.at_start {
            self.at_start = false;
            if line.starts_with('\u{feff}') {
                line.drain(..'\u{feff}'.len_utf8());
            }
        }

        Ok(Some(line))
    }
}

/// Writes each line followed by `\n` to any writer.
pub struct TextSink<W> {
    writer: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LineSink for TextSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// In-memory source, handy when the lines are already held.
#[derive(Debug, Default)]
pub struct VecSource {
    lines: VecDeque<String>,
}

impl VecSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not yet pulled.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for VecSource {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// In-memory sink collecting every written line.
#[derive(Debug, Default)]
pub struct VecSink {
    lines: Vec<String>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl LineSink for VecSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
