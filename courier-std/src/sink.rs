//! Line sinks.
//!
//! Subscribers that report what they did write whole lines to a [`LineSink`]
//! instead of printing directly, so the same subscriber can target the
//! console or an in-memory recorder.

use std::io::{self, Write};

/// A destination for single lines of text.
pub trait LineSink: Send + Sync + 'static {
    /// Writes one line. The sink appends the line terminator.
    fn emit(&self, line: &str) -> io::Result<()>;
}

/// Writes each line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl LineSink for StdoutSink {
    fn emit(&self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()
    }
}
