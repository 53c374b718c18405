//! Human-readable range reports.

use std::fmt;
use std::io::{self, Write};

use crate::ModelObserver;

const BORDER: &str = "-----------------------";

/// Final-step figures of a computed range.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct RangeSummary {
    /// Number of steps computed.
    pub steps:      u64,
    pub population: f64,
    pub births:     f64,
    pub deaths:     f64,
}

impl fmt::Display for RangeSummary {
    /// Renders the bordered report block (no surrounding blank lines).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{BORDER}")?;
        writeln!(f, "Step: {}", self.steps)?;
        writeln!(f, "{BORDER}")?;
        writeln!(f, "Population: {:?}", self.population)?;
        writeln!(f, "Number of Births: {:?}", self.births)?;
        writeln!(f, "Number of Deaths: {:?}", self.deaths)?;
        write!(f, "{BORDER}")
    }
}

/// A [`ModelObserver`] that writes a report block to any `io::Write` sink
/// at the end of each range.
///
/// Errors from the sink are stored internally because observer methods have
/// no return value.  Check with [`take_error`][Self::take_error] afterwards.
pub struct ReportWriter<W: Write> {
    sink:       W,
    last_error: Option<io::Error>,
}

impl ReportWriter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink, last_error: None }
    }

    /// Take the stored write error (if any).  Returns `None` if all writes
    /// succeeded.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.last_error.take()
    }

    /// Unwrap the inner sink (e.g. to inspect a buffer in tests).
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn write_block(&mut self, summary: &RangeSummary) -> io::Result<()> {
        writeln!(self.sink)?;
        writeln!(self.sink, "{summary}")?;
        writeln!(self.sink)?;
        self.sink.flush()
    }
}

impl<W: Write> ModelObserver for ReportWriter<W> {
    fn on_range_end(&mut self, summary: &RangeSummary) {
        if let Err(e) = self.write_block(summary) {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}
