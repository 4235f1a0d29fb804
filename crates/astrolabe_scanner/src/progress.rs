//! # Progress Reporting
//!
//! Workers report every completed galaxy row to a [`ProgressSink`]. The
//! line protocol on stdout is:
//!
//! ```text
//! PROGRESS<TAB>rowsDone<TAB>totalRows<TAB>galaxies<TAB>systems<TAB>planets
//! DONE<TAB>galaxies<TAB>systems<TAB>planets<TAB>elapsedMilliseconds
//! ```
//!
//! `PROGRESS` tallies are the reported row's worker-local counts, not
//! running totals. With an interval above one, rows in between are not
//! printed, so the printed tallies do not sum to the `DONE` totals. Every
//! row still reaches the [`ProgressSink`]; sum there for exact totals.

use std::fmt;
use std::io::Write;
use std::time::Duration;

use parking_lot::Mutex;

use crate::catalog::Totals;

/// Default number of rows between two printed progress lines.
pub const DEFAULT_PROGRESS_INTERVAL: u32 = 5;

/// One completed galaxy row.
///
/// `local` counts only this row. Printed `PROGRESS` lines are sparse (see
/// [`WriterProgress`]), so only the full stream of reports adds up to the
/// scan totals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowReport {
    /// Galaxy row index (`gy`).
    pub row: i32,
    /// Rows completed so far, this one included.
    pub rows_done: u32,
    /// Rows in the universe.
    pub total_rows: u32,
    /// Records found in this row.
    pub local: Totals,
}

impl fmt::Display for RowReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PROGRESS\t{}\t{}\t{}",
            self.rows_done, self.total_rows, self.local
        )
    }
}

/// Final scan summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanSummary {
    /// Records in the catalog.
    pub totals: Totals,
    /// Wall-clock duration of the scan.
    pub elapsed: Duration,
}

impl fmt::Display for ScanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DONE\t{}\t{}", self.totals, self.elapsed.as_millis())
    }
}

/// Receives a report for every completed row, from any worker thread.
pub trait ProgressSink: Sync {
    /// Called once per row, after the row has been merged.
    fn row_completed(&self, report: &RowReport);
}

/// Discards all reports.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentProgress;

impl ProgressSink for SilentProgress {
    fn row_completed(&self, _report: &RowReport) {}
}

/// Prints `PROGRESS` lines to a writer, serialized by a print lock.
///
/// A line is printed when `rows_done` is a multiple of the interval or
/// equals the total row count.
#[derive(Debug)]
pub struct WriterProgress<W> {
    out: Mutex<W>,
    interval: u32,
}

impl<W: Write + Send> WriterProgress<W> {
    /// Wraps a writer. An interval of zero is treated as one.
    pub fn new(out: W, interval: u32) -> Self {
        Self {
            out: Mutex::new(out),
            interval: interval.max(1),
        }
    }

    /// Whether a report is due for printing.
    #[must_use]
    pub const fn is_due(&self, report: &RowReport) -> bool {
        report.rows_done % self.interval == 0 || report.rows_done == report.total_rows
    }

    /// Runs `f` with the writer under the print lock.
    pub fn with_writer<T>(&self, f: impl FnOnce(&mut W) -> T) -> T {
        f(&mut self.out.lock())
    }

    /// Returns the writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write + Send> ProgressSink for WriterProgress<W> {
    fn row_completed(&self, report: &RowReport) {
        if !self.is_due(report) {
            return;
        }
        let mut out = self.out.lock();
        if let Err(error) = writeln!(out, "{report}").and_then(|()| out.flush()) {
            tracing::warn!(%error, row = report.row, "failed to write progress line");
        }
    }
}

/// Keeps every report, in arrival order.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    reports: Mutex<Vec<RowReport>>,
}

impl RecordingProgress {
    /// Empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports received so far.
    #[must_use]
    pub fn reports(&self) -> Vec<RowReport> {
        self.reports.lock().clone()
    }

    /// Sum of the worker-local tallies of every report.
    #[must_use]
    pub fn tally(&self) -> Totals {
        self.reports
            .lock()
            .iter()
            .fold(Totals::default(), |sum, report| sum + report.local)
    }
}

impl ProgressSink for RecordingProgress {
    fn row_completed(&self, report: &RowReport) {
        self.reports.lock().push(*report);
    }
}
