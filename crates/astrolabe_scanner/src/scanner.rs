//! # Universe Scanner
//!
//! Walks the whole universe with a pool of scoped worker threads.
//!
//! ## Protocol
//!
//! ```text
//!   worker 1 ──┐                      ┌── row buffer ──┐
//!   worker 2 ──┼── claim(row) ──> scan ── row buffer ──┼──> [merge lock] ──> Catalog
//!   worker N ──┘   (atomic cursor)    └── row buffer ──┘
//! ```
//!
//! 1. A worker claims the next galaxy row from an atomic cursor
//! 2. It expands the row (galaxies, systems, planets) into its own buffer
//! 3. It appends the buffer to the shared catalog under the merge lock
//! 4. It bumps the rows-done counter and reports the row
//!
//! Every row is claimed exactly once. Record content never depends on
//! scheduling; the order in which rows reach the catalog does.

use std::sync::atomic::{AtomicU32, Ordering};
use std::thread;
use std::time::Instant;

use astrolabe_procedural::{UniverseConfig, UniverseGenerator};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{ScanError, ScanResult};
use crate::progress::{ProgressSink, RowReport, ScanSummary, DEFAULT_PROGRESS_INTERVAL};

/// Worker pool settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Number of worker threads, at least 1.
    pub workers: usize,
    /// Rows between two printed progress lines.
    pub progress_interval: u32,
}

impl ScanConfig {
    /// Configuration with the given worker count and default interval.
    #[must_use]
    pub const fn with_workers(workers: usize) -> Self {
        Self {
            workers,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    /// Checks every field.
    ///
    /// # Errors
    ///
    /// - [`ScanError::InvalidWorkers`] if `workers` is zero
    /// - [`ScanError::InvalidConfig`] if `progress_interval` is zero
    pub fn validate(&self) -> ScanResult<()> {
        if self.workers == 0 {
            return Err(ScanError::InvalidWorkers(self.workers));
        }
        if self.progress_interval == 0 {
            return Err(ScanError::InvalidConfig(
                "progress_interval must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        let workers = thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get);
        Self::with_workers(workers)
    }
}

/// Hands out galaxy rows and counts completed ones.
struct RowCursor {
    next: AtomicU32,
    done: AtomicU32,
    total: u32,
}

impl RowCursor {
    const fn new(total: u32) -> Self {
        Self {
            next: AtomicU32::new(0),
            done: AtomicU32::new(0),
            total,
        }
    }

    /// Next unclaimed row, or `None` once every row is taken.
    fn claim(&self) -> Option<u32> {
        let row = self.next.fetch_add(1, Ordering::Relaxed);
        (row < self.total).then_some(row)
    }

    /// Marks one row complete and returns the post-increment count.
    fn complete(&self) -> u32 {
        self.done.fetch_add(1, Ordering::AcqRel) + 1
    }
}

/// Result of a full scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Galaxies and systems in canonical order, planets in merge order.
    pub catalog: Catalog,
    /// Totals and elapsed time.
    pub summary: ScanSummary,
}

/// Parallel scanner over one universe.
#[derive(Clone, Copy, Debug)]
pub struct UniverseScanner {
    universe: UniverseGenerator,
    config: ScanConfig,
}

impl UniverseScanner {
    /// Creates a scanner.
    ///
    /// # Errors
    ///
    /// Returns an error if either configuration is out of range.
    pub fn new(universe: UniverseConfig, config: ScanConfig) -> ScanResult<Self> {
        Self::with_generator(UniverseGenerator::new(universe)?, config)
    }

    /// Creates a scanner over an existing generator.
    ///
    /// # Errors
    ///
    /// Returns an error if the scan configuration is out of range.
    pub fn with_generator(universe: UniverseGenerator, config: ScanConfig) -> ScanResult<Self> {
        config.validate()?;
        Ok(Self { universe, config })
    }

    /// The generator.
    #[must_use]
    pub const fn universe(&self) -> &UniverseGenerator {
        &self.universe
    }

    /// The scan configuration.
    #[must_use]
    pub const fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Number of galaxy rows, the unit of work.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub const fn total_rows(&self) -> u32 {
        self.universe.config().universe_size as u32
    }

    /// Expands one galaxy row into `out`.
    pub fn scan_row(&self, gy: i32, out: &mut Catalog) {
        for galaxy in self.universe.galaxy_row(gy) {
            out.galaxies.push(galaxy);
            for system in self.universe.systems_in(galaxy.position) {
                out.systems.push(system);
                out.planets.extend(self.universe.planets_in(&system));
            }
        }
    }

    /// Scans the whole universe.
    ///
    /// Blocks until every worker has finished. `progress` receives one
    /// report per row.
    #[must_use]
    pub fn scan(&self, progress: &dyn ProgressSink) -> ScanOutcome {
        let started = Instant::now();
        let cursor = RowCursor::new(self.total_rows());
        let shared = Mutex::new(Catalog::new());

        tracing::info!(
            workers = self.config.workers,
            rows = cursor.total,
            "universe scan started"
        );

        thread::scope(|scope| {
            for worker in 0..self.config.workers {
                let (cursor, shared) = (&cursor, &shared);
                scope.spawn(move || self.run_worker(worker, cursor, shared, progress));
            }
        });

        let mut catalog = shared.into_inner();
        catalog.sort_canonical();
        let summary = ScanSummary {
            totals: catalog.totals(),
            elapsed: started.elapsed(),
        };

        tracing::info!(
            galaxies = summary.totals.galaxies,
            systems = summary.totals.systems,
            planets = summary.totals.planets,
            elapsed_ms = u64::try_from(summary.elapsed.as_millis()).unwrap_or(u64::MAX),
            "universe scan finished"
        );

        ScanOutcome { catalog, summary }
    }

    fn run_worker(
        &self,
        worker: usize,
        cursor: &RowCursor,
        shared: &Mutex<Catalog>,
        progress: &dyn ProgressSink,
    ) {
        let mut local = Catalog::new();
        while let Some(row) = cursor.claim() {
            let Ok(gy) = i32::try_from(row) else {
                break;
            };
            self.scan_row(gy, &mut local);
            let tally = local.totals();

            shared.lock().append(&mut local);
            let rows_done = cursor.complete();

            tracing::debug!(
                worker,
                row = gy,
                galaxies = tally.galaxies,
                systems = tally.systems,
                planets = tally.planets,
                "row merged"
            );
            progress.row_completed(&RowReport {
                row: gy,
                rows_done,
                total_rows: cursor.total,
                local: tally,
            });
        }
    }
}
