//! # Astrolabe Scanner
//!
//! Precomputes the whole universe in parallel and persists it as a flat
//! catalog.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    UNIVERSE SCANNER                      │
//! ├──────────────────────────────────────────────────────────┤
//! │  RowCursor (atomic)  ──>  N scoped workers               │
//! │                             │ row buffer per worker      │
//! │                             ▼                            │
//! │  Mutex<Catalog>  <── append under merge lock             │
//! │  ProgressSink    <── one report per row                  │
//! └──────────────────────────────────────────────────────────┘
//!                │
//!                ▼
//!   sort_canonical ──> [GAL] / [SYS] / [PLN] text  (or JSON)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use astrolabe_procedural::UniverseConfig;
//! use astrolabe_scanner::{ScanConfig, SilentProgress, UniverseScanner};
//!
//! let universe = UniverseConfig {
//!     universe_size: 2,
//!     galaxy_size: 2,
//!     star_system_size: 32,
//!     galaxy_density: 2,
//!     star_system_density: 4,
//! };
//! let scanner = UniverseScanner::new(universe, ScanConfig::with_workers(2)).unwrap();
//! let outcome = scanner.scan(&SilentProgress);
//! assert_eq!(outcome.summary.totals.galaxies, 3);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod catalog;
pub mod error;
pub mod progress;
pub mod scanner;
pub mod serializer;
pub mod settings;

pub use catalog::{Catalog, Totals};
pub use error::{ScanError, ScanResult};
pub use progress::{
    ProgressSink, RecordingProgress, RowReport, ScanSummary, SilentProgress, WriterProgress,
    DEFAULT_PROGRESS_INTERVAL,
};
pub use scanner::{ScanConfig, ScanOutcome, UniverseScanner};
pub use serializer::{
    export_json, load_catalog, read_catalog, save_catalog, save_json, write_catalog, PlanetRecord,
};
pub use settings::Settings;
