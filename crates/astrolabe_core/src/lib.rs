//! # Astrolabe Core
//!
//! Legacy-compatible arithmetic and spatial keys.
//!
//! ## Design Principles
//!
//! 1. **Bit-exact**: every hash matches the legacy 32-bit runtime
//! 2. **Pure**: no state, no I/O, total functions only
//! 3. **Isolated**: the emulation lives here so nothing else needs to care
//!
//! ## Core Components
//!
//! - [`hash`]: wraparound conversions, truncating modulo, integer hashes
//! - [`MapKey`]: canonical galaxy / star-system / planet keys
//! - [`GridPos`]: integer cell coordinates
//!
//! ## Example
//!
//! ```rust
//! use astrolabe_core::{hash, GridPos, MapKey};
//!
//! let key = MapKey::galaxy(GridPos::new(1, 4));
//! assert_eq!(key.to_string(), "Weathering.MapOfGalaxy#=1,4");
//! assert_eq!(key.hash(), hash::hash_string("Weathering.MapOfGalaxy#=1,4"));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod grid;
pub mod hash;
pub mod key;

pub use error::{KeyError, KeyResult};
pub use grid::GridPos;
pub use key::{MapKey, MapType, SelfIndex, KEY_NAMESPACE};
