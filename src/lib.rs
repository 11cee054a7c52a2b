//! # Pattern Algebra
//!
//! Sequence values for describing music: pitches, durations, and rhythms
//! that a scheduler later reads beat by beat.
//!
//! There are two kinds of pattern:
//!
//! - **Container patterns** ([`Pattern`]) hold a finite list of values and
//!   behave like immutable lists that loop forever: indexing wraps around,
//!   and arithmetic between patterns of different lengths cycles both to the
//!   least common multiple.
//! - **Generator patterns** ([`GeneratorPattern`]) hold no data and compute
//!   the value at any index on demand, either deterministically
//!   ([`PSquare`]) or at random ([`PRand`], [`PWhite`]).
//!
//! ## Example
//!
//! ```
//! use pattern_algebra::{p, p_dur, p_euclid, p_zip};
//!
//! let melody = p![0, 2, 4..7].unwrap();
//! assert_eq!(melody.to_string(), "P[0, 2, 4, 5, 6]");
//!
//! // Euclidean rhythms; a pattern argument fans out into one rhythm per value
//! let rhythm = p_euclid(p![3, 5].unwrap(), 8).unwrap();
//! assert_eq!(rhythm.len(), 16);
//!
//! let durations = p_dur(3, 8).unwrap();
//! assert_eq!(durations.to_string(), "P[0.75, 0.75, 0.5]");
//!
//! let zipped = p_zip([p![0, 1, 2].unwrap(), p![3, 4].unwrap()]).unwrap();
//! assert_eq!(zipped.len(), 6);
//! ```
//!
//! Randomness comes from a [`RandomSource`]; pass a seeded one for
//! reproducible output.

pub mod config;
pub mod error;
pub mod random;
pub mod types;

// Re-export commonly used types
pub use error::PatternError;
pub use random::RandomSource;
pub use types::generator::{rand_of, GeneratorPattern, PRand, PSquare, PWhite};
pub use types::group::PGroup;
pub use types::pattern::*;
pub use types::value::{BinOp, Value};
