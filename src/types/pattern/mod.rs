//! Container patterns: finite sequences with cycling, algebra, and a library
//! of constructors.
//!
//! Every operation that walks more than one sequence reconciles their
//! lengths by cycling each to the least common multiple, so a pattern of 3
//! and a pattern of 2 combine into a pattern of 6.

mod broadcast;
mod constructors;
mod core;
mod cycle;
mod euclidean;
mod literal;
mod range;


// Re-export public types
pub use broadcast::loop_pattern_func;
pub use constructors::{
    p10, p10_with, p_alt, p_dur, p_dur_with, p_euclid, p_pairs, p_pairs_with, p_range, p_shuf,
    p_shuf_with, p_sine, p_sine_with, p_sq, p_sq_with, p_step, p_stretch, p_stutter,
    p_stutter_with, p_sum, p_sum_with_limit, p_tri, p_zip, p_zip2, p_zip2_with, PositionalArgs,
};
pub use self::core::Pattern;
pub use cycle::{lcm_of, modi};
pub use euclidean::{euclid, euclid_gaps};
pub use literal::{group, literal, Item};
pub use range::{range_expand, RangeSpec};
