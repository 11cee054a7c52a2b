//! Named defaults shared by the pattern constructors
//!
//! Where a constructor has an optional argument, the plain form uses the
//! default below and a `_with` form (`p_sum_with_limit` for the sum limit)
//! takes it explicitly.

/// Upper bound on the number of source elements `p_pairs` will process
pub const MAX_SIZE: usize = 2048;

/// Smallest step `p_sum` will distribute before giving up on an exact total
pub const DEFAULT_SUM_LIMIT: f64 = 0.125;

/// Length of one Euclidean step in beats (`p_dur`)
pub const DEFAULT_STEP_DURATION: f64 = 0.25;

/// Samples per sine cycle (`p_sine`)
pub const DEFAULT_SINE_SAMPLES: i64 = 16;

/// Repeat count used by `p_stutter` when none is given
pub const DEFAULT_STUTTER: i64 = 2;

/// `p_pairs` laces each value `n` with `PAIRS_REFLECTION - n` by default
pub const PAIRS_REFLECTION: i64 = 8;

/// `p_sq` defaults: start, exponent, count
pub const DEFAULT_SQ_ARGS: (i64, i64, i64) = (1, 2, 3);
