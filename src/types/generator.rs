//! Generator patterns: endless sequences computed from the index on demand.
//!
//! Unlike a [`Pattern`], a generator stores no data. Reading index `i` runs
//! its function for `i`, so any index can be read without building the values
//! before it. Random generators draw again on every read; [`PSquare`] is the
//! deterministic one.

use super::pattern::{literal, Item, Pattern};
use super::value::Value;
use crate::error::PatternError;
use crate::random::RandomSource;
use anyhow::Result;

/// An infinite, index-addressed sequence
pub trait GeneratorPattern {
    /// Value at `index`
    fn get(&self, index: usize) -> Value;

    /// Whether reading the same index twice always gives the same value
    fn is_deterministic(&self) -> bool {
        false
    }

    /// The first `n` values as a container pattern
    fn take(&self, n: usize) -> Pattern {
        (0..n).map(|i| self.get(i)).collect()
    }
}

#[derive(Clone, Debug)]
enum RandDomain {
    /// Uniform pick from a non-empty candidate list
    Choice(Vec<Value>),
    /// Uniform integer in `[low, high)`, `low < high`
    Between { low: i64, high: i64 },
}

/// Random integers from a range, or random picks from a collection
#[derive(Clone, Debug)]
pub struct PRand {
    domain: RandDomain,
    rng: RandomSource,
}

impl PRand {
    /// Pick uniformly from `candidates` on every read
    pub fn choice(candidates: impl Into<Pattern>) -> Result<Self> {
        let candidates = candidates.into().into_values();
        if candidates.is_empty() {
            return Err(PatternError::EmptyPattern.into());
        }
        Ok(PRand {
            domain: RandDomain::Choice(candidates),
            rng: RandomSource::global(),
        })
    }

    /// Integers in `[0, high)`
    pub fn upto(high: i64) -> Result<Self> {
        PRand::between(0, high)
    }

    /// Integers in `[low, high)`
    pub fn between(low: i64, high: i64) -> Result<Self> {
        if low >= high {
            return Err(PatternError::invalid_range(format!(
                "no integers in [{}, {})",
                low, high
            ))
            .into());
        }
        Ok(PRand {
            domain: RandDomain::Between { low, high },
            rng: RandomSource::global(),
        })
    }

    /// Draw from `rng` instead of the process-wide source
    pub fn with_rng(mut self, rng: RandomSource) -> Self {
        self.rng = rng;
        self
    }
}

impl GeneratorPattern for PRand {
    fn get(&self, index: usize) -> Value {
        let value = match &self.domain {
            RandDomain::Choice(candidates) => candidates[self.rng.index(candidates.len())].clone(),
            RandDomain::Between { low, high } => Value::Int(self.rng.int_in(*low, *high)),
        };
        tracing::trace!(index, %value, "PRand draw");
        value
    }
}

/// Random floats between two bounds, triangular around the midpoint
#[derive(Clone, Debug)]
pub struct PWhite {
    low: f64,
    high: f64,
    mid: f64,
    rng: RandomSource,
}

impl PWhite {
    pub fn new(low: f64, high: f64) -> Self {
        PWhite {
            low,
            high,
            mid: (low + high) / 2.0,
            rng: RandomSource::global(),
        }
    }

    pub fn with_rng(mut self, rng: RandomSource) -> Self {
        self.rng = rng;
        self
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }
}

impl Default for PWhite {
    fn default() -> Self {
        PWhite::new(0.0, 1.0)
    }
}

impl GeneratorPattern for PWhite {
    fn get(&self, index: usize) -> Value {
        let x = self.rng.triangular(self.low, self.high, self.mid);
        tracing::trace!(index, x, "PWhite draw");
        Value::Float(x)
    }
}

/// The square of the index being read
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PSquare;

impl GeneratorPattern for PSquare {
    fn get(&self, index: usize) -> Value {
        match i64::try_from(index).ok().and_then(|i| i.checked_mul(i)) {
            Some(square) => Value::Int(square),
            None => Value::Float((index as f64).powi(2)),
        }
    }

    fn is_deterministic(&self) -> bool {
        true
    }
}

/// Random front end: `r![4]` draws integers from `[0, 4)`, while
/// `r![0, 2, 4..7]` picks from the literal's values. A lone nested sequence,
/// `r![vec![1, 2, 3]]`, picks from its elements.
pub fn rand_of<I>(items: I) -> Result<PRand>
where
    I: IntoIterator,
    I::Item: Into<Item>,
{
    let items: Vec<Item> = items.into_iter().map(Into::into).collect();
    match items.as_slice() {
        [Item::Scalar(bound)] if bound.is_number() => PRand::upto(bound.as_i64()?),
        [Item::Nested(candidates)] => PRand::choice(candidates.clone()),
        _ => PRand::choice(literal(items)?),
    }
}

/// Random front end, the generator counterpart of `p!`.
///
/// ```
/// use pattern_algebra::{r, GeneratorPattern, Value};
///
/// let notes = r![0, 2, 4].unwrap();
/// assert!(matches!(notes.get(100), Value::Int(0 | 2 | 4)));
/// ```
#[macro_export]
macro_rules! r {
    ($($item:expr),+ $(,)?) => {
        $crate::rand_of(::std::vec![$($crate::Item::from($item)),+])
    };
}
