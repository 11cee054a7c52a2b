//! Pattern constructor library.
//!
//! Functions that take other sequences (`p_alt`, `p_zip`, `p_stutter`, ...)
//! work on whole patterns. Functions that take numbers (`p_euclid`,
//! `p_sum`, `p_range`, ...) are broadcast: any numeric argument may itself
//! be a pattern, and the result is the concatenation of one call per
//! element (see [`loop_pattern_func`](super::loop_pattern_func)).

use super::broadcast::{arity, broadcast};
use super::core::Pattern;
use super::cycle::lcm_of;
use super::euclidean::{euclid, euclid_gaps};
use super::range::range_expand;
use crate::config::{
    DEFAULT_SINE_SAMPLES, DEFAULT_SQ_ARGS, DEFAULT_STEP_DURATION, DEFAULT_STUTTER,
    DEFAULT_SUM_LIMIT, MAX_SIZE, PAIRS_REFLECTION,
};
use crate::error::PatternError;
use crate::random::RandomSource;
use crate::types::group::PGroup;
use crate::types::value::{BinOp, Value};
use anyhow::Result;
use std::f64::consts::PI;

/// Positional arguments for `p_range` and `p_tri`: `start`, `(start, stop)`
/// or `(start, stop, step)`. Any of them may be a pattern.
///
/// There is no placeholder for a missing stop. A call that leaves the stop
/// out and gives a step shifts the step into the stop slot, so write it as
/// the two-argument form `(start, step)`.
pub trait PositionalArgs {
    fn into_args(self) -> Vec<Value>;
}

impl PositionalArgs for i32 {
    fn into_args(self) -> Vec<Value> {
        vec![self.into()]
    }
}

impl PositionalArgs for i64 {
    fn into_args(self) -> Vec<Value> {
        vec![self.into()]
    }
}

impl PositionalArgs for Value {
    fn into_args(self) -> Vec<Value> {
        vec![self]
    }
}

impl PositionalArgs for Pattern {
    fn into_args(self) -> Vec<Value> {
        vec![self.into()]
    }
}

impl<A: Into<Value>> PositionalArgs for (A,) {
    fn into_args(self) -> Vec<Value> {
        vec![self.0.into()]
    }
}

impl<A: Into<Value>, B: Into<Value>> PositionalArgs for (A, B) {
    fn into_args(self) -> Vec<Value> {
        vec![self.0.into(), self.1.into()]
    }
}

impl<A: Into<Value>, B: Into<Value>, C: Into<Value>> PositionalArgs for (A, B, C) {
    fn into_args(self) -> Vec<Value> {
        vec![self.0.into(), self.1.into(), self.2.into()]
    }
}

// ============================================================================
// Sequence combinators
// ============================================================================

/// Repeat each value of `seq` [`DEFAULT_STUTTER`] times
pub fn p_stutter(seq: impl Into<Pattern>) -> Result<Pattern> {
    p_stutter_with(seq, DEFAULT_STUTTER)
}

/// Repeat each value of `seq` `n` times; `n` may be a pattern
pub fn p_stutter_with(seq: impl Into<Pattern>, n: impl Into<Value>) -> Result<Pattern> {
    seq.into().stutter(n)
}

/// Shuffled copy of `seq`
pub fn p_shuf(seq: impl Into<Pattern>) -> Pattern {
    seq.into().shuffle()
}

pub fn p_shuf_with(seq: impl Into<Pattern>, rng: &RandomSource) -> Pattern {
    seq.into().shuffle_with(rng)
}

/// `seq` looped until it is `size` values long.
/// `p_stretch([0, 1, 2], 5)` is `P[0, 1, 2, 0, 1]`.
pub fn p_stretch(seq: impl Into<Pattern>, size: usize) -> Result<Pattern> {
    seq.into().stretch(size)
}

/// Interleave two or more sequences.
///
/// Round `r` takes element `r` (cycling) of each input in order, for `r` up
/// to the LCM of the lengths. `p_alt([[0, 1], [5]])` is `P[0, 5, 1, 5]`.
pub fn p_alt<I, T>(patterns: I) -> Result<Pattern>
where
    I: IntoIterator<Item = T>,
    T: Into<Pattern>,
{
    let patterns = at_least_two(patterns, "p_alt")?;
    let size = lcm_of(patterns.iter().map(Pattern::len))?;
    let mut data = Vec::with_capacity(size * patterns.len());
    for round in 0..size as i64 {
        for pattern in &patterns {
            data.push(pattern.modi(round)?.clone());
        }
    }
    Ok(Pattern::from_values(data))
}

/// Lace `seq` with `8 - n` for each value `n`
pub fn p_pairs(seq: impl Into<Pattern>) -> Result<Pattern> {
    let reflection = Value::Int(PAIRS_REFLECTION);
    p_pairs_with(seq, |n| reflection.binary(BinOp::Sub, n))
}

/// Lace `seq` with a second sequence derived from it: each value is followed
/// by `func(value)`. Only the first [`MAX_SIZE`] values are used.
pub fn p_pairs_with<F>(seq: impl Into<Pattern>, func: F) -> Result<Pattern>
where
    F: Fn(&Value) -> Result<Value>,
{
    let seq = seq.into();
    if seq.len() > MAX_SIZE {
        tracing::warn!(len = seq.len(), max = MAX_SIZE, "p_pairs input truncated");
    }
    let mut data = Vec::with_capacity(2 * seq.len().min(MAX_SIZE));
    for item in seq.iter().take(MAX_SIZE) {
        data.push(item.clone());
        data.push(func(item)?);
    }
    Ok(Pattern::from_values(data))
}

/// Zip two or more sequences into a pattern of groups, cycling each to the
/// LCM of the lengths.
///
/// `p_zip([[0, 1, 2], [3, 4]])` is
/// `P[P(0, 3), P(1, 4), P(2, 3), P(0, 4), P(1, 3), P(2, 4)]`.
pub fn p_zip<I, T>(patterns: I) -> Result<Pattern>
where
    I: IntoIterator<Item = T>,
    T: Into<Pattern>,
{
    let patterns = at_least_two(patterns, "p_zip")?;
    let size = lcm_of(patterns.iter().map(Pattern::len))?;
    (0..size as i64)
        .map(|i| {
            patterns
                .iter()
                .map(|pattern| pattern.modi(i).cloned())
                .collect::<Result<PGroup>>()
                .map(Value::Group)
        })
        .collect()
}

/// Zip exactly two sequences into pairs
pub fn p_zip2(a: impl Into<Pattern>, b: impl Into<Pattern>) -> Result<Pattern> {
    p_zip2_with(a, b, |_, _| true)
}

/// Like [`p_zip2`] but keeps only the pairs satisfying `rule`. Rejected pairs
/// are dropped, so the result may be shorter than the LCM.
pub fn p_zip2_with<F>(a: impl Into<Pattern>, b: impl Into<Pattern>, rule: F) -> Result<Pattern>
where
    F: Fn(&Value, &Value) -> bool,
{
    let (a, b) = (a.into(), b.into());
    let size = lcm_of([a.len(), b.len()])?;
    let mut data = Vec::new();
    for i in 0..size as i64 {
        let (x, y) = (a.modi(i)?, b.modi(i)?);
        if rule(x, y) {
            data.push(Value::Group(PGroup::new(vec![x.clone(), y.clone()])));
        }
    }
    Ok(Pattern::from_values(data))
}

fn at_least_two<I, T>(patterns: I, name: &str) -> Result<Vec<Pattern>>
where
    I: IntoIterator<Item = T>,
    T: Into<Pattern>,
{
    let patterns: Vec<Pattern> = patterns.into_iter().map(Into::into).collect();
    if patterns.len() < 2 {
        return Err(PatternError::invalid_argument(format!(
            "{} needs at least two sequences, found {}",
            name,
            patterns.len()
        ))
        .into());
    }
    Ok(patterns)
}

// ============================================================================
// Broadcast constructors
// ============================================================================

/// `n` values summing to `total`. `p_sum(3, 8)` is `P[3, 3, 2]` and
/// `p_sum(5, 4)` is `P[1, 0.75, 0.75, 0.75, 0.75]`.
pub fn p_sum(n: impl Into<Value>, total: impl Into<Value>) -> Result<Pattern> {
    p_sum_with_limit(n, total, DEFAULT_SUM_LIMIT)
}

/// [`p_sum`] with an explicit smallest step.
///
/// Values are built from halvings of a power of two, so the total is exact
/// unless `lim` cuts the refinement short; in that case the result falls
/// just short of `total`.
pub fn p_sum_with_limit(
    n: impl Into<Value>,
    total: impl Into<Value>,
    lim: f64,
) -> Result<Pattern> {
    broadcast(&[n.into(), total.into()], |args: &[Value]| {
        let [n, total] = arity::<2>(args)?;
        sum_to_total(n.as_count()?, total.as_f64()?, lim)
    })
}

fn sum_to_total(n: usize, total: f64, lim: f64) -> Result<Pattern> {
    if n == 0 {
        return Ok(Pattern::new());
    }
    if !total.is_finite() || total < 0.0 {
        return Err(PatternError::invalid_argument(format!(
            "p_sum total must be finite and non-negative, found {}",
            total
        ))
        .into());
    }
    if lim.is_nan() || lim <= 0.0 {
        return Err(PatternError::invalid_argument(format!(
            "p_sum limit must be positive, found {}",
            lim
        ))
        .into());
    }
    if total == 0.0 {
        return Ok(Pattern::from(vec![0.0; n]));
    }

    let count = n as f64;
    let mut step: f64 = 1.0;
    while count * step <= total && (count * step * 2.0).is_finite() {
        step *= 2.0;
    }

    // Largest uniform fill that does not overshoot
    while count * step > total {
        step *= 0.5;
    }
    let mut data = vec![step; n];
    let mut sum = count * step;
    step *= 0.5;

    let mut i = 0;
    while sum < total && step >= lim {
        if sum + step > total {
            step *= 0.5;
        } else if sum + step == sum {
            // Below the precision of the running sum
            break;
        } else {
            data[i % n] += step;
            sum += step;
            i += 1;
        }
    }

    if sum != total {
        tracing::debug!(n, total, sum, lim, "p_sum stopped short of its total");
    }
    Ok(Pattern::from(data))
}

/// Integers of `range(start, stop, step)`; omitted arguments take Python
/// `range` positions, so a single argument is the stop.
pub fn p_range(args: impl PositionalArgs) -> Result<Pattern> {
    broadcast(&args.into_args(), |args: &[Value]| Ok(Pattern::from(range_of(args)?)))
}

/// The range followed by its reverse shifted up by one step.
/// `p_tri((0, 3))` is `P[0, 1, 2, 3, 2, 1]`.
pub fn p_tri(args: impl PositionalArgs) -> Result<Pattern> {
    broadcast(&args.into_args(), |args: &[Value]| {
        let up = range_of(args)?;
        let step = match args.get(2) {
            Some(step) => step.as_i64()?,
            None => 1,
        };
        let mut data = up.clone();
        for x in up.into_iter().rev() {
            data.push(x.checked_add(step).ok_or(PatternError::Overflow)?);
        }
        Ok(Pattern::from(data))
    })
}

fn range_of(args: &[Value]) -> Result<Vec<i64>> {
    match args {
        [stop] => range_expand(0, stop.as_i64()?, 1),
        [start, stop] => range_expand(start.as_i64()?, stop.as_i64()?, 1),
        [start, stop, step] => range_expand(start.as_i64()?, stop.as_i64()?, step.as_i64()?),
        _ => Err(PatternError::invalid_argument(format!(
            "range takes 1 to 3 arguments, found {}",
            args.len()
        ))
        .into()),
    }
}

/// One sine cycle in [`DEFAULT_SINE_SAMPLES`] samples
pub fn p_sine() -> Result<Pattern> {
    p_sine_with(DEFAULT_SINE_SAMPLES)
}

/// One cycle of a sine wave in `n` samples: `sin(2πj/n)` for `j` in `0..n`
pub fn p_sine_with(n: impl Into<Value>) -> Result<Pattern> {
    broadcast(&[n.into()], |args: &[Value]| {
        let [n] = arity::<1>(args)?;
        let n = n.as_count()?;
        if n == 0 {
            return Err(PatternError::invalid_argument("p_sine needs at least one sample").into());
        }
        let increment = 2.0 * PI / n as f64;
        Ok((0..n)
            .map(|j| Value::Float((increment * j as f64).sin()))
            .collect())
    })
}

/// Euclidean rhythm of `n` pulses over `k` steps as 1s and 0s.
/// `p_euclid(3, 8)` is `P[1, 0, 0, 1, 0, 0, 1, 0]`.
pub fn p_euclid(n: impl Into<Value>, k: impl Into<Value>) -> Result<Pattern> {
    broadcast(&[n.into(), k.into()], |args: &[Value]| {
        let [n, k] = arity::<2>(args)?;
        let rhythm = euclid(n.as_i64()?, k.as_i64()?)?;
        Ok(rhythm.into_iter().map(|hit| Value::Int(hit.into())).collect())
    })
}

/// Durations of the Euclidean rhythm `(n, k)` with quarter-beat steps.
/// `p_dur(3, 8)` is `P[0.75, 0.75, 0.5]`.
pub fn p_dur(n: impl Into<Value>, k: impl Into<Value>) -> Result<Pattern> {
    p_dur_with(n, k, DEFAULT_STEP_DURATION)
}

/// Durations of the Euclidean rhythm `(n, k)` where one step lasts `dur`
pub fn p_dur_with(
    n: impl Into<Value>,
    k: impl Into<Value>,
    dur: impl Into<Value>,
) -> Result<Pattern> {
    broadcast(&[n.into(), k.into(), dur.into()], |args: &[Value]| {
        let [n, k, dur] = arity::<3>(args)?;
        let gaps = euclid_gaps(n.as_i64()?, k.as_i64()?)?;
        Pattern::from(gaps).mul(dur.clone())
    })
}

/// The squares of 1, 2 and 3 ([`DEFAULT_SQ_ARGS`])
pub fn p_sq() -> Result<Pattern> {
    let (a, b, c) = DEFAULT_SQ_ARGS;
    p_sq_with(a, b, c)
}

/// `c` consecutive integers from `a`, each raised to the power `b`
pub fn p_sq_with(
    a: impl Into<Value>,
    b: impl Into<Value>,
    c: impl Into<Value>,
) -> Result<Pattern> {
    broadcast(&[a.into(), b.into(), c.into()], |args: &[Value]| {
        let [a, b, c] = arity::<3>(args)?;
        let start = a.as_i64()?;
        let count = c.as_i64()?;
        let stop = start.checked_add(count).ok_or(PatternError::Overflow)?;
        Pattern::from(range_expand(start, stop, 1)?).pow(b.clone())
    })
}

/// `n` random 1s and 0s
pub fn p10(n: impl Into<Value>) -> Result<Pattern> {
    p10_with(n, &RandomSource::global())
}

pub fn p10_with(n: impl Into<Value>, rng: &RandomSource) -> Result<Pattern> {
    broadcast(&[n.into()], |args: &[Value]| {
        let [n] = arity::<1>(args)?;
        Ok((0..n.as_count()?)
            .map(|_| Value::Int(rng.int_in(0, 2)))
            .collect())
    })
}

/// `n - 1` copies of `default` followed by `value`
pub fn p_step(
    n: impl Into<Value>,
    value: impl Into<Value>,
    default: impl Into<Value>,
) -> Result<Pattern> {
    broadcast(&[n.into(), value.into(), default.into()], |args: &[Value]| {
        let [n, value, default] = arity::<3>(args)?;
        let n = n.as_count()?;
        if n == 0 {
            return Err(PatternError::invalid_argument("p_step needs a period of at least 1").into());
        }
        let mut data = vec![default.clone(); n - 1];
        data.push(value.clone());
        Ok(Pattern::from_values(data))
    })
}
