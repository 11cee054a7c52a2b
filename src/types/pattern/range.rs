//! Range specifications and their eager expansion.

use crate::error::PatternError;
use anyhow::Result;
use std::ops::{Range, RangeTo};

/// An arithmetic progression `start, start + step, ...` stopping before `stop`.
///
/// `start` defaults to 0 and `step` to 1. `stop` has no default: a range is
/// always expanded eagerly, so it must end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RangeSpec {
    pub start: Option<i64>,
    pub stop: Option<i64>,
    pub step: Option<i64>,
}

impl RangeSpec {
    pub fn new(start: i64, stop: i64) -> Self {
        RangeSpec {
            start: Some(start),
            stop: Some(stop),
            step: None,
        }
    }

    /// `0..stop`
    pub fn to(stop: i64) -> Self {
        RangeSpec {
            start: None,
            stop: Some(stop),
            step: None,
        }
    }

    pub fn with_step(mut self, step: i64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn expand(&self) -> Result<Vec<i64>> {
        let stop = self
            .stop
            .ok_or_else(|| PatternError::invalid_range("range has no stop"))?;
        range_expand(self.start.unwrap_or(0), stop, self.step.unwrap_or(1))
    }
}

/// Expand `start..stop` by `step` into integers.
///
/// Start is inclusive and stop exclusive; a negative step counts down.
/// `range_expand(1, 6, 2)` is `[1, 3, 5]`.
pub fn range_expand(start: i64, stop: i64, step: i64) -> Result<Vec<i64>> {
    if step == 0 {
        return Err(PatternError::invalid_range("step cannot be zero").into());
    }
    let mut values = Vec::new();
    let mut current = Some(start);
    while let Some(x) = current {
        let inside = if step > 0 { x < stop } else { x > stop };
        if !inside {
            break;
        }
        values.push(x);
        current = x.checked_add(step);
    }
    Ok(values)
}

impl From<Range<i64>> for RangeSpec {
    fn from(range: Range<i64>) -> Self {
        RangeSpec::new(range.start, range.end)
    }
}

impl From<Range<i32>> for RangeSpec {
    fn from(range: Range<i32>) -> Self {
        RangeSpec::new(range.start.into(), range.end.into())
    }
}

impl From<RangeTo<i64>> for RangeSpec {
    fn from(range: RangeTo<i64>) -> Self {
        RangeSpec::to(range.end)
    }
}

impl From<RangeTo<i32>> for RangeSpec {
    fn from(range: RangeTo<i32>) -> Self {
        RangeSpec::to(range.end.into())
    }
}
