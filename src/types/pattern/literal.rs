//! Literal construction: `p![...]` for sequences, `pgroup!(...)` for groups.

use super::core::Pattern;
use super::range::RangeSpec;
use crate::types::group::PGroup;
use crate::types::value::Value;
use anyhow::Result;
use std::ops::{Range, RangeTo};

/// One entry of a bracket literal
#[derive(Clone, Debug, PartialEq)]
pub enum Item {
    /// Kept as a single step
    Scalar(Value),
    /// Expanded in place into its integers
    Range(RangeSpec),
    /// Kept as a single nested step
    Nested(Pattern),
}

/// Build a pattern from literal items, expanding ranges in place.
///
/// `p![0, 2, 1..10]` is `P[0, 2, 1, 2, 3, 4, 5, 6, 7, 8, 9]`. Nested
/// sequences stay nested; only ranges are flattened.
pub fn literal<I>(items: I) -> Result<Pattern>
where
    I: IntoIterator,
    I::Item: Into<Item>,
{
    let mut data = Vec::new();
    for item in items {
        match item.into() {
            Item::Scalar(value) => data.push(value),
            Item::Range(spec) => data.extend(spec.expand()?.into_iter().map(Value::Int)),
            Item::Nested(pattern) => data.push(Value::Pattern(pattern)),
        }
    }
    Ok(Pattern::from_values(data))
}

/// Build a group from call-literal arguments.
///
/// With several arguments the whole tuple is the group. A single argument is
/// the group itself: a sequence contributes its elements, a group is returned
/// unchanged, and a scalar becomes a one-member group.
pub fn group(mut values: Vec<Value>) -> PGroup {
    if values.len() == 1 {
        if let Some(only) = values.pop() {
            return match only {
                Value::Pattern(pattern) => PGroup::new(pattern.into_values()),
                Value::Group(group) => group,
                scalar => PGroup::new(vec![scalar]),
            };
        }
    }
    PGroup::new(values)
}

/// Bracket literal. Accepts numbers, ranges (`1..10`, `..4`, [`RangeSpec`]),
/// nested `Vec`s or patterns, groups, and values.
///
/// ```
/// use pattern_algebra::p;
///
/// let pat = p![0, 2, 1..5].unwrap();
/// assert_eq!(pat.to_string(), "P[0, 2, 1, 2, 3, 4]");
/// ```
#[macro_export]
macro_rules! p {
    () => {
        $crate::literal(::std::vec::Vec::<$crate::Item>::new())
    };
    ($($item:expr),+ $(,)?) => {
        $crate::literal(::std::vec![$($crate::Item::from($item)),+])
    };
}

/// Call literal producing a [`PGroup`].
///
/// ```
/// use pattern_algebra::pgroup;
///
/// assert_eq!(pgroup!(0, 2, 4).to_string(), "P(0, 2, 4)");
/// ```
#[macro_export]
macro_rules! pgroup {
    ($($value:expr),* $(,)?) => {
        $crate::group(::std::vec![$($crate::Value::from($value)),*])
    };
}

impl From<Value> for Item {
    fn from(value: Value) -> Self {
        match value {
            Value::Pattern(pattern) => Item::Nested(pattern),
            other => Item::Scalar(other),
        }
    }
}

impl From<i32> for Item {
    fn from(n: i32) -> Self {
        Item::Scalar(n.into())
    }
}

impl From<i64> for Item {
    fn from(n: i64) -> Self {
        Item::Scalar(n.into())
    }
}

impl From<f64> for Item {
    fn from(x: f64) -> Self {
        Item::Scalar(x.into())
    }
}

impl From<PGroup> for Item {
    fn from(group: PGroup) -> Self {
        Item::Scalar(Value::Group(group))
    }
}

impl From<Pattern> for Item {
    fn from(pattern: Pattern) -> Self {
        Item::Nested(pattern)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Item {
    fn from(items: Vec<T>) -> Self {
        Item::Nested(Pattern::from(items))
    }
}

impl From<RangeSpec> for Item {
    fn from(spec: RangeSpec) -> Self {
        Item::Range(spec)
    }
}

impl From<Range<i32>> for Item {
    fn from(range: Range<i32>) -> Self {
        Item::Range(range.into())
    }
}

impl From<Range<i64>> for Item {
    fn from(range: Range<i64>) -> Self {
        Item::Range(range.into())
    }
}

impl From<RangeTo<i32>> for Item {
    fn from(range: RangeTo<i32>) -> Self {
        Item::Range(range.into())
    }
}

impl From<RangeTo<i64>> for Item {
    fn from(range: RangeTo<i64>) -> Self {
        Item::Range(range.into())
    }
}
