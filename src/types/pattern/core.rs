//! Core Pattern struct and implementation.

use super::cycle::{lcm_of, modi};
use crate::error::PatternError;
use crate::random::RandomSource;
use crate::types::value::{BinOp, Value};
use anyhow::Result;
use std::fmt;
use std::ops::BitOr;

/// A finite, ordered, immutable sequence of values.
///
/// Indexing past either end wraps around ([`Pattern::modi`]), so a pattern
/// can be read as an endless loop over its data. Every operation returns a
/// new pattern.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pattern {
    data: Vec<Value>,
}

impl Pattern {
    /// Create an empty pattern
    pub fn new() -> Self {
        Pattern { data: Vec::new() }
    }

    pub fn from_values(data: Vec<Value>) -> Self {
        Pattern { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn values(&self) -> &[Value] {
        &self.data
    }

    pub fn into_values(self) -> Vec<Value> {
        self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.data.iter()
    }

    /// Value at `index` modulo the length
    pub fn modi(&self, index: i64) -> Result<&Value> {
        modi(&self.data, index)
    }

    /// This pattern followed by `other`
    pub fn concat(&self, other: &Pattern) -> Pattern {
        let mut data = Vec::with_capacity(self.len() + other.len());
        data.extend_from_slice(&self.data);
        data.extend_from_slice(&other.data);
        Pattern { data }
    }

    pub fn reversed(&self) -> Pattern {
        self.data.iter().rev().cloned().collect()
    }

    pub fn map<F>(&self, f: F) -> Pattern
    where
        F: FnMut(&Value) -> Value,
    {
        self.data.iter().map(f).collect()
    }

    pub fn try_map<F>(&self, f: F) -> Result<Pattern>
    where
        F: FnMut(&Value) -> Result<Value>,
    {
        Ok(Pattern {
            data: self.data.iter().map(f).collect::<Result<Vec<_>>>()?,
        })
    }

    /// Every value as a float, for consumers that only deal in numbers
    pub fn to_f64s(&self) -> Result<Vec<f64>> {
        self.data.iter().map(Value::as_f64).collect()
    }

    // ========================================================================
    // Structural transforms
    // ========================================================================

    /// Repeat each value `n` times in place.
    ///
    /// When `n` is a pattern the count cycles with the source position:
    /// `[1, 2, 3].stutter([1, 2])` is `[1, 2, 2, 3]`.
    pub fn stutter(&self, n: impl Into<Value>) -> Result<Pattern> {
        let n = n.into();
        let mut data = Vec::new();
        for (i, value) in self.data.iter().enumerate() {
            let count = match &n {
                Value::Pattern(counts) => counts.modi(i as i64)?.as_count()?,
                scalar => scalar.as_count()?,
            };
            data.extend(std::iter::repeat(value).take(count).cloned());
        }
        Ok(Pattern { data })
    }

    /// Randomly permuted copy drawing from the process-wide source
    pub fn shuffle(&self) -> Pattern {
        self.shuffle_with(&RandomSource::global())
    }

    pub fn shuffle_with(&self, rng: &RandomSource) -> Pattern {
        let mut data = self.data.clone();
        rng.shuffle(&mut data);
        Pattern { data }
    }

    /// Loop the pattern until it is exactly `size` values long
    pub fn stretch(&self, size: usize) -> Result<Pattern> {
        let data = (0..size)
            .map(|i| self.modi(i as i64).cloned())
            .collect::<Result<Vec<_>>>()?;
        Ok(Pattern { data })
    }

    // ========================================================================
    // Elementwise arithmetic
    // ========================================================================

    /// Apply `op` elementwise.
    ///
    /// A pattern on the right is cycled against this one up to the LCM of
    /// both lengths; any other value is applied to every element.
    pub fn binary(&self, op: BinOp, rhs: &Value) -> Result<Pattern> {
        match rhs {
            Value::Pattern(other) => {
                let size = lcm_of([self.len(), other.len()])?;
                let mut data = Vec::with_capacity(size);
                for i in 0..size as i64 {
                    data.push(self.modi(i)?.binary(op, other.modi(i)?)?);
                }
                Ok(Pattern { data })
            }
            _ => self.try_map(|value| value.binary(op, rhs)),
        }
    }

    pub fn add(&self, rhs: impl Into<Value>) -> Result<Pattern> {
        self.binary(BinOp::Add, &rhs.into())
    }

    pub fn sub(&self, rhs: impl Into<Value>) -> Result<Pattern> {
        self.binary(BinOp::Sub, &rhs.into())
    }

    pub fn mul(&self, rhs: impl Into<Value>) -> Result<Pattern> {
        self.binary(BinOp::Mul, &rhs.into())
    }

    pub fn div(&self, rhs: impl Into<Value>) -> Result<Pattern> {
        self.binary(BinOp::Div, &rhs.into())
    }

    pub fn rem(&self, rhs: impl Into<Value>) -> Result<Pattern> {
        self.binary(BinOp::Rem, &rhs.into())
    }

    pub fn pow(&self, rhs: impl Into<Value>) -> Result<Pattern> {
        self.binary(BinOp::Pow, &rhs.into())
    }

    /// Sum of all values as a float
    pub fn total(&self) -> Result<f64> {
        self.data.iter().try_fold(0.0, |acc, value| {
            let x = value.as_f64()?;
            if x.is_finite() {
                Ok(acc + x)
            } else {
                Err(PatternError::invalid_argument(format!("cannot sum {}", x)).into())
            }
        })
    }
}

impl BitOr for Pattern {
    type Output = Pattern;

    fn bitor(mut self, rhs: Pattern) -> Pattern {
        self.data.extend(rhs.data);
        self
    }
}

impl BitOr for &Pattern {
    type Output = Pattern;

    fn bitor(self, rhs: &Pattern) -> Pattern {
        self.concat(rhs)
    }
}

impl FromIterator<Value> for Pattern {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Pattern {
            data: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Pattern {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a> IntoIterator for &'a Pattern {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: Into<Value>> From<Vec<T>> for Pattern {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().map(Into::into).collect()
    }
}

/// A pattern stays a pattern; any other value becomes a one-step pattern.
impl From<Value> for Pattern {
    fn from(value: Value) -> Self {
        match value {
            Value::Pattern(pattern) => pattern,
            other => Pattern { data: vec![other] },
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P[")?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}
