//! Value - the element type of every pattern.
//!
//! A value is a number, a group of simultaneous values, or a nested pattern.
//! Arithmetic is defined across all of them: numbers combine directly,
//! groups and patterns apply the operator member by member.

use super::group::PGroup;
use super::pattern::Pattern;
use crate::error::PatternError;
use anyhow::Result;
use num_traits::ToPrimitive;
use std::fmt;

/// Elementwise binary operators supported by patterns and groups
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    /// True division; integer operands produce a float
    Div,
    /// Remainder taking the sign of the divisor
    Rem,
    Pow,
}

impl BinOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Rem => "%",
            BinOp::Pow => "**",
        }
    }
}

/// A single element of a pattern
#[derive(Clone, Debug)]
pub enum Value {
    Int(i64),
    Float(f64),
    /// Values that happen at the same time
    Group(PGroup),
    /// Values that happen in order
    Pattern(Pattern),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Group(_) => "group",
            Value::Pattern(_) => "pattern",
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    pub fn as_pattern(&self) -> Option<&Pattern> {
        match self {
            Value::Pattern(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&PGroup> {
        match self {
            Value::Group(g) => Some(g),
            _ => None,
        }
    }

    /// Numeric value as a float
    pub fn as_f64(&self) -> Result<f64> {
        match self {
            Value::Int(n) => n
                .to_f64()
                .ok_or_else(|| PatternError::Overflow.into()),
            Value::Float(x) => Ok(*x),
            other => Err(other.mismatch("number")),
        }
    }

    /// Numeric value as an integer. Floats are accepted when they hold a
    /// whole number.
    pub fn as_i64(&self) -> Result<i64> {
        match self {
            Value::Int(n) => Ok(*n),
            Value::Float(x) if x.fract() == 0.0 => x
                .to_i64()
                .ok_or_else(|| PatternError::Overflow.into()),
            other => Err(other.mismatch("integer")),
        }
    }

    /// Non-negative integer, used for lengths and repeat counts
    pub fn as_count(&self) -> Result<usize> {
        let n = self.as_i64()?;
        n.to_usize().ok_or_else(|| {
            PatternError::invalid_argument(format!("expected a non-negative count, found {}", n))
                .into()
        })
    }

    /// Apply `op` with `self` on the left.
    ///
    /// Patterns win over groups, groups win over numbers: `[1, 2] + (10, 20)`
    /// is a pattern of groups, `(1, 2) + 10` is a group.
    pub fn binary(&self, op: BinOp, rhs: &Value) -> Result<Value> {
        match (self, rhs) {
            (Value::Pattern(lhs), _) => Ok(Value::Pattern(lhs.binary(op, rhs)?)),
            (_, Value::Pattern(pattern)) => Ok(Value::Pattern(
                pattern.try_map(|item| self.binary(op, item))?,
            )),
            (Value::Group(lhs), _) => Ok(Value::Group(lhs.binary(op, rhs)?)),
            (_, Value::Group(group)) => Ok(Value::Group(
                group.try_map(|item| self.binary(op, item))?,
            )),
            (Value::Int(a), Value::Int(b)) => int_op(op, *a, *b),
            _ => float_op(op, self.as_f64()?, rhs.as_f64()?),
        }
    }

    fn mismatch(&self, expected: &'static str) -> anyhow::Error {
        PatternError::TypeMismatch {
            expected,
            found: format!("{} {}", self.type_name(), self),
        }
        .into()
    }
}

fn int_op(op: BinOp, a: i64, b: i64) -> Result<Value> {
    let result = match op {
        BinOp::Add => a.checked_add(b),
        BinOp::Sub => a.checked_sub(b),
        BinOp::Mul => a.checked_mul(b),
        BinOp::Div => return float_op(op, a as f64, b as f64),
        BinOp::Rem => {
            if b == 0 {
                return Err(PatternError::DivisionByZero.into());
            }
            a.checked_rem(b)
                .map(|r| if r != 0 && (r < 0) != (b < 0) { r + b } else { r })
        }
        BinOp::Pow => match u32::try_from(b) {
            Ok(exp) => a.checked_pow(exp),
            // Negative exponents leave the integers
            Err(_) if b < 0 => return float_op(op, a as f64, b as f64),
            Err(_) => None,
        },
    };
    result
        .map(Value::Int)
        .ok_or_else(|| PatternError::Overflow.into())
}

fn float_op(op: BinOp, a: f64, b: f64) -> Result<Value> {
    let result = match op {
        BinOp::Add => a + b,
        BinOp::Sub => a - b,
        BinOp::Mul => a * b,
        BinOp::Div => {
            if b == 0.0 {
                return Err(PatternError::DivisionByZero.into());
            }
            a / b
        }
        BinOp::Rem => {
            if b == 0.0 {
                return Err(PatternError::DivisionByZero.into());
            }
            let r = a % b;
            if r != 0.0 && (r < 0.0) != (b < 0.0) {
                r + b
            } else {
                r
            }
        }
        BinOp::Pow => a.powf(b),
    };
    Ok(Value::Float(result))
}

// Numbers compare by value regardless of representation, so `3 == 3.0`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                *a as f64 == *b
            }
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Group(a), Value::Group(b)) => a == b,
            (Value::Pattern(a), Value::Pattern(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Group(g) => write!(f, "{}", g),
            Value::Pattern(p) => write!(f, "{}", p),
        }
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        match i64::try_from(n) {
            Ok(n) => Value::Int(n),
            Err(_) => Value::Float(n as f64),
        }
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(x.into())
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<PGroup> for Value {
    fn from(group: PGroup) -> Self {
        Value::Group(group)
    }
}

impl From<Pattern> for Value {
    fn from(pattern: Pattern) -> Self {
        Value::Pattern(pattern)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Pattern(Pattern::from(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(err: &anyhow::Error) -> Option<&PatternError> {
        err.downcast_ref::<PatternError>()
    }

    #[test]
    fn test_numeric_equality_across_representations() {
        assert_eq!(Value::Int(3), Value::Float(3.0));
        assert_ne!(Value::Int(3), Value::Float(3.5));
        assert_ne!(Value::Int(1), Value::Group(PGroup::new(vec![Value::Int(1)])));
    }

    #[test]
    fn test_int_arithmetic_stays_integral() {
        let sum = Value::Int(2).binary(BinOp::Add, &Value::Int(3)).unwrap();
        assert!(matches!(sum, Value::Int(5)));
        let pow = Value::Int(3).binary(BinOp::Pow, &Value::Int(2)).unwrap();
        assert!(matches!(pow, Value::Int(9)));
    }

    #[test]
    fn test_division_is_true_division() {
        let q = Value::Int(7).binary(BinOp::Div, &Value::Int(2)).unwrap();
        assert!(matches!(q, Value::Float(x) if x == 3.5));
    }

    #[test]
    fn test_remainder_follows_divisor_sign() {
        let r = Value::Int(-1).binary(BinOp::Rem, &Value::Int(8)).unwrap();
        assert_eq!(r, Value::Int(7));
        let r = Value::Int(1).binary(BinOp::Rem, &Value::Int(-8)).unwrap();
        assert_eq!(r, Value::Int(-7));
        let r = Value::Float(-0.5).binary(BinOp::Rem, &Value::Int(2)).unwrap();
        assert_eq!(r, Value::Float(1.5));
    }

    #[test]
    fn test_division_by_zero() {
        let err = Value::Int(1).binary(BinOp::Div, &Value::Int(0)).unwrap_err();
        assert_eq!(kind(&err), Some(&PatternError::DivisionByZero));
        let err = Value::Int(1).binary(BinOp::Rem, &Value::Int(0)).unwrap_err();
        assert_eq!(kind(&err), Some(&PatternError::DivisionByZero));
    }

    #[test]
    fn test_overflow_is_reported() {
        let err = Value::Int(i64::MAX)
            .binary(BinOp::Add, &Value::Int(1))
            .unwrap_err();
        assert_eq!(kind(&err), Some(&PatternError::Overflow));
    }

    #[test]
    fn test_negative_power_goes_float() {
        let x = Value::Int(2).binary(BinOp::Pow, &Value::Int(-1)).unwrap();
        assert_eq!(x, Value::Float(0.5));
    }

    #[test]
    fn test_scalar_with_group() {
        let group = Value::Group(PGroup::new(vec![Value::Int(1), Value::Int(2)]));
        let shifted = Value::Int(10).binary(BinOp::Sub, &group).unwrap();
        assert_eq!(
            shifted,
            Value::Group(PGroup::new(vec![Value::Int(9), Value::Int(8)]))
        );
    }

    #[test]
    fn test_scalar_with_pattern_maps() {
        let pattern = Value::from(vec![1, 2, 3]);
        let scaled = Value::Int(2).binary(BinOp::Mul, &pattern).unwrap();
        assert_eq!(scaled, Value::from(vec![2, 4, 6]));
    }

    #[test]
    fn test_as_i64_accepts_whole_floats() {
        assert_eq!(Value::Float(4.0).as_i64().unwrap(), 4);
        assert!(Value::Float(4.5).as_i64().is_err());
    }

    #[test]
    fn test_as_count_rejects_negative() {
        let err = Value::Int(-2).as_count().unwrap_err();
        assert!(matches!(kind(&err), Some(PatternError::InvalidArgument(_))));
    }

    #[test]
    fn test_type_mismatch_message() {
        let group = Value::Group(PGroup::new(vec![Value::Int(1)]));
        let err = group.as_f64().unwrap_err();
        assert!(matches!(
            kind(&err),
            Some(PatternError::TypeMismatch { expected: "number", .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Int(3).to_string(), "3");
        assert_eq!(Value::Float(0.75).to_string(), "0.75");
        assert_eq!(Value::Float(2.0).to_string(), "2.0");
    }
}
