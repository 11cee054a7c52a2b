//! PGroup - values that sound together.

use super::pattern::{lcm_of, modi};
use super::value::{BinOp, Value};
use anyhow::Result;
use std::fmt;

/// A tuple of values played simultaneously.
///
/// Inside a pattern a group occupies one step; indexing and broadcasting
/// treat it as a single opaque value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PGroup {
    members: Vec<Value>,
}

impl PGroup {
    pub fn new(members: Vec<Value>) -> Self {
        PGroup { members }
    }

    pub fn members(&self) -> &[Value] {
        &self.members
    }

    pub fn into_members(self) -> Vec<Value> {
        self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.members.iter()
    }

    pub fn try_map<F>(&self, f: F) -> Result<PGroup>
    where
        F: FnMut(&Value) -> Result<Value>,
    {
        Ok(PGroup::new(
            self.members.iter().map(f).collect::<Result<Vec<_>>>()?,
        ))
    }

    /// Apply `op` member by member. Two groups are cycled to the LCM of
    /// their sizes; anything else is applied to every member.
    pub fn binary(&self, op: BinOp, rhs: &Value) -> Result<PGroup> {
        match rhs {
            Value::Group(other) => {
                let size = lcm_of([self.len(), other.len()])?;
                let mut members = Vec::with_capacity(size);
                for i in 0..size as i64 {
                    let a = modi(&self.members, i)?;
                    let b = modi(&other.members, i)?;
                    members.push(a.binary(op, b)?);
                }
                Ok(PGroup::new(members))
            }
            _ => self.try_map(|member| member.binary(op, rhs)),
        }
    }
}

impl fmt::Display for PGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P(")?;
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", member)?;
        }
        write!(f, ")")
    }
}

impl FromIterator<Value> for PGroup {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        PGroup::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PGroup {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatternError;

    fn group(values: &[i64]) -> PGroup {
        values.iter().copied().map(Value::Int).collect()
    }

    #[test]
    fn test_group_plus_scalar() {
        let g = group(&[0, 2, 4]);
        let shifted = g.binary(BinOp::Add, &Value::Int(1)).unwrap();
        assert_eq!(shifted, group(&[1, 3, 5]));
    }

    #[test]
    fn test_group_plus_group_cycles_to_lcm() {
        let a = group(&[0, 1, 2]);
        let b = group(&[10, 20]);
        let sum = a.binary(BinOp::Add, &Value::Group(b)).unwrap();
        assert_eq!(sum, group(&[10, 21, 12, 20, 11, 22]));
    }

    #[test]
    fn test_empty_group_cannot_cycle() {
        let err = PGroup::default()
            .binary(BinOp::Add, &Value::Group(group(&[1])))
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<PatternError>(),
            Some(&PatternError::EmptyPattern)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(group(&[0, 3]).to_string(), "P(0, 3)");
    }
}
