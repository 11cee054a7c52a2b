//! Broadcasting: lift a scalar-argument constructor over pattern arguments.

use super::core::Pattern;
use super::cycle::lcm_of;
use crate::error::PatternError;
use crate::types::value::Value;
use anyhow::Result;

/// Wrap a pattern constructor so any argument may be a pattern.
///
/// The returned function looks at the pattern-valued arguments, takes the
/// LCM `N` of their lengths, and calls `f` once for each `i` in `0..N` with
/// every pattern argument replaced by its element at `i` (cycling). The
/// results are concatenated in call order. Scalars and groups are passed
/// through unchanged on every call; with no pattern arguments `f` runs once.
///
/// So `p_euclid([3, 5], 8)` is `p_euclid(3, 8) | p_euclid(5, 8)`.
pub fn loop_pattern_func<F>(f: F) -> impl Fn(&[Value]) -> Result<Pattern>
where
    F: Fn(&[Value]) -> Result<Pattern>,
{
    move |args: &[Value]| {
        let size = lcm_of(args.iter().filter_map(Value::as_pattern).map(Pattern::len))?;
        if size > 1 {
            tracing::debug!(size, arity = args.len(), "broadcasting pattern function");
        }

        let mut out = Vec::new();
        for i in 0..size as i64 {
            let call = args
                .iter()
                .map(|arg| match arg {
                    Value::Pattern(pattern) => pattern.modi(i).cloned(),
                    other => Ok(other.clone()),
                })
                .collect::<Result<Vec<_>>>()?;
            out.extend(f(&call)?);
        }
        Ok(Pattern::from_values(out))
    }
}

/// Run `f` through [`loop_pattern_func`] on `args` in one step
pub(crate) fn broadcast<F>(args: &[Value], f: F) -> Result<Pattern>
where
    F: Fn(&[Value]) -> Result<Pattern>,
{
    loop_pattern_func(f)(args)
}

/// View broadcast arguments as a fixed-size array
pub(crate) fn arity<const N: usize>(args: &[Value]) -> Result<&[Value; N]> {
    args.try_into().map_err(|_| {
        PatternError::invalid_argument(format!(
            "expected {} arguments, found {}",
            N,
            args.len()
        ))
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn count_up(args: &[Value]) -> Result<Pattern> {
        let [n] = arity::<1>(args)?;
        Ok((0..n.as_i64()?).map(Value::Int).collect())
    }

    #[test]
    fn test_scalar_arguments_call_once() {
        let f = loop_pattern_func(count_up);
        assert_eq!(f(&[Value::Int(3)][..]).unwrap(), Pattern::from(vec![0, 1, 2]));
    }

    #[test]
    fn test_pattern_argument_concatenates_in_order() {
        let f = loop_pattern_func(count_up);
        let out = f(&[Value::from(vec![2, 3])][..]).unwrap();
        assert_eq!(out, Pattern::from(vec![0, 1, 0, 1, 2]));
    }

    #[test]
    fn test_arguments_cycle_to_lcm() {
        let pair = loop_pattern_func(|args: &[Value]| {
            let [a, b] = arity::<2>(args)?;
            Ok(Pattern::from(vec![a.clone(), b.clone()]))
        });
        let out = pair(&[Value::from(vec![1, 2]), Value::from(vec![10, 20, 30])][..]).unwrap();
        assert_eq!(out.len(), 12);
        assert_eq!(
            out,
            Pattern::from(vec![1, 10, 2, 20, 1, 30, 2, 10, 1, 20, 2, 30])
        );
    }

    #[test]
    fn test_groups_are_not_broadcast() {
        let echo = loop_pattern_func(|args: &[Value]| Ok(Pattern::from(args.to_vec())));
        let g = Value::Group(crate::types::group::PGroup::new(vec![
            Value::Int(1),
            Value::Int(2),
        ]));
        let out = echo(&[g.clone()][..]).unwrap();
        assert_eq!(out, Pattern::from(vec![g]));
    }

    #[test]
    fn test_empty_pattern_argument_fails() {
        let f = loop_pattern_func(count_up);
        let err = f(&[Value::Pattern(Pattern::new())][..]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<PatternError>(),
            Some(&PatternError::EmptyPattern)
        );
    }

    #[test]
    fn test_wrong_arity() {
        let err = count_up(&[Value::Int(1), Value::Int(2)]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PatternError>(),
            Some(PatternError::InvalidArgument(_))
        ));
    }
}
