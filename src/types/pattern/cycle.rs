//! Modular indexing and length reconciliation.
//!
//! Every operation that walks several sequences in step cycles each one with
//! [`modi`] up to the least common multiple of their lengths.

use crate::error::PatternError;
use anyhow::Result;

/// Element at `index` modulo the length of `items`.
///
/// Negative indices count back from the end, so `modi(&[1, 2, 3], -1)` is `3`.
/// Fails with [`PatternError::EmptyPattern`] when `items` is empty.
pub fn modi<T>(items: &[T], index: i64) -> Result<&T> {
    if items.is_empty() {
        return Err(PatternError::EmptyPattern.into());
    }
    let len = items.len() as i64;
    Ok(&items[index.rem_euclid(len) as usize])
}

/// Least common multiple of `lengths`; 1 for no lengths at all.
///
/// A zero length has no cycle to reconcile and fails with
/// [`PatternError::EmptyPattern`]; a multiple past `usize::MAX` fails with
/// [`PatternError::Overflow`].
pub fn lcm_of<I>(lengths: I) -> Result<usize>
where
    I: IntoIterator<Item = usize>,
{
    lengths.into_iter().try_fold(1usize, |acc, len| {
        if len == 0 {
            Err(PatternError::EmptyPattern.into())
        } else {
            let gcd = num_integer::gcd(acc, len);
            (acc / gcd)
                .checked_mul(len)
                .ok_or_else(|| PatternError::Overflow.into())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_modi_wraps_forward_and_back() {
        let items = [10, 20, 30];
        assert_eq!(*modi(&items, 0).unwrap(), 10);
        assert_eq!(*modi(&items, 4).unwrap(), 20);
        assert_eq!(*modi(&items, -1).unwrap(), 30);
        assert_eq!(*modi(&items, -4).unwrap(), 30);
    }

    #[test]
    fn test_modi_empty_fails() {
        let items: [i32; 0] = [];
        let err = modi(&items, 0).unwrap_err();
        assert_eq!(
            err.downcast_ref::<PatternError>(),
            Some(&PatternError::EmptyPattern)
        );
    }

    #[test]
    fn test_lcm_of() {
        assert_eq!(lcm_of([3, 2]).unwrap(), 6);
        assert_eq!(lcm_of([4, 6, 8]).unwrap(), 24);
        assert_eq!(lcm_of(std::iter::empty()).unwrap(), 1);
        assert!(lcm_of([3, 0]).is_err());
    }

    #[test]
    fn test_lcm_of_overflow() {
        // Consecutive integers are coprime, so their multiple is their product
        let err = lcm_of([usize::MAX, usize::MAX - 1]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<PatternError>(),
            Some(&PatternError::Overflow)
        );
        assert_eq!(lcm_of([usize::MAX, usize::MAX]).unwrap(), usize::MAX);
    }

    proptest! {
        #[test]
        fn modi_matches_euclidean_remainder(
            items in proptest::collection::vec(any::<i32>(), 1..64),
            index in any::<i64>(),
        ) {
            let len = items.len() as i64;
            let expected = items[index.rem_euclid(len) as usize];
            prop_assert_eq!(*modi(&items, index).unwrap(), expected);
        }

        #[test]
        fn lcm_is_a_common_multiple(
            lengths in proptest::collection::vec(1usize..16, 1..5),
        ) {
            let size = lcm_of(lengths.iter().copied()).unwrap();
            for len in lengths {
                prop_assert_eq!(size % len, 0);
            }
        }
    }
}
