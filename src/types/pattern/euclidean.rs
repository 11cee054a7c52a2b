//! Bjorklund algorithm for Euclidean rhythm generation.

use crate::error::PatternError;
use anyhow::Result;

/// Distribute `pulses` onsets over `steps` slots as evenly as possible.
///
/// Returns `steps` entries of 0 or 1 with exactly `pulses` ones, e.g.
/// `euclid(3, 8)` is `[1, 0, 0, 1, 0, 0, 1, 0]`. No pulses gives all zeros
/// and `pulses == steps` gives all ones. Anything outside
/// `0 <= pulses <= steps`, `steps > 0` fails with
/// [`PatternError::InvalidRhythm`].
pub fn euclid(pulses: i64, steps: i64) -> Result<Vec<u8>> {
    let invalid = || PatternError::InvalidRhythm { pulses, steps };
    if steps <= 0 || pulses < 0 || pulses > steps {
        return Err(invalid().into());
    }
    let pulses = usize::try_from(pulses).map_err(|_| invalid())?;
    let steps = usize::try_from(steps).map_err(|_| invalid())?;
    Ok(bjorklund(pulses, steps)
        .into_iter()
        .map(u8::from)
        .collect())
}

/// Gap lengths between successive onsets of `euclid(pulses, steps)`.
///
/// The walk starts after the first slot; the gap still open at the end wraps
/// round to the start, so the gaps always add up to `steps`.
/// `euclid_gaps(3, 8)` is `[3, 3, 2]`.
pub fn euclid_gaps(pulses: i64, steps: i64) -> Result<Vec<usize>> {
    let rhythm = euclid(pulses, steps)?;
    let mut gaps = Vec::new();
    let mut count = 1;
    for &hit in rhythm.iter().skip(1) {
        if hit == 1 {
            gaps.push(count);
            count = 1;
        } else {
            count += 1;
        }
    }
    gaps.push(count);
    Ok(gaps)
}

// Buckets start as one pulse each and one rest each. Every round glues one
// trailing bucket onto each leading bucket; the unmatched ones become the new
// trailing set. Stops when at most one trailing bucket is left.
fn bjorklund(pulses: usize, steps: usize) -> Vec<bool> {
    if pulses == 0 || pulses >= steps {
        return vec![pulses > 0; steps];
    }

    let mut leading: Vec<Vec<bool>> = vec![vec![true]; pulses];
    let mut trailing: Vec<Vec<bool>> = vec![vec![false]; steps - pulses];

    while trailing.len() > 1 {
        let paired = leading.len().min(trailing.len());
        let spare_leading = leading.split_off(paired);
        let spare_trailing = trailing.split_off(paired);

        for (bucket, tail) in leading.iter_mut().zip(trailing) {
            bucket.extend(tail);
        }

        trailing = if spare_leading.is_empty() {
            spare_trailing
        } else {
            spare_leading
        };
    }

    leading.into_iter().chain(trailing).flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tresillo() {
        assert_eq!(euclid(3, 8).unwrap(), vec![1, 0, 0, 1, 0, 0, 1, 0]);
    }

    #[test]
    fn test_cinquillo() {
        assert_eq!(euclid(5, 8).unwrap(), vec![1, 0, 1, 1, 0, 1, 1, 0]);
    }

    #[test]
    fn test_four_on_the_floor() {
        assert_eq!(
            euclid(4, 16).unwrap(),
            vec![1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0]
        );
    }

    #[test]
    fn test_degenerate_rhythms() {
        assert_eq!(euclid(0, 4).unwrap(), vec![0, 0, 0, 0]);
        assert_eq!(euclid(4, 4).unwrap(), vec![1, 1, 1, 1]);
    }

    #[test]
    fn test_invalid_rhythms() {
        for (pulses, steps) in [(9, 8), (-1, 8), (0, 0), (2, -3)] {
            let err = euclid(pulses, steps).unwrap_err();
            assert_eq!(
                err.downcast_ref::<PatternError>(),
                Some(&PatternError::InvalidRhythm { pulses, steps })
            );
        }
    }

    #[test]
    fn test_gaps() {
        assert_eq!(euclid_gaps(3, 8).unwrap(), vec![3, 3, 2]);
        assert_eq!(euclid_gaps(4, 4).unwrap(), vec![1, 1, 1, 1]);
        assert_eq!(euclid_gaps(0, 5).unwrap(), vec![5]);
    }

    proptest! {
        #[test]
        fn pulse_count_is_exact((steps, pulses) in (1i64..64).prop_flat_map(|k| (Just(k), 0..=k))) {
            let rhythm = euclid(pulses, steps).unwrap();
            prop_assert_eq!(rhythm.len() as i64, steps);
            let ones = rhythm.iter().filter(|&&x| x == 1).count() as i64;
            prop_assert_eq!(ones, pulses);
        }

        #[test]
        fn gaps_fill_the_cycle((steps, pulses) in (1i64..64).prop_flat_map(|k| (Just(k), 0..=k))) {
            let gaps = euclid_gaps(pulses, steps).unwrap();
            prop_assert_eq!(gaps.iter().sum::<usize>() as i64, steps);
        }
    }
}
