#[cfg(test)]
mod tests {
    use pattern_algebra::{
        loop_pattern_func, p, p_dur, p_euclid, p_pairs, p_sum, p_zip, pgroup, r, GeneratorPattern,
        Pattern, PatternError, RandomSource, Value,
    };

    #[test]
    fn test_euclid_durations_fill_the_bar() {
        // Every rhythm over 16 steps lasts 4 beats
        for n in 1..=16 {
            let durs = p_dur(n, 16).unwrap();
            assert_eq!(durs.len(), n as usize);
            assert_eq!(durs.total().unwrap(), 4.0, "p_dur({}, 16)", n);
        }
    }

    #[test]
    fn test_euclid_has_n_onsets() {
        let rhythm = p_euclid(5, 12).unwrap();
        assert_eq!(rhythm.len(), 12);
        assert_eq!(rhythm.total().unwrap(), 5.0);
    }

    #[test]
    fn test_user_function_broadcasts() {
        let ramp = loop_pattern_func(|args: &[Value]| {
            let n = args[0].as_i64()?;
            Ok((0..n).map(Value::Int).collect::<Pattern>())
        });
        let lengths = Value::from(vec![1, 3]);
        let out = ramp(&[lengths][..]).unwrap();
        assert_eq!(out, Pattern::from(vec![0, 0, 1, 2]));
    }

    #[test]
    fn test_literal_and_arithmetic_compose() {
        let bass = p![0, 4..7].unwrap();
        let up = bass.add(p![0, 12].unwrap()).unwrap();
        // Lengths 4 and 2 meet at 4
        assert_eq!(up.to_string(), "P[0, 16, 5, 18]");
    }

    #[test]
    fn test_chords_from_zip() {
        let chords = p_zip([p![0, 2].unwrap(), p![4, 5, 7].unwrap()]).unwrap();
        assert_eq!(chords.len(), 6);
        assert_eq!(*chords.modi(7).unwrap(), Value::Group(pgroup!(2, 5)));
    }

    #[test]
    fn test_pairs_then_sum() {
        let laced = p_pairs(p![1, 3].unwrap()).unwrap();
        assert_eq!(laced, Pattern::from(vec![1, 7, 3, 5]));
        assert_eq!(p_sum(laced.len(), 2).unwrap().total().unwrap(), 2.0);
    }

    #[test]
    fn test_errors_are_typed() {
        let err = p_euclid(4, 0).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PatternError>(),
            Some(PatternError::InvalidRhythm { pulses: 4, steps: 0 })
        ));
    }

    #[test]
    fn test_random_front_end_is_reproducible() {
        let a = r![0, 2, 4, 5, 7]
            .unwrap()
            .with_rng(RandomSource::seeded(2024));
        let b = r![0, 2, 4, 5, 7]
            .unwrap()
            .with_rng(RandomSource::seeded(2024));
        assert_eq!(a.take(32), b.take(32));
    }
}
