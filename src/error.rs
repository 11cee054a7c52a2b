use std::fmt;

/// Failure kinds raised by pattern construction and arithmetic.
///
/// Public functions return `anyhow::Result`; the kind can be recovered with
/// `err.downcast_ref::<PatternError>()`.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternError {
    /// Modular indexing (or LCM cycling) over a zero-length sequence
    EmptyPattern,
    /// Euclidean rhythm asked for more pulses than steps, or negative/zero sizes
    InvalidRhythm { pulses: i64, steps: i64 },
    /// Range that cannot be expanded eagerly (zero step, no stop, empty bounds)
    InvalidRange(String),
    /// Argument outside the domain of a constructor
    InvalidArgument(String),
    /// Value of the wrong shape, e.g. a group where a number is required
    TypeMismatch {
        expected: &'static str,
        found: String,
    },
    DivisionByZero,
    Overflow,
}

impl PatternError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        PatternError::InvalidArgument(message.into())
    }

    pub fn invalid_range(message: impl Into<String>) -> Self {
        PatternError::InvalidRange(message.into())
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::EmptyPattern => write!(f, "cannot index into an empty pattern"),
            PatternError::InvalidRhythm { pulses, steps } => write!(
                f,
                "invalid rhythm parameters: {} pulses over {} steps",
                pulses, steps
            ),
            PatternError::InvalidRange(message) => write!(f, "invalid range: {}", message),
            PatternError::InvalidArgument(message) => write!(f, "invalid argument: {}", message),
            PatternError::TypeMismatch { expected, found } => {
                write!(f, "expected {}, found {}", expected, found)
            }
            PatternError::DivisionByZero => write!(f, "division by zero"),
            PatternError::Overflow => write!(f, "integer overflow"),
        }
    }
}

impl std::error::Error for PatternError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_rhythm() {
        let err = PatternError::InvalidRhythm {
            pulses: 9,
            steps: 8,
        };
        assert_eq!(
            err.to_string(),
            "invalid rhythm parameters: 9 pulses over 8 steps"
        );
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = PatternError::EmptyPattern.into();
        assert_eq!(
            err.downcast_ref::<PatternError>(),
            Some(&PatternError::EmptyPattern)
        );
    }
}
