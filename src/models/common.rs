use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum LinalgError {
    NullInput(&'static str),
    LengthMismatch { expected: usize, actual: usize },
    EmptyMatrix,
    InvalidDistanceFunction(String),
    InvalidInput(String),
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinalgError::NullInput(arg) => write!(f, "Argument '{}' must not be null", arg),
            LinalgError::LengthMismatch { expected, actual } => write!(
                f,
                "Dimension mismatch: expected length {}, got {}",
                expected, actual
            ),
            LinalgError::EmptyMatrix => write!(f, "Matrix has no columns"),
            LinalgError::InvalidDistanceFunction(msg) => {
                write!(f, "Invalid distance function: {}", msg)
            }
            LinalgError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for LinalgError {}

pub type Result<T> = std::result::Result<T, LinalgError>;

/// Fails with `LengthMismatch` unless both slices have the same length.
#[inline]
pub fn check_same_len(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(LinalgError::LengthMismatch {
            expected: x.len(),
            actual: y.len(),
        });
    }
    Ok(())
}

/// Unwraps a nullable host argument.
#[inline]
pub fn require<'a, T: ?Sized>(value: Option<&'a T>, name: &'static str) -> Result<&'a T> {
    value.ok_or(LinalgError::NullInput(name))
}
