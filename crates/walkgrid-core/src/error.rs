use std::fmt;

/// Errors that can occur when building a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Width or height is zero or negative.
    InvalidDimensions { width: i32, height: i32 },
    /// Node size is zero, negative, or not finite.
    InvalidNodeSize(f32),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "grid: invalid dimensions {width}x{height}, both must be positive")
            }
            Self::InvalidNodeSize(size) => {
                write!(f, "grid: invalid node size {size}, must be positive and finite")
            }
        }
    }
}

impl std::error::Error for GridError {}
