use std::fmt;

/// Axis of a line segment.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LineError {
    /// Twice the delta along `axis` does not fit in the working type.
    DeltaOutOfRange { axis: Axis },
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::DeltaOutOfRange { axis } => write!(
                f,
                "twice the {} delta does not fit in the working integer type",
                axis
            ),
        }
    }
}

impl std::error::Error for LineError {}

pub type Result<T> = std::result::Result<T, LineError>;
