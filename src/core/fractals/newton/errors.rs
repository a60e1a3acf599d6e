use std::{error::Error, fmt};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NewtonError {
    InvalidParameter { degree: u32 },
    ZeroMaxIterationsError,
}

impl fmt::Display for NewtonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter { degree } => {
                write!(f, "Polynomial degree must be at least 1, got {}", degree)
            }
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for NewtonError {}
