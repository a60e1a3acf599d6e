use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColourMapError {
    IterationsExceedMax {
        iterations: u32,
        max_iterations: u32,
    },
    RootOutOfRange {
        root_index: usize,
        degree: u32,
    },
    MismatchedResult {
        expected: &'static str,
    },
}

impl fmt::Display for ColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationsExceedMax {
                iterations,
                max_iterations,
            } => {
                write!(
                    f,
                    "iterations {} exceeds maximum {}",
                    iterations, max_iterations
                )
            }
            Self::RootOutOfRange { root_index, degree } => {
                write!(
                    f,
                    "root index {} out of range for degree {}",
                    root_index, degree
                )
            }
            Self::MismatchedResult { expected } => {
                write!(f, "colour map expects {} results", expected)
            }
        }
    }
}

impl Error for ColourMapError {}

pub trait ColourMap<T> {
    fn map(&self, value: T) -> Result<Colour, ColourMapError>;

    fn display_name(&self) -> &str;
}
