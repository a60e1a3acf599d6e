use std::{error::Error, fmt};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GeometryError {
    ZeroDepth,
    DepthTooLarge { depth: u32, max_depth: u32 },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDepth => write!(f, "Recursion depth must be at least 1"),
            Self::DepthTooLarge { depth, max_depth } => {
                write!(
                    f,
                    "Recursion depth {} exceeds maximum {}",
                    depth, max_depth
                )
            }
        }
    }
}

impl Error for GeometryError {}

pub(crate) fn validate_depth(depth: u32, max_depth: u32) -> Result<(), GeometryError> {
    if depth == 0 {
        return Err(GeometryError::ZeroDepth);
    }

    if depth > max_depth {
        return Err(GeometryError::DepthTooLarge { depth, max_depth });
    }

    Ok(())
}
