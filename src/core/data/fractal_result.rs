/// Outcome of an escape-time iteration.
///
/// `escaped` is false exactly when the iteration limit was reached, in which
/// case `iterations` equals that limit and the point counts as interior.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct EscapeResult {
    pub iterations: u32,
    pub escaped: bool,
}

/// Outcome of a Newton iteration: the root reached, if any.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NewtonResult {
    pub iterations: u32,
    pub root_index: Option<usize>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FractalResult {
    EscapeTime(EscapeResult),
    Newton(NewtonResult),
}

impl FractalResult {
    #[must_use]
    pub fn iterations(&self) -> u32 {
        match self {
            Self::EscapeTime(result) => result.iterations,
            Self::Newton(result) => result.iterations,
        }
    }
}

impl From<EscapeResult> for FractalResult {
    fn from(result: EscapeResult) -> Self {
        Self::EscapeTime(result)
    }
}

impl From<NewtonResult> for FractalResult {
    fn from(result: NewtonResult) -> Self {
        Self::Newton(result)
    }
}
