use std::fmt;

use crate::core::data::complex::Complex;

const PRESET_CONSTANTS: [Complex; 4] = [
    Complex::new(0.3, 0.6),
    Complex::new(-0.75, 0.0),
    Complex::new(0.0, 1.0),
    Complex::new(-1.3, 0.0),
];

/// Index into the fixed list of Julia constants.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct JuliaPreset(usize);

impl JuliaPreset {
    pub const COUNT: usize = PRESET_CONSTANTS.len();

    /// Any index is accepted and wrapped into the list.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index % Self::COUNT)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    #[must_use]
    pub const fn constant(self) -> Complex {
        PRESET_CONSTANTS[self.0]
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self::new(self.0 + 1)
    }
}

impl fmt::Display for JuliaPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c = {}", self.constant())
    }
}
