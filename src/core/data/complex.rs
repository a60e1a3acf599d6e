use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::core::util::format_significant::{format_significant, format_significant_signed};

/// Significant digits used when a complex number is rendered as text.
const DISPLAY_PRECISION: usize = 4;

// implement Complex instead of using the num-complex trait for learning
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 0.0);
    pub const I: Self = Self::new(0.0, 1.0);

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self {
            real: self.real,
            imag: -self.imag,
        }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn modulus(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Angle to the positive real axis, in `(-π, π]`.
    #[must_use]
    pub fn argument(&self) -> f64 {
        self.imag.atan2(self.real)
    }

    /// Absolute value applied to each component separately.
    #[must_use]
    pub fn abs_components(&self) -> Self {
        Self {
            real: self.real.abs(),
            imag: self.imag.abs(),
        }
    }

    /// `self^exponent` by repeated multiplication. `z^0` is one.
    #[must_use]
    pub fn pow(&self, exponent: u32) -> Self {
        (0..exponent).fold(Self::ONE, |acc, _| acc * *self)
    }

    /// Division that refuses a zero-modulus divisor instead of producing NaN.
    #[must_use]
    pub fn checked_div(self, divisor: Self) -> Option<Self> {
        if divisor.magnitude_squared() == 0.0 {
            return None;
        }

        Some(self / divisor)
    }
}

impl From<f64> for Complex {
    fn from(real: f64) -> Self {
        Self::new(real, 0.0)
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            real: self.real - other.real,
            imag: self.imag - other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

// Dividing by zero yields non-finite parts; use `checked_div` when the
// divisor may vanish.
impl Div for Complex {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        let denominator = other.magnitude_squared();

        Self {
            real: (self.real * other.real + self.imag * other.imag) / denominator,
            imag: (self.imag * other.real - self.real * other.imag) / denominator,
        }
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            real: -self.real,
            imag: -self.imag,
        }
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let real = format_significant(self.real, DISPLAY_PRECISION);

        if self.imag == 0.0 {
            return f.write_str(&real);
        }

        if self.imag == 1.0 || self.imag == -1.0 {
            let sign = if self.imag > 0.0 { '+' } else { '-' };

            return if self.real == 0.0 {
                if sign == '+' { f.write_str("i") } else { f.write_str("-i") }
            } else {
                write!(f, "{} {}i", real, sign)
            };
        }

        write!(
            f,
            "{} {}i",
            real,
            format_significant_signed(self.imag, DISPLAY_PRECISION)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_close(a: Complex, b: Complex) {
        assert!(
            (a.real - b.real).abs() < EPSILON && (a.imag - b.imag).abs() < EPSILON,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_magnitude_squared() {
        let c = Complex {
            real: 3.0,
            imag: 4.0,
        };
        assert_eq!(c.magnitude_squared(), 25.0); // 3² + 4² = 25
    }

    #[test]
    fn test_magnitude_squared_negative_real_and_imag() {
        let c = Complex::new(-3.0, -4.0);
        assert_eq!(c.magnitude_squared(), 25.0);
    }

    #[test]
    fn test_modulus() {
        assert_eq!(Complex::new(3.0, -4.0).modulus(), 5.0);
        assert_eq!(Complex::ZERO.modulus(), 0.0);
    }

    #[test]
    fn test_argument_covers_all_quadrants() {
        use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

        assert!((Complex::new(1.0, 1.0).argument() - FRAC_PI_4).abs() < EPSILON);
        assert!((Complex::new(0.0, 2.0).argument() - FRAC_PI_2).abs() < EPSILON);
        assert!((Complex::new(-1.0, 0.0).argument() - PI).abs() < EPSILON);
        assert!((Complex::new(-1.0, -1.0).argument() + 3.0 * FRAC_PI_4).abs() < EPSILON);
    }

    #[test]
    fn test_conjugate() {
        let c = Complex::new(2.0, -7.5);
        assert_eq!(c.conjugate(), Complex::new(2.0, 7.5));
        assert_eq!(c.conjugate().conjugate(), c);
    }

    #[test]
    fn test_add() {
        let a = Complex {
            real: 1.0,
            imag: 2.0,
        };
        let b = Complex {
            real: 3.0,
            imag: 4.0,
        };
        let result = a + b;
        assert_eq!(result.real, 4.0);
        assert_eq!(result.imag, 6.0);
    }

    #[test]
    fn test_sub() {
        let result = Complex::new(1.0, 2.0) - Complex::new(3.0, -4.0);
        assert_eq!(result, Complex::new(-2.0, 6.0));
    }

    #[test]
    fn test_mul() {
        // (1 + 2i) * (3 + 4i) = 3 + 4i + 6i + 8i² = 3 + 10i - 8 = -5 + 10i
        let a = Complex {
            real: 1.0,
            imag: 2.0,
        };
        let b = Complex {
            real: 3.0,
            imag: 4.0,
        };
        let result = a * b;
        assert_eq!(result.real, -5.0);
        assert_eq!(result.imag, 10.0);
    }

    #[test]
    fn test_mul_by_zero() {
        let result = Complex::new(5.0, 3.0) * Complex::ZERO;
        assert_eq!(result, Complex::ZERO);
    }

    #[test]
    fn test_div() {
        // (-5 + 10i) / (3 + 4i) = 1 + 2i
        let result = Complex::new(-5.0, 10.0) / Complex::new(3.0, 4.0);
        assert_close(result, Complex::new(1.0, 2.0));
    }

    #[test]
    fn test_div_undoes_mul() {
        let values = [
            Complex::new(1.5, -2.25),
            Complex::new(-0.001, 300.0),
            Complex::new(7.0, 0.0),
            Complex::new(0.0, -1.0),
        ];

        for &a in &values {
            for &b in &values {
                assert_close((a * b) / b, a);
            }
        }
    }

    #[test]
    fn test_checked_div_rejects_zero_divisor() {
        assert_eq!(Complex::ONE.checked_div(Complex::ZERO), None);
        assert_eq!(
            Complex::new(4.0, 2.0).checked_div(Complex::new(2.0, 0.0)),
            Some(Complex::new(2.0, 1.0))
        );
    }

    #[test]
    fn test_neg() {
        assert_eq!(-Complex::new(1.0, -2.0), Complex::new(-1.0, 2.0));
    }

    #[test]
    fn test_pow() {
        let z = Complex::new(2.0, 3.0);

        assert_eq!(z.pow(0), Complex::ONE);
        assert_eq!(z.pow(1), z);
        assert_eq!(z.pow(2), Complex::new(-5.0, 12.0));
        assert_eq!(Complex::I.pow(4), Complex::ONE);
    }

    #[test]
    fn test_abs_components() {
        assert_eq!(
            Complex::new(-1.25, -0.5).abs_components(),
            Complex::new(1.25, 0.5)
        );
    }

    #[test]
    fn test_display_real_only() {
        assert_eq!(Complex::new(-0.75, 0.0).to_string(), "-0.75");
        assert_eq!(Complex::new(1.23456, 0.0).to_string(), "1.235");
        assert_eq!(Complex::ZERO.to_string(), "0");
    }

    #[test]
    fn test_display_unit_imaginary() {
        assert_eq!(Complex::I.to_string(), "i");
        assert_eq!(Complex::new(0.0, -1.0).to_string(), "-i");
        assert_eq!(Complex::new(2.5, 1.0).to_string(), "2.5 +i");
        assert_eq!(Complex::new(2.5, -1.0).to_string(), "2.5 -i");
    }

    #[test]
    fn test_display_general() {
        assert_eq!(Complex::new(0.3, 0.6).to_string(), "0.3 +0.6i");
        assert_eq!(Complex::new(-1.3, -0.25).to_string(), "-1.3 -0.25i");
        assert_eq!(Complex::new(0.0, 2.0).to_string(), "0 +2i");
        assert_eq!(Complex::new(123456.0, 0.00001).to_string(), "1.235e+05 +1e-05i");
    }
}
