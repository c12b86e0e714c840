use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;
use thiserror::Error;

// implement Complex instead of using the num-complex trait for learning
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

pub const ZERO: Complex = Complex::new(0.0, 0.0);

impl Complex {
    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// Squared modulus, `|z|²`.
    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn conj(&self) -> Self {
        Self {
            real: self.real,
            imag: -self.imag,
        }
    }

    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            real: self.real * factor,
            imag: self.imag * factor,
        }
    }

    /// Complex tangent via `tan(x + iy) = (sin 2x + i sinh 2y) / (cos 2x + cosh 2y)`.
    ///
    /// Far from the real axis `sinh` and `cosh` overflow, so the limit
    /// `±i` is taken with the exponentially small real part computed directly.
    #[must_use]
    pub fn tan(&self) -> Self {
        let two_x = 2.0 * self.real;
        let two_y = 2.0 * self.imag;

        if two_y.abs() > TAN_ASYMPTOTE {
            return Self {
                real: 2.0 * two_x.sin() * (-two_y.abs()).exp(),
                imag: two_y.signum(),
            };
        }

        let denominator = two_x.cos() + two_y.cosh();

        Self {
            real: two_x.sin() / denominator,
            imag: two_y.sinh() / denominator,
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }
}

// Beyond this `tanh(2y)` is 1 to double precision.
const TAN_ASYMPTOTE: f64 = 40.0;

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

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            real: -self.real,
            imag: -self.imag,
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

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.real, self.imag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseComplexError {
    #[error("expected a complex number as \"re,im\", got \"{0}\"")]
    MissingComma(String),
    #[error("invalid {part} component \"{value}\"")]
    InvalidComponent { part: &'static str, value: String },
}

impl FromStr for Complex {
    type Err = ParseComplexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (real, imag) = s
            .split_once(',')
            .ok_or_else(|| ParseComplexError::MissingComma(s.to_string()))?;

        let parse = |part: &'static str, value: &str| {
            value
                .trim()
                .parse::<f64>()
                .map_err(|_| ParseComplexError::InvalidComponent {
                    part,
                    value: value.trim().to_string(),
                })
        };

        Ok(Self {
            real: parse("real", real)?,
            imag: parse("imaginary", imag)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_squared() {
        let c = Complex::new(-3.0, 4.0);
        assert_eq!(c.magnitude_squared(), 25.0); // 3² + 4² = 25
    }

    #[test]
    fn test_sub() {
        let result = Complex::new(1.0, 2.0) - Complex::new(3.0, -7.0);
        assert_eq!(result, Complex::new(-2.0, 9.0));
    }

    #[test]
    fn test_mul() {
        // (1 + 2i) * (3 + 4i) = 3 + 4i + 6i + 8i² = -5 + 10i
        let result = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);
        assert_eq!(result, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn test_conj_times_self_is_magnitude_squared() {
        let c = Complex::new(2.0, -3.0);
        let product = c * c.conj();

        assert_eq!(product.real, c.magnitude_squared());
        assert_eq!(product.imag, 0.0);
    }

    #[test]
    fn test_tan_of_real_matches_f64_tan() {
        let c = Complex::new(0.4, 0.0);
        let result = c.tan();

        assert!((result.real - 0.4_f64.tan()).abs() < 1e-15);
        assert_eq!(result.imag, 0.0);
    }

    #[test]
    fn test_tan_far_from_real_axis_approaches_plus_or_minus_i() {
        let upper = Complex::new(0.3, 400.0).tan();
        let lower = Complex::new(-2.0, -1e6).tan();

        assert!(upper.is_finite() && lower.is_finite());
        assert!(upper.real.abs() < 1e-300);
        assert_eq!(upper.imag, 1.0);
        assert_eq!(lower.imag, -1.0);
    }

    #[test]
    fn test_tan_is_continuous_across_asymptote_switch() {
        let below = Complex::new(0.7, 19.999).tan();
        let above = Complex::new(0.7, 20.001).tan();

        assert!((below.real - above.real).abs() < 1e-17);
        assert!((below.imag - above.imag).abs() < 1e-15);
    }

    #[test]
    fn test_tan_of_imaginary_unit_is_i_tanh_one() {
        let result = Complex::new(0.0, 1.0).tan();

        assert_eq!(result.real, 0.0);
        assert!((result.imag - 1.0_f64.tanh()).abs() < 1e-15);
    }

    #[test]
    fn test_is_finite() {
        assert!(Complex::new(1.0, -1.0).is_finite());
        assert!(!Complex::new(f64::NAN, 0.0).is_finite());
        assert!(!Complex::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_parse_complex() {
        assert_eq!("-1.5, 0.25".parse::<Complex>(), Ok(Complex::new(-1.5, 0.25)));
        assert_eq!(
            "1.5".parse::<Complex>(),
            Err(ParseComplexError::MissingComma("1.5".to_string()))
        );
        assert_eq!(
            "x,2".parse::<Complex>(),
            Err(ParseComplexError::InvalidComponent {
                part: "real",
                value: "x".to_string()
            })
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let c = Complex::new(0.0, -1.5);
        assert_eq!(c.to_string().parse::<Complex>(), Ok(c));
    }
}
