//! Complex number type for eigenvalues and eigenvector components
//!
//! # Storage Format
//!
//! `Complex` is `#[repr(C)]` with the real part first, so a slice of complex
//! values has the same memory layout as an interleaved `f64` slice
//! (re, im, re, im...), matching numpy and LAPACK's `COMPLEX*16`.
//!
//! # Equality
//!
//! Equality compares the raw floats exactly. There is no tolerance; use
//! [`Complex::magnitude`] of the difference for approximate comparisons.
//!
//! # Examples
//!
//! ```
//! use eigv::dtype::Complex;
//!
//! let z = Complex::new(3.0, 4.0);
//! assert_eq!(z.magnitude(), 5.0);
//! assert_eq!(z.conj(), Complex::new(3.0, -4.0));
//! assert_eq!(z.to_string(), "3.0+4.0j");
//! ```

use bytemuck::{Pod, Zeroable};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Complex number with `f64` real and imaginary parts
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Complex {
    /// Real part
    pub re: f64,
    /// Imaginary part
    pub im: f64,
}

impl Complex {
    /// Zero complex number
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    /// One (real unit)
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };

    /// Imaginary unit i
    pub const I: Self = Self { re: 0.0, im: 1.0 };

    /// Create a new complex number
    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// The real part
    #[inline]
    pub const fn real(self) -> f64 {
        self.re
    }

    /// The imaginary part
    #[inline]
    pub const fn imaginary(self) -> f64 {
        self.im
    }

    /// Whether the imaginary part is exactly zero
    #[inline]
    pub fn is_real(self) -> bool {
        self.im == 0.0
    }

    /// Magnitude (absolute value): |z| = sqrt(re² + im²)
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Squared magnitude: |z|² = re² + im²
    #[inline]
    pub fn magnitude_squared(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Complex conjugate: conj(a + bi) = a - bi
    #[inline]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// Multiply by a real scalar
    #[inline]
    pub fn scale(self, k: f64) -> Self {
        Self {
            re: self.re * k,
            im: self.im * k,
        }
    }
}

/// View a slice of complex values as interleaved `(re, im)` pairs
pub fn as_interleaved(values: &[Complex]) -> &[f64] {
    bytemuck::cast_slice(values)
}

impl Add for Complex {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl Sub for Complex {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    /// Complex multiplication: (a+bi)(c+di) = (ac-bd) + (ad+bc)i
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

impl Neg for Complex {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

/// Renders `<real><sign><|imag|>j`.
///
/// The sign follows the imaginary part's sign bit, so `-0.0` prints as `-`.
/// A zero imaginary part prints as the literal `0.`.
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.im.is_sign_negative() { '-' } else { '+' };
        if self.im == 0.0 {
            write!(f, "{:?}{}0.j", self.re, sign)
        } else {
            write!(f, "{:?}{}{:?}j", self.re, sign, self.im.abs())
        }
    }
}

impl From<f64> for Complex {
    #[inline]
    fn from(re: f64) -> Self {
        Self { re, im: 0.0 }
    }
}

impl From<(f64, f64)> for Complex {
    #[inline]
    fn from((re, im): (f64, f64)) -> Self {
        Self { re, im }
    }
}
