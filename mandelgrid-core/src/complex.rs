use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A point on the complex plane as two `f64` components.
///
/// Deliberately tiny: the kernel only ever squares and adds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    #[inline]
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// `re² + im²`, compared against the squared escape radius.
    #[inline]
    pub fn norm_sq(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// `z²` expanded as `(re² - im²) + i·2·re·im`.
    #[inline]
    pub fn square(self) -> Self {
        Self {
            re: self.re * self.re - self.im * self.im,
            im: 2.0 * self.re * self.im,
        }
    }
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

impl From<(f64, f64)> for Complex {
    fn from((re, im): (f64, f64)) -> Self {
        Self { re, im }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_of_i_is_minus_one() {
        assert_eq!(Complex::new(0.0, 1.0).square(), Complex::new(-1.0, 0.0));
    }

    #[test]
    fn square_matches_expansion() {
        let z = Complex::new(1.5, -0.5);
        // (1.5 - 0.5i)² = 2.25 - 0.25 - 1.5i
        assert_eq!(z.square(), Complex::new(2.0, -1.5));
    }

    #[test]
    fn norm_sq_is_not_rooted() {
        assert_eq!(Complex::new(3.0, 4.0).norm_sq(), 25.0);
    }

    #[test]
    fn add_is_componentwise() {
        let z = Complex::new(1.0, 2.0) + Complex::from((0.5, -3.0));
        assert_eq!(z, Complex::new(1.5, -1.0));
    }
}
