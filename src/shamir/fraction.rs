use std::ops::Add;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use super::InterpolationError;

/// Exact rational value accumulated during an interpolation.
///
/// Fractions are not kept in lowest terms, adding two fractions simply multiplies the
/// denominators. Use [`Fraction::reduced`] when a canonical form is needed.
#[derive(Clone, Debug)]
pub struct Fraction {
    numerator: BigInt,
    /// Never zero
    denominator: BigInt,
}

impl Fraction {
    /// Returns `None` if `denominator` is zero
    pub fn new(numerator: BigInt, denominator: BigInt) -> Option<Self> {
        if denominator.is_zero() {
            return None;
        }
        Some(Self {
            numerator,
            denominator,
        })
    }

    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    pub fn from_integer(value: BigInt) -> Self {
        Self {
            numerator: value,
            denominator: BigInt::one(),
        }
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Checks `self == value` without dividing
    pub fn equals_integer(&self, value: &BigInt) -> bool {
        self.numerator == value * &self.denominator
    }

    /// Lowest terms with a positive denominator
    pub fn reduced(self) -> Self {
        let gcd = self.numerator.gcd(&self.denominator);
        let (mut numerator, mut denominator) = (self.numerator / &gcd, self.denominator / &gcd);
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }
        Self {
            numerator,
            denominator,
        }
    }

    /// Performs the final exact division.
    ///
    /// A non-zero remainder is reported as [`InterpolationError::NonIntegerResult`], the value
    /// is never truncated.
    pub fn into_integer(self) -> Result<BigInt, InterpolationError> {
        let (quotient, remainder) = self.numerator.div_rem(&self.denominator);
        if !remainder.is_zero() {
            let reduced = self.reduced();
            return Err(InterpolationError::NonIntegerResult {
                numerator: reduced.numerator,
                denominator: reduced.denominator,
            });
        }
        Ok(quotient)
    }
}

impl Add for Fraction {
    type Output = Fraction;

    // a/b + c/d = (ad + cb) / bd
    fn add(self, other: Fraction) -> Fraction {
        Fraction {
            numerator: self.numerator * &other.denominator + other.numerator * &self.denominator,
            denominator: self.denominator * other.denominator,
        }
    }
}
