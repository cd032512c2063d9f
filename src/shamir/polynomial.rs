use num_bigint::BigInt;
use num_traits::{One, Zero};

/// Polynomial with integer coefficients, used to produce consistent shares.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Polynomial {
    /// Coefficients in ascending order, i.e. [1, 2, 3] -> 1 + 2x + 3x^2
    coefficients: Vec<BigInt>,
}

impl Polynomial {
    pub fn new(coefficients: Vec<BigInt>) -> Self {
        let mut coefficients = coefficients;
        while let Some(c) = coefficients.last()
            && c.is_zero()
        {
            coefficients.pop();
        }
        Self { coefficients }
    }

    /// Builds `prod (x - root)`
    pub fn from_roots(roots: &[BigInt]) -> Self {
        let mut coefficients = Vec::with_capacity(roots.len() + 1);
        coefficients.push(BigInt::one());
        for (i, root) in roots.iter().enumerate() {
            // Leading coefficient is pushed one level higher
            coefficients.push(BigInt::one());

            // Multiplying by (x - root) gives coeff[j] = coeff[j - 1] - root * coeff[j]
            // We iterate in reverse order and take care of the 0 case at the end
            for j in (1..=i).rev() {
                coefficients[j] = &coefficients[j - 1] - root * &coefficients[j];
            }
            coefficients[0] = -(root * &coefficients[0]);
        }
        Self::new(coefficients)
    }

    /// Degree of the polynomial, `None` for the zero polynomial
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    pub fn evaluate(&self, point: &BigInt) -> BigInt {
        // Horner's method
        self.coefficients
            .iter()
            .rev()
            .fold(BigInt::zero(), |acc, c| acc * point + c)
    }

    pub fn evaluate_at_zero(&self) -> BigInt {
        self.coefficients.first().cloned().unwrap_or_default()
    }
}
