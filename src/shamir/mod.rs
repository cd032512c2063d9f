//! Secret reconstruction for Shamir's secret sharing over the integers.
//!
//! The secret is the constant term of a polynomial of degree `< k`, it is recovered by
//! evaluating the Lagrange interpolant of `k` shares at `x = 0` with exact rational arithmetic.

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use thiserror::Error;
use tracing::debug;

use crate::radix::{self, DecodeError};

pub mod fraction;
pub mod lagrange;
pub mod polynomial;

/// A share, i.e. a point on the polynomial
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

impl Point {
    pub fn new(x: BigInt, y: BigInt) -> Self {
        Self { x, y }
    }
}

/// A share whose value is still encoded as a numeral string in `base`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawShare {
    pub x: BigInt,
    pub base: u32,
    pub value: String,
}

impl RawShare {
    pub fn new(x: impl Into<BigInt>, base: u32, value: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            base,
            value: value.into(),
        }
    }

    pub fn decode(&self) -> Result<Point, DecodeError> {
        let y: BigUint = radix::decode(&self.value, self.base)?;
        Ok(Point::new(self.x.clone(), y.into()))
    }
}

/// Which of the supplied points are checked against the interpolated polynomial
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verification {
    /// Only the `k` selected points are used, the others are ignored
    #[default]
    SelectedOnly,
    /// Every point that is not selected must lie on the polynomial interpolated from the
    /// selected ones
    AllPoints,
}

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("threshold must be at least 1")]
    InvalidThreshold,
    #[error("not enough points to reconstruct the secret (need {required}, got {available})")]
    InsufficientPoints { required: usize, available: usize },
    #[error("several selected points share the abscissa {0}")]
    DuplicateAbscissa(BigInt),
    #[error("interpolated value {numerator}/{denominator} is not an integer")]
    NonIntegerResult {
        numerator: BigInt,
        denominator: BigInt,
    },
    #[error("point at abscissa {x} does not lie on the interpolated polynomial")]
    InconsistentShare { x: BigInt },
}

#[derive(Debug, Error)]
pub enum RecoveryError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}

/// Decodes the raw shares then reconstructs the secret from `k` of them.
///
/// Decoding errors are returned as soon as a share fails to decode.
pub fn recover_secret(
    shares: &[RawShare],
    k: usize,
    verification: Verification,
) -> Result<BigInt, RecoveryError> {
    let points = shares
        .iter()
        .map(RawShare::decode)
        .collect::<Result<Vec<Point>, DecodeError>>()?;

    let secret = match verification {
        Verification::SelectedOnly => reconstruct_secret(&points, k)?,
        Verification::AllPoints => reconstruct_verified_secret(&points, k)?,
    };
    Ok(secret)
}

/// Reconstructs the secret, i.e. `f(0)`, from the first `k` points ordered by abscissa.
///
/// Any `k` points of a polynomial of degree `< k` give the same result, the ordering only
/// makes the choice of points reproducible.
pub fn reconstruct_secret(points: &[Point], k: usize) -> Result<BigInt, InterpolationError> {
    let (selected, _) = select_points(points, k)?;
    lagrange::interpolate_at(&selected, &BigInt::zero())?.into_integer()
}

/// Same as [`reconstruct_secret`] but the points left out of the selection must lie on the
/// interpolated polynomial, otherwise [`InterpolationError::InconsistentShare`] is returned
/// for the one with the lowest abscissa.
pub fn reconstruct_verified_secret(
    points: &[Point],
    k: usize,
) -> Result<BigInt, InterpolationError> {
    let (selected, remaining) = select_points(points, k)?;
    for point in &remaining {
        let value = lagrange::interpolate_at(&selected, &point.x)?;
        if !value.equals_integer(&point.y) {
            return Err(InterpolationError::InconsistentShare { x: point.x.clone() });
        }
    }
    debug!("{} additional points are consistent", remaining.len());
    lagrange::interpolate_at(&selected, &BigInt::zero())?.into_integer()
}

/// Splits the points into the `k` selected ones, i.e. the ones with the lowest abscissas, and
/// the others. Identical points are only counted once.
fn select_points(
    points: &[Point],
    k: usize,
) -> Result<(Vec<Point>, Vec<Point>), InterpolationError> {
    if k == 0 {
        return Err(InterpolationError::InvalidThreshold);
    }

    let mut sorted = points.to_vec();
    sorted.sort();
    sorted.dedup();

    let distinct_abscissas = match sorted.len() {
        0 => 0,
        _ => 1 + sorted.windows(2).filter(|w| w[0].x != w[1].x).count(),
    };
    if distinct_abscissas < k {
        return Err(InterpolationError::InsufficientPoints {
            required: k,
            available: distinct_abscissas,
        });
    }

    let remaining = sorted.split_off(k);
    // Points are sorted so conflicting points are next to each other
    if let Some(pair) = sorted.windows(2).find(|w| w[0].x == w[1].x) {
        return Err(InterpolationError::DuplicateAbscissa(pair[0].x.clone()));
    }

    debug!(
        "selected {} points out of {}, abscissas: [{}]",
        sorted.len(),
        points.len(),
        sorted
            .iter()
            .map(|p| p.x.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok((sorted, remaining))
}
