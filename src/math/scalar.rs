//! Scalar component traits and the per-component helpers vectors are built on.

use bytemuck::Pod;
use num_traits::{Float, NumAssign, NumCast};
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use std::cmp::Ordering;
use std::fmt::{Debug, Display};

/// Component type of a [`Vector`](super::Vector).
///
/// Implemented for every primitive integer and floating-point type.
pub trait Scalar:
    Copy + Debug + Display + PartialOrd + NumAssign + NumCast + Pod + SampleUniform + 'static
{
}

impl<T> Scalar for T where
    T: Copy + Debug + Display + PartialOrd + NumAssign + NumCast + Pod + SampleUniform + 'static
{
}

/// Floating-point component type, needed wherever a square root is taken.
pub trait Real: Scalar + Float {}

impl<T> Real for T where T: Scalar + Float {}

/// Linear interpolation `(1 - t) * a + t * b`. `t` is not clamped.
#[inline]
#[must_use]
pub fn lerp<T: Scalar>(a: T, b: T, t: T) -> T {
    let one_minus_t = T::one() - t;
    one_minus_t * a + t * b
}

/// Tests `start <= value < end`.
#[inline]
#[must_use]
pub fn in_range<T: PartialOrd>(value: T, start: T, end: T) -> bool {
    value >= start && value < end
}

/// Uniform random value in the closed range spanned by `lo` and `hi`.
///
/// The bounds may be given in either order. Non-finite or unordered bounds
/// return `lo` unchanged. Floating-point ranges may span the whole finite
/// range of `T`.
pub fn random_in_range<T: Scalar, R: Rng + ?Sized>(rng: &mut R, lo: T, hi: T) -> T {
    let finite = |v: T| v.to_f64().is_some_and(f64::is_finite);
    if !(finite(lo) && finite(hi)) {
        return lo;
    }

    let (low, high) = match lo.partial_cmp(&hi) {
        Some(Ordering::Less | Ordering::Equal) => (lo, hi),
        Some(Ordering::Greater) => (hi, lo),
        None => return lo,
    };

    if is_fractional::<T>() {
        sample_halved(rng, low, high)
    } else {
        rng.gen_range(low..=high)
    }
}

/// True for floating-point `T`, where `1 / 2` does not truncate to zero.
fn is_fractional<T: Scalar>() -> bool {
    T::one() / (T::one() + T::one()) > T::zero()
}

/// Samples `[low, high]` through the halved bounds, whose difference is
/// always finite. The result is clamped back into the range to absorb
/// rounding.
fn sample_halved<T: Scalar, R: Rng + ?Sized>(rng: &mut R, low: T, high: T) -> T {
    let two = T::one() + T::one();
    let (half_low, half_high) = (low / two, high / two);
    let t: T = rng.gen_range(T::zero()..=T::one());
    let value = (half_low + (half_high - half_low) * t) * two;

    if value < low {
        low
    } else if high < value {
        high
    } else {
        value
    }
}
