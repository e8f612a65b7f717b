//! Generic fixed-dimension vector.
//!
//! [`Vector<T, D>`] stores `D` components of type `T`. The dimension is part
//! of the type, so operations between vectors of different dimension do not
//! compile. All arithmetic is componentwise; `*` between two vectors is the
//! Hadamard product, never a dot product.

use super::scalar::{self, Real, Scalar};
use crate::error::VectorError;
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::{AsPrimitive, Signed};
use rand::Rng;
use std::fmt;
use std::iter::Sum;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// Vector of `D` components of type `T`.
///
/// Aligned to 16 bytes so it can be loaded with SIMD instructions. The
/// alignment applies to every `T` and `D`, so sizes round up to a multiple
/// of 16: `Vector<f32, 3>` is 16 bytes, `Vector<u8, 2>` is 16 and
/// `Vector<f64, 3>` is 32. Use [`PackedVector`](super::PackedVector) for
/// tightly packed buffers.
#[repr(C, align(16))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<T, const D: usize> {
    data: [T; D],
}

impl<T: Scalar, const D: usize> Vector<T, D> {
    /// Number of components.
    pub const DIM: usize = D;

    #[inline]
    #[must_use]
    pub const fn from_array(data: [T; D]) -> Self {
        Self { data }
    }

    /// Every component set to `s`.
    #[inline]
    #[must_use]
    pub fn splat(s: T) -> Self {
        Self { data: [s; D] }
    }

    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    #[inline]
    #[must_use]
    pub fn ones() -> Self {
        Self::splat(T::one())
    }

    /// Unit vector along `axis`, or `None` if `axis >= D`.
    #[must_use]
    pub fn unit(axis: usize) -> Option<Self> {
        let mut v = Self::zero();
        *v.get_mut(axis)? = T::one();
        Some(v)
    }

    /// Builds a vector from the first `D` elements of `slice`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::SliceTooShort`] if `slice` holds fewer than `D`
    /// elements.
    pub fn from_slice(slice: &[T]) -> Result<Self, VectorError> {
        if slice.len() < D {
            log::debug!(
                "Cannot build a {}-component vector from {} elements",
                D,
                slice.len()
            );
            return Err(VectorError::SliceTooShort {
                expected: D,
                actual: slice.len(),
            });
        }

        let mut data = [T::zero(); D];
        data.copy_from_slice(&slice[..D]);
        Ok(Self { data })
    }

    /// Converts each component of `v` with `as` semantics.
    #[must_use]
    pub fn from_cast<U>(v: &Vector<U, D>) -> Self
    where
        U: Scalar + AsPrimitive<T>,
    {
        Self {
            data: v.data.map(|c| c.as_()),
        }
    }

    /// Converts each component to `U` with `as` semantics.
    #[must_use]
    pub fn cast<U>(&self) -> Vector<U, D>
    where
        U: Scalar,
        T: AsPrimitive<U>,
    {
        Vector::from_cast(self)
    }

    #[inline]
    #[must_use]
    pub const fn dim(&self) -> usize {
        D
    }

    #[inline]
    #[must_use]
    pub const fn as_array(&self) -> &[T; D] {
        &self.data
    }

    #[inline]
    #[must_use]
    pub fn to_array(self) -> [T; D] {
        self.data
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    #[must_use]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.data.get(i)
    }

    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.data.get_mut(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Applies `f` to every component.
    #[inline]
    #[must_use]
    pub fn map<U: Scalar>(self, f: impl FnMut(T) -> U) -> Vector<U, D> {
        Vector {
            data: self.data.map(f),
        }
    }

    /// Combines matching components of `self` and `other` with `f`.
    #[inline]
    #[must_use]
    pub fn zip_map(self, other: Self, mut f: impl FnMut(T, T) -> T) -> Self {
        let mut data = self.data;
        for (a, b) in data.iter_mut().zip(other.data) {
            *a = f(*a, b);
        }
        Self { data }
    }

    /// Sum of pairwise component products.
    ///
    /// Two, three and four dimensions use straight-line code; the branch is
    /// resolved per monomorphization. Every path adds the products left to
    /// right starting from the first one, so results are bit-identical. A
    /// sum of negative zeros is therefore `-0.0`, not `+0.0`.
    #[inline]
    #[must_use]
    pub fn dot(&self, other: &Self) -> T {
        let (a, b) = (self.as_slice(), other.as_slice());
        match D {
            2 => a[0] * b[0] + a[1] * b[1],
            3 => a[0] * b[0] + a[1] * b[1] + a[2] * b[2],
            4 => a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3],
            _ => dot_accumulate(a, b),
        }
    }

    /// Componentwise product, same as `self * other`.
    #[inline]
    #[must_use]
    pub fn hadamard(&self, other: &Self) -> Self {
        *self * *other
    }

    /// Squared length, cheaper than [`length`](Self::length) for comparisons.
    #[inline]
    #[must_use]
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    #[inline]
    #[must_use]
    pub fn distance_squared(&self, other: &Self) -> T {
        (*self - *other).length_squared()
    }

    /// Componentwise `(1 - t) * self + t * other`. `t` is not clamped, so
    /// values outside `[0, 1]` extrapolate.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: T) -> Self {
        self.zip_map(*other, |a, b| scalar::lerp(a, b, t))
    }

    /// Componentwise minimum. Ties and unordered pairs keep `self`.
    #[must_use]
    pub fn min(&self, other: &Self) -> Self {
        self.zip_map(*other, |a, b| if b < a { b } else { a })
    }

    /// Componentwise maximum. Ties and unordered pairs keep `self`.
    #[must_use]
    pub fn max(&self, other: &Self) -> Self {
        self.zip_map(*other, |a, b| if a < b { b } else { a })
    }

    #[must_use]
    pub fn min_component(&self) -> Option<T> {
        self.iter()
            .copied()
            .reduce(|acc, c| if c < acc { c } else { acc })
    }

    #[must_use]
    pub fn max_component(&self) -> Option<T> {
        self.iter()
            .copied()
            .reduce(|acc, c| if acc < c { c } else { acc })
    }

    #[must_use]
    pub fn component_sum(&self) -> T {
        self.iter().fold(T::zero(), |acc, &c| acc + c)
    }

    /// Random vector with each component drawn uniformly from
    /// `[min[i], max[i]]`, using the thread-local generator.
    #[must_use]
    pub fn random_in_range(min: &Self, max: &Self) -> Self {
        Self::random_in_range_with(&mut rand::thread_rng(), min, max)
    }

    /// Same as [`random_in_range`](Self::random_in_range) with a caller
    /// supplied generator.
    #[must_use]
    pub fn random_in_range_with<R: Rng + ?Sized>(rng: &mut R, min: &Self, max: &Self) -> Self {
        min.zip_map(*max, |lo, hi| scalar::random_in_range(rng, lo, hi))
    }
}

impl<T: Scalar + Signed, const D: usize> Vector<T, D> {
    #[must_use]
    pub fn abs(&self) -> Self {
        self.map(|c| c.abs())
    }
}

impl<T: Real, const D: usize> Vector<T, D> {
    #[inline]
    #[must_use]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    #[inline]
    #[must_use]
    pub fn distance(&self, other: &Self) -> T {
        (*self - *other).length()
    }

    /// Scales to unit length in place and returns the previous length.
    ///
    /// A zero vector yields non-finite components.
    pub fn normalize(&mut self) -> T {
        let length = self.length();
        *self *= T::one() / length;
        length
    }

    /// Unit-length copy. A zero vector yields non-finite components.
    #[must_use]
    pub fn normalized(&self) -> Self {
        *self * (T::one() / self.length())
    }
}

fn dot_accumulate<T: Scalar>(a: &[T], b: &[T]) -> T {
    let mut products = a.iter().zip(b).map(|(&x, &y)| x * y);
    match products.next() {
        Some(first) => products.fold(first, |acc, p| acc + p),
        None => T::zero(),
    }
}

impl<T: Scalar, const D: usize> Default for Vector<T, D> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const D: usize> Index<usize> for Vector<T, D> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T, const D: usize> IndexMut<usize> for Vector<T, D> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

macro_rules! impl_elementwise_ops {
    ($($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident);* $(;)?) => {
        $(
            impl<T: Scalar, const D: usize> $Op for Vector<T, D> {
                type Output = Self;

                #[inline]
                fn $op(self, rhs: Self) -> Self {
                    self.zip_map(rhs, |a, b| $Op::$op(a, b))
                }
            }

            impl<T: Scalar, const D: usize> $Op<T> for Vector<T, D> {
                type Output = Self;

                #[inline]
                fn $op(self, rhs: T) -> Self {
                    self.map(|a| $Op::$op(a, rhs))
                }
            }

            impl<T: Scalar, const D: usize> $OpAssign for Vector<T, D> {
                #[inline]
                fn $op_assign(&mut self, rhs: Self) {
                    for (a, b) in self.data.iter_mut().zip(rhs.data) {
                        $OpAssign::$op_assign(a, b);
                    }
                }
            }

            impl<T: Scalar, const D: usize> $OpAssign<T> for Vector<T, D> {
                #[inline]
                fn $op_assign(&mut self, rhs: T) {
                    for a in &mut self.data {
                        $OpAssign::$op_assign(a, rhs);
                    }
                }
            }
        )*
    };
}

impl_elementwise_ops!(
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
);

impl<T: Scalar + Neg<Output = T>, const D: usize> Neg for Vector<T, D> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

// Scalar on the left. `s - v` is `v - s`, not `s - v`: it mirrors the
// vector-scalar form rather than negating it. There is no `s / v`.
macro_rules! impl_scalar_lhs_ops {
    ($($t:ty),* $(,)?) => {
        $(
            impl<const D: usize> Add<Vector<$t, D>> for $t {
                type Output = Vector<$t, D>;

                #[inline]
                fn add(self, rhs: Vector<$t, D>) -> Vector<$t, D> {
                    rhs + self
                }
            }

            impl<const D: usize> Sub<Vector<$t, D>> for $t {
                type Output = Vector<$t, D>;

                #[inline]
                fn sub(self, rhs: Vector<$t, D>) -> Vector<$t, D> {
                    rhs - self
                }
            }

            impl<const D: usize> Mul<Vector<$t, D>> for $t {
                type Output = Vector<$t, D>;

                #[inline]
                fn mul(self, rhs: Vector<$t, D>) -> Vector<$t, D> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_ops!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<T: Scalar, const D: usize> Sum for Vector<T, D> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, v| acc + v)
    }
}

impl<T: Scalar, const D: usize> From<[T; D]> for Vector<T, D> {
    fn from(data: [T; D]) -> Self {
        Self { data }
    }
}

impl<T: Scalar, const D: usize> From<Vector<T, D>> for [T; D] {
    fn from(v: Vector<T, D>) -> Self {
        v.data
    }
}

impl<T: Scalar, const D: usize> TryFrom<&[T]> for Vector<T, D> {
    type Error = VectorError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        Self::from_slice(slice)
    }
}

impl<T, const D: usize> IntoIterator for Vector<T, D> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, const D: usize> IntoIterator for &'a Vector<T, D> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: Scalar, const D: usize> fmt::Display for Vector<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

impl<T, const D: usize> AbsDiffEq for Vector<T, D>
where
    T: Scalar + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.data
            .iter()
            .zip(&other.data)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const D: usize> RelativeEq for Vector<T, D>
where
    T: Scalar + RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.data
            .iter()
            .zip(&other.data)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const D: usize> UlpsEq for Vector<T, D>
where
    T: Scalar + UlpsEq<Epsilon = T>,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.data
            .iter()
            .zip(&other.data)
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

#[inline]
#[must_use]
pub fn dot_product<T: Scalar, const D: usize>(v1: &Vector<T, D>, v2: &Vector<T, D>) -> T {
    v1.dot(v2)
}

#[inline]
#[must_use]
pub fn hadamard_product<T: Scalar, const D: usize>(
    v1: &Vector<T, D>,
    v2: &Vector<T, D>,
) -> Vector<T, D> {
    v1.hadamard(v2)
}

#[inline]
#[must_use]
pub fn lerp<T: Scalar, const D: usize>(v1: &Vector<T, D>, v2: &Vector<T, D>, t: T) -> Vector<T, D> {
    v1.lerp(v2, t)
}

#[must_use]
pub fn random_in_range<T: Scalar, const D: usize>(
    min: &Vector<T, D>,
    max: &Vector<T, D>,
) -> Vector<T, D> {
    Vector::random_in_range(min, max)
}

#[inline]
#[must_use]
pub fn max<T: Scalar, const D: usize>(v1: &Vector<T, D>, v2: &Vector<T, D>) -> Vector<T, D> {
    v1.max(v2)
}

#[inline]
#[must_use]
pub fn min<T: Scalar, const D: usize>(v1: &Vector<T, D>, v2: &Vector<T, D>) -> Vector<T, D> {
    v1.min(v2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    type V3 = Vector<f32, 3>;
    type V5 = Vector<f64, 5>;

    #[test]
    fn test_splat_and_zero() {
        let v = V3::splat(2.5);
        assert_eq!(v.as_array(), &[2.5, 2.5, 2.5]);
        assert_eq!(V3::default(), V3::zero());
        assert_eq!(V3::ones().component_sum(), 3.0);
    }

    #[test]
    fn test_unit_axis() {
        let v = Vector::<i32, 4>::unit(2);
        assert_eq!(v.map(Vector::to_array), Some([0, 0, 1, 0]));
        assert_eq!(V3::unit(0), Some(V3::from_array([1.0, 0.0, 0.0])));
        assert_eq!(V3::unit(3), None);
    }

    #[test]
    fn test_from_slice_reads_first_d_elements() {
        let v = V3::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_from_slice_too_short() {
        let err = V3::from_slice(&[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            VectorError::SliceTooShort {
                expected: 3,
                actual: 2
            }
        );
        assert!(V3::try_from(&[0.0_f32][..]).is_err());
    }

    #[test]
    fn test_cast_between_scalar_types() {
        let v = Vector::<f32, 3>::from_array([1.9, -2.7, 3.0]);
        let i: Vector<i32, 3> = v.cast();
        assert_eq!(i.to_array(), [1, -2, 3]);

        let back = Vector::<f64, 3>::from_cast(&i);
        assert_eq!(back.to_array(), [1.0, -2.0, 3.0]);
    }

    #[test]
    fn test_index_and_get() {
        let mut v = V3::from_array([1.0, 2.0, 3.0]);
        v[1] = 5.0;
        assert_eq!(v[1], 5.0);
        assert_eq!(v.get(2), Some(&3.0));
        assert_eq!(v.get(3), None);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let v = V3::zero();
        let i = std::hint::black_box(3);
        let _component: f32 = v[i];
    }

    #[test]
    fn test_elementwise_vector_ops() {
        let a = V3::from_array([1.0, 2.0, 3.0]);
        let b = V3::from_array([4.0, 5.0, 6.0]);
        assert_eq!((a + b).to_array(), [5.0, 7.0, 9.0]);
        assert_eq!((b - a).to_array(), [3.0, 3.0, 3.0]);
        assert_eq!((a * b).to_array(), [4.0, 10.0, 18.0]);
        assert_eq!((b / a).to_array(), [4.0, 2.5, 2.0]);
        assert_eq!((-a).to_array(), [-1.0, -2.0, -3.0]);
    }

    #[test]
    fn test_elementwise_scalar_ops() {
        let a = V3::from_array([2.0, 4.0, 6.0]);
        assert_eq!((a + 1.0).to_array(), [3.0, 5.0, 7.0]);
        assert_eq!((a - 1.0).to_array(), [1.0, 3.0, 5.0]);
        assert_eq!((a * 0.5).to_array(), [1.0, 2.0, 3.0]);
        assert_eq!((a / 2.0).to_array(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_compound_assignment() {
        let mut v = V3::from_array([1.0, 2.0, 3.0]);
        v += V3::ones();
        v *= 2.0;
        v -= V3::from_array([0.0, 1.0, 2.0]);
        v /= V3::splat(2.0);
        assert_eq!(v.to_array(), [2.0, 2.5, 3.0]);

        let mut w = Vector::<i32, 2>::from_array([7, 9]);
        w -= 2;
        w /= 2;
        w += 1;
        assert_eq!(w.to_array(), [3, 4]);
    }

    #[test]
    fn test_scalar_left_ops() {
        let v = V3::from_array([1.0, 2.0, 3.0]);
        assert_eq!(2.0 * v, v * 2.0);
        assert_eq!(2.0 + v, v + 2.0);
    }

    #[test]
    fn test_scalar_left_subtraction_mirrors_vector_minus_scalar() {
        // Asymmetry carried over deliberately: this is `v - s`, not `s - v`.
        let v = V3::from_array([1.0, 2.0, 3.0]);
        assert_eq!(2.0 - v, v - 2.0);
        assert_eq!((2.0 - v).to_array(), [-1.0, 0.0, 1.0]);
        assert_ne!(2.0 - v, V3::splat(2.0) - v);
    }

    #[test]
    fn test_dot_generic_dimension() {
        let a = V5::from_array([1.0, 2.0, 3.0, 4.0, 5.0]);
        let b = V5::splat(2.0);
        assert_eq!(a.dot(&b), 30.0);
        assert_eq!(dot_product(&a, &a), a.length_squared());
        assert_eq!(Vector::<f32, 0>::zero().dot(&Vector::zero()), 0.0);
    }

    #[test]
    fn test_dot_fast_path_matches_accumulation() {
        let a = [0.1_f32, 0.7, -1.3, 2.9];
        let b = [3.3_f32, -0.2, 0.6, 1.1];
        let fast = Vector::from_array(a).dot(&Vector::from_array(b));
        assert_eq!(fast.to_bits(), dot_accumulate(&a, &b).to_bits());

        let a3 = Vector::from_array([a[0], a[1], a[2]]);
        let fast3 = a3.dot(&Vector::from_array([b[0], b[1], b[2]]));
        assert_eq!(fast3.to_bits(), dot_accumulate(&a[..3], &b[..3]).to_bits());
    }

    #[test]
    fn test_dot_of_negative_zeros_keeps_sign() {
        let one = V5::splat(1.0);
        assert!(V5::splat(-0.0).dot(&one).is_sign_negative());
        assert!(V3::splat(-0.0).dot(&V3::ones()).is_sign_negative());
    }

    #[test]
    fn test_length_and_normalize() {
        let mut v = V3::from_array([3.0, 0.0, 4.0]);
        assert_eq!(v.length_squared(), 25.0);
        assert_eq!(v.length(), 5.0);

        let n = v.normalized();
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-6);

        let previous = v.normalize();
        assert_eq!(previous, 5.0);
        assert_abs_diff_eq!(v, V3::from_array([0.6, 0.0, 0.8]), epsilon = 1e-6);
    }

    #[test]
    fn test_normalize_zero_vector_is_not_finite() {
        let mut v = V3::zero();
        assert_eq!(v.normalize(), 0.0);
        assert!(v.iter().all(|c| !c.is_finite()));
        assert!(V3::zero().normalized().iter().all(|c| c.is_nan()));
    }

    #[test]
    fn test_distance() {
        let a = V3::from_array([1.0, 1.0, 1.0]);
        let b = V3::from_array([1.0, 4.0, 5.0]);
        assert_eq!(a.distance_squared(&b), 25.0);
        assert_eq!(a.distance(&b), 5.0);
    }

    #[test]
    fn test_lerp_extrapolates_outside_unit_interval() {
        let a = V3::zero();
        let b = V3::from_array([1.0, 2.0, 3.0]);
        assert_eq!(lerp(&a, &b, 2.0).to_array(), [2.0, 4.0, 6.0]);
        assert_eq!(a.lerp(&b, -1.0).to_array(), [-1.0, -2.0, -3.0]);
    }

    #[test]
    fn test_min_max() {
        let a = V3::from_array([1.0, 5.0, -2.0]);
        let b = V3::from_array([3.0, 4.0, -2.0]);
        assert_eq!(max(&a, &b).to_array(), [3.0, 5.0, -2.0]);
        assert_eq!(min(&a, &b).to_array(), [1.0, 4.0, -2.0]);
        assert_eq!(a.min_component(), Some(-2.0));
        assert_eq!(a.max_component(), Some(5.0));
        assert_eq!(Vector::<f32, 0>::zero().max_component(), None);
    }

    #[test]
    fn test_abs() {
        let v = Vector::<i32, 3>::from_array([-1, 2, -3]);
        assert_eq!(v.abs().to_array(), [1, 2, 3]);
    }

    #[test]
    fn test_random_in_range_with_seeded_rng() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let lo = V3::from_array([-1.0, 0.0, 10.0]);
        let hi = V3::from_array([1.0, 0.0, 20.0]);
        for _ in 0..256 {
            let v = V3::random_in_range_with(&mut rng, &lo, &hi);
            for i in 0..3 {
                assert!(v[i] >= lo[i] && v[i] <= hi[i]);
            }
            assert_eq!(v[1], 0.0);
        }

        let a = V3::random_in_range_with(&mut ChaCha8Rng::seed_from_u64(3), &lo, &hi);
        let b = V3::random_in_range_with(&mut ChaCha8Rng::seed_from_u64(3), &lo, &hi);
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_in_range_full_float_span() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let lo = V3::splat(f32::MIN);
        let hi = V3::splat(f32::MAX);
        for _ in 0..256 {
            let v = V3::random_in_range_with(&mut rng, &lo, &hi);
            assert!(v.iter().all(|c| c.is_finite()));

            let swapped = V3::random_in_range_with(&mut rng, &hi, &lo);
            assert!(swapped.iter().all(|c| c.is_finite()));
        }
    }

    #[test]
    fn test_random_in_range_thread_rng() {
        let lo = Vector::<i32, 2>::from_array([0, 5]);
        let hi = Vector::<i32, 2>::from_array([3, 5]);
        let v = random_in_range(&lo, &hi);
        assert!((0..=3).contains(&v[0]));
        assert_eq!(v[1], 5);
    }

    #[test]
    fn test_sum_of_vectors() {
        let points = [
            V3::from_array([1.0, 0.0, 0.0]),
            V3::from_array([0.0, 2.0, 0.0]),
            V3::from_array([0.0, 0.0, 3.0]),
        ];
        let total: V3 = points.iter().copied().sum();
        assert_eq!(total.to_array(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_iteration_and_conversion() {
        let v = Vector::<u8, 3>::from([1, 2, 3]);
        let doubled: Vec<u8> = v.into_iter().map(|c| c * 2).collect();
        assert_eq!(doubled, vec![2, 4, 6]);
        assert_eq!((&v).into_iter().count(), 3);
        let raw: [u8; 3] = v.into();
        assert_eq!(raw, [1, 2, 3]);
    }

    #[test]
    fn test_display() {
        let v = Vector::<i32, 3>::from_array([1, -2, 3]);
        assert_eq!(v.to_string(), "(1, -2, 3)");
    }

    #[test]
    fn test_layout_is_padded() {
        assert_eq!(std::mem::size_of::<V3>(), 16);
        assert_eq!(std::mem::align_of::<V3>(), 16);
        assert_eq!(std::mem::size_of::<Vector<u8, 2>>(), 16);
        assert_eq!(std::mem::size_of::<Vector<f64, 3>>(), 32);
    }
}
