//! Named-axis constructors, accessors and swizzles for 1 to 4 dimensions.
//!
//! Each accessor only exists on the dimensions that have that axis, so
//! calling `z()` on a two-component vector is a compile error.

use super::scalar::{self, Scalar};
use super::vector::Vector;

macro_rules! axis_accessors {
    ($($axis:ident, $axis_mut:ident, $set:ident => $i:literal);+ $(;)?) => {
        $(
            #[inline]
            #[must_use]
            pub fn $axis(&self) -> T {
                self[$i]
            }

            #[inline]
            pub fn $axis_mut(&mut self) -> &mut T {
                &mut self[$i]
            }

            #[inline]
            pub fn $set(&mut self, value: T) {
                self[$i] = value;
            }
        )+
    };
}

impl<T: Scalar> Vector<T, 1> {
    #[inline]
    #[must_use]
    pub const fn new(x: T) -> Self {
        Self::from_array([x])
    }

    axis_accessors!(x, x_mut, set_x => 0);
}

impl<T: Scalar> Vector<T, 2> {
    #[inline]
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self::from_array([x, y])
    }

    axis_accessors!(
        x, x_mut, set_x => 0;
        y, y_mut, set_y => 1;
    );

    /// Appends `z` to make a three-component vector.
    #[inline]
    #[must_use]
    pub fn extend(self, z: T) -> Vector<T, 3> {
        Vector::<T, 3>::from_xy(self, z)
    }
}

impl<T: Scalar> Vector<T, 3> {
    #[inline]
    #[must_use]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self::from_array([x, y, z])
    }

    #[inline]
    #[must_use]
    pub fn from_xy(xy: Vector<T, 2>, z: T) -> Self {
        Self::new(xy.x(), xy.y(), z)
    }

    axis_accessors!(
        x, x_mut, set_x => 0;
        y, y_mut, set_y => 1;
        z, z_mut, set_z => 2;
    );

    #[inline]
    #[must_use]
    pub fn xy(&self) -> Vector<T, 2> {
        Vector::<T, 2>::new(self.x(), self.y())
    }

    /// Drops `z`, the inverse of `Vector::<T, 2>::extend`.
    #[inline]
    #[must_use]
    pub fn truncate(self) -> Vector<T, 2> {
        self.xy()
    }

    /// Appends `w` to make a four-component vector.
    #[inline]
    #[must_use]
    pub fn extend(self, w: T) -> Vector<T, 4> {
        Vector::<T, 4>::from_xyz(self, w)
    }

    /// Right-handed cross product.
    #[inline]
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        let (a, b) = (self, other);
        Self::new(
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        )
    }
}

impl<T: Scalar> Vector<T, 4> {
    #[inline]
    #[must_use]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self::from_array([x, y, z, w])
    }

    #[inline]
    #[must_use]
    pub fn from_xyz(xyz: Vector<T, 3>, w: T) -> Self {
        Self::new(xyz.x(), xyz.y(), xyz.z(), w)
    }

    #[inline]
    #[must_use]
    pub fn from_xy_zw(xy: Vector<T, 2>, zw: Vector<T, 2>) -> Self {
        Self::new(xy.x(), xy.y(), zw.x(), zw.y())
    }

    axis_accessors!(
        x, x_mut, set_x => 0;
        y, y_mut, set_y => 1;
        z, z_mut, set_z => 2;
        w, w_mut, set_w => 3;
    );

    #[inline]
    #[must_use]
    pub fn xy(&self) -> Vector<T, 2> {
        Vector::<T, 2>::new(self.x(), self.y())
    }

    #[inline]
    #[must_use]
    pub fn xyz(&self) -> Vector<T, 3> {
        Vector::<T, 3>::new(self.x(), self.y(), self.z())
    }

    #[inline]
    #[must_use]
    pub fn zw(&self) -> Vector<T, 2> {
        Vector::<T, 2>::new(self.z(), self.w())
    }

    /// Drops `w`, the inverse of `Vector::<T, 3>::extend`.
    #[inline]
    #[must_use]
    pub fn truncate(self) -> Vector<T, 3> {
        self.xyz()
    }
}

impl<T: Scalar> From<(Vector<T, 2>, T)> for Vector<T, 3> {
    fn from((xy, z): (Vector<T, 2>, T)) -> Self {
        Self::from_xy(xy, z)
    }
}

impl<T: Scalar> From<(Vector<T, 3>, T)> for Vector<T, 4> {
    fn from((xyz, w): (Vector<T, 3>, T)) -> Self {
        Self::from_xyz(xyz, w)
    }
}

impl<T: Scalar> From<(Vector<T, 2>, Vector<T, 2>)> for Vector<T, 4> {
    fn from((xy, zw): (Vector<T, 2>, Vector<T, 2>)) -> Self {
        Self::from_xy_zw(xy, zw)
    }
}

#[inline]
#[must_use]
pub fn cross_product<T: Scalar>(v1: &Vector<T, 3>, v2: &Vector<T, 3>) -> Vector<T, 3> {
    v1.cross(v2)
}

/// Tests whether `val` lies in the rectangle `[start, end)` on both axes.
/// The lower bound is inclusive, the upper bound exclusive.
#[must_use]
pub fn in_range_2d<T: Scalar>(
    val: &Vector<T, 2>,
    range_start: &Vector<T, 2>,
    range_end: &Vector<T, 2>,
) -> bool {
    scalar::in_range(val.x(), range_start.x(), range_end.x())
        && scalar::in_range(val.y(), range_start.y(), range_end.y())
}
