//! Tightly packed vectors for vertex and uniform buffers.
//!
//! [`Vector`] is 16-byte aligned and may carry padding. [`PackedVector`] is a
//! plain `[T; D]` with no padding, so slices of it can be handed to the GPU
//! as raw bytes.
//!
//! ```
//! use engine_math::math::{PackedVector, Vec3};
//!
//! let packed = PackedVector::from(Vec3::new(3.0, 2.0, 1.0));
//! assert_eq!(packed.as_bytes().len(), 12);
//! assert_eq!(packed.unpack(), Vec3::new(3.0, 2.0, 1.0));
//! ```

use super::scalar::Scalar;
use super::vector::Vector;
use crate::error::VectorError;
use bytemuck::{Pod, Zeroable};
use static_assertions::{assert_eq_size, const_assert_eq};
use std::mem::{align_of, size_of};

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackedVector<T, const D: usize> {
    pub data: [T; D],
}

// SAFETY: `PackedVector` is `repr(transparent)` over `[T; D]`, which has no
// padding and is valid for every bit pattern whenever `T` is.
unsafe impl<T: Zeroable, const D: usize> Zeroable for PackedVector<T, D> {}
unsafe impl<T: Pod, const D: usize> Pod for PackedVector<T, D> {}

assert_eq_size!(PackedVector<f32, 3>, [f32; 3]);
assert_eq_size!(PackedVector<u8, 2>, [u8; 2]);
assert_eq_size!(Vector<f32, 3>, [f32; 4]);
const_assert_eq!(align_of::<PackedVector<f32, 4>>(), align_of::<f32>());
const_assert_eq!(align_of::<Vector<f32, 4>>(), 16);

impl<T: Scalar, const D: usize> PackedVector<T, D> {
    #[inline]
    #[must_use]
    pub const fn new(data: [T; D]) -> Self {
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn unpack(&self) -> Vector<T, D> {
        Vector::from_array(self.data)
    }

    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Reads a packed vector from exactly `size_of::<Self>()` bytes. The
    /// bytes need not be aligned.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::ByteLength`] if `bytes` has the wrong length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, VectorError> {
        let expected = size_of::<Self>();
        if bytes.len() != expected {
            log::debug!(
                "Rejecting {} bytes for a packed vector of {} bytes",
                bytes.len(),
                expected
            );
            return Err(VectorError::ByteLength {
                expected,
                actual: bytes.len(),
            });
        }
        Ok(bytemuck::pod_read_unaligned(bytes))
    }
}

impl<T: Scalar, const D: usize> Vector<T, D> {
    /// Copies every component into `dest`, index for index.
    #[inline]
    pub fn pack_into(&self, dest: &mut PackedVector<T, D>) {
        dest.data = self.to_array();
    }

    #[inline]
    #[must_use]
    pub fn pack(&self) -> PackedVector<T, D> {
        PackedVector::new(self.to_array())
    }
}

impl<T: Scalar, const D: usize> From<Vector<T, D>> for PackedVector<T, D> {
    fn from(v: Vector<T, D>) -> Self {
        v.pack()
    }
}

impl<T: Scalar, const D: usize> From<PackedVector<T, D>> for Vector<T, D> {
    fn from(p: PackedVector<T, D>) -> Self {
        p.unpack()
    }
}

impl<T: Scalar, const D: usize> Default for PackedVector<T, D> {
    fn default() -> Self {
        Self::new([T::zero(); D])
    }
}

/// Packs a run of vectors into a flat buffer layout.
#[must_use]
pub fn pack_slice<T: Scalar, const D: usize>(vectors: &[Vector<T, D>]) -> Vec<PackedVector<T, D>> {
    let packed: Vec<_> = vectors.iter().map(Vector::pack).collect();
    log::trace!(
        "Packed {} vectors into {} bytes",
        packed.len(),
        size_of::<PackedVector<T, D>>() * packed.len()
    );
    packed
}

#[must_use]
pub fn unpack_slice<T: Scalar, const D: usize>(packed: &[PackedVector<T, D>]) -> Vec<Vector<T, D>> {
    packed.iter().map(PackedVector::unpack).collect()
}

/// Views packed vectors as raw bytes, ready for a buffer upload.
#[must_use]
pub fn packed_slice_as_bytes<T: Scalar, const D: usize>(packed: &[PackedVector<T, D>]) -> &[u8] {
    bytemuck::cast_slice(packed)
}
