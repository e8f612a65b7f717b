mod fixed;
mod packed;
pub mod scalar;
mod vector;

pub use fixed::{cross_product, in_range_2d};
pub use packed::{pack_slice, packed_slice_as_bytes, unpack_slice, PackedVector};
pub use scalar::{Real, Scalar};
pub use vector::{dot_product, hadamard_product, lerp, max, min, random_in_range, Vector};

pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;
pub type Vector4<T> = Vector<T, 4>;

pub type Vec2 = Vector2<f32>;
pub type Vec3 = Vector3<f32>;
pub type Vec4 = Vector4<f32>;

pub type DVec2 = Vector2<f64>;
pub type DVec3 = Vector3<f64>;
pub type DVec4 = Vector4<f64>;

pub type IVec2 = Vector2<i32>;
pub type IVec3 = Vector3<i32>;
pub type IVec4 = Vector4<i32>;

pub type UVec2 = Vector2<u32>;
pub type UVec3 = Vector3<u32>;
pub type UVec4 = Vector4<u32>;

pub type PackedVec2 = PackedVector<f32, 2>;
pub type PackedVec3 = PackedVector<f32, 3>;
pub type PackedVec4 = PackedVector<f32, 4>;
