//! Fixed-size vectors with 2, 3 or 4 components of a floating-point, integer
//! or boolean kind, supporting component access by name, index and swizzle
//! pattern together with a shading-language style catalogue of geometric and
//! component-wise functions.

#[macro_use]
mod macros;

mod bits;
mod componentwise;
mod geometry;
mod motion;
mod ops;
mod relational;

pub mod error;
pub mod format;
pub mod num;
pub mod swizzle;
pub mod vector;

#[cfg(feature = "serde")]
mod serialization;

pub use error::{ParseVectorError, SwizzleError, VectorError};
pub use num::{Float, Integer, Number, Scalar, SignedNumber};
pub use swizzle::{BLANK, Slot, Swizzle};
pub use vector::{
    Bool2, Bool3, Bool4, Double2, Double3, Double4, Float2, Float3, Float4, Int2, Int3, Int4,
    UInt2, UInt3, UInt4, Vector, Vector2, Vector3, Vector4,
};
