//! Reinterpretation of floating-point bit patterns as integers and back.
//!
//! These conversions reinterpret the bits of each component and perform no
//! numeric conversion, so for example `1.0_f32` becomes `0x3f80_0000`.

use crate::vector::Vector;

macro_rules! impl_bit_casts {
    ($float:ty, $int:ty, $uint:ty) => {
        impl<const N: usize> Vector<$float, N> {
            /// Reinterprets the bits of each component as a signed integer.
            #[inline]
            pub fn float_bits_to_int(&self) -> Vector<$int, N> {
                self.mapped(bytemuck::cast)
            }

            /// Reinterprets the bits of each component as an unsigned integer.
            #[inline]
            pub fn float_bits_to_uint(&self) -> Vector<$uint, N> {
                self.mapped(bytemuck::cast)
            }
        }

        impl<const N: usize> Vector<$int, N> {
            /// Reinterprets the bits of each component as a floating-point
            /// number.
            #[inline]
            pub fn int_bits_to_float(&self) -> Vector<$float, N> {
                self.mapped(bytemuck::cast)
            }
        }

        impl<const N: usize> Vector<$uint, N> {
            /// Reinterprets the bits of each component as a floating-point
            /// number.
            #[inline]
            pub fn uint_bits_to_float(&self) -> Vector<$float, N> {
                self.mapped(bytemuck::cast)
            }
        }
    };
}

impl_bit_casts!(f32, i32, u32);
impl_bit_casts!(f64, i64, u64);

#[cfg(test)]
mod tests {
    use crate::vector::*;

    #[test]
    fn float_bits_are_reinterpreted_without_conversion() {
        let v = Float3::new(1.0, -2.0, 0.0);
        assert_eq!(
            v.float_bits_to_uint(),
            UInt3::new(0x3f80_0000, 0xc000_0000, 0)
        );
        assert_eq!(
            v.float_bits_to_int(),
            Int3::new(0x3f80_0000, 0xc000_0000_u32 as i32, 0)
        );
    }

    #[test]
    fn double_bits_are_reinterpreted_without_conversion() {
        let v = Double2::new(1.0, -0.0);
        assert_eq!(
            v.float_bits_to_uint(),
            Vector2::<u64>::new(0x3ff0_0000_0000_0000, 0x8000_0000_0000_0000)
        );
        assert_eq!(v.float_bits_to_int().y(), i64::MIN);
    }

    #[test]
    fn integer_bits_are_reinterpreted_as_floats() {
        assert_eq!(
            UInt2::new(0x4000_0000, 0x7f80_0000).uint_bits_to_float(),
            Float2::new(2.0, f32::INFINITY)
        );
        assert_eq!(
            Int2::new(0x3f00_0000, 0).int_bits_to_float(),
            Float2::new(0.5, 0.0)
        );
    }

    #[test]
    fn reinterpreting_back_and_forth_preserves_nan_payload() {
        let bits = UInt2::new(0x7fc0_1234, 0xffc0_0001);
        let floats = bits.uint_bits_to_float();
        assert!(floats.x().is_nan());
        assert_eq!(floats.float_bits_to_uint(), bits);
    }
}
