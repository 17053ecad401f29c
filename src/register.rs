// src/register.rs

//! Register storage shared by every backend.
//!
//! Each register is a plain block of bytes with the alignment of the hardware
//! register it stands in for. Typed lane views are bit casts of that block
//! (via `bytemuck`), so writing through one view and reading through another
//! never converts a value. Lane `i` of width `w` lives at byte offset
//! `i * w / 8`, in host byte order.

use bytemuck::{Pod, Zeroable};
use core::fmt;
use core::mem::{align_of, size_of};

const _: () = assert!(size_of::<f32>() == 4 && size_of::<f64>() == 8);

/// 128-bit integer register (`__m128i`).
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C, align(16))]
pub struct M128i([u8; 16]);

/// 128-bit register holding two `f64` lanes (`__m128d`).
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C, align(16))]
pub struct M128d([u8; 16]);

/// 128-bit register holding four `f32` lanes (`__m128`).
///
/// Only used as a source or destination of conversions and casts.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C, align(16))]
pub struct M128([u8; 16]);

/// 64-bit vector register (`__m64`).
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C, align(8))]
pub struct M64([u8; 8]);

const _: () = {
    assert!(size_of::<M128i>() == 16 && align_of::<M128i>() == 16);
    assert!(size_of::<M128d>() == 16 && align_of::<M128d>() == 16);
    assert!(size_of::<M128>() == 16 && align_of::<M128>() == 16);
    assert!(size_of::<M64>() == 8 && align_of::<M64>() == 8);
};

/// Memory wrapper guaranteeing 16-byte alignment.
///
/// Aligned loads and stores take their memory operand through this type, so
/// the alignment precondition of the hardware instruction is carried by the
/// type system instead of being checked at run time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C, align(16))]
pub struct Align16<T>(pub T);

macro_rules! lane_views {
    ($reg:ident, $bytes:literal: $($ty:ident => $as_ref:ident, $as_mut:ident, $from:ident;)*) => {
        impl $reg {
            /// All-zero register.
            pub const ZERO: Self = Self([0; $bytes]);

            /// Raw bytes in memory order.
            #[inline(always)]
            pub const fn to_bytes(self) -> [u8; $bytes] {
                self.0
            }

            /// Build from raw bytes in memory order.
            #[inline(always)]
            pub const fn from_bytes(bytes: [u8; $bytes]) -> Self {
                Self(bytes)
            }

            $(
                #[inline(always)]
                pub fn $as_ref(&self) -> &[$ty; $bytes / size_of::<$ty>()] {
                    bytemuck::cast_ref(self)
                }

                #[inline(always)]
                pub fn $as_mut(&mut self) -> &mut [$ty; $bytes / size_of::<$ty>()] {
                    bytemuck::cast_mut(self)
                }

                #[inline(always)]
                pub fn $from(lanes: [$ty; $bytes / size_of::<$ty>()]) -> Self {
                    bytemuck::cast(lanes)
                }
            )*
        }
    };
}

lane_views!(M128i, 16:
    i8 => as_i8, as_i8_mut, from_i8;
    i16 => as_i16, as_i16_mut, from_i16;
    i32 => as_i32, as_i32_mut, from_i32;
    i64 => as_i64, as_i64_mut, from_i64;
    i128 => as_i128, as_i128_mut, from_i128;
    u8 => as_u8, as_u8_mut, from_u8;
    u16 => as_u16, as_u16_mut, from_u16;
    u32 => as_u32, as_u32_mut, from_u32;
    u64 => as_u64, as_u64_mut, from_u64;
    u128 => as_u128, as_u128_mut, from_u128;
    f32 => as_f32, as_f32_mut, from_f32;
    f64 => as_f64, as_f64_mut, from_f64;
);

lane_views!(M128d, 16:
    i8 => as_i8, as_i8_mut, from_i8;
    i16 => as_i16, as_i16_mut, from_i16;
    i32 => as_i32, as_i32_mut, from_i32;
    i64 => as_i64, as_i64_mut, from_i64;
    u8 => as_u8, as_u8_mut, from_u8;
    u16 => as_u16, as_u16_mut, from_u16;
    u32 => as_u32, as_u32_mut, from_u32;
    u64 => as_u64, as_u64_mut, from_u64;
    f32 => as_f32, as_f32_mut, from_f32;
    f64 => as_f64, as_f64_mut, from_f64;
);

lane_views!(M128, 16:
    i8 => as_i8, as_i8_mut, from_i8;
    i16 => as_i16, as_i16_mut, from_i16;
    i32 => as_i32, as_i32_mut, from_i32;
    i64 => as_i64, as_i64_mut, from_i64;
    u8 => as_u8, as_u8_mut, from_u8;
    u16 => as_u16, as_u16_mut, from_u16;
    u32 => as_u32, as_u32_mut, from_u32;
    u64 => as_u64, as_u64_mut, from_u64;
    f32 => as_f32, as_f32_mut, from_f32;
    f64 => as_f64, as_f64_mut, from_f64;
);

lane_views!(M64, 8:
    i8 => as_i8, as_i8_mut, from_i8;
    i16 => as_i16, as_i16_mut, from_i16;
    i32 => as_i32, as_i32_mut, from_i32;
    i64 => as_i64, as_i64_mut, from_i64;
    u8 => as_u8, as_u8_mut, from_u8;
    u16 => as_u16, as_u16_mut, from_u16;
    u32 => as_u32, as_u32_mut, from_u32;
    u64 => as_u64, as_u64_mut, from_u64;
    f32 => as_f32, as_f32_mut, from_f32;
    f64 => as_f64, as_f64_mut, from_f64;
);

macro_rules! debug_as {
    ($($reg:ident => $view:ident),*) => {
        $(
            impl fmt::Debug for $reg {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.debug_tuple(stringify!($reg)).field(self.$view()).finish()
                }
            }
        )*
    };
}

debug_as!(M128i => as_u8, M128d => as_f64, M128 => as_f32, M64 => as_u8);

// --- Native register aliases ---
//
// Conversions are bit casts. The assertions below make a layout mismatch a
// compile error on the targets where the alias exists.

macro_rules! native_alias {
    ($($reg:ident <=> $native:ty),* $(,)?) => {
        $(
            const _: () = {
                assert!(size_of::<$native>() == size_of::<$reg>());
                assert!(align_of::<$native>() <= align_of::<$reg>());
            };

            impl From<$native> for $reg {
                #[inline(always)]
                fn from(v: $native) -> Self {
                    // SAFETY: both types are 16 bytes of plain data; sizes are asserted above.
                    unsafe { core::mem::transmute::<$native, $reg>(v) }
                }
            }

            impl From<$reg> for $native {
                #[inline(always)]
                fn from(v: $reg) -> Self {
                    // SAFETY: see above.
                    unsafe { core::mem::transmute::<$reg, $native>(v) }
                }
            }
        )*
    };
}

#[cfg(target_arch = "x86")]
mod x86_alias {
    use super::*;
    use core::arch::x86::{__m128, __m128d, __m128i};
    native_alias!(M128i <=> __m128i, M128d <=> __m128d, M128 <=> __m128);
}

#[cfg(target_arch = "x86_64")]
mod x86_alias {
    use super::*;
    use core::arch::x86_64::{__m128, __m128d, __m128i};
    native_alias!(M128i <=> __m128i, M128d <=> __m128d, M128 <=> __m128);
}

#[cfg(target_arch = "aarch64")]
mod neon_alias {
    use super::*;
    use core::arch::aarch64::*;
    native_alias!(
        M128i <=> int8x16_t,
        M128i <=> uint8x16_t,
        M128i <=> int16x8_t,
        M128i <=> uint16x8_t,
        M128i <=> int32x4_t,
        M128i <=> uint32x4_t,
        M128i <=> int64x2_t,
        M128i <=> uint64x2_t,
        M128d <=> float64x2_t,
        M128d <=> uint64x2_t,
        M128 <=> float32x4_t,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn views_alias_the_same_bytes() {
        let mut r = M128i::from_u32([0x0403_0201, 0x0807_0605, 0x0c0b_0a09, 0x100f_0e0d]);
        let before = r;

        r.as_u8_mut()[5] = 0xaa;

        let bytes = r.to_bytes();
        let lane1 = u32::from_ne_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        assert_eq!(r.as_u32()[1], lane1);
        assert_eq!(bytes[5], 0xaa);
        for i in [0usize, 2, 3] {
            assert_eq!(r.as_u32()[i], before.as_u32()[i]);
        }
        if cfg!(target_endian = "little") {
            assert_eq!(r.as_u32()[1], 0x0807_aa05);
        }
    }

    #[test]
    fn float_view_does_not_convert() {
        let r = M128d::from_f64([1.0, -0.0]);
        assert_eq!(r.as_u64()[0], 1.0f64.to_bits());
        assert_eq!(r.as_u64()[1], 0x8000_0000_0000_0000);
    }

    #[test]
    fn equality_is_bitwise() {
        let nan = M128d::from_f64([f64::NAN, 0.0]);
        assert_eq!(nan, nan);
        assert_ne!(M128d::from_f64([0.0, 0.0]), M128d::from_f64([-0.0, 0.0]));
    }

    #[test]
    fn aligned_wrapper_is_aligned() {
        assert_eq!(align_of::<Align16<[f64; 2]>>(), 16);
        assert_eq!(align_of::<Align16<[u8; 16]>>(), 16);
    }
}
