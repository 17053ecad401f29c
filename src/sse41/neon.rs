// src/sse41/neon.rs

//! SSE4.1 bodies on AArch64 NEON.

#![allow(unused_unsafe)]

use core::arch::aarch64::*;

pub use super::fallback::*;

use crate::register::{M128d, M128i};

macro_rules! neon {
    ($($name:ident($($arg:ident: $ty:ty as $nt:ty),*) -> $ret:ty = $intr:ident;)*) => {
        $(
            #[inline(always)]
            pub fn $name($($arg: $ty),*) -> $ret {
                // SAFETY: NEON is enabled whenever this module is selected.
                unsafe { <$ret>::from($intr($(<$nt>::from($arg)),*)) }
            }
        )*
    };
}

neon! {
    min_epi8(a: M128i as int8x16_t, b: M128i as int8x16_t) -> M128i = vminq_s8;
    max_epi8(a: M128i as int8x16_t, b: M128i as int8x16_t) -> M128i = vmaxq_s8;
    min_epi32(a: M128i as int32x4_t, b: M128i as int32x4_t) -> M128i = vminq_s32;
    max_epi32(a: M128i as int32x4_t, b: M128i as int32x4_t) -> M128i = vmaxq_s32;
    min_epu16(a: M128i as uint16x8_t, b: M128i as uint16x8_t) -> M128i = vminq_u16;
    max_epu16(a: M128i as uint16x8_t, b: M128i as uint16x8_t) -> M128i = vmaxq_u16;
    min_epu32(a: M128i as uint32x4_t, b: M128i as uint32x4_t) -> M128i = vminq_u32;
    max_epu32(a: M128i as uint32x4_t, b: M128i as uint32x4_t) -> M128i = vmaxq_u32;
    mullo_epi32(a: M128i as int32x4_t, b: M128i as int32x4_t) -> M128i = vmulq_s32;
    cmpeq_epi64(a: M128i as int64x2_t, b: M128i as int64x2_t) -> M128i = vceqq_s64;

    floor_pd(a: M128d as float64x2_t) -> M128d = vrndmq_f64;
    ceil_pd(a: M128d as float64x2_t) -> M128d = vrndpq_f64;
}

#[inline(always)]
pub fn blendv_epi8(a: M128i, b: M128i, mask: M128i) -> M128i {
    // SAFETY: NEON is enabled whenever this module is selected.
    unsafe {
        let select = vcltzq_s8(mask.into());
        M128i::from(vbslq_u8(select, b.into(), a.into()))
    }
}

/// Narrowing each 64-bit lane keeps 32-bit lanes 0 and 2.
#[inline(always)]
pub fn mul_epi32(a: M128i, b: M128i) -> M128i {
    // SAFETY: NEON is enabled whenever this module is selected.
    unsafe {
        let a = vmovn_s64(a.into());
        let b = vmovn_s64(b.into());
        M128i::from(vmull_s32(a, b))
    }
}

#[inline(always)]
pub fn packus_epi32(a: M128i, b: M128i) -> M128i {
    // SAFETY: NEON is enabled whenever this module is selected.
    unsafe {
        let lo = vqmovun_s32(a.into());
        let hi = vqmovun_s32(b.into());
        M128i::from(vcombine_u16(lo, hi))
    }
}

// --- Widening conversions ---

macro_rules! widen {
    ($($name:ident: $nt:ty, $low:ident, $movl:ident;)*) => {
        $(
            #[inline(always)]
            pub fn $name(a: M128i) -> M128i {
                // SAFETY: NEON is enabled whenever this module is selected.
                unsafe { M128i::from($movl($low(<$nt>::from(a)))) }
            }
        )*
    };
}

widen! {
    cvtepi8_epi16: int8x16_t, vget_low_s8, vmovl_s8;
    cvtepi16_epi32: int16x8_t, vget_low_s16, vmovl_s16;
    cvtepi32_epi64: int32x4_t, vget_low_s32, vmovl_s32;
    cvtepu8_epi16: uint8x16_t, vget_low_u8, vmovl_u8;
    cvtepu16_epi32: uint16x8_t, vget_low_u16, vmovl_u16;
    cvtepu32_epi64: uint32x4_t, vget_low_u32, vmovl_u32;
}
