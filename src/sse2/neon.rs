// src/sse2/neon.rs

//! SSE2 bodies on AArch64 NEON.
//!
//! Only operations whose NEON form gives the same bits as the x86
//! instruction are defined here; the rest are the fallback bodies
//! re-exported below.
//!
//! One exception: a NaN produced by an invalid double operation (`0/0`,
//! `sqrt(-1)`, `inf - inf`) is the host's default NaN, `0x7ff8...` on
//! AArch64 where x86 gives `0xfff8...`. The fallback bodies behave the same
//! way on AArch64. NaN inputs propagate unchanged on both.

#![allow(unused_unsafe)]

use core::arch::aarch64::*;

pub use super::fallback::*;

use crate::immediate::check_imm;
use crate::numeric::clamp_count;
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

// --- Integer arithmetic ---

neon! {
    add_epi8(a: M128i as int8x16_t, b: M128i as int8x16_t) -> M128i = vaddq_s8;
    add_epi16(a: M128i as int16x8_t, b: M128i as int16x8_t) -> M128i = vaddq_s16;
    add_epi32(a: M128i as int32x4_t, b: M128i as int32x4_t) -> M128i = vaddq_s32;
    add_epi64(a: M128i as int64x2_t, b: M128i as int64x2_t) -> M128i = vaddq_s64;
    sub_epi8(a: M128i as int8x16_t, b: M128i as int8x16_t) -> M128i = vsubq_s8;
    sub_epi16(a: M128i as int16x8_t, b: M128i as int16x8_t) -> M128i = vsubq_s16;
    sub_epi32(a: M128i as int32x4_t, b: M128i as int32x4_t) -> M128i = vsubq_s32;
    sub_epi64(a: M128i as int64x2_t, b: M128i as int64x2_t) -> M128i = vsubq_s64;

    adds_epi8(a: M128i as int8x16_t, b: M128i as int8x16_t) -> M128i = vqaddq_s8;
    adds_epi16(a: M128i as int16x8_t, b: M128i as int16x8_t) -> M128i = vqaddq_s16;
    adds_epu8(a: M128i as uint8x16_t, b: M128i as uint8x16_t) -> M128i = vqaddq_u8;
    adds_epu16(a: M128i as uint16x8_t, b: M128i as uint16x8_t) -> M128i = vqaddq_u16;
    subs_epi8(a: M128i as int8x16_t, b: M128i as int8x16_t) -> M128i = vqsubq_s8;
    subs_epi16(a: M128i as int16x8_t, b: M128i as int16x8_t) -> M128i = vqsubq_s16;
    subs_epu8(a: M128i as uint8x16_t, b: M128i as uint8x16_t) -> M128i = vqsubq_u8;
    subs_epu16(a: M128i as uint16x8_t, b: M128i as uint16x8_t) -> M128i = vqsubq_u16;

    // Rounding halving add is exactly (a + b + 1) >> 1.
    avg_epu8(a: M128i as uint8x16_t, b: M128i as uint8x16_t) -> M128i = vrhaddq_u8;
    avg_epu16(a: M128i as uint16x8_t, b: M128i as uint16x8_t) -> M128i = vrhaddq_u16;

    mullo_epi16(a: M128i as int16x8_t, b: M128i as int16x8_t) -> M128i = vmulq_s16;
    min_epi16(a: M128i as int16x8_t, b: M128i as int16x8_t) -> M128i = vminq_s16;
    max_epi16(a: M128i as int16x8_t, b: M128i as int16x8_t) -> M128i = vmaxq_s16;
    min_epu8(a: M128i as uint8x16_t, b: M128i as uint8x16_t) -> M128i = vminq_u8;
    max_epu8(a: M128i as uint8x16_t, b: M128i as uint8x16_t) -> M128i = vmaxq_u8;
}

// --- Logical ---

neon! {
    and_si128(a: M128i as int32x4_t, b: M128i as int32x4_t) -> M128i = vandq_s32;
    or_si128(a: M128i as int32x4_t, b: M128i as int32x4_t) -> M128i = vorrq_s32;
    xor_si128(a: M128i as int32x4_t, b: M128i as int32x4_t) -> M128i = veorq_s32;
}

/// `!a & b`; NEON's bic computes `x & !y`, so the operands swap.
#[inline(always)]
pub fn andnot_si128(a: M128i, b: M128i) -> M128i {
    // SAFETY: NEON is enabled whenever this module is selected.
    unsafe { M128i::from(vbicq_s32(b.into(), a.into())) }
}

// --- Compares ---

neon! {
    cmpeq_epi8(a: M128i as int8x16_t, b: M128i as int8x16_t) -> M128i = vceqq_s8;
    cmpeq_epi16(a: M128i as int16x8_t, b: M128i as int16x8_t) -> M128i = vceqq_s16;
    cmpeq_epi32(a: M128i as int32x4_t, b: M128i as int32x4_t) -> M128i = vceqq_s32;
    cmplt_epi8(a: M128i as int8x16_t, b: M128i as int8x16_t) -> M128i = vcltq_s8;
    cmplt_epi16(a: M128i as int16x8_t, b: M128i as int16x8_t) -> M128i = vcltq_s16;
    cmplt_epi32(a: M128i as int32x4_t, b: M128i as int32x4_t) -> M128i = vcltq_s32;
    cmpgt_epi8(a: M128i as int8x16_t, b: M128i as int8x16_t) -> M128i = vcgtq_s8;
    cmpgt_epi16(a: M128i as int16x8_t, b: M128i as int16x8_t) -> M128i = vcgtq_s16;
    cmpgt_epi32(a: M128i as int32x4_t, b: M128i as int32x4_t) -> M128i = vcgtq_s32;
}

// --- Double precision ---
//
// Identical rounding for every finite and infinite result. Generated NaNs
// carry the AArch64 default payload (see the module docs). min/max stay on
// the fallback: NEON's fmin/fmax treat NaN and signed zero differently.

neon! {
    add_pd(a: M128d as float64x2_t, b: M128d as float64x2_t) -> M128d = vaddq_f64;
    sub_pd(a: M128d as float64x2_t, b: M128d as float64x2_t) -> M128d = vsubq_f64;
    mul_pd(a: M128d as float64x2_t, b: M128d as float64x2_t) -> M128d = vmulq_f64;
    div_pd(a: M128d as float64x2_t, b: M128d as float64x2_t) -> M128d = vdivq_f64;
    sqrt_pd(a: M128d as float64x2_t) -> M128d = vsqrtq_f64;
}

// --- Broadcast ---

neon! {
    set1_epi8(a: i8 as i8) -> M128i = vdupq_n_s8;
    set1_epi16(a: i16 as i16) -> M128i = vdupq_n_s16;
    set1_epi32(a: i32 as i32) -> M128i = vdupq_n_s32;
    set1_epi64x(a: i64 as i64) -> M128i = vdupq_n_s64;
}

#[inline(always)]
pub fn setzero_si128() -> M128i {
    // SAFETY: NEON is enabled whenever this module is selected.
    unsafe { M128i::from(vdupq_n_s32(0)) }
}

// --- Element shifts ---
//
// NEON shifts by a signed per-lane count; negative counts shift right and
// any magnitude of at least the lane width clears the lane. Counts are
// clamped first so that large x86 counts cannot wrap into small ones.

#[inline(always)]
fn runtime_count(count: i32) -> u64 {
    u64::try_from(count).unwrap_or(u64::MAX)
}

macro_rules! neon_shifts {
    ($(
        $width:literal, $ut:ty, $st:ty, $dup:ident, $ushl:ident, $sc:ty:
        $sll:ident, $srl:ident, $slli:ident, $srli:ident, $slli_dyn:ident, $srli_dyn:ident;
    )*) => {
        $(
            #[inline(always)]
            pub fn $sll(a: M128i, count: M128i) -> M128i {
                let n = clamp_count(count.as_u64()[0], $width) as $sc;
                // SAFETY: NEON is enabled whenever this module is selected.
                unsafe { M128i::from($ushl(<$ut>::from(a), $dup(n))) }
            }

            #[inline(always)]
            pub fn $srl(a: M128i, count: M128i) -> M128i {
                let n = clamp_count(count.as_u64()[0], $width) as $sc;
                // SAFETY: see above.
                unsafe { M128i::from($ushl(<$ut>::from(a), $dup(-n))) }
            }

            #[inline(always)]
            pub fn $slli<const IMM8: i32>(a: M128i) -> M128i {
                check_imm!(IMM8, 8);
                $slli_dyn(a, IMM8)
            }

            #[inline(always)]
            pub fn $srli<const IMM8: i32>(a: M128i) -> M128i {
                check_imm!(IMM8, 8);
                $srli_dyn(a, IMM8)
            }

            #[inline(always)]
            pub fn $slli_dyn(a: M128i, count: i32) -> M128i {
                $sll(a, M128i::from_u64([runtime_count(count), 0]))
            }

            #[inline(always)]
            pub fn $srli_dyn(a: M128i, count: i32) -> M128i {
                $srl(a, M128i::from_u64([runtime_count(count), 0]))
            }
        )*
    };
}

neon_shifts! {
    16, uint16x8_t, int16x8_t, vdupq_n_s16, vshlq_u16, i16:
        sll_epi16, srl_epi16, slli_epi16, srli_epi16, slli_epi16_dyn, srli_epi16_dyn;
    32, uint32x4_t, int32x4_t, vdupq_n_s32, vshlq_u32, i32:
        sll_epi32, srl_epi32, slli_epi32, srli_epi32, slli_epi32_dyn, srli_epi32_dyn;
    64, uint64x2_t, int64x2_t, vdupq_n_s64, vshlq_u64, i64:
        sll_epi64, srl_epi64, slli_epi64, srli_epi64, slli_epi64_dyn, srli_epi64_dyn;
}

macro_rules! neon_arithmetic_shifts {
    ($(
        $width:literal, $st:ty, $dup:ident, $sshl:ident, $sc:ty:
        $sra:ident, $srai:ident, $srai_dyn:ident;
    )*) => {
        $(
            #[inline(always)]
            pub fn $sra(a: M128i, count: M128i) -> M128i {
                let n = clamp_count(count.as_u64()[0], $width - 1) as $sc;
                // SAFETY: NEON is enabled whenever this module is selected.
                unsafe { M128i::from($sshl(<$st>::from(a), $dup(-n))) }
            }

            #[inline(always)]
            pub fn $srai<const IMM8: i32>(a: M128i) -> M128i {
                check_imm!(IMM8, 8);
                $srai_dyn(a, IMM8)
            }

            #[inline(always)]
            pub fn $srai_dyn(a: M128i, count: i32) -> M128i {
                $sra(a, M128i::from_u64([runtime_count(count), 0]))
            }
        )*
    };
}

neon_arithmetic_shifts! {
    16, int16x8_t, vdupq_n_s16, vshlq_s16, i16: sra_epi16, srai_epi16, srai_epi16_dyn;
    32, int32x4_t, vdupq_n_s32, vshlq_s32, i32: sra_epi32, srai_epi32, srai_epi32_dyn;
}

// --- Horizontal ---

/// Shifts each byte's top bit into its position within its half, then sums
/// each half horizontally.
#[inline(always)]
pub fn movemask_epi8(a: M128i) -> i32 {
    const POSITIONS: [i8; 16] = [0, 1, 2, 3, 4, 5, 6, 7, 0, 1, 2, 3, 4, 5, 6, 7];
    // SAFETY: NEON is enabled whenever this module is selected; `POSITIONS`
    // is 16 readable bytes.
    unsafe {
        let top = vshrq_n_u8::<7>(a.into());
        let bits = vshlq_u8(top, vld1q_s8(POSITIONS.as_ptr()));
        let lo = vaddv_u8(vget_low_u8(bits));
        let hi = vaddv_u8(vget_high_u8(bits));
        i32::from(lo) | (i32::from(hi) << 8)
    }
}
