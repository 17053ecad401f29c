// src/sse41/fallback.rs

//! Portable SSE4.1 bodies.

use core::array;

use crate::immediate::check_imm;
use crate::numeric::{mask, map, saturate_u16, zip};
use crate::register::{M128, M128d, M128i};

macro_rules! lanewise {
    ($($name:ident: $view:ident => $from:ident, $f:expr;)*) => {
        $(
            #[inline]
            pub fn $name(a: M128i, b: M128i) -> M128i {
                M128i::$from(zip(*a.$view(), *b.$view(), $f))
            }
        )*
    };
}

// --- Blend ---

/// Byte `i` comes from `b` when bit 7 of `mask` byte `i` is set.
#[inline]
pub fn blendv_epi8(a: M128i, b: M128i, mask: M128i) -> M128i {
    let (a, b, m) = (a.as_u8(), b.as_u8(), mask.as_u8());
    M128i::from_u8(array::from_fn(|i| if m[i] & 0x80 != 0 { b[i] } else { a[i] }))
}

/// Lane selection by the sign bit of each 32-bit mask lane.
#[inline]
pub fn blendv_ps(a: M128, b: M128, mask: M128) -> M128 {
    let (a, b, m) = (a.as_u32(), b.as_u32(), mask.as_u32());
    M128::from_u32(array::from_fn(|i| if m[i] >> 31 != 0 { b[i] } else { a[i] }))
}

/// Lane selection by the sign bit of each 64-bit mask lane.
#[inline]
pub fn blendv_pd(a: M128d, b: M128d, mask: M128d) -> M128d {
    let (a, b, m) = (a.as_u64(), b.as_u64(), mask.as_u64());
    M128d::from_u64(array::from_fn(|i| if m[i] >> 63 != 0 { b[i] } else { a[i] }))
}

#[inline]
pub fn blend_epi16<const IMM8: i32>(a: M128i, b: M128i) -> M128i {
    check_imm!(IMM8, 8);
    let (a, b) = (a.as_u16(), b.as_u16());
    M128i::from_u16(array::from_fn(|i| if (IMM8 >> i) & 1 != 0 { b[i] } else { a[i] }))
}

#[inline]
pub fn blend_pd<const IMM2: i32>(a: M128d, b: M128d) -> M128d {
    check_imm!(IMM2, 2);
    let (a, b) = (a.as_u64(), b.as_u64());
    M128d::from_u64(array::from_fn(|i| if (IMM2 >> i) & 1 != 0 { b[i] } else { a[i] }))
}

// --- Min / max / multiply / compare ---

lanewise! {
    min_epi8: as_i8 => from_i8, i8::min;
    max_epi8: as_i8 => from_i8, i8::max;
    min_epi32: as_i32 => from_i32, i32::min;
    max_epi32: as_i32 => from_i32, i32::max;
    min_epu16: as_u16 => from_u16, u16::min;
    max_epu16: as_u16 => from_u16, u16::max;
    min_epu32: as_u32 => from_u32, u32::min;
    max_epu32: as_u32 => from_u32, u32::max;
    mullo_epi32: as_i32 => from_i32, i32::wrapping_mul;
    cmpeq_epi64: as_i64 => from_i64, |x: i64, y: i64| mask(x == y);
}

/// Signed 32x32 -> 64 multiply of lanes 0 and 2.
#[inline]
pub fn mul_epi32(a: M128i, b: M128i) -> M128i {
    let (a, b) = (a.as_i32(), b.as_i32());
    M128i::from_i64([
        i64::from(a[0]) * i64::from(b[0]),
        i64::from(a[2]) * i64::from(b[2]),
    ])
}

#[inline]
pub fn packus_epi32(a: M128i, b: M128i) -> M128i {
    let (a, b) = (a.as_i32(), b.as_i32());
    M128i::from_u16(array::from_fn(|i| {
        saturate_u16(if i < 4 { a[i] } else { b[i - 4] })
    }))
}

// --- Lane access ---
//
// Extracts return the lane zero-extended; the selector is masked to the
// lane count by its declared bit width.

#[inline]
pub fn extract_epi8<const IMM8: i32>(a: M128i) -> i32 {
    check_imm!(IMM8, 4);
    i32::from(a.as_u8()[IMM8 as usize])
}

#[inline]
pub fn extract_epi32<const IMM8: i32>(a: M128i) -> i32 {
    check_imm!(IMM8, 2);
    a.as_i32()[IMM8 as usize]
}

#[inline]
pub fn extract_epi64<const IMM8: i32>(a: M128i) -> i64 {
    check_imm!(IMM8, 1);
    a.as_i64()[IMM8 as usize]
}

#[inline]
pub fn insert_epi8<const IMM8: i32>(a: M128i, i: i32) -> M128i {
    check_imm!(IMM8, 4);
    let mut r = a;
    r.as_u8_mut()[IMM8 as usize] = i as u8;
    r
}

#[inline]
pub fn insert_epi32<const IMM8: i32>(a: M128i, i: i32) -> M128i {
    check_imm!(IMM8, 2);
    let mut r = a;
    r.as_i32_mut()[IMM8 as usize] = i;
    r
}

#[inline]
pub fn insert_epi64<const IMM8: i32>(a: M128i, i: i64) -> M128i {
    check_imm!(IMM8, 1);
    let mut r = a;
    r.as_i64_mut()[IMM8 as usize] = i;
    r
}

// --- Widening conversions ---
//
// Each one widens the lowest lanes of `a` that fit the destination.

macro_rules! widen {
    ($($name:ident: $view:ident => $from:ident, $wide:ty;)*) => {
        $(
            #[inline]
            pub fn $name(a: M128i) -> M128i {
                let a = a.$view();
                M128i::$from(array::from_fn(|i| <$wide>::from(a[i])))
            }
        )*
    };
}

widen! {
    cvtepi8_epi16: as_i8 => from_i16, i16;
    cvtepi8_epi32: as_i8 => from_i32, i32;
    cvtepi8_epi64: as_i8 => from_i64, i64;
    cvtepi16_epi32: as_i16 => from_i32, i32;
    cvtepi16_epi64: as_i16 => from_i64, i64;
    cvtepi32_epi64: as_i32 => from_i64, i64;
    cvtepu8_epi16: as_u8 => from_i16, i16;
    cvtepu8_epi32: as_u8 => from_i32, i32;
    cvtepu8_epi64: as_u8 => from_i64, i64;
    cvtepu16_epi32: as_u16 => from_i32, i32;
    cvtepu16_epi64: as_u16 => from_i64, i64;
    cvtepu32_epi64: as_u32 => from_i64, i64;
}

// --- Rounding ---

#[inline]
pub fn floor_pd(a: M128d) -> M128d {
    M128d::from_f64(map(*a.as_f64(), f64::floor))
}

#[inline]
pub fn ceil_pd(a: M128d) -> M128d {
    M128d::from_f64(map(*a.as_f64(), f64::ceil))
}

/// `b`'s low lane rounded down; upper lane from `a`.
#[inline]
pub fn floor_sd(a: M128d, b: M128d) -> M128d {
    M128d::from_f64([b.as_f64()[0].floor(), a.as_f64()[1]])
}

#[inline]
pub fn ceil_sd(a: M128d, b: M128d) -> M128d {
    M128d::from_f64([b.as_f64()[0].ceil(), a.as_f64()[1]])
}

// --- Tests ---

#[inline(always)]
fn and_is_zero(a: M128i, b: M128i) -> bool {
    a.as_u128()[0] & b.as_u128()[0] == 0
}

/// 1 when `a & mask` is all zeros.
#[inline]
pub fn testz_si128(a: M128i, mask: M128i) -> i32 {
    and_is_zero(a, mask) as i32
}

/// 1 when `!a & mask` is all zeros.
#[inline]
pub fn testc_si128(a: M128i, mask: M128i) -> i32 {
    and_is_zero(M128i::from_u128([!a.as_u128()[0]]), mask) as i32
}

/// 1 when neither [`testz_si128`] nor [`testc_si128`] would be.
#[inline]
pub fn testnzc_si128(a: M128i, mask: M128i) -> i32 {
    (testz_si128(a, mask) == 0 && testc_si128(a, mask) == 0) as i32
}
