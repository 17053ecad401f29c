// src/sse2/fallback.rs

//! Portable SSE2 bodies.
//!
//! Each function reproduces the instruction's result bit for bit with plain
//! array arithmetic. The native and NEON modules re-export everything here
//! and shadow the functions they can do better, so this file is also the
//! reference the other paths are tested against.

use core::array;

use crate::immediate::check_imm;
use crate::numeric::{
    self, clamp_count, mask, map, saturate_i16, saturate_i8, saturate_u8, shl_or_zero,
    shr_or_zero, zip,
};
use crate::register::{Align16, M128, M128d, M128i, M64};

macro_rules! lanewise {
    ($($name:ident: $reg:ident, $view:ident => $from:ident, $f:expr;)*) => {
        $(
            #[inline]
            pub fn $name(a: $reg, b: $reg) -> $reg {
                $reg::$from(zip(*a.$view(), *b.$view(), $f))
            }
        )*
    };
}

/// Lane 0 computed from `a` and `b`, lane 1 passed through from `a`.
#[inline(always)]
fn scalar_sd(a: M128d, b: M128d, f: impl Fn(f64, f64) -> f64) -> M128d {
    let a = *a.as_f64();
    M128d::from_f64([f(a[0], b.as_f64()[0]), a[1]])
}

// --- Integer add / sub ---

lanewise! {
    add_epi8: M128i, as_i8 => from_i8, i8::wrapping_add;
    add_epi16: M128i, as_i16 => from_i16, i16::wrapping_add;
    add_epi32: M128i, as_i32 => from_i32, i32::wrapping_add;
    add_epi64: M128i, as_i64 => from_i64, i64::wrapping_add;
    sub_epi8: M128i, as_i8 => from_i8, i8::wrapping_sub;
    sub_epi16: M128i, as_i16 => from_i16, i16::wrapping_sub;
    sub_epi32: M128i, as_i32 => from_i32, i32::wrapping_sub;
    sub_epi64: M128i, as_i64 => from_i64, i64::wrapping_sub;
    add_si64: M64, as_i64 => from_i64, i64::wrapping_add;
    sub_si64: M64, as_i64 => from_i64, i64::wrapping_sub;
}

// --- Saturating add / sub ---
//
// Signed forms widen, unsigned forms compare against the headroom so the
// intermediate never overflows.

lanewise! {
    adds_epi8: M128i, as_i8 => from_i8, |x: i8, y: i8| saturate_i8(x as i16 + y as i16);
    adds_epi16: M128i, as_i16 => from_i16, |x: i16, y: i16| saturate_i16(x as i32 + y as i32);
    subs_epi8: M128i, as_i8 => from_i8, |x: i8, y: i8| saturate_i8(x as i16 - y as i16);
    subs_epi16: M128i, as_i16 => from_i16, |x: i16, y: i16| saturate_i16(x as i32 - y as i32);
    adds_epu8: M128i, as_u8 => from_u8, |x: u8, y: u8| if u8::MAX - x > y { x + y } else { u8::MAX };
    adds_epu16: M128i, as_u16 => from_u16, |x: u16, y: u16| if u16::MAX - x > y { x + y } else { u16::MAX };
    subs_epu8: M128i, as_u8 => from_u8, |x: u8, y: u8| if x > y { x - y } else { 0 };
    subs_epu16: M128i, as_u16 => from_u16, |x: u16, y: u16| if x > y { x - y } else { 0 };
}

// --- Double precision arithmetic ---

lanewise! {
    add_pd: M128d, as_f64 => from_f64, |x: f64, y: f64| x + y;
    sub_pd: M128d, as_f64 => from_f64, |x: f64, y: f64| x - y;
    mul_pd: M128d, as_f64 => from_f64, |x: f64, y: f64| x * y;
    div_pd: M128d, as_f64 => from_f64, |x: f64, y: f64| x / y;
    // minpd/maxpd return the second operand when either input is NaN or both are zero.
    min_pd: M128d, as_f64 => from_f64, |x: f64, y: f64| if x < y { x } else { y };
    max_pd: M128d, as_f64 => from_f64, |x: f64, y: f64| if x > y { x } else { y };
}

#[inline]
pub fn add_sd(a: M128d, b: M128d) -> M128d {
    scalar_sd(a, b, |x, y| x + y)
}

#[inline]
pub fn sub_sd(a: M128d, b: M128d) -> M128d {
    scalar_sd(a, b, |x, y| x - y)
}

#[inline]
pub fn mul_sd(a: M128d, b: M128d) -> M128d {
    scalar_sd(a, b, |x, y| x * y)
}

#[inline]
pub fn div_sd(a: M128d, b: M128d) -> M128d {
    scalar_sd(a, b, |x, y| x / y)
}

#[inline]
pub fn min_sd(a: M128d, b: M128d) -> M128d {
    scalar_sd(a, b, |x, y| if x < y { x } else { y })
}

#[inline]
pub fn max_sd(a: M128d, b: M128d) -> M128d {
    scalar_sd(a, b, |x, y| if x > y { x } else { y })
}

#[inline]
pub fn sqrt_pd(a: M128d) -> M128d {
    M128d::from_f64(map(*a.as_f64(), f64::sqrt))
}

/// Square root of `b`'s low lane; upper lane from `a`.
#[inline]
pub fn sqrt_sd(a: M128d, b: M128d) -> M128d {
    scalar_sd(a, b, |_, y| y.sqrt())
}

// --- Logical ---

lanewise! {
    and_si128: M128i, as_u64 => from_u64, |x: u64, y: u64| x & y;
    andnot_si128: M128i, as_u64 => from_u64, |x: u64, y: u64| !x & y;
    or_si128: M128i, as_u64 => from_u64, |x: u64, y: u64| x | y;
    xor_si128: M128i, as_u64 => from_u64, |x: u64, y: u64| x ^ y;
    and_pd: M128d, as_u64 => from_u64, |x: u64, y: u64| x & y;
    andnot_pd: M128d, as_u64 => from_u64, |x: u64, y: u64| !x & y;
    or_pd: M128d, as_u64 => from_u64, |x: u64, y: u64| x | y;
    xor_pd: M128d, as_u64 => from_u64, |x: u64, y: u64| x ^ y;
}

// --- Average, multiply, min / max ---

lanewise! {
    avg_epu8: M128i, as_u8 => from_u8, |x: u8, y: u8| ((x as u16 + y as u16 + 1) >> 1) as u8;
    avg_epu16: M128i, as_u16 => from_u16, |x: u16, y: u16| ((x as u32 + y as u32 + 1) >> 1) as u16;
    mullo_epi16: M128i, as_i16 => from_i16, i16::wrapping_mul;
    mulhi_epi16: M128i, as_i16 => from_i16, |x: i16, y: i16| ((x as i32 * y as i32) >> 16) as i16;
    mulhi_epu16: M128i, as_u16 => from_u16, |x: u16, y: u16| ((x as u32 * y as u32) >> 16) as u16;
    min_epi16: M128i, as_i16 => from_i16, i16::min;
    max_epi16: M128i, as_i16 => from_i16, i16::max;
    min_epu8: M128i, as_u8 => from_u8, u8::min;
    max_epu8: M128i, as_u8 => from_u8, u8::max;
}

/// Unsigned 32x32 -> 64 multiply of lanes 0 and 2.
#[inline]
pub fn mul_epu32(a: M128i, b: M128i) -> M128i {
    let (a, b) = (a.as_u32(), b.as_u32());
    M128i::from_u64([
        u64::from(a[0]) * u64::from(b[0]),
        u64::from(a[2]) * u64::from(b[2]),
    ])
}

#[inline]
pub fn mul_su32(a: M64, b: M64) -> M64 {
    M64::from_u64([u64::from(a.as_u32()[0]) * u64::from(b.as_u32()[0])])
}

/// Pairwise multiply-add of 16-bit lanes into 32-bit lanes.
///
/// The only overflowing input (all four factors `i16::MIN`) wraps to
/// `i32::MIN`, as the instruction does.
#[inline]
pub fn madd_epi16(a: M128i, b: M128i) -> M128i {
    let (a, b) = (a.as_i16(), b.as_i16());
    M128i::from_i32(array::from_fn(|i| {
        let lo = a[2 * i] as i32 * b[2 * i] as i32;
        let hi = a[2 * i + 1] as i32 * b[2 * i + 1] as i32;
        lo.wrapping_add(hi)
    }))
}

/// Sum of absolute byte differences, one 16-bit total per 64-bit half.
#[inline]
pub fn sad_epu8(a: M128i, b: M128i) -> M128i {
    let diffs = zip(*a.as_u8(), *b.as_u8(), |x, y| u64::from(x.abs_diff(y)));
    M128i::from_u64(array::from_fn(|h| diffs[h * 8..h * 8 + 8].iter().sum()))
}

// --- Integer compares ---

lanewise! {
    cmpeq_epi8: M128i, as_i8 => from_i8, |x: i8, y: i8| mask(x == y);
    cmpeq_epi16: M128i, as_i16 => from_i16, |x: i16, y: i16| mask(x == y);
    cmpeq_epi32: M128i, as_i32 => from_i32, |x: i32, y: i32| mask(x == y);
    cmplt_epi8: M128i, as_i8 => from_i8, |x: i8, y: i8| mask(x < y);
    cmplt_epi16: M128i, as_i16 => from_i16, |x: i16, y: i16| mask(x < y);
    cmplt_epi32: M128i, as_i32 => from_i32, |x: i32, y: i32| mask(x < y);
    cmpgt_epi8: M128i, as_i8 => from_i8, |x: i8, y: i8| mask(x > y);
    cmpgt_epi16: M128i, as_i16 => from_i16, |x: i16, y: i16| mask(x > y);
    cmpgt_epi32: M128i, as_i32 => from_i32, |x: i32, y: i32| mask(x > y);
}

// --- Double compares ---
//
// Negated predicates are true when either operand is NaN; ordered ones
// are false.

macro_rules! cmp_pd {
    ($($pd:ident, $sd:ident: $pred:expr;)*) => {
        $(
            #[inline]
            pub fn $pd(a: M128d, b: M128d) -> M128d {
                let pred = $pred;
                M128d::from_u64(zip(*a.as_f64(), *b.as_f64(), |x, y| mask(pred(x, y))))
            }

            #[inline]
            pub fn $sd(a: M128d, b: M128d) -> M128d {
                let pred = $pred;
                let upper = a.as_u64()[1];
                M128d::from_u64([mask(pred(a.as_f64()[0], b.as_f64()[0])), upper])
            }
        )*
    };
}

cmp_pd! {
    cmpeq_pd, cmpeq_sd: |x: f64, y: f64| x == y;
    cmpneq_pd, cmpneq_sd: |x: f64, y: f64| x != y;
    cmplt_pd, cmplt_sd: |x: f64, y: f64| x < y;
    cmple_pd, cmple_sd: |x: f64, y: f64| x <= y;
    cmpgt_pd, cmpgt_sd: |x: f64, y: f64| x > y;
    cmpge_pd, cmpge_sd: |x: f64, y: f64| x >= y;
    cmpnlt_pd, cmpnlt_sd: |x: f64, y: f64| !(x < y);
    cmpnle_pd, cmpnle_sd: |x: f64, y: f64| !(x <= y);
    cmpngt_pd, cmpngt_sd: |x: f64, y: f64| !(x > y);
    cmpnge_pd, cmpnge_sd: |x: f64, y: f64| !(x >= y);
    cmpord_pd, cmpord_sd: |x: f64, y: f64| !x.is_nan() && !y.is_nan();
    cmpunord_pd, cmpunord_sd: |x: f64, y: f64| x.is_nan() || y.is_nan();
}

macro_rules! comi {
    ($($comi:ident, $ucomi:ident: $op:tt;)*) => {
        $(
            #[inline]
            pub fn $comi(a: M128d, b: M128d) -> i32 {
                (a.as_f64()[0] $op b.as_f64()[0]) as i32
            }

            #[inline]
            pub fn $ucomi(a: M128d, b: M128d) -> i32 {
                (a.as_f64()[0] $op b.as_f64()[0]) as i32
            }
        )*
    };
}

comi! {
    comieq_sd, ucomieq_sd: ==;
    comineq_sd, ucomineq_sd: !=;
    comilt_sd, ucomilt_sd: <;
    comile_sd, ucomile_sd: <=;
    comigt_sd, ucomigt_sd: >;
    comige_sd, ucomige_sd: >=;
}

// --- Element shifts ---
//
// Counts above the lane width clear the lane (logical) or fill it with the
// sign bit (arithmetic). Runtime counts below zero are out of range.

#[inline(always)]
fn runtime_count(count: i32) -> u64 {
    u64::try_from(count).unwrap_or(u64::MAX)
}

macro_rules! element_shifts {
    ($(
        $width:literal, $u:ident, $as_u:ident, $from_u:ident:
        $sll:ident, $srl:ident, $slli:ident, $srli:ident, $slli_dyn:ident, $srli_dyn:ident;
    )*) => {
        $(
            #[inline]
            pub fn $sll(a: M128i, count: M128i) -> M128i {
                let n = clamp_count(count.as_u64()[0], $width);
                M128i::$from_u(map(*a.$as_u(), |x: $u| shl_or_zero!(x, n)))
            }

            #[inline]
            pub fn $srl(a: M128i, count: M128i) -> M128i {
                let n = clamp_count(count.as_u64()[0], $width);
                M128i::$from_u(map(*a.$as_u(), |x: $u| shr_or_zero!(x, n)))
            }

            #[inline]
            pub fn $slli<const IMM8: i32>(a: M128i) -> M128i {
                check_imm!(IMM8, 8);
                $slli_dyn(a, IMM8)
            }

            #[inline]
            pub fn $srli<const IMM8: i32>(a: M128i) -> M128i {
                check_imm!(IMM8, 8);
                $srli_dyn(a, IMM8)
            }

            #[inline]
            pub fn $slli_dyn(a: M128i, count: i32) -> M128i {
                $sll(a, M128i::from_u64([runtime_count(count), 0]))
            }

            #[inline]
            pub fn $srli_dyn(a: M128i, count: i32) -> M128i {
                $srl(a, M128i::from_u64([runtime_count(count), 0]))
            }
        )*
    };
}

element_shifts! {
    16, u16, as_u16, from_u16: sll_epi16, srl_epi16, slli_epi16, srli_epi16, slli_epi16_dyn, srli_epi16_dyn;
    32, u32, as_u32, from_u32: sll_epi32, srl_epi32, slli_epi32, srli_epi32, slli_epi32_dyn, srli_epi32_dyn;
    64, u64, as_u64, from_u64: sll_epi64, srl_epi64, slli_epi64, srli_epi64, slli_epi64_dyn, srli_epi64_dyn;
}

macro_rules! arithmetic_shifts {
    ($(
        $width:literal, $i:ident, $as_i:ident, $from_i:ident:
        $sra:ident, $srai:ident, $srai_dyn:ident;
    )*) => {
        $(
            #[inline]
            pub fn $sra(a: M128i, count: M128i) -> M128i {
                let n = clamp_count(count.as_u64()[0], $width - 1);
                M128i::$from_i(map(*a.$as_i(), |x: $i| x >> n))
            }

            #[inline]
            pub fn $srai<const IMM8: i32>(a: M128i) -> M128i {
                check_imm!(IMM8, 8);
                $srai_dyn(a, IMM8)
            }

            #[inline]
            pub fn $srai_dyn(a: M128i, count: i32) -> M128i {
                $sra(a, M128i::from_u64([runtime_count(count), 0]))
            }
        )*
    };
}

arithmetic_shifts! {
    16, i16, as_i16, from_i16: sra_epi16, srai_epi16, srai_epi16_dyn;
    32, i32, as_i32, from_i32: sra_epi32, srai_epi32, srai_epi32_dyn;
}

// --- Whole-register byte shifts ---
//
// Byte `i` of the register is digit `i` of a little-endian 128-bit integer,
// whatever the host byte order, so the shift carries across the 64-bit
// halves for free.

#[inline]
pub fn bslli_si128_dyn(a: M128i, imm8: i32) -> M128i {
    let v = u128::from_le_bytes(a.to_bytes());
    let r = match u32::try_from(imm8) {
        Ok(n) if n < 16 => v << (n * 8),
        _ => 0,
    };
    M128i::from_bytes(r.to_le_bytes())
}

#[inline]
pub fn bsrli_si128_dyn(a: M128i, imm8: i32) -> M128i {
    let v = u128::from_le_bytes(a.to_bytes());
    let r = match u32::try_from(imm8) {
        Ok(n) if n < 16 => v >> (n * 8),
        _ => 0,
    };
    M128i::from_bytes(r.to_le_bytes())
}

#[inline]
pub fn slli_si128_dyn(a: M128i, imm8: i32) -> M128i {
    bslli_si128_dyn(a, imm8)
}

#[inline]
pub fn srli_si128_dyn(a: M128i, imm8: i32) -> M128i {
    bsrli_si128_dyn(a, imm8)
}

#[inline]
pub fn bslli_si128<const IMM8: i32>(a: M128i) -> M128i {
    check_imm!(IMM8, 8);
    bslli_si128_dyn(a, IMM8)
}

#[inline]
pub fn bsrli_si128<const IMM8: i32>(a: M128i) -> M128i {
    check_imm!(IMM8, 8);
    bsrli_si128_dyn(a, IMM8)
}

#[inline]
pub fn slli_si128<const IMM8: i32>(a: M128i) -> M128i {
    check_imm!(IMM8, 8);
    bslli_si128_dyn(a, IMM8)
}

#[inline]
pub fn srli_si128<const IMM8: i32>(a: M128i) -> M128i {
    check_imm!(IMM8, 8);
    bsrli_si128_dyn(a, IMM8)
}

// --- Conversions ---

#[inline]
pub fn cvtepi32_pd(a: M128i) -> M128d {
    let a = a.as_i32();
    M128d::from_f64([f64::from(a[0]), f64::from(a[1])])
}

#[inline]
pub fn cvtepi32_ps(a: M128i) -> M128 {
    M128::from_f32(map(*a.as_i32(), |x| x as f32))
}

#[inline]
pub fn cvtpd_epi32(a: M128d) -> M128i {
    let a = a.as_f64();
    M128i::from_i32([
        numeric::f64_to_i32_round(a[0]),
        numeric::f64_to_i32_round(a[1]),
        0,
        0,
    ])
}

#[inline]
pub fn cvtpd_pi32(a: M128d) -> M64 {
    M64::from_i32(map(*a.as_f64(), numeric::f64_to_i32_round))
}

#[inline]
pub fn cvtpd_ps(a: M128d) -> M128 {
    let a = a.as_f64();
    M128::from_f32([a[0] as f32, a[1] as f32, 0.0, 0.0])
}

#[inline]
pub fn cvtpi32_pd(a: M64) -> M128d {
    M128d::from_f64(map(*a.as_i32(), f64::from))
}

#[inline]
pub fn cvtps_epi32(a: M128) -> M128i {
    M128i::from_i32(map(*a.as_f32(), numeric::f32_to_i32_round))
}

#[inline]
pub fn cvtps_pd(a: M128) -> M128d {
    let a = a.as_f32();
    M128d::from_f64([f64::from(a[0]), f64::from(a[1])])
}

#[inline]
pub fn cvtsd_f64(a: M128d) -> f64 {
    a.as_f64()[0]
}

#[inline]
pub fn cvtsd_si32(a: M128d) -> i32 {
    numeric::f64_to_i32_round(a.as_f64()[0])
}

#[inline]
pub fn cvtsd_si64(a: M128d) -> i64 {
    numeric::f64_to_i64_round(a.as_f64()[0])
}

/// `b`'s low lane narrowed into lane 0; lanes 1..3 from `a`.
#[inline]
pub fn cvtsd_ss(a: M128, b: M128d) -> M128 {
    let mut r = a;
    r.as_f32_mut()[0] = b.as_f64()[0] as f32;
    r
}

#[inline]
pub fn cvtsi128_si32(a: M128i) -> i32 {
    a.as_i32()[0]
}

#[inline]
pub fn cvtsi128_si64(a: M128i) -> i64 {
    a.as_i64()[0]
}

#[inline]
pub fn cvtsi32_sd(a: M128d, b: i32) -> M128d {
    M128d::from_f64([f64::from(b), a.as_f64()[1]])
}

#[inline]
pub fn cvtsi32_si128(a: i32) -> M128i {
    M128i::from_i32([a, 0, 0, 0])
}

#[inline]
pub fn cvtsi64_sd(a: M128d, b: i64) -> M128d {
    M128d::from_f64([b as f64, a.as_f64()[1]])
}

#[inline]
pub fn cvtsi64_si128(a: i64) -> M128i {
    M128i::from_i64([a, 0])
}

#[inline]
pub fn cvtss_sd(a: M128d, b: M128) -> M128d {
    M128d::from_f64([f64::from(b.as_f32()[0]), a.as_f64()[1]])
}

#[inline]
pub fn cvttpd_epi32(a: M128d) -> M128i {
    let a = a.as_f64();
    M128i::from_i32([
        numeric::f64_to_i32_trunc(a[0]),
        numeric::f64_to_i32_trunc(a[1]),
        0,
        0,
    ])
}

#[inline]
pub fn cvttpd_pi32(a: M128d) -> M64 {
    M64::from_i32(map(*a.as_f64(), numeric::f64_to_i32_trunc))
}

#[inline]
pub fn cvttps_epi32(a: M128) -> M128i {
    M128i::from_i32(map(*a.as_f32(), numeric::f32_to_i32_trunc))
}

#[inline]
pub fn cvttsd_si32(a: M128d) -> i32 {
    numeric::f64_to_i32_trunc(a.as_f64()[0])
}

#[inline]
pub fn cvttsd_si64(a: M128d) -> i64 {
    numeric::f64_to_i64_trunc(a.as_f64()[0])
}

// --- Pack / unpack / shuffle ---

#[inline]
pub fn packs_epi16(a: M128i, b: M128i) -> M128i {
    let (a, b) = (a.as_i16(), b.as_i16());
    M128i::from_i8(array::from_fn(|i| {
        saturate_i8(if i < 8 { a[i] } else { b[i - 8] })
    }))
}

#[inline]
pub fn packs_epi32(a: M128i, b: M128i) -> M128i {
    let (a, b) = (a.as_i32(), b.as_i32());
    M128i::from_i16(array::from_fn(|i| {
        saturate_i16(if i < 4 { a[i] } else { b[i - 4] })
    }))
}

#[inline]
pub fn packus_epi16(a: M128i, b: M128i) -> M128i {
    let (a, b) = (a.as_i16(), b.as_i16());
    M128i::from_u8(array::from_fn(|i| {
        saturate_u8(if i < 8 { a[i] } else { b[i - 8] })
    }))
}

/// Interleave lanes of `a` and `b` starting at lane `from`.
#[inline(always)]
fn interleave<T: Copy, const N: usize>(a: &[T; N], b: &[T; N], from: usize) -> [T; N] {
    array::from_fn(|i| if i % 2 == 0 { a[from + i / 2] } else { b[from + i / 2] })
}

macro_rules! unpack {
    ($($lo:ident, $hi:ident: $reg:ident, $view:ident => $from:ident, $n:literal;)*) => {
        $(
            #[inline]
            pub fn $lo(a: $reg, b: $reg) -> $reg {
                $reg::$from(interleave(a.$view(), b.$view(), 0))
            }

            #[inline]
            pub fn $hi(a: $reg, b: $reg) -> $reg {
                $reg::$from(interleave(a.$view(), b.$view(), $n / 2))
            }
        )*
    };
}

unpack! {
    unpacklo_epi8, unpackhi_epi8: M128i, as_u8 => from_u8, 16;
    unpacklo_epi16, unpackhi_epi16: M128i, as_u16 => from_u16, 8;
    unpacklo_epi32, unpackhi_epi32: M128i, as_u32 => from_u32, 4;
    unpacklo_epi64, unpackhi_epi64: M128i, as_u64 => from_u64, 2;
    unpacklo_pd, unpackhi_pd: M128d, as_f64 => from_f64, 2;
}

#[inline]
pub fn shuffle_epi32<const IMM8: i32>(a: M128i) -> M128i {
    check_imm!(IMM8, 8);
    let a = a.as_u32();
    M128i::from_u32(array::from_fn(|i| a[(IMM8 as usize >> (2 * i)) & 3]))
}

/// Permutes lanes 0..3; lanes 4..7 pass through.
#[inline]
pub fn shufflelo_epi16<const IMM8: i32>(a: M128i) -> M128i {
    check_imm!(IMM8, 8);
    let a = a.as_u16();
    M128i::from_u16(array::from_fn(|i| {
        if i < 4 {
            a[(IMM8 as usize >> (2 * i)) & 3]
        } else {
            a[i]
        }
    }))
}

/// Permutes lanes 4..7; lanes 0..3 pass through.
#[inline]
pub fn shufflehi_epi16<const IMM8: i32>(a: M128i) -> M128i {
    check_imm!(IMM8, 8);
    let a = a.as_u16();
    M128i::from_u16(array::from_fn(|i| {
        if i < 4 {
            a[i]
        } else {
            a[4 + ((IMM8 as usize >> (2 * (i - 4))) & 3)]
        }
    }))
}

#[inline]
pub fn shuffle_pd<const MASK: i32>(a: M128d, b: M128d) -> M128d {
    check_imm!(MASK, 8);
    let m = MASK as usize;
    M128d::from_u64([a.as_u64()[m & 1], b.as_u64()[(m >> 1) & 1]])
}

#[inline]
pub fn move_epi64(a: M128i) -> M128i {
    M128i::from_u64([a.as_u64()[0], 0])
}

#[inline]
pub fn move_sd(a: M128d, b: M128d) -> M128d {
    M128d::from_u64([b.as_u64()[0], a.as_u64()[1]])
}

#[inline]
pub fn movepi64_pi64(a: M128i) -> M64 {
    M64::from_u64([a.as_u64()[0]])
}

#[inline]
pub fn movpi64_epi64(a: M64) -> M128i {
    M128i::from_u64([a.as_u64()[0], 0])
}

// --- Lane access ---

/// Lane `IMM8` zero-extended to 32 bits.
#[inline]
pub fn extract_epi16<const IMM8: i32>(a: M128i) -> i32 {
    check_imm!(IMM8, 3);
    i32::from(a.as_u16()[IMM8 as usize])
}

/// Replace lane `IMM8` with the low 16 bits of `i`.
#[inline]
pub fn insert_epi16<const IMM8: i32>(a: M128i, i: i32) -> M128i {
    check_imm!(IMM8, 3);
    let mut r = a;
    r.as_u16_mut()[IMM8 as usize] = i as u16;
    r
}

/// Bit `i` of the result is the top bit of byte `i`.
#[inline]
pub fn movemask_epi8(a: M128i) -> i32 {
    a.as_u8()
        .iter()
        .enumerate()
        .fold(0, |acc, (i, &b)| acc | (i32::from(b >> 7) << i))
}

#[inline]
pub fn movemask_pd(a: M128d) -> i32 {
    let a = a.as_u64();
    ((a[0] >> 63) | ((a[1] >> 63) << 1)) as i32
}

// --- Loads ---

#[inline]
pub fn load_si128(mem: &M128i) -> M128i {
    *mem
}

#[inline]
pub fn loadu_si128(mem: &[u8; 16]) -> M128i {
    M128i::from_bytes(*mem)
}

/// Loads 8 bytes into the low half and clears the high half.
#[inline]
pub fn loadl_epi64(mem: &[u8; 8]) -> M128i {
    let mut bytes = [0u8; 16];
    bytes[..8].copy_from_slice(mem);
    M128i::from_bytes(bytes)
}

#[inline]
pub fn load_pd(mem: &Align16<[f64; 2]>) -> M128d {
    M128d::from_f64(mem.0)
}

#[inline]
pub fn loadu_pd(mem: &[f64; 2]) -> M128d {
    M128d::from_f64(*mem)
}

#[inline]
pub fn load_sd(mem: &f64) -> M128d {
    M128d::from_f64([*mem, 0.0])
}

#[inline]
pub fn load1_pd(mem: &f64) -> M128d {
    M128d::from_f64([*mem; 2])
}

#[inline]
pub fn load_pd1(mem: &f64) -> M128d {
    load1_pd(mem)
}

#[inline]
pub fn loadh_pd(a: M128d, mem: &f64) -> M128d {
    M128d::from_f64([a.as_f64()[0], *mem])
}

#[inline]
pub fn loadl_pd(a: M128d, mem: &f64) -> M128d {
    M128d::from_f64([*mem, a.as_f64()[1]])
}

// --- Stores ---

#[inline]
pub fn store_si128(mem: &mut M128i, a: M128i) {
    *mem = a;
}

#[inline]
pub fn storeu_si128(mem: &mut [u8; 16], a: M128i) {
    *mem = a.to_bytes();
}

/// Writes the low 8 bytes only.
#[inline]
pub fn storel_epi64(mem: &mut [u8; 8], a: M128i) {
    mem.copy_from_slice(&a.to_bytes()[..8]);
}

#[inline]
pub fn store_pd(mem: &mut Align16<[f64; 2]>, a: M128d) {
    mem.0 = *a.as_f64();
}

#[inline]
pub fn storeu_pd(mem: &mut [f64; 2], a: M128d) {
    *mem = *a.as_f64();
}

#[inline]
pub fn store_sd(mem: &mut f64, a: M128d) {
    *mem = a.as_f64()[0];
}

/// Writes lane 0 to both slots.
#[inline]
pub fn store1_pd(mem: &mut Align16<[f64; 2]>, a: M128d) {
    mem.0 = [a.as_f64()[0]; 2];
}

#[inline]
pub fn store_pd1(mem: &mut Align16<[f64; 2]>, a: M128d) {
    store1_pd(mem, a);
}

#[inline]
pub fn storeh_pd(mem: &mut f64, a: M128d) {
    *mem = a.as_f64()[1];
}

#[inline]
pub fn storel_pd(mem: &mut f64, a: M128d) {
    *mem = a.as_f64()[0];
}

/// Writes the lanes in reverse order.
#[inline]
pub fn storer_pd(mem: &mut Align16<[f64; 2]>, a: M128d) {
    let a = a.as_f64();
    mem.0 = [a[1], a[0]];
}

// --- Set ---
//
// `set_*` take lanes from the highest down, `setr_*` from lane 0 up.

#[allow(clippy::too_many_arguments)]
#[rustfmt::skip]
#[inline]
pub fn set_epi8(
    e15: i8, e14: i8, e13: i8, e12: i8, e11: i8, e10: i8, e9: i8, e8: i8,
    e7: i8, e6: i8, e5: i8, e4: i8, e3: i8, e2: i8, e1: i8, e0: i8,
) -> M128i {
    M128i::from_i8([
        e0, e1, e2, e3, e4, e5, e6, e7, e8, e9, e10, e11, e12, e13, e14, e15,
    ])
}

#[allow(clippy::too_many_arguments)]
#[inline]
pub fn set_epi16(e7: i16, e6: i16, e5: i16, e4: i16, e3: i16, e2: i16, e1: i16, e0: i16) -> M128i {
    M128i::from_i16([e0, e1, e2, e3, e4, e5, e6, e7])
}

#[inline]
pub fn set_epi32(e3: i32, e2: i32, e1: i32, e0: i32) -> M128i {
    M128i::from_i32([e0, e1, e2, e3])
}

#[inline]
pub fn set_epi64(e1: M64, e0: M64) -> M128i {
    M128i::from_u64([e0.as_u64()[0], e1.as_u64()[0]])
}

#[inline]
pub fn set_epi64x(e1: i64, e0: i64) -> M128i {
    M128i::from_i64([e0, e1])
}

#[allow(clippy::too_many_arguments)]
#[rustfmt::skip]
#[inline]
pub fn set_epu8(
    e15: u8, e14: u8, e13: u8, e12: u8, e11: u8, e10: u8, e9: u8, e8: u8,
    e7: u8, e6: u8, e5: u8, e4: u8, e3: u8, e2: u8, e1: u8, e0: u8,
) -> M128i {
    M128i::from_u8([
        e0, e1, e2, e3, e4, e5, e6, e7, e8, e9, e10, e11, e12, e13, e14, e15,
    ])
}

#[allow(clippy::too_many_arguments)]
#[inline]
pub fn set_epu16(e7: u16, e6: u16, e5: u16, e4: u16, e3: u16, e2: u16, e1: u16, e0: u16) -> M128i {
    M128i::from_u16([e0, e1, e2, e3, e4, e5, e6, e7])
}

#[inline]
pub fn set_epu32(e3: u32, e2: u32, e1: u32, e0: u32) -> M128i {
    M128i::from_u32([e0, e1, e2, e3])
}

#[inline]
pub fn set_epu64x(e1: u64, e0: u64) -> M128i {
    M128i::from_u64([e0, e1])
}

#[inline]
pub fn set_pd(e1: f64, e0: f64) -> M128d {
    M128d::from_f64([e0, e1])
}

#[inline]
pub fn set_pd1(a: f64) -> M128d {
    M128d::from_f64([a; 2])
}

/// `a` in lane 0, zero in lane 1.
#[inline]
pub fn set_sd(a: f64) -> M128d {
    M128d::from_f64([a, 0.0])
}

#[inline]
pub fn set1_epi8(a: i8) -> M128i {
    M128i::from_i8([a; 16])
}

#[inline]
pub fn set1_epi16(a: i16) -> M128i {
    M128i::from_i16([a; 8])
}

#[inline]
pub fn set1_epi32(a: i32) -> M128i {
    M128i::from_i32([a; 4])
}

#[inline]
pub fn set1_epi64x(a: i64) -> M128i {
    M128i::from_i64([a; 2])
}

#[inline]
pub fn set1_epi64(a: M64) -> M128i {
    M128i::from_u64([a.as_u64()[0]; 2])
}

#[inline]
pub fn set1_pd(a: f64) -> M128d {
    M128d::from_f64([a; 2])
}

#[allow(clippy::too_many_arguments)]
#[rustfmt::skip]
#[inline]
pub fn setr_epi8(
    e0: i8, e1: i8, e2: i8, e3: i8, e4: i8, e5: i8, e6: i8, e7: i8,
    e8: i8, e9: i8, e10: i8, e11: i8, e12: i8, e13: i8, e14: i8, e15: i8,
) -> M128i {
    M128i::from_i8([
        e0, e1, e2, e3, e4, e5, e6, e7, e8, e9, e10, e11, e12, e13, e14, e15,
    ])
}

#[allow(clippy::too_many_arguments)]
#[inline]
pub fn setr_epi16(e0: i16, e1: i16, e2: i16, e3: i16, e4: i16, e5: i16, e6: i16, e7: i16) -> M128i {
    M128i::from_i16([e0, e1, e2, e3, e4, e5, e6, e7])
}

#[inline]
pub fn setr_epi32(e0: i32, e1: i32, e2: i32, e3: i32) -> M128i {
    M128i::from_i32([e0, e1, e2, e3])
}

#[inline]
pub fn setr_epi64(e0: M64, e1: M64) -> M128i {
    M128i::from_u64([e0.as_u64()[0], e1.as_u64()[0]])
}

#[inline]
pub fn setr_pd(e0: f64, e1: f64) -> M128d {
    M128d::from_f64([e0, e1])
}

#[inline]
pub fn setzero_pd() -> M128d {
    M128d::ZERO
}

#[inline]
pub fn setzero_si128() -> M128i {
    M128i::ZERO
}
