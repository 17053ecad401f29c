// src/sse2/native.rs

//! SSE2 bodies mapped onto `core::arch` intrinsics.
//!
//! Everything not defined here is the fallback body, re-exported below.
//! Operations on the toolchain deny-list are compiled out so that the
//! fallback body takes their place.

#![allow(unused_unsafe)]

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

pub use super::fallback::*;

use crate::register::{Align16, M128, M128d, M128i};

/// One-to-one wrappers: registers go through `From` both ways, scalars pass
/// through unchanged.
macro_rules! native {
    ($($name:ident($($arg:ident: $ty:ty),*) -> $ret:ty = $intr:ident;)*) => {
        $(
            #[inline(always)]
            pub fn $name($($arg: $ty),*) -> $ret {
                // SAFETY: this module is only selected when SSE2 resolved to native.
                unsafe { $intr($($arg.into()),*).into() }
            }
        )*
    };
}

// --- Arithmetic ---

native! {
    add_epi8(a: M128i, b: M128i) -> M128i = _mm_add_epi8;
    add_epi16(a: M128i, b: M128i) -> M128i = _mm_add_epi16;
    add_epi32(a: M128i, b: M128i) -> M128i = _mm_add_epi32;
    add_epi64(a: M128i, b: M128i) -> M128i = _mm_add_epi64;
    sub_epi8(a: M128i, b: M128i) -> M128i = _mm_sub_epi8;
    sub_epi16(a: M128i, b: M128i) -> M128i = _mm_sub_epi16;
    sub_epi32(a: M128i, b: M128i) -> M128i = _mm_sub_epi32;
    sub_epi64(a: M128i, b: M128i) -> M128i = _mm_sub_epi64;
    adds_epi8(a: M128i, b: M128i) -> M128i = _mm_adds_epi8;
    adds_epi16(a: M128i, b: M128i) -> M128i = _mm_adds_epi16;
    adds_epu8(a: M128i, b: M128i) -> M128i = _mm_adds_epu8;
    adds_epu16(a: M128i, b: M128i) -> M128i = _mm_adds_epu16;
    subs_epi8(a: M128i, b: M128i) -> M128i = _mm_subs_epi8;
    subs_epi16(a: M128i, b: M128i) -> M128i = _mm_subs_epi16;
    subs_epu8(a: M128i, b: M128i) -> M128i = _mm_subs_epu8;
    subs_epu16(a: M128i, b: M128i) -> M128i = _mm_subs_epu16;
    avg_epu8(a: M128i, b: M128i) -> M128i = _mm_avg_epu8;
    avg_epu16(a: M128i, b: M128i) -> M128i = _mm_avg_epu16;
    mullo_epi16(a: M128i, b: M128i) -> M128i = _mm_mullo_epi16;
    mulhi_epi16(a: M128i, b: M128i) -> M128i = _mm_mulhi_epi16;
    mulhi_epu16(a: M128i, b: M128i) -> M128i = _mm_mulhi_epu16;
    mul_epu32(a: M128i, b: M128i) -> M128i = _mm_mul_epu32;
    madd_epi16(a: M128i, b: M128i) -> M128i = _mm_madd_epi16;
    sad_epu8(a: M128i, b: M128i) -> M128i = _mm_sad_epu8;
    min_epi16(a: M128i, b: M128i) -> M128i = _mm_min_epi16;
    max_epi16(a: M128i, b: M128i) -> M128i = _mm_max_epi16;
    min_epu8(a: M128i, b: M128i) -> M128i = _mm_min_epu8;
    max_epu8(a: M128i, b: M128i) -> M128i = _mm_max_epu8;

    add_pd(a: M128d, b: M128d) -> M128d = _mm_add_pd;
    add_sd(a: M128d, b: M128d) -> M128d = _mm_add_sd;
    sub_pd(a: M128d, b: M128d) -> M128d = _mm_sub_pd;
    sub_sd(a: M128d, b: M128d) -> M128d = _mm_sub_sd;
    mul_pd(a: M128d, b: M128d) -> M128d = _mm_mul_pd;
    mul_sd(a: M128d, b: M128d) -> M128d = _mm_mul_sd;
    div_pd(a: M128d, b: M128d) -> M128d = _mm_div_pd;
    div_sd(a: M128d, b: M128d) -> M128d = _mm_div_sd;
    min_pd(a: M128d, b: M128d) -> M128d = _mm_min_pd;
    min_sd(a: M128d, b: M128d) -> M128d = _mm_min_sd;
    max_pd(a: M128d, b: M128d) -> M128d = _mm_max_pd;
    max_sd(a: M128d, b: M128d) -> M128d = _mm_max_sd;
    sqrt_pd(a: M128d) -> M128d = _mm_sqrt_pd;
    sqrt_sd(a: M128d, b: M128d) -> M128d = _mm_sqrt_sd;
}

// --- Logical ---

native! {
    and_si128(a: M128i, b: M128i) -> M128i = _mm_and_si128;
    andnot_si128(a: M128i, b: M128i) -> M128i = _mm_andnot_si128;
    or_si128(a: M128i, b: M128i) -> M128i = _mm_or_si128;
    xor_si128(a: M128i, b: M128i) -> M128i = _mm_xor_si128;
    and_pd(a: M128d, b: M128d) -> M128d = _mm_and_pd;
    andnot_pd(a: M128d, b: M128d) -> M128d = _mm_andnot_pd;
    or_pd(a: M128d, b: M128d) -> M128d = _mm_or_pd;
    xor_pd(a: M128d, b: M128d) -> M128d = _mm_xor_pd;
}

// --- Compares ---

native! {
    cmpeq_epi8(a: M128i, b: M128i) -> M128i = _mm_cmpeq_epi8;
    cmpeq_epi16(a: M128i, b: M128i) -> M128i = _mm_cmpeq_epi16;
    cmpeq_epi32(a: M128i, b: M128i) -> M128i = _mm_cmpeq_epi32;
    cmplt_epi8(a: M128i, b: M128i) -> M128i = _mm_cmplt_epi8;
    cmplt_epi16(a: M128i, b: M128i) -> M128i = _mm_cmplt_epi16;
    cmplt_epi32(a: M128i, b: M128i) -> M128i = _mm_cmplt_epi32;
    cmpgt_epi8(a: M128i, b: M128i) -> M128i = _mm_cmpgt_epi8;
    cmpgt_epi16(a: M128i, b: M128i) -> M128i = _mm_cmpgt_epi16;
    cmpgt_epi32(a: M128i, b: M128i) -> M128i = _mm_cmpgt_epi32;

    cmpeq_pd(a: M128d, b: M128d) -> M128d = _mm_cmpeq_pd;
    cmpeq_sd(a: M128d, b: M128d) -> M128d = _mm_cmpeq_sd;
    cmpneq_pd(a: M128d, b: M128d) -> M128d = _mm_cmpneq_pd;
    cmpneq_sd(a: M128d, b: M128d) -> M128d = _mm_cmpneq_sd;
    cmplt_pd(a: M128d, b: M128d) -> M128d = _mm_cmplt_pd;
    cmplt_sd(a: M128d, b: M128d) -> M128d = _mm_cmplt_sd;
    cmple_pd(a: M128d, b: M128d) -> M128d = _mm_cmple_pd;
    cmple_sd(a: M128d, b: M128d) -> M128d = _mm_cmple_sd;
    cmpgt_pd(a: M128d, b: M128d) -> M128d = _mm_cmpgt_pd;
    cmpgt_sd(a: M128d, b: M128d) -> M128d = _mm_cmpgt_sd;
    cmpge_pd(a: M128d, b: M128d) -> M128d = _mm_cmpge_pd;
    cmpge_sd(a: M128d, b: M128d) -> M128d = _mm_cmpge_sd;
    cmpnlt_pd(a: M128d, b: M128d) -> M128d = _mm_cmpnlt_pd;
    cmpnlt_sd(a: M128d, b: M128d) -> M128d = _mm_cmpnlt_sd;
    cmpnle_pd(a: M128d, b: M128d) -> M128d = _mm_cmpnle_pd;
    cmpnle_sd(a: M128d, b: M128d) -> M128d = _mm_cmpnle_sd;
    cmpngt_pd(a: M128d, b: M128d) -> M128d = _mm_cmpngt_pd;
    cmpngt_sd(a: M128d, b: M128d) -> M128d = _mm_cmpngt_sd;
    cmpnge_pd(a: M128d, b: M128d) -> M128d = _mm_cmpnge_pd;
    cmpnge_sd(a: M128d, b: M128d) -> M128d = _mm_cmpnge_sd;
    cmpord_pd(a: M128d, b: M128d) -> M128d = _mm_cmpord_pd;
    cmpord_sd(a: M128d, b: M128d) -> M128d = _mm_cmpord_sd;
    cmpunord_pd(a: M128d, b: M128d) -> M128d = _mm_cmpunord_pd;
    cmpunord_sd(a: M128d, b: M128d) -> M128d = _mm_cmpunord_sd;

    comieq_sd(a: M128d, b: M128d) -> i32 = _mm_comieq_sd;
    comineq_sd(a: M128d, b: M128d) -> i32 = _mm_comineq_sd;
    comilt_sd(a: M128d, b: M128d) -> i32 = _mm_comilt_sd;
    comile_sd(a: M128d, b: M128d) -> i32 = _mm_comile_sd;
    comigt_sd(a: M128d, b: M128d) -> i32 = _mm_comigt_sd;
    comige_sd(a: M128d, b: M128d) -> i32 = _mm_comige_sd;
    ucomieq_sd(a: M128d, b: M128d) -> i32 = _mm_ucomieq_sd;
    ucomineq_sd(a: M128d, b: M128d) -> i32 = _mm_ucomineq_sd;
    ucomilt_sd(a: M128d, b: M128d) -> i32 = _mm_ucomilt_sd;
    ucomile_sd(a: M128d, b: M128d) -> i32 = _mm_ucomile_sd;
    ucomigt_sd(a: M128d, b: M128d) -> i32 = _mm_ucomigt_sd;
    ucomige_sd(a: M128d, b: M128d) -> i32 = _mm_ucomige_sd;
}

// --- Shifts ---

native! {
    sll_epi16(a: M128i, count: M128i) -> M128i = _mm_sll_epi16;
    sll_epi32(a: M128i, count: M128i) -> M128i = _mm_sll_epi32;
    sll_epi64(a: M128i, count: M128i) -> M128i = _mm_sll_epi64;
    srl_epi16(a: M128i, count: M128i) -> M128i = _mm_srl_epi16;
    srl_epi32(a: M128i, count: M128i) -> M128i = _mm_srl_epi32;
    srl_epi64(a: M128i, count: M128i) -> M128i = _mm_srl_epi64;
    sra_epi16(a: M128i, count: M128i) -> M128i = _mm_sra_epi16;
    sra_epi32(a: M128i, count: M128i) -> M128i = _mm_sra_epi32;
}

macro_rules! native_imm {
    ($($name:ident<$imm:ident>($($arg:ident: $ty:ty),*) -> $ret:ty = $intr:ident;)*) => {
        $(
            #[inline(always)]
            pub fn $name<const $imm: i32>($($arg: $ty),*) -> $ret {
                // SAFETY: see `native!`.
                unsafe { $intr::<$imm>($($arg.into()),*).into() }
            }
        )*
    };
}

native_imm! {
    slli_epi16<IMM8>(a: M128i) -> M128i = _mm_slli_epi16;
    slli_epi32<IMM8>(a: M128i) -> M128i = _mm_slli_epi32;
    slli_epi64<IMM8>(a: M128i) -> M128i = _mm_slli_epi64;
    srli_epi16<IMM8>(a: M128i) -> M128i = _mm_srli_epi16;
    srli_epi32<IMM8>(a: M128i) -> M128i = _mm_srli_epi32;
    srli_epi64<IMM8>(a: M128i) -> M128i = _mm_srli_epi64;
    srai_epi16<IMM8>(a: M128i) -> M128i = _mm_srai_epi16;
    srai_epi32<IMM8>(a: M128i) -> M128i = _mm_srai_epi32;
    bslli_si128<IMM8>(a: M128i) -> M128i = _mm_bslli_si128;
    bsrli_si128<IMM8>(a: M128i) -> M128i = _mm_bsrli_si128;
    slli_si128<IMM8>(a: M128i) -> M128i = _mm_slli_si128;
    srli_si128<IMM8>(a: M128i) -> M128i = _mm_srli_si128;
    shuffle_epi32<IMM8>(a: M128i) -> M128i = _mm_shuffle_epi32;
    shufflelo_epi16<IMM8>(a: M128i) -> M128i = _mm_shufflelo_epi16;
    shufflehi_epi16<IMM8>(a: M128i) -> M128i = _mm_shufflehi_epi16;
    shuffle_pd<MASK>(a: M128d, b: M128d) -> M128d = _mm_shuffle_pd;
    extract_epi16<IMM8>(a: M128i) -> i32 = _mm_extract_epi16;
    insert_epi16<IMM8>(a: M128i, i: i32) -> M128i = _mm_insert_epi16;
}

// Runtime counts go through the count-register forms, which already clamp.
// A negative count sign-extends into a huge 64-bit count.

macro_rules! native_dyn {
    ($($name:ident => $intr:ident;)*) => {
        $(
            #[inline(always)]
            pub fn $name(a: M128i, count: i32) -> M128i {
                // SAFETY: see `native!`.
                unsafe { $intr(a.into(), _mm_set_epi64x(0, i64::from(count))).into() }
            }
        )*
    };
}

native_dyn! {
    slli_epi16_dyn => _mm_sll_epi16;
    slli_epi32_dyn => _mm_sll_epi32;
    slli_epi64_dyn => _mm_sll_epi64;
    srli_epi16_dyn => _mm_srl_epi16;
    srli_epi32_dyn => _mm_srl_epi32;
    srli_epi64_dyn => _mm_srl_epi64;
    srai_epi16_dyn => _mm_sra_epi16;
    srai_epi32_dyn => _mm_sra_epi32;
}

// --- Conversions ---

native! {
    cvtepi32_pd(a: M128i) -> M128d = _mm_cvtepi32_pd;
    cvtepi32_ps(a: M128i) -> M128 = _mm_cvtepi32_ps;
    cvtpd_epi32(a: M128d) -> M128i = _mm_cvtpd_epi32;
    cvtpd_ps(a: M128d) -> M128 = _mm_cvtpd_ps;
    cvtps_epi32(a: M128) -> M128i = _mm_cvtps_epi32;
    cvtps_pd(a: M128) -> M128d = _mm_cvtps_pd;
    cvtsd_f64(a: M128d) -> f64 = _mm_cvtsd_f64;
    cvtsd_si32(a: M128d) -> i32 = _mm_cvtsd_si32;
    cvtsd_ss(a: M128, b: M128d) -> M128 = _mm_cvtsd_ss;
    cvtsi128_si32(a: M128i) -> i32 = _mm_cvtsi128_si32;
    cvtsi32_sd(a: M128d, b: i32) -> M128d = _mm_cvtsi32_sd;
    cvtsi32_si128(a: i32) -> M128i = _mm_cvtsi32_si128;
    cvtss_sd(a: M128d, b: M128) -> M128d = _mm_cvtss_sd;
    cvttpd_epi32(a: M128d) -> M128i = _mm_cvttpd_epi32;
    cvttps_epi32(a: M128) -> M128i = _mm_cvttps_epi32;
    cvttsd_si32(a: M128d) -> i32 = _mm_cvttsd_si32;
}

// 64-bit general register forms are only encodable on x86_64; elsewhere
// the fallback bodies stay in place.
#[cfg(target_arch = "x86_64")]
native! {
    cvtsd_si64(a: M128d) -> i64 = _mm_cvtsd_si64;
    cvttsd_si64(a: M128d) -> i64 = _mm_cvttsd_si64;
    cvtsi128_si64(a: M128i) -> i64 = _mm_cvtsi128_si64;
    cvtsi64_si128(a: i64) -> M128i = _mm_cvtsi64_si128;
    cvtsi64_sd(a: M128d, b: i64) -> M128d = _mm_cvtsi64_sd;
}

// --- Pack / unpack / lane moves ---

native! {
    packs_epi16(a: M128i, b: M128i) -> M128i = _mm_packs_epi16;
    packs_epi32(a: M128i, b: M128i) -> M128i = _mm_packs_epi32;
    packus_epi16(a: M128i, b: M128i) -> M128i = _mm_packus_epi16;
    unpacklo_epi8(a: M128i, b: M128i) -> M128i = _mm_unpacklo_epi8;
    unpacklo_epi16(a: M128i, b: M128i) -> M128i = _mm_unpacklo_epi16;
    unpacklo_epi32(a: M128i, b: M128i) -> M128i = _mm_unpacklo_epi32;
    unpacklo_epi64(a: M128i, b: M128i) -> M128i = _mm_unpacklo_epi64;
    unpackhi_epi8(a: M128i, b: M128i) -> M128i = _mm_unpackhi_epi8;
    unpackhi_epi16(a: M128i, b: M128i) -> M128i = _mm_unpackhi_epi16;
    unpackhi_epi32(a: M128i, b: M128i) -> M128i = _mm_unpackhi_epi32;
    unpackhi_epi64(a: M128i, b: M128i) -> M128i = _mm_unpackhi_epi64;
    unpacklo_pd(a: M128d, b: M128d) -> M128d = _mm_unpacklo_pd;
    unpackhi_pd(a: M128d, b: M128d) -> M128d = _mm_unpackhi_pd;
    move_epi64(a: M128i) -> M128i = _mm_move_epi64;
    move_sd(a: M128d, b: M128d) -> M128d = _mm_move_sd;
    movemask_epi8(a: M128i) -> i32 = _mm_movemask_epi8;
    movemask_pd(a: M128d) -> i32 = _mm_movemask_pd;
}

// --- Loads / stores ---
//
// References carry the alignment and length contracts, so the raw pointers
// handed to the intrinsics are always valid for the bytes they touch.

#[inline(always)]
pub fn load_si128(mem: &M128i) -> M128i {
    // SAFETY: `M128i` is 16-byte aligned and 16 bytes long.
    unsafe { _mm_load_si128(mem as *const M128i as *const __m128i).into() }
}

#[inline(always)]
pub fn loadu_si128(mem: &[u8; 16]) -> M128i {
    // SAFETY: 16 readable bytes; the instruction has no alignment requirement.
    unsafe { _mm_loadu_si128(mem.as_ptr() as *const __m128i).into() }
}

#[inline(always)]
pub fn loadl_epi64(mem: &[u8; 8]) -> M128i {
    // SAFETY: movq reads exactly 8 bytes, unaligned.
    unsafe { _mm_loadl_epi64(mem.as_ptr() as *const __m128i).into() }
}

#[inline(always)]
pub fn load_pd(mem: &Align16<[f64; 2]>) -> M128d {
    // SAFETY: `Align16` guarantees the 16-byte alignment movapd needs.
    unsafe { _mm_load_pd(mem.0.as_ptr()).into() }
}

#[inline(always)]
pub fn loadu_pd(mem: &[f64; 2]) -> M128d {
    // SAFETY: 16 readable bytes.
    unsafe { _mm_loadu_pd(mem.as_ptr()).into() }
}

#[inline(always)]
pub fn load_sd(mem: &f64) -> M128d {
    // SAFETY: reads one f64.
    unsafe { _mm_load_sd(mem).into() }
}

#[inline(always)]
pub fn load1_pd(mem: &f64) -> M128d {
    // SAFETY: reads one f64.
    unsafe { _mm_load1_pd(mem).into() }
}

#[inline(always)]
pub fn load_pd1(mem: &f64) -> M128d {
    load1_pd(mem)
}

#[inline(always)]
pub fn loadh_pd(a: M128d, mem: &f64) -> M128d {
    // SAFETY: reads one f64.
    unsafe { _mm_loadh_pd(a.into(), mem).into() }
}

#[inline(always)]
pub fn loadl_pd(a: M128d, mem: &f64) -> M128d {
    // SAFETY: reads one f64.
    unsafe { _mm_loadl_pd(a.into(), mem).into() }
}

#[inline(always)]
pub fn store_si128(mem: &mut M128i, a: M128i) {
    // SAFETY: `M128i` is 16-byte aligned and 16 bytes long.
    unsafe { _mm_store_si128(mem as *mut M128i as *mut __m128i, a.into()) }
}

#[inline(always)]
pub fn storeu_si128(mem: &mut [u8; 16], a: M128i) {
    // SAFETY: 16 writable bytes.
    unsafe { _mm_storeu_si128(mem.as_mut_ptr() as *mut __m128i, a.into()) }
}

#[inline(always)]
pub fn storel_epi64(mem: &mut [u8; 8], a: M128i) {
    // SAFETY: movq writes exactly 8 bytes, unaligned.
    unsafe { _mm_storel_epi64(mem.as_mut_ptr() as *mut __m128i, a.into()) }
}

#[inline(always)]
pub fn store_pd(mem: &mut Align16<[f64; 2]>, a: M128d) {
    // SAFETY: `Align16` guarantees 16-byte alignment.
    unsafe { _mm_store_pd(mem.0.as_mut_ptr(), a.into()) }
}

#[inline(always)]
pub fn storeu_pd(mem: &mut [f64; 2], a: M128d) {
    // SAFETY: 16 writable bytes.
    unsafe { _mm_storeu_pd(mem.as_mut_ptr(), a.into()) }
}

#[inline(always)]
pub fn store_sd(mem: &mut f64, a: M128d) {
    // SAFETY: writes one f64.
    unsafe { _mm_store_sd(mem, a.into()) }
}

#[inline(always)]
pub fn store1_pd(mem: &mut Align16<[f64; 2]>, a: M128d) {
    // SAFETY: `Align16` guarantees 16-byte alignment.
    unsafe { _mm_store1_pd(mem.0.as_mut_ptr(), a.into()) }
}

#[inline(always)]
pub fn store_pd1(mem: &mut Align16<[f64; 2]>, a: M128d) {
    store1_pd(mem, a);
}

#[inline(always)]
pub fn storeh_pd(mem: &mut f64, a: M128d) {
    // SAFETY: writes one f64.
    unsafe { _mm_storeh_pd(mem, a.into()) }
}

#[inline(always)]
pub fn storel_pd(mem: &mut f64, a: M128d) {
    // SAFETY: writes one f64.
    unsafe { _mm_storel_pd(mem, a.into()) }
}

#[inline(always)]
pub fn storer_pd(mem: &mut Align16<[f64; 2]>, a: M128d) {
    // SAFETY: `Align16` guarantees 16-byte alignment.
    unsafe { _mm_storer_pd(mem.0.as_mut_ptr(), a.into()) }
}
