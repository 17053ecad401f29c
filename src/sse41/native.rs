// src/sse41/native.rs

//! SSE4.1 bodies mapped onto `core::arch` intrinsics.

#![allow(unused_unsafe)]

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

// Every fallback body is shadowed on x86_64; the glob keeps the 64-bit lane
// forms available on 32-bit x86.
#[allow(unused_imports)]
pub use super::fallback::*;

use crate::register::{M128, M128d, M128i};

macro_rules! native {
    ($($name:ident($($arg:ident: $ty:ty),*) -> $ret:ty = $intr:ident;)*) => {
        $(
            #[inline(always)]
            pub fn $name($($arg: $ty),*) -> $ret {
                // SAFETY: this module is only selected when SSE4.1 resolved to native.
                unsafe { $intr($($arg.into()),*).into() }
            }
        )*
    };
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

native! {
    blendv_epi8(a: M128i, b: M128i, mask: M128i) -> M128i = _mm_blendv_epi8;
    blendv_ps(a: M128, b: M128, mask: M128) -> M128 = _mm_blendv_ps;
    blendv_pd(a: M128d, b: M128d, mask: M128d) -> M128d = _mm_blendv_pd;

    min_epi8(a: M128i, b: M128i) -> M128i = _mm_min_epi8;
    max_epi8(a: M128i, b: M128i) -> M128i = _mm_max_epi8;
    min_epi32(a: M128i, b: M128i) -> M128i = _mm_min_epi32;
    max_epi32(a: M128i, b: M128i) -> M128i = _mm_max_epi32;
    min_epu16(a: M128i, b: M128i) -> M128i = _mm_min_epu16;
    max_epu16(a: M128i, b: M128i) -> M128i = _mm_max_epu16;
    min_epu32(a: M128i, b: M128i) -> M128i = _mm_min_epu32;
    max_epu32(a: M128i, b: M128i) -> M128i = _mm_max_epu32;
    mullo_epi32(a: M128i, b: M128i) -> M128i = _mm_mullo_epi32;
    mul_epi32(a: M128i, b: M128i) -> M128i = _mm_mul_epi32;
    cmpeq_epi64(a: M128i, b: M128i) -> M128i = _mm_cmpeq_epi64;
    packus_epi32(a: M128i, b: M128i) -> M128i = _mm_packus_epi32;

    cvtepi8_epi16(a: M128i) -> M128i = _mm_cvtepi8_epi16;
    cvtepi8_epi32(a: M128i) -> M128i = _mm_cvtepi8_epi32;
    cvtepi8_epi64(a: M128i) -> M128i = _mm_cvtepi8_epi64;
    cvtepi16_epi32(a: M128i) -> M128i = _mm_cvtepi16_epi32;
    cvtepi16_epi64(a: M128i) -> M128i = _mm_cvtepi16_epi64;
    cvtepi32_epi64(a: M128i) -> M128i = _mm_cvtepi32_epi64;
    cvtepu8_epi16(a: M128i) -> M128i = _mm_cvtepu8_epi16;
    cvtepu8_epi32(a: M128i) -> M128i = _mm_cvtepu8_epi32;
    cvtepu8_epi64(a: M128i) -> M128i = _mm_cvtepu8_epi64;
    cvtepu16_epi32(a: M128i) -> M128i = _mm_cvtepu16_epi32;
    cvtepu16_epi64(a: M128i) -> M128i = _mm_cvtepu16_epi64;
    cvtepu32_epi64(a: M128i) -> M128i = _mm_cvtepu32_epi64;

    floor_pd(a: M128d) -> M128d = _mm_floor_pd;
    ceil_pd(a: M128d) -> M128d = _mm_ceil_pd;
    floor_sd(a: M128d, b: M128d) -> M128d = _mm_floor_sd;
    ceil_sd(a: M128d, b: M128d) -> M128d = _mm_ceil_sd;

    testz_si128(a: M128i, mask: M128i) -> i32 = _mm_testz_si128;
    testc_si128(a: M128i, mask: M128i) -> i32 = _mm_testc_si128;
    testnzc_si128(a: M128i, mask: M128i) -> i32 = _mm_testnzc_si128;
}

native_imm! {
    blend_epi16<IMM8>(a: M128i, b: M128i) -> M128i = _mm_blend_epi16;
    blend_pd<IMM2>(a: M128d, b: M128d) -> M128d = _mm_blend_pd;
    extract_epi8<IMM8>(a: M128i) -> i32 = _mm_extract_epi8;
    extract_epi32<IMM8>(a: M128i) -> i32 = _mm_extract_epi32;
    insert_epi8<IMM8>(a: M128i, i: i32) -> M128i = _mm_insert_epi8;
    insert_epi32<IMM8>(a: M128i, i: i32) -> M128i = _mm_insert_epi32;
}

// The 64-bit lane forms exist only on x86_64.
#[cfg(target_arch = "x86_64")]
native_imm! {
    extract_epi64<IMM8>(a: M128i) -> i64 = _mm_extract_epi64;
    insert_epi64<IMM8>(a: M128i, i: i64) -> M128i = _mm_insert_epi64;
}
