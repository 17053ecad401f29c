// src/sse2/mod.rs

//! SSE2 operations.
//!
//! Every operation has one public name here. Which body sits behind it is
//! fixed at build time by the capability cfgs:
//!
//! - `sse2_native`: [`core::arch`] SSE2 intrinsics,
//! - `sse2_neon`: AArch64 NEON where it is bit-identical (generated NaN
//!   payloads aside),
//! - neither: the portable [`fallback`] bodies.
//!
//! The non-fallback modules re-export the fallback and shadow what they
//! implement, so an operation without a faster body silently uses the
//! portable one.

pub mod fallback;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[allow(dead_code)]
mod native;

#[cfg(target_arch = "aarch64")]
#[allow(dead_code)]
mod neon;

#[cfg(sse2_native)]
use native as backend;

#[cfg(sse2_neon)]
use neon as backend;

#[cfg(not(any(sse2_native, sse2_neon)))]
use fallback as backend;

pub use backend::*;

pub use crate::reinterpret::{
    castpd_ps, castpd_si128, castps_pd, castps_si128, castsi128_pd, castsi128_ps,
};
