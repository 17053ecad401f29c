// src/sse41/mod.rs

//! SSE4.1 operations.
//!
//! Selected independently of SSE2 through the `sse41_native` and
//! `sse41_neon` cfgs. SSE4.1 never resolves to a faster path than SSE2.

pub mod fallback;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[allow(dead_code)]
mod native;

#[cfg(target_arch = "aarch64")]
#[allow(dead_code)]
mod neon;

#[cfg(sse41_native)]
use native as backend;

#[cfg(sse41_neon)]
use neon as backend;

#[cfg(not(any(sse41_native, sse41_neon)))]
use fallback as backend;

pub use backend::*;
