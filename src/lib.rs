// src/lib.rs

//! Portable SSE2 and SSE4.1 operations.
//!
//! Every operation exists under one name in [`sse2`] or [`sse41`] and
//! behaves identically on every target. The build script picks, per
//! family, whether the name is backed by the x86 instruction, by an
//! equivalent AArch64 NEON sequence, or by a portable scalar body; see
//! [`capability`] for what a given build chose.
//!
//! ```
//! use sse_compat::sse2;
//!
//! let a = sse2::set1_epi8(127);
//! let b = sse2::set1_epi8(1);
//! assert_eq!(sse2::adds_epi8(a, b), sse2::set1_epi8(127));
//! assert_eq!(sse2::add_epi8(a, b).as_i8()[0], -128);
//! ```

pub mod capability;
pub mod register;
pub mod reinterpret;
pub mod sse2;
pub mod sse41;

pub(crate) mod immediate;
pub(crate) mod numeric;

pub use register::{Align16, M128, M128d, M128i, M64};
pub use reinterpret::Reinterpret;
