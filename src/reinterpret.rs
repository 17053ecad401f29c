//! Zero-copy casts between register kinds.
//!
//! A cast keeps every bit and converts nothing; the hardware casts compile
//! to no instruction at all, so there is a single body for every mode.

use crate::register::{M128, M128d, M128i, M64};
use bytemuck::Pod;

/// Bit-for-bit reinterpretation between registers of the same size.
///
/// Size equality is checked at compile time.
pub trait Reinterpret: Pod {
    #[inline(always)]
    fn reinterpret<T: Pod>(self) -> T {
        const { assert!(core::mem::size_of::<Self>() == core::mem::size_of::<T>()) };
        bytemuck::cast(self)
    }
}

impl Reinterpret for M128i {}
impl Reinterpret for M128d {}
impl Reinterpret for M128 {}
impl Reinterpret for M64 {}

#[inline(always)]
pub fn castpd_ps(a: M128d) -> M128 {
    a.reinterpret()
}

#[inline(always)]
pub fn castpd_si128(a: M128d) -> M128i {
    a.reinterpret()
}

#[inline(always)]
pub fn castps_pd(a: M128) -> M128d {
    a.reinterpret()
}

#[inline(always)]
pub fn castps_si128(a: M128) -> M128i {
    a.reinterpret()
}

#[inline(always)]
pub fn castsi128_pd(a: M128i) -> M128d {
    a.reinterpret()
}

#[inline(always)]
pub fn castsi128_ps(a: M128i) -> M128 {
    a.reinterpret()
}
