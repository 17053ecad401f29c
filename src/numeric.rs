//! Scalar building blocks for the fallback bodies.
//!
//! Everything here reproduces a hardware rule that differs from Rust's
//! default behaviour: compare results are all-ones masks, saturation clamps
//! instead of wrapping, and float to integer conversions return the x86
//! "integer indefinite" value (`MIN` of the destination) for NaN and
//! out-of-range inputs instead of saturating like `as` does.

use core::array;

// --- Lane-wise helpers ---

#[inline(always)]
pub(crate) fn map<T: Copy, U, const N: usize>(a: [T; N], f: impl Fn(T) -> U) -> [U; N] {
    array::from_fn(|i| f(a[i]))
}

#[inline(always)]
pub(crate) fn zip<T: Copy, U, const N: usize>(
    a: [T; N],
    b: [T; N],
    f: impl Fn(T, T) -> U,
) -> [U; N] {
    array::from_fn(|i| f(a[i], b[i]))
}

/// All-ones / all-zeros lane value from a predicate.
pub(crate) trait LaneMask: Sized {
    fn mask(set: bool) -> Self;
}

macro_rules! lane_mask {
    ($($t:ty),*) => {
        $(
            impl LaneMask for $t {
                #[inline(always)]
                fn mask(set: bool) -> Self {
                    (0 as $t).wrapping_sub(set as $t)
                }
            }
        )*
    };
}

lane_mask!(u8, u16, u32, u64, i8, i16, i32, i64);

#[inline(always)]
pub(crate) fn mask<T: LaneMask>(set: bool) -> T {
    T::mask(set)
}

// --- Saturation ---

#[inline(always)]
pub(crate) fn saturate_i8(v: i16) -> i8 {
    v.clamp(i8::MIN as i16, i8::MAX as i16) as i8
}

#[inline(always)]
pub(crate) fn saturate_i16(v: i32) -> i16 {
    v.clamp(i16::MIN as i32, i16::MAX as i32) as i16
}

#[inline(always)]
pub(crate) fn saturate_u8(v: i16) -> u8 {
    v.clamp(0, u8::MAX as i16) as u8
}

#[inline(always)]
pub(crate) fn saturate_u16(v: i32) -> u16 {
    v.clamp(0, u16::MAX as i32) as u16
}

// --- Float to integer ---

const I32_LOW: f64 = i32::MIN as f64;
const I32_HIGH: f64 = i32::MAX as f64;
// 2^63 is the first value that does not fit; i64::MAX is not representable as f64.
const I64_LOW: f64 = i64::MIN as f64;
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

#[inline(always)]
fn to_i32_or_indefinite(v: f64) -> i32 {
    if (I32_LOW..=I32_HIGH).contains(&v) {
        v as i32
    } else {
        i32::MIN
    }
}

#[inline(always)]
fn to_i64_or_indefinite(v: f64) -> i64 {
    if v >= I64_LOW && v < I64_BOUND {
        v as i64
    } else {
        i64::MIN
    }
}

/// `cvtsd2si` with the default rounding mode (nearest, ties to even).
#[inline(always)]
pub(crate) fn f64_to_i32_round(v: f64) -> i32 {
    to_i32_or_indefinite(v.round_ties_even())
}

/// `cvttsd2si`: truncation toward zero.
#[inline(always)]
pub(crate) fn f64_to_i32_trunc(v: f64) -> i32 {
    to_i32_or_indefinite(v.trunc())
}

#[inline(always)]
pub(crate) fn f64_to_i64_round(v: f64) -> i64 {
    to_i64_or_indefinite(v.round_ties_even())
}

#[inline(always)]
pub(crate) fn f64_to_i64_trunc(v: f64) -> i64 {
    to_i64_or_indefinite(v.trunc())
}

#[inline(always)]
pub(crate) fn f32_to_i32_round(v: f32) -> i32 {
    to_i32_or_indefinite(f64::from(v.round_ties_even()))
}

#[inline(always)]
pub(crate) fn f32_to_i32_trunc(v: f32) -> i32 {
    to_i32_or_indefinite(f64::from(v.trunc()))
}

// --- Shift counts ---

/// Shift count taken from the low 64 bits of a count register, clamped to
/// `width` so that "everything shifted out" is a single case.
#[inline(always)]
pub(crate) fn clamp_count(count: u64, width: u32) -> u32 {
    if count > u64::from(width) {
        width
    } else {
        count as u32
    }
}

/// Logical left shift where a count of `width` or more clears the lane.
macro_rules! shl_or_zero {
    ($v:expr, $n:expr) => {
        $v.checked_shl($n).unwrap_or(0)
    };
}

/// Logical right shift where a count of `width` or more clears the lane.
macro_rules! shr_or_zero {
    ($v:expr, $n:expr) => {
        $v.checked_shr($n).unwrap_or(0)
    };
}

pub(crate) use {shl_or_zero, shr_or_zero};
