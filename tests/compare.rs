//! Compares produce full-width lane masks; float compares follow the
//! hardware's NaN rules.

use sse_compat::{sse2, M128d};

const NAN: f64 = f64::NAN;

fn mask_bits(r: M128d) -> [u64; 2] {
    *r.as_u64()
}

#[test]
fn test_integer_compares_are_masks() {
    let a = sse2::setr_epi32(1, -5, 7, i32::MIN);
    let b = sse2::setr_epi32(1, 5, -7, i32::MAX);
    assert_eq!(sse2::cmpeq_epi32(a, b).as_i32(), &[-1, 0, 0, 0]);
    assert_eq!(sse2::cmplt_epi32(a, b).as_i32(), &[0, -1, 0, -1]);
    assert_eq!(sse2::cmpgt_epi32(a, b).as_i32(), &[0, 0, -1, 0]);

    // Signed byte compare: 0x80 is less than 0x7f.
    let got = sse2::cmplt_epi8(sse2::set1_epi8(i8::MIN), sse2::set1_epi8(i8::MAX));
    assert_eq!(got.as_u8(), &[0xff; 16]);
}

#[test]
fn test_float_compares_with_nan() {
    let a = sse2::setr_pd(NAN, 1.0);
    let b = sse2::setr_pd(1.0, 2.0);

    assert_eq!(mask_bits(sse2::cmplt_pd(a, b)), [0, !0]);
    assert_eq!(mask_bits(sse2::cmpnlt_pd(a, b)), [!0, 0]);
    assert_eq!(mask_bits(sse2::cmpge_pd(a, b)), [0, 0]);
    assert_eq!(mask_bits(sse2::cmpnge_pd(a, b)), [!0, !0]);
    assert_eq!(mask_bits(sse2::cmpeq_pd(a, a)), [0, !0]);
    assert_eq!(mask_bits(sse2::cmpneq_pd(a, a)), [!0, 0]);
    assert_eq!(mask_bits(sse2::cmpord_pd(a, b)), [0, !0]);
    assert_eq!(mask_bits(sse2::cmpunord_pd(a, b)), [!0, 0]);
}

#[test]
fn test_scalar_compare_keeps_upper_lane() {
    let a = sse2::setr_pd(1.0, 42.0);
    let b = sse2::setr_pd(2.0, -1.0);
    let got = sse2::cmplt_sd(a, b);
    assert_eq!(got.as_u64()[0], !0);
    assert_eq!(got.as_f64()[1], 42.0);
}

#[test]
fn test_comi_with_nan() {
    let nan = sse2::set_sd(NAN);
    let one = sse2::set_sd(1.0);
    assert_eq!(sse2::comieq_sd(nan, one), 0);
    assert_eq!(sse2::comilt_sd(nan, one), 0);
    assert_eq!(sse2::comige_sd(nan, one), 0);
    assert_eq!(sse2::comineq_sd(nan, one), 1);
    assert_eq!(sse2::ucomieq_sd(nan, nan), 0);
    assert_eq!(sse2::ucomineq_sd(nan, nan), 1);

    assert_eq!(sse2::comile_sd(one, one), 1);
    assert_eq!(sse2::comigt_sd(one, one), 0);
}

#[test]
fn test_min_max_return_second_operand_on_ties_and_nan() {
    let a = sse2::setr_pd(NAN, -0.0);
    let b = sse2::setr_pd(1.0, 0.0);
    let got = sse2::min_pd(a, b);
    assert_eq!(got.as_f64()[0], 1.0);
    assert_eq!(got.as_f64()[1].to_bits(), 0.0f64.to_bits());

    let got = sse2::max_pd(b, a);
    assert!(got.as_f64()[0].is_nan());
    assert_eq!(got.as_f64()[1].to_bits(), (-0.0f64).to_bits());
}

#[test]
fn test_movemask_gathers_top_bits() {
    let a = sse2::setr_epi8(-1, 0, 0, -128, 127, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1);
    assert_eq!(sse2::movemask_epi8(a), 0b1000_0000_0000_1001);
    assert_eq!(sse2::movemask_pd(sse2::setr_pd(-1.0, 1.0)), 0b01);
    assert_eq!(sse2::movemask_pd(sse2::setr_pd(0.0, -0.0)), 0b10);
}

#[test]
fn test_logical_ops() {
    let a = sse2::set1_epi8(0b1100);
    let b = sse2::set1_epi8(0b1010);
    assert_eq!(sse2::and_si128(a, b), sse2::set1_epi8(0b1000));
    assert_eq!(sse2::or_si128(a, b), sse2::set1_epi8(0b1110));
    assert_eq!(sse2::xor_si128(a, b), sse2::set1_epi8(0b0110));
    assert_eq!(sse2::andnot_si128(a, b), sse2::set1_epi8(0b0010));

    let sign = sse2::set1_pd(-0.0);
    let x = sse2::setr_pd(-3.0, 4.0);
    assert_eq!(sse2::andnot_pd(sign, x).as_f64(), &[3.0, 4.0]);
    assert_eq!(sse2::xor_pd(sign, x).as_f64(), &[3.0, -4.0]);
}
