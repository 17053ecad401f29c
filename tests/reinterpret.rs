//! Views and casts never convert values.

use sse_compat::{sse2, M128, M128d, M128i, M64, Reinterpret};

#[test]
fn test_write_through_one_view_read_through_another() {
    let mut r = M128i::from_u8([0; 16]);
    r.as_u16_mut()[1] = 0xbeef;
    let bytes = r.as_u8();
    let expected = 0xbeefu16.to_ne_bytes();
    assert_eq!(bytes[2..4], expected);
    assert!(bytes[..2].iter().chain(&bytes[4..]).all(|&b| b == 0));

    r.as_i64_mut()[1] = -1;
    assert_eq!(r.as_u32()[2..], [u32::MAX; 2]);
    assert_eq!(r.as_u8()[2..4], expected);
}

#[test]
fn test_float_casts_keep_bits() {
    let d = sse2::setr_pd(f64::NAN, -0.0);
    let i = sse2::castpd_si128(d);
    assert_eq!(i.as_u64(), &[f64::NAN.to_bits(), (-0.0f64).to_bits()]);
    assert_eq!(sse2::castsi128_pd(i), d);

    let s: M128 = sse2::castpd_ps(d);
    assert_eq!(sse2::castps_pd(s), d);
    assert_eq!(sse2::castps_si128(s), i);
    assert_eq!(sse2::castsi128_ps(i), s);
}

#[test]
fn test_generic_reinterpret() {
    let i = sse2::set1_epi32(0x3f80_0000);
    let s: M128 = i.reinterpret();
    assert_eq!(s.as_f32(), &[1.0; 4]);

    let d: M128d = s.reinterpret();
    let back: M128i = d.reinterpret();
    assert_eq!(back, i);

    let m = M64::from_i32([7, -7]);
    let raw: u64 = m.reinterpret();
    assert_eq!(M64::from_u64([raw]), m);
}

#[test]
fn test_mmx_forms() {
    let a = M64::from_u32([u32::MAX, 9]);
    let b = M64::from_u32([3, 9]);
    assert_eq!(sse2::mul_su32(a, b).as_u64(), &[3 * u64::from(u32::MAX)]);

    let r = sse2::set_epi64x(5, 6);
    let low = sse2::movepi64_pi64(r);
    assert_eq!(low.as_i64(), &[6]);
    assert_eq!(sse2::movpi64_epi64(low).as_i64(), &[6, 0]);
    assert_eq!(sse2::set_epi64(M64::from_i64([1]), low).as_i64(), &[6, 1]);
    assert_eq!(sse2::setr_epi64(M64::from_i64([1]), low).as_i64(), &[1, 6]);
    assert_eq!(sse2::set1_epi64(low).as_i64(), &[6, 6]);

    let d = sse2::setr_pd(1.5, -2.5);
    assert_eq!(sse2::cvtpd_pi32(d).as_i32(), &[2, -2]);
    assert_eq!(sse2::cvttpd_pi32(d).as_i32(), &[1, -2]);
    assert_eq!(sse2::cvtpi32_pd(M64::from_i32([-4, 4])).as_f64(), &[-4.0, 4.0]);
}
