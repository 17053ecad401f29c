//! Saturating and averaging arithmetic at the lane boundaries.

use sse_compat::sse2;

#[test]
fn test_adds_epi8_examples() {
    let cases = [(127i8, 1i8, 127i8), (-128, -1, -128), (100, 20, 120), (-100, 50, -50)];
    for (a, b, want) in cases {
        let got = sse2::adds_epi8(sse2::set1_epi8(a), sse2::set1_epi8(b));
        assert_eq!(got, sse2::set1_epi8(want), "adds_epi8({a}, {b})");
    }
}

#[test]
fn test_saturation_is_per_lane() {
    // Lane 0 overflows, lane 1 underflows, the rest stay in range.
    let a = sse2::setr_epi16(i16::MAX, i16::MIN, 5, -5, 0, 0, 1000, -1000);
    let b = sse2::setr_epi16(1, -1, 5, -5, 0, 0, 1000, -1000);
    let got = sse2::adds_epi16(a, b);
    assert_eq!(got.as_i16(), &[i16::MAX, i16::MIN, 10, -10, 0, 0, 2000, -2000]);

    let got = sse2::subs_epi16(a, sse2::setr_epi16(-1, 1, 0, 0, 0, 0, 0, 0));
    assert_eq!(got.as_i16()[..2], [i16::MAX, i16::MIN]);
}

#[test]
fn test_unsigned_saturation() {
    let got = sse2::adds_epu8(sse2::set1_epi8(-6), sse2::set1_epi8(10));
    assert_eq!(got.as_u8(), &[0xff; 16]);

    let got = sse2::subs_epu8(sse2::set1_epi8(3), sse2::set1_epi8(4));
    assert_eq!(got, sse2::setzero_si128());

    let got = sse2::adds_epu16(sse2::set1_epi16(-2), sse2::set1_epi16(1));
    assert_eq!(got.as_u16(), &[0xffff; 8]);

    let got = sse2::subs_epu16(sse2::set1_epi16(1), sse2::set1_epi16(2));
    assert_eq!(got.as_u16(), &[0; 8]);
}

#[test]
fn test_plain_add_wraps() {
    let got = sse2::add_epi8(sse2::set1_epi8(127), sse2::set1_epi8(1));
    assert_eq!(got.as_i8(), &[-128; 16]);
}

#[test]
fn test_avg_rounds_up() {
    let got = sse2::avg_epu8(sse2::set1_epi8(1), sse2::set1_epi8(2));
    assert_eq!(got.as_u8(), &[2; 16]);

    // No overflow in the intermediate.
    let got = sse2::avg_epu8(sse2::set1_epi8(-1), sse2::set1_epi8(-1));
    assert_eq!(got.as_u8(), &[0xff; 16]);

    let got = sse2::avg_epu16(sse2::set1_epi16(-1), sse2::set1_epi16(0));
    assert_eq!(got.as_u16(), &[0x8000; 8]);
}

#[test]
fn test_packs_saturate() {
    let a = sse2::setr_epi16(300, -300, 127, -128, 0, 1, -1, 255);
    let got = sse2::packs_epi16(a, a);
    assert_eq!(got.as_i8()[..8], [127, -128, 127, -128, 0, 1, -1, 127]);

    let got = sse2::packus_epi16(a, a);
    assert_eq!(got.as_u8()[..8], [255, 0, 127, 0, 0, 1, 0, 255]);

    let a = sse2::setr_epi32(70000, -70000, 5, -5);
    let got = sse2::packs_epi32(a, a);
    assert_eq!(got.as_i16()[..4], [i16::MAX, i16::MIN, 5, -5]);
}

#[test]
fn test_multiplies() {
    let a = sse2::set1_epi16(-2);
    let b = sse2::set1_epi16(0x4000);
    assert_eq!(sse2::mullo_epi16(a, b).as_i16(), &[-0x8000; 8]);
    assert_eq!(sse2::mulhi_epi16(a, b).as_i16(), &[-1; 8]);
    assert_eq!(sse2::mulhi_epu16(a, b).as_u16(), &[0x3fff; 8]);

    let a = sse2::setr_epi32(-1, 7, 3, 7);
    let got = sse2::mul_epu32(a, a);
    assert_eq!(got.as_u64(), &[0xffff_fffe_0000_0001, 9]);

    let a = sse2::setr_epi16(1, 2, 3, 4, -1, -1, i16::MIN, i16::MIN);
    let got = sse2::madd_epi16(a, a);
    assert_eq!(got.as_i32(), &[5, 25, 2, i32::MIN]);
}

#[test]
fn test_sad_sums_each_half() {
    let a = sse2::setr_epi8(0, 10, 0, 0, 0, 0, 0, 0, -1, 0, 0, 0, 0, 0, 0, 0);
    let b = sse2::setr_epi8(3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1);
    let got = sse2::sad_epu8(a, b);
    assert_eq!(got.as_u64(), &[13, 256]);
}
