//! Element and whole-register shifts, including out-of-range counts.

use sse_compat::{sse2, M128i};

fn ones() -> M128i {
    sse2::set1_epi32(-1)
}

#[test]
fn test_byte_shift_past_register_is_zero() {
    assert_eq!(sse2::bslli_si128::<17>(ones()), sse2::setzero_si128());
    assert_eq!(sse2::bsrli_si128::<16>(ones()), sse2::setzero_si128());
    assert_eq!(sse2::slli_si128_dyn(ones(), 255), sse2::setzero_si128());
    assert_eq!(sse2::srli_si128_dyn(ones(), -1), sse2::setzero_si128());
}

#[test]
fn test_byte_shift_crosses_the_half_boundary() {
    let a = sse2::set_epi64x(0, 0x0102_0304_0506_0708);
    let got = sse2::bslli_si128::<3>(a);
    assert_eq!(got.as_u64(), &[0x0405_0607_0800_0000, 0x0000_0000_0001_0203]);

    let got = sse2::bsrli_si128::<3>(got);
    assert_eq!(got, a);
}

#[test]
fn test_byte_shift_by_zero_is_identity() {
    let a = sse2::setr_epi32(1, 2, 3, 4);
    assert_eq!(sse2::slli_si128::<0>(a), a);
    assert_eq!(sse2::srli_si128::<0>(a), a);
}

#[test]
fn test_logical_shift_count_at_lane_width_clears() {
    let a = ones();
    assert_eq!(sse2::slli_epi16::<16>(a), sse2::setzero_si128());
    assert_eq!(sse2::srli_epi32::<32>(a), sse2::setzero_si128());
    assert_eq!(sse2::srli_epi64::<255>(a), sse2::setzero_si128());
    assert_eq!(sse2::slli_epi64::<63>(a).as_u64(), &[1 << 63; 2]);
}

#[test]
fn test_variable_count_uses_all_low_64_bits() {
    let a = sse2::set1_epi16(0x00f0);

    // Count of 2^32 + 1 is out of range, not 1.
    let count = sse2::set_epi64x(0, 0x1_0000_0001);
    assert_eq!(sse2::sll_epi16(a, count), sse2::setzero_si128());

    // The upper 64 bits of the count register are ignored.
    let count = sse2::set_epi64x(-1, 4);
    assert_eq!(sse2::sll_epi16(a, count).as_u16(), &[0x0f00; 8]);
    assert_eq!(sse2::srl_epi16(a, count).as_u16(), &[0x000f; 8]);
}

#[test]
fn test_arithmetic_shift_fills_with_sign() {
    let a = sse2::setr_epi32(-8, 8, i32::MIN, i32::MAX);
    assert_eq!(sse2::srai_epi32::<2>(a).as_i32(), &[-2, 2, i32::MIN >> 2, i32::MAX >> 2]);
    assert_eq!(sse2::srai_epi32::<200>(a).as_i32(), &[-1, 0, -1, 0]);

    let count = sse2::set_epi64x(0, 1 << 40);
    assert_eq!(sse2::sra_epi16(sse2::set1_epi16(-3), count).as_i16(), &[-1; 8]);
    assert_eq!(sse2::srai_epi16_dyn(sse2::set1_epi16(3), -5).as_i16(), &[0; 8]);
}

#[test]
fn test_negative_runtime_count_is_out_of_range() {
    let a = sse2::set1_epi32(1);
    assert_eq!(sse2::slli_epi32_dyn(a, -1), sse2::setzero_si128());
    assert_eq!(sse2::slli_epi32_dyn(a, 3).as_i32(), &[8; 4]);
}

#[test]
fn test_shuffles() {
    let a = sse2::setr_epi32(10, 11, 12, 13);
    assert_eq!(sse2::shuffle_epi32::<0x1b>(a).as_i32(), &[13, 12, 11, 10]);
    assert_eq!(sse2::shuffle_epi32::<0x00>(a).as_i32(), &[10; 4]);

    let a = sse2::setr_epi16(0, 1, 2, 3, 4, 5, 6, 7);
    assert_eq!(sse2::shufflelo_epi16::<0x1b>(a).as_i16(), &[3, 2, 1, 0, 4, 5, 6, 7]);
    assert_eq!(sse2::shufflehi_epi16::<0x1b>(a).as_i16(), &[0, 1, 2, 3, 7, 6, 5, 4]);

    let a = sse2::setr_pd(1.0, 2.0);
    let b = sse2::setr_pd(3.0, 4.0);
    assert_eq!(sse2::shuffle_pd::<0b01>(a, b).as_f64(), &[2.0, 3.0]);
    assert_eq!(sse2::shuffle_pd::<0b10>(a, b).as_f64(), &[1.0, 4.0]);
}
