//! Loads and stores touch exactly their byte range.

use sse_compat::{sse2, Align16, M128i};

const GUARD: f64 = -1234.5;

#[test]
fn test_unaligned_round_trip() {
    let a = sse2::setr_epi8(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15);
    let mut buf = [0xaau8; 17];
    let window: &mut [u8; 16] = (&mut buf[1..]).try_into().unwrap();
    sse2::storeu_si128(window, a);
    assert_eq!(buf[0], 0xaa);
    let window: &[u8; 16] = (&buf[1..]).try_into().unwrap();
    assert_eq!(sse2::loadu_si128(window), a);
}

#[test]
fn test_aligned_round_trip() {
    let a = sse2::set_epi64x(-1, 0x0123_4567_89ab_cdef);
    let mut slot = M128i::ZERO;
    sse2::store_si128(&mut slot, a);
    assert_eq!(sse2::load_si128(&slot), a);

    let d = sse2::setr_pd(f64::NAN, -0.0);
    let mut mem = Align16([0.0; 2]);
    sse2::store_pd(&mut mem, d);
    assert_eq!(sse2::load_pd(&mem), d);
}

#[test]
fn test_half_register_forms() {
    let a = sse2::setr_epi8(1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16);
    let mut half = [0u8; 8];
    sse2::storel_epi64(&mut half, a);
    assert_eq!(half, [1, 2, 3, 4, 5, 6, 7, 8]);

    let got = sse2::loadl_epi64(&half);
    assert_eq!(got.as_u64()[1], 0);
    assert_eq!(got.as_u8()[..8], half);
}

#[test]
fn test_scalar_lane_stores_leave_neighbours() {
    let d = sse2::setr_pd(1.0, 2.0);
    let mut mem = [GUARD; 3];
    sse2::store_sd(&mut mem[1], d);
    assert_eq!(mem, [GUARD, 1.0, GUARD]);
    sse2::storeh_pd(&mut mem[0], d);
    assert_eq!(mem, [2.0, 1.0, GUARD]);
    sse2::storel_pd(&mut mem[2], d);
    assert_eq!(mem, [2.0, 1.0, 1.0]);
}

#[test]
fn test_scalar_lane_loads() {
    let x = 5.0;
    assert_eq!(sse2::load_sd(&x).as_f64(), &[5.0, 0.0]);
    assert_eq!(sse2::load1_pd(&x).as_f64(), &[5.0, 5.0]);
    assert_eq!(sse2::load_pd1(&x).as_f64(), &[5.0, 5.0]);

    let a = sse2::setr_pd(1.0, 2.0);
    assert_eq!(sse2::loadh_pd(a, &x).as_f64(), &[1.0, 5.0]);
    assert_eq!(sse2::loadl_pd(a, &x).as_f64(), &[5.0, 2.0]);
    assert_eq!(sse2::loadu_pd(&[3.0, 4.0]).as_f64(), &[3.0, 4.0]);
}

#[test]
fn test_broadcast_and_reversed_stores() {
    let d = sse2::setr_pd(1.0, 2.0);
    let mut mem = Align16([0.0; 2]);

    sse2::storer_pd(&mut mem, d);
    assert_eq!(mem.0, [2.0, 1.0]);
    sse2::store1_pd(&mut mem, d);
    assert_eq!(mem.0, [1.0, 1.0]);
    sse2::store_pd1(&mut mem, sse2::set_sd(9.0));
    assert_eq!(mem.0, [9.0, 9.0]);

    let mut out = [0.0; 2];
    sse2::storeu_pd(&mut out, d);
    assert_eq!(out, [1.0, 2.0]);
}

#[test]
fn test_set_orders() {
    assert_eq!(sse2::set_epi32(3, 2, 1, 0), sse2::setr_epi32(0, 1, 2, 3));
    assert_eq!(sse2::set_epi16(7, 6, 5, 4, 3, 2, 1, 0).as_i16(), &[0, 1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(sse2::set_pd(2.0, 1.0), sse2::setr_pd(1.0, 2.0));
    assert_eq!(sse2::set_epu32(u32::MAX, 0, 0, 1).as_u32(), &[1, 0, 0, u32::MAX]);
    assert_eq!(sse2::set_epu64x(1, 2).as_u64(), &[2, 1]);
    assert_eq!(sse2::set_sd(4.0).as_f64(), &[4.0, 0.0]);
    assert_eq!(sse2::set_pd1(4.0), sse2::set1_pd(4.0));
    assert_eq!(sse2::setzero_pd().as_u64(), &[0, 0]);
}

#[test]
fn test_unpack_interleaves() {
    let a = sse2::setr_epi32(0, 1, 2, 3);
    let b = sse2::setr_epi32(10, 11, 12, 13);
    assert_eq!(sse2::unpacklo_epi32(a, b).as_i32(), &[0, 10, 1, 11]);
    assert_eq!(sse2::unpackhi_epi32(a, b).as_i32(), &[2, 12, 3, 13]);
    assert_eq!(sse2::unpacklo_epi64(a, b).as_i32(), &[0, 1, 10, 11]);

    let a = sse2::setr_pd(1.0, 2.0);
    let b = sse2::setr_pd(3.0, 4.0);
    assert_eq!(sse2::unpackhi_pd(a, b).as_f64(), &[2.0, 4.0]);
}

#[test]
fn test_lane_access() {
    let a = sse2::setr_epi16(0, -1, 2, 3, 4, 5, 6, 7);
    assert_eq!(sse2::extract_epi16::<1>(a), 0xffff);
    let got = sse2::insert_epi16::<7>(a, 0x1_2345);
    assert_eq!(got.as_i16()[7], 0x2345);
    assert_eq!(got.as_i16()[..7], a.as_i16()[..7]);
}
