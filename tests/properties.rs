//! Randomized properties of the public operations.

use proptest::prelude::*;
use sse_compat::{sse2, Align16, M128d, M128i};

fn any_m128i() -> impl Strategy<Value = M128i> {
    any::<[u8; 16]>().prop_map(M128i::from_bytes)
}

proptest! {
    #[test]
    fn saturating_add_matches_wide_arithmetic(a in any::<[i8; 16]>(), b in any::<[i8; 16]>()) {
        let got = sse2::adds_epi8(M128i::from_i8(a), M128i::from_i8(b));
        let sub = sse2::subs_epi8(M128i::from_i8(a), M128i::from_i8(b));
        for i in 0..16 {
            let sum = i16::from(a[i]) + i16::from(b[i]);
            let diff = i16::from(a[i]) - i16::from(b[i]);
            prop_assert_eq!(i16::from(got.as_i8()[i]), sum.clamp(-128, 127));
            prop_assert_eq!(i16::from(sub.as_i8()[i]), diff.clamp(-128, 127));
        }
    }

    #[test]
    fn saturating_16_bit_forms_stay_in_range(a in any::<[u16; 8]>(), b in any::<[u16; 8]>()) {
        let (x, y) = (M128i::from_u16(a), M128i::from_u16(b));
        let adds = sse2::adds_epi16(x, y);
        let addu = sse2::adds_epu16(x, y);
        let subu = sse2::subs_epu16(x, y);
        for i in 0..8 {
            let (sa, sb) = (a[i] as i16, b[i] as i16);
            prop_assert_eq!(
                i32::from(adds.as_i16()[i]),
                (i32::from(sa) + i32::from(sb)).clamp(-32768, 32767)
            );
            prop_assert_eq!(u32::from(addu.as_u16()[i]), (u32::from(a[i]) + u32::from(b[i])).min(0xffff));
            prop_assert_eq!(subu.as_u16()[i], a[i].saturating_sub(b[i]));
        }
    }

    #[test]
    fn average_is_commutative_and_idempotent(a in any_m128i(), b in any_m128i()) {
        prop_assert_eq!(sse2::avg_epu8(a, b), sse2::avg_epu8(b, a));
        prop_assert_eq!(sse2::avg_epu16(a, b), sse2::avg_epu16(b, a));
        prop_assert_eq!(sse2::avg_epu8(a, a), a);
        prop_assert_eq!(sse2::avg_epu16(a, a), a);
    }

    #[test]
    fn byte_shift_round_trip_clears_shifted_in_bytes(a in any_m128i(), k in 0i32..20) {
        let there = sse2::bslli_si128_dyn(a, k);
        let back = sse2::bsrli_si128_dyn(there, k);
        let k = k as usize;
        for i in 0..16 {
            let want = if i + k < 16 { a.as_u8()[i] } else { 0 };
            prop_assert_eq!(back.as_u8()[i], want, "byte {}", i);
        }
        if k >= 16 {
            prop_assert_eq!(there, M128i::ZERO);
        }
    }

    #[test]
    fn arithmetic_shift_of_minus_one_is_fixed(count in 1i32..300) {
        let ones = sse2::set1_epi32(-1);
        prop_assert_eq!(sse2::srai_epi16_dyn(ones, count), ones);
        prop_assert_eq!(sse2::srai_epi32_dyn(ones, count), ones);
        let count = sse2::cvtsi32_si128(count);
        prop_assert_eq!(sse2::sra_epi16(ones, count), ones);
        prop_assert_eq!(sse2::sra_epi32(ones, count), ones);
    }

    #[test]
    fn movemask_reads_one_bit_per_byte(bits in any::<u16>()) {
        let lanes: [u8; 16] = core::array::from_fn(|i| if (bits >> i) & 1 == 1 { 0xff } else { 0 });
        prop_assert_eq!(sse2::movemask_epi8(M128i::from_u8(lanes)), i32::from(bits));
        prop_assert_eq!(sse2::cmpeq_epi8(M128i::from_u8(lanes), sse2::set1_epi8(-1)), M128i::from_u8(lanes));
    }

    #[test]
    fn store_then_load_is_identity(a in any_m128i()) {
        let mut bytes = [0u8; 16];
        sse2::storeu_si128(&mut bytes, a);
        prop_assert_eq!(sse2::loadu_si128(&bytes), a);

        let mut slot = M128i::ZERO;
        sse2::store_si128(&mut slot, a);
        prop_assert_eq!(sse2::load_si128(&slot), a);

        let d = M128d::from_bytes(a.to_bytes());
        let mut mem = Align16([0.0; 2]);
        sse2::store_pd(&mut mem, d);
        prop_assert_eq!(sse2::load_pd(&mem), d);
        let mut raw = [0.0; 2];
        sse2::storeu_pd(&mut raw, d);
        prop_assert_eq!(sse2::loadu_pd(&raw), d);
    }

    #[test]
    fn compare_masks_are_complementary(a in any_m128i(), b in any_m128i()) {
        let lt = sse2::cmplt_epi16(a, b);
        let gt = sse2::cmpgt_epi16(a, b);
        let eq = sse2::cmpeq_epi16(a, b);
        let all = sse2::or_si128(sse2::or_si128(lt, gt), eq);
        prop_assert_eq!(all, sse2::set1_epi16(-1));
        prop_assert_eq!(sse2::and_si128(lt, gt), M128i::ZERO);
    }
}
