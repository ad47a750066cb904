// tests/proptest.rs

use bit_builder::parity::{parity_reference, parity_u16, parity_u32, parity_u64, parity_u8};
use bit_builder::typenum::U1;
use bit_builder::{BitBuilderError, BitWord, Capacity, Word, flag};
use proptest::prelude::*;

//
// -----------------------------------------------------------------------------
// Helper Functions
// -----------------------------------------------------------------------------

/// Values that fit in `bits` bits of a u64
fn value_for_bits(bits: u32) -> impl Strategy<Value = u64> {
    let max = if bits == 64 { u64::MAX } else { (1u64 << bits) - 1 };
    0..=max
}

//
// -----------------------------------------------------------------------------
// Parity: fast variants against the reference
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_parity_u16_matches_reference(v in any::<u16>()) {
        prop_assert_eq!(parity_u16(v), parity_reference(v as u64));
    }

    #[test]
    fn prop_parity_u32_matches_reference(v in any::<u32>()) {
        prop_assert_eq!(parity_u32(v), parity_reference(v as u64));
    }

    #[test]
    fn prop_parity_u64_matches_reference(v in any::<u64>()) {
        prop_assert_eq!(parity_u64(v), parity_reference(v));
    }

    #[test]
    fn prop_parity_is_popcount_mod_2(v in any::<u64>()) {
        prop_assert_eq!(parity_reference(v), v.count_ones() % 2 == 1);
    }

    #[test]
    fn prop_even_parity_bit_agrees_for_every_storage(
        a in any::<u8>(),
        b in any::<u16>(),
        c in any::<u32>(),
        d in any::<u64>()
    ) {
        prop_assert_eq!(Word::<8>::new(a).even_parity_bit(), Word::<8>::new(a).even_parity_bit_reference());
        prop_assert_eq!(Word::<16>::new(b).even_parity_bit(), Word::<16>::new(b).even_parity_bit_reference());
        prop_assert_eq!(Word::<32>::new(c).even_parity_bit(), Word::<32>::new(c).even_parity_bit_reference());
        prop_assert_eq!(Word::<64>::new(d).even_parity_bit(), Word::<64>::new(d).even_parity_bit_reference());
        prop_assert_eq!(parity_u8(a), parity_reference(a as u64));
    }

    #[test]
    fn prop_appended_parity_is_even(v in value_for_bits(31)) {
        let word = Word::<31>::new(v as u32).append_parity_bit();
        prop_assert_eq!(word.width(), 32);
        prop_assert_eq!(word.value().count_ones() % 2, 0);
        prop_assert_eq!(word.bit_at(31), Word::<31>::new(v as u32).even_parity_bit());
    }
}

//
// -----------------------------------------------------------------------------
// Concatenation
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_concat_places_rhs_above_lhs(
        a in value_for_bits(5),
        b in value_for_bits(11)
    ) {
        let word = Word::<5>::new(a as u8) | Word::<11>::new(b as u16);
        prop_assert_eq!(word.to_u64(), a | (b << 5));
        prop_assert_eq!(word.capacity(), Capacity::U16);
    }

    #[test]
    fn prop_concat_is_associative(
        a in value_for_bits(7),
        b in value_for_bits(13),
        c in value_for_bits(29)
    ) {
        let a = Word::<7>::new(a as u8);
        let b = Word::<13>::new(b as u16);
        let c = Word::<29>::new(c as u32);

        let left = (a | b) | c;
        let right = a | (b | c);
        prop_assert_eq!(left, right);
        prop_assert_eq!(left.width(), 49);
    }

    #[test]
    fn prop_fields_read_back_bit_by_bit(
        a in value_for_bits(9),
        b in any::<bool>(),
        c in value_for_bits(22)
    ) {
        let word = Word::<9>::new(a as u16) | flag(b) | Word::<22>::new(c as u32);
        let expected = a | ((b as u64) << 9) | (c << 10);
        for position in 0..32 {
            let bit = word.try_bit_at(position).unwrap();
            prop_assert_eq!(bit.is_set(), (expected >> position) & 1 == 1);
        }
        prop_assert_eq!(
            word.try_bit_at(32),
            Err(BitBuilderError::PositionOutOfRange { position: 32, width: 32 })
        );
    }

    #[test]
    fn prop_flags_build_the_same_word_as_bits(bits in prop::collection::vec(any::<bool>(), 4)) {
        let word = flag(bits[0]) | flag(bits[1]) | flag(bits[2]) | flag(bits[3]);
        let expected = bits
            .iter()
            .enumerate()
            .fold(0u8, |acc, (i, &b)| acc | ((b as u8) << i));
        prop_assert_eq!(word.value(), expected);
    }
}

//
// -----------------------------------------------------------------------------
// Single-bit operations
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_complement_of_top_bit(v in value_for_bits(20)) {
        let word = Word::<20>::new(v as u32);
        let extended = word.append_complement_of_top_bit();
        let top = (v >> 19) & 1;

        prop_assert_eq!(extended.width(), 21);
        prop_assert_eq!(extended.to_u64(), v | ((top ^ 1) << 20));
        prop_assert_ne!(extended.bit_at(20), extended.bit_at(19));
    }

    #[test]
    fn prop_checked_constructor_accepts_exactly_fitting_values(v in any::<u16>()) {
        let result = Word::<12>::try_new(v);
        if v < (1 << 12) {
            prop_assert_eq!(result.map(|w| w.value()), Ok(v));
        } else {
            prop_assert_eq!(
                result,
                Err(BitBuilderError::ValueOverflow { value: v as u64, width: 12 })
            );
        }
    }

    #[test]
    fn prop_from_bool_matches_flag(b in any::<bool>()) {
        prop_assert_eq!(BitWord::<U1>::from(b), flag(b));
    }
}
