use typenum::U1;

use crate::BitWord;

/// Single-bit word: `1` for `true`, `0` for `false`.
///
/// # Examples
///
/// ```rust
/// use bit_builder::flag;
///
/// let word = flag(true) | flag(false) | flag(true);
/// assert_eq!(word.value(), 0b101);
/// ```
pub const fn flag(yes: bool) -> BitWord<U1> {
    BitWord::new(yes as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_bool_to_bit() {
        assert_eq!(flag(true).value(), 1);
        assert_eq!(flag(false).value(), 0);
        assert!(flag(true).is_set());
        assert_eq!(flag(true).width(), 1);
    }

    #[test]
    fn usable_in_const_context() {
        const ON: BitWord<U1> = flag(true);
        assert!(ON.is_set());
    }
}
