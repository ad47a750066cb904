//! Parity of the number of set bits in a storage integer.
//!
//! [`parity_reference`] works for any width and is the oracle; the
//! `parity_uN` functions fold the register onto its low nibble and look the
//! result up in [`NIBBLE_PARITY`]. Every function returns `true` when the
//! number of set bits is odd.
//!
//! ```rust
//! use bit_builder::parity::{parity_reference, parity_u16};
//!
//! assert!(parity_u16(0xDEAD));
//! assert!(!parity_u16(0xDEAC));
//! assert_eq!(parity_u16(0xBEEF), parity_reference(0xBEEF));
//! ```

/// Bit `i` is the parity of `i` taken as a 4-bit number.
pub const NIBBLE_PARITY: u16 = 0x6996;

#[inline(always)]
const fn nibble_parity(nibble: u32) -> bool {
    (NIBBLE_PARITY >> (nibble & 0xf)) & 1 == 1
}

/// Clears the lowest set bit until nothing is left, flipping a flag each time.
pub const fn parity_reference(mut value: u64) -> bool {
    let mut odd = false;
    while value != 0 {
        value &= value - 1;
        odd = !odd;
    }
    odd
}

#[inline]
pub const fn parity_u8(value: u8) -> bool {
    let mut v = value as u32;
    v ^= v >> 4;
    nibble_parity(v)
}

#[inline]
pub const fn parity_u16(value: u16) -> bool {
    let mut v = value as u32;
    v ^= v >> 8;
    v ^= v >> 4;
    nibble_parity(v)
}

#[inline]
pub const fn parity_u32(value: u32) -> bool {
    let mut v = value;
    v ^= v >> 16;
    v ^= v >> 8;
    v ^= v >> 4;
    nibble_parity(v)
}

#[inline]
pub const fn parity_u64(value: u64) -> bool {
    let mut v = value;
    v ^= v >> 32;
    v ^= v >> 16;
    v ^= v >> 8;
    v ^= v >> 4;
    nibble_parity(v as u32)
}
