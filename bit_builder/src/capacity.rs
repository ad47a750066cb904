//! Width selection: the smallest native unsigned integer able to hold a bit count.
//!
//! ```rust
//! use bit_builder::Capacity;
//!
//! assert_eq!(Capacity::select(12), Some(Capacity::U16));
//! assert_eq!(Capacity::select(64), Some(Capacity::U64));
//! assert_eq!(Capacity::select(65), None);
//! ```

use crate::BitBuilderError;

/// Bit size of one of the supported storage integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u32)]
pub enum Capacity {
    U8 = 8,
    U16 = 16,
    U32 = 32,
    U64 = 64,
}

impl Capacity {
    /// All capacities, narrowest first.
    pub const ALL: [Capacity; 4] = [Capacity::U8, Capacity::U16, Capacity::U32, Capacity::U64];

    /// Widest bit count any storage can hold.
    pub const MAX_BITS: u32 = 64;

    /// Returns the smallest capacity holding `bits` bits, or `None` above 64.
    pub const fn select(bits: u32) -> Option<Capacity> {
        match bits {
            0..=8 => Some(Capacity::U8),
            9..=16 => Some(Capacity::U16),
            17..=32 => Some(Capacity::U32),
            33..=64 => Some(Capacity::U64),
            _ => None,
        }
    }

    /// Same lookup as [`Capacity::select`], reporting unsupported widths as an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_builder::{BitBuilderError, Capacity};
    ///
    /// assert_eq!(Capacity::for_bits(24), Ok(Capacity::U32));
    /// assert_eq!(Capacity::for_bits(65), Err(BitBuilderError::UnsupportedWidth(65)));
    /// ```
    pub fn for_bits(bits: u32) -> Result<Capacity, BitBuilderError> {
        Self::select(bits).ok_or(BitBuilderError::UnsupportedWidth(bits))
    }

    pub const fn bits(self) -> u32 {
        self as u32
    }

    pub const fn bytes(self) -> usize {
        self as usize / 8
    }
}
