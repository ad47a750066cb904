//! Fixed-width words built by concatenating smaller fields.
//!
//! # Examples
//!
//! Fields are written least significant first; every `|` places its right
//! hand side above everything written so far.
//!
//! ```rust
//! use bit_builder::Word;
//!
//! let word = Word::<4>::new(0xD) | Word::<4>::new(0xA) | Word::<4>::new(0xE) | Word::<4>::new(0xD);
//! assert_eq!(word.value(), 0xDEAD);
//! assert_eq!(word.width(), 16);
//! ```
//!
//! Widths add up in the type, so a word that would no longer fit in 64 bits
//! does not build:
//!
//! ```compile_fail
//! use bit_builder::Word;
//!
//! let _ = Word::<40>::new(0) | Word::<40>::new(0);
//! ```
//!
//! Static bit positions are checked against the width the same way:
//!
//! ```compile_fail
//! use bit_builder::Word;
//! use bit_builder::typenum::U4;
//!
//! let _ = Word::<4>::new(0x8).bit::<U4>();
//! ```

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::{Add, BitOr};

use bytemuck::{Pod, Zeroable};
use typenum::{B1, IsLess, NonZero, Sum, U1, Unsigned};

use crate::parity::parity_reference;
use crate::{BitBuilderError, Capacity, Storage, StorageOf, Width, flag};

/// A `W`-bit value stored in the smallest integer able to hold it.
///
/// Only the low `W` bits are meaningful. Nothing clears the bits above `W`
/// inside the storage: a raw value passed to [`BitWord::new`] keeps whatever
/// it had there, and equality, hashing and parity see those bits too.
#[repr(transparent)]
pub struct BitWord<W: Width> {
    value: StorageOf<W>,
    width: PhantomData<W>,
}

/// `BitWord` spelled with a plain integer width.
pub type Word<const N: usize> = BitWord<typenum::generic_const_mappings::U<N>>;

#[inline(always)]
const fn low_mask(bits: u32) -> u64 {
    if bits >= 64 { u64::MAX } else { (1u64 << bits) - 1 }
}

impl<W: Width> BitWord<W> {
    /// Wraps `value` without masking it to `W` bits.
    pub const fn new(value: StorageOf<W>) -> Self {
        Self {
            value,
            width: PhantomData,
        }
    }

    /// Wraps `value`, rejecting it when bits at or above `W` are set.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_builder::{BitBuilderError, Word};
    ///
    /// assert!(Word::<4>::try_new(0xF).is_ok());
    /// assert_eq!(
    ///     Word::<4>::try_new(0x1F),
    ///     Err(BitBuilderError::ValueOverflow { value: 0x1F, width: 4 })
    /// );
    /// ```
    pub fn try_new(value: StorageOf<W>) -> Result<Self, BitBuilderError> {
        let wide = value.widen();
        if wide & !low_mask(W::U32) != 0 {
            return Err(BitBuilderError::ValueOverflow {
                value: wide,
                width: W::U32,
            });
        }
        Ok(Self::new(value))
    }

    pub fn zero() -> Self {
        Self::new(Default::default())
    }

    #[inline(always)]
    fn from_wide(value: u64) -> Self {
        Self::new(<StorageOf<W> as Storage>::truncate(value))
    }

    /// Logical width in bits.
    pub fn width(self) -> u32 {
        W::U32
    }

    /// Size of the backing storage.
    pub fn capacity(self) -> Capacity {
        <StorageOf<W> as Storage>::CAPACITY
    }

    /// The raw backing value.
    pub fn value(self) -> StorageOf<W> {
        self.value
    }

    pub fn to_u64(self) -> u64 {
        self.value.widen()
    }

    /// Places `rhs` directly above the `W` bits of `self`.
    ///
    /// Both values are widened to the storage of the result before shifting,
    /// so `rhs` is never cut off by the narrower storage of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_builder::Word;
    ///
    /// let word = Word::<4>::new(0xD)
    ///     .append(Word::<4>::new(0xA))
    ///     .append(Word::<8>::new(0xDE));
    /// assert_eq!(word.value(), 0xDEAD);
    /// ```
    pub fn append<N>(self, rhs: BitWord<N>) -> BitWord<Sum<W, N>>
    where
        N: Width,
        W: Add<N>,
        Sum<W, N>: Width,
    {
        let high = rhs.to_u64().checked_shl(W::U32).unwrap_or(0);
        BitWord::from_wide(self.to_u64() | high)
    }

    /// Appends the complement of bit `W - 1`, the last bit written.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_builder::Word;
    ///
    /// assert_eq!(Word::<4>::new(0x7).append_complement_of_top_bit().value(), 0x17);
    /// assert_eq!(Word::<4>::new(0x8).append_complement_of_top_bit().value(), 0x08);
    /// ```
    ///
    /// A zero-width word has no top bit:
    ///
    /// ```compile_fail
    /// use bit_builder::Word;
    ///
    /// let _ = Word::<0>::new(0).append_complement_of_top_bit();
    /// ```
    pub fn append_complement_of_top_bit(self) -> BitWord<Sum<W, U1>>
    where
        W: NonZero + Add<U1>,
        Sum<W, U1>: Width,
    {
        let top = self.bit_at(W::U32 - 1);
        self.append(flag(!top.is_set()))
    }

    /// Bit at the static position `P`, counted from the least significant bit.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_builder::Word;
    /// use bit_builder::typenum::{U1, U2};
    ///
    /// let word = Word::<4>::new(4);
    /// assert_eq!(word.bit::<U2>().value(), 1);
    /// assert_eq!(word.bit::<U1>().value(), 0);
    /// ```
    pub fn bit<P>(self) -> BitWord<U1>
    where
        P: Unsigned + IsLess<W, Output = B1>,
    {
        self.bit_at(P::U32)
    }

    /// Bit at a runtime position, counted from the least significant bit.
    ///
    /// The position is not checked against `W`: positions inside the storage
    /// but above `W` read whatever is stored there, and positions past 63
    /// read as zero. See [`BitWord::try_bit_at`] for a checked version.
    pub fn bit_at(self, position: u32) -> BitWord<U1> {
        let shifted = self.to_u64().checked_shr(position).unwrap_or(0);
        flag(shifted & 1 == 1)
    }

    pub fn try_bit_at(self, position: u32) -> Result<BitWord<U1>, BitBuilderError> {
        if position >= W::U32 {
            return Err(BitBuilderError::PositionOutOfRange {
                position,
                width: W::U32,
            });
        }
        Ok(self.bit_at(position))
    }

    /// Bit that makes the total number of set bits even once appended.
    ///
    /// Counts every bit of the storage, not only the low `W`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_builder::Word;
    ///
    /// assert_eq!(Word::<16>::new(0xDEAD).even_parity_bit().value(), 1);
    /// assert_eq!(Word::<16>::new(0xDEAC).even_parity_bit().value(), 0);
    /// ```
    pub fn even_parity_bit(self) -> BitWord<U1> {
        flag(self.value.odd_parity())
    }

    /// [`BitWord::even_parity_bit`] computed with the bit-by-bit reference algorithm.
    pub fn even_parity_bit_reference(self) -> BitWord<U1> {
        flag(parity_reference(self.to_u64()))
    }

    /// Appends [`BitWord::even_parity_bit`] above the word.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_builder::Word;
    ///
    /// let word = Word::<16>::new(0xDEAD).append_parity_bit();
    /// assert_eq!(word.width(), 17);
    /// assert_eq!(word.value(), 0x1_DEAD);
    /// ```
    pub fn append_parity_bit(self) -> BitWord<Sum<W, U1>>
    where
        W: Add<U1>,
        Sum<W, U1>: Width,
    {
        self.append(self.even_parity_bit())
    }
}

impl BitWord<U1> {
    pub const fn is_set(self) -> bool {
        self.value & 1 == 1
    }
}

impl<W, N> BitOr<BitWord<N>> for BitWord<W>
where
    W: Width + Add<N>,
    N: Width,
    Sum<W, N>: Width,
{
    type Output = BitWord<Sum<W, N>>;

    /// Same as [`BitWord::append`].
    fn bitor(self, rhs: BitWord<N>) -> Self::Output {
        self.append(rhs)
    }
}

impl<W: Width> Clone for BitWord<W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W: Width> Copy for BitWord<W> {}

impl<W: Width> PartialEq for BitWord<W> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<W: Width> Eq for BitWord<W> {}

impl<W: Width> Hash for BitWord<W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<W: Width> Default for BitWord<W> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<W: Width> fmt::Debug for BitWord<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitWord<{}>({:#x})", W::U32, self.value)
    }
}

/// Exactly `W` binary digits of the low `W` bits.
impl<W: Width> fmt::Binary for BitWord<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if W::USIZE == 0 {
            return Ok(());
        }
        let bits = self.to_u64() & low_mask(W::U32);
        write!(f, "{:0width$b}", bits, width = W::USIZE)
    }
}

impl<W: Width> fmt::LowerHex for BitWord<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.value, f)
    }
}

impl<W: Width> fmt::UpperHex for BitWord<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.value, f)
    }
}

impl<W: Width> From<BitWord<W>> for u64 {
    fn from(word: BitWord<W>) -> u64 {
        word.to_u64()
    }
}

impl From<bool> for BitWord<U1> {
    fn from(yes: bool) -> Self {
        flag(yes)
    }
}

// Safety: BitWord is a transparent wrapper around a storage integer
unsafe impl<W: Width> Zeroable for BitWord<W> {}

unsafe impl<W: Width> Pod for BitWord<W> {}
