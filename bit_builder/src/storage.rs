//! Native unsigned integers that can back a [`BitWord`](crate::BitWord).

use core::fmt;
use core::hash::Hash;

use bytemuck::Pod;

use crate::Capacity;
use crate::parity;

/// A storage integer: `u8`, `u16`, `u32` or `u64`.
///
/// This trait cannot be implemented outside this crate.
pub trait Storage:
    Copy
    + Eq
    + Ord
    + Hash
    + Default
    + fmt::Debug
    + fmt::Binary
    + fmt::LowerHex
    + fmt::UpperHex
    + Pod
    + Send
    + Sync
    + seal::Sealed
{
    const BITS: u32;
    const CAPACITY: Capacity;

    /// Lossless conversion to the widest storage.
    fn widen(self) -> u64;

    /// Keeps the low `Self::BITS` bits of `value`.
    fn truncate(value: u64) -> Self;

    /// `true` when an odd number of bits is set, using the SWAR fold for this width.
    fn odd_parity(self) -> bool;
}

macro_rules! storage {
    ($($t:ty => $cap:expr, $parity:path;)+) => { $(
        impl Storage for $t {
            const BITS: u32 = <$t>::BITS;
            const CAPACITY: Capacity = $cap;

            #[inline(always)]
            fn widen(self) -> u64 {
                self as u64
            }

            #[inline(always)]
            fn truncate(value: u64) -> Self {
                value as $t
            }

            #[inline(always)]
            fn odd_parity(self) -> bool {
                $parity(self)
            }
        }

        impl seal::Sealed for $t {}

        const _: () = assert!(<$t as Storage>::CAPACITY.bits() == <$t as Storage>::BITS);
    )+ };
}

storage! {
    u8 => Capacity::U8, parity::parity_u8;
    u16 => Capacity::U16, parity::parity_u16;
    u32 => Capacity::U32, parity::parity_u32;
    u64 => Capacity::U64, parity::parity_u64;
}

#[doc(hidden)]
mod seal {
    #[doc(hidden)]
    pub trait Sealed {}
}
