//! Type-level bit widths.
//!
//! [`Width`] maps a `typenum` unsigned integer to the storage chosen by
//! [`Capacity::select`]. It is implemented for `U0` through `U64` only, so a
//! wider word is a type error rather than a runtime failure:
//!
//! ```compile_fail
//! use bit_builder::Word;
//!
//! let too_wide = Word::<65>::new(0);
//! ```

use typenum::Unsigned;
use typenum::consts::*;

use crate::{Capacity, Storage};

/// A bit count that fits in one of the supported storage integers.
pub trait Width: Unsigned + Copy + Default + Send + Sync + 'static {
    /// Smallest storage holding `Self::U32` bits.
    type Storage: Storage;
}

/// Backing storage of a `W`-bit word.
pub type StorageOf<W> = <W as Width>::Storage;

/// Selector result for a type-level width.
pub const fn capacity_of<W: Width>() -> Capacity {
    <W::Storage as Storage>::CAPACITY
}

macro_rules! widths {
    ($($storage:ty => [$($n:ident)+])+) => { $($(
        impl Width for $n {
            type Storage = $storage;
        }

        const _: () = assert!(match Capacity::select(<$n as Unsigned>::U32) {
            Some(cap) => cap.bits() == <$storage as Storage>::BITS,
            None => false,
        });
    )+)+ };
}

widths! {
    u8 => [U0 U1 U2 U3 U4 U5 U6 U7 U8]
    u16 => [U9 U10 U11 U12 U13 U14 U15 U16]
    u32 => [
        U17 U18 U19 U20 U21 U22 U23 U24
        U25 U26 U27 U28 U29 U30 U31 U32
    ]
    u64 => [
        U33 U34 U35 U36 U37 U38 U39 U40
        U41 U42 U43 U44 U45 U46 U47 U48
        U49 U50 U51 U52 U53 U54 U55 U56
        U57 U58 U59 U60 U61 U62 U63 U64
    ]
}
