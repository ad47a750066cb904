//! # bit_builder
//!
//! A `no_std` compatible library for assembling binary words out of
//! fixed-width fields.
//!
//! Each field is a [`BitWord`] whose width is part of its type. Joining two
//! words with `|` places the right hand side above the left one and yields a
//! word whose width is the sum of both, stored in the smallest of `u8`, `u16`,
//! `u32` or `u64` that can hold it.
//!
//! ```rust
//! use bit_builder::{Word, flag};
//!
//! // 3-bit opcode, 1-bit flag, 12-bit operand
//! let packed = Word::<3>::new(0b101) | flag(true) | Word::<12>::new(0xABC);
//! assert_eq!(packed.width(), 16);
//! assert_eq!(packed.value(), 0xABCD);
//!
//! // Append an even parity bit for simple error detection
//! let checked = packed.append_parity_bit();
//! assert_eq!(checked.width(), 17);
//! assert_eq!(checked.value().count_ones() % 2, 0);
//! ```
//!
//! ## Storage selection
//!
//! ```rust
//! use bit_builder::{Capacity, Word};
//!
//! assert_eq!(Word::<5>::new(0).capacity(), Capacity::U8);
//! assert_eq!(Word::<14>::new(0).capacity(), Capacity::U16);
//! assert_eq!(Word::<24>::new(0).capacity(), Capacity::U32);
//! assert_eq!(Word::<40>::new(0).capacity(), Capacity::U64);
//! ```
//!

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub use error::BitBuilderError;

pub mod capacity;
pub use capacity::Capacity;

mod storage;
pub use storage::Storage;

pub mod width;
pub use width::{StorageOf, Width, capacity_of};

pub mod parity;

pub mod bit_word;
pub use bit_word::{BitWord, Word};

mod flag;
pub use flag::flag;

// Re-export typenum so callers can name widths and positions
pub use typenum;
