//! Prints the storage chosen for a range of widths and evaluates a few
//! literal expressions.
//!
//! Run with `RUST_LOG=debug cargo run --example check` to see every word.

use bit_builder::typenum::{U0, U1, U2, U3};
use bit_builder::{BitBuilderError, Capacity, Word, flag};
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(filter))
        .init();
}

macro_rules! report_width {
    ($($n:literal)+) => { $(
        let word = Word::<$n>::new(0);
        info!(
            width = $n,
            bytes = std::mem::size_of_val(&word),
            capacity = ?word.capacity(),
            "storage selected"
        );
    )+ };
}

fn main() -> Result<(), BitBuilderError> {
    setup_tracing();

    report_width!(3 5 14 16 24 32 40 63 64);

    match Capacity::for_bits(65) {
        Ok(capacity) => warn!(?capacity, "65 bits unexpectedly accepted"),
        Err(err) => info!(%err, "65 bits rejected"),
    }

    let four = Word::<4>::new(4);
    info!(
        "bits of {:?}: {} {} {} {}",
        four,
        four.bit::<U0>().value(),
        four.bit::<U1>().value(),
        four.bit::<U2>().value(),
        four.bit::<U3>().value()
    );

    let flags = flag(true) | flag(true) | flag(true);
    info!("flags: {:#x} ({:b})", flags, flags);

    let dead = Word::<4>::new(0xD) | Word::<4>::new(0xA) | Word::<4>::new(0xE) | Word::<4>::new(0xD);
    info!("concatenation: {:#x}", dead);

    for word in [dead, Word::<16>::new(0xDEAC)] {
        let bit = word.even_parity_bit();
        debug!(?word, reference = ?word.even_parity_bit_reference(), "parity");
        info!("even parity of {:#x}: {}", word, bit.value());
    }

    let complements = [
        Word::<4>::new(0x7).append_complement_of_top_bit(),
        Word::<4>::new(0x8).append_complement_of_top_bit(),
    ];
    for word in complements {
        info!("complement of top bit: {:#04x}", word);
    }

    let checked = Word::<12>::try_new(0xABC)?.append_parity_bit();
    info!(?checked, "checked field with parity");

    Ok(())
}
