#[cfg(feature = "std")]
use thiserror::Error;

/// Errors reported by the checked helpers.
///
/// The primary operations never fail at runtime: unsupported widths and
/// out-of-range static positions are rejected when the program is built.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBuilderError {
    #[cfg_attr(
        feature = "std",
        error("Bit width must be in the range 0..=64, got {0}")
    )]
    UnsupportedWidth(u32),

    #[cfg_attr(feature = "std", error("Value {value:#x} does not fit in {width} bits"))]
    ValueOverflow { value: u64, width: u32 },

    #[cfg_attr(
        feature = "std",
        error("Bit position {position} is out of range for a {width}-bit word")
    )]
    PositionOutOfRange { position: u32, width: u32 },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitBuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitBuilderError::UnsupportedWidth(bits) => {
                write!(f, "Bit width must be in the range 0..=64, got {}", bits)
            }
            BitBuilderError::ValueOverflow { value, width } => {
                write!(f, "Value {:#x} does not fit in {} bits", value, width)
            }
            BitBuilderError::PositionOutOfRange { position, width } => write!(
                f,
                "Bit position {} is out of range for a {}-bit word",
                position, width
            ),
        }
    }
}
