use snafu::Snafu;

/// Enum of packing and checksum errors.
#[non_exhaustive]
#[derive(Debug, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    #[snafu(display("Size mismatch: expected {expected} bytes, got {actual}"))]
    SizeMismatch { expected: usize, actual: usize },
    #[snafu(display("Checksum fold needs at least one input"))]
    EmptyFold,
    #[snafu(display("Crc checksum mismatch: expected {expected:#04x}, got {actual:#04x}"))]
    ChecksumMismatch { expected: u8, actual: u8 },
}
