use num_enum::TryFromPrimitive;
use snafu::{ensure, OptionExt};

use crate::{
    error::{ChecksumMismatchSnafu, EmptyFoldSnafu},
    ByteOrder, Error, Packable, TypedByteBuffer, CRC8,
};

/// Computes the CRC-8 (poly `0x31`, MSB first, no final XOR) of `data`, starting
/// from the register value `initial`.
///
/// An empty `data` returns `initial` unchanged.
pub fn compute_crc8(initial: u8, data: &[u8]) -> u8 {
    let mut digest = CRC8.digest_with_initial(initial);
    digest.update(data);
    digest.finalize()
}

/// Something that can feed its bytes into a running CRC-8.
pub trait Crc8Input {
    /// Feeds the bytes, laid out in `order`, into a register holding `crc` and
    /// returns the new register value.
    fn update_crc8(&self, crc: u8, order: ByteOrder) -> u8;
}

impl<T: Packable> Crc8Input for TypedByteBuffer<T> {
    fn update_crc8(&self, crc: u8, order: ByteOrder) -> u8 {
        compute_crc8(crc, self.bytes(order).as_ref())
    }
}

/// Raw bytes are fed as they are, `order` is ignored.
impl<const N: usize> Crc8Input for [u8; N] {
    fn update_crc8(&self, crc: u8, _order: ByteOrder) -> u8 {
        compute_crc8(crc, self)
    }
}

/// Order in which a list of inputs is folded into one checksum
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum FoldOrder {
    /// The last input is folded in first and the first input last.
    ///
    /// This is the order checksums already deployed in the field were built with.
    RightToLeft = 0,
    /// The first input is folded in first.
    LeftToRight = 1,
}

/// Struct for configuring a `Crc8Folder`.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChecksumConfig {
    /// Initial register value. Default is `0x00`.
    pub seed: u8,
    /// Byte order packed values are checksummed in. Default is big endian.
    pub byte_order: ByteOrder,
    /// Default is right to left.
    pub fold_order: FoldOrder,
}

impl ChecksumConfig {
    pub const fn default() -> Self {
        Self {
            seed: 0x00,
            byte_order: ByteOrder::Big,
            fold_order: FoldOrder::RightToLeft,
        }
    }

    pub const fn with_seed(self, seed: u8) -> Self {
        Self { seed, ..self }
    }

    pub const fn with_byte_order(self, byte_order: ByteOrder) -> Self {
        Self { byte_order, ..self }
    }

    pub const fn with_fold_order(self, fold_order: FoldOrder) -> Self {
        Self { fold_order, ..self }
    }
}

/// Chains CRC-8 computations over several inputs, the register left by one
/// input being the seed of the next.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Crc8Folder {
    config: ChecksumConfig,
}

impl Crc8Folder {
    /// Creates a new `Crc8Folder` struct.
    pub const fn new(config: ChecksumConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &ChecksumConfig {
        &self.config
    }

    /// Checksum of a single input.
    pub fn checksum<I: Crc8Input + ?Sized>(&self, input: &I) -> u8 {
        input.update_crc8(self.config.seed, self.config.byte_order)
    }

    /// Folds `first` and `rest` into one checksum. Having `first` separate makes
    /// an empty fold unrepresentable.
    pub fn fold_from(&self, first: &dyn Crc8Input, rest: &[&dyn Crc8Input]) -> u8 {
        let ChecksumConfig {
            seed,
            byte_order,
            fold_order,
        } = self.config;

        match fold_order {
            FoldOrder::RightToLeft => {
                let crc = rest
                    .iter()
                    .rev()
                    .fold(seed, |crc, input| input.update_crc8(crc, byte_order));
                first.update_crc8(crc, byte_order)
            }
            FoldOrder::LeftToRight => rest.iter().fold(
                first.update_crc8(seed, byte_order),
                |crc, input| input.update_crc8(crc, byte_order),
            ),
        }
    }

    /// Folds all `inputs` into one checksum.
    pub fn fold(&self, inputs: &[&dyn Crc8Input]) -> Result<u8, Error> {
        inputs
            .split_first()
            .map(|(first, rest)| self.fold_from(*first, rest))
            .context(EmptyFoldSnafu)
    }

    /// Folds `inputs` and compares the result with `expected`.
    pub fn verify(&self, inputs: &[&dyn Crc8Input], expected: u8) -> Result<(), Error> {
        let actual = self.fold(inputs)?;

        ensure!(actual == expected, ChecksumMismatchSnafu { expected, actual });

        Ok(())
    }
}

const DEFAULT_FOLDER: Crc8Folder = Crc8Folder::new(ChecksumConfig::default());

/// Checksum of a single input's big-endian bytes, seeded with `0x00`.
pub fn crc8<I: Crc8Input + ?Sized>(input: &I) -> u8 {
    DEFAULT_FOLDER.checksum(input)
}

/// Folds `inputs` right to left over their big-endian bytes, seeded with `0x00`.
///
/// Returns [`Error::EmptyFold`] if `inputs` is empty. Use [`fold_crc8!`](crate::fold_crc8)
/// to rule that out at compile time.
pub fn crc8_fold(inputs: &[&dyn Crc8Input]) -> Result<u8, Error> {
    DEFAULT_FOLDER.fold(inputs)
}

/// Folds one or more inputs right to left into a CRC-8, like [`crc8_fold`].
///
/// ```rust
/// use wirepack::{compute_crc8, fold_crc8, pack};
///
/// let a = pack(0x1234_5678u32);
/// let b = pack(0xbeefu16);
///
/// let expected = compute_crc8(compute_crc8(0, &b.big_endian_bytes()), &a.big_endian_bytes());
/// assert_eq!(fold_crc8!(a, b), expected);
/// ```
#[macro_export]
macro_rules! fold_crc8 {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::Crc8Folder::new($crate::ChecksumConfig::default())
            .fold_from(&$first, &[$(&$rest as &dyn $crate::Crc8Input),*])
    };
}
