use core::{fmt::Debug, marker::PhantomData};

use snafu::OptionExt;

use crate::{error::SizeMismatchSnafu, ByteOrder, Error, RangeChecker};

#[macro_use]
mod macros;

const U32_SIZE: usize = core::mem::size_of::<u32>();

/// Fixed-width value types whose in-memory representation can be copied out
/// and back byte for byte.
///
/// `Bytes` must be exactly `SIZE` bytes long and `from_native_bytes(v.to_native_bytes())`
/// must give back `v` bit for bit. Types holding pointers or owned resources
/// cannot satisfy this and must not implement it.
pub trait Packable: Copy {
    /// Number of bytes in the packed representation.
    const SIZE: usize;

    /// Byte array holding the packed representation (`[u8; SIZE]`).
    type Bytes: Copy + Debug + Eq + AsRef<[u8]> + AsMut<[u8]>;

    /// Copies the value's bytes out in native byte order.
    fn to_native_bytes(self) -> Self::Bytes;

    /// Rebuilds a value from bytes in native byte order.
    fn from_native_bytes(bytes: Self::Bytes) -> Self;
}

impl_packable!(u8, u16, u32, u64, u128, usize);
impl_packable!(i8, i16, i32, i64, i128, isize);
impl_packable!(f32, f64);

/// A single value packed into its raw bytes.
///
/// The bytes are captured in native order on construction and never change
/// afterwards; every accessor returns a fresh copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypedByteBuffer<T: Packable> {
    bytes: T::Bytes,
    _marker: PhantomData<T>,
}

impl<T: Packable> TypedByteBuffer<T> {
    /// Packs `value`.
    pub fn new(value: T) -> Self {
        Self {
            bytes: value.to_native_bytes(),
            _marker: PhantomData,
        }
    }

    /// Rebuilds a buffer from bytes received in the given order.
    pub fn from_bytes(bytes: T::Bytes, order: ByteOrder) -> Self {
        let mut bytes = bytes;
        if order.is_swapped() {
            bytes.as_mut().reverse();
        }

        Self {
            bytes,
            _marker: PhantomData,
        }
    }

    /// Get the raw bytes in native order
    pub fn native_bytes(&self) -> &[u8] {
        self.bytes.as_ref()
    }

    /// Get a copy of the bytes in the requested order
    pub fn bytes(&self, order: ByteOrder) -> T::Bytes {
        let mut res = self.bytes;
        if order.is_swapped() {
            res.as_mut().reverse();
        }
        res
    }

    /// Get a copy of the bytes, most significant first
    pub fn big_endian_bytes(&self) -> T::Bytes {
        self.bytes(ByteOrder::Big)
    }

    /// Get a copy of the bytes, least significant first
    pub fn little_endian_bytes(&self) -> T::Bytes {
        self.bytes(ByteOrder::Little)
    }

    /// Reads the big-endian bytes as a native `u32`, so that storing the result
    /// in memory lays it out most significant byte first.
    ///
    /// Only 4-byte types can be read this way; anything else returns
    /// [`Error::SizeMismatch`].
    pub fn big_endian_u32(&self) -> Result<u32, Error> {
        reinterpret_u32(self.big_endian_bytes().as_ref())
    }

    /// Little-endian counterpart of [`TypedByteBuffer::big_endian_u32`].
    pub fn little_endian_u32(&self) -> Result<u32, Error> {
        reinterpret_u32(self.little_endian_bytes().as_ref())
    }

    /// Reads the native bytes as a `u32` without any reordering. The result is
    /// not necessarily a meaningful number (e.g. for `f32` it is the bit pattern).
    pub fn as_u32(&self) -> Result<u32, Error> {
        reinterpret_u32(self.bytes.as_ref())
    }

    /// Unpacks the original value
    pub fn value(&self) -> T {
        T::from_native_bytes(self.bytes)
    }

    /// Checks the unpacked value against `checker`.
    pub fn is_within(&self, checker: &RangeChecker<T>) -> bool
    where
        T: PartialOrd,
    {
        checker.is_within_range(self.value())
    }
}

impl<T: Packable> From<T> for TypedByteBuffer<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

#[cfg(feature = "defmt")]
impl<T: Packable> defmt::Format for TypedByteBuffer<T> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "TypedByteBuffer({=[u8]:x})", self.bytes.as_ref())
    }
}

fn reinterpret_u32(bytes: &[u8]) -> Result<u32, Error> {
    <[u8; U32_SIZE]>::try_from(bytes)
        .ok()
        .map(u32::from_ne_bytes)
        .context(SizeMismatchSnafu {
            expected: U32_SIZE,
            actual: bytes.len(),
        })
}

/// Packs `value` into a [`TypedByteBuffer`].
pub fn pack<T: Packable>(value: T) -> TypedByteBuffer<T> {
    TypedByteBuffer::new(value)
}

/// Unpacks the value held by `buffer`.
pub fn unpack<T: Packable>(buffer: &TypedByteBuffer<T>) -> T {
    buffer.value()
}

pub fn to_big_endian_bytes<T: Packable>(buffer: &TypedByteBuffer<T>) -> T::Bytes {
    buffer.big_endian_bytes()
}

pub fn to_little_endian_bytes<T: Packable>(buffer: &TypedByteBuffer<T>) -> T::Bytes {
    buffer.little_endian_bytes()
}

#[cfg(test)]
mod tests {
    use super::{pack, to_big_endian_bytes, to_little_endian_bytes, unpack, Packable};
    use crate::{ByteOrder, Error, RangeChecker, TypedByteBuffer};

    #[test]
    fn test_u32_known_vector() {
        let buffer = pack(0x1234_5678u32);

        assert_eq!(to_big_endian_bytes(&buffer), [0x12, 0x34, 0x56, 0x78]);
        assert_eq!(to_little_endian_bytes(&buffer), [0x78, 0x56, 0x34, 0x12]);
        assert_eq!(buffer.native_bytes(), 0x1234_5678u32.to_ne_bytes().as_slice());
    }

    #[test]
    fn test_float_round_trip_is_bit_exact() {
        let buffer = TypedByteBuffer::new(22.4f32);

        assert_eq!(unpack(&buffer).to_bits(), 22.4f32.to_bits());
        assert_eq!(buffer.big_endian_bytes(), [0x41, 0xb3, 0x33, 0x33]);

        let nan = f64::from_bits(0x7ff8_dead_beef_0001);
        let buffer = TypedByteBuffer::new(nan);
        assert_eq!(buffer.value().to_bits(), 0x7ff8_dead_beef_0001);
    }

    #[test]
    fn test_round_trip_all_widths() {
        assert_eq!(pack(0xa5u8).value(), 0xa5);
        assert_eq!(pack(-2i8).value(), -2);
        assert_eq!(pack(0xbeefu16).value(), 0xbeef);
        assert_eq!(pack(-98569i32).value(), -98569);
        assert_eq!(pack(u64::MAX - 7).value(), u64::MAX - 7);
        assert_eq!(pack(i128::MIN).value(), i128::MIN);
        assert_eq!(pack(-0.0f64).value().to_bits(), (-0.0f64).to_bits());
    }

    #[test]
    fn test_endianness_complement() {
        let buffer = pack(0x0102_0304_0506_0708u64);

        let mut reversed = buffer.big_endian_bytes();
        reversed.reverse();
        assert_eq!(reversed, buffer.little_endian_bytes());

        // A single byte has no order.
        let buffer = pack(0x7fu8);
        assert_eq!(buffer.big_endian_bytes(), buffer.little_endian_bytes());
    }

    #[test]
    fn test_from_bytes() {
        let original = pack(-1234.5f32);

        for order in [ByteOrder::Big, ByteOrder::Little] {
            let rebuilt = TypedByteBuffer::<f32>::from_bytes(original.bytes(order), order);
            assert_eq!(rebuilt, original);
            assert_eq!(rebuilt.value(), -1234.5);
        }

        let wire = TypedByteBuffer::<u16>::from_bytes([0x12, 0x34], ByteOrder::Big);
        assert_eq!(wire.value(), 0x1234);
    }

    #[test]
    fn test_u32_reinterpretation() {
        let buffer = pack(0x1234_5678u32);

        assert_eq!(buffer.as_u32(), Ok(0x1234_5678));
        assert_eq!(buffer.big_endian_u32(), Ok(0x1234_5678u32.to_be()));
        assert_eq!(buffer.little_endian_u32(), Ok(0x1234_5678u32.to_le()));

        let buffer = pack(22.4f32);
        assert_eq!(buffer.as_u32(), Ok(22.4f32.to_bits()));
        assert_eq!(buffer.big_endian_u32(), Ok(0x41b3_3333u32.to_be()));

        let buffer = pack(98569i32);
        assert_eq!(buffer.little_endian_u32(), Ok(98569u32.to_le()));
    }

    #[test]
    fn test_u32_reinterpretation_rejects_other_sizes() {
        assert_eq!(
            pack(0xbeefu16).as_u32(),
            Err(Error::SizeMismatch {
                expected: 4,
                actual: 2
            })
        );
        assert_eq!(
            pack(1.5f64).big_endian_u32(),
            Err(Error::SizeMismatch {
                expected: 4,
                actual: 8
            })
        );
        assert!(matches!(
            pack(0u8).little_endian_u32(),
            Err(Error::SizeMismatch { actual: 1, .. })
        ));
    }

    #[test]
    fn test_size_matches_memory_layout() {
        assert_eq!(<u8 as Packable>::SIZE, 1);
        assert_eq!(<i16 as Packable>::SIZE, 2);
        assert_eq!(<f32 as Packable>::SIZE, 4);
        assert_eq!(<u128 as Packable>::SIZE, 16);
        assert_eq!(pack(0usize).native_bytes().len(), core::mem::size_of::<usize>());
    }

    #[test]
    fn test_is_within() {
        let checker = RangeChecker::new(-40.0f32, 85.0);

        assert!(pack(22.4f32).is_within(&checker));
        assert!(!pack(85.1f32).is_within(&checker));
    }
}
