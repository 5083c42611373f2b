//! This crate provides `no-std` packing of typed values into byte arrays with an explicit
//! byte order, and a CRC-8 to guard the packed bytes.
//! # Usage
//! ### Packing
//! ```rust
//! use wirepack::{pack, unpack};
//!
//! let packed = pack(0x1234_5678u32);
//! assert_eq!(packed.big_endian_bytes(), [0x12, 0x34, 0x56, 0x78]);
//! assert_eq!(packed.little_endian_bytes(), [0x78, 0x56, 0x34, 0x12]);
//! assert_eq!(unpack(&packed), 0x1234_5678);
//!
//! let temperature = pack(22.4f32);
//! assert_eq!(temperature.big_endian_bytes(), [0x41, 0xb3, 0x33, 0x33]);
//! assert_eq!(temperature.value(), 22.4);
//! ```
//! ### Validation
//! ```rust
//! use wirepack::{in_range, is_within_range, pack};
//!
//! assert!(in_range(55u8, 0, 100));
//! assert!(!is_within_range(&pack(-41.0f32), -40.0, 85.0));
//! ```
//! ### Checksums
//! ```rust
//! use wirepack::{crc8, fold_crc8, pack, ChecksumConfig, Crc8Folder};
//!
//! let temperature = pack(22.4f32);
//! let humidity = pack(55u8);
//!
//! let single = crc8(&temperature);
//! // Inputs are folded right to left: `humidity` first, `temperature` last.
//! let folded = fold_crc8!(temperature, humidity);
//!
//! let folder = Crc8Folder::new(ChecksumConfig::default());
//! assert_eq!(folder.fold(&[&temperature, &humidity]), Ok(folded));
//! assert!(folder.verify(&[&temperature, &humidity], folded).is_ok());
//! assert_eq!(fold_crc8!(temperature), single);
//! ```

#![no_std]

mod endian;
pub use endian::*;

mod error;
pub use error::Error;

mod packed;
pub use packed::*;

mod range;
pub use range::*;

mod checksum;
pub use checksum::*;

/// CRC-8 with polynomial `0x31`, processed MSB first, zero seed and no final XOR.
pub const CRC_8_WIREPACK: crc::Algorithm<u8> = crc::Algorithm {
    width: 8,
    poly: 0x31,
    init: 0x00,
    refin: false,
    refout: false,
    xorout: 0x00,
    check: 0xa2,
    residue: 0x00,
};

pub(crate) const CRC8: crc::Crc<u8> = crc::Crc::<u8>::new(&CRC_8_WIREPACK);
