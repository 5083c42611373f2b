use num_enum::TryFromPrimitive;

/// Returns `true` if the target stores the least significant byte of a multi-byte integer first.
pub const fn is_little_endian_arch() -> bool {
    cfg!(target_endian = "little")
}

/// Byte order of a packed value on the wire
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ByteOrder {
    /// Most significant byte first
    Big = 0,
    /// Least significant byte first
    Little = 1,
}

impl ByteOrder {
    /// Byte order of the target the crate was compiled for.
    pub const fn native() -> Self {
        if is_little_endian_arch() {
            ByteOrder::Little
        } else {
            ByteOrder::Big
        }
    }

    /// Returns `true` if bytes in this order have to be reversed to match native order.
    pub const fn is_swapped(self) -> bool {
        !matches!(
            (self, is_little_endian_arch()),
            (ByteOrder::Little, true) | (ByteOrder::Big, false)
        )
    }
}
