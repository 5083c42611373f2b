macro_rules! impl_packable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::packed::Packable for $ty {
                const SIZE: usize = core::mem::size_of::<$ty>();

                type Bytes = [u8; core::mem::size_of::<$ty>()];

                fn to_native_bytes(self) -> Self::Bytes {
                    self.to_ne_bytes()
                }

                fn from_native_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_ne_bytes(bytes)
                }
            }
        )*
    };
}
