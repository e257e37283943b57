/// Implements `Serde` for a plain record by coding its fields back to back in
/// declaration order. With `const`, also implements `ConstByteLength`.
#[macro_export]
macro_rules! impl_record_serde {
    (const $name:ident { $($field:ident: $ty:ty),* $(,)? }) => {
        $crate::impl_record_serde!($name { $($field: $ty),* });

        impl $crate::serde::ConstByteLength for $name {
            fn const_byte_length() -> usize {
                0 $( + <$ty as $crate::serde::ConstByteLength>::const_byte_length() )*
            }
        }
    };
    ($name:ident { $($field:ident: $ty:ty),* $(,)? }) => {
        impl $crate::serde::Serde for $name {
            fn ser(&self, writer: &mut dyn $crate::serde::ByteWrite) {
                $( $crate::serde::Serde::ser(&self.$field, writer); )*
            }

            fn de(
                reader: &mut $crate::serde::ByteReader,
            ) -> Result<Self, $crate::serde::SerdeErr> {
                Ok(Self {
                    $( $field: <$ty as $crate::serde::Serde>::de(reader)?, )*
                })
            }

            fn byte_length(&self) -> usize {
                0 $( + $crate::serde::Serde::byte_length(&self.$field) )*
            }
        }
    };
}
