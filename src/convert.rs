//! Pure conversions between primitive values and raw bytes.
//!
//! Every function here is stateless and performs no I/O: decoding borrows a slice and an
//! offset, encoding writes into a caller-provided slice, and the `*_to_bytes` forms return
//! a fixed-size array. Offsets that do not leave room for the full width of the value are
//! programming errors and panic via the slice bounds check; nothing is clamped or partially
//! written.
//!
//! # Example
//!
//! ```
//! use endianio::convert;
//! use endianio::ByteOrder;
//!
//! let mut buf = [0u8; 4];
//! convert::put_u32(&mut buf, 0, ByteOrder::Big, 0xdeadbeef);
//! assert_eq!(buf, [0xde, 0xad, 0xbe, 0xef]);
//!
//! convert::put_u32(&mut buf, 0, ByteOrder::Little, 0xdeadbeef);
//! assert_eq!(buf, [0xef, 0xbe, 0xad, 0xde]);
//! assert_eq!(convert::get_u32(&buf, 0, ByteOrder::Little), 0xdeadbeef);
//! ```

use std::mem;

use crate::ByteOrder;

macro_rules! convert_impl {
    ($($t:ty, $width:literal => $get:ident, $put:ident, $to:ident;)*) => {$(
        #[doc = concat!(
            "Decodes the `", stringify!($t), "` value whose bytes start at `offset` in `buf`.\n",
            "\n",
            "Under [`ByteOrder::Big`] the byte at `offset` is the most significant, under\n",
            "[`ByteOrder::Little`] the least significant.\n",
            "\n",
            "# Panics\n",
            "\n",
            "Panics if `offset + ", $width, "` exceeds `buf.len()`.",
        )]
        pub fn $get(buf: &[u8], offset: usize, order: ByteOrder) -> $t {
            let mut bytes = [0u8; mem::size_of::<$t>()];
            bytes.copy_from_slice(&buf[offset..offset + mem::size_of::<$t>()]);
            match order {
                ByteOrder::Big => <$t>::from_be_bytes(bytes),
                ByteOrder::Little => <$t>::from_le_bytes(bytes),
            }
        }

        #[doc = concat!(
            "Encodes `value` into `buf` starting at `offset`.\n",
            "\n",
            "Under [`ByteOrder::Big`] the most significant byte is written first, under\n",
            "[`ByteOrder::Little`] the least significant.\n",
            "\n",
            "# Panics\n",
            "\n",
            "Panics if `offset + ", $width, "` exceeds `buf.len()`.",
        )]
        pub fn $put(buf: &mut [u8], offset: usize, order: ByteOrder, value: $t) {
            let bytes = match order {
                ByteOrder::Big => value.to_be_bytes(),
                ByteOrder::Little => value.to_le_bytes(),
            };
            buf[offset..offset + mem::size_of::<$t>()].copy_from_slice(&bytes);
        }

        #[doc = concat!(
            "Returns a new array holding the bytes of `value` in the given order.",
        )]
        pub fn $to(value: $t, order: ByteOrder) -> [u8; mem::size_of::<$t>()] {
            match order {
                ByteOrder::Big => value.to_be_bytes(),
                ByteOrder::Little => value.to_le_bytes(),
            }
        }
    )*}
}

convert_impl! {
    i16, "2" => get_i16, put_i16, i16_to_bytes;
    u16, "2" => get_u16, put_u16, u16_to_bytes;
    i32, "4" => get_i32, put_i32, i32_to_bytes;
    u32, "4" => get_u32, put_u32, u32_to_bytes;
    i64, "8" => get_i64, put_i64, i64_to_bytes;
    u64, "8" => get_u64, put_u64, u64_to_bytes;
    f32, "4" => get_f32, put_f32, f32_to_bytes;
    f64, "8" => get_f64, put_f64, f64_to_bytes;
}

/// Decodes the UTF-16 code unit at `offset` in `buf`.
///
/// Alias of [`get_u16`]; the wide-string and byte-order-mark machinery traffics in code
/// units, so the character form is named separately.
pub fn get_char16(buf: &[u8], offset: usize, order: ByteOrder) -> u16 {
    get_u16(buf, offset, order)
}

/// Encodes the UTF-16 code unit `value` into `buf` starting at `offset`.
///
/// Alias of [`put_u16`].
pub fn put_char16(buf: &mut [u8], offset: usize, order: ByteOrder, value: u16) {
    put_u16(buf, offset, order, value)
}

/// Returns a new array holding the bytes of the UTF-16 code unit `value` in the given order.
pub fn char16_to_bytes(value: u16, order: ByteOrder) -> [u8; 2] {
    u16_to_bytes(value, order)
}

/// Decodes the byte at `offset` as a boolean: nonzero is `true`, zero is `false`.
///
/// # Panics
///
/// Panics if `offset` is not within `buf`.
pub fn get_bool(buf: &[u8], offset: usize) -> bool {
    buf[offset] != 0
}

/// Decodes the byte at `offset` as a signed 8-bit value.
///
/// # Panics
///
/// Panics if `offset` is not within `buf`.
pub fn get_i8(buf: &[u8], offset: usize) -> i8 {
    buf[offset] as i8
}

/// Returns the byte at `offset`.
///
/// # Panics
///
/// Panics if `offset` is not within `buf`.
pub fn get_u8(buf: &[u8], offset: usize) -> u8 {
    buf[offset]
}

/// Encodes `value` at `offset`: `true` as 1, `false` as 0.
///
/// # Panics
///
/// Panics if `offset` is not within `buf`.
pub fn put_bool(buf: &mut [u8], offset: usize, value: bool) {
    buf[offset] = value as u8;
}

/// Encodes the signed 8-bit `value` at `offset`.
///
/// # Panics
///
/// Panics if `offset` is not within `buf`.
pub fn put_i8(buf: &mut [u8], offset: usize, value: i8) {
    buf[offset] = value as u8;
}

/// Writes the byte `value` at `offset`.
///
/// # Panics
///
/// Panics if `offset` is not within `buf`.
pub fn put_u8(buf: &mut [u8], offset: usize, value: u8) {
    buf[offset] = value;
}

/// Returns a one-byte array holding 1 for `true` and 0 for `false`.
pub fn bool_to_bytes(value: bool) -> [u8; 1] {
    [value as u8]
}

/// Returns a one-byte array holding the bits of `value`.
pub fn i8_to_bytes(value: i8) -> [u8; 1] {
    [value as u8]
}

/// Returns a one-byte array holding `value`.
pub fn u8_to_bytes(value: u8) -> [u8; 1] {
    [value]
}
