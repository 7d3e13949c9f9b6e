//! Byte-order aware binary I/O.
//!
//! The [`convert`] module converts primitive values to and from raw bytes at a buffer
//! offset under either byte order; [`BinaryReader`] and [`BinaryWriter`] wrap any
//! [`std::io::Read`]/[`std::io::Write`] and stream those primitives in a byte order that
//! can be changed mid-stream; [`ByteOrder`] also covers UTF-16 byte-order-mark detection,
//! so data can announce its own ordering.
//!
//! ```
//! use endianio::{BinaryReader, BinaryWriter, ByteOrder, ByteOrdered};
//!
//! let mut writer = BinaryWriter::new(Vec::new());
//! writer.write_char16(0xfeff).unwrap();
//! writer.write_u32(0xdeadbeef).unwrap();
//!
//! let bytes = writer.into_inner();
//! let order = ByteOrder::from_utf16_bom(&bytes, 0).unwrap();
//!
//! let mut reader = BinaryReader::new(&bytes[2..]);
//! reader.set_order(order);
//! assert_eq!(reader.read_u32().unwrap(), 0xdeadbeef);
//! ```

#![warn(missing_docs)]

pub mod convert;

mod error;
mod order;
mod reader;
mod writer;

pub use self::error::Error;
pub use self::order::{ByteOrder, ByteOrdered};
pub use self::reader::BinaryReader;
pub use self::writer::BinaryWriter;
