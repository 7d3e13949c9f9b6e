use std::io;
use std::string::FromUtf8Error;

/// Errors produced while encoding or decoding binary data.
///
/// Out-of-bounds buffer access in the pure conversion functions is a programming error and
/// panics instead; this type covers the conditions a caller can legitimately meet at runtime.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source was exhausted before all bytes of a fixed-width value could be read.
    #[error("unexpected end of data")]
    UnexpectedEof,

    /// Two in-bounds bytes that are not a recognized UTF-16 byte order mark.
    #[error("not a UTF-16 byte order mark: {0:#04x} {1:#04x}")]
    MalformedBom(u8, u8),

    /// A byte order mark was requested at a position that does not fit within the buffer.
    #[error("requested {width} bytes at offset {offset}, but the buffer holds {len}")]
    OutOfRange {
        /// Start of the requested range.
        offset: usize,
        /// Number of bytes requested.
        width: usize,
        /// Length of the buffer.
        len: usize,
    },

    /// The operation is permanently unimplemented.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),

    /// A length-prefixed string payload does not fit in its 16-bit length prefix.
    #[error("string of {0} bytes does not fit in a 16-bit length prefix")]
    StringTooLong(usize),

    /// A length-prefixed string payload was not valid UTF-8.
    #[error("length-prefixed string is not valid UTF-8")]
    InvalidUtf8(#[from] FromUtf8Error),

    /// An I/O error reported by the underlying source or sink.
    #[error(transparent)]
    Io(#[from] io::Error),
}
