//! Reading primitive values from a byte source.

use std::io::{self, Read};
use std::mem;

use crate::convert;
use crate::{ByteOrder, ByteOrdered, Error};

/// A reader that decodes primitive values from an underlying byte source in a selectable
/// byte order.
///
/// The order is mutable at any time between reads and defaults to the host's native order.
/// Multi-byte reads stage bytes through a private 8-byte scratch buffer, so a single
/// `BinaryReader` must not be driven from multiple threads at once; every operation takes
/// `&mut self`, which lets the borrow checker enforce that.
///
/// Raw byte access is available through the [`io::Read`] passthrough impl, [`read_full`]
/// and [`skip`].
///
/// [`read_full`]: BinaryReader::read_full
/// [`skip`]: BinaryReader::skip
///
/// # Example
///
/// ```
/// use endianio::{BinaryReader, ByteOrder, ByteOrdered};
///
/// let bytes = [0xde, 0xad, 0xbe, 0xef];
/// let mut reader = BinaryReader::with_order(bytes.as_ref(), ByteOrder::Big);
/// assert_eq!(reader.read_u32().unwrap(), 0xdeadbeef);
///
/// let mut reader = BinaryReader::with_order(bytes.as_ref(), ByteOrder::Little);
/// assert_eq!(reader.read_u32().unwrap(), 0xefbeadde);
/// ```
#[derive(Debug)]
pub struct BinaryReader<R> {
    inner: R,
    order: ByteOrder,
    buffer: [u8; 8],
}

macro_rules! read_impl {
    ($($(#[$attr:meta])* $read:ident: $t:ty => $get:ident;)*) => {$(
        $(#[$attr])*
        pub fn $read(&mut self) -> Result<$t, Error> {
            self.fill_buffer(mem::size_of::<$t>())?;
            Ok(convert::$get(&self.buffer, 0, self.order))
        }
    )*}
}

impl<R: Read> BinaryReader<R> {
    /// Creates a reader that decodes in the host's native byte order.
    pub fn new(inner: R) -> Self {
        Self::with_order(inner, ByteOrder::native())
    }

    /// Creates a reader that decodes in the given byte order.
    pub fn with_order(inner: R, order: ByteOrder) -> Self {
        Self {
            inner,
            order,
            buffer: [0; 8],
        }
    }

    /// Reads exactly `n` bytes from the source into the front of the scratch buffer.
    ///
    /// After a failure the scratch contents are unspecified.
    fn fill_buffer(&mut self, n: usize) -> Result<(), Error> {
        let mut filled = 0;
        while filled < n {
            match self.inner.read(&mut self.buffer[filled..n]) {
                Ok(0) => return Err(Error::UnexpectedEof),
                Ok(read) => filled += read,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    read_impl! {
        /// Reads two bytes and decodes them as a signed 16-bit value in the current order.
        read_i16: i16 => get_i16;

        /// Reads two bytes and decodes them as an unsigned 16-bit value in the current order.
        read_u16: u16 => get_u16;

        /// Reads two bytes and decodes them as a UTF-16 code unit in the current order.
        read_char16: u16 => get_char16;

        /// Reads four bytes and decodes them as a signed 32-bit value in the current order.
        read_i32: i32 => get_i32;

        /// Reads four bytes and decodes them as an unsigned 32-bit value in the current order.
        ///
        /// Reading the bytes `[0xff; 4]` yields 4294967295, not -1.
        read_u32: u32 => get_u32;

        /// Reads eight bytes and decodes them as a signed 64-bit value in the current order.
        read_i64: i64 => get_i64;

        /// Reads eight bytes and decodes them as an unsigned 64-bit value in the current order.
        read_u64: u64 => get_u64;

        /// Reads four bytes and reinterprets their 32-bit pattern as an IEEE-754
        /// single-precision value.
        read_f32: f32 => get_f32;

        /// Reads eight bytes and reinterprets their 64-bit pattern as an IEEE-754
        /// double-precision value.
        read_f64: f64 => get_f64;
    }

    /// Reads one byte and returns `true` if it is nonzero.
    pub fn read_bool(&mut self) -> Result<bool, Error> {
        self.fill_buffer(1)?;
        Ok(convert::get_bool(&self.buffer, 0))
    }

    /// Reads one signed byte.
    pub fn read_i8(&mut self) -> Result<i8, Error> {
        self.fill_buffer(1)?;
        Ok(convert::get_i8(&self.buffer, 0))
    }

    /// Reads one unsigned byte.
    pub fn read_u8(&mut self) -> Result<u8, Error> {
        self.fill_buffer(1)?;
        Ok(convert::get_u8(&self.buffer, 0))
    }

    /// Reads exactly `buf.len()` bytes from the source into `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedEof`] if the source is exhausted first; how many bytes
    /// were consumed in that case is unspecified.
    pub fn read_full(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        match self.inner.read_exact(buf) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Err(Error::UnexpectedEof),
            Err(e) => Err(e.into()),
        }
    }

    /// Skips over and discards up to `n` bytes from the source.
    ///
    /// Returns the number of bytes actually skipped, which is less than `n` only if the
    /// source was exhausted first. Skipping zero bytes is a no-op.
    pub fn skip(&mut self, n: u64) -> Result<u64, Error> {
        let skipped = io::copy(&mut self.inner.by_ref().take(n), &mut io::sink())?;
        Ok(skipped)
    }

    /// Reads a length-prefixed string: an unsigned 16-bit byte count in the current order,
    /// followed by that many bytes of UTF-8 payload.
    ///
    /// Mirror of [`BinaryWriter::write_utf`](crate::BinaryWriter::write_utf).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedEof`] if the source runs dry mid-string and
    /// [`Error::InvalidUtf8`] if the payload is not valid UTF-8.
    pub fn read_utf(&mut self) -> Result<String, Error> {
        let len = usize::from(self.read_u16()?);
        let mut bytes = vec![0; len];
        self.read_full(&mut bytes)?;
        Ok(String::from_utf8(bytes)?)
    }

    /// Permanently unimplemented; always returns [`Error::Unsupported`].
    ///
    /// Line-oriented text belongs to [`io::BufRead`]; wrap the source in a
    /// [`io::BufReader`] and use [`io::BufRead::read_line`] instead.
    #[deprecated(note = "line reads are unsupported; wrap the source in a BufReader instead")]
    pub fn read_line(&mut self) -> Result<String, Error> {
        Err(Error::Unsupported("read_line"))
    }

    /// Returns a shared reference to the underlying source.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Returns a mutable reference to the underlying source.
    ///
    /// Reading from the source directly bypasses this reader's byte order entirely.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Consumes the reader, returning the underlying source.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R> ByteOrdered for BinaryReader<R> {
    fn order(&self) -> ByteOrder {
        self.order
    }

    fn set_order(&mut self, order: ByteOrder) {
        self.order = order;
    }
}

/// Raw passthrough to the underlying source.
impl<R: Read> Read for BinaryReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}
