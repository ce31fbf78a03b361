use crate::error::WireError;
use crate::mutf8::{self, DecodedText};

/// Bounds-checked sequential reader over an immutable byte buffer.
///
/// All multi-byte values are big-endian. Every read checks the remaining
/// length before touching the offset, so a failed read leaves the cursor
/// exactly where it was:
///
/// ```text
///   buf: [ consumed ........ | unread ................ ]
///                            ^ pos
///   read_i32() → needs 4 bytes → Truncated if unread < 4, pos unchanged
/// ```
///
/// The cursor never indexes past the end of the buffer and never
/// allocates based on an unchecked length prefix.
#[derive(Clone, Debug)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current read offset from the start of the buffer.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of unread bytes.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Fail with [`WireError::Truncated`] unless `needed` bytes remain.
    fn ensure(&self, needed: usize) -> Result<(), WireError> {
        if needed > self.remaining() {
            return Err(WireError::Truncated {
                offset: self.pos,
                needed,
                remaining: self.remaining(),
            });
        }
        Ok(())
    }

    /// Copy the next `N` bytes without advancing.
    fn peek_array<const N: usize>(&self) -> Result<[u8; N], WireError> {
        self.ensure(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.buf[self.pos..self.pos + N]);
        Ok(out)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], WireError> {
        let out = self.peek_array::<N>()?;
        self.pos += N;
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        Ok(u8::from_be_bytes(self.take_array()?))
    }

    pub fn read_i8(&mut self) -> Result<i8, WireError> {
        Ok(i8::from_be_bytes(self.take_array()?))
    }

    pub fn read_u16(&mut self) -> Result<u16, WireError> {
        Ok(u16::from_be_bytes(self.take_array()?))
    }

    pub fn read_i16(&mut self) -> Result<i16, WireError> {
        Ok(i16::from_be_bytes(self.take_array()?))
    }

    pub fn read_i32(&mut self) -> Result<i32, WireError> {
        Ok(i32::from_be_bytes(self.take_array()?))
    }

    pub fn read_i64(&mut self) -> Result<i64, WireError> {
        Ok(i64::from_be_bytes(self.take_array()?))
    }

    pub fn read_f32(&mut self) -> Result<f32, WireError> {
        Ok(f32::from_be_bytes(self.take_array()?))
    }

    pub fn read_f64(&mut self) -> Result<f64, WireError> {
        Ok(f64::from_be_bytes(self.take_array()?))
    }

    /// Borrow the next `n` bytes and advance past them.
    ///
    /// # Errors
    ///
    /// [`WireError::Truncated`] if fewer than `n` bytes remain.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        self.ensure(n)?;
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Read a signed 32-bit element count for an array of
    /// `element_width`-byte items.
    ///
    /// The count is validated against the bytes that actually remain
    /// *before* the offset moves, so a corrupt length can never trigger a
    /// huge allocation. On success the cursor sits at the first element.
    ///
    /// # Errors
    ///
    /// - [`WireError::NegativeLength`] if the prefix is below zero.
    /// - [`WireError::Truncated`] if the prefix itself, or the
    ///   `count * element_width` bytes it announces, are not available.
    pub fn read_array_len(&mut self, element_width: usize) -> Result<usize, WireError> {
        let length = i32::from_be_bytes(self.peek_array::<4>()?);
        let count = usize::try_from(length).map_err(|_| WireError::NegativeLength {
            offset: self.pos,
            length,
        })?;

        let body = count.checked_mul(element_width).unwrap_or(usize::MAX);
        let available = self.remaining() - 4;
        if body > available {
            return Err(WireError::Truncated {
                offset: self.pos + 4,
                needed: body,
                remaining: available,
            });
        }

        self.pos += 4;
        Ok(count)
    }

    /// Read `len` bytes and decode them as modified UTF-8.
    ///
    /// Invalid text does not fail the read: the returned [`DecodedText`]
    /// holds a lossy conversion and keeps the raw bytes so the caller can
    /// report it.
    ///
    /// # Errors
    ///
    /// [`WireError::Truncated`] if fewer than `len` bytes remain.
    pub fn read_modified_utf8(&mut self, len: u16) -> Result<DecodedText, WireError> {
        let raw = self.read_bytes(usize::from(len))?;
        Ok(mutf8::decode(raw))
    }

    /// Read a UInt16 length prefix followed by that many bytes of
    /// modified UTF-8.
    ///
    /// The prefix and the body are checked together, so a truncated body
    /// leaves the cursor in front of the prefix.
    ///
    /// # Errors
    ///
    /// [`WireError::Truncated`] if the prefix or the body is incomplete.
    pub fn read_string(&mut self) -> Result<DecodedText, WireError> {
        let len = u16::from_be_bytes(self.peek_array::<2>()?);
        if usize::from(len) > self.remaining() - 2 {
            return Err(WireError::Truncated {
                offset: self.pos + 2,
                needed: usize::from(len),
                remaining: self.remaining() - 2,
            });
        }
        self.pos += 2;
        self.read_modified_utf8(len)
    }
}
