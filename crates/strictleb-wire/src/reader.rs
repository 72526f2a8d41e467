use crate::error::LebError;
use crate::leb128::{LebInt, decode, decode_as};
use crate::value::{LebType, LebValue};

/// A read cursor over a byte buffer holding consecutive LEB128 values.
///
/// This is the usual way a binary-format parser consumes LEB128 fields:
/// each successful read advances the cursor by exactly the bytes consumed.
/// A failed read leaves the cursor where it was, and error offsets are
/// reported relative to the start of the whole buffer, not the cursor.
///
/// ```text
///   buf:  [ E5 8E 26 | 70 | 80 80 ... ]
///           ^read_u32  ^read_i32
///   pos:    0 ───────▶ 3 ──▶ 4
/// ```
#[derive(Clone, Debug)]
pub struct LebReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> LebReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The bytes not yet consumed.
    pub fn remaining(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Read one value of type `T` and advance past it.
    ///
    /// # Errors
    ///
    /// Any [`LebError`] from [`decode`], with its offset rebased onto the
    /// whole buffer. The cursor does not move on error.
    pub fn read<T: LebInt>(&mut self) -> Result<T, LebError> {
        let (value, consumed) =
            decode::<T>(self.remaining()).map_err(|e| e.with_base(self.pos))?;
        self.pos += consumed;
        Ok(value)
    }

    /// # Errors
    ///
    /// See [`LebReader::read`].
    pub fn read_i32(&mut self) -> Result<i32, LebError> {
        self.read()
    }

    /// # Errors
    ///
    /// See [`LebReader::read`].
    pub fn read_u32(&mut self) -> Result<u32, LebError> {
        self.read()
    }

    /// # Errors
    ///
    /// See [`LebReader::read`].
    pub fn read_i64(&mut self) -> Result<i64, LebError> {
        self.read()
    }

    /// # Errors
    ///
    /// See [`LebReader::read`].
    pub fn read_u64(&mut self) -> Result<u64, LebError> {
        self.read()
    }

    /// Read one value whose type is chosen at runtime.
    ///
    /// # Errors
    ///
    /// See [`LebReader::read`].
    pub fn read_as(&mut self, ty: LebType) -> Result<LebValue, LebError> {
        let (value, consumed) =
            decode_as(ty, self.remaining()).map_err(|e| e.with_base(self.pos))?;
        self.pos += consumed;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn reads_consecutive_values() {
        let buf = [0xE5, 0x8E, 0x26, 0x70, 0x80, 0x01];
        let mut reader = LebReader::new(&buf);

        assert_eq!(reader.read_u32().unwrap(), 624_485);
        assert_eq!(reader.position(), 3);
        assert_eq!(reader.read_i32().unwrap(), -16);
        assert_eq!(reader.position(), 4);
        assert_eq!(reader.read_u64().unwrap(), 128);
        assert!(reader.is_empty());
        assert!(reader.remaining().is_empty());
    }

    #[test]
    fn failed_read_does_not_advance() {
        let buf = [0x01, 0x80, 0x80];
        let mut reader = LebReader::new(&buf);

        assert_eq!(reader.read_i64().unwrap(), 1);
        let err = reader.read_i64().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Truncated);
        // offset is relative to the whole buffer
        assert_eq!(err.offset(), 3);
        assert_eq!(reader.position(), 1);
        assert_eq!(reader.remaining(), &[0x80, 0x80]);
    }

    #[test]
    fn overflow_offset_points_at_terminator() {
        let buf = [0x00, 0x83, 0x86, 0x89, 0x8C, 0x10];
        let mut reader = LebReader::new(&buf);

        reader.read_u32().unwrap();
        let err = reader.read_u32().unwrap_err();
        assert_eq!(
            err,
            LebError::Overflow {
                ty: LebType::U32,
                offset: 5,
                byte: 0x10
            }
        );
    }

    #[test]
    fn read_as_runtime_type() {
        let buf = [0x7F, 0x7F];
        let mut reader = LebReader::new(&buf);

        assert_eq!(reader.read_as(LebType::I64).unwrap(), LebValue::I64(-1));
        assert_eq!(reader.read_as(LebType::U64).unwrap(), LebValue::U64(127));
        assert!(reader.is_empty());
    }

    #[test]
    fn empty_reader() {
        let mut reader = LebReader::new(&[]);
        assert!(reader.is_empty());
        assert_eq!(reader.read_u32().unwrap_err().kind(), ErrorKind::Truncated);
    }
}
