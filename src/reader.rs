use crate::{
    util::{get_split, lossy},
    Error, ErrorKind,
};

/// Width of the length prefix that precedes a string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthPrefix {
    U8,
    U16,
    U32,
}

impl LengthPrefix {
    /// Number of bytes the prefix occupies
    pub fn width(&self) -> usize {
        match self {
            LengthPrefix::U8 => 1,
            LengthPrefix::U16 => 2,
            LengthPrefix::U32 => 4,
        }
    }
}

/// Decodes little endian primitives from a byte slice while tracking the
/// absolute position of the cursor.
///
/// Every read is bounds checked. Length prefixes are validated against the
/// remaining data before anything is allocated, so a hostile prefix produces an
/// error instead of a large allocation.
///
/// ```rust
/// use rge::{FieldReader, LengthPrefix};
/// let data = [0x60, 0x0a, 0x03, 0x00, b'a', b'b', b'c'];
/// let mut reader = FieldReader::new(&data);
/// assert_eq!(reader.read_u16()?, 0x0a60);
/// assert_eq!(reader.read_prefixed_str(LengthPrefix::U16)?, "abc");
/// assert!(reader.is_empty());
/// # Ok::<(), rge::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct FieldReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> FieldReader<'a> {
    /// Create a reader positioned at the start of the data
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        FieldReader { data, position: 0 }
    }

    /// Create a reader over a sub-slice that starts at an absolute position
    /// of the enclosing buffer, so that errors report absolute offsets
    #[inline]
    pub fn with_position(data: &'a [u8], position: usize) -> Self {
        FieldReader { data, position }
    }

    /// Returns the absolute byte position of the next read
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the unread data
    #[inline]
    pub fn remainder(&self) -> &'a [u8] {
        self.data
    }

    /// Number of unread bytes
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    fn eof(&self, needed: usize) -> Error {
        Error::new(ErrorKind::Eof {
            offset: self.position,
            needed,
        })
    }

    #[inline]
    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let (head, rest) = get_split::<N>(self.data).ok_or_else(|| self.eof(N))?;
        self.data = rest;
        self.position += N;
        Ok(head)
    }

    /// Advance a given number of bytes and return them
    #[inline]
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], Error> {
        if len > self.data.len() {
            return Err(self.eof(len));
        }

        let (head, rest) = self.data.split_at(len);
        self.data = rest;
        self.position += len;
        Ok(head)
    }

    /// Advance a given number of bytes without inspecting them
    #[inline]
    pub fn skip(&mut self, len: usize) -> Result<(), Error> {
        self.read_bytes(len).map(|_| ())
    }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8, Error> {
        self.read_array::<1>().map(|x| x[0])
    }

    #[inline]
    pub fn read_i8(&mut self) -> Result<i8, Error> {
        self.read_array::<1>().map(i8::from_le_bytes)
    }

    #[inline]
    pub fn read_u16(&mut self) -> Result<u16, Error> {
        self.read_array::<2>().map(u16::from_le_bytes)
    }

    #[inline]
    pub fn read_i16(&mut self) -> Result<i16, Error> {
        self.read_array::<2>().map(i16::from_le_bytes)
    }

    #[inline]
    pub fn read_u32(&mut self) -> Result<u32, Error> {
        self.read_array::<4>().map(u32::from_le_bytes)
    }

    #[inline]
    pub fn read_i32(&mut self) -> Result<i32, Error> {
        self.read_array::<4>().map(i32::from_le_bytes)
    }

    /// Read exactly 4 bytes, typically an ASCII version tag
    #[inline]
    pub fn read_tag(&mut self) -> Result<[u8; 4], Error> {
        self.read_array::<4>()
    }

    /// Read a fixed width field that is null padded. Everything after the
    /// first null byte is discarded and invalid UTF-8 is replaced.
    pub fn read_fixed_str(&mut self, width: usize) -> Result<String, Error> {
        let field = self.read_bytes(width)?;
        let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
        Ok(lossy(&field[..end]))
    }

    /// Read the raw bytes of a length prefixed string.
    ///
    /// On failure the reader is left at the start of the prefix.
    pub fn read_prefixed(&mut self, prefix: LengthPrefix) -> Result<&'a [u8], Error> {
        let mut peek = self.clone();
        let declared = match prefix {
            LengthPrefix::U8 => usize::from(peek.read_u8()?),
            LengthPrefix::U16 => usize::from(peek.read_u16()?),
            LengthPrefix::U32 => peek.read_u32()? as usize,
        };

        if declared > peek.remaining() {
            return Err(Error::new(ErrorKind::LengthOutOfBounds {
                offset: self.position,
                declared,
                remaining: peek.remaining(),
            }));
        }

        let text = peek.read_bytes(declared)?;
        *self = peek;
        Ok(text)
    }

    /// Read a length prefixed string, replacing invalid UTF-8
    pub fn read_prefixed_str(&mut self, prefix: LengthPrefix) -> Result<String, Error> {
        self.read_prefixed(prefix).map(lossy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;
    use rstest::*;

    #[test]
    fn test_little_endian_integers() {
        let data = [
            0xff, 0xfe, 0xff, 0x01, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff,
        ];
        let mut reader = FieldReader::new(&data);
        assert_eq!(reader.read_i8().unwrap(), -1);
        assert_eq!(reader.read_i16().unwrap(), -2);
        assert_eq!(reader.read_u32().unwrap(), 1);
        assert_eq!(reader.read_i32().unwrap(), -1);
        assert_eq!(reader.position(), data.len());
        assert!(reader.is_empty());
    }

    #[test]
    fn test_eof_reports_position() {
        let data = [0x01, 0x02, 0x03];
        let mut reader = FieldReader::new(&data);
        reader.read_u16().unwrap();
        let err = reader.read_u32().unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::Eof {
                offset: 2,
                needed: 4
            }
        ));
    }

    #[test]
    fn test_fixed_str_stops_at_null() {
        let mut data = vec![0u8; 16];
        data[..5].copy_from_slice(b"Joan\0");
        data[6] = b'x';
        let mut reader = FieldReader::new(&data);
        assert_eq!(reader.read_fixed_str(16).unwrap(), "Joan");
        assert!(reader.is_empty());
    }

    #[rstest]
    #[case(LengthPrefix::U8, &[3, b'a', b'b', b'c'])]
    #[case(LengthPrefix::U16, &[3, 0, b'a', b'b', b'c'])]
    #[case(LengthPrefix::U32, &[3, 0, 0, 0, b'a', b'b', b'c'])]
    fn test_prefixed_widths(#[case] prefix: LengthPrefix, #[case] data: &[u8]) {
        let mut reader = FieldReader::new(data);
        assert_eq!(reader.read_prefixed_str(prefix).unwrap(), "abc");
        assert_eq!(reader.position(), prefix.width() + 3);
    }

    #[test]
    fn test_prefixed_length_exceeds_buffer() {
        let data = [0xff, 0xff, 0xff, 0x7f, b'a'];
        let mut reader = FieldReader::new(&data);
        let err = reader.read_prefixed_str(LengthPrefix::U32).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::LengthOutOfBounds {
                offset: 0,
                declared: 0x7fff_ffff,
                remaining: 1
            }
        ));
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let data = [2, 0, 0xff, b'a'];
        let mut reader = FieldReader::new(&data);
        assert_eq!(reader.read_prefixed_str(LengthPrefix::U16).unwrap(), "\u{fffd}a");
    }

    #[quickcheck]
    fn reader_never_panics(data: Vec<u8>) -> bool {
        let mut reader = FieldReader::new(&data);
        while reader.read_prefixed(LengthPrefix::U16).is_ok() {}
        reader.position() <= data.len()
    }
}
