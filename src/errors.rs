use std::fmt;

/// An error that can occur when decoding archives, scenarios or trigger data
#[derive(Debug)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub(crate) fn new(kind: ErrorKind) -> Error {
        Error(Box::new(kind))
    }

    /// Return the specific type of error
    pub fn kind(&self) -> &ErrorKind {
        &self.0
    }

    /// Returns the byte offset that the error occurs (if available)
    pub fn offset(&self) -> Option<usize> {
        self.0.offset()
    }

    /// Returns true if the error stems from malformed input rather than the
    /// environment. A structural error aborts the archive or record being
    /// decoded, never a whole batch.
    pub fn is_structural(&self) -> bool {
        matches!(
            *self.0,
            ErrorKind::Eof { .. }
                | ErrorKind::LengthOutOfBounds { .. }
                | ErrorKind::EntryOutOfBounds { .. }
                | ErrorKind::ArchiveTooLarge { .. }
                | ErrorKind::InvalidHeader
        )
    }
}

/// Specific type of error
#[derive(Debug)]
pub enum ErrorKind {
    /// A fixed width field extends past the end of the buffer
    Eof { offset: usize, needed: usize },

    /// A length prefix declares more bytes than remain in the buffer
    LengthOutOfBounds {
        offset: usize,
        declared: usize,
        remaining: usize,
    },

    /// A scenario entry declares a byte range outside of the archive
    EntryOutOfBounds {
        index: usize,
        offset: u32,
        size: u32,
        len: usize,
    },

    /// The archive is too large to be addressed with 32 bit offsets
    ArchiveTooLarge { len: usize },

    /// An entry index beyond the archive's entry list was requested
    UnknownEntry { index: usize },

    /// Required header bytes are absent or malformed
    InvalidHeader,

    /// An IO error while reading input or writing output
    Io(std::io::Error),

    /// The scenario export could not be deserialized
    #[cfg(feature = "json")]
    Json(serde_json::Error),
}

impl ErrorKind {
    pub fn offset(&self) -> Option<usize> {
        match *self {
            ErrorKind::Eof { offset, .. } => Some(offset),
            ErrorKind::LengthOutOfBounds { offset, .. } => Some(offset),
            ErrorKind::EntryOutOfBounds { offset, .. } => Some(offset as usize),
            _ => None,
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self.0 {
            ErrorKind::Io(ref err) => Some(err),
            #[cfg(feature = "json")]
            ErrorKind::Json(ref err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self.0 {
            ErrorKind::Eof { offset, needed } => write!(
                f,
                "unexpected end of data (needed {} bytes at offset: {})",
                needed, offset
            ),
            ErrorKind::LengthOutOfBounds {
                offset,
                declared,
                remaining,
            } => write!(
                f,
                "declared length {} exceeds the {} remaining bytes (offset: {})",
                declared, remaining, offset
            ),
            ErrorKind::EntryOutOfBounds {
                index,
                offset,
                size,
                len,
            } => write!(
                f,
                "scenario entry {} spans 0x{:x}..0x{:x} which is outside of the {} byte archive",
                index,
                offset,
                u64::from(offset) + u64::from(size),
                len
            ),
            ErrorKind::ArchiveTooLarge { len } => {
                write!(f, "archive of {} bytes exceeds 32 bit addressing", len)
            }
            ErrorKind::UnknownEntry { index } => write!(f, "no scenario entry at index {}", index),
            ErrorKind::InvalidHeader => write!(f, "invalid or truncated header"),
            ErrorKind::Io(ref err) => write!(f, "io error: {}", err),
            #[cfg(feature = "json")]
            ErrorKind::Json(ref err) => write!(f, "scenario export error: {}", err),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::new(kind)
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::new(ErrorKind::Io(error))
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::new(ErrorKind::Json(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_classification() {
        let err = Error::new(ErrorKind::LengthOutOfBounds {
            offset: 10,
            declared: 400,
            remaining: 3,
        });
        assert!(err.is_structural());
        assert_eq!(err.offset(), Some(10));

        let io = Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(!io.is_structural());
        assert_eq!(io.offset(), None);
    }

    #[test]
    fn test_entry_display_includes_range() {
        let err = Error::new(ErrorKind::EntryOutOfBounds {
            index: 1,
            offset: 0x10,
            size: 0x20,
            len: 24,
        });
        assert_eq!(
            err.to_string(),
            "scenario entry 1 spans 0x10..0x30 which is outside of the 24 byte archive"
        );
    }
}
