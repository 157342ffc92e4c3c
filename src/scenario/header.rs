use crate::{
    reader::{FieldReader, LengthPrefix},
    util::{is_version_marker, lossy},
    Error, ErrorKind,
};

/// The uncompressed prefix of a scenario stream.
///
/// Only the version and declared header length are mandatory. The remaining
/// fields are read from within the declared header region and are absent when
/// the region is too short to hold them. Campaign embedded scenarios commonly
/// declare an empty header.
///
/// ```rust
/// use rge::scenario::ScenarioHeader;
/// let header = ScenarioHeader::from_slice(b"1.54\0\0\0\0")?;
/// assert_eq!(header.version(), "1.54");
/// assert_eq!(header.header_len(), 0);
/// assert_eq!(header.instructions(), None);
/// # Ok::<(), rge::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioHeader {
    version: [u8; 4],
    header_len: u32,
    savable: Option<u32>,
    timestamp: Option<u32>,
    instructions: Option<String>,
    player_count: Option<u32>,
}

impl ScenarioHeader {
    /// Bytes preceding the declared header region
    pub const PREFIX_LEN: usize = 8;

    /// Parses the header at the start of a scenario stream
    pub fn from_slice(data: &[u8]) -> Result<Self, Error> {
        let mut reader = FieldReader::new(data);
        let version = reader
            .read_tag()
            .map_err(|_| Error::new(ErrorKind::InvalidHeader))?;
        if !is_version_marker(&version) {
            return Err(Error::new(ErrorKind::InvalidHeader));
        }

        let header_len = reader
            .read_u32()
            .map_err(|_| Error::new(ErrorKind::InvalidHeader))?;

        let region_len = header_len as usize;
        if region_len > reader.remaining() {
            return Err(Error::new(ErrorKind::LengthOutOfBounds {
                offset: 4,
                declared: region_len,
                remaining: reader.remaining(),
            }));
        }

        let region = &reader.remainder()[..region_len];
        let mut header = ScenarioHeader {
            version,
            header_len,
            savable: None,
            timestamp: None,
            instructions: None,
            player_count: None,
        };

        if !region.is_empty() {
            header.read_region(region)?;
        }

        Ok(header)
    }

    fn read_region(&mut self, region: &[u8]) -> Result<(), Error> {
        let mut reader = FieldReader::with_position(region, Self::PREFIX_LEN);
        self.savable = Some(reader.read_u32()?);
        self.timestamp = Some(reader.read_u32()?);
        self.instructions = Some(reader.read_prefixed_str(LengthPrefix::U32)?);
        if reader.remaining() >= 4 {
            self.player_count = Some(reader.read_u32()?);
        }

        Ok(())
    }

    /// The version string, eg: `1.54`
    pub fn version(&self) -> String {
        lossy(&self.version)
    }

    /// Declared length of the header region that follows the prefix
    pub fn header_len(&self) -> u32 {
        self.header_len
    }

    /// Offset where the (compressed) scenario body begins
    pub fn body_offset(&self) -> usize {
        Self::PREFIX_LEN + self.header_len as usize
    }

    /// Format specific save flag
    pub fn savable(&self) -> Option<u32> {
        self.savable
    }

    /// Unix timestamp of the last save
    pub fn timestamp(&self) -> Option<u32> {
        self.timestamp
    }

    /// Scenario instructions shown before the game starts
    pub fn instructions(&self) -> Option<&str> {
        self.instructions.as_deref()
    }

    pub fn player_count(&self) -> Option<u32> {
        self.player_count
    }
}
