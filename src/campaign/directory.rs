use super::{ArchiveWarning, ScenarioEntry};
use crate::{
    reader::{FieldReader, LengthPrefix},
    util::lossy,
    Error, ErrorKind,
};

/// The string id that precedes each name in a directory entry record
pub const STRING_TAG: u16 = 0x0A60;

const EXPECTED_VERSION: &[u8; 4] = b"2.00";
const NAME_WIDTH: usize = 256;

/// The smallest possible entry record: size, offset, and two empty strings
const MIN_RECORD_LEN: usize = 4 + 4 + 2 + 2 + 2 + 2;

#[derive(Debug)]
pub(crate) struct DirectoryHeader {
    pub version: String,
    pub dependencies: Vec<u32>,
    pub name: String,
    pub entries: Vec<ScenarioEntry>,
    pub warnings: Vec<ArchiveWarning>,
}

/// Read the campaign header and every entry record it declares.
///
/// The number of entries returned always equals the declared scenario count:
/// a record that cannot be read in full fails the whole header. Offsets and
/// sizes are recorded as declared and only checked when the entry is sliced.
pub(crate) fn parse_directory(data: &[u8]) -> Result<DirectoryHeader, Error> {
    let mut reader = FieldReader::new(data);
    let mut warnings = Vec::new();

    let version = reader
        .read_tag()
        .map_err(|_| Error::new(ErrorKind::InvalidHeader))?;
    if &version != EXPECTED_VERSION {
        let found = lossy(&version);
        log::warn!("expected campaign version 2.00, got {}", found);
        warnings.push(ArchiveWarning::UnexpectedVersion { found });
    }

    let dep_offset = reader.position();
    let dep_count = reader.read_u32()? as usize;
    if dep_count.saturating_mul(4) > reader.remaining() {
        return Err(Error::new(ErrorKind::LengthOutOfBounds {
            offset: dep_offset,
            declared: dep_count.saturating_mul(4),
            remaining: reader.remaining(),
        }));
    }

    let dependencies = (0..dep_count)
        .map(|_| reader.read_u32())
        .collect::<Result<Vec<_>, _>>()?;

    let name = reader.read_fixed_str(NAME_WIDTH)?;
    let scenario_count = reader.read_u32()? as usize;
    log::debug!(
        "campaign '{}' declares {} scenarios and {} dependencies",
        name,
        scenario_count,
        dependencies.len()
    );

    let mut entries = Vec::with_capacity(scenario_count.min(reader.remaining() / MIN_RECORD_LEN));
    for index in 0..scenario_count {
        let size = reader.read_u32()?;
        let offset = reader.read_u32()?;
        let name = read_tagged_str(&mut reader, index, &mut warnings)?;
        let filename = read_tagged_str(&mut reader, index, &mut warnings)?;
        entries.push(ScenarioEntry::new(size, offset, name, filename));
    }

    Ok(DirectoryHeader {
        version: lossy(&version),
        dependencies,
        name,
        entries,
        warnings,
    })
}

fn read_tagged_str(
    reader: &mut FieldReader,
    entry: usize,
    warnings: &mut Vec<ArchiveWarning>,
) -> Result<String, Error> {
    let offset = reader.position();
    let tag = reader.read_u16()?;
    if tag != STRING_TAG {
        log::warn!(
            "unexpected string id 0x{:04x} in entry {} (offset: 0x{:x})",
            tag,
            entry,
            offset
        );
        warnings.push(ArchiveWarning::TagMismatch {
            entry,
            offset,
            found: tag,
        });
    }

    reader.read_prefixed_str(LengthPrefix::U16)
}
