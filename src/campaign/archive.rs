use super::{directory, scan, CampaignFormat, SCENARIO_EXTENSION};
use crate::{Error, ErrorKind};
use std::fmt;

/// A scenario stream declared by (or discovered in) a campaign archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioEntry {
    size: u32,
    offset: u32,
    name: String,
    filename: String,
}

impl ScenarioEntry {
    pub(crate) fn new(size: u32, offset: u32, name: String, filename: String) -> Self {
        ScenarioEntry {
            size,
            offset,
            name,
            filename,
        }
    }

    /// Entries found by scanning have no declared names, so they are named
    /// after their 1-based position
    pub(crate) fn synthesized(index: usize, offset: u32, size: u32) -> Self {
        let name = format!("scenario_{}", index + 1);
        let filename = format!("{}.{}", name, SCENARIO_EXTENSION);
        ScenarioEntry::new(size, offset, name, filename)
    }

    /// Length of the scenario stream in bytes
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Absolute offset of the scenario stream from the start of the archive
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// The display name of the scenario
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The filename the scenario is stored under
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Exclusive end offset of the stream. Computed in 64 bits as declared
    /// sizes are not trusted to stay within 32 bits.
    pub fn end(&self) -> u64 {
        u64::from(self.offset) + u64::from(self.size)
    }
}

/// A recoverable oddity found while reading an archive header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveWarning {
    /// The directory header did not declare the expected `2.00` version
    UnexpectedVersion { found: String },

    /// A string marker in an entry record did not equal [STRING_TAG](super::STRING_TAG)
    TagMismatch {
        entry: usize,
        offset: usize,
        found: u16,
    },
}

impl fmt::Display for ArchiveWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchiveWarning::UnexpectedVersion { found } => {
                write!(f, "expected campaign version 2.00, got {}", found)
            }
            ArchiveWarning::TagMismatch {
                entry,
                offset,
                found,
            } => write!(
                f,
                "unexpected string id 0x{:04x} in entry {} (offset: 0x{:x})",
                found, entry, offset
            ),
        }
    }
}

/// A campaign archive and the scenario entries it bundles
#[derive(Debug, Clone)]
pub struct CampaignArchive<'a> {
    data: &'a [u8],
    format: CampaignFormat,
    version: String,
    dependencies: Vec<u32>,
    name: Option<String>,
    entries: Vec<ScenarioEntry>,
    warnings: Vec<ArchiveWarning>,
}

impl<'a> CampaignArchive<'a> {
    /// Parse an archive, detecting its format from the leading version
    pub fn from_slice(data: &'a [u8]) -> Result<Self, Error> {
        Self::parse(data, CampaignFormat::detect(data))
    }

    /// Parse an archive with an explicitly chosen format
    pub fn parse(data: &'a [u8], format: CampaignFormat) -> Result<Self, Error> {
        match format {
            CampaignFormat::HeuristicScan => {
                let version_len = data.len().min(4);
                let version = String::from_utf8_lossy(&data[..version_len]).into_owned();
                let entries = scan::scan_entries(data)?;
                if entries.is_empty() {
                    log::info!("no scenarios found in campaign data");
                }

                Ok(CampaignArchive {
                    data,
                    format,
                    version,
                    dependencies: Vec::new(),
                    name: None,
                    entries,
                    warnings: Vec::new(),
                })
            }
            CampaignFormat::DirectoryHeader => {
                let header = directory::parse_directory(data)?;
                Ok(CampaignArchive {
                    data,
                    format,
                    version: header.version,
                    dependencies: header.dependencies,
                    name: Some(header.name),
                    entries: header.entries,
                    warnings: header.warnings,
                })
            }
        }
    }

    /// The raw archive bytes
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// The layout the archive was parsed with
    pub fn format(&self) -> CampaignFormat {
        self.format
    }

    /// The leading 4 byte version string
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Ids of the data packages the campaign depends on
    pub fn dependencies(&self) -> &[u32] {
        &self.dependencies
    }

    /// The declared campaign name. Only directory archives declare one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Entries in the order they are declared or found
    pub fn entries(&self) -> &[ScenarioEntry] {
        &self.entries
    }

    /// Recoverable issues encountered while reading the header
    pub fn warnings(&self) -> &[ArchiveWarning] {
        &self.warnings
    }

    /// Returns the raw bytes of the scenario at `index`.
    ///
    /// Fails if the entry's declared range does not lie within the archive.
    pub fn entry_data(&self, index: usize) -> Result<&'a [u8], Error> {
        let entry = self
            .entries
            .get(index)
            .ok_or(ErrorKind::UnknownEntry { index })?;
        let out_of_bounds = || {
            Error::new(ErrorKind::EntryOutOfBounds {
                index,
                offset: entry.offset,
                size: entry.size,
                len: self.data.len(),
            })
        };

        let start = entry.offset as usize;
        let end = usize::try_from(entry.end()).map_err(|_| out_of_bounds())?;
        self.data.get(start..end).ok_or_else(out_of_bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_archive_metadata() {
        let data = b"1.21\0\0\0\0scenario";
        let archive = CampaignArchive::from_slice(&data[..]).unwrap();
        assert_eq!(archive.format(), CampaignFormat::HeuristicScan);
        assert_eq!(archive.version(), "1.21");
        assert_eq!(archive.name(), None);
        assert!(archive.dependencies().is_empty());
        assert_eq!(archive.entries()[0].name(), "scenario_1");
        assert_eq!(archive.entry_data(0).unwrap(), &data[..]);
    }

    #[test]
    fn test_short_scan_archive_is_empty() {
        let archive = CampaignArchive::from_slice(b"1.5").unwrap();
        assert_eq!(archive.version(), "1.5");
        assert!(archive.entries().is_empty());
    }

    #[test]
    fn test_entry_out_of_bounds() {
        let archive = CampaignArchive {
            data: &[0u8; 10],
            format: CampaignFormat::DirectoryHeader,
            version: String::from("2.00"),
            dependencies: Vec::new(),
            name: Some(String::new()),
            entries: vec![ScenarioEntry::new(
                u32::MAX,
                4,
                String::from("a"),
                String::from("a.aoe2scenario"),
            )],
            warnings: Vec::new(),
        };

        let err = archive.entry_data(0).unwrap_err();
        assert!(err.is_structural());
        assert!(matches!(
            err.kind(),
            ErrorKind::EntryOutOfBounds { index: 0, len: 10, .. }
        ));
    }
}
