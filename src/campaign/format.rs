use std::{fmt, str::FromStr};

/// The layout of a campaign archive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignFormat {
    /// Scenario streams are located by scanning for version markers
    HeuristicScan,

    /// A header declares the offset and size of every scenario
    DirectoryHeader,
}

impl CampaignFormat {
    /// Determine the layout from the first 4 bytes of the archive.
    ///
    /// Directory archives open with a `2.xx` version. Anything else, including
    /// input too short to hold a version, is treated as a scan archive.
    ///
    /// ```rust
    /// use rge::campaign::CampaignFormat;
    /// assert_eq!(CampaignFormat::detect(b"2.00\x03\0\0\0"), CampaignFormat::DirectoryHeader);
    /// assert_eq!(CampaignFormat::detect(b"1.54\0\0\0\0"), CampaignFormat::HeuristicScan);
    /// assert_eq!(CampaignFormat::detect(b""), CampaignFormat::HeuristicScan);
    /// ```
    pub fn detect(data: &[u8]) -> CampaignFormat {
        match data.first_chunk::<4>() {
            Some([b'2', b'.', minor, patch]) if minor.is_ascii_digit() && patch.is_ascii_digit() => {
                CampaignFormat::DirectoryHeader
            }
            _ => CampaignFormat::HeuristicScan,
        }
    }

    /// Short name used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignFormat::HeuristicScan => "scan",
            CampaignFormat::DirectoryHeader => "directory",
        }
    }
}

impl fmt::Display for CampaignFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a format name is not recognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFormat(pub String);

impl fmt::Display for UnknownFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown campaign format '{}' (expected 'scan' or 'directory')",
            self.0
        )
    }
}

impl std::error::Error for UnknownFormat {}

impl FromStr for CampaignFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scan" => Ok(CampaignFormat::HeuristicScan),
            "directory" => Ok(CampaignFormat::DirectoryHeader),
            x => Err(UnknownFormat(x.to_string())),
        }
    }
}
