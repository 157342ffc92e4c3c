//! Expose the scenarios bundled within campaign archives.
//!
//! A campaign archive is a single file that concatenates several scenario
//! streams. Two layouts are found in the wild:
//!
//! - [Directory header](CampaignFormat::DirectoryHeader): a `2.00` header
//!   followed by a table of `(size, offset, name, filename)` records. Offsets
//!   are absolute and taken as given.
//! - [Heuristic scan](CampaignFormat::HeuristicScan): no table at all. Each
//!   scenario begins with a version marker like `1.54` followed by four null
//!   bytes, and a scenario runs until the next marker or the end of the file.
//!
//! ```text
//! CampaignArchive
//! ├── format()   → CampaignFormat (detected or caller supplied)
//! ├── entries()  → [ScenarioEntry]
//! ├── entry_data(i) → raw scenario bytes
//! └── extract(options) → ExtractReport (one outcome per entry)
//! ```
//!
//! ```rust
//! use rge::campaign::{CampaignArchive, CampaignFormat};
//! let data = b"1.54\0\0\0\0body1.36\0\0\0\0body";
//! let archive = CampaignArchive::from_slice(&data[..])?;
//! assert_eq!(archive.format(), CampaignFormat::HeuristicScan);
//! assert_eq!(archive.entries().len(), 2);
//! assert_eq!(archive.entry_data(1)?, &b"1.36\0\0\0\0body"[..]);
//! # Ok::<(), rge::Error>(())
//! ```

mod archive;
mod directory;
mod extract;
mod format;
mod scan;

pub use archive::*;
pub use directory::STRING_TAG;
pub use extract::*;
pub use format::*;
pub use scan::scan_offsets;
