use super::{CampaignArchive, ScenarioEntry};
use crate::Error;
use std::{
    collections::HashSet,
    ffi::OsString,
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

/// File extension given to extracted scenario streams
pub const SCENARIO_EXTENSION: &str = "aoe2scenario";

/// The directory scenarios are extracted to when the caller does not choose
/// one: `<campaign_dir>/<campaign_stem>_scenarios`
///
/// ```rust
/// use rge::campaign::default_output_dir;
/// use std::path::Path;
/// let dir = default_output_dir(Path::new("campaigns/cam2.aoe2campaign"));
/// assert_eq!(dir, Path::new("campaigns/cam2_scenarios"));
/// ```
pub fn default_output_dir(campaign: &Path) -> PathBuf {
    let stem = campaign
        .file_stem()
        .map(|x| x.to_string_lossy().into_owned())
        .unwrap_or_default();
    let parent = campaign.parent().unwrap_or_else(|| Path::new(""));
    parent.join(format!("{}_scenarios", stem))
}

/// Controls where and how scenario streams are written
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    output_dir: PathBuf,
    overwrite: bool,
}

impl ExtractOptions {
    /// Write into the given directory, replacing existing files
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        ExtractOptions {
            output_dir: output_dir.into(),
            overwrite: true,
        }
    }

    /// When false, an entry whose destination already exists fails instead
    /// of replacing the file
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

/// The result of writing one scenario entry
#[derive(Debug)]
pub struct EntryOutcome {
    pub index: usize,
    pub path: PathBuf,
    pub result: Result<usize, Error>,
}

/// Per entry results of an extraction
#[derive(Debug)]
pub struct ExtractReport {
    output_dir: PathBuf,
    outcomes: Vec<EntryOutcome>,
}

impl ExtractReport {
    /// The directory entries were written to
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// One outcome per archive entry, in entry order
    pub fn outcomes(&self) -> &[EntryOutcome] {
        &self.outcomes
    }

    /// Paths of the scenarios that were written
    pub fn written(&self) -> impl Iterator<Item = &Path> {
        self.outcomes
            .iter()
            .filter(|x| x.result.is_ok())
            .map(|x| x.path.as_path())
    }

    /// Number of entries that could not be written
    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|x| x.result.is_err()).count()
    }

    /// True when every entry was written
    pub fn is_success(&self) -> bool {
        self.failures() == 0
    }
}

fn fallback_name(index: usize) -> OsString {
    OsString::from(format!("scenario_{}.{}", index + 1, SCENARIO_EXTENSION))
}

/// Only the final path component of a declared filename is honored so that a
/// crafted archive cannot write outside of the output directory.
fn storage_name(index: usize, entry: &ScenarioEntry) -> OsString {
    match Path::new(entry.filename()).file_name() {
        Some(name) => name.to_os_string(),
        None => fallback_name(index),
    }
}

/// Assigns each entry a file name that no other entry in the batch uses. An
/// entry whose name is taken falls back to its positional name, suffixed
/// until free.
fn storage_names(entries: &[ScenarioEntry]) -> Vec<OsString> {
    let mut taken = HashSet::with_capacity(entries.len());
    let mut result = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let declared = storage_name(index, entry);
        let mut name = declared.clone();
        let mut attempt = 1;
        while taken.contains(&name) {
            attempt += 1;
            name = if attempt == 2 {
                fallback_name(index)
            } else {
                OsString::from(format!(
                    "scenario_{}_{}.{}",
                    index + 1,
                    attempt - 2,
                    SCENARIO_EXTENSION
                ))
            };
        }

        if name != declared {
            log::warn!(
                "entry {} file name {:?} is already used, writing {:?} instead",
                index,
                declared,
                name
            );
        }

        taken.insert(name.clone());
        result.push(name);
    }

    result
}

impl CampaignArchive<'_> {
    /// Write every scenario stream verbatim to its own file.
    ///
    /// The output directory is created if absent; failing to create it is the
    /// only error returned. A failure to slice or write an individual entry is
    /// recorded in the report and the remaining entries are still written.
    pub fn extract(&self, options: &ExtractOptions) -> Result<ExtractReport, Error> {
        fs::create_dir_all(options.output_dir())?;

        let outcomes = storage_names(self.entries())
            .into_iter()
            .enumerate()
            .map(|(index, name)| {
                let path = options.output_dir().join(name);
                let result = self.write_entry(index, &path, options.overwrite);
                match &result {
                    Ok(len) => log::info!("extracted {} ({} bytes)", path.display(), len),
                    Err(e) => log::warn!("failed to extract {}: {}", path.display(), e),
                }

                EntryOutcome {
                    index,
                    path,
                    result,
                }
            })
            .collect();

        Ok(ExtractReport {
            output_dir: options.output_dir().to_path_buf(),
            outcomes,
        })
    }

    fn write_entry(&self, index: usize, path: &Path, overwrite: bool) -> Result<usize, Error> {
        let data = self.entry_data(index)?;
        let mut file = if overwrite {
            OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)?
        } else {
            OpenOptions::new().write(true).create_new(true).open(path)?
        };

        file.write_all(data)?;
        Ok(data.len())
    }
}
