//! Selective extraction of plugin archive members.
//!
//! The [`ResourceExtractor`] reads members out of the packaged plugin zip and
//! writes them into the resource directory, skipping work whose result is
//! already on disk and current.

use crate::{ResourceError, ResourceResult};
use chrono::{DateTime, Datelike, Local, Timelike};
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use zip::ZipArchive;

/// Outcome of a staleness-checked extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The member was written to disk.
    Extracted(PathBuf),
    /// An up-to-date copy already existed; nothing was written.
    Unchanged(PathBuf),
}

impl Extraction {
    /// The destination path, whether or not anything was written.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Extraction::Extracted(path) | Extraction::Unchanged(path) => path,
        }
    }

    /// Whether the member was actually written.
    #[must_use]
    pub fn was_extracted(&self) -> bool {
        matches!(self, Extraction::Extracted(_))
    }
}

/// Overwrite behavior for bulk extraction.
///
/// Help content is rewritten on every pass while icons are only written when
/// absent. The two policies are deliberately kept distinct; callers pick the
/// one their resource class requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Existing destination files are overwritten.
    Always,
    /// Existing destination files are left untouched.
    IfAbsent,
}

/// Extractor over a plugin's packaged zip archive.
///
/// # Example
///
/// ```no_run
/// use syncman_resources::ResourceExtractor;
/// use std::path::Path;
///
/// let mut extractor = ResourceExtractor::open("plugins/SyncMan.zip")?;
/// let outcome = extractor.extract_if_stale("syncman.ui", Path::new("plugins/SyncMan_resources"))?;
/// # Ok::<(), syncman_resources::ResourceError>(())
/// ```
#[derive(Debug)]
pub struct ResourceExtractor {
    archive: ZipArchive<File>,
}

impl ResourceExtractor {
    /// Open a plugin archive for reading.
    pub fn open<P: AsRef<Path>>(path: P) -> ResourceResult<Self> {
        let file = File::open(path.as_ref())?;
        let archive = ZipArchive::new(file)?;
        Ok(Self { archive })
    }

    /// List all member names in the archive.
    #[must_use]
    pub fn member_names(&self) -> Vec<String> {
        (0..self.archive.len())
            .filter_map(|i| self.archive.name_for_index(i).map(String::from))
            .collect()
    }

    /// Check if a member exists in the archive.
    #[must_use]
    pub fn has_member(&self, name: &str) -> bool {
        self.archive.index_for_name(name).is_some()
    }

    /// Read a member's bytes.
    pub fn read_member(&mut self, name: &str) -> ResourceResult<Vec<u8>> {
        let mut file = self
            .archive
            .by_name(name)
            .map_err(|_| ResourceError::MissingMember(name.to_string()))?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents)?;
        Ok(contents)
    }

    /// Whether a member's packaged timestamp is strictly newer than the
    /// modification time of `reference`.
    ///
    /// Returns `true` when `reference` does not exist or the member carries
    /// no timestamp. Used to decide whether a derived artifact (for example
    /// a compiled form module) still reflects the packaged source.
    pub fn member_newer_than(&mut self, member: &str, reference: &Path) -> ResourceResult<bool> {
        let packaged = {
            let file = self
                .archive
                .by_name(member)
                .map_err(|_| ResourceError::MissingMember(member.to_string()))?;
            file.last_modified()
        };

        let Some(packaged) = packaged else {
            return Ok(true);
        };
        if !reference.exists() {
            return Ok(true);
        }

        let modified = fs::metadata(reference)?.modified()?;
        Ok(packaged_minute_key(&packaged) > local_minute_key(modified))
    }

    /// Extract a member to `dest_dir/member`, unless an existing destination
    /// file is at least as new as the packaged timestamp.
    ///
    /// Archive timestamps have minute resolution, so the comparison ignores
    /// seconds. A member carrying no timestamp is always extracted. The
    /// destination's parent directories are created as needed and an existing
    /// stale file is overwritten.
    pub fn extract_if_stale(&mut self, member: &str, dest_dir: &Path) -> ResourceResult<Extraction> {
        let dest = dest_dir.join(member);

        let contents = {
            let mut file = self
                .archive
                .by_name(member)
                .map_err(|_| ResourceError::MissingMember(member.to_string()))?;

            if let Some(packaged) = file.last_modified()
                && dest.exists()
            {
                let modified = fs::metadata(&dest)?.modified()?;
                if local_minute_key(modified) >= packaged_minute_key(&packaged) {
                    tracing::debug!(member, dest = %dest.display(), "destination is current, skipping extraction");
                    return Ok(Extraction::Unchanged(dest));
                }
            }

            let mut contents = Vec::new();
            file.read_to_end(&mut contents)?;
            contents
        };

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&dest, &contents)?;
        tracing::debug!(member, dest = %dest.display(), "extracted archive member");

        Ok(Extraction::Extracted(dest))
    }

    /// Extract every member matching `predicate` to `dest_dir/<member>`,
    /// recreating the members' relative directory structure.
    ///
    /// Directory-only entries (names ending in `/`) are skipped. Whether an
    /// existing destination file is overwritten is decided by `policy`.
    /// Returns the paths actually written.
    pub fn extract_matching<F>(
        &mut self,
        predicate: F,
        dest_dir: &Path,
        policy: OverwritePolicy,
    ) -> ResourceResult<Vec<PathBuf>>
    where
        F: Fn(&str) -> bool,
    {
        let members: Vec<String> = self
            .member_names()
            .into_iter()
            .filter(|name| !name.ends_with('/') && predicate(name))
            .collect();

        let mut written = Vec::new();
        for member in members {
            let dest = dest_dir.join(&member);
            if policy == OverwritePolicy::IfAbsent && dest.exists() {
                continue;
            }

            let contents = self.read_member(&member)?;
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&dest, &contents)?;
            written.push(dest);
        }

        tracing::debug!(count = written.len(), dest = %dest_dir.display(), "bulk extraction complete");
        Ok(written)
    }
}

/// Minute-resolution key of a packaged timestamp.
fn packaged_minute_key(packaged: &zip::DateTime) -> (i32, u32, u32, u32, u32) {
    (
        i32::from(packaged.year()),
        u32::from(packaged.month()),
        u32::from(packaged.day()),
        u32::from(packaged.hour()),
        u32::from(packaged.minute()),
    )
}

/// Minute-resolution key of a filesystem timestamp, in local time to match
/// the archive's naive timestamps.
fn local_minute_key(modified: SystemTime) -> (i32, u32, u32, u32, u32) {
    let local: DateTime<Local> = modified.into();
    (
        local.year(),
        local.month(),
        local.day(),
        local.hour(),
        local.minute(),
    )
}
