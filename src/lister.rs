/*!
 * Target classification and recursive directory descent
 */

use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::{ListError, Result};
use crate::types::{Entry, EntryKind, ListStats};
use crate::writer::EntryWriter;

/// Recursive lister for a single target path
pub struct Lister {
    /// Lister configuration
    config: Config,
    /// Path of the directory whose stream is currently being read; grows
    /// and shrinks around each recursive call
    pub(crate) path: PathBuf,
    /// Counts of printed entries
    stats: ListStats,
}

impl Lister {
    /// Create a new lister
    pub fn new(config: Config) -> Self {
        let path = config.target.clone();
        Self {
            config,
            path,
            stats: ListStats::default(),
        }
    }

    /// Counts of entries printed so far
    pub fn stats(&self) -> ListStats {
        self.stats
    }

    /// Open the target and determine its kind.
    ///
    /// Opening follows symlinks, so a symlink target is classified as
    /// whatever it points at and a dangling one fails to open.
    pub fn classify(&self) -> Result<EntryKind> {
        let file = File::open(&self.config.target).map_err(|e| ListError::Open {
            path: self.config.target.clone(),
            source: e,
        })?;
        let metadata = file.metadata().map_err(|e| ListError::Stat {
            path: self.config.target.clone(),
            source: e,
        })?;

        Ok(EntryKind::from(metadata.file_type()))
    }

    /// Classify the target and list it.
    ///
    /// A non-directory target produces a single `<path>(<tag>)` line. A
    /// directory is descended depth-first, each entry printed before any
    /// of its own children.
    pub fn run<W: Write>(&mut self, out: &mut EntryWriter<W>) -> Result<()> {
        let kind = self.classify()?;
        if !kind.is_dir() {
            out.write_target(&self.config.target, kind)?;
            self.stats.record(kind);
            return Ok(());
        }

        self.descend(out, 0)
    }

    /// Read one directory stream, printing each entry and recursing into
    /// subdirectories.
    ///
    /// Entries come back in whatever order the OS yields them; they are
    /// never sorted. Names starting with `.` are skipped outright, so
    /// hidden directories are never opened either.
    fn descend<W: Write>(&mut self, out: &mut EntryWriter<W>, depth: usize) -> Result<()> {
        let stream = fs::read_dir(&self.path).map_err(|e| ListError::Open {
            path: self.path.clone(),
            source: e,
        })?;

        for item in stream {
            let entry = item.map_err(|e| ListError::Read {
                path: self.path.clone(),
                source: e,
            })?;
            let name = entry.file_name();
            if name.as_encoded_bytes().starts_with(b".") {
                continue;
            }

            // One kind per entry, driving both the printed tag and the
            // descent decision. file_type() stats on its own when the
            // stream reports an unknown type.
            let file_type = entry.file_type().map_err(|e| ListError::Stat {
                path: entry.path(),
                source: e,
            })?;
            let kind = EntryKind::from(file_type);

            out.write_entry(&Entry {
                name: name.to_string_lossy().into_owned(),
                kind,
                depth,
            })?;
            self.stats.record(kind);

            if kind.is_dir() {
                self.path.push(&name);
                let result = self.descend(out, depth + 1);
                self.path.pop();
                result?;
            }
        }

        Ok(())
    }
}
