/*!
 * Line output for lstree
 */

use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::types::{Entry, EntryKind};

/// Renders classification lines to any byte sink
pub struct EntryWriter<W: Write> {
    /// Output sink
    out: W,
}

impl<W: Write> EntryWriter<W> {
    /// Create a new writer over `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the single classification line for a non-directory target,
    /// echoing the path exactly as it was given
    pub fn write_target(&mut self, path: &Path, kind: EntryKind) -> Result<()> {
        writeln!(self.out, "{}({})", path.display(), kind.tag())?;
        Ok(())
    }

    /// Write one visited entry: `depth` leading tabs, the name, its tag
    pub fn write_entry(&mut self, entry: &Entry) -> Result<()> {
        for _ in 0..entry.depth {
            self.out.write_all(b"\t")?;
        }
        writeln!(self.out, "{}({})", entry.name, entry.kind.tag())?;
        Ok(())
    }

    /// Flush the underlying sink
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Consume the writer, returning the sink
    pub fn into_inner(self) -> W {
        self.out
    }
}
