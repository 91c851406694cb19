/*!
 * Core types and data structures for the lstree application
 */

use std::fs;
use std::os::unix::fs::FileTypeExt;

/// Represents the filesystem entry types the lister distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file
    Regular,
    /// Directory containing other entries
    Directory,
    /// Symbolic link
    Symlink,
    /// Block device
    BlockDevice,
    /// Character device
    CharDevice,
    /// Named pipe
    Fifo,
    /// Unix domain socket
    Socket,
    /// Anything the OS reports that none of the above cover
    Unknown,
}

impl EntryKind {
    /// Single-character display tag for this kind.
    ///
    /// This match is the one authoritative mapping: the same kind that
    /// produces the tag also drives the descent decision, so a real
    /// subdirectory always prints as `d`.
    pub fn tag(self) -> char {
        match self {
            EntryKind::Regular => 'r',
            EntryKind::Directory => 'd',
            EntryKind::Symlink => 'l',
            EntryKind::BlockDevice => 'b',
            EntryKind::CharDevice => 'c',
            EntryKind::Fifo => 'f',
            EntryKind::Socket => 's',
            EntryKind::Unknown => '?',
        }
    }

    /// Whether the lister descends into entries of this kind
    pub fn is_dir(self) -> bool {
        self == EntryKind::Directory
    }
}

impl From<fs::FileType> for EntryKind {
    fn from(file_type: fs::FileType) -> Self {
        if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::Regular
        } else if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_block_device() {
            EntryKind::BlockDevice
        } else if file_type.is_char_device() {
            EntryKind::CharDevice
        } else if file_type.is_fifo() {
            EntryKind::Fifo
        } else if file_type.is_socket() {
            EntryKind::Socket
        } else {
            EntryKind::Unknown
        }
    }
}

/// One item observed while reading a directory's contents.
///
/// Entries are ephemeral: produced one at a time during traversal, written
/// out, and discarded. They are never collected.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Entry name, converted lossily for display
    pub name: String,
    /// What kind of entry this is
    pub kind: EntryKind,
    /// Directory levels below the initially supplied path
    pub depth: usize,
}

/// Counts of printed entries, by kind
#[derive(Debug, Clone, Copy, Default)]
pub struct ListStats {
    /// Directories printed
    pub directories: usize,
    /// Regular files printed
    pub files: usize,
    /// Symbolic links printed
    pub symlinks: usize,
    /// Devices, fifos, sockets and unknown entries printed
    pub others: usize,
}

impl ListStats {
    /// Record one printed entry
    pub(crate) fn record(&mut self, kind: EntryKind) {
        match kind {
            EntryKind::Directory => self.directories += 1,
            EntryKind::Regular => self.files += 1,
            EntryKind::Symlink => self.symlinks += 1,
            _ => self.others += 1,
        }
    }

    /// Total number of printed entries
    pub fn total(&self) -> usize {
        self.directories + self.files + self.symlinks + self.others
    }
}
