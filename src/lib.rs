/*!
 * lstree - Print an indented tree of directory contents
 *
 * This library classifies a filesystem path and, for directories, walks
 * their contents depth-first, emitting one line per non-hidden entry with
 * a tab per nesting level and a one-character file-type tag.
 */

pub mod config;
pub mod error;
pub mod lister;
pub mod types;
pub mod writer;


// Re-export main components for easier access
pub use config::{Args, Config};
pub use error::{ListError, Result};
pub use lister::Lister;
pub use types::{Entry, EntryKind, ListStats};
pub use writer::EntryWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
