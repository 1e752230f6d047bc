/*!
 * treescribe - generate a plain-text tree of a folder's structure
 *
 * Renders a folder hierarchy as indented `|--` text and delivers the
 * result to a file inside the folder or to the system clipboard.
 */

pub mod clipboard;
pub mod command;
pub mod config;
pub mod error;
pub mod prompt;
pub mod utils;
pub mod walker;
pub mod writer;


// Re-export main components for easier access
pub use command::{run, Outcome};
pub use config::{Args, Config, ContentType, Destination, UserSettings, DEFAULT_OUTPUT_FILE};
pub use error::{Result, TreescribeError};
pub use walker::{render, DirectoryEntry, EntryKind, IgnoreSet, RenderOptions};
pub use writer::StructureWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
