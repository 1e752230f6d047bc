/*!
 * Configuration handling for treescribe
 *
 * Command-line arguments and the optional on-disk settings file are merged
 * once, up front, into a `Config` value that is passed down explicitly.
 * Nothing below this layer reads ambient configuration.
 */

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::Deserialize;

use crate::error::{Result, TreescribeError};
use crate::utils::DEFAULT_IGNORE;
use crate::walker::IgnoreSet;

/// Default name for the generated file; always part of the ignore set
pub const DEFAULT_OUTPUT_FILE: &str = "structure.txt";

/// What the structure includes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ContentType {
    /// Folders and files
    All,
    /// Folders only
    Folders,
}

impl ContentType {
    pub fn include_files(self) -> bool {
        matches!(self, Self::All)
    }
}

/// Where the rendered structure is delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    File,
    Clipboard,
}

/// Command-line arguments for treescribe
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "treescribe",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate a plain-text tree of a folder's structure",
    long_about = "Renders a folder's structure as an indented plain-text tree and \
                  writes it to a file inside that folder or copies it to the clipboard. \
                  Without a subcommand it prompts for the folder and writes a file."
)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Option<Command>,

    /// Workspace root folders to choose from (defaults to the current directory)
    #[clap(long = "root")]
    pub roots: Vec<PathBuf>,

    /// What to include in the structure (prompts when omitted)
    #[clap(long, value_enum, global = true)]
    pub contents: Option<ContentType>,

    /// Comma-separated list of additional names to ignore
    #[clap(long, value_delimiter = ',', global = true)]
    pub ignore: Vec<String>,

    /// Output file name (prompts when omitted)
    #[clap(long, global = true)]
    pub output: Option<String>,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Write the structure of a folder to a file inside it
    File {
        /// Folder to scan
        folder: PathBuf,
    },
    /// Copy the structure of a folder to the clipboard
    Clip {
        /// Folder to scan
        folder: PathBuf,
    },
}

/// On-disk user settings, read once per invocation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// Additional literal names to ignore
    pub ignore: Vec<String>,
    /// Overrides the default output file name
    pub output_file: Option<String>,
}

impl UserSettings {
    /// Load settings from the user's config directory. A missing file is
    /// not an error; a malformed one is.
    pub fn load() -> Result<Self> {
        match settings_path() {
            Some(path) if path.exists() => {
                let raw = fs::read_to_string(&path)?;
                serde_json::from_str(&raw)
                    .map_err(|source| TreescribeError::Settings { path, source })
            }
            _ => Ok(Self::default()),
        }
    }
}

fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("treescribe").join("settings.json"))
}

/// Fully resolved configuration for one invocation
#[derive(Debug, Clone)]
pub struct Config {
    /// Folder supplied directly by a contextual invocation, if any
    pub folder: Option<PathBuf>,
    /// Candidate workspace roots for the prompt-driven invocation
    pub roots: Vec<PathBuf>,
    pub destination: Destination,
    /// Content choice; `None` prompts
    pub contents: Option<ContentType>,
    /// Output file name; `None` prompts when the destination is a file
    pub output: Option<String>,
    /// Name pre-filled in the filename prompt
    pub default_output: String,
    /// Merged ignore set handed to the walker
    pub ignores: IgnoreSet,
}

impl Config {
    /// Merge command-line arguments and user settings
    pub fn resolve(args: Args, settings: UserSettings) -> Self {
        let default_output = settings
            .output_file
            .clone()
            .unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string());

        let (folder, destination) = match &args.command {
            Some(Command::File { folder }) => (Some(folder.clone()), Destination::File),
            Some(Command::Clip { folder }) => (Some(folder.clone()), Destination::Clipboard),
            None => (None, Destination::File),
        };

        let mut names: Vec<String> = DEFAULT_IGNORE.iter().map(|name| name.to_string()).collect();
        names.extend(settings.ignore);
        names.extend(args.ignore);
        // The generator's own output must never show up in its own scan.
        names.push(DEFAULT_OUTPUT_FILE.to_string());
        names.push(default_output.clone());
        if let Some(name) = &args.output {
            names.push(name.clone());
        }

        Self {
            folder,
            roots: args.roots,
            destination,
            contents: args.contents,
            output: args.output,
            default_output,
            ignores: IgnoreSet::new(names),
        }
    }
}
