/*!
 * Command flow: gather choices, run the walker, deliver the result
 *
 * One invocation is a linear sequence with early exits: resolve the
 * folder, resolve the content choice, resolve the file name when the
 * destination is a file, scan, deliver, notify. Any dismissed prompt
 * ends the whole command silently with no artifact produced.
 */

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::clipboard;
use crate::config::{Config, ContentType, Destination};
use crate::error::{Result, TreescribeError};
use crate::prompt::Prompter;
use crate::walker::{self, RenderOptions};
use crate::writer::StructureWriter;

/// How one invocation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Structure written to the given path
    Written { path: PathBuf },
    /// Structure placed on the clipboard
    Copied,
    /// The user dismissed a prompt; nothing was produced
    Cancelled,
}

/// Run one invocation end to end
pub fn run(config: &Config, prompter: &dyn Prompter) -> Result<Outcome> {
    let Some(folder) = resolve_folder(config, prompter)? else {
        return Ok(Outcome::Cancelled);
    };
    let Some(contents) = resolve_contents(config, prompter)? else {
        return Ok(Outcome::Cancelled);
    };

    match config.destination {
        Destination::File => {
            let Some(name) = resolve_output_name(config, prompter)? else {
                return Ok(Outcome::Cancelled);
            };
            let structure = scan_with_progress(&folder, contents, config)?;
            let writer = StructureWriter::new(&folder, &name);
            let path = writer.write(&structure)?;
            // Stand-in for opening the written file: show what was saved.
            print!("{structure}");
            println!("Structure saved to: {}", writer.display_path());
            offer_clipboard_copy(&structure, prompter)?;
            Ok(Outcome::Written { path })
        }
        Destination::Clipboard => {
            let structure = scan_with_progress(&folder, contents, config)?;
            clipboard::copy_to_clipboard(&structure)?;
            println!("Structure copied to the clipboard!");
            Ok(Outcome::Copied)
        }
    }
}

/// Contextual invocations carry the folder; the prompt-driven one resolves
/// the workspace roots and auto-selects when there is exactly one.
fn resolve_folder(config: &Config, prompter: &dyn Prompter) -> Result<Option<PathBuf>> {
    if let Some(folder) = &config.folder {
        return canonical_folder(folder).map(Some);
    }

    let mut roots: Vec<PathBuf> = config.roots.clone();
    if roots.is_empty() {
        roots.extend(env::current_dir());
    }
    roots.retain(|root| root.is_dir());

    match roots.len() {
        0 => Err(TreescribeError::NoWorkspace),
        1 => canonical_folder(&roots[0]).map(Some),
        _ => match prompter.pick_folder(&roots)? {
            Some(folder) => canonical_folder(&folder).map(Some),
            None => Ok(None),
        },
    }
}

fn resolve_contents(config: &Config, prompter: &dyn Prompter) -> Result<Option<ContentType>> {
    match config.contents {
        Some(contents) => Ok(Some(contents)),
        None => prompter.pick_content_type(),
    }
}

fn resolve_output_name(config: &Config, prompter: &dyn Prompter) -> Result<Option<String>> {
    match &config.output {
        Some(name) => Ok(Some(name.clone())),
        None => prompter.ask_output_name(&config.default_output),
    }
}

/// Resolving the folder up front gives the root line a real base name
/// even when the user points us at `.`.
fn canonical_folder(folder: &Path) -> Result<PathBuf> {
    fs::canonicalize(folder).map_err(|source| TreescribeError::Scan {
        path: folder.to_path_buf(),
        source,
    })
}

/// Walk the tree under an indeterminate, non-cancellable spinner
fn scan_with_progress(folder: &Path, contents: ContentType, config: &Config) -> Result<String> {
    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {wide_msg:.dim.white}")
            .unwrap(),
    );
    progress.enable_steady_tick(Duration::from_millis(100));
    progress.set_message(format!("Generating structure of {}", folder.display()));

    let options = RenderOptions {
        include_files: contents.include_files(),
    };
    let result = walker::render(folder, options, &config.ignores);

    progress.finish_and_clear();
    result
}

/// Secondary delivery step: after the file is saved, the user may also
/// want the text on the clipboard. A distinct action, never automatic.
fn offer_clipboard_copy(structure: &str, prompter: &dyn Prompter) -> Result<()> {
    if let Some(true) = prompter.confirm("Copy the structure to the clipboard as well?")? {
        clipboard::copy_to_clipboard(structure)?;
        println!("Structure copied to the clipboard!");
    }
    Ok(())
}
