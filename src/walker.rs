/*!
 * Directory walking and tree rendering
 *
 * The walker is a pure recursive function over single-level directory
 * reads: no captured state, no side effects beyond reading entries. Only
 * the root read can fail the whole render; an unreadable subdirectory is
 * logged and contributes an empty subtree while its siblings continue.
 */

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Result, TreescribeError};
use crate::utils::base_name;

/// Branch marker in front of every entry line
const BRANCH: &str = "|-- ";
/// One depth level of prefix
const INDENT: &str = "|   ";

/// Kind of a single directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    /// Symlinks, sockets, devices. Never rendered, never followed.
    Other,
}

/// One item returned by a single-level directory read
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    pub name: String,
    pub kind: EntryKind,
}

/// Literal names excluded from the output at every depth.
///
/// Membership is an exact, case-sensitive match against an entry's base
/// name; these are not globs and never match against full paths.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    names: HashSet<String>,
}

impl IgnoreSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

/// What the rendered structure includes. Directories always appear.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub include_files: bool,
}

/// Render the tree under `root` as indented text.
///
/// The first line is always `<baseName(root)>/`, even for an empty or
/// fully-ignored tree. Fails only if `root` itself cannot be read.
pub fn render(root: &Path, options: RenderOptions, ignores: &IgnoreSet) -> Result<String> {
    let entries = read_entries(root).map_err(|source| TreescribeError::Scan {
        path: root.to_path_buf(),
        source,
    })?;

    let mut text = format!("{}/\n", base_name(root));
    text.push_str(&render_entries(root, "", entries, options, ignores));
    Ok(text)
}

/// Recursive step below the root. Read failures end this subtree only.
fn walk(dir: &Path, prefix: &str, options: RenderOptions, ignores: &IgnoreSet) -> String {
    let entries = match read_entries(dir) {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!("could not read directory {}: {}", dir.display(), err);
            return String::new();
        }
    };
    render_entries(dir, prefix, entries, options, ignores)
}

fn render_entries(
    dir: &Path,
    prefix: &str,
    mut entries: Vec<DirectoryEntry>,
    options: RenderOptions,
    ignores: &IgnoreSet,
) -> String {
    entries.retain(|entry| !ignores.contains(&entry.name));
    sort_entries(&mut entries);

    let mut content = String::new();
    for entry in entries {
        match entry.kind {
            EntryKind::Directory => {
                content.push_str(prefix);
                content.push_str(BRANCH);
                content.push_str(&entry.name);
                content.push_str("/\n");
                content.push_str(&walk(
                    &dir.join(&entry.name),
                    &format!("{prefix}{INDENT}"),
                    options,
                    ignores,
                ));
            }
            EntryKind::File if options.include_files => {
                content.push_str(prefix);
                content.push_str(BRANCH);
                content.push_str(&entry.name);
                content.push('\n');
            }
            _ => {}
        }
    }
    content
}

/// Read the immediate entries of `dir`.
///
/// Entries that vanish mid-read (deleted under us, stat failure) are
/// logged and skipped rather than failing the directory.
fn read_entries(dir: &Path) -> io::Result<Vec<DirectoryEntry>> {
    let mut entries = Vec::new();
    for item in fs::read_dir(dir)? {
        let item = match item {
            Ok(item) => item,
            Err(err) => {
                log::warn!("skipping entry in {}: {}", dir.display(), err);
                continue;
            }
        };
        // file_type() does not follow symlinks, so a link to a directory
        // classifies as Other and cycles are impossible by construction.
        let kind = match item.file_type() {
            Ok(kind) if kind.is_dir() => EntryKind::Directory,
            Ok(kind) if kind.is_file() => EntryKind::File,
            Ok(_) => EntryKind::Other,
            Err(err) => {
                log::warn!("skipping entry in {}: {}", dir.display(), err);
                continue;
            }
        };
        entries.push(DirectoryEntry {
            name: item.file_name().to_string_lossy().into_owned(),
            kind,
        });
    }
    Ok(entries)
}

/// Directories before files; within a kind, case-insensitive name order
/// with a case-sensitive tiebreak so the result is deterministic.
fn sort_entries(entries: &mut [DirectoryEntry]) {
    entries.sort_by_cached_key(|entry| {
        (
            entry.kind != EntryKind::Directory,
            entry.name.to_lowercase(),
            entry.name.clone(),
        )
    });
}
