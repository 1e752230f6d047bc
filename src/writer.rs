/*!
 * Structure file output
 */

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TreescribeError};
use crate::utils::base_name;

/// Writes the rendered structure into the scanned folder
pub struct StructureWriter {
    folder: PathBuf,
    file_name: String,
}

impl StructureWriter {
    pub fn new(folder: &Path, file_name: &str) -> Self {
        Self {
            folder: folder.to_path_buf(),
            file_name: file_name.to_string(),
        }
    }

    /// Write the structure text, overwriting any existing file at the path
    pub fn write(&self, structure: &str) -> Result<PathBuf> {
        let path = self.folder.join(&self.file_name);
        fs::write(&path, structure).map_err(|source| TreescribeError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// Path shown to the user, relative to the folder's display name
    pub fn display_path(&self) -> String {
        format!("{}/{}", base_name(&self.folder), self.file_name)
    }
}
