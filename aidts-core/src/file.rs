use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};

/// What [`GeneratedFile::write_if_changed`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    /// The file on disk already held this content.
    Unchanged,
}

/// Rendered output bound to its destination path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    path: PathBuf,
    content: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the content, creating missing parent directories.
    ///
    /// A file that already holds the same bytes is not touched, so its
    /// modification time survives repeated runs.
    pub fn write_if_changed(&self) -> Result<WriteResult> {
        if fs::read(&self.path).is_ok_and(|current| current == self.content.as_bytes()) {
            return Ok(WriteResult::Unchanged);
        }

        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .wrap_err_with(|| format!("failed to create directory '{}'", dir.display()))?;
        }
        fs::write(&self.path, &self.content)
            .wrap_err_with(|| format!("failed to write '{}'", self.path.display()))?;
        Ok(WriteResult::Written)
    }
}
