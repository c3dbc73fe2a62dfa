use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file name relative to the output directory
    fn file_name(&self) -> String;

    /// Render the file content
    fn render(&self) -> String;

    /// Get the full path of this file inside `dir`
    fn path(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }

    /// Write the file into `dir`, creating missing parent directories.
    ///
    /// A file whose content on disk already matches the rendered content is
    /// left untouched.
    fn write(&self, dir: &Path) -> Result<WriteResult> {
        let path = self.path(dir);
        let content = self.render();

        if std::fs::read_to_string(&path).is_ok_and(|existing| existing == content) {
            tracing::debug!(path = %path.display(), "generated file unchanged");
            return Ok(WriteResult::Unchanged);
        }

        write_file(&path, &content)?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "generated file written");
        Ok(WriteResult::Written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("failed to write '{}'", path.display()))
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the rendered content
    Unchanged,
}
