//! Local file source.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::TextSource;
use crate::error::{Result, SourceError};

/// Reads the source text from a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<String> {
        let text = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            SourceError::fetch(format!(
                "Failed to fetch CSV: {}: {e}",
                self.path.display()
            ))
        })?;
        debug!(path = %self.path.display(), bytes = text.len(), "read source file");
        Ok(text)
    }
}
