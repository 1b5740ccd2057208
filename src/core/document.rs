//! Document management for the markdown file being fixed

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::substitution::{self, Substitution};

/// Errors raised while loading or persisting a document
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read file: {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to save file: {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A markdown document held entirely in memory
#[derive(Debug, Clone)]
pub struct Document {
    /// File path
    pub path: PathBuf,
    /// Document content
    pub content: String,
    /// Whether the content differs from what was read
    pub modified: bool,
}

impl Document {
    /// Open a document from a file
    pub fn open(path: &Path) -> Result<Self, DocumentError> {
        let content = fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Opened document: {} ({} bytes)", path.display(), content.len());

        Ok(Self {
            path: path.to_path_buf(),
            content,
            modified: false,
        })
    }

    /// Save the document to disk, replacing the previous contents
    pub fn save(&self) -> Result<(), DocumentError> {
        fs::write(&self.path, &self.content).map_err(|source| DocumentError::Write {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!("Saved document: {}", self.path.display());
        Ok(())
    }

    /// Update content and mark as modified
    pub fn set_content(&mut self, content: String) {
        if self.content != content {
            self.content = content;
            self.modified = true;
        }
    }

    /// Run the given substitutions over the content
    pub fn apply(&mut self, pairs: &[Substitution<'_>]) {
        let fixed = substitution::apply(&self.content, pairs);
        self.set_content(fixed);
    }
}
