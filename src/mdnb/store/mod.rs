//! # Storage Layer
//!
//! This module defines the file-access abstraction for mdnb. The
//! [`DocumentStore`] trait is the only door between the command layer and
//! the world of bytes on disk.
//!
//! ## Design Rationale
//!
//! File access is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production access to the real filesystem
//! - [`memory::InMemoryStore`]: in-memory files for fast, isolated tests
//!
//! ## Encoding
//!
//! Documents are UTF-8. `read_text` surfaces invalid bytes as
//! [`MdnbError::Encoding`](crate::error::MdnbError::Encoding): a hard
//! failure with no partial output, never silent replacement.
//!
//! ## Listing
//!
//! `list_files` walks a directory recursively, keeps files whose names end
//! in one of the given extensions, skips anything under an
//! `.ipynb_checkpoints` directory, and returns a sorted list so batch
//! operations are deterministic.

use crate::error::Result;
use std::path::{Path, PathBuf};

pub mod fs;
pub mod memory;

/// Directory name Jupyter litters around; never worth converting.
pub const CHECKPOINT_DIR: &str = ".ipynb_checkpoints";

/// Abstract interface to document files.
pub trait DocumentStore {
    /// Read a file as UTF-8 text
    fn read_text(&self, path: &Path) -> Result<String>;

    /// Write UTF-8 text, creating parent directories as needed
    fn write_text(&mut self, path: &Path, content: &str) -> Result<()>;

    /// Read a file's raw bytes
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>>;

    /// Size in bytes without reading the content
    fn file_size(&self, path: &Path) -> Result<u64>;

    /// Delete a file permanently
    fn remove_file(&mut self, path: &Path) -> Result<()>;

    /// Recursively list files under `dir` matching any of `extensions`
    /// (e.g. `".md"`), sorted, skipping checkpoint directories
    fn list_files(&self, dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>>;

    fn is_file(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;
}

/// True when `name` ends with one of the configured extensions.
pub(crate) fn matches_extension(name: &str, extensions: &[String]) -> bool {
    extensions.iter().any(|ext| name.ends_with(ext.as_str()))
}

/// True when any component of `path` is a checkpoint directory.
pub(crate) fn under_checkpoints(path: &Path) -> bool {
    path.components()
        .any(|c| c.as_os_str() == CHECKPOINT_DIR)
}
