//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for all mdnb operations, regardless of the UI in
//! front of it.
//!
//! The facade dispatches to command functions and returns structured
//! `Result<CmdResult>` values. It contains no business logic, performs no
//! terminal I/O, and never exits the process; those belong to the command
//! layer and the CLI layer respectively.
//!
//! `MdnbApi<S: DocumentStore>` is generic over the storage backend:
//! production uses `FileStore`, tests use `InMemoryStore`. This keeps every
//! operation exercisable without touching the filesystem.

use crate::commands;
use crate::error::Result;
use crate::model::Scope;
use crate::store::DocumentStore;
use std::path::{Path, PathBuf};

/// The main API facade for mdnb operations.
///
/// Generic over `DocumentStore` to allow different storage backends.
/// All UI clients should interact through this API.
pub struct MdnbApi<S: DocumentStore> {
    store: S,
    paths: commands::ToolkitPaths,
}

impl<S: DocumentStore> MdnbApi<S> {
    pub fn new(store: S, paths: commands::ToolkitPaths) -> Self {
        Self { store, paths }
    }

    pub fn to_notebook(
        &mut self,
        paths: &[PathBuf],
        out_dir: Option<&Path>,
        extensions: &[String],
        strict: bool,
    ) -> Result<commands::CmdResult> {
        commands::to_notebook::run(&mut self.store, paths, out_dir, extensions, strict)
    }

    pub fn to_markdown(
        &mut self,
        paths: &[PathBuf],
        out_dir: Option<&Path>,
    ) -> Result<commands::CmdResult> {
        commands::to_markdown::run(&mut self.store, paths, out_dir)
    }

    pub fn scan(&self, dir: &Path, extensions: &[String]) -> Result<commands::CmdResult> {
        commands::scan::run(&self.store, dir, extensions)
    }

    pub fn catalog(
        &mut self,
        dir: &Path,
        extensions: &[String],
        filename: &str,
    ) -> Result<commands::CmdResult> {
        commands::catalog::run(&mut self.store, dir, extensions, filename)
    }

    pub fn dedup(
        &mut self,
        dir: &Path,
        extensions: &[String],
        skip_confirm: bool,
    ) -> Result<commands::CmdResult> {
        commands::dedup::run(&mut self.store, dir, extensions, skip_confirm)
    }

    pub fn config(&self, scope: Scope, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, scope, action)
    }

    pub fn init(&self, scope: Scope) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths, scope)
    }

    pub fn paths(&self) -> &commands::ToolkitPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, DocEntry, MessageLevel, ToolkitPaths};
