use crate::config::MdnbConfig;
use crate::error::{MdnbError, Result};
use crate::model::Scope;
use std::path::PathBuf;

pub mod catalog;
pub mod config;
pub mod dedup;
pub mod helpers;
pub mod init;
pub mod scan;
pub mod to_markdown;
pub mod to_notebook;

#[derive(Debug, Clone)]
pub struct ToolkitPaths {
    pub project: Option<PathBuf>,
    pub global: PathBuf,
}

impl ToolkitPaths {
    pub fn scope_dir(&self, scope: Scope) -> Result<PathBuf> {
        match scope {
            Scope::Project => self
                .project
                .clone()
                .ok_or_else(|| MdnbError::Store("Project scope is not available".to_string())),
            Scope::Global => Ok(self.global.clone()),
        }
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A scanned or cataloged document: where it lives, how a catalog links to
/// it, and the title shown for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocEntry {
    pub path: PathBuf,
    pub link: String,
    pub title: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub written: Vec<PathBuf>,
    pub removed: Vec<PathBuf>,
    pub entries: Vec<DocEntry>,
    pub config: Option<MdnbConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_written(mut self, paths: Vec<PathBuf>) -> Self {
        self.written = paths;
        self
    }

    pub fn with_entries(mut self, entries: Vec<DocEntry>) -> Self {
        self.entries = entries;
        self
    }

    pub fn with_config(mut self, config: MdnbConfig) -> Self {
        self.config = Some(config);
        self
    }
}
