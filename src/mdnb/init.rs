use crate::api::{MdnbApi, ToolkitPaths};
use crate::config::MdnbConfig;
use crate::model::Scope;
use crate::store::fs::FileStore;
use directories::{BaseDirs, ProjectDirs};
use std::path::{Path, PathBuf};

pub struct MdnbContext {
    pub api: MdnbApi<FileStore>,
    pub scope: Scope,
    pub config: MdnbConfig,
}

/// Find the project root by walking up from cwd looking for a directory
/// that has both .git and .mdnb. If a directory has .git but no .mdnb,
/// continue searching upward (to support nested repos where a parent holds
/// the toolkit config). Returns None if no matching directory is found
/// before reaching home or root.
pub fn find_project_root(cwd: &Path) -> Option<PathBuf> {
    let home_dir = BaseDirs::new().map(|bd| bd.home_dir().to_path_buf());
    let mut current = cwd.to_path_buf();

    loop {
        let git_dir = current.join(".git");
        let mdnb_dir = current.join(".mdnb");

        if git_dir.exists() && mdnb_dir.exists() {
            return Some(current);
        }

        // Stop conditions: reached home dir or volume root
        if let Some(ref home) = home_dir {
            if &current == home {
                return None;
            }
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return None;
            }
        }
    }
}

fn global_data_dir() -> PathBuf {
    // Env override keeps end-to-end tests off the real user directories
    if let Ok(dir) = std::env::var("MDNB_GLOBAL_DATA") {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    let proj_dirs =
        ProjectDirs::from("com", "mdnb", "mdnb").expect("Could not determine config dir");
    proj_dirs.data_dir().to_path_buf()
}

pub fn initialize(cwd: &Path, use_global: bool) -> MdnbContext {
    // Prefer a project root carrying both .git and .mdnb
    let project_mdnb_dir = find_project_root(cwd)
        .map(|root| root.join(".mdnb"))
        .unwrap_or_else(|| cwd.join(".mdnb"));

    let global_dir = global_data_dir();

    let scope = if use_global {
        Scope::Global
    } else {
        Scope::Project
    };

    let config_dir = match scope {
        Scope::Project => &project_mdnb_dir,
        Scope::Global => &global_dir,
    };
    let config = MdnbConfig::load(config_dir).unwrap_or_default();

    let paths = ToolkitPaths {
        project: Some(project_mdnb_dir),
        global: global_dir,
    };
    let api = MdnbApi::new(FileStore::new(), paths);

    MdnbContext { api, scope, config }
}
