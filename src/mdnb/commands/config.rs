use crate::commands::{CmdMessage, CmdResult, ToolkitPaths};
use crate::config::MdnbConfig;
use crate::error::{MdnbError, Result};
use crate::model::Scope;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &ToolkitPaths, scope: Scope, action: ConfigAction) -> Result<CmdResult> {
    let config_dir = paths.scope_dir(scope)?;
    let mut config = MdnbConfig::load(&config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            result = result.with_config(config);
        }
        ConfigAction::ShowKey(key) => {
            if config.get(&key).is_none() {
                return Err(MdnbError::Api(format!("Unknown config key: {}", key)));
            }
            result = result.with_config(config);
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(&config_dir)?;
            result.add_message(CmdMessage::success(format!("Set {} = {}", key, value)));
            result = result.with_config(config);
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn paths_for(dir: &TempDir) -> ToolkitPaths {
        ToolkitPaths {
            project: Some(dir.path().to_path_buf()),
            global: dir.path().join("global"),
        }
    }

    #[test]
    fn test_set_persists_and_show_reads_back() {
        let dir = TempDir::new().unwrap();
        let paths = paths_for(&dir);

        run(
            &paths,
            Scope::Project,
            ConfigAction::Set("strict".into(), "true".into()),
        )
        .unwrap();

        let result = run(&paths, Scope::Project, ConfigAction::ShowAll).unwrap();
        assert!(result.config.unwrap().strict);
    }

    #[test]
    fn test_show_unknown_key_is_an_error() {
        let dir = TempDir::new().unwrap();
        let paths = paths_for(&dir);

        let result = run(
            &paths,
            Scope::Project,
            ConfigAction::ShowKey("bogus".into()),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_project_scope_unavailable() {
        let dir = TempDir::new().unwrap();
        let paths = ToolkitPaths {
            project: None,
            global: dir.path().to_path_buf(),
        };

        let result = run(&paths, Scope::Project, ConfigAction::ShowAll);
        assert!(matches!(result, Err(MdnbError::Store(_))));

        // Global scope still works
        let result = run(&paths, Scope::Global, ConfigAction::ShowAll).unwrap();
        assert!(result.config.is_some());
    }

    #[test]
    fn test_scopes_do_not_share_config() {
        let dir = TempDir::new().unwrap();
        let paths = ToolkitPaths {
            project: Some(dir.path().join("project")),
            global: dir.path().join("global"),
        };

        run(
            &paths,
            Scope::Project,
            ConfigAction::Set("strict".into(), "true".into()),
        )
        .unwrap();

        let global = run(&paths, Scope::Global, ConfigAction::ShowAll).unwrap();
        assert!(!global.config.unwrap().strict);
    }

    #[test]
    fn test_paths_type_is_plain_data() {
        let paths = ToolkitPaths {
            project: Some(PathBuf::from("/p/.mdnb")),
            global: PathBuf::from("/g"),
        };
        assert_eq!(
            paths.scope_dir(Scope::Project).unwrap(),
            PathBuf::from("/p/.mdnb")
        );
        assert_eq!(paths.scope_dir(Scope::Global).unwrap(), PathBuf::from("/g"));
    }
}
