use crate::commands::{CmdMessage, CmdResult, ToolkitPaths};
use crate::config::MdnbConfig;
use crate::error::Result;
use crate::model::Scope;

pub fn run(paths: &ToolkitPaths, scope: Scope) -> Result<CmdResult> {
    let config_dir = paths.scope_dir(scope)?;
    let mut result = CmdResult::default();

    if config_dir.join("config.json").exists() {
        result.add_message(CmdMessage::info(format!(
            "Already initialized: {}",
            config_dir.display()
        )));
        return Ok(result);
    }

    MdnbConfig::default().save(&config_dir)?;
    result.add_message(CmdMessage::success(format!(
        "Initialized {}",
        config_dir.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_default_config() {
        let dir = TempDir::new().unwrap();
        let paths = ToolkitPaths {
            project: Some(dir.path().join(".mdnb")),
            global: dir.path().join("global"),
        };

        let result = run(&paths, Scope::Project).unwrap();
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("Initialized")));
        assert!(dir.path().join(".mdnb/config.json").exists());

        let config = MdnbConfig::load(dir.path().join(".mdnb")).unwrap();
        assert_eq!(config, MdnbConfig::default());
    }

    #[test]
    fn test_init_twice_is_a_noop() {
        let dir = TempDir::new().unwrap();
        let paths = ToolkitPaths {
            project: Some(dir.path().join(".mdnb")),
            global: dir.path().join("global"),
        };

        run(&paths, Scope::Project).unwrap();
        let result = run(&paths, Scope::Project).unwrap();
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("Already initialized")));
    }
}
