use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::WrapErr;
use tracing::debug;

use crate::config::AppConfig;

const CONFIG_DIR: &str = "lastbutton";
const CONFIG_FILE: &str = "config.toml";

pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(CONFIG_DIR))
}

pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join(CONFIG_FILE))
}

/// Load the config from `path`, or from the default location when `None`.
///
/// A missing file at the default location means defaults. A missing file at
/// an explicit path is an error.
pub fn load(path: Option<&Path>) -> color_eyre::Result<AppConfig> {
    if let Some(path) = path {
        return read(path);
    }

    let Some(path) = config_path() else {
        debug!("No config directory found, using defaults");
        return Ok(AppConfig::default());
    };

    if !path.exists() {
        debug!("Config file not found at {:?}, using defaults", path);
        return Ok(AppConfig::default());
    }

    read(&path)
}

fn read(path: &Path) -> color_eyre::Result<AppConfig> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read config file {}", path.display()))?;
    let config: AppConfig = toml::from_str(&content)
        .wrap_err_with(|| format!("invalid config file {}", path.display()))?;
    debug!("Loaded config from {:?}", path);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Temporary directory holding one config file, removed on drop.
    struct ScratchConfig {
        dir: PathBuf,
        path: PathBuf,
    }

    impl ScratchConfig {
        fn new(test: &str, content: &str) -> Self {
            let dir = std::env::temp_dir()
                .join(format!("lastbutton-test-{}-{test}", std::process::id()));
            fs::create_dir_all(&dir).unwrap();
            let path = dir.join(CONFIG_FILE);
            fs::write(&path, content).unwrap();
            Self { dir, path }
        }
    }

    impl Drop for ScratchConfig {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.dir);
        }
    }

    #[test]
    fn test_load_explicit_path() {
        let scratch = ScratchConfig::new(
            "explicit",
            r#"
            [toast]
            max_visible = 1

            [keybindings.buttons]
            instant = "a"
            "#,
        );
        let config = load(Some(&scratch.path)).unwrap();
        assert_eq!(config.toast.max_visible, 1);
        assert_eq!(config.keybindings.buttons.instant.to_string(), "a");
        assert_eq!(config.keybindings.buttons.one_sec.to_string(), "2/o");
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let path = std::env::temp_dir().join("lastbutton-test-does-not-exist.toml");
        assert!(load(Some(&path)).is_err());
    }

    #[test]
    fn test_load_bad_key_fails() {
        let scratch = ScratchConfig::new(
            "bad-key",
            r#"
            [keybindings.global]
            quit = "hyper+q"
            "#,
        );
        let error = load(Some(&scratch.path)).unwrap_err();
        assert!(format!("{error:?}").contains("Unknown modifier: hyper"));
    }

    #[test]
    fn test_scratch_config_is_removed() {
        let scratch = ScratchConfig::new("cleanup", "");
        let dir = scratch.dir.clone();
        assert!(load(Some(&scratch.path)).is_ok());
        drop(scratch);
        assert!(!dir.exists());
    }
}
