use serde::{Deserialize, Serialize};
use sexpedit_engine::Cmd;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Something a key can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    SlurpForward,
    BarfForward,
    EvalLastForm,
    Save,
    Quit,
}

impl Action {
    /// The structural edit this action performs, if it is one.
    pub fn edit_cmd(self) -> Option<Cmd> {
        match self {
            Action::SlurpForward => Some(Cmd::SlurpForward),
            Action::BarfForward => Some(Cmd::BarfForward),
            Action::EvalLastForm | Action::Save | Action::Quit => None,
        }
    }
}

impl From<Cmd> for Action {
    fn from(cmd: Cmd) -> Self {
        match cmd {
            Cmd::SlurpForward => Action::SlurpForward,
            Cmd::BarfForward => Action::BarfForward,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How long an evaluated form stays highlighted.
    pub flash_ms: u64,
    /// File opened when none is given on the command line.
    pub scratch_path: Option<PathBuf>,
    /// Key string (e.g. `ctrl+right`) to action. Merged over the defaults.
    pub keybindings: BTreeMap<String, Action>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            flash_ms: 500,
            scratch_path: None,
            keybindings: Self::default_keybindings(),
        }
    }
}

impl Config {
    pub fn default_keybindings() -> BTreeMap<String, Action> {
        let mut keys = BTreeMap::new();
        for cmd in Cmd::ALL {
            for key in cmd.default_keybindings() {
                keys.insert((*key).to_string(), Action::from(cmd));
            }
        }
        keys.insert("ctrl+e".to_string(), Action::EvalLastForm);
        keys.insert("ctrl+s".to_string(), Action::Save);
        keys.insert("ctrl+q".to_string(), Action::Quit);
        keys
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        Self::from_toml(&content).map(Some).map_err(|source| {
            ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Parses config text, merging user keybindings over the defaults and
    /// expanding `~` and `$VARS` in paths.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let mut config: Config = toml::from_str(content)?;

        let mut keybindings = Self::default_keybindings();
        for (key, action) in std::mem::take(&mut config.keybindings) {
            keybindings.insert(key.to_lowercase(), action);
        }
        config.keybindings = keybindings;

        config.scratch_path = config
            .scratch_path
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(config)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/sexpedit");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Action bound to a key string, matched case-insensitively.
    pub fn action_for(&self, key: &str) -> Option<Action> {
        self.keybindings.get(&key.to_lowercase()).copied()
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/sexpedit/config.toml"));
    }

    #[test]
    fn test_defaults_bind_every_command() {
        let config = Config::default();
        assert_eq!(config.flash_ms, 500);
        assert_eq!(config.action_for("ctrl+right"), Some(Action::SlurpForward));
        assert_eq!(config.action_for("alt+right"), Some(Action::SlurpForward));
        assert_eq!(config.action_for("ctrl+left"), Some(Action::BarfForward));
        assert_eq!(config.action_for("alt+left"), Some(Action::BarfForward));
        assert_eq!(config.action_for("ctrl+e"), Some(Action::EvalLastForm));
        assert_eq!(config.action_for("Ctrl+Q"), Some(Action::Quit));
        assert_eq!(config.action_for("ctrl+z"), None);
    }

    #[test]
    fn test_edit_cmd_mapping() {
        for cmd in Cmd::ALL {
            assert_eq!(Action::from(cmd).edit_cmd(), Some(cmd));
        }
        assert_eq!(Action::Save.edit_cmd(), None);
    }

    #[test]
    fn test_user_keybindings_merge_over_defaults() {
        let config = Config::from_toml(
            r#"
flash_ms = 250

[keybindings]
"Ctrl+L" = "slurp-forward"
"ctrl+e" = "quit"
"#,
        )
        .unwrap();

        assert_eq!(config.flash_ms, 250);
        assert_eq!(config.action_for("ctrl+l"), Some(Action::SlurpForward));
        assert_eq!(config.action_for("ctrl+e"), Some(Action::Quit));
        // untouched defaults survive
        assert_eq!(config.action_for("ctrl+left"), Some(Action::BarfForward));
    }

    #[test]
    fn test_empty_file_is_all_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_action_is_a_parse_error() {
        assert!(Config::from_toml("[keybindings]\n\"ctrl+x\" = \"splice\"\n").is_err());
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            flash_ms: 750,
            scratch_path: Some(PathBuf::from("/tmp/scratch.clj")),
            ..Config::default()
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized = Config::from_toml(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_scratch_path_with_env_var_in_toml() {
        unsafe {
            env::set_var("SEXPEDIT_SCRATCH_ROOT", "/custom/scratch");
        }

        let config = Config::from_toml(
            r#"
scratch_path = "$SEXPEDIT_SCRATCH_ROOT/user.clj"
"#,
        )
        .unwrap();

        assert_eq!(
            config.scratch_path,
            Some(PathBuf::from("/custom/scratch/user.clj"))
        );

        unsafe {
            env::remove_var("SEXPEDIT_SCRATCH_ROOT");
        }
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_reports_parse_errors_with_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "flash_ms = \"soon\"").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/dir/config.toml");
        let test_config = Config {
            flash_ms: 900,
            ..Config::default()
        };

        test_config.save_to_path(&config_file).unwrap();

        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }
}
