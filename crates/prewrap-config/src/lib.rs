//! Configuration management for prewrap.
//!
//! Parses `prewrap.toml` with serde and discovers it in the current
//! directory or its parents when no explicit path is given.
//!
//! ```toml
//! [target]
//! language = "mermaid"      # matches class `language-mermaid`
//! block_tag = "pre"
//! code_tag = "code"
//!
//! [wrapper]
//! tag = "div"
//! class = "mermaid-wrapper"
//! raw_code_attribute = "data-mermaid-code"
//!
//! [pipeline]
//! downstream = ["rehype-mermaid"]
//! ```
//!
//! Every string value supports `${VAR}` and `${VAR:-default}` expansion.
//! CLI settings are applied on top via [`CliSettings`].

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "prewrap.toml";

/// CLI settings that override configuration file values.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override target language.
    pub language: Option<String>,
    /// Override wrapper marker class.
    pub wrapper_class: Option<String>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which code blocks are wrapped.
    pub target: TargetConfig,
    /// Shape of the wrapper element.
    pub wrapper: WrapperConfig,
    /// Ordering within the host pipeline.
    pub pipeline: PipelineConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Target block configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Fence language; matched as the class token `language-<language>`.
    pub language: String,
    /// Preformatted block tag.
    pub block_tag: String,
    /// Code tag expected as the block's first child.
    pub code_tag: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            language: "mermaid".to_owned(),
            block_tag: "pre".to_owned(),
            code_tag: "code".to_owned(),
        }
    }
}

impl TargetConfig {
    /// Class token identifying the target language.
    #[must_use]
    pub fn language_class(&self) -> String {
        format!("language-{}", self.language)
    }
}

/// Wrapper element configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WrapperConfig {
    /// Wrapper tag.
    pub tag: String,
    /// Marker class downstream stages look for.
    pub class: String,
    /// Attribute receiving the raw source.
    pub raw_code_attribute: String,
}

impl Default for WrapperConfig {
    fn default() -> Self {
        Self {
            tag: "div".to_owned(),
            class: "mermaid-wrapper".to_owned(),
            raw_code_attribute: "data-mermaid-code".to_owned(),
        }
    }
}

/// Pipeline ordering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Stages the wrapper must run before.
    pub downstream: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            downstream: vec!["rehype-mermaid".to_owned()],
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`wrapper.class`").
        field: String,
        /// Error message (e.g., "${`DIAGRAM_CLASS`} not set").
        message: String,
    },
}

/// Require a name to be non-empty and free of whitespace.
fn require_name(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "{field} cannot contain whitespace"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `prewrap.toml` in the current directory and its parents, falling
    /// back to defaults. CLI settings take precedence over file values, and
    /// the merged result is validated.
    ///
    /// # Errors
    ///
    /// Returns error if an explicit `config_path` doesn't exist, parsing or
    /// expansion fails, or the merged configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let discovered = match config_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Some(path) => Some(path.to_path_buf()),
            None => std::env::current_dir()
                .ok()
                .and_then(|cwd| Self::discover_from(&cwd)),
        };

        let mut config = match discovered {
            Some(path) => Self::load_from_file(&path)?,
            None => Self::default(),
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(language) = &settings.language {
            self.target.language.clone_from(language);
        }
        if let Some(class) = &settings.wrapper_class {
            self.wrapper.class.clone_from(class);
        }
    }

    /// Search for the config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.exists())
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any name is empty or contains
    /// whitespace, or if the raw-code attribute collides with the class.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_name(&self.target.language, "target.language")?;
        require_name(&self.target.block_tag, "target.block_tag")?;
        require_name(&self.target.code_tag, "target.code_tag")?;
        require_name(&self.wrapper.tag, "wrapper.tag")?;
        require_name(&self.wrapper.class, "wrapper.class")?;
        require_name(&self.wrapper.raw_code_attribute, "wrapper.raw_code_attribute")?;

        if matches!(
            self.wrapper.raw_code_attribute.as_str(),
            "class" | "className"
        ) {
            return Err(ConfigError::Validation(
                "wrapper.raw_code_attribute cannot be the class attribute".to_owned(),
            ));
        }

        for stage in &self.pipeline.downstream {
            require_name(stage, "pipeline.downstream")?;
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        let fields = [
            (&mut self.target.language, "target.language"),
            (&mut self.target.block_tag, "target.block_tag"),
            (&mut self.target.code_tag, "target.code_tag"),
            (&mut self.wrapper.tag, "wrapper.tag"),
            (&mut self.wrapper.class, "wrapper.class"),
            (
                &mut self.wrapper.raw_code_attribute,
                "wrapper.raw_code_attribute",
            ),
        ];
        for (value, field) in fields {
            *value = expand::expand_env(value, field)?;
        }

        expand::expand_env_all(&mut self.pipeline.downstream, "pipeline.downstream")
    }
}
