//! Report configuration: defaults, optional YAML file, CLI overrides.

use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// How the first line of a record file is split into fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSplit {
    /// Plain split on every comma.
    #[default]
    Naive,
    /// CSV tokenizing: double-quoted fields may contain commas.
    Quoted,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Directory to scan. Never read from the config file.
    #[serde(skip)]
    pub directory: PathBuf,
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default = "default_output_file")]
    pub output_file: String,
    #[serde(default)]
    pub field_split: FieldSplit,
}

fn default_extension() -> String {
    "lif".to_string()
}
fn default_output_file() -> String {
    "output.csv".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::new(),
            extension: default_extension(),
            output_file: default_output_file(),
            field_split: FieldSplit::default(),
        }
    }
}

impl ReportConfig {
    /// Defaults for scanning `directory`.
    pub fn for_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }

    /// Load settings from a YAML file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // An empty file is a valid "all defaults" config.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Self = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("invalid YAML: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        let ext = self.extension.trim_start_matches('.');
        if ext.is_empty() {
            return Err(AppError::Config("extension must not be empty".into()));
        }
        if self.output_file.trim().is_empty()
            || Path::new(&self.output_file).components().count() != 1
        {
            return Err(AppError::Config(format!(
                "output_file must be a plain file name, got '{}'",
                self.output_file
            )));
        }
        Ok(())
    }

    /// File suffix used by discovery, always with a leading dot.
    pub fn suffix(&self) -> String {
        format!(".{}", self.extension.trim_start_matches('.'))
    }

    pub fn output_path(&self) -> PathBuf {
        self.directory.join(&self.output_file)
    }
}
