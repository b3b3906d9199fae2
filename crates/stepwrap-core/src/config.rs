use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::indent::IndentUnit;
use crate::line_ending::LineEndingPolicy;
use crate::template::WrapperTemplate;

pub const CONFIG_FILE: &str = ".stepwrap.yaml";
pub const DEFAULT_INDENT_WIDTH: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepwrapConfig {
    pub indent_width: usize,
    pub line_ending: LineEndingPolicy,
    pub template: WrapperTemplate,
}

impl Default for StepwrapConfig {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            line_ending: LineEndingPolicy::default(),
            template: WrapperTemplate::default(),
        }
    }
}

impl StepwrapConfig {
    pub fn validate(&self) -> Result<()> {
        IndentUnit::new(self.indent_width)?;
        self.template.validate()
    }
}

pub fn get_config_path(cwd: &Path) -> PathBuf {
    cwd.join(CONFIG_FILE)
}

/// Read and validate a config file.
pub fn read_config(path: &Path) -> Result<StepwrapConfig> {
    let content = fs::read_to_string(path)?;
    let config: StepwrapConfig = if content.trim().is_empty() {
        StepwrapConfig::default()
    } else {
        serde_yaml::from_str(&content)?
    };
    config.validate()?;
    Ok(config)
}

pub fn write_config(config: &StepwrapConfig, path: &Path) -> Result<()> {
    let content = serde_yaml::to_string(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// Load the explicitly named config, or `.stepwrap.yaml` in `cwd` if present,
/// or the defaults.
pub fn load_or_default(cwd: &Path, explicit: Option<&Path>) -> Result<StepwrapConfig> {
    if let Some(path) = explicit {
        return read_config(path);
    }
    let path = get_config_path(cwd);
    if path.is_file() {
        tracing::debug!(path = %path.display(), "loading config");
        read_config(&path)
    } else {
        Ok(StepwrapConfig::default())
    }
}

/// Write the default config unless one already exists. Returns whether a file was written.
pub fn init_config(cwd: &Path) -> Result<bool> {
    let path = get_config_path(cwd);
    if path.exists() {
        return Ok(false);
    }
    write_config(&StepwrapConfig::default(), &path)?;
    Ok(true)
}
