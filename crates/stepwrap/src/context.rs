use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use stepwrap_core::Engine;
use stepwrap_core::config::{self, StepwrapConfig};

use crate::cli::GlobalArgs;

#[derive(Debug)]
pub struct RuntimeContext {
    pub json: bool,
    pub cwd: PathBuf,
    pub config_path: Option<PathBuf>,
    pub indent_width: Option<usize>,
}

impl RuntimeContext {
    pub fn from_global_args(global: &GlobalArgs) -> Self {
        Self {
            json: global.json,
            cwd: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            config_path: global.config.clone(),
            indent_width: global.indent_width,
        }
    }

    /// The effective configuration, with command-line overrides applied.
    pub fn load_config(&self) -> Result<StepwrapConfig> {
        let mut cfg = config::load_or_default(&self.cwd, self.config_path.as_deref())
            .with_context(|| match &self.config_path {
                Some(path) => format!("failed to load config {}", path.display()),
                None => "failed to load .stepwrap.yaml".to_string(),
            })?;
        if let Some(width) = self.indent_width {
            cfg.indent_width = width;
            cfg.validate()?;
        }
        Ok(cfg)
    }

    pub fn engine(&self) -> Result<Engine> {
        let cfg = self.load_config()?;
        Ok(Engine::from_config(&cfg)?)
    }
}
