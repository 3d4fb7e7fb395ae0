// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use seedflow_app::{Agency, DEFAULT_SALES_YEAR, PageKind, SALES_YEARS};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "seedflow";
const CONFIG_VERSION: i64 = 1;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub ui: Ui,
    #[serde(default)]
    pub workspace: Workspace,
    #[serde(default)]
    pub log: Log,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            ui: Ui::default(),
            workspace: Workspace::default(),
            log: Log::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ui {
    pub start_page: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Workspace {
    pub sales_year: Option<i32>,
    pub agency: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Log {
    pub level: Option<String>,
    pub dir: Option<String>,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: Some(DEFAULT_LOG_LEVEL.to_owned()),
            dir: None,
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("SEEDFLOW_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!(
                "cannot resolve config directory; set SEEDFLOW_CONFIG_PATH to the config file"
            )
        })?;

        Ok(config_root.join(APP_NAME).join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and put values under [ui], [workspace], and [log]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1. Regenerate it with --print-example-config",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(page) = &self.ui.start_page
            && PageKind::parse(page).is_none()
        {
            bail!(
                "ui.start_page in {} must be one of plan, deliver; got {page:?}",
                path.display()
            );
        }

        if let Some(year) = self.workspace.sales_year
            && !SALES_YEARS.contains(&year)
        {
            bail!(
                "workspace.sales_year in {} must be one of {}; got {year}",
                path.display(),
                sales_year_choices()
            );
        }

        if let Some(agency) = &self.workspace.agency
            && Agency::parse(agency).is_none()
        {
            bail!(
                "workspace.agency in {} must be one of midwest, northeast, southwest, pacific; got {agency:?}",
                path.display()
            );
        }

        if let Some(level) = &self.log.level
            && level.trim().is_empty()
        {
            bail!(
                "log.level in {} must not be empty; use a filter such as \"info\" or \"seedflow_tui=debug\"",
                path.display()
            );
        }

        Ok(())
    }

    pub fn start_page(&self) -> PageKind {
        self.ui
            .start_page
            .as_deref()
            .and_then(PageKind::parse)
            .unwrap_or(PageKind::Plan)
    }

    pub fn sales_year(&self) -> i32 {
        self.workspace.sales_year.unwrap_or(DEFAULT_SALES_YEAR)
    }

    pub fn agency(&self) -> Agency {
        self.workspace
            .agency
            .as_deref()
            .and_then(Agency::parse)
            .unwrap_or(Agency::Midwest)
    }

    pub fn log_level(&self) -> &str {
        self.log.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Log directory, with `SEEDFLOW_LOG_DIR` taking precedence over `[log].dir`.
    pub fn log_dir(&self) -> Option<PathBuf> {
        if let Some(dir) = env::var_os("SEEDFLOW_LOG_DIR") {
            return Some(PathBuf::from(dir));
        }
        self.log.dir.as_ref().map(PathBuf::from)
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# seedflow config\n# Place this file at: {}\n\nversion = 1\n\n[ui]\n# plan | deliver\nstart_page = \"plan\"\n\n[workspace]\n# {}\nsales_year = {}\n# midwest | northeast | southwest | pacific\nagency = \"midwest\"\n\n[log]\n# tracing filter; SEEDFLOW_LOG overrides it\nlevel = \"{}\"\n# Optional. Without a directory nothing is logged.\n# dir = \"/absolute/path/to/logs\"\n",
            path.display(),
            sales_year_choices().replace(", ", " | "),
            DEFAULT_SALES_YEAR,
            DEFAULT_LOG_LEVEL,
        )
    }
}

fn sales_year_choices() -> String {
    SALES_YEARS
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
