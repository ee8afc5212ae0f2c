use std::{collections::HashMap, fs, io, path::Path};

use anyhow::Context;

use crate::transition::ProjectIdStrategy;

pub const DEFAULT_CONFIG_FILE: &str = "gov_catalog.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_filter: String,
    pub project_id_strategy: ProjectIdStrategy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: "info".into(),
            project_id_strategy: ProjectIdStrategy::WebsiteCount,
        }
    }
}

/// Defaults, then the TOML file, then `APP__*` environment variables.
///
/// Without an explicit path a missing `gov_catalog.toml` is skipped; an
/// explicit path must exist and parse.
pub fn load_settings(explicit_path: Option<&Path>) -> anyhow::Result<Settings> {
    load_settings_from(
        explicit_path,
        Path::new(DEFAULT_CONFIG_FILE),
        |key| std::env::var(key).ok(),
    )
}

pub fn load_settings_from(
    explicit_path: Option<&Path>,
    default_path: &Path,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let (path, required) = match explicit_path {
        Some(path) => (path, true),
        None => (default_path, false),
    };

    match fs::read_to_string(path) {
        Ok(raw) => apply_file_overrides(&mut settings, &raw)
            .with_context(|| format!("failed to apply config file '{}'", path.display()))?,
        Err(err) if !required && err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read config file '{}'", path.display()));
        }
    }

    apply_env_overrides(&mut settings, lookup)?;
    Ok(settings)
}

pub fn apply_file_overrides(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg =
        toml::from_str::<HashMap<String, String>>(raw).context("malformed settings TOML")?;

    if let Some(v) = file_cfg.get("log_filter") {
        settings.log_filter = v.clone();
    }
    if let Some(v) = file_cfg.get("project_id_strategy") {
        settings.project_id_strategy = v.parse()?;
    }
    Ok(())
}

/// Blank variables are treated as unset.
pub fn apply_env_overrides(
    settings: &mut Settings,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<()> {
    let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(v) = non_blank("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
    if let Some(v) = non_blank("APP__PROJECT_ID_STRATEGY") {
        settings.project_id_strategy = v.parse()?;
    }
    Ok(())
}
