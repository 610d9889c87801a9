use std::{fs, io, path::Path};

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "tastehub.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub currency_prefix: String,
    pub window_title: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_prefix: "R".into(),
            window_title: "TasteHub".into(),
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    currency_prefix: Option<String>,
    window_title: Option<String>,
    log_filter: Option<String>,
}

/// Defaults, then the optional config file, then environment overrides.
/// A missing file is fine; an unreadable or malformed one is not.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match fs::read_to_string(path) {
        Ok(raw) => apply_file(&mut settings, &raw)
            .with_context(|| format!("failed to parse config file '{}'", path.display()))?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read config file '{}'", path.display()))
        }
    }

    apply_env(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg: SettingsFile = toml::from_str(raw)?;
    if let Some(v) = file_cfg.currency_prefix {
        settings.currency_prefix = v;
    }
    if let Some(v) = file_cfg.window_title {
        settings.window_title = v;
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }
    Ok(())
}

fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("TASTEHUB_CURRENCY_PREFIX") {
        settings.currency_prefix = v;
    }
    if let Some(v) = lookup("APP__CURRENCY_PREFIX") {
        settings.currency_prefix = v;
    }

    if let Some(v) = lookup("APP__WINDOW_TITLE") {
        settings.window_title = v;
    }

    if let Some(v) = lookup("RUST_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = lookup("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    // Blank overrides fall back to defaults.
    let defaults = Settings::default();
    if settings.window_title.trim().is_empty() {
        settings.window_title = defaults.window_title;
    }
    if settings.log_filter.trim().is_empty() {
        settings.log_filter = defaults.log_filter;
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        env,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::*;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn file_values_override_defaults() {
        let mut settings = Settings::default();
        apply_file(
            &mut settings,
            "currency_prefix = \"$\"\nwindow_title = \"Bistro\"\n",
        )
        .expect("parse");

        assert_eq!(settings.currency_prefix, "$");
        assert_eq!(settings.window_title, "Bistro");
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn app_prefixed_env_wins_over_plain_env() {
        let mut settings = Settings::default();
        apply_env(
            &mut settings,
            env_from(&[
                ("TASTEHUB_CURRENCY_PREFIX", "EUR "),
                ("APP__CURRENCY_PREFIX", "£"),
                ("RUST_LOG", "debug"),
            ]),
        );

        assert_eq!(settings.currency_prefix, "£");
        assert_eq!(settings.log_filter, "debug");
    }

    #[test]
    fn blank_title_and_filter_fall_back_to_defaults() {
        let mut settings = Settings::default();
        apply_env(
            &mut settings,
            env_from(&[("APP__WINDOW_TITLE", "  "), ("APP__LOG_FILTER", "")]),
        );
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn malformed_file_is_reported() {
        let mut settings = Settings::default();
        assert!(apply_file(&mut settings, "currency_prefix = [").is_err());
    }

    #[test]
    fn missing_config_file_yields_defaults_plus_env() {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let path = env::temp_dir().join(format!("tastehub_missing_{suffix}.toml"));

        let settings = load_settings(&path).expect("load");
        assert!(!settings.window_title.is_empty());
    }

    #[test]
    fn reads_config_file_from_disk() {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let temp_root = env::temp_dir().join(format!("tastehub_config_test_{suffix}"));
        fs::create_dir_all(&temp_root).expect("temp root");
        let path = temp_root.join("tastehub.toml");
        fs::write(&path, "window_title = \"Harbour Grill\"\n").expect("write config");

        let settings = load_settings(&path).expect("load");
        if env::var("APP__WINDOW_TITLE").is_err() {
            assert_eq!(settings.window_title, "Harbour Grill");
        }

        fs::remove_dir_all(temp_root).expect("cleanup");
    }
}
