use std::{fs, path::PathBuf};

use serde::Deserialize;

use crate::view::DEFAULT_INTENT_QUEUE_CAPACITY;

pub const DEFAULT_CONFIG_FILE: &str = "vote_list.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub seed_path: Option<PathBuf>,
    pub log_filter: String,
    pub window_title: String,
    pub intent_queue_capacity: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed_path: None,
            log_filter: "info".into(),
            window_title: "Popular Products".into(),
            intent_queue_capacity: DEFAULT_INTENT_QUEUE_CAPACITY,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    seed_path: Option<PathBuf>,
    log_filter: Option<String>,
    window_title: Option<String>,
    intent_queue_capacity: Option<usize>,
}

/// Defaults, then `vote_list.toml` (or the file named by `VOTE_LIST_CONFIG`),
/// then environment overrides.
pub fn load_settings() -> Settings {
    let path = std::env::var("VOTE_LIST_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.into());
    let file = fs::read_to_string(&path).ok();
    Settings::from_sources(file.as_deref(), |name| std::env::var(name).ok())
}

impl Settings {
    pub fn from_sources(file: Option<&str>, env: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Settings::default();

        if let Some(raw) = file {
            match toml::from_str::<FileSettings>(raw) {
                Ok(file_cfg) => settings.merge_file(file_cfg),
                Err(err) => tracing::warn!(error = %err, "ignoring malformed settings file"),
            }
        }

        if let Some(v) = env("VOTE_LIST_SEED") {
            settings.seed_path = Some(PathBuf::from(v));
        }
        if let Some(v) = env("APP__SEED_PATH") {
            settings.seed_path = Some(PathBuf::from(v));
        }

        if let Some(v) = env("VOTE_LIST_LOG") {
            settings.log_filter = v;
        }
        if let Some(v) = env("APP__LOG_FILTER") {
            settings.log_filter = v;
        }

        if let Some(v) = env("APP__WINDOW_TITLE") {
            settings.window_title = v;
        }

        if let Some(v) = env("APP__INTENT_QUEUE_CAPACITY") {
            match v.parse::<usize>() {
                Ok(parsed) if parsed > 0 => settings.intent_queue_capacity = parsed,
                _ => tracing::warn!(value = %v, "ignoring invalid APP__INTENT_QUEUE_CAPACITY"),
            }
        }

        settings
    }

    fn merge_file(&mut self, file_cfg: FileSettings) {
        if let Some(v) = file_cfg.seed_path {
            self.seed_path = Some(v);
        }
        if let Some(v) = file_cfg.log_filter {
            self.log_filter = v;
        }
        if let Some(v) = file_cfg.window_title {
            self.window_title = v;
        }
        if let Some(v) = file_cfg.intent_queue_capacity.filter(|v| *v > 0) {
            self.intent_queue_capacity = v;
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
