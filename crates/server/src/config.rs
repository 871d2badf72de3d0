use std::{collections::HashMap, fs};

use sheets::{SheetsConfig, SheetsCredential, DEFAULT_BASE_URL, DEFAULT_READ_RANGE, DEFAULT_WRITE_RANGE};
use tracing::warn;

const SETTINGS_FILE: &str = "server.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_bind: String,
    pub default_sheet_id: Option<String>,
    pub sheets_api_key: Option<String>,
    pub sheets_access_token: Option<String>,
    pub sheets_base_url: String,
    pub sheets_read_range: String,
    pub sheets_write_range: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:3000".into(),
            default_sheet_id: None,
            sheets_api_key: None,
            sheets_access_token: None,
            sheets_base_url: DEFAULT_BASE_URL.into(),
            sheets_read_range: DEFAULT_READ_RANGE.into(),
            sheets_write_range: DEFAULT_WRITE_RANGE.into(),
        }
    }
}

impl Settings {
    /// An access token wins over an API key when both are configured.
    pub fn sheets_config(&self) -> SheetsConfig {
        let credential = match (&self.sheets_access_token, &self.sheets_api_key) {
            (Some(token), _) => Some(SheetsCredential::BearerToken(token.clone())),
            (None, Some(key)) => Some(SheetsCredential::ApiKey(key.clone())),
            (None, None) => None,
        };
        SheetsConfig {
            base_url: self.sheets_base_url.clone(),
            read_range: self.sheets_read_range.clone(),
            write_range: self.sheets_write_range.clone(),
            credential,
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        apply_file_overrides(&mut settings, &raw);
    }
    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());

    if settings.default_sheet_id.is_none() {
        warn!("no default sheet id configured; requests must pass sheetId");
    }
    if settings.sheets_api_key.is_none() && settings.sheets_access_token.is_none() {
        warn!("no sheets credential configured; only public sheets will be readable");
    }

    settings
}

pub(crate) fn apply_file_overrides(settings: &mut Settings, raw: &str) {
    let file_cfg = match toml::from_str::<HashMap<String, String>>(raw) {
        Ok(cfg) => cfg,
        Err(error) => {
            warn!(%error, file = SETTINGS_FILE, "ignoring unreadable settings file");
            return;
        }
    };

    if let Some(v) = file_cfg.get("bind_addr") {
        settings.server_bind = v.clone();
    }
    if let Some(v) = file_cfg.get("sheet_id") {
        settings.default_sheet_id = non_empty(v);
    }
    if let Some(v) = file_cfg.get("sheets_api_key") {
        settings.sheets_api_key = non_empty(v);
    }
    if let Some(v) = file_cfg.get("sheets_access_token") {
        settings.sheets_access_token = non_empty(v);
    }
    if let Some(v) = file_cfg.get("sheets_base_url") {
        settings.sheets_base_url = v.clone();
    }
    if let Some(v) = file_cfg.get("sheets_read_range") {
        settings.sheets_read_range = v.clone();
    }
    if let Some(v) = file_cfg.get("sheets_write_range") {
        settings.sheets_write_range = v.clone();
    }
}

/// Later names in each list take precedence over earlier ones.
pub(crate) fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    let last = |names: &[&str]| names.iter().rev().find_map(|name| lookup(name));

    if let Some(v) = last(&["SERVER_BIND", "APP__BIND_ADDR"]) {
        settings.server_bind = v;
    }
    if let Some(v) = last(&["SHEET_ID", "APP__SHEET_ID"]) {
        settings.default_sheet_id = non_empty(&v);
    }
    if let Some(v) = last(&["GOOGLE_SHEETS_API_KEY", "APP__SHEETS_API_KEY"]) {
        settings.sheets_api_key = non_empty(&v);
    }
    if let Some(v) = last(&["GOOGLE_SHEETS_ACCESS_TOKEN", "APP__SHEETS_ACCESS_TOKEN"]) {
        settings.sheets_access_token = non_empty(&v);
    }
    if let Some(v) = last(&["SHEETS_API_BASE_URL", "APP__SHEETS_BASE_URL"]) {
        settings.sheets_base_url = v;
    }
    if let Some(v) = lookup("APP__SHEETS_READ_RANGE") {
        settings.sheets_read_range = v;
    }
    if let Some(v) = lookup("APP__SHEETS_WRITE_RANGE") {
        settings.sheets_write_range = v;
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
