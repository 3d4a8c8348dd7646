//! Environment-driven settings for locating and checking alarm settings.

use std::env;
use std::path::PathBuf;


/// Default location of the alarm settings document.
pub const DEFAULT_SETTINGS_PATH: &str = "config/alarm-settings.yml";

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlarmConfig {
    /// Active profile name (empty = default).
    pub profile: String,
    /// Path of the alarm settings document.
    pub settings_path: PathBuf,
    /// Treat validation warnings as failures.
    pub strict: bool,
}

impl Default for AlarmConfig {
    fn default() -> Self {
        Self {
            profile: String::new(),
            settings_path: PathBuf::from(DEFAULT_SETTINGS_PATH),
            strict: false,
        }
    }
}

impl AlarmConfig {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `ALARM_PROFILE`. When set (e.g. `PROD`), every key
    /// is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_opt("ALARM_PROFILE").unwrap_or_default().to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build config for an explicit profile.
    pub fn for_profile(profile: &str) -> Self {
        let defaults = Self::default();
        Self {
            profile: profile.to_string(),
            settings_path: profiled_env_opt(profile, "ALARM_SETTINGS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.settings_path),
            strict: profiled_env_opt(profile, "ALARM_STRICT")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.strict),
        }
    }
}
