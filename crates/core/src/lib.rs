//! PicSeek — debounced stock-photo search with a pure-reducer core.
//!
//! This crate holds everything about PicSeek that is not rendering: the state
//! machine driving the search loop, the provider HTTP client, the render-plan
//! projection, and startup configuration.
//!
//! # Modules
//!
//! - [`types`] — Search state, result entries, shared UI constants
//! - [`machine`] — Event/Command enums and the pure `update` reducer
//! - [`render`] — Projection of state into skeleton/grid/empty render plans
//! - [`provider`] — Outbound search against the stock-photo provider

pub mod machine;
pub mod provider;
pub mod render;
pub mod types;

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

// ---------------------------------------------------------------------------
// Cross-platform path helpers
// ---------------------------------------------------------------------------

/// Platform-aware home directory: `HOME` on Unix, `USERPROFILE` on Windows.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE")).ok().map(PathBuf::from)
}

/// Platform-aware config directory: `~/.picseek` on Unix, `%APPDATA%/picseek` on Windows.
pub fn config_dir() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        std::env::var("APPDATA").ok().map(|a| PathBuf::from(a).join("picseek"))
    } else {
        home_dir().map(|h| h.join(".picseek"))
    }
}

// ---------------------------------------------------------------------------
// config.toml loading
// ---------------------------------------------------------------------------

/// Default provider endpoint. Overridable for tests and proxies via
/// `PICSEEK_API_BASE` or `api_base` in the config file.
pub const DEFAULT_API_BASE: &str = "https://api.unsplash.com";

/// Known keys in `config.toml` for config validation.
const KNOWN_CONFIG_KEYS: &[&str] = &["access_key", "api_base"];

/// Resolved startup configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Provider client ID, sent as the `client_id` query parameter. Always
    /// injected from the environment or the config file, never baked in.
    pub access_key: String,
    pub api_base: String,
}

/// Startup configuration failure. Fatal: there is nothing to search without a
/// provider credential.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no provider access key: set PICSEEK_ACCESS_KEY or put access_key = \"...\" in {0}")]
    MissingAccessKey(String),
}

/// Simple Levenshtein edit distance for typo suggestions.
fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Load configuration from the environment and `<config_dir>/config.toml`.
///
/// Environment values (`PICSEEK_ACCESS_KEY`, `PICSEEK_API_BASE`) win over the
/// file; the API base falls back to [`DEFAULT_API_BASE`]. A missing access key
/// is an error with guidance.
pub fn load_config() -> Result<Config, ConfigError> {
    let file = config_dir().map(|d| d.join("config.toml"));
    resolve_config(
        std::env::var("PICSEEK_ACCESS_KEY").ok(),
        std::env::var("PICSEEK_API_BASE").ok(),
        file.as_deref(),
    )
}

/// Resolve configuration from explicit sources. Split out from [`load_config`]
/// so tests can script the environment instead of mutating it.
pub fn resolve_config(
    env_access_key: Option<String>,
    env_api_base: Option<String>,
    file: Option<&Path>,
) -> Result<Config, ConfigError> {
    let mut access_key: Option<String> = None;
    let mut api_base = DEFAULT_API_BASE.to_string();

    if let Some(path) = file {
        apply_config_file(path, &mut access_key, &mut api_base);
    }

    // Environment beats file. Empty values count as unset.
    if let Some(key) = env_access_key.filter(|v| !v.is_empty()) {
        access_key = Some(key);
    }
    if let Some(base) = env_api_base.filter(|v| !v.is_empty()) {
        api_base = base;
    }

    let guidance = file
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "~/.picseek/config.toml".to_string());
    let access_key = access_key.ok_or(ConfigError::MissingAccessKey(guidance))?;

    Ok(Config { access_key, api_base: api_base.trim_end_matches('/').to_string() })
}

/// Merge values from a `config.toml` into the given slots. A missing or
/// unparseable file leaves them untouched (with a warning for the latter);
/// unknown keys warn with a typo suggestion.
fn apply_config_file(path: &Path, access_key: &mut Option<String>, api_base: &mut String) {
    if !path.exists() {
        return;
    }
    debug!(path = %path.display(), "loading config.toml");
    let Ok(content) = std::fs::read_to_string(path) else {
        warn!(path = %path.display(), "Failed to read config.toml");
        return;
    };
    let Ok(table) = content.parse::<toml::Table>() else {
        warn!(path = %path.display(), "Failed to parse config.toml");
        return;
    };

    // Validate keys — warn on unknown
    for key in table.keys() {
        if !KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
            let suggestion =
                KNOWN_CONFIG_KEYS.iter().min_by_key(|k| edit_distance(key, k)).unwrap();
            let dist = edit_distance(key, suggestion);
            if dist <= 3 {
                warn!(
                    key = key.as_str(),
                    suggestion = *suggestion,
                    "Unknown key in config.toml — did you mean '{suggestion}'?"
                );
            } else {
                warn!(
                    key = key.as_str(),
                    "Unknown key in config.toml (known keys: {})",
                    KNOWN_CONFIG_KEYS.join(", ")
                );
            }
        }
    }

    if let Some(key) = table.get("access_key").and_then(|v| v.as_str()) {
        *access_key = Some(key.to_string());
    }
    if let Some(base) = table.get("api_base").and_then(|v| v.as_str()) {
        *api_base = base.to_string();
    }
}
