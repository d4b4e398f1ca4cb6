use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

pub const ENV_API_BASE: &str = "DASHAWAY_API_BASE";
pub const ENV_TOKEN: &str = "DASHAWAY_TOKEN";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashawayConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub api_base: String,
    /// Added in v1.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Added in v1.
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
    /// Bearer token forwarded to the analysis API. Absent = anonymous.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub access_token: Option<String>,
    pub created_at: jiff::Timestamp,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

impl Default for DashawayConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            access_token: None,
            created_at: jiff::Timestamp::now(),
        }
    }
}

/// Redacted config info safe to print.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigInfo {
    pub api_base: String,
    pub timeout_secs: u64,
    pub history_capacity: usize,
    pub created_at: String,
    pub authenticated: bool,
    pub token_hint: Option<String>,
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.dashaway.cli"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub fn has_config() -> bool {
    config_path().map(|p| p.exists()).unwrap_or(false)
}

pub fn load_config() -> eyre::Result<DashawayConfig> {
    load_config_from(&config_path()?)
}

/// The saved config, or defaults when none has been written yet.
pub fn load_or_default() -> eyre::Result<DashawayConfig> {
    if has_config() {
        load_config()
    } else {
        Ok(DashawayConfig::default())
    }
}

pub fn load_config_from(path: &Path) -> eyre::Result<DashawayConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: DashawayConfig = serde_json::from_value(migrated)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &DashawayConfig) -> eyre::Result<()> {
    if config.timeout_secs == 0 {
        return Err(eyre::eyre!("timeout_secs must be at least 1"));
    }
    Ok(())
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update dashaway."
        ));
    }

    // v0 → v1: request timeout and undo depth became configurable
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("timeout_secs")
            .or_insert(serde_json::Value::Number(DEFAULT_TIMEOUT_SECS.into()));
        obj.entry("history_capacity")
            .or_insert(serde_json::Value::Number(DEFAULT_HISTORY_CAPACITY.into()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added timeout_secs, history_capacity)");
    }

    Ok(json)
}

pub fn save_config(config: &DashawayConfig) -> eyre::Result<PathBuf> {
    save_config_to(&config_dir()?, config)
}

/// Write `config.json` into `dir` atomically. Returns the written path.
pub fn save_config_to(dir: &Path, config: &DashawayConfig) -> eyre::Result<PathBuf> {
    validate(config)?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join("config.json");
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    // The file may hold a bearer token
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(path)
}

pub fn delete_config() -> eyre::Result<()> {
    let path = config_path()?;
    if path.exists() {
        std::fs::remove_file(&path)?;
        tracing::info!(path = %path.display(), "config deleted");
    }
    Ok(())
}

/// Apply `DASHAWAY_API_BASE` / `DASHAWAY_TOKEN` from the environment.
pub fn apply_env_overrides(config: &mut DashawayConfig) {
    apply_overrides_from(config, |key| std::env::var(key).ok());
}

pub fn apply_overrides_from(
    config: &mut DashawayConfig,
    lookup: impl Fn(&str) -> Option<String>,
) {
    if let Some(api_base) = lookup(ENV_API_BASE).filter(|v| !v.is_empty()) {
        config.api_base = api_base;
    }
    if let Some(token) = lookup(ENV_TOKEN).filter(|v| !v.is_empty()) {
        config.access_token = Some(token);
    }
}

pub fn config_info(config: &DashawayConfig) -> ConfigInfo {
    ConfigInfo {
        api_base: config.api_base.clone(),
        timeout_secs: config.timeout_secs,
        history_capacity: config.history_capacity,
        created_at: config.created_at.to_string(),
        authenticated: config.access_token.is_some(),
        token_hint: config.access_token.as_deref().map(redact_token),
    }
}

fn redact_token(token: &str) -> String {
    if token.len() <= 8 || !token.is_ascii() {
        return "****".to_string();
    }
    let prefix = &token[..4];
    let suffix = &token[token.len() - 4..];
    format!("{prefix}...{suffix}")
}
