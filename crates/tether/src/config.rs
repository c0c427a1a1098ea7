//! CLI-owned configuration: TOML profiles, credential resolution, and
//! translation to `tether_core::PlatformConfig`.
//!
//! Core never sees these types -- it receives a pre-built `PlatformConfig`.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use tether_core::{Credentials, PlatformConfig};

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── TOML config structs ──────────────────────────────────────────────

/// CLI-owned TOML configuration. Core never touches this type.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name (used when --profile is not specified).
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named platform profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default)]
    pub insecure: bool,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            insecure: false,
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_timeout() -> u64 {
    30
}

/// CLI-owned profile definition.
#[derive(Debug, Deserialize, Serialize)]
pub struct Profile {
    /// Platform base URL (e.g., "http://platform:8080").
    pub platform: String,

    /// Basic-auth username.
    pub username: Option<String>,

    /// Basic-auth password (plaintext -- prefer the env var).
    pub password: Option<String>,

    /// Environment variable name containing the password.
    pub password_env: Option<String>,

    /// Override insecure TLS setting.
    pub insecure: Option<bool>,

    /// Override timeout.
    pub timeout: Option<u64>,
}

// ── Config file path ─────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("io", "tether", "tether")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        })
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("tether");
    p
}

// ── Config loading ───────────────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, CliError> {
    let path = config_path();

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed("TETHER_CONFIG_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

/// Persist the config as TOML, creating parent directories as needed.
pub fn save_config(config: &Config) -> Result<(), CliError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let rendered = toml::to_string_pretty(config).map_err(|e| CliError::Validation {
        field: "config".into(),
        reason: format!("could not serialize config: {e}"),
    })?;
    std::fs::write(&path, rendered)?;
    Ok(())
}

// ── Profile resolution ───────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Translate a CLI `Profile` + global flags into a `PlatformConfig`.
///
/// This is the single boundary where CLI config types cross into core
/// types. CLI flag overrides take priority over profile values.
pub fn resolve_profile(
    profile: &Profile,
    profile_name: &str,
    global: &GlobalOpts,
) -> Result<PlatformConfig, CliError> {
    // 1. Platform URL (flag > env > profile)
    let url_str = global.platform.as_deref().unwrap_or(&profile.platform);
    let url: url::Url = url_str.parse().map_err(|_| CliError::Validation {
        field: "platform".into(),
        reason: format!("invalid URL: {url_str}"),
    })?;

    // 2. Credentials (flag > env > profile; absent is fine for open backends)
    let credentials = resolve_credentials(profile, profile_name, global)?;

    // 3. TLS and timeout (flag > profile > default)
    let accept_invalid_certs = global.insecure || profile.insecure.unwrap_or(false);
    let timeout = Duration::from_secs(
        global
            .timeout
            .or(profile.timeout)
            .unwrap_or_else(default_timeout),
    );

    let mut config = PlatformConfig::new(url);
    config.credentials = credentials;
    config.accept_invalid_certs = accept_invalid_certs;
    config.timeout = timeout;
    Ok(config)
}

/// Build a `PlatformConfig` directly from CLI flags when no profile exists.
pub fn resolve_flags_only(global: &GlobalOpts) -> Result<PlatformConfig, CliError> {
    let url_str = global.platform.as_deref().ok_or_else(|| CliError::NoConfig {
        path: config_path().display().to_string(),
    })?;

    let url: url::Url = url_str.parse().map_err(|_| CliError::Validation {
        field: "platform".into(),
        reason: format!("invalid URL: {url_str}"),
    })?;

    let mut config = PlatformConfig::new(url);
    config.credentials = flag_credentials(global);
    config.accept_invalid_certs = global.insecure;
    config.timeout = Duration::from_secs(global.timeout.unwrap_or_else(default_timeout));
    Ok(config)
}

// ── Credential helpers ───────────────────────────────────────────────

fn flag_credentials(global: &GlobalOpts) -> Option<Credentials> {
    let username = global.username.clone()?;
    let password = global.password.clone()?;
    Some(Credentials {
        username,
        password: SecretString::from(password),
    })
}

fn resolve_credentials(
    profile: &Profile,
    profile_name: &str,
    global: &GlobalOpts,
) -> Result<Option<Credentials>, CliError> {
    // 1. CLI flags / env vars
    if let Some(creds) = flag_credentials(global) {
        return Ok(Some(creds));
    }

    // 2. Profile
    let Some(username) = profile.username.clone() else {
        return Ok(None);
    };

    // Password chain: password_env -> plaintext password
    let password = if let Some(ref env_name) = profile.password_env {
        std::env::var(env_name).map_err(|_| CliError::NoCredentials {
            profile: profile_name.into(),
        })?
    } else if let Some(ref plain) = profile.password {
        plain.clone()
    } else {
        return Err(CliError::NoCredentials {
            profile: profile_name.into(),
        });
    };

    Ok(Some(Credentials {
        username,
        password: SecretString::from(password),
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cli::{ColorMode, OutputFormat};

    fn flags() -> GlobalOpts {
        GlobalOpts {
            profile: None,
            platform: None,
            username: None,
            password: None,
            output: OutputFormat::Table,
            color: ColorMode::Auto,
            verbose: 0,
            quiet: false,
            yes: false,
            insecure: false,
            timeout: None,
        }
    }

    fn lab_profile() -> Profile {
        Profile {
            platform: "http://platform:8080".into(),
            username: None,
            password: None,
            password_env: None,
            insecure: None,
            timeout: Some(90),
        }
    }

    #[test]
    fn explicit_timeout_flag_beats_the_profile() {
        let mut global = flags();
        global.timeout = Some(5);
        let config = resolve_profile(&lab_profile(), "lab", &global).unwrap();
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn profile_timeout_applies_when_no_flag_is_given() {
        let config = resolve_profile(&lab_profile(), "lab", &flags()).unwrap();
        assert_eq!(config.timeout, Duration::from_secs(90));
    }

    #[test]
    fn timeout_defaults_when_neither_side_sets_it() {
        let mut profile = lab_profile();
        profile.timeout = None;
        let config = resolve_profile(&profile, "lab", &flags()).unwrap();
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
