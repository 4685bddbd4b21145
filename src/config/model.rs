//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use crate::shop::controller::OfflinePolicy;
use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub demo: DemoConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where and under which key the furniture list is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_storage_key")]
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            key: default_storage_key(),
        }
    }
}

/// Reachability probe settings. With the probe disabled the app always
/// reports itself online.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default = "default_true")]
    pub probe_enabled: bool,
    #[serde(default = "default_probe_host")]
    pub probe_host: String,
    #[serde(default = "default_probe_port")]
    pub probe_port: u16,
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            probe_enabled: true,
            probe_host: default_probe_host(),
            probe_port: default_probe_port(),
            interval_ms: default_interval_ms(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BehaviorConfig {
    #[serde(default)]
    pub offline_policy: OfflinePolicy,
}

/// Style editor demo settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_log_name")]
    pub log_name: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            log_name: default_log_name(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            level: default_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_data_dir() -> String {
    "~/.local/share/furnishop".to_string()
}
fn default_storage_key() -> String {
    "furnitures".to_string()
}
fn default_probe_host() -> String {
    "1.1.1.1".to_string()
}
fn default_probe_port() -> u16 {
    53
}
fn default_interval_ms() -> u64 {
    3000
}
fn default_timeout_ms() -> u64 {
    1500
}
fn default_debounce_ms() -> u64 {
    5000
}
fn default_log_name() -> String {
    "Saurabh Soni".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/furnishop/logs".to_string()
}
fn default_level() -> String {
    "info".to_string()
}
