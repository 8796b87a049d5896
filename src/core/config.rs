// src/core/config.rs
use crate::models::AttackModel;
use log::LevelFilter;
use std::env;

// Runtime configuration, sourced from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Analysis
    pub default_attack_model: AttackModel,

    // Output
    pub color_output: bool,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_attack_model: AttackModel::Offline,
            color_output: true,
            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Ok(model) = env::var("DEFAULT_ATTACK_MODEL") {
            match model.parse() {
                Ok(parsed) => config.default_attack_model = parsed,
                Err(e) => log::warn!("{}, keeping {:?}", e, config.default_attack_model),
            }
        }

        // NO_COLOR convention: presence of the variable disables color
        if env::var_os("NO_COLOR").is_some() {
            config.color_output = false;
        }

        if let Ok(level) = env::var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        config
    }
}
