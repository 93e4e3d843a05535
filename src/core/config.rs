// src/core/config.rs

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::identifier::{DEFAULT_NAMESPACE, Identifier};

use tracing::info;

use super::config_loader::config_paths;

// Vertical build limits of the default overworld
const MIN_ALTITUDE: i32 = -64;
const MAX_ALTITUDE: i32 = 320;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CompassConfig {
    // Y used by the creative sneak-use teleport
    pub teleport_altitude: i32,

    // Appearance variant id stamped on the disguised stack
    pub custom_model_data: i32,

    pub marker_enchantment: Identifier,

    pub disguise_item: Identifier,

    pub lock_sound: Identifier,
}

impl Default for CompassConfig {
    fn default() -> Self {
        CompassConfig {
            teleport_altitude: 120,
            custom_model_data: 1,
            marker_enchantment: vanilla("infinity"),
            disguise_item: vanilla("compass"),
            lock_sound: vanilla("item.lodestone_compass.lock"),
        }
    }
}

fn vanilla(path: &str) -> Identifier {
    Identifier::new_unchecked(DEFAULT_NAMESPACE, path)
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    // Which items to register, in order
    #[serde(default = "default_items")]
    pub items: Vec<String>,

    #[serde(default)]
    pub compass: CompassConfig,
}

impl Config {
    // Loads system default and then overrides with user config, if present
    pub fn load() -> Result<Self> {
        let (system, user) = config_paths();
        info!(system = ?system, user = ?user, "Loading configuration paths");
        Self::load_from(&system, &user)
    }

    pub fn load_from(system: &Path, user: &Path) -> Result<Self> {
        // 1. Read system default (which should always exist in installed package)
        info!(path = ?system, "Reading system default config");
        let base = fs::read_to_string(system)
            .with_context(|| format!("Reading system default config at {system:?}"))?;
        let mut cfg =
            Self::from_toml_str(&base).context("Parsing system default config")?;

        // 2. If user config exists, merge/override
        if user.exists() {
            info!(path = ?user, "Overlaying user configuration");
            let overlay = fs::read_to_string(user)
                .with_context(|| format!("Reading user config at {user:?}"))?;
            let user_cfg = Self::from_toml_str(&overlay).context("Parsing user config")?;

            // Simple merge: the user file replaces whole sections
            cfg.items = user_cfg.items;
            cfg.compass = user_cfg.compass;
        } else {
            info!(path = ?user, "No user config found; using defaults");
        }

        // 3. Validate config values
        cfg.validate()?;

        info!(?cfg, "Configuration loaded succesfully");
        Ok(cfg)
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("Deserialising configuration")
    }

    pub fn validate(&self) -> Result<()> {
        let altitude = self.compass.teleport_altitude;
        if !(MIN_ALTITUDE..=MAX_ALTITUDE).contains(&altitude) {
            anyhow::bail!(
                "compass.teleport_altitude must be within {MIN_ALTITUDE}..={MAX_ALTITUDE}, got {altitude}"
            );
        }
        Ok(())
    }
}

fn default_items() -> Vec<String> {
    vec!["biome_compass".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            items: default_items(),
            compass: CompassConfig::default(),
        }
    }
}
