//! Simulation configuration
//!
//! Read once at start-up and fixed for the lifetime of the world. Stored in
//! LocalStorage on the web, read from a JSON file natively.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Physics and population parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Added to `vel.y` on every step without a vertical bounce
    pub gravity: f32,
    /// Multiplier applied to velocity on a wall bounce
    pub friction: f32,
    /// Radius of every spawned body
    pub max_radius: f32,
    /// Mass of a body of radius `max_radius`
    pub max_mass: f32,
    /// Number of bodies
    pub population: usize,
    /// Reference point proximity that lights a body up
    pub highlight_radius: f32,
    /// Highlight change per step
    pub highlight_step: f32,
    /// Placement seed (None = caller picks one)
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            friction: FRICTION,
            max_radius: MAX_RADIUS,
            max_mass: MAX_MASS,
            population: POPULATION,
            highlight_radius: HIGHLIGHT_RADIUS,
            highlight_step: HIGHLIGHT_STEP,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Parse a (possibly partial) JSON document; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the kernel relies on (positive mass, finite numbers)
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("gravity", self.gravity),
            ("friction", self.friction),
            ("max_radius", self.max_radius),
            ("max_mass", self.max_mass),
            ("highlight_radius", self.highlight_radius),
            ("highlight_step", self.highlight_step),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::InvalidConfig(format!("{name} must be finite")));
        }
        if self.max_radius <= 0.0 {
            return Err(Error::InvalidConfig("max_radius must be > 0".into()));
        }
        if self.max_mass <= 0.0 {
            return Err(Error::InvalidConfig("max_mass must be > 0".into()));
        }
        if self.highlight_radius < 0.0 {
            return Err(Error::InvalidConfig("highlight_radius must be >= 0".into()));
        }
        if self.highlight_step < 0.0 {
            return Err(Error::InvalidConfig("highlight_step must be >= 0".into()));
        }
        Ok(())
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "particle_arena_config";

    /// Environment variable naming a JSON config file (native only)
    pub const CONFIG_ENV: &'static str = "PARTICLE_ARENA_CONFIG";

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Load config from the file named by `PARTICLE_ARENA_CONFIG`, if set
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::env::var(Self::CONFIG_ENV) {
            Ok(path) => Self::load_or_default(path),
            Err(_) => {
                log::info!("Using default config");
                Self::default()
            }
        }
    }

    /// Read `path`, falling back to defaults (logged) if it is missing or invalid
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_default(path: impl AsRef<std::path::Path>) -> Self {
        let path = path.as_ref();
        match Self::load_file(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
