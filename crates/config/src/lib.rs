//! Central-body catalog models and loaders for the maneuver calculator.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// A central body the planner can orbit.
#[derive(Debug, Deserialize, Clone)]
pub struct BodyConfig {
    pub name: String,
    /// Gravitational parameter (m³/s²).
    pub mu_m3_s2: f64,
    /// Mean radius (m), added to surface altitudes by the orbit builder.
    pub radius_m: f64,
}

/// Errors that can occur while loading catalog files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unknown body `{0}`")]
    UnknownBody(String),
}

/// Load body configurations from a YAML file or a directory of per-body
/// TOML fragments.
pub fn load_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<BodyConfig>, ConfigError> {
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_bodies(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let body: BodyConfig = toml::from_str(&contents)?;
        Ok(vec![body])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

/// Case-insensitive catalog lookup.
pub fn find_body<'a>(bodies: &'a [BodyConfig], name: &str) -> Result<&'a BodyConfig, ConfigError> {
    bodies
        .iter()
        .find(|body| body.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| ConfigError::UnknownBody(name.to_string()))
}

fn read_dir_bodies(dir: &Path) -> Result<Vec<BodyConfig>, ConfigError> {
    let mut bodies = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        bodies.push(toml::from_str(&contents)?);
    }
    Ok(bodies)
}
