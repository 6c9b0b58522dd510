pub mod schema;
pub mod watcher;

pub use schema::{
    FeedConfig, GaugeConfig, MeterConfig, Orientation, OutputConfig, ThemeConfig, WindowConfig,
};
pub use watcher::ConfigWatcher;

use meter_core::{MeterError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `MeterConfig::default()` if
/// the file doesn't exist so a gauge can always be mounted.
///
/// The loaded configuration is validated before it is returned.
pub fn load(path: impl AsRef<Path>) -> Result<MeterConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(MeterConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| MeterError::Config(format!("cannot read '{}': {e}", path.display())))?;

    let config = parse(&raw)?;
    tracing::info!("Loaded config from '{}'", path.display());
    Ok(config)
}

/// Parse and validate a TOML document.
///
/// Gauge fields left out of `[gauge]` take the defaults of the chosen
/// `orientation` (see [`GaugeConfig::for_orientation`]).
pub fn parse(raw: &str) -> Result<MeterConfig> {
    let mut doc: toml::Table =
        toml::from_str(raw).map_err(|e| MeterError::Config(format!("TOML parse error: {e}")))?;
    fill_gauge_defaults(&mut doc)?;
    let config: MeterConfig = toml::Value::Table(doc)
        .try_into()
        .map_err(|e| MeterError::Config(format!("invalid config: {e}")))?;
    config.validate()?;
    Ok(config)
}

fn fill_gauge_defaults(doc: &mut toml::Table) -> Result<()> {
    let Some(toml::Value::Table(gauge)) = doc.get_mut("gauge") else {
        return Ok(());
    };
    let Some(orientation) = gauge.get("orientation") else {
        return Ok(());
    };
    let orientation: Orientation = orientation
        .clone()
        .try_into()
        .map_err(|e| MeterError::Config(format!("gauge.orientation: {e}")))?;

    let preset = toml::Value::try_from(GaugeConfig::for_orientation(orientation))
        .map_err(|e| MeterError::Config(format!("gauge defaults: {e}")))?;
    if let toml::Value::Table(preset) = preset {
        for (key, value) in preset {
            gauge.entry(key).or_insert(value);
        }
    }
    Ok(())
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("meter").join("meter.toml")
}
