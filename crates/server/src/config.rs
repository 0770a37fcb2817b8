//! Settings for the anvil demo run.
//!
//! Values come from an optional JSON file (`--config <path>`), then individual
//! command-line flags override whatever the file said.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// RNG seed; `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Maximum number of uses before the run stops.
    pub uses: u32,
    /// Yaw of the placing player, degrees.
    pub placer_yaw: f32,
    /// Auxiliary data of the anvil item being placed.
    pub item_meta: u32,
    /// Print every recorded world event as a JSON line.
    pub emit_json: bool,
    /// Half-size of the generated flat world, in chunks.
    pub world_radius: i32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: None,
            uses: 64,
            placer_yaw: 0.0,
            item_meta: 0,
            emit_json: false,
            world_radius: 2,
        }
    }
}

impl DemoConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Build from process arguments (program name included or not).
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut config = match flag_value(args, "--config") {
            Some(path) => Self::from_file(Path::new(path))?,
            None => Self::default(),
        };
        config.apply_args(args)?;
        Ok(config)
    }

    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        if let Some(seed) = parse_flag(args, "--seed")? {
            self.seed = Some(seed);
        }
        if let Some(uses) = parse_flag(args, "--uses")? {
            self.uses = uses;
        }
        if let Some(yaw) = parse_flag(args, "--yaw")? {
            self.placer_yaw = yaw;
        }
        if let Some(meta) = parse_flag(args, "--item-meta")? {
            self.item_meta = meta;
        }
        if let Some(radius) = parse_flag(args, "--radius")? {
            self.world_radius = radius;
        }
        if args.iter().any(|a| a == "--json") {
            self.emit_json = true;
        }
        Ok(())
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .skip_while(|a| *a != flag)
        .nth(1)
        .map(String::as_str)
}

fn parse_flag<T>(args: &[String], flag: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    flag_value(args, flag)
        .map(|raw| raw.parse().with_context(|| format!("invalid value for {flag}: {raw:?}")))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn flags_override_defaults() {
        let config =
            DemoConfig::from_args(&args(&["demo", "--seed", "42", "--yaw", "90", "--json"]))
                .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.placer_yaw, 90.0);
        assert!(config.emit_json);
        assert_eq!(config.uses, DemoConfig::default().uses);
    }

    #[test]
    fn bad_flag_value_is_an_error() {
        let err = DemoConfig::from_args(&args(&["--uses", "many"])).unwrap_err();
        assert!(format!("{err:#}").contains("--uses"));
    }

    #[test]
    fn missing_json_fields_fall_back_to_defaults() {
        let config: DemoConfig = serde_json::from_str(r#"{ "seed": 9, "item_meta": 4 }"#).unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.item_meta, 4);
        assert_eq!(config.world_radius, 2);
    }

    #[test]
    fn config_file_is_read_then_overridden() {
        let path = std::env::temp_dir()
            .join(format!("wearblock-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "uses": 5, "seed": 1 }"#).unwrap();
        let config =
            DemoConfig::from_args(&args(&["--config", path.to_str().unwrap(), "--seed", "2"]))
                .unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.uses, 5);
        assert_eq!(config.seed, Some(2));
    }
}
