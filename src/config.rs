//! Configuration file handling
//!
//! JSON config under `~/.offers-tui/config.json`: the offers data file path
//! and the badge lookup tables (ship -> class, class -> color). Both maps
//! ship with built-in defaults covering the Royal Caribbean fleet and may
//! be overridden or extended in the config file.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Offers data file (JSON array of records or CSV with the pipeline's
    /// column headers).
    #[serde(default)]
    pub data_path: Option<String>,
    /// Ship name fragment -> class label.
    #[serde(default = "default_ship_class_map")]
    pub ship_class_map: HashMap<String, String>,
    /// Class label -> color name (ratatui color names or #rrggbb).
    #[serde(default = "default_class_color_map")]
    pub class_color_map: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: None,
            ship_class_map: default_ship_class_map(),
            class_color_map: default_class_color_map(),
        }
    }
}

fn default_ship_class_map() -> HashMap<String, String> {
    let entries: [(&str, &str); 28] = [
        ("Icon", "Icon"),
        ("Star", "Icon"),
        ("Oasis", "Oasis"),
        ("Allure", "Oasis"),
        ("Harmony", "Oasis"),
        ("Symphony", "Oasis"),
        ("Wonder", "Oasis"),
        ("Utopia", "Oasis"),
        ("Quantum", "Quantum"),
        ("Anthem", "Quantum"),
        ("Ovation", "Quantum"),
        ("Spectrum", "Quantum"),
        ("Odyssey", "Quantum"),
        ("Freedom", "Freedom"),
        ("Liberty", "Freedom"),
        ("Independence", "Freedom"),
        ("Voyager", "Voyager"),
        ("Explorer", "Voyager"),
        ("Adventure", "Voyager"),
        ("Navigator", "Voyager"),
        ("Mariner", "Voyager"),
        ("Radiance", "Radiance"),
        ("Brilliance", "Radiance"),
        ("Serenade", "Radiance"),
        ("Jewel", "Radiance"),
        ("Vision", "Vision"),
        ("Grandeur", "Vision"),
        ("Rhapsody", "Vision"),
    ];
    entries
        .iter()
        .map(|(ship, class)| (ship.to_string(), class.to_string()))
        .collect()
}

fn default_class_color_map() -> HashMap<String, String> {
    let entries: [(&str, &str); 7] = [
        ("Icon", "lightmagenta"),
        ("Oasis", "magenta"),
        ("Quantum", "blue"),
        ("Freedom", "green"),
        ("Voyager", "cyan"),
        ("Radiance", "yellow"),
        ("Vision", "red"),
    ];
    entries
        .iter()
        .map(|(class, color)| (class.to_string(), color.to_string()))
        .collect()
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".offers-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        serde_json::from_str(&contents).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_maps_cover_known_ships() {
        let config = Config::default();
        assert_eq!(config.ship_class_map.get("Odyssey").unwrap(), "Quantum");
        assert_eq!(config.ship_class_map.get("Wonder").unwrap(), "Oasis");
        assert!(config.class_color_map.contains_key("Quantum"));
    }

    #[test]
    fn test_partial_config_falls_back_to_default_maps() {
        let config: Config = serde_json::from_str(r#"{"data_path": "offers.json"}"#).unwrap();
        assert_eq!(config.data_path.as_deref(), Some("offers.json"));
        assert!(!config.ship_class_map.is_empty());
        assert!(!config.class_color_map.is_empty());
    }
}
