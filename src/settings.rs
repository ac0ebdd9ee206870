//! Basket settings and configuration loading
//!
//! Thresholds and layout options, plus the JSON file that pairs them with
//! the item catalog.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::basket::{Item, ItemCatalog, Jitter};
use crate::consts::{
    DEFAULT_CALORIE_TARGET, DEFAULT_CARBON_LIMIT, DEFAULT_JITTER_AMPLITUDE, MAX_JITTER_AMPLITUDE,
};
use crate::error::{CatalogError, ConfigError};

/// Tracker settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Thresholds ===
    /// Carbon budget (gCO2e); reaching it raises the warning
    pub carbon_limit: u64,
    /// Suggested calorie intake (kcal), drives the calorie bar only
    pub calorie_target: u64,

    // === Layout ===
    /// Random horizontal offset per instance
    pub jitter: bool,
    /// Maximum offset when jitter is on
    pub jitter_amplitude: f32,
    /// Seed for the jitter generator
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            carbon_limit: DEFAULT_CARBON_LIMIT,
            calorie_target: DEFAULT_CALORIE_TARGET,

            jitter: false,
            jitter_amplitude: DEFAULT_JITTER_AMPLITUDE,
            seed: 0,
        }
    }
}

impl Settings {
    /// Jitter source for the layout engine
    pub fn jitter(&self) -> Jitter {
        if self.jitter {
            Jitter::seeded(self.seed, self.jitter_amplitude)
        } else {
            Jitter::None
        }
    }

    /// Reject values the layout cannot use
    pub fn validate(&self) -> Result<(), ConfigError> {
        let amp = self.jitter_amplitude;
        if !amp.is_finite() || !(0.0..=MAX_JITTER_AMPLITUDE).contains(&amp) {
            return Err(ConfigError::InvalidSetting {
                field: "jitter_amplitude",
                reason: format!("{amp} is outside 0..={MAX_JITTER_AMPLITUDE}"),
            });
        }
        Ok(())
    }
}

/// Settings plus catalog, as stored on disk
///
/// ```json
/// {
///   "settings": { "carbon_limit": 36000 },
///   "items": [ { "id": "apple", "name": "Apple", "carbon": 200, "calories": 95 } ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasketConfig {
    #[serde(default)]
    pub settings: Settings,
    pub items: Vec<Item>,
}

impl BasketConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.settings.validate()?;
        // Catch catalog mistakes at load time, not on first use
        config.catalog()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!(
            "Loaded {} items from {}",
            config.items.len(),
            path.display()
        );
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn catalog(&self) -> Result<ItemCatalog, CatalogError> {
        ItemCatalog::new(self.items.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.carbon_limit, 36_000);
        assert_eq!(settings.calorie_target, 20_726);
        assert!(matches!(settings.jitter(), Jitter::None));
    }

    #[test]
    fn test_jitter_enabled() {
        let settings = Settings {
            jitter: true,
            seed: 9,
            ..Default::default()
        };
        assert!(matches!(settings.jitter(), Jitter::Seeded { .. }));
    }

    #[test]
    fn test_config_from_json_fills_defaults() {
        let json = r#"{
            "settings": { "carbon_limit": 1000 },
            "items": [
                { "id": "apple", "name": "Apple", "carbon": 200, "calories": 95 }
            ]
        }"#;
        let config = BasketConfig::from_json(json).unwrap();
        assert_eq!(config.settings.carbon_limit, 1000);
        assert_eq!(config.settings.calorie_target, DEFAULT_CALORIE_TARGET);
        assert_eq!(config.items.len(), 1);
        assert_eq!(config.catalog().unwrap().len(), 1);
    }

    #[test]
    fn test_config_without_settings() {
        let json = r#"{ "items": [] }"#;
        let config = BasketConfig::from_json(json).unwrap();
        assert_eq!(config.settings, Settings::default());
    }

    #[test]
    fn test_config_duplicate_item() {
        let json = r#"{ "items": [
            { "id": "apple", "name": "Apple", "carbon": 200, "calories": 95 },
            { "id": "apple", "name": "Apple", "carbon": 200, "calories": 95 }
        ] }"#;
        assert!(matches!(
            BasketConfig::from_json(json),
            Err(ConfigError::Catalog(CatalogError::DuplicateItem(_)))
        ));
    }

    #[test]
    fn test_config_bad_json() {
        assert!(matches!(
            BasketConfig::from_json("{ items: "),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_config_roundtrip_through_file() {
        let config = BasketConfig {
            settings: Settings::default(),
            items: vec![Item::new("rice", "Rice", 400, 200)],
        };
        let path = std::env::temp_dir().join(format!("carbon-basket-{}.json", std::process::id()));
        std::fs::write(&path, config.to_json().unwrap()).unwrap();
        let loaded = BasketConfig::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_missing_file() {
        assert!(matches!(
            BasketConfig::load("/nonexistent/carbon-basket.json"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_config_rejects_huge_jitter() {
        let json = r#"{
            "settings": { "jitter": true, "jitter_amplitude": 3e38 },
            "items": [
                { "id": "apple", "name": "Apple", "carbon": 200, "calories": 95 }
            ]
        }"#;
        assert!(matches!(
            BasketConfig::from_json(json),
            Err(ConfigError::InvalidSetting {
                field: "jitter_amplitude",
                ..
            })
        ));
    }

    #[test]
    fn test_config_rejects_overflowing_jitter() {
        // Larger than f32::MAX, parses to infinity
        let json = r#"{ "settings": { "jitter_amplitude": 1e300 }, "items": [] }"#;
        assert!(matches!(
            BasketConfig::from_json(json),
            Err(ConfigError::InvalidSetting { .. })
        ));
    }

    #[test]
    fn test_validate_bounds() {
        let mut settings = Settings::default();
        assert!(settings.validate().is_ok());
        settings.jitter_amplitude = MAX_JITTER_AMPLITUDE;
        assert!(settings.validate().is_ok());
        settings.jitter_amplitude = -0.01;
        assert!(settings.validate().is_err());
        settings.jitter_amplitude = f32::NAN;
        assert!(settings.validate().is_err());
    }
}
