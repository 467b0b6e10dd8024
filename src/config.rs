use serde::{Deserialize, Serialize};

use crate::errors::DispatchError;


/// Display settings for turning node placement into canvas coordinates
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Pixels per coordinate unit
    pub scale: f64,
    /// Margin added on both axes after scaling
    pub offset: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self { scale: 100.0, offset: 50.0 }
    }
}

impl ViewConfig {

    /// Load from JSON, missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, DispatchError> {
        let config: ViewConfig = serde_json::from_str(json)
            .map_err(|e| DispatchError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DispatchError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(DispatchError::InvalidConfig(format!("scale must be a positive number, got {}", self.scale)));
        }
        if !self.offset.is_finite() {
            return Err(DispatchError::InvalidConfig(format!("offset must be finite, got {}", self.offset)));
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewConfig::from_json("{}").unwrap();
        assert_eq!(config, ViewConfig { scale: 100.0, offset: 50.0 });
    }

    #[test]
    fn test_partial_override() {
        let config = ViewConfig::from_json(r#"{"scale": 40}"#).unwrap();
        assert_eq!(config.scale, 40.0);
        assert_eq!(config.offset, 50.0);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(ViewConfig::from_json(r#"{"scale": 0}"#), Err(DispatchError::InvalidConfig(_))));
        assert!(matches!(ViewConfig::from_json(r#"{"scale": -2.5}"#), Err(DispatchError::InvalidConfig(_))));
        assert!(matches!(ViewConfig::from_json("not json"), Err(DispatchError::InvalidConfig(_))));
    }
}
