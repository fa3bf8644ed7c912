//! Record validation configuration

use serde::Deserialize;

use crate::application::RecordFormat;

/// Settings for the record decoding boundary
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    /// Reject fields that are not part of the record schema
    #[serde(default = "default_reject_unknown_fields")]
    pub reject_unknown_fields: bool,

    /// Format assumed when it cannot be inferred from a file name
    #[serde(default)]
    pub default_format: RecordFormat,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            reject_unknown_fields: default_reject_unknown_fields(),
            default_format: RecordFormat::default(),
        }
    }
}

fn default_reject_unknown_fields() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_config_defaults() {
        let config = ValidationConfig::default();
        assert!(config.reject_unknown_fields);
        assert_eq!(config.default_format, RecordFormat::Json);
    }

    #[test]
    fn test_validation_config_serde_defaults_match_default() {
        let config: ValidationConfig = serde_json::from_str("{}").unwrap();
        assert!(config.reject_unknown_fields);
        assert_eq!(config.default_format, RecordFormat::Json);
    }

    #[test]
    fn test_validation_config_deserialization() {
        let json = r#"{ "reject_unknown_fields": false, "default_format": "yaml" }"#;
        let config: ValidationConfig = serde_json::from_str(json).unwrap();
        assert!(!config.reject_unknown_fields);
        assert_eq!(config.default_format, RecordFormat::Yaml);
    }
}
