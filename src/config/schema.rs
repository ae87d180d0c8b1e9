use serde::{Deserialize, Serialize};

use crate::ranking::DEFAULT_SEPARATOR;

pub const DEFAULT_OUTPUT_SUFFIX: &str = "-graded.txt";

/// Grader configuration.
///
/// Example YAML:
/// ```yaml
/// separator: ","
/// output_suffix: "-graded.txt"
/// echo: true
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Text that precedes the trailing score field. The last occurrence wins.
    pub separator: String,

    /// Appended to the input file stem to name the output file
    pub output_suffix: String,

    /// Echo ranked lines to the console as they are written
    pub echo: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            echo: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.separator, ",");
        assert_eq!(config.output_suffix, "-graded.txt");
        assert!(config.echo);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config {
            separator: ";".to_string(),
            output_suffix: ".ranked".to_string(),
            echo: false,
        };
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_config_parse() {
        let yaml = r#"
separator: "|"
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.separator, "|");
        assert_eq!(config.output_suffix, DEFAULT_OUTPUT_SUFFIX);
        assert!(config.echo);
    }

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "separator: \",\"\ncolour: red\n";
        assert!(serde_saphyr::from_str::<Config>(yaml).is_err());
    }
}
