use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use tracing::{error, info};

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// The request staged when the window opens.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestSettings {
    pub start: String,
    pub end: String,
    /// Whitespace-separated wall labels.
    #[serde(default)]
    pub walls: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub request: RequestSettings,
}

pub fn load_settings() -> Result<Settings, ConfigError> {
    info!("Attempting to load configuration from {}", DEFAULT_CONFIG_PATH);

    let settings = Config::builder()
        .add_source(File::new(DEFAULT_CONFIG_PATH, FileFormat::Toml).required(true))
        .add_source(Environment::with_prefix("CITYNAV").separator("__"))
        .build()
        .and_then(|config| config.try_deserialize::<Settings>());

    match settings {
        Ok(settings) => {
            info!("Successfully loaded configuration: {:?}", settings);
            Ok(settings)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> Result<Settings, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn test_parse_request() {
        let settings = parse(
            r#"
            [request]
            start = "mumbai"
            end = "lucknow"
            walls = "delhi pune"
            "#,
        )
        .unwrap();
        assert_eq!(settings.request.start, "mumbai");
        assert_eq!(settings.request.end, "lucknow");
        assert_eq!(settings.request.walls, "delhi pune");
    }

    #[test]
    fn test_walls_default_to_empty() {
        let settings = parse(
            r#"
            [request]
            start = "delhi"
            end = "pune"
            "#,
        )
        .unwrap();
        assert!(settings.request.walls.is_empty());
    }

    #[test]
    fn test_missing_end_is_an_error() {
        assert!(parse("[request]\nstart = \"delhi\"\n").is_err());
    }

    #[test]
    fn test_default_file_parses() {
        let settings = parse(include_str!("../config/default.toml")).unwrap();
        assert_eq!(settings.request.start, "mumbai");
    }
}
