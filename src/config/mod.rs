pub mod settings;

pub use settings::Config;

use crate::error::ViewerError;

/// Loads the viewer configuration from the environment, reading `.env` first
/// if one exists.
pub fn load_config() -> Result<Config, ViewerError> {
    dotenv::dotenv().ok(); // Load .env file if present, ignore errors

    let config = Config::from_env();
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<(), ViewerError> {
    if config.redis_url.trim().is_empty() {
        return Err(ViewerError::Config("REDIS_URL cannot be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_redis_url_rejected() {
        let config = Config {
            redis_url: "  ".to_string(),
            ..Config::default()
        };
        let err = validate(&config).unwrap_err();
        assert!(matches!(err, ViewerError::Config(_)));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }
}
