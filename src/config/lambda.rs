use crate::utils::error::Result;
use crate::utils::validation::{validate_origin, Validate};
use std::env;

#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub allowed_origin: String,
}

impl LambdaConfig {
    pub fn from_env() -> Self {
        Self {
            allowed_origin: env::var("ALLOWED_ORIGIN").unwrap_or_else(|_| "*".to_string()),
        }
    }
}

impl Default for LambdaConfig {
    fn default() -> Self {
        Self {
            allowed_origin: "*".to_string(),
        }
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validate_origin("ALLOWED_ORIGIN", &self.allowed_origin)?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_origin_is_wildcard() {
        let config = LambdaConfig::default();
        assert_eq!(config.allowed_origin, "*");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_origin() {
        let config = LambdaConfig {
            allowed_origin: "roman.example.com".to_string(),
        };
        assert!(config.validate().is_err());
    }
}
