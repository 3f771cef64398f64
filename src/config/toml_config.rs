use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern must compile"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ListenConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListenConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// `allowed_origins` 為空時使用寬鬆的 CORS (`*`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl CorsConfig {
    pub fn is_permissive(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

impl ServerConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ConvertError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${PORT})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// `PORT` 環境變數覆蓋檔案中的埠號
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.server.port = port.trim().parse().map_err(|_| {
                ConvertError::InvalidConfigValueError {
                    field: "PORT".to_string(),
                    value: port.clone(),
                    reason: "Port must be an integer between 1 and 65535".to_string(),
                }
            })?;
        }
        Ok(self)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_non_empty_string("server.host", &self.server.host)?;
        validate_range("server.port", self.server.port, 1, u16::MAX)?;

        for origin in &self.cors.allowed_origins {
            validate_origin("cors.allowed_origins", origin)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_server_config() {
        let toml_content = r#"
[server]
host = "127.0.0.1"
port = 8080

[cors]
allowed_origins = ["https://roman.example.com"]
"#;

        let config = ServerConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.cors.allowed_origins, vec!["https://roman.example.com"]);
        assert!(!config.cors.is_permissive());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ServerConfig::from_toml_str("").unwrap();
        assert_eq!(config.server.host, DEFAULT_HOST);
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert!(config.cors.is_permissive());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ROMAN_ARABIC_TEST_HOST", "10.0.0.5");

        let toml_content = r#"
[server]
host = "${ROMAN_ARABIC_TEST_HOST}"
"#;

        let config = ServerConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.server.host, "10.0.0.5");

        std::env::remove_var("ROMAN_ARABIC_TEST_HOST");
    }

    #[test]
    fn test_port_override() {
        let config = ServerConfig::default()
            .with_overrides_from(|name| (name == "PORT").then(|| "5050".to_string()))
            .unwrap();
        assert_eq!(config.server.port, 5050);

        let err = ServerConfig::default()
            .with_overrides_from(|_| Some("http".to_string()))
            .unwrap_err();
        assert_eq!(err.category(), crate::utils::error::ErrorCategory::Configuration);

        let config = ServerConfig::default().with_overrides_from(|_| None).unwrap();
        assert_eq!(config.server.port, DEFAULT_PORT);
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[server]
port = 0

[cors]
allowed_origins = ["not-a-url"]
"#;

        let config = ServerConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = ServerConfig::from_toml_str("[server\nport = ").unwrap_err();
        assert_eq!(err.category(), crate::utils::error::ErrorCategory::Configuration);
    }

    #[test]
    fn test_sample_config_parses() {
        std::env::set_var("FRONTEND_ORIGIN", "https://roman.example.com");
        let config = ServerConfig::from_toml_str(include_str!("../../demos/server.toml")).unwrap();
        std::env::remove_var("FRONTEND_ORIGIN");

        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.cors.allowed_origins, vec!["https://roman.example.com"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[server]\nport = 4321\n").unwrap();

        let config = ServerConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.server.port, 4321);
    }
}
