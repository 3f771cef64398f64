use crate::utils::error::{ConvertError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// CORS 來源: 只允許 `*` 或 http(s) origin
pub fn validate_origin(field_name: &str, origin: &str) -> Result<()> {
    if origin == "*" {
        return Ok(());
    }

    if origin.is_empty() {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: origin.to_string(),
            reason: "Origin cannot be empty".to_string(),
        });
    }

    match Url::parse(origin) {
        Ok(url) => match url.scheme() {
            "http" | "https" if url.path() == "/" && !origin.ends_with('/') => Ok(()),
            "http" | "https" => Err(ConvertError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: origin.to_string(),
                reason: "Origin must not contain a path".to_string(),
            }),
            scheme => Err(ConvertError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: origin.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: origin.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_origin() {
        assert!(validate_origin("cors.allowed_origins", "*").is_ok());
        assert!(validate_origin("cors.allowed_origins", "https://example.com").is_ok());
        assert!(validate_origin("cors.allowed_origins", "http://localhost:5173").is_ok());
        assert!(validate_origin("cors.allowed_origins", "").is_err());
        assert!(validate_origin("cors.allowed_origins", "example.com").is_err());
        assert!(validate_origin("cors.allowed_origins", "ftp://example.com").is_err());
        assert!(validate_origin("cors.allowed_origins", "https://example.com/app").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("history_limit", 10, 1, 100).is_ok());
        assert!(validate_range("history_limit", 0, 1, 100).is_err());
        assert!(validate_range("history_limit", 101, 1, 100).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("history_file", "history.json").is_ok());
        assert!(validate_path("history_file", "").is_err());
        assert!(validate_path("history_file", "bad\0path").is_err());
    }
}
