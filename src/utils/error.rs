use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Invalid roman numeral: '{input}'")]
    InvalidNumeral { input: String },

    #[error("Number out of range (1-3999): '{input}'")]
    OutOfRange { input: String },

    #[error("Missing {name} parameter")]
    MissingParameter { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 使用者輸入錯誤 (羅馬數字、阿拉伯數字、缺少參數)
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ConvertError {
    pub fn invalid_numeral(input: impl Into<String>) -> Self {
        Self::InvalidNumeral {
            input: input.into(),
        }
    }

    pub fn out_of_range(input: impl Into<String>) -> Self {
        Self::OutOfRange {
            input: input.into(),
        }
    }

    pub fn missing_parameter(name: impl Into<String>) -> Self {
        Self::MissingParameter { name: name.into() }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidNumeral { .. } | Self::OutOfRange { .. } | Self::MissingParameter { .. } => {
                ErrorCategory::Input
            }
            Self::TomlError(_) | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 程序退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidNumeral { input } => format!(
                "'{}' is not a valid roman numeral in standard notation",
                input
            ),
            Self::OutOfRange { input } => {
                format!("'{}' must be a whole number between 1 and 3999", input)
            }
            Self::MissingParameter { name } => format!("The '{}' parameter is required", name),
            Self::IoError(e) => format!("File system error: {}", e),
            Self::SerializationError(e) => format!("Could not read or write JSON data: {}", e),
            Self::TomlError(e) => format!("Configuration file is not valid TOML: {}", e),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidNumeral { .. } => {
                "Use the symbols I, V, X, L, C, D, M in standard subtractive form (e.g. MCMXCIV)"
            }
            Self::OutOfRange { .. } => "Pick an integer from 1 to 3999",
            Self::MissingParameter { .. } => "Add the missing query parameter and retry",
            Self::IoError(_) => "Check that the path exists and is writable",
            Self::SerializationError(_) => "Delete the corrupted file and retry",
            Self::TomlError(_) | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration value and restart"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
