pub mod cli;
pub mod lambda;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::history::{DEFAULT_HISTORY_LIMIT, MAX_HISTORY_LIMIT};
#[cfg(feature = "cli")]
use crate::utils::{error::Result, validation::Validate};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "roman-arabic")]
#[command(about = "Convert between Roman numerals and Arabic numbers (1-3999)")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, default_value = ".roman-arabic/history.json")]
    pub history_file: String,

    #[arg(long, global = true, default_value_t = DEFAULT_HISTORY_LIMIT)]
    pub history_limit: usize,

    #[arg(long, global = true, help = "Do not record conversions in the history file")]
    pub no_history: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Roman numeral → Arabic number
    R2a { roman: String },

    /// Arabic number → Roman numeral
    A2r {
        #[arg(allow_hyphen_values = true)]
        arabic: String,
    },

    /// Run the HTTP API
    Serve {
        /// Path to TOML configuration file
        #[arg(short, long)]
        config: Option<String>,

        #[arg(long)]
        host: Option<String>,

        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show recent conversions
    History {
        #[arg(long)]
        clear: bool,
    },
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_path("history_file", &self.history_file)?;
        validate_range("history_limit", self.history_limit, 1, MAX_HISTORY_LIMIT)?;

        if let Command::Serve {
            config: Some(path), ..
        } = &self.command
        {
            validate_path("config", path)?;
        }

        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_conversion_commands() {
        let config = CliConfig::try_parse_from(["roman-arabic", "r2a", "MCMXCIV"]).unwrap();
        assert!(matches!(config.command, Command::R2a { ref roman } if roman == "MCMXCIV"));
        assert_eq!(config.history_limit, DEFAULT_HISTORY_LIMIT);

        let config = CliConfig::try_parse_from(["roman-arabic", "a2r", "-1"]).unwrap();
        assert!(matches!(config.command, Command::A2r { ref arabic } if arabic == "-1"));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let config = CliConfig::try_parse_from([
            "roman-arabic",
            "history",
            "--clear",
            "--history-file",
            "/tmp/h.json",
        ])
        .unwrap();
        assert_eq!(config.history_file, "/tmp/h.json");
        assert!(matches!(config.command, Command::History { clear: true }));
    }

    #[test]
    fn test_serve_flags() {
        let config =
            CliConfig::try_parse_from(["roman-arabic", "serve", "-p", "8080", "--host", "127.0.0.1"])
                .unwrap();
        match config.command {
            Command::Serve { config, host, port } => {
                assert!(config.is_none());
                assert_eq!(host.as_deref(), Some("127.0.0.1"));
                assert_eq!(port, Some(8080));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_validation_rejects_zero_history_limit() {
        let config =
            CliConfig::try_parse_from(["roman-arabic", "--history-limit", "0", "r2a", "X"]).unwrap();
        assert!(config.validate().is_err());
    }
}
