#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod http;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::{cli::LocalStorage, lambda::LambdaConfig, toml_config::ServerConfig};
pub use core::{
    codec::{decode, encode, NumeralCodec},
    history::{ConversionHistory, HistoryLog},
    service::ConversionService,
};
pub use domain::model::{ArabicValue, Conversion, Direction, RomanNumeral};
pub use utils::error::{ConvertError, Result};
