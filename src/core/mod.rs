pub mod codec;
pub mod history;
pub mod service;

pub use crate::domain::model::{ArabicValue, Conversion, Direction, RomanNumeral};
pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
