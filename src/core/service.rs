//! Query-level adapter shared by the HTTP router, the Lambda handler and the
//! CLI. Takes raw, possibly missing parameters and returns response payloads.

use crate::core::codec::NumeralCodec;
use crate::domain::model::{
    ArabicToRoman, ArabicValue, Endpoints, RomanNumeral, RomanToArabic, Welcome,
};
use crate::utils::error::{ConvertError, Result};

pub const ROMAN_PARAM: &str = "roman";
pub const ARABIC_PARAM: &str = "arabic";

#[derive(Debug, Clone, Copy, Default)]
pub struct ConversionService;

impl ConversionService {
    pub fn roman_to_arabic(roman: Option<&str>) -> Result<RomanToArabic> {
        let raw = required(ROMAN_PARAM, roman)?;
        let roman = RomanNumeral::parse(raw)?;
        let arabic = roman.value();

        tracing::debug!("🔢 {} → {}", roman, arabic);
        Ok(RomanToArabic { roman, arabic })
    }

    pub fn arabic_to_roman(arabic: Option<&str>) -> Result<ArabicToRoman> {
        let raw = required(ARABIC_PARAM, arabic)?;
        let arabic: ArabicValue = raw.parse()?;
        let roman = NumeralCodec::encode_value(arabic);

        tracing::debug!("🔢 {} → {}", arabic, roman);
        Ok(ArabicToRoman { arabic, roman })
    }

    pub fn welcome() -> Welcome {
        Welcome {
            message: "Roman ↔ Arabic numeral conversion API",
            endpoints: Endpoints {
                roman_to_arabic: "/r2a?roman=MMXXIV",
                arabic_to_roman: "/a2r?arabic=2024",
            },
        }
    }
}

fn required<'a>(name: &str, value: Option<&'a str>) -> Result<&'a str> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConvertError::missing_parameter(name)),
    }
}
