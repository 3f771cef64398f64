use crate::utils::error::{ConvertError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An Arabic integer inside the representable range `1..=3999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "i64")]
pub struct ArabicValue(u16);

impl ArabicValue {
    pub const MIN: u16 = 1;
    pub const MAX: u16 = 3999;

    pub fn new(value: i64) -> Result<Self> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(ConvertError::out_of_range(value.to_string()));
        }
        Ok(Self(value as u16))
    }

    /// NaN、無窮大與非整數一律視為超出範圍
    pub fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(ConvertError::out_of_range(value.to_string()));
        }
        if value < f64::from(Self::MIN) || value > f64::from(Self::MAX) {
            return Err(ConvertError::out_of_range(value.to_string()));
        }
        Ok(Self(value as u16))
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl FromStr for ArabicValue {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Self::new(value).map_err(|_| ConvertError::out_of_range(trimmed));
        }

        // "3.5"、"1e3"、"NaN" 走浮點路徑
        match trimmed.parse::<f64>() {
            Ok(value) => Self::from_f64(value).map_err(|_| ConvertError::out_of_range(trimmed)),
            Err(_) => Err(ConvertError::out_of_range(trimmed)),
        }
    }
}

impl TryFrom<i64> for ArabicValue {
    type Error = ConvertError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ArabicValue> for u16 {
    fn from(value: ArabicValue) -> Self {
        value.0
    }
}

impl fmt::Display for ArabicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A Roman numeral in canonical upper-case form, paired with the value it
/// denotes. Only produced by the codec, so the two always agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RomanNumeral {
    text: String,
    value: ArabicValue,
}

impl RomanNumeral {
    pub(crate) fn from_parts(text: String, value: ArabicValue) -> Self {
        Self { text, value }
    }

    /// Case-insensitive, whitespace-tolerant parse.
    pub fn parse(input: &str) -> Result<Self> {
        let value = crate::core::codec::NumeralCodec::decode(input)?;
        Ok(Self::from_parts(input.trim().to_ascii_uppercase(), value))
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> ArabicValue {
        self.value
    }
}

impl FromStr for RomanNumeral {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for RomanNumeral {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.text)
    }
}

impl Serialize for RomanNumeral {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for RomanNumeral {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    ArabicToRoman,
    RomanToArabic,
}

/// 一筆轉換紀錄
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredConversion")]
pub struct Conversion {
    pub id: String,
    pub arabic: ArabicValue,
    pub roman: RomanNumeral,
    pub direction: Direction,
    pub timestamp: DateTime<Utc>,
}

/// 檔案中的原始欄位，載入時再檢查兩邊數值一致
#[derive(Deserialize)]
struct StoredConversion {
    id: String,
    arabic: ArabicValue,
    roman: RomanNumeral,
    direction: Direction,
    timestamp: DateTime<Utc>,
}

impl TryFrom<StoredConversion> for Conversion {
    type Error = ConvertError;

    fn try_from(stored: StoredConversion) -> Result<Self> {
        if stored.roman.value() != stored.arabic {
            return Err(ConvertError::invalid_numeral(format!(
                "{} (recorded as {})",
                stored.roman, stored.arabic
            )));
        }

        Ok(Self {
            id: stored.id,
            arabic: stored.arabic,
            roman: stored.roman,
            direction: stored.direction,
            timestamp: stored.timestamp,
        })
    }
}

impl Conversion {
    pub fn new(arabic: ArabicValue, roman: RomanNumeral, direction: Direction) -> Self {
        Self::at(arabic, roman, direction, Utc::now())
    }

    pub fn at(
        arabic: ArabicValue,
        roman: RomanNumeral,
        direction: Direction,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: timestamp.timestamp_millis().to_string(),
            arabic,
            roman,
            direction,
            timestamp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RomanToArabic {
    pub roman: RomanNumeral,
    pub arabic: ArabicValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArabicToRoman {
    pub arabic: ArabicValue,
    pub roman: RomanNumeral,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoints {
    pub roman_to_arabic: &'static str,
    pub arabic_to_roman: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Welcome {
    pub message: &'static str,
    pub endpoints: Endpoints,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
