//! Bidirectional Roman ↔ Arabic conversion over `1..=3999`.

use crate::domain::model::{ArabicValue, RomanNumeral};
use crate::utils::error::{ConvertError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Greedy encoding table, descending. Includes the six subtractive pairs.
pub const SYMBOL_TABLE: [(u16, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

static CANONICAL_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^M{0,3}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$")
        .expect("canonical roman grammar must compile")
});

fn symbol_value(symbol: char) -> Option<u16> {
    match symbol {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Stateless encoder/decoder. All methods are pure.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumeralCodec;

impl NumeralCodec {
    /// True when `input` (already upper-case, no surrounding whitespace) is in
    /// canonical subtractive form. The empty string is not canonical.
    pub fn is_canonical(input: &str) -> bool {
        !input.is_empty() && CANONICAL_GRAMMAR.is_match(input)
    }

    pub fn decode(input: &str) -> Result<ArabicValue> {
        let normalized = input.trim().to_ascii_uppercase();
        if !Self::is_canonical(&normalized) {
            tracing::debug!(input, "rejected non-canonical roman numeral");
            return Err(ConvertError::invalid_numeral(input));
        }

        let values = normalized
            .chars()
            .map(symbol_value)
            .collect::<Option<Vec<u16>>>()
            .ok_or_else(|| ConvertError::invalid_numeral(input))?;

        let mut total: i64 = 0;
        for (index, &current) in values.iter().enumerate() {
            match values.get(index + 1) {
                Some(&next) if current < next => total -= i64::from(current),
                _ => total += i64::from(current),
            }
        }

        // 文法已限制範圍，這裡再確認一次
        ArabicValue::new(total).map_err(|_| ConvertError::invalid_numeral(input))
    }

    pub fn encode(arabic: i64) -> Result<RomanNumeral> {
        Ok(Self::encode_value(ArabicValue::new(arabic)?))
    }

    pub fn encode_value(arabic: ArabicValue) -> RomanNumeral {
        let mut remaining = arabic.get();
        let mut text = String::new();

        for &(value, symbol) in SYMBOL_TABLE.iter() {
            while remaining >= value {
                text.push_str(symbol);
                remaining -= value;
            }
        }

        RomanNumeral::from_parts(text, arabic)
    }
}

pub fn decode(input: &str) -> Result<ArabicValue> {
    NumeralCodec::decode(input)
}

pub fn encode(arabic: i64) -> Result<RomanNumeral> {
    NumeralCodec::encode(arabic)
}
