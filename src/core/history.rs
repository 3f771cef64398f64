use crate::domain::model::{ArabicValue, Conversion, Direction, RomanNumeral};
use crate::domain::ports::Storage;
use crate::utils::error::{ConvertError, Result};

pub const DEFAULT_HISTORY_LIMIT: usize = 10;
pub const MAX_HISTORY_LIMIT: usize = 100;

/// Bounded list of recent conversions, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionHistory {
    entries: Vec<Conversion>,
    limit: usize,
}

impl ConversionHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Entries are expected newest first; anything past `limit` is dropped.
    pub fn from_entries(mut entries: Vec<Conversion>, limit: usize) -> Self {
        let limit = limit.max(1);
        entries.truncate(limit);
        Self { entries, limit }
    }

    pub fn push(&mut self, conversion: Conversion) {
        self.entries.insert(0, conversion);
        self.entries.truncate(self.limit);
    }

    pub fn record(
        &mut self,
        arabic: ArabicValue,
        roman: RomanNumeral,
        direction: Direction,
    ) -> &Conversion {
        self.push(Conversion::new(arabic, roman, direction));
        &self.entries[0]
    }

    pub fn entries(&self) -> &[Conversion] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&Conversion> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for ConversionHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

/// Persists a [`ConversionHistory`] as a JSON array through a [`Storage`].
pub struct HistoryLog<S: Storage> {
    storage: S,
    path: String,
    limit: usize,
}

impl<S: Storage> HistoryLog<S> {
    pub fn new(storage: S, path: impl Into<String>, limit: usize) -> Self {
        Self {
            storage,
            path: path.into(),
            limit,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub async fn load(&self) -> Result<ConversionHistory> {
        let data = match self.storage.read_file(&self.path).await {
            Ok(data) => data,
            Err(ConvertError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No history at {}, starting empty", self.path);
                return Ok(ConversionHistory::new(self.limit));
            }
            Err(e) => return Err(e),
        };

        // 檔案損毀時從空紀錄重新開始
        match serde_json::from_slice::<Vec<Conversion>>(&data) {
            Ok(entries) => Ok(ConversionHistory::from_entries(entries, self.limit)),
            Err(e) => {
                tracing::warn!("⚠️ Ignoring unreadable history at {}: {}", self.path, e);
                Ok(ConversionHistory::new(self.limit))
            }
        }
    }

    pub async fn save(&self, history: &ConversionHistory) -> Result<()> {
        let data = serde_json::to_vec_pretty(history.entries())?;
        self.storage.write_file(&self.path, &data).await?;
        tracing::debug!("Saved {} history entries to {}", history.len(), self.path);
        Ok(())
    }

    /// Load, prepend one conversion, save.
    pub async fn append(
        &self,
        arabic: ArabicValue,
        roman: RomanNumeral,
        direction: Direction,
    ) -> Result<ConversionHistory> {
        let mut history = self.load().await?;
        history.record(arabic, roman, direction);
        self.save(&history).await?;
        Ok(history)
    }

    pub async fn clear(&self) -> Result<()> {
        self.storage.remove_file(&self.path).await?;
        tracing::info!("🧹 Cleared history at {}", self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::codec::NumeralCodec;

    fn entry(n: i64) -> Conversion {
        let roman = NumeralCodec::encode(n).unwrap();
        Conversion::new(roman.value(), roman, Direction::ArabicToRoman)
    }

    #[test]
    fn test_history_is_newest_first_and_bounded() {
        let mut history = ConversionHistory::new(3);
        for n in 1..=5 {
            history.push(entry(n));
        }

        let values: Vec<u16> = history.entries().iter().map(|c| c.arabic.get()).collect();
        assert_eq!(values, vec![5, 4, 3]);
        assert_eq!(history.latest().unwrap().roman.as_str(), "V");
    }

    #[test]
    fn test_default_limit_is_ten() {
        let mut history = ConversionHistory::default();
        for n in 1..=12 {
            history.push(entry(n));
        }
        assert_eq!(history.len(), 10);
        assert_eq!(history.limit(), DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn test_from_entries_truncates() {
        let entries: Vec<Conversion> = (1..=4).map(entry).collect();
        let history = ConversionHistory::from_entries(entries, 2);
        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].arabic.get(), 1);
    }

    #[test]
    fn test_clear() {
        let mut history = ConversionHistory::new(5);
        history.push(entry(7));
        history.clear();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }
}
