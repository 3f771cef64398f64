use anyhow::Result;
use roman_arabic::core::Storage;
use roman_arabic::{encode, Direction, HistoryLog, LocalStorage};
use tempfile::TempDir;

fn log_in(dir: &TempDir, limit: usize) -> HistoryLog<LocalStorage> {
    let base = dir.path().to_str().unwrap().to_string();
    HistoryLog::new(LocalStorage::new(base), "nested/history.json", limit)
}

#[tokio::test]
async fn test_history_persists_newest_first() -> Result<()> {
    let dir = TempDir::new()?;
    let log = log_in(&dir, 3);

    assert!(log.load().await?.is_empty());

    for n in [1, 2024, 444, 9] {
        let roman = encode(n)?;
        log.append(roman.value(), roman, Direction::ArabicToRoman).await?;
    }

    let history = log.load().await?;
    let values: Vec<u16> = history.entries().iter().map(|c| c.arabic.get()).collect();
    assert_eq!(values, vec![9, 444, 2024]);
    assert_eq!(history.latest().unwrap().roman.as_str(), "IX");
    assert!(dir.path().join("nested/history.json").exists());

    Ok(())
}

#[tokio::test]
async fn test_smaller_limit_truncates_on_load() -> Result<()> {
    let dir = TempDir::new()?;

    for n in 1..=5 {
        let roman = encode(n)?;
        log_in(&dir, 10)
            .append(roman.value(), roman, Direction::RomanToArabic)
            .await?;
    }

    let history = log_in(&dir, 2).load().await?;
    assert_eq!(history.len(), 2);
    assert_eq!(history.entries()[0].arabic.get(), 5);
    assert_eq!(history.entries()[0].direction, Direction::RomanToArabic);

    Ok(())
}

#[tokio::test]
async fn test_clear_removes_file() -> Result<()> {
    let dir = TempDir::new()?;
    let log = log_in(&dir, 10);

    let roman = encode(3999)?;
    log.append(roman.value(), roman, Direction::ArabicToRoman).await?;
    log.clear().await?;

    assert!(log.load().await?.is_empty());
    assert!(!dir.path().join("nested/history.json").exists());

    // 已經不存在也不算錯誤
    log.clear().await?;
    Ok(())
}

#[tokio::test]
async fn test_corrupt_history_starts_empty() -> Result<()> {
    let dir = TempDir::new()?;
    let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());
    storage
        .write_file("nested/history.json", b"{ not json")
        .await?;

    let log = log_in(&dir, 10);
    assert!(log.load().await?.is_empty());

    let roman = encode(12)?;
    let history = log.append(roman.value(), roman, Direction::ArabicToRoman).await?;
    assert_eq!(history.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_invalid_numeral_in_file_is_treated_as_corrupt() -> Result<()> {
    let dir = TempDir::new()?;
    let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());
    let tampered = br#"[{"id":"1","arabic":4,"roman":"IIII","direction":"roman_to_arabic","timestamp":"2024-01-01T00:00:00Z"}]"#;
    storage.write_file("nested/history.json", tampered).await?;

    assert!(log_in(&dir, 10).load().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_mismatched_pair_in_file_is_treated_as_corrupt() -> Result<()> {
    let dir = TempDir::new()?;
    let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());
    let tampered = br#"[{"id":"1","arabic":5,"roman":"IX","direction":"roman_to_arabic","timestamp":"2024-01-01T00:00:00Z"}]"#;
    storage.write_file("nested/history.json", tampered).await?;

    assert!(log_in(&dir, 10).load().await?.is_empty());
    Ok(())
}
