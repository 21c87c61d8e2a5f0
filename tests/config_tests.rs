// Tests for configuration loading and display formatting

use anyhow::Result;
use chrono::{TimeZone, Utc};
use memobread::config::{Config, DEFAULT_API_URL};
use memobread::{format, Locale};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_defaults() -> Result<()> {
    let dir = TempDir::new()?;
    let empty = dir.path().join("empty.toml");
    fs::write(&empty, "")?;

    let cfg = Config::load(Some(empty.to_str().unwrap()))?;

    assert_eq!(cfg.api.base_url, DEFAULT_API_URL);
    assert_eq!(cfg.capture.max_progress, 100);
    assert_eq!(cfg.capture.tick_interval(), Duration::from_secs(1));
    assert_eq!(cfg.capture.latitude, None);
    assert_eq!(cfg.search.limit, None);
    assert_eq!(cfg.ui.locale, Locale::ZhCn);
    Ok(())
}

#[test]
fn test_file_overrides_defaults() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("memobread.toml");
    fs::write(
        &path,
        r#"
[capture]
max_progress = 60
latitude = 31.2304
longitude = 121.4737

[search]
limit = 5

[server]
port = 9000

[ui]
locale = "en"
"#,
    )?;

    let cfg = Config::load(Some(path.to_str().unwrap()))?;

    assert_eq!(cfg.capture.max_progress, 60);
    assert_eq!(cfg.capture.tick_interval_ms, 1000, "Unset keys keep defaults");
    assert_eq!(cfg.capture.latitude, Some(31.2304));
    assert_eq!(cfg.search.limit, Some(5));
    assert_eq!(cfg.server.port, 9000);
    assert_eq!(cfg.ui.locale, Locale::En);
    Ok(())
}

#[test]
fn test_elapsed_format() {
    assert_eq!(format::elapsed(0), "00:00");
    assert_eq!(format::elapsed(7), "00:07");
    assert_eq!(format::elapsed(83), "01:23");
    assert_eq!(format::elapsed(3600), "60:00");
}

#[test]
fn test_similarity_and_coordinates_format() {
    assert_eq!(format::similarity(0.876), "88%");
    assert_eq!(format::similarity(0.5), "50%");
    assert_eq!(format::coordinates(31.230416, 121.473701), "31.2304, 121.4737");
}

#[test]
fn test_timestamp_format_has_date_and_minute() {
    let at = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();

    let zh = format::timestamp(&at, Locale::ZhCn);
    assert!(zh.starts_with("2025年6月"), "{}", zh);
    assert!(zh.contains(':'));

    let en = format::timestamp(&at, Locale::En);
    assert!(en.starts_with("June"), "{}", en);
    assert!(en.contains("2025"));
}
