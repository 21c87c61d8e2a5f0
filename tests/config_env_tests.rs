// Environment overrides for configuration
//
// Kept in its own test binary with a single test, since it mutates the
// process environment that the other config tests read.

use anyhow::Result;
use memobread::config::{Config, API_URL_ENV};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_environment_wins_over_file_and_defaults() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("memobread.toml");
    fs::write(
        &path,
        r#"
[api]
base_url = "http://from-file:8000"

[capture]
max_progress = 60
"#,
    )?;

    std::env::set_var("MEMOBREAD_CAPTURE__MAX_PROGRESS", "42");
    let nested = Config::load(Some(path.to_str().unwrap()))?;
    assert_eq!(nested.capture.max_progress, 42);
    assert_eq!(nested.api.base_url, "http://from-file:8000");
    assert_eq!(nested.capture.tick_interval_ms, 1000, "Unset keys keep defaults");

    std::env::set_var("MEMOBREAD_API__BASE_URL", "http://nested:9");
    let nested_url = Config::load(Some(path.to_str().unwrap()))?;
    assert_eq!(nested_url.api.base_url, "http://nested:9");

    std::env::set_var(API_URL_ENV, "http://example:9");
    let cfg = Config::load(Some(path.to_str().unwrap()))?;
    assert_eq!(cfg.api.base_url, "http://example:9", "Short variable wins");
    assert_eq!(cfg.capture.max_progress, 42);

    std::env::remove_var(API_URL_ENV);
    std::env::remove_var("MEMOBREAD_API__BASE_URL");
    std::env::remove_var("MEMOBREAD_CAPTURE__MAX_PROGRESS");
    Ok(())
}
