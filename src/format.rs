use chrono::{DateTime, Local, Utc};

use crate::i18n::Locale;

/// Elapsed recording time as `mm:ss`
pub fn elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Date and minute of a memo in the local time zone
pub fn timestamp(at: &DateTime<Utc>, locale: Locale) -> String {
    let local = at.with_timezone(&Local);
    match locale {
        Locale::ZhCn => local.format("%Y年%-m月%-d日 %H:%M").to_string(),
        Locale::En => local.format("%B %-d, %Y %H:%M").to_string(),
    }
}

pub fn coordinates(latitude: f64, longitude: f64) -> String {
    format!("{:.4}, {:.4}", latitude, longitude)
}

/// Relevance score as a rounded percentage
pub fn similarity(score: f64) -> String {
    format!("{}%", (score * 100.0).round() as i64)
}
