//! Plain-text rendering of view state

use std::fmt::Write;

use crate::api::{Recording, SearchResult};
use crate::capture::{CapturePhase, CaptureSession};
use crate::format;
use crate::i18n::{Locale, Messages};
use crate::router::Page;
use crate::views::{LoadState, LocationGroup, SearchState};

pub fn navigation(current: Page, messages: &Messages) -> String {
    let links: Vec<String> = Page::ALL
        .iter()
        .map(|&page| {
            let label = format!("{} {}", page.path(), page.title(messages));
            if page == current {
                format!("[{}]", label)
            } else {
                label
            }
        })
        .collect();

    format!("{} | {}", messages.app_name, links.join("  "))
}

pub fn record(session: &CaptureSession, messages: &Messages) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", messages.record_hint);

    match session.phase {
        CapturePhase::Recording => {
            let _ = writeln!(out, "{}", format::elapsed(session.elapsed_secs));
            let _ = writeln!(out, "{}", progress_bar(session.progress));
            let _ = writeln!(out, "{}", messages.recording);
        }
        CapturePhase::Processing => {
            let _ = writeln!(out, "{}", messages.processing);
        }
        CapturePhase::Idle => {
            let _ = writeln!(out, "{}", messages.record_start);
        }
    }

    if let Some(result) = &session.result {
        if result.is_failure() {
            let _ = writeln!(out, "! {}", result.text());
        } else {
            let _ = writeln!(out, "{}: {}", messages.transcription, result.text());
        }
    }

    let location = match session.location {
        Some(point) => format::coordinates(point.latitude, point.longitude),
        None if session.location_unavailable => messages.location_unavailable.to_string(),
        None => messages.location_pending.to_string(),
    };
    let _ = write!(out, "{}: {}", messages.location_label, location);

    out
}

fn progress_bar(progress: u8) -> String {
    let filled = (progress.min(100) / 5) as usize;
    format!("[{}{}] {}%", "#".repeat(filled), "-".repeat(20 - filled), progress)
}

fn city_label<'a>(city: Option<&'a str>, messages: &'a Messages) -> &'a str {
    city.filter(|c| !c.is_empty())
        .unwrap_or(messages.unknown_location)
}

fn recording_entry(recording: &Recording, messages: &Messages, locale: Locale) -> String {
    let mut out = format!(
        "{}  ({})\n  {}",
        format::timestamp(&recording.timestamp, locale),
        city_label(recording.city.as_deref(), messages),
        recording.text
    );

    if let Some((latitude, longitude)) = recording.coordinates() {
        let _ = write!(
            out,
            "\n  {}: {}",
            messages.location_label,
            format::coordinates(latitude, longitude)
        );
    }

    out
}

fn load_state<T>(
    state: &LoadState<T>,
    messages: &Messages,
    empty: &str,
    ready: impl FnOnce(&T) -> String,
) -> String {
    match state {
        LoadState::Loading => messages.loading.to_string(),
        LoadState::Failed(message) => format!("! {}", message),
        LoadState::Empty => format!("{}\n{}", empty, messages.empty_hint),
        LoadState::Ready(items) => ready(items),
    }
}

pub fn history(state: &LoadState<Vec<Recording>>, messages: &Messages, locale: Locale) -> String {
    load_state(state, messages, messages.history_empty, |recordings| {
        recordings
            .iter()
            .map(|r| recording_entry(r, messages, locale))
            .collect::<Vec<_>>()
            .join("\n\n")
    })
}

pub fn locations(
    state: &LoadState<Vec<LocationGroup>>,
    messages: &Messages,
    locale: Locale,
) -> String {
    load_state(state, messages, messages.locations_empty, |groups| {
        groups
            .iter()
            .map(|group| {
                let mut out = format!(
                    "== {} ({} {})",
                    group.city,
                    group.count(),
                    messages.records_suffix
                );
                for recording in &group.recordings {
                    let _ = write!(
                        out,
                        "\n  {}  {}",
                        format::timestamp(&recording.timestamp, locale),
                        recording.text
                    );
                }
                out
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    })
}

fn search_entry(result: &SearchResult, messages: &Messages, locale: Locale) -> String {
    format!(
        "{}  ({})  {}: {}\n  {}",
        format::timestamp(&result.timestamp, locale),
        city_label(result.city.as_deref(), messages),
        messages.similarity_label,
        format::similarity(result.similarity),
        result.text
    )
}

pub fn search(state: &SearchState, messages: &Messages, locale: Locale) -> String {
    match state {
        SearchState::Idle => messages.search_prompt.to_string(),
        SearchState::Searching => messages.searching.to_string(),
        SearchState::Failed(message) => format!("! {}", message),
        SearchState::Results(results) if results.is_empty() => {
            format!("{}\n{}", messages.search_empty, messages.search_empty_hint)
        }
        SearchState::Results(results) => {
            let entries: Vec<String> = results
                .iter()
                .map(|r| search_entry(r, messages, locale))
                .collect();
            format!("{}\n\n{}", messages.search_results, entries.join("\n\n"))
        }
    }
}
