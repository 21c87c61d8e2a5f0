//! In-app navigation
//!
//! Maps paths to pages and keeps a history stack. Navigation never leaves
//! the application; only hrefs that start with `/` are handled.

use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::i18n::Messages;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Record,
    History,
    Locations,
    Search,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Record, Page::History, Page::Locations, Page::Search];

    pub fn path(self) -> &'static str {
        match self {
            Page::Record => "/record",
            Page::History => "/history",
            Page::Locations => "/locations",
            Page::Search => "/search",
        }
    }

    pub fn from_segment(segment: &str) -> Option<Page> {
        match segment {
            "record" => Some(Page::Record),
            "history" => Some(Page::History),
            "locations" => Some(Page::Locations),
            "search" => Some(Page::Search),
            _ => None,
        }
    }

    pub fn title(self, messages: &Messages) -> &'static str {
        match self {
            Page::Record => messages.record_title,
            Page::History => messages.history_title,
            Page::Locations => messages.locations_title,
            Page::Search => messages.search_title,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Current page plus the stack of visited paths
#[derive(Debug, Clone)]
pub struct Router {
    current: Page,
    history: Vec<String>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self::with_initial_path(Page::default().path())
    }

    pub fn with_initial_path(path: &str) -> Self {
        Self {
            current: Self::resolve(path),
            history: vec![path.to_string()],
        }
    }

    /// Page for a path: its first segment, falling back to the record page
    pub fn resolve(path: &str) -> Page {
        let path = path.split(['?', '#']).next().unwrap_or_default();

        path.trim_start_matches('/')
            .split('/')
            .next()
            .and_then(Page::from_segment)
            .unwrap_or_default()
    }

    pub fn current(&self) -> Page {
        self.current
    }

    /// Visited paths, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Handle a link target. Returns `None` for anything that is not an
    /// in-app path, leaving the router untouched.
    pub fn intercept(&mut self, href: &str) -> Option<Page> {
        if !href.starts_with('/') {
            return None;
        }
        Some(self.navigate(href))
    }

    /// Switch pages and record the path
    pub fn navigate(&mut self, path: &str) -> Page {
        self.current = Self::resolve(path);
        self.history.push(path.to_string());
        debug!("Navigated to {} ({})", path, self.current);
        self.current
    }

    /// Return to the previous path, if there is one
    pub fn back(&mut self) -> Option<Page> {
        if self.history.len() < 2 {
            return None;
        }

        self.history.pop();
        let previous = self.history.last()?;
        self.current = Self::resolve(previous);
        Some(self.current)
    }
}
