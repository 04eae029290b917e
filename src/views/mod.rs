//! Report views over a parsed profile.
//!
//! Three report shapes are available, plus an inclusive variant:
//! - `flat`: top locations by innermost-frame values
//! - `cum`: same numbers as `flat`, cumulative title
//! - `graph`: caller → callee graph
//! - `inclusive`: every location on a stack receives the sample's values
//!
//! Rendering is a pure function of the profile, the view and the limit.

pub mod flat;
pub mod graph;
pub mod top;

pub use flat::{cumulative_view, flat_view, format_results, inclusive_view};
pub use graph::{format_graph, graph_view};
pub use top::{select_top, top_entries, ReportEntry};

use crate::profile::{Profile, ProfileKind};
use crate::utils::config::DEFAULT_LIMIT;
use log::debug;
use std::fmt;

/// Report shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Flat,
    Cumulative,
    Graph,
    Inclusive,
}

impl ViewMode {
    /// Parse a view name; anything unrecognized means `flat`
    pub fn from_name(name: &str) -> Self {
        match name {
            "cum" => ViewMode::Cumulative,
            "graph" => ViewMode::Graph,
            "inclusive" => ViewMode::Inclusive,
            _ => ViewMode::Flat,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Flat => "flat",
            ViewMode::Cumulative => "cum",
            ViewMode::Graph => "graph",
            ViewMode::Inclusive => "inclusive",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// View mode plus result limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSelection {
    pub mode: ViewMode,
    pub limit: usize,
}

impl ViewSelection {
    /// A limit of 0 is not usable and falls back to the default
    pub fn new(mode: ViewMode, limit: usize) -> Self {
        let limit = if limit == 0 { DEFAULT_LIMIT } else { limit };
        Self { mode, limit }
    }
}

impl Default for ViewSelection {
    fn default() -> Self {
        Self::new(ViewMode::Flat, DEFAULT_LIMIT)
    }
}

/// Render `profile` using its own kind for value formatting
pub fn render(profile: &Profile, selection: ViewSelection) -> String {
    render_as(profile, profile.kind, selection)
}

/// Render `profile`, formatting values as `kind`
pub fn render_as(profile: &Profile, kind: ProfileKind, selection: ViewSelection) -> String {
    debug!(
        "Rendering {} view of {} samples (limit {})",
        selection.mode,
        profile.samples.len(),
        selection.limit
    );

    match selection.mode {
        ViewMode::Flat => flat_view(profile, selection.limit, kind),
        ViewMode::Cumulative => cumulative_view(profile, selection.limit, kind),
        ViewMode::Graph => graph_view(profile, selection.limit, kind),
        ViewMode::Inclusive => inclusive_view(profile, selection.limit, kind),
    }
}
