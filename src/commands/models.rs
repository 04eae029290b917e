use crate::views::ViewMode;
use std::path::PathBuf;
use std::time::Duration;

use crate::utils::config::{default_cpu_duration, DEFAULT_LIMIT};

/// Where profile data comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSource {
    /// Directory of `<kind>.json` snapshot files
    Snapshots(PathBuf),

    /// HTTP profile endpoint base URL
    Url(String),

    /// A single profile document on disk
    File(PathBuf),
}

/// Arguments for the render command
#[derive(Debug, Clone)]
pub struct RenderArgs {
    /// Profile kind name
    pub profile: String,

    pub view: ViewMode,

    /// Number of entries to show
    pub limit: usize,

    /// CPU sampling window
    pub duration: Duration,

    pub source: ProfileSource,

    /// Write the report here instead of stdout
    pub output: Option<PathBuf>,
}

impl Default for RenderArgs {
    fn default() -> Self {
        Self {
            profile: "heap".to_string(),
            view: ViewMode::Flat,
            limit: DEFAULT_LIMIT,
            duration: default_cpu_duration(),
            source: ProfileSource::Snapshots(PathBuf::from("profiles")),
            output: None,
        }
    }
}

/// Arguments for the flamegraph command
#[derive(Debug, Clone)]
pub struct FlamegraphArgs {
    /// Profile document to draw
    pub input: PathBuf,

    /// Output path for the SVG
    pub output: PathBuf,

    pub title: Option<String>,

    /// Width in pixels
    pub width: usize,
}
