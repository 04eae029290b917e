//! SVG flamegraph generation using inferno.

use crate::aggregator::build_collapsed_stacks;
use crate::profile::{Profile, ProfileKind};
use crate::utils::error::FlamegraphError;
use log::info;

/// Flamegraph configuration
#[derive(Debug, Clone)]
pub struct FlamegraphConfig {
    pub title: String,
    pub width: usize,
    /// Unit label for frame weights; derived from the profile kind when unset
    pub count_name: Option<String>,
}

impl Default for FlamegraphConfig {
    fn default() -> Self {
        Self {
            title: "Profile Flamegraph".to_string(),
            width: 1200,
            count_name: None,
        }
    }
}

impl FlamegraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_count_name(mut self, count_name: impl Into<String>) -> Self {
        self.count_name = Some(count_name.into());
        self
    }
}

/// What slot 0 of each kind counts
pub fn default_count_name(kind: ProfileKind) -> &'static str {
    match kind {
        ProfileKind::Heap | ProfileKind::Allocs => "bytes",
        ProfileKind::Goroutine => "goroutines",
        ProfileKind::ThreadCreate => "threads",
        ProfileKind::Block => "contentions",
        ProfileKind::Cpu => "nanoseconds",
    }
}

/// Generate an SVG flamegraph from a profile's slot-0 values
///
/// # Errors
/// * `FlamegraphError::EmptyStacks` - no sample carries positive weight
/// * `FlamegraphError::GenerationFailed` - inferno rejected the input
pub fn generate_flamegraph(
    profile: &Profile,
    config: Option<&FlamegraphConfig>,
) -> Result<String, FlamegraphError> {
    let stacks = build_collapsed_stacks(&profile.samples);
    if stacks.is_empty() {
        return Err(FlamegraphError::EmptyStacks);
    }

    let config = config.cloned().unwrap_or_default();
    info!("Generating flamegraph with {} stacks", stacks.len());

    let lines: Vec<String> = stacks.iter().map(|stack| stack.to_line()).collect();

    let mut opts = inferno::flamegraph::Options::default();
    opts.title = config.title.clone();
    opts.count_name = config
        .count_name
        .clone()
        .unwrap_or_else(|| default_count_name(profile.kind).to_string());
    opts.image_width = Some(config.width);

    let mut svg_output = Vec::new();
    inferno::flamegraph::from_lines(&mut opts, lines.iter().map(|s| s.as_str()), &mut svg_output)
        .map_err(|e| FlamegraphError::GenerationFailed(e.to_string()))?;

    let svg = String::from_utf8(svg_output)?;
    info!("Flamegraph generated successfully ({} bytes)", svg.len());
    Ok(svg)
}
