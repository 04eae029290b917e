//! Render command implementation.
//!
//! The render command:
//! 1. Validates the arguments
//! 2. Acquires the profile from the chosen source
//! 3. Renders the requested view
//! 4. Prints the report or writes it to a file

use super::models::{ProfileSource, RenderArgs};
use crate::dispatch::{render_raw, Dispatcher, ProfileRequest};
use crate::output::write_report;
use crate::sampler::{HttpSampler, Sampler, SnapshotDirSampler};
use crate::utils::config::{MAX_CPU_DURATION_SECS, MIN_CPU_DURATION_SECS};
use crate::views::ViewSelection;
use anyhow::{Context, Result};
use log::info;
use std::time::Instant;

/// Execute the render command
///
/// # Errors
/// * Unknown profile kind or kind missing from the source
/// * Sampler or endpoint failures
/// * Undecodable profile data
/// * Report write failures
pub fn execute_render(args: RenderArgs) -> Result<()> {
    let start_time = Instant::now();

    let text = match &args.source {
        ProfileSource::File(path) => {
            info!("Reading {} profile from {}", args.profile, path.display());
            let raw = std::fs::read(path)
                .with_context(|| format!("Failed to read profile file {}", path.display()))?;
            render_raw(&args.profile, &raw, ViewSelection::new(args.view, args.limit))?
        }
        source => {
            let dispatcher = Dispatcher::new(open_sampler(source)?);
            let request = ProfileRequest::new(args.profile.as_str())
                .with_view(args.view)
                .with_limit(args.limit)
                .with_duration(args.duration);
            dispatcher.render(&request)?
        }
    };

    match &args.output {
        Some(path) => {
            write_report(&text, path).context("Failed to write report")?;
            info!("✓ Report written to: {}", path.display());
        }
        None => print!("{}", text),
    }

    info!("Render completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(())
}

/// Build the sampler for a snapshot directory or HTTP endpoint
pub fn open_sampler(source: &ProfileSource) -> Result<Box<dyn Sampler>> {
    match source {
        ProfileSource::Snapshots(dir) => Ok(Box::new(SnapshotDirSampler::new(dir.clone()))),
        ProfileSource::Url(url) => Ok(Box::new(
            HttpSampler::new(url.as_str()).context("Failed to create HTTP client")?,
        )),
        ProfileSource::File(path) => anyhow::bail!(
            "{} is a single profile document, not a sampler",
            path.display()
        ),
    }
}

/// Validate render arguments
///
/// # Returns
/// Ok if arguments are valid, Err with message if not
pub fn validate_args(args: &RenderArgs) -> Result<()> {
    if args.profile.is_empty() {
        anyhow::bail!("Profile kind cannot be empty");
    }

    let secs = args.duration.as_secs();
    if !(MIN_CPU_DURATION_SECS..=MAX_CPU_DURATION_SECS).contains(&secs) {
        anyhow::bail!(
            "duration must be between {} and {} seconds",
            MIN_CPU_DURATION_SECS,
            MAX_CPU_DURATION_SECS
        );
    }

    validate_source(&args.source)
}

/// Validate a profile source
pub fn validate_source(source: &ProfileSource) -> Result<()> {
    match source {
        ProfileSource::Url(url) => {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("Profile URL must start with http:// or https://");
            }
        }
        ProfileSource::Snapshots(dir) => {
            if !dir.is_dir() {
                anyhow::bail!("Snapshot directory {} does not exist", dir.display());
            }
        }
        ProfileSource::File(path) => {
            if !path.is_file() {
                anyhow::bail!("Profile file {} does not exist", path.display());
            }
        }
    }
    Ok(())
}
