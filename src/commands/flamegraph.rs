//! Flamegraph command implementation.

use super::models::FlamegraphArgs;
use crate::flamegraph::{generate_flamegraph, FlamegraphConfig};
use crate::output::{read_profile, write_svg};
use anyhow::{Context, Result};
use log::info;

/// Read a profile document and write its flamegraph
pub fn execute_flamegraph(args: FlamegraphArgs) -> Result<()> {
    let profile = read_profile(&args.input).context("Failed to read profile")?;

    let mut config = FlamegraphConfig::new().with_width(args.width);
    if let Some(title) = args.title {
        config = config.with_title(title);
    }

    let svg = generate_flamegraph(&profile, Some(&config))
        .context("Failed to generate flamegraph")?;
    write_svg(&svg, &args.output).context("Failed to write flamegraph SVG")?;

    info!("✓ Flamegraph written to: {}", args.output.display());
    Ok(())
}
