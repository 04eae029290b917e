use crate::output::read_profile;
use crate::tools::manifest;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Print a summary of a profile document
pub fn inspect_profile_file(file_path: PathBuf) -> Result<()> {
    println!("Inspecting profile: {}", file_path.display());

    let profile = read_profile(&file_path)?;

    println!("✓ Valid profile JSON");
    println!("  Kind: {}", profile.kind);
    match profile.collected_at {
        Some(at) => println!("  Collected: {}", at.to_rfc3339()),
        None => println!("  Collected: unknown"),
    }
    if let Some(nanos) = profile.duration_nanos {
        println!("  Duration: {}", crate::format::format_duration(nanos));
    }
    println!("  Samples: {}", profile.samples.len());
    for (slot, value_type) in profile.sample_types.iter().enumerate() {
        println!("  Slot {}: {} ({})", slot, value_type.name, value_type.unit);
    }

    Ok(())
}

/// Print the tool manifest as JSON
pub fn display_tools() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&manifest())?);
    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("pprof-agent v{}", env!("CARGO_PKG_VERSION"));
    println!("Profile Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Aggregates sampled runtime profiles into flat, cumulative and call-graph reports.");
}
