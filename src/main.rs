//! pprof-agent CLI
//!
//! Renders sampled runtime profiles as text reports and exposes
//! the per-kind profile tools from the command line.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;
use std::time::Duration;

use pprof_agent::commands::{
    display_tools, display_version, execute_call, execute_flamegraph, execute_render,
    inspect_profile_file, validate_args, validate_source, FlamegraphArgs, ProfileSource,
    RenderArgs,
};
use pprof_agent::utils::config::{DEFAULT_CPU_DURATION_SECS, DEFAULT_LIMIT};
use pprof_agent::views::ViewMode;

/// pprof-agent - profile aggregation and view rendering
#[derive(Parser, Debug)]
#[command(name = "pprof-agent")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Where to read profiles from. Exactly one must be given.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct SourceOpts {
    /// Directory holding <kind>.json snapshots
    #[arg(long, env = "PPROF_AGENT_SNAPSHOTS")]
    snapshots: Option<PathBuf>,

    /// Base URL of an HTTP profile endpoint
    #[arg(long, env = "PPROF_AGENT_URL")]
    url: Option<String>,

    /// A single profile JSON document
    #[arg(long)]
    file: Option<PathBuf>,
}

impl SourceOpts {
    fn into_source(self) -> Result<ProfileSource> {
        match (self.snapshots, self.url, self.file) {
            (Some(dir), _, _) => Ok(ProfileSource::Snapshots(dir)),
            (_, Some(url), _) => Ok(ProfileSource::Url(url)),
            (_, _, Some(file)) => Ok(ProfileSource::File(file)),
            _ => anyhow::bail!("One of --snapshots, --url or --file is required"),
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a profile view
    Render {
        /// Profile kind (heap, goroutine, threadcreate, block, allocs, cpu)
        profile: String,

        /// View mode: flat, cum, graph or inclusive
        #[arg(long, default_value = "flat")]
        view: String,

        /// Number of top entries to show
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,

        /// CPU sampling window in seconds
        #[arg(short, long, default_value_t = DEFAULT_CPU_DURATION_SECS)]
        duration: u64,

        #[command(flatten)]
        source: SourceOpts,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Draw a flamegraph SVG from a profile JSON file
    Flamegraph {
        /// Path to profile JSON file
        #[arg(short, long)]
        file: PathBuf,

        /// Output path for the SVG
        #[arg(short, long, default_value = "flamegraph.svg")]
        output: PathBuf,

        /// Flamegraph title
        #[arg(long)]
        title: Option<String>,

        /// Flamegraph width in pixels
        #[arg(long, default_value = "1200")]
        width: usize,
    },

    /// Summarize a profile JSON file
    Inspect {
        /// Path to profile JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Print the tool manifest
    Tools,

    /// Invoke a tool by name
    Call {
        /// Tool name, e.g. heap-profile or "pprof server"
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(short, long)]
        args: Option<String>,

        #[command(flatten)]
        source: SourceOpts,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Render {
            profile,
            view,
            limit,
            duration,
            source,
            output,
        } => {
            let args = RenderArgs {
                profile,
                view: ViewMode::from_name(&view),
                limit,
                duration: Duration::from_secs(duration),
                source: source.into_source()?,
                output,
            };

            // Validate args first
            validate_args(&args)?;

            execute_render(args)?;
        }

        Commands::Flamegraph {
            file,
            output,
            title,
            width,
        } => {
            execute_flamegraph(FlamegraphArgs {
                input: file,
                output,
                title,
                width,
            })?;
        }

        Commands::Inspect { file } => {
            inspect_profile_file(file)?;
        }

        Commands::Tools => {
            display_tools()?;
        }

        Commands::Call { tool, args, source } => {
            let source = source.into_source()?;
            validate_source(&source)?;

            let result = execute_call(&tool, args.as_deref(), &source)?;
            println!("{}", result.text);
            if result.is_error {
                std::process::exit(1);
            }
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
