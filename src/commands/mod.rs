//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod call;
pub mod flamegraph;
pub mod models;
pub mod render;
pub mod utils;

// Re-export main command functions
pub use call::{execute_call, parse_arguments};
pub use flamegraph::execute_flamegraph;
pub use models::{FlamegraphArgs, ProfileSource, RenderArgs};
pub use render::{execute_render, open_sampler, validate_args, validate_source};
pub use utils::{display_tools, display_version, inspect_profile_file};
