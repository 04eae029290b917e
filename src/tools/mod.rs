//! Request boundary: tool descriptors and tool call handling.
//!
//! This layer sits directly under a request/response transport. It turns
//! loose arguments into validated dispatcher requests and every outcome
//! into a single [`ToolResult`].

pub mod descriptors;
pub mod handlers;

pub use descriptors::{
    manifest, profile_tool, registry, simple_tool, tool_name, ServerManifest, ToolDescriptor,
    ToolParam, SIMPLE_TOOL_NAME,
};
pub use handlers::{
    call_tool, duration_argument, handle_profile_tool, handle_simple_tool, limit_argument,
    view_argument, Arguments, ToolResult,
};
