//! Call command: run one tool call against a sampler.

use super::models::ProfileSource;
use super::render::open_sampler;
use crate::dispatch::Dispatcher;
use crate::tools::{call_tool, Arguments, ToolResult};
use anyhow::{Context, Result};

/// Parse tool arguments given as a JSON object string
pub fn parse_arguments(raw: Option<&str>) -> Result<Arguments> {
    let Some(raw) = raw else {
        return Ok(Arguments::new());
    };
    let value: serde_json::Value =
        serde_json::from_str(raw).context("Tool arguments must be valid JSON")?;
    match value {
        serde_json::Value::Object(map) => Ok(map),
        _ => anyhow::bail!("Tool arguments must be a JSON object"),
    }
}

/// Execute a tool call and return its result
pub fn execute_call(tool: &str, raw_args: Option<&str>, source: &ProfileSource) -> Result<ToolResult> {
    let args = parse_arguments(raw_args)?;
    let dispatcher = Dispatcher::new(open_sampler(source)?);
    Ok(call_tool(&dispatcher, tool, &args))
}
