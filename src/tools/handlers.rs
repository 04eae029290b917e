//! Tool call handling.
//!
//! Arguments arrive as a loose JSON object. Missing or malformed optional
//! arguments fall back to their defaults; out-of-range numbers are
//! clamped. Failures are logged here, once, and returned as an
//! error-flagged [`ToolResult`].

use super::descriptors::{PROFILE_TOOL_SUFFIX, SIMPLE_TOOL_NAME};
use crate::dispatch::{Dispatcher, ProfileRequest};
use crate::profile::ProfileKind;
use crate::sampler::Sampler;
use crate::utils::config::{
    default_cpu_duration, DEFAULT_LIMIT, MAX_CPU_DURATION_SECS, MAX_LIMIT, MIN_CPU_DURATION_SECS,
    MIN_LIMIT,
};
use crate::utils::error::ToolError;
use crate::views::ViewMode;
use log::{debug, error};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;

/// Tool call arguments
pub type Arguments = Map<String, Value>;

/// Single text payload returned to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResult {
    pub text: String,
    #[serde(default)]
    pub is_error: bool,
}

impl ToolResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    /// Log `err` and wrap its message as an error result
    pub fn error(err: &ToolError) -> Self {
        error!("{}", err);
        Self {
            text: err.to_string(),
            is_error: true,
        }
    }

    fn from_outcome(outcome: Result<String, ToolError>) -> Self {
        match outcome {
            Ok(text) => Self::text(text),
            Err(err) => Self::error(&err),
        }
    }
}

/// `limit` argument, clamped to the tool range; default when unusable
pub fn limit_argument(args: &Arguments) -> usize {
    match args.get("limit").and_then(Value::as_f64) {
        Some(limit) if limit.is_finite() && limit >= 1.0 => {
            (limit as usize).clamp(MIN_LIMIT, MAX_LIMIT)
        }
        _ => DEFAULT_LIMIT,
    }
}

/// `view` argument; unknown names mean `flat`
pub fn view_argument(args: &Arguments) -> ViewMode {
    args.get("view")
        .and_then(Value::as_str)
        .map(ViewMode::from_name)
        .unwrap_or_default()
}

/// `duration` argument in whole seconds, clamped to the CPU window range
pub fn duration_argument(args: &Arguments) -> Duration {
    match args.get("duration").and_then(Value::as_f64) {
        Some(secs) if secs.is_finite() => Duration::from_secs(
            (secs as u64).clamp(MIN_CPU_DURATION_SECS, MAX_CPU_DURATION_SECS),
        ),
        _ => default_cpu_duration(),
    }
}

/// Handle a call to the `<kind>-profile` tool
pub fn handle_profile_tool<S: Sampler>(
    dispatcher: &Dispatcher<S>,
    kind: ProfileKind,
    args: &Arguments,
) -> ToolResult {
    let mut request = ProfileRequest::new(kind.as_str())
        .with_view(view_argument(args))
        .with_limit(limit_argument(args));
    if kind.is_cpu() {
        request = request.with_duration(duration_argument(args));
    }

    debug!("Tool call {:?}", request);

    ToolResult::from_outcome(dispatcher.render(&request).map_err(ToolError::from))
}

/// Handle a call to the single `pprof server` tool
///
/// Returns the full profile document; there is no limit.
pub fn handle_simple_tool<S: Sampler>(dispatcher: &Dispatcher<S>, args: &Arguments) -> ToolResult {
    let outcome = args
        .get("profile")
        .and_then(Value::as_str)
        .ok_or(ToolError::MissingProfile)
        .and_then(|profile| {
            dispatcher
                .export(profile, duration_argument(args))
                .map_err(ToolError::from)
        });

    ToolResult::from_outcome(outcome)
}

/// Route a tool call by name
pub fn call_tool<S: Sampler>(dispatcher: &Dispatcher<S>, name: &str, args: &Arguments) -> ToolResult {
    if name == SIMPLE_TOOL_NAME {
        return handle_simple_tool(dispatcher, args);
    }

    let kind = name
        .strip_suffix(PROFILE_TOOL_SUFFIX)
        .and_then(|kind| kind.parse::<ProfileKind>().ok());

    match kind {
        Some(kind) => handle_profile_tool(dispatcher, kind, args),
        None => ToolResult::error(&ToolError::UnknownTool(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> Arguments {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_limit_defaults_and_clamps() {
        assert_eq!(limit_argument(&args(json!({}))), 100);
        assert_eq!(limit_argument(&args(json!({"limit": "many"}))), 100);
        assert_eq!(limit_argument(&args(json!({"limit": 5}))), 100);
        assert_eq!(limit_argument(&args(json!({"limit": 250.7}))), 250);
        assert_eq!(limit_argument(&args(json!({"limit": 1_000_000}))), 10_000);
        assert_eq!(limit_argument(&args(json!({"limit": -3}))), 100);
    }

    #[test]
    fn test_view_argument() {
        assert_eq!(view_argument(&args(json!({"view": "graph"}))), ViewMode::Graph);
        assert_eq!(view_argument(&args(json!({"view": "cum"}))), ViewMode::Cumulative);
        assert_eq!(view_argument(&args(json!({"view": 3}))), ViewMode::Flat);
        assert_eq!(view_argument(&args(json!({}))), ViewMode::Flat);
    }

    #[test]
    fn test_duration_defaults_and_clamps() {
        assert_eq!(duration_argument(&args(json!({}))), Duration::from_secs(10));
        assert_eq!(duration_argument(&args(json!({"duration": "ten"}))), Duration::from_secs(10));
        assert_eq!(duration_argument(&args(json!({"duration": 0}))), Duration::from_secs(1));
        assert_eq!(duration_argument(&args(json!({"duration": 3.9}))), Duration::from_secs(3));
        assert_eq!(duration_argument(&args(json!({"duration": 600}))), Duration::from_secs(60));
    }

    #[test]
    fn test_error_result_carries_message() {
        let result = ToolResult::error(&ToolError::MissingProfile);
        assert!(result.is_error);
        assert_eq!(result.text, "profile argument is required and must be a string");
    }
}
