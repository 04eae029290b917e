//! Tool descriptors advertised to remote callers.
//!
//! Each always-available profile kind gets its own `<kind>-profile` tool
//! with `limit` and `view` parameters; `cpu-profile` adds `duration`. The
//! single `pprof server` tool takes the kind as a parameter and returns
//! the whole profile document.

use crate::profile::ProfileKind;
use crate::utils::config::{
    DEFAULT_CPU_DURATION_SECS, DEFAULT_LIMIT, MAX_CPU_DURATION_SECS, MAX_LIMIT,
    MIN_CPU_DURATION_SECS, MIN_LIMIT, SERVER_NAME, SERVER_VERSION,
};
use crate::views::ViewMode;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Name of the single-tool entry point
pub const SIMPLE_TOOL_NAME: &str = "pprof server";

/// Suffix of the per-kind tool names
pub const PROFILE_TOOL_SUFFIX: &str = "-profile";

/// JSON type of a tool parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Number,
}

/// One tool parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolParam {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: ParamType,
    pub description: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<u64>,
    #[serde(default, rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub allowed: Vec<String>,
}

impl ToolParam {
    fn new(name: &str, param_type: ParamType, description: &str) -> Self {
        Self {
            name: name.to_string(),
            param_type,
            description: description.to_string(),
            required: false,
            default: None,
            minimum: None,
            maximum: None,
            allowed: Vec::new(),
        }
    }
}

/// Name, description and parameters of one tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub params: Vec<ToolParam>,
}

impl ToolDescriptor {
    pub fn param(&self, name: &str) -> Option<&ToolParam> {
        self.params.iter().find(|p| p.name == name)
    }
}

/// Everything a caller needs to discover the available tools
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerManifest {
    pub name: String,
    pub version: String,
    pub tools: Vec<ToolDescriptor>,
}

/// Tool name for a profile kind (`heap` → `heap-profile`)
pub fn tool_name(kind: ProfileKind) -> String {
    format!("{}{}", kind, PROFILE_TOOL_SUFFIX)
}

fn tool_description(kind: ProfileKind) -> &'static str {
    match kind {
        ProfileKind::Heap => "Output heap memory profile data",
        ProfileKind::Goroutine => "Output goroutine stack traces",
        ProfileKind::ThreadCreate => "Output thread creation profile data",
        ProfileKind::Block => "Output blocking operation profile data",
        ProfileKind::Allocs => "Output memory allocation sampling data",
        ProfileKind::Cpu => "Output CPU profile data",
    }
}

fn duration_param(description: &str) -> ToolParam {
    ToolParam {
        default: Some(json!(DEFAULT_CPU_DURATION_SECS)),
        minimum: Some(MIN_CPU_DURATION_SECS),
        maximum: Some(MAX_CPU_DURATION_SECS),
        ..ToolParam::new("duration", ParamType::Number, description)
    }
}

/// Descriptor of the `<kind>-profile` tool
pub fn profile_tool(kind: ProfileKind) -> ToolDescriptor {
    let mut params = vec![
        ToolParam {
            default: Some(json!(DEFAULT_LIMIT)),
            minimum: Some(MIN_LIMIT as u64),
            maximum: Some(MAX_LIMIT as u64),
            ..ToolParam::new(
                "limit",
                ParamType::Number,
                "Maximum number of locations to show in results",
            )
        },
        ToolParam {
            default: Some(json!(ViewMode::Flat.as_str())),
            allowed: [ViewMode::Flat, ViewMode::Cumulative, ViewMode::Graph]
                .iter()
                .map(|mode| mode.as_str().to_string())
                .collect(),
            ..ToolParam::new(
                "view",
                ParamType::String,
                "View mode for profile data (flat: direct values, cum: cumulative values including children, graph: call graph)",
            )
        },
    ];

    if kind.is_cpu() {
        params.push(duration_param("Duration of CPU profiling in seconds"));
    }

    ToolDescriptor {
        name: tool_name(kind),
        description: tool_description(kind).to_string(),
        params,
    }
}

/// Descriptor of the single `pprof server` tool
pub fn simple_tool() -> ToolDescriptor {
    ToolDescriptor {
        name: SIMPLE_TOOL_NAME.to_string(),
        description: "Output pprof data".to_string(),
        params: vec![
            ToolParam {
                required: true,
                allowed: ProfileKind::ALL.iter().map(|k| k.to_string()).collect(),
                ..ToolParam::new(
                    "profile",
                    ParamType::String,
                    "The type of profile to output (e.g., heap, goroutine, threadcreate, block, allocs, cpu)",
                )
            },
            duration_param("Duration in seconds(number) to collect the profile (only for CPU profile)"),
        ],
    }
}

/// All per-kind tools, in registration order
pub fn registry() -> Vec<ToolDescriptor> {
    ProfileKind::ALL.into_iter().map(profile_tool).collect()
}

/// Server name, version and every tool including the simple one
pub fn manifest() -> ServerManifest {
    let mut tools = registry();
    tools.push(simple_tool());
    ServerManifest {
        name: SERVER_NAME.to_string(),
        version: SERVER_VERSION.to_string(),
        tools,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_names() {
        let names: Vec<_> = registry().into_iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![
                "heap-profile",
                "goroutine-profile",
                "threadcreate-profile",
                "block-profile",
                "allocs-profile",
                "cpu-profile"
            ]
        );
    }

    #[test]
    fn test_only_cpu_tool_has_duration() {
        for tool in registry() {
            assert_eq!(tool.param("duration").is_some(), tool.name == "cpu-profile");
            assert!(tool.param("limit").is_some());
        }
    }

    #[test]
    fn test_limit_bounds() {
        let tool = profile_tool(ProfileKind::Heap);
        let limit = tool.param("limit").unwrap();
        assert_eq!(limit.minimum, Some(100));
        assert_eq!(limit.maximum, Some(10_000));
        assert_eq!(limit.default, Some(json!(100)));
    }

    #[test]
    fn test_simple_tool_serializes_enum() {
        let value = serde_json::to_value(simple_tool()).unwrap();
        assert_eq!(value["params"][0]["name"], "profile");
        assert_eq!(value["params"][0]["required"], true);
        assert_eq!(value["params"][0]["enum"].as_array().unwrap().len(), 6);
        assert_eq!(value["params"][1]["type"], "number");
    }

    #[test]
    fn test_manifest_lists_seven_tools() {
        let manifest = manifest();
        assert_eq!(manifest.name, "pprof server");
        assert_eq!(manifest.tools.len(), 7);
    }
}
