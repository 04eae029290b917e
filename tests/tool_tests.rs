use pprof_agent::dispatch::Dispatcher;
use pprof_agent::profile::{Frame, Profile, ProfileKind, Sample};
use pprof_agent::sampler::MemorySampler;
use pprof_agent::tools::{call_tool, manifest, Arguments, SIMPLE_TOOL_NAME};
use pretty_assertions::assert_eq;
use serde_json::json;

fn dispatcher() -> Dispatcher<MemorySampler> {
    let stack = vec![Frame::new("A", 1), Frame::new("B", 2)];
    Dispatcher::new(MemorySampler::new().without_wait().with_profile(Profile::new(
        ProfileKind::Goroutine,
        vec![Sample::new(stack.clone(), vec![10]), Sample::new(stack, vec![5])],
    )))
}

fn args(value: serde_json::Value) -> Arguments {
    match value {
        serde_json::Value::Object(map) => map,
        _ => panic!("arguments must be an object"),
    }
}

#[test]
fn test_profile_tool_defaults() {
    let result = call_tool(&dispatcher(), "goroutine-profile", &Arguments::new());

    assert!(!result.is_error);
    assert_eq!(
        result.text,
        "Flat view (direct values) (showing top 100 locations)\n\nA:1: 15B\n"
    );
}

#[test]
fn test_profile_tool_limit_is_clamped() {
    let d = dispatcher();

    let low = call_tool(&d, "goroutine-profile", &args(json!({"limit": 5})));
    assert!(low.text.contains("(showing top 100 locations)"));

    let high = call_tool(&d, "goroutine-profile", &args(json!({"limit": 50000})));
    assert!(high.text.contains("(showing top 10000 locations)"));

    let bogus = call_tool(&d, "goroutine-profile", &args(json!({"limit": "lots"})));
    assert!(bogus.text.contains("(showing top 100 locations)"));
}

#[test]
fn test_profile_tool_view_argument() {
    let result = call_tool(&dispatcher(), "goroutine-profile", &args(json!({"view": "graph"})));
    assert!(result.text.starts_with("Call graph view (top 100 nodes)\n"));
    assert!(result.text.contains("Node: A:1\nValues: 15B\nChildren:\n  B:2: 15B\n"));
}

#[test]
fn test_unregistered_profile_is_error_result() {
    let result = call_tool(&dispatcher(), "heap-profile", &Arguments::new());
    assert!(result.is_error);
    assert_eq!(result.text, "profile error (heap): profile not found");
}

#[test]
fn test_unknown_tool() {
    let result = call_tool(&dispatcher(), "mutex-profile", &Arguments::new());
    assert!(result.is_error);
    assert_eq!(result.text, "unknown tool: mutex-profile");
}

#[test]
fn test_simple_tool_requires_profile() {
    let result = call_tool(&dispatcher(), SIMPLE_TOOL_NAME, &args(json!({"profile": 3})));
    assert!(result.is_error);
    assert_eq!(result.text, "profile argument is required and must be a string");
}

#[test]
fn test_simple_tool_returns_profile_json() {
    let result = call_tool(
        &dispatcher(),
        SIMPLE_TOOL_NAME,
        &args(json!({"profile": "goroutine"})),
    );

    assert!(!result.is_error);
    let value: serde_json::Value = serde_json::from_str(&result.text).unwrap();
    assert_eq!(value["kind"], "goroutine");
    assert_eq!(value["samples"][0]["values"], json!([10]));
}

#[test]
fn test_manifest_lists_every_tool() {
    let manifest = manifest();
    let names: Vec<&str> = manifest.tools.iter().map(|t| t.name.as_str()).collect();

    assert_eq!(manifest.name, "pprof server");
    assert_eq!(
        names,
        vec![
            "heap-profile",
            "goroutine-profile",
            "threadcreate-profile",
            "block-profile",
            "allocs-profile",
            "cpu-profile",
            "pprof server",
        ]
    );
}
