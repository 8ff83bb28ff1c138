//! Unit tests for summaries and error messages.
mod common;
use common::*;
use graphwire::prelude::*;

#[test]
fn test_connection_display() {
    assert_eq!(ConnectionRef::new("12", 3).to_string(), "12:3");
    assert_eq!(InputValue::connection("4", 0).to_string(), "<- 4:0");
    assert_eq!(InputValue::literal("a.png").to_string(), "\"a.png\"");
}

#[test]
fn test_summary_of_api_workflow() {
    let mut api = ExecutionWorkflow::new();
    api.insert(
        "1",
        ExecutionNode::new("CheckpointLoaderSimple")
            .with_input("ckpt_name", InputValue::literal("sd15.safetensors")),
    );
    api.insert(
        "3",
        ExecutionNode::new("KSampler")
            .with_title("Sampler")
            .with_input("model", InputValue::connection("1", 0))
            .with_input("seed", InputValue::literal(42)),
    );

    let summary = SummaryFormatter::format_execution(&api);
    assert_eq!(
        summary,
        "2 nodes, 1 connection\n\
         #1 CheckpointLoaderSimple\n    ckpt_name = \"sd15.safetensors\"\n\
         #3 KSampler \"Sampler\"\n    model <- 1:0\n    seed = 42"
    );
}

#[test]
fn test_summary_of_editor_workflow_shows_edges_on_inputs() {
    let summary = SummaryFormatter::format_editor(&create_simple_editor());
    assert!(summary.starts_with("2 nodes, 1 connection"));
    assert!(summary.contains("image <- 1:0"));
    assert!(summary.contains("#2 ImageScale \"Upscale\""));
}

#[test]
fn test_summary_of_empty_workflow() {
    assert_eq!(
        SummaryFormatter::format_execution(&ExecutionWorkflow::new()),
        "0 nodes, 0 connections"
    );
}

#[test]
fn test_error_display() {
    let err = ValidationError::UnknownSourceNode {
        source_node: id("9"),
        edge_target: id("2"),
    };
    assert!(err.to_string().contains("'9'"));
    assert!(err.to_string().contains("'2'"));

    let conflict = ValidationError::InputConflict {
        node_id: id("3"),
        input: "model".to_string(),
    };
    assert!(conflict.to_string().contains("model"));
    assert!(conflict.to_string().contains("literal"));

    let format_err = FormatError::Io {
        path: "a.json".to_string(),
        message: "denied".to_string(),
    };
    assert_eq!(format_err.to_string(), "Could not access 'a.json': denied");
}

#[test]
fn test_builder_debug() {
    let builder = Converter::builder().strict(true).merge_edges(false);
    let debug = format!("{:?}", builder);
    assert!(debug.starts_with("ConverterBuilder"));
    assert!(debug.contains("strict: true"));
    assert!(debug.contains("merge_edges: false"));
}
