//! Common test utilities for building workflows in both formats.
use graphwire::prelude::*;
use serde_json::json;

/// A small text-to-image pipeline in the execution format.
///
/// `1` loads a checkpoint, `2`/`4` encode prompts, `5` is an empty latent,
/// `3` samples, `6` decodes, `7` saves.
#[allow(dead_code)]
pub const TXT2IMG_API_JSON: &str = r#"{
    "1": {
        "inputs": { "ckpt_name": "sd15.safetensors" },
        "class_type": "CheckpointLoaderSimple",
        "_meta": { "title": "Load Checkpoint" }
    },
    "2": {
        "inputs": { "text": "a castle at sunset", "clip": ["1", 1] },
        "class_type": "CLIPTextEncode",
        "_meta": { "title": "Positive" }
    },
    "3": {
        "inputs": {
            "seed": 42,
            "steps": 20,
            "cfg": 7.5,
            "sampler_name": "euler",
            "model": ["1", 0],
            "positive": ["2", 0],
            "negative": ["4", 0],
            "latent_image": ["5", 0]
        },
        "class_type": "KSampler"
    },
    "4": {
        "inputs": { "text": "blurry", "clip": ["1", 1] },
        "class_type": "CLIPTextEncode",
        "_meta": { "title": "" }
    },
    "5": {
        "inputs": { "width": 512, "height": 512, "batch_size": 1 },
        "class_type": "EmptyLatentImage"
    },
    "6": {
        "inputs": { "samples": ["3", 0], "vae": ["1", 2] },
        "class_type": "VAEDecode"
    },
    "7": {
        "inputs": { "filename_prefix": "graphwire", "images": ["6", 0] },
        "class_type": "SaveImage"
    }
}"#;

/// The same kind of pipeline as an editor document, with edges kept apart
/// from the literal inputs.
#[allow(dead_code)]
pub const SIMPLE_EDITOR_JSON: &str = r#"{
    "nodes": {
        "1": {
            "id": 1,
            "type": "LoadImage",
            "title": "",
            "pos": [120.0, 80.0],
            "size": { "width": 300.0, "height": 200.0 },
            "inputs": { "image": "a.png" },
            "outputs": { "IMAGE": { "type": "IMAGE" } },
            "properties": { "collapsed": false }
        },
        "2": {
            "id": 2,
            "type": "ImageScale",
            "title": "Upscale",
            "pos": [480.0, 80.0],
            "size": { "width": 300.0, "height": 120.0 },
            "inputs": { "width": 1024, "height": 1024, "upscale_method": "lanczos" }
        }
    },
    "edges": [
        { "sourceNode": "1", "sourceOutput": 0, "targetNode": "2", "targetInput": "image" }
    ],
    "groups": [],
    "config": {},
    "version": 0.4
}"#;

/// Parses [`TXT2IMG_API_JSON`].
#[allow(dead_code)]
pub fn txt2img_api() -> ExecutionWorkflow {
    ExecutionWorkflow::from_json(TXT2IMG_API_JSON).expect("fixture must parse")
}

/// Builds a two node editor workflow wired `1:0 -> 2.image` in code.
#[allow(dead_code)]
pub fn create_simple_editor() -> EditorWorkflow {
    let mut workflow = EditorWorkflow::default();
    workflow.nodes.insert(
        NodeId::from("1"),
        EditorNode::new(Some(1), "LoadImage").with_input("image", InputValue::literal("a.png")),
    );
    workflow.nodes.insert(
        NodeId::from("2"),
        EditorNode::new(Some(2), "ImageScale")
            .with_title("Upscale")
            .with_input("width", InputValue::literal(1024))
            .with_input("crop", InputValue::literal(json!({"x": 0, "y": 0}))),
    );
    workflow.edges.push(Edge::new("1", 0, "2", "image"));
    workflow
}

/// Shorthand for looking up a node by its string key.
#[allow(dead_code)]
pub fn id(key: &str) -> NodeId {
    NodeId::from(key)
}
