//! Integration tests for graphwire
//!
//! End-to-end tests that go from JSON on disk through both conversions.
//!
mod common;
use common::*;
use graphwire::prelude::*;
use std::fs;
use std::path::PathBuf;

fn scratch_file(name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("graphwire-tests");
    fs::create_dir_all(&dir).expect("Failed to create scratch directory");
    let path = dir.join(format!("{}-{}", std::process::id(), name));
    fs::write(&path, content).expect("Failed to write scratch file");
    path
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_api_file_to_editor_and_back() {
        let path = scratch_file("txt2img_api.json", TXT2IMG_API_JSON);
        let api = ExecutionWorkflow::from_file(&path).expect("Failed to load api workflow");

        let converter = Converter::builder().strict(true).build();
        let editor = converter
            .to_editor_format(&api)
            .expect("Fixture should pass strict conversion");
        let restored = converter
            .to_execution_format(&editor)
            .expect("Synthesized editor workflow should be well formed");

        for (key, node) in &api {
            assert_eq!(restored.get(key).unwrap().inputs, node.inputs);
        }

        let editor_path = scratch_file("txt2img_editor.json", &editor.to_json_pretty().unwrap());
        let reloaded = EditorWorkflow::from_file(&editor_path).unwrap();
        assert_eq!(reloaded, editor);

        let _ = fs::remove_file(path);
        let _ = fs::remove_file(editor_path);
    }

    #[test]
    fn test_editor_document_to_api_json() {
        let editor = EditorWorkflow::from_json(SIMPLE_EDITOR_JSON).unwrap();
        let api = to_execution_format(&editor);
        let json: serde_json::Value =
            serde_json::from_str(&api.to_json_pretty().unwrap()).unwrap();

        assert_eq!(json["1"]["class_type"], "LoadImage");
        assert_eq!(json["1"]["_meta"]["title"], "LoadImage");
        assert_eq!(json["1"]["inputs"]["image"], "a.png");
        assert_eq!(json["2"]["_meta"]["title"], "Upscale");
        assert_eq!(json["2"]["inputs"]["image"], serde_json::json!(["1", 0]));
        assert_eq!(json["2"]["inputs"]["upscale_method"], "lanczos");
    }

    #[test]
    fn test_layout_is_lost_but_wiring_survives() {
        let editor = EditorWorkflow::from_json(SIMPLE_EDITOR_JSON).unwrap();
        let back = to_editor_format(&to_execution_format(&editor));

        assert_eq!(back.edges, editor.edges);
        assert_eq!(back.nodes[&id("1")].inputs, editor.nodes[&id("1")].inputs);
        assert_eq!(back.nodes[&id("2")].inputs, editor.nodes[&id("2")].inputs);
        assert_eq!(back.nodes[&id("1")].pos, Position::ORIGIN);
        assert_ne!(editor.nodes[&id("1")].pos, Position::ORIGIN);
        assert!(back.nodes[&id("1")].outputs.is_empty());
        // The empty title came back as the type name.
        assert_eq!(back.nodes[&id("1")].title, "LoadImage");
    }

    #[test]
    fn test_converter_is_shareable_across_threads() {
        let converter = std::sync::Arc::new(Converter::default());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let converter = converter.clone();
                std::thread::spawn(move || {
                    let api = txt2img_api();
                    let editor = converter.to_editor_format(&api).unwrap();
                    editor.edges.len()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 9);
        }
    }
}
