use crate::convert::Converter;
use crate::model::{EditorWorkflow, ExecutionWorkflow, is_editor_document};
use crate::validate::{validate_editor, validate_execution};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn value_error(e: impl ToString) -> PyErr {
    PyErr::new::<PyValueError, _>(e.to_string())
}

fn converter(strict: bool) -> Converter {
    Converter::builder().strict(strict).build()
}

/// Converts an editor workflow JSON string to the execution API format.
///
/// Args:
///     editor_json (str): The editor workflow, with `nodes` and `edges`.
///     strict (bool): Reject malformed graphs instead of converting them
///         best-effort. Defaults to False.
///
/// Returns:
///     str: The execution workflow as pretty-printed JSON.
///
/// Raises:
///     ValueError: If the JSON is malformed, or if `strict` is set and the
///         graph has structural problems.
#[pyfunction]
#[pyo3(signature = (editor_json, strict = false))]
fn to_api(editor_json: &str, strict: bool) -> PyResult<String> {
    let workflow = EditorWorkflow::from_json(editor_json).map_err(value_error)?;
    let api = converter(strict)
        .to_execution_format(&workflow)
        .map_err(value_error)?;
    api.to_json_pretty().map_err(value_error)
}

/// Converts an execution API workflow JSON string to the editor format.
///
/// Args:
///     api_json (str): The execution workflow, keyed by node id.
///     strict (bool): Reject non-numeric node ids and dangling connections.
///         Defaults to False.
///
/// Returns:
///     str: The editor workflow as pretty-printed JSON. Layout fields are
///         placeholders.
///
/// Raises:
///     ValueError: If the JSON is malformed, or if `strict` is set and the
///         graph has structural problems.
#[pyfunction]
#[pyo3(signature = (api_json, strict = false))]
fn to_editor(api_json: &str, strict: bool) -> PyResult<String> {
    let api = ExecutionWorkflow::from_json(api_json).map_err(value_error)?;
    let workflow = converter(strict).to_editor_format(&api).map_err(value_error)?;
    workflow.to_json_pretty().map_err(value_error)
}

/// Lists the structural problems of a workflow JSON string.
///
/// Args:
///     json (str): An editor or execution workflow.
///     editor (bool | None): Whether `json` is an editor workflow. When
///         omitted the format is detected from the document: an object with
///         a `nodes` map is an editor workflow unless that map is itself a
///         node with a `class_type`. Pass it for documents that could be
///         read either way.
///
/// Returns:
///     list[str]: One message per problem; empty when the graph is sound.
///
/// Raises:
///     ValueError: If the JSON is malformed.
#[pyfunction]
#[pyo3(signature = (json, editor = None))]
fn validate(json: &str, editor: Option<bool>) -> PyResult<Vec<String>> {
    let editor = match editor {
        Some(editor) => editor,
        None => {
            let raw: serde_json::Value = serde_json::from_str(json).map_err(value_error)?;
            is_editor_document(&raw)
        }
    };
    let issues = if editor {
        validate_editor(&EditorWorkflow::from_json(json).map_err(value_error)?)
    } else {
        validate_execution(&ExecutionWorkflow::from_json(json).map_err(value_error)?)
    };
    Ok(issues.iter().map(ToString::to_string).collect())
}

/// Converts node-graph workflows between the editor and execution API formats.
#[pymodule]
fn graphwire(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(to_api, m)?)?;
    m.add_function(wrap_pyfunction!(to_editor, m)?)?;
    m.add_function(wrap_pyfunction!(validate, m)?)?;
    Ok(())
}
