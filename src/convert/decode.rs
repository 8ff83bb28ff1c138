use crate::model::{Edge, EditorNode, EditorWorkflow, ExecutionWorkflow, InputValue};
use tracing::debug;

/// Execution to editor format. Edges come out in node order, then socket order.
pub(super) fn decode(workflow: &ExecutionWorkflow, version: f64) -> EditorWorkflow {
    let mut editor = EditorWorkflow {
        version,
        ..EditorWorkflow::default()
    };

    for (node_id, api_node) in workflow {
        let mut node = EditorNode::new(node_id.as_integer(), &api_node.class_type)
            .with_title(api_node.display_title());

        for (input, value) in &api_node.inputs {
            match value {
                InputValue::Connection(connection) => {
                    debug!(node = %node_id, %input, %connection, "splitting connection into edge");
                    editor.edges.push(Edge {
                        source_node: connection.node.clone(),
                        source_output: connection.output,
                        target_node: node_id.clone(),
                        target_input: input.clone(),
                    });
                }
                InputValue::Literal(_) => {
                    node.inputs.insert(input.clone(), value.clone());
                }
            }
        }

        editor.nodes.insert(node_id.clone(), node);
    }

    editor
}
