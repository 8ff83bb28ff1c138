use crate::model::{
    ConnectionRef, EditorNode, EditorWorkflow, ExecutionNode, ExecutionWorkflow, NodeId, NodeMeta,
};
use std::collections::BTreeMap;
use tracing::debug;

/// Editor to execution format.
pub(super) fn encode(workflow: &EditorWorkflow, merge_edges: bool) -> ExecutionWorkflow {
    let mut nodes: BTreeMap<NodeId, ExecutionNode> = workflow
        .nodes
        .iter()
        .map(|(id, node)| (id.clone(), encode_node(node)))
        .collect();

    if merge_edges {
        for edge in &workflow.edges {
            // Dangling targets were already reported by validation.
            let Some(target) = nodes.get_mut(&edge.target_node) else {
                continue;
            };
            let connection = ConnectionRef::new(edge.source_node.clone(), edge.source_output);
            debug!(
                node = %edge.target_node,
                input = %edge.target_input,
                %connection,
                "wiring edge into input"
            );
            target
                .inputs
                .insert(edge.target_input.clone(), connection.into());
        }
    }

    nodes.into_iter().collect()
}

fn encode_node(node: &EditorNode) -> ExecutionNode {
    ExecutionNode {
        inputs: node.inputs.clone(),
        class_type: node.node_type.clone(),
        meta: Some(NodeMeta {
            title: Some(node.display_title().to_string()),
        }),
    }
}
