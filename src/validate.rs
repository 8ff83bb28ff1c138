//! Structural checks on workflow graphs.
//!
//! Nothing here checks socket types, node classes or cycles; those belong to
//! the node registry and the execution backend.

use crate::error::ValidationError;
use crate::model::{EditorWorkflow, ExecutionWorkflow, NodeId};
use ahash::{AHashMap, AHashSet};

/// Collects every structural problem in an editor workflow, in node order
/// followed by edge order.
pub fn validate_editor(workflow: &EditorWorkflow) -> Vec<ValidationError> {
    let mut issues = validate_editor_nodes(workflow);
    issues.extend(validate_editor_edges(workflow));
    issues
}

/// Node key and `id` checks only.
pub(crate) fn validate_editor_nodes(workflow: &EditorWorkflow) -> Vec<ValidationError> {
    let mut issues = Vec::new();
    let mut declared_ids: AHashMap<i64, &NodeId> = AHashMap::new();

    for (key, node) in &workflow.nodes {
        match (key.as_integer(), node.id) {
            (None, _) => issues.push(ValidationError::NonIntegerNodeId(key.clone())),
            (Some(expected), Some(id)) if expected != id => {
                issues.push(ValidationError::NodeIdMismatch {
                    key: key.clone(),
                    id,
                })
            }
            _ => {}
        }

        if let Some(id) = node.id {
            if let Some(first_key) = declared_ids.insert(id, key) {
                issues.push(ValidationError::DuplicateNodeId {
                    id,
                    first_key: first_key.clone(),
                    second_key: key.clone(),
                });
            }
        }
    }

    issues
}

/// Edge endpoint and socket checks; only meaningful when edges are merged.
pub(crate) fn validate_editor_edges(workflow: &EditorWorkflow) -> Vec<ValidationError> {
    let mut issues = Vec::new();
    let mut wired: AHashSet<(&NodeId, &str)> = AHashSet::new();
    for edge in &workflow.edges {
        if !workflow.nodes.contains_key(&edge.source_node) {
            issues.push(ValidationError::UnknownSourceNode {
                source_node: edge.source_node.clone(),
                edge_target: edge.target_node.clone(),
            });
        }

        let Some(target) = workflow.nodes.get(&edge.target_node) else {
            issues.push(ValidationError::UnknownTargetNode {
                target_node: edge.target_node.clone(),
                target_input: edge.target_input.clone(),
            });
            continue;
        };

        if !wired.insert((&edge.target_node, edge.target_input.as_str())) {
            issues.push(ValidationError::DuplicateConnection {
                node_id: edge.target_node.clone(),
                input: edge.target_input.clone(),
            });
        } else if target.inputs.contains_key(&edge.target_input) {
            issues.push(ValidationError::InputConflict {
                node_id: edge.target_node.clone(),
                input: edge.target_input.clone(),
            });
        }
    }

    issues
}

/// Collects every structural problem in an execution workflow, in node order.
pub fn validate_execution(workflow: &ExecutionWorkflow) -> Vec<ValidationError> {
    let mut issues = Vec::new();

    for (key, node) in workflow {
        if key.as_integer().is_none() {
            issues.push(ValidationError::NonIntegerNodeId(key.clone()));
        }

        for connection in node.inputs.values().filter_map(|v| v.as_connection()) {
            if !workflow.contains(&connection.node) {
                issues.push(ValidationError::UnknownSourceNode {
                    source_node: connection.node.clone(),
                    edge_target: key.clone(),
                });
            }
        }
    }

    issues
}
