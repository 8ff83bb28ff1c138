use crate::convert::to_execution_format;
use crate::model::{EditorWorkflow, ExecutionWorkflow};
use itertools::Itertools;

/// Renders a workflow's wiring as indented, human-readable text.
pub struct SummaryFormatter;

impl SummaryFormatter {
    /// One header line per node, followed by one line per input socket.
    ///
    /// ```text
    /// 2 nodes, 1 connection
    /// #1 CheckpointLoaderSimple
    ///     ckpt_name = "sd15.safetensors"
    /// #3 KSampler "Sampler"
    ///     model <- 1:0
    /// ```
    pub fn format_execution(workflow: &ExecutionWorkflow) -> String {
        let connections = workflow
            .iter()
            .flat_map(|(_, node)| node.inputs.values())
            .filter(|v| v.is_connection())
            .count();

        let header = format!(
            "{} {}, {} {}",
            workflow.len(),
            plural(workflow.len(), "node", "nodes"),
            connections,
            plural(connections, "connection", "connections")
        );

        let body = workflow
            .iter()
            .map(|(id, node)| {
                let mut block = format!("#{} {}", id, node.class_type);
                if node.display_title() != node.class_type {
                    block.push_str(&format!(" {:?}", node.display_title()));
                }
                for (input, value) in &node.inputs {
                    let line = if value.is_connection() {
                        format!("\n    {} {}", input, value)
                    } else {
                        format!("\n    {} = {}", input, value)
                    };
                    block.push_str(&line);
                }
                block
            })
            .join("\n");

        if body.is_empty() {
            header
        } else {
            format!("{}\n{}", header, body)
        }
    }

    /// Summarizes the execution view of an editor workflow, so edges show
    /// up on the inputs they feed.
    pub fn format_editor(workflow: &EditorWorkflow) -> String {
        Self::format_execution(&to_execution_format(workflow))
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
