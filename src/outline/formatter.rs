use crate::chain::{ChainStep, ProcessChain};

/// Formats validated chains into human-readable strings
pub struct OutlineFormatter;

impl OutlineFormatter {
    /// Format the whole walk on one line, with trigger labels where present.
    ///
    /// Example: `Intake -> [on approval] Review -> Publish`
    pub fn format_chain(chain: &ProcessChain) -> String {
        let mut result = String::new();
        for (position, step) in chain.iter().enumerate() {
            if position > 0 {
                result.push_str(" -> ");
                if let Some(trigger) = &step.trigger {
                    result.push('[');
                    result.push_str(trigger);
                    result.push_str("] ");
                }
            }
            result.push_str(&step.process.name);
        }
        result
    }

    /// Format a single step with its position, for step-by-step displays.
    ///
    /// Example: `(2/3) Review [on approval] - 4 nodes`
    pub fn format_step(step: &ChainStep, position: usize, total: usize) -> String {
        let mut result = format!("({}/{}) {}", position + 1, total, step.process.name);
        if let Some(trigger) = &step.trigger {
            result.push_str(&format!(" [{}]", trigger));
        }
        let node_count = step.process.nodes.len();
        if node_count == 1 {
            result.push_str(" - 1 node");
        } else {
            result.push_str(&format!(" - {} nodes", node_count));
        }
        result
    }
}
