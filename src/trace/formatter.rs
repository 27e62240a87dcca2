use crate::pathway::{Resolution, TraceStep};

/// Formats resolution traces into human-readable strings
pub struct TraceFormatter;

impl TraceFormatter {
    /// Format a resolution as a single arrow-separated path, e.g.
    /// `fever resolved -> defined infection: no -> neutropaenia resolved => Stop antibiotics`.
    pub fn format_trace(resolution: &Resolution) -> String {
        if resolution.trace.is_empty() {
            return "No decisions taken".to_string();
        }

        let path = resolution
            .trace
            .iter()
            .map(|step| step.decision.to_string())
            .collect::<Vec<_>>()
            .join(" -> ");

        let terminals = Self::terminal_labels(&resolution.trace);
        if terminals.is_empty() {
            path
        } else {
            format!("{} => {}", path, terminals.join(" + "))
        }
    }

    /// Format each step on its own line, listing the nodes it lit.
    pub fn format_steps(resolution: &Resolution) -> String {
        let mut result = String::new();
        for (i, step) in resolution.trace.iter().enumerate() {
            let nodes = step
                .activated
                .iter()
                .map(|id| id.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            result.push_str(&format!(
                "{:>2}. {:<36} [{}]\n",
                i + 1,
                step.decision.to_string(),
                nodes
            ));
        }
        result
    }

    // Terminal actions in the order they were reached. The persistent branch
    // can reach one while the recurrent-fever guidance is also lit.
    fn terminal_labels(trace: &[TraceStep]) -> Vec<&'static str> {
        let mut labels = Vec::new();
        for step in trace {
            for id in &step.activated {
                if id.is_terminal_action() && !labels.contains(&id.label()) {
                    labels.push(id.label());
                }
            }
        }
        labels
    }
}
