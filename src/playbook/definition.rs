use std::fmt;

/// The complete, canonical definition of a playbook, ready for chain building.
/// This is the target structure for any custom data model conversion.
#[derive(Debug, Clone, Default)]
pub struct PlaybookDefinition {
    pub id: String,
    pub name: String,
    pub status: PlaybookStatus,
    pub deleted: bool,
    pub processes: Vec<ProcessDefinition>,
    pub dependencies: Vec<DependencyDefinition>,
}

/// Lifecycle state of a playbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybookStatus {
    #[default]
    Draft,
    Published,
}

/// Defines a single process (one phase of the playbook).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessDefinition {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub nodes: Vec<NodeDefinition>,
    pub parameters: Vec<ParameterDefinition>,
}

impl ProcessDefinition {
    /// Iterates over all parameters in scope for this process: the
    /// process-level parameters followed by each node's parameters.
    pub fn all_parameters(&self) -> impl Iterator<Item = &ParameterDefinition> {
        self.parameters
            .iter()
            .chain(self.nodes.iter().flat_map(|n| n.parameters.iter()))
    }

    /// Looks up a parameter by id anywhere in this process's scope.
    pub fn parameter(&self, parameter_id: &str) -> Option<&ParameterDefinition> {
        self.all_parameters().find(|p| p.id == parameter_id)
    }
}

/// Defines a BPMN element (task, event or gateway) within a process.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeDefinition {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
    pub documentation: Option<String>,
    pub parameters: Vec<ParameterDefinition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Task,
    Event,
    Gateway,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Task => write!(f, "task"),
            NodeKind::Event => write!(f, "event"),
            NodeKind::Gateway => write!(f, "gateway"),
        }
    }
}

/// Defines a question/field attached to a node or directly to a process.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDefinition {
    pub id: String,
    pub prompt: String,
    pub mandatory: bool,
    pub kind: ParameterKind,
}

/// The type-specific configuration of a parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterKind {
    Checklist { options: Vec<String> },
    Scale { min: i64, max: i64 },
    Number { unit: Option<String> },
    Text,
}

impl ParameterKind {
    /// A short label used in error messages and prompts.
    pub fn label(&self) -> &'static str {
        match self {
            ParameterKind::Checklist { .. } => "checklist",
            ParameterKind::Scale { .. } => "scale",
            ParameterKind::Number { .. } => "number",
            ParameterKind::Text => "text",
        }
    }
}

/// A directed dependency edge: the predecessor process must be visited
/// before the successor process.
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyDefinition {
    pub id: String,
    pub predecessor_id: String,
    pub successor_id: String,
    /// Human-readable condition describing why the transition occurs.
    pub trigger: Option<String>,
}
