use thiserror::Error;

/// The direction of a dependency edge relative to a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeRole {
    Predecessor,
    Successor,
}

impl std::fmt::Display for EdgeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeRole::Predecessor => write!(f, "predecessor"),
            EdgeRole::Successor => write!(f, "successor"),
        }
    }
}

/// Errors that can occur while validating a playbook's dependency graph
/// and deriving its linear chain order.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChainBuildError {
    #[error("Playbook '{playbook_id}' has no processes to walk")]
    EmptyPlaybook { playbook_id: String },

    #[error("Process id '{0}' appears more than once in the playbook")]
    DuplicateProcessId(String),

    #[error(
        "Process '{missing_process_id}' not found, but is referenced by dependency edge '{edge_id}'"
    )]
    UnknownProcess {
        missing_process_id: String,
        edge_id: String,
    },

    #[error(
        "Process '{process_id}' has more than one {role} edge; playbooks must form a single linear chain"
    )]
    BranchingDependency { process_id: String, role: EdgeRole },

    #[error("Playbook '{playbook_id}' has no chain head (every process has a predecessor)")]
    NoChainHead { playbook_id: String },

    #[error("Playbook has multiple chain head candidates: {candidates:?}")]
    MultipleChainHeads { candidates: Vec<String> },

    #[error("Dependency edges form a cycle through process '{process_id}'")]
    CycleDetected { process_id: String },

    #[error("Processes {unreached:?} are not reachable from the chain head")]
    DisconnectedGraph { unreached: Vec<String> },
}

/// Errors that can occur when converting a custom user format into a
/// Tebiki `PlaybookDefinition`.
#[derive(Error, Debug, Clone)]
pub enum PlaybookConversionError {
    #[error("Invalid playbook data: {0}")]
    ValidationError(String),
}

/// Errors that can occur while recording parameter responses or
/// finalizing a walk into an event record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResponseError {
    #[error("Parameter '{parameter_id}' is not part of the current process")]
    UnknownParameter { parameter_id: String },

    #[error("Parameter '{parameter_id}' expects a {expected} response, but got {found}")]
    KindMismatch {
        parameter_id: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Value {value} for parameter '{parameter_id}' is outside the scale {min}..={max}")]
    OutOfRange {
        parameter_id: String,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Option '{option}' is not one of the choices for checklist parameter '{parameter_id}'")]
    UnknownOption {
        parameter_id: String,
        option: String,
    },

    #[error("Mandatory parameter '{parameter_id}' of process '{process_id}' has no response")]
    MissingMandatory {
        parameter_id: String,
        process_id: String,
    },
}

/// Errors that can occur when saving or loading a compiled chain snapshot.
#[derive(Error, Debug, Clone)]
pub enum SnapshotError {
    #[error("Snapshot error: {0}")]
    Generic(String),
}
