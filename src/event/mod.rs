use crate::navigator::ResponseValue;
use serde::{Deserialize, Serialize};

/// The caller-supplied identity of a walk: who ran it and what to call it.
/// Passed explicitly to `Navigator::finish` rather than read from any
/// ambient user context.
#[derive(Debug, Clone, Default)]
pub struct EventMeta {
    pub name: String,
    pub description: Option<String>,
    pub owner_id: String,
}

/// One collected answer, ready for the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterResponse {
    pub parameter_id: String,
    pub value: ResponseValue,
}

/// A concrete instantiation of a playbook walk: the write contract handed
/// to the external persistence collaborator once the user saves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub name: String,
    pub description: Option<String>,
    pub owner_id: String,
    pub playbook_id: String,
    /// The process the walk was on when it was saved; a walk may end with
    /// Save before reaching the chain tail.
    pub current_process_id: String,
    pub responses: Vec<ParameterResponse>,
}

impl EventRecord {
    /// Serializes the record as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
