use crate::error::PlaybookConversionError;
use crate::playbook::{
    DependencyDefinition, IntoPlaybook, NodeDefinition, NodeKind, ParameterDefinition,
    ParameterKind, PlaybookDefinition, PlaybookStatus, ProcessDefinition,
};
use serde::{Deserialize, Serialize};
use std::fs;

/// A playbook as exported by the persistence layer: the playbook with its
/// nested processes, each process's dependency edges, nodes, and each
/// node's parameters. Matches the expected JSON format.
#[derive(Serialize, Deserialize, Debug)]
pub struct PlaybookDocument {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub deleted: bool,
    pub processes: Vec<ProcessDocument>,
    #[serde(default)]
    pub dependencies: Vec<DependencyDocument>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ProcessDocument {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub nodes: Vec<NodeDocument>,
    #[serde(default)]
    pub parameters: Vec<ParameterDocument>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct NodeDocument {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub documentation: Option<String>,
    #[serde(default)]
    pub parameters: Vec<ParameterDocument>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ParameterDocument {
    pub id: String,
    pub prompt: String,
    #[serde(default)]
    pub mandatory: bool,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub min: Option<i64>,
    #[serde(default)]
    pub max: Option<i64>,
    #[serde(default)]
    pub unit: Option<String>,
}

/// A dependency edge as exported upstream. The aliases accept the legacy
/// column names (`parentProcessId` preceded `processId`).
#[derive(Serialize, Deserialize, Debug)]
pub struct DependencyDocument {
    pub id: String,
    #[serde(alias = "parentProcessId")]
    pub predecessor_id: String,
    #[serde(alias = "processId")]
    pub successor_id: String,
    #[serde(default)]
    pub trigger: Option<String>,
}

impl PlaybookDocument {
    /// Load a playbook document from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let document = serde_json::from_str(&content)?;
        Ok(document)
    }

    /// Creates a small mock document when no file is provided.
    pub fn default() -> Self {
        Self {
            id: "pb-onboarding".to_string(),
            name: "Customer onboarding".to_string(),
            status: Some("published".to_string()),
            deleted: false,
            processes: vec![
                ProcessDocument {
                    id: "p-intake".to_string(),
                    name: "Intake".to_string(),
                    description: Some("Collect the customer's details".to_string()),
                    nodes: vec![NodeDocument {
                        id: "n-form".to_string(),
                        name: "Fill intake form".to_string(),
                        kind: "task".to_string(),
                        documentation: None,
                        parameters: vec![ParameterDocument {
                            id: "par-company-size".to_string(),
                            prompt: "Company size?".to_string(),
                            mandatory: true,
                            kind: "number".to_string(),
                            options: vec![],
                            min: None,
                            max: None,
                            unit: Some("employees".to_string()),
                        }],
                    }],
                    parameters: vec![],
                },
                ProcessDocument {
                    id: "p-review".to_string(),
                    name: "Review".to_string(),
                    description: None,
                    nodes: vec![],
                    parameters: vec![ParameterDocument {
                        id: "par-approved".to_string(),
                        prompt: "Approved items".to_string(),
                        mandatory: false,
                        kind: "checklist".to_string(),
                        options: vec!["contract".to_string(), "billing".to_string()],
                        min: None,
                        max: None,
                        unit: None,
                    }],
                },
            ],
            dependencies: vec![DependencyDocument {
                id: "d-1".to_string(),
                predecessor_id: "p-intake".to_string(),
                successor_id: "p-review".to_string(),
                trigger: Some("intake complete".to_string()),
            }],
        }
    }
}

impl IntoPlaybook for PlaybookDocument {
    fn into_playbook(self) -> Result<PlaybookDefinition, PlaybookConversionError> {
        let status = match self.status.as_deref() {
            None | Some("draft") => PlaybookStatus::Draft,
            Some("published") => PlaybookStatus::Published,
            Some(other) => {
                return Err(PlaybookConversionError::ValidationError(format!(
                    "Unknown playbook status '{}'",
                    other
                )));
            }
        };

        let processes = self
            .processes
            .into_iter()
            .map(|process| {
                let nodes = process
                    .nodes
                    .into_iter()
                    .map(|node| {
                        let kind = parse_node_kind(&node.id, &node.kind)?;
                        Ok(NodeDefinition {
                            id: node.id,
                            name: node.name,
                            kind,
                            documentation: node.documentation,
                            parameters: convert_parameters(node.parameters)?,
                        })
                    })
                    .collect::<Result<Vec<_>, PlaybookConversionError>>()?;

                Ok(ProcessDefinition {
                    id: process.id,
                    name: process.name,
                    description: process.description,
                    nodes,
                    parameters: convert_parameters(process.parameters)?,
                })
            })
            .collect::<Result<Vec<_>, PlaybookConversionError>>()?;

        let dependencies = self
            .dependencies
            .into_iter()
            .map(|edge| DependencyDefinition {
                id: edge.id,
                predecessor_id: edge.predecessor_id,
                successor_id: edge.successor_id,
                trigger: edge.trigger,
            })
            .collect();

        Ok(PlaybookDefinition {
            id: self.id,
            name: self.name,
            status,
            deleted: self.deleted,
            processes,
            dependencies,
        })
    }
}

fn parse_node_kind(node_id: &str, kind: &str) -> Result<NodeKind, PlaybookConversionError> {
    match kind {
        "task" => Ok(NodeKind::Task),
        "event" => Ok(NodeKind::Event),
        "gateway" => Ok(NodeKind::Gateway),
        other => Err(PlaybookConversionError::ValidationError(format!(
            "Node '{}' has unknown kind '{}'",
            node_id, other
        ))),
    }
}

fn convert_parameters(
    parameters: Vec<ParameterDocument>,
) -> Result<Vec<ParameterDefinition>, PlaybookConversionError> {
    parameters
        .into_iter()
        .map(|parameter| {
            let kind = match parameter.kind.as_str() {
                "checklist" => ParameterKind::Checklist {
                    options: parameter.options,
                },
                "scale" => {
                    let (min, max) = match (parameter.min, parameter.max) {
                        (Some(min), Some(max)) if min <= max => (min, max),
                        _ => {
                            return Err(PlaybookConversionError::ValidationError(format!(
                                "Scale parameter '{}' needs min <= max",
                                parameter.id
                            )));
                        }
                    };
                    ParameterKind::Scale { min, max }
                }
                "number" => ParameterKind::Number {
                    unit: parameter.unit,
                },
                "text" => ParameterKind::Text,
                other => {
                    return Err(PlaybookConversionError::ValidationError(format!(
                        "Parameter '{}' has unknown type '{}'",
                        parameter.id, other
                    )));
                }
            };

            Ok(ParameterDefinition {
                id: parameter.id,
                prompt: parameter.prompt,
                mandatory: parameter.mandatory,
                kind,
            })
        })
        .collect()
}
