//! Common test utilities for building playbook definitions.
use tebiki::prelude::*;

/// Creates a linear playbook of `n` processes `p1 -> p2 -> ... -> pn`,
/// with edges encoded as `predecessor=p{i}, successor=p{i+1}`.
#[allow(dead_code)]
pub fn linear_playbook(n: usize) -> PlaybookDefinition {
    let processes = (1..=n)
        .map(|i| ProcessDefinition {
            id: format!("p{}", i),
            name: format!("Process {}", i),
            ..Default::default()
        })
        .collect();

    let dependencies = (1..n)
        .map(|i| DependencyDefinition {
            id: format!("d{}", i),
            predecessor_id: format!("p{}", i),
            successor_id: format!("p{}", i + 1),
            trigger: None,
        })
        .collect();

    PlaybookDefinition {
        id: "pb-linear".to_string(),
        name: "Linear playbook".to_string(),
        processes,
        dependencies,
        ..Default::default()
    }
}

/// Creates a 3-process review playbook with parameters and trigger labels.
///
/// `Intake -> [intake complete] Review -> [on approval] Publish`, where
/// Intake carries a mandatory scale parameter on a node, Review carries an
/// optional checklist, and Publish a mandatory text parameter.
#[allow(dead_code)]
pub fn review_playbook() -> PlaybookDefinition {
    PlaybookDefinition {
        id: "pb-review".to_string(),
        name: "Review playbook".to_string(),
        processes: vec![
            ProcessDefinition {
                id: "intake".to_string(),
                name: "Intake".to_string(),
                description: Some("Collect the request".to_string()),
                nodes: vec![NodeDefinition {
                    id: "n-form".to_string(),
                    name: "Fill form".to_string(),
                    kind: NodeKind::Task,
                    documentation: None,
                    parameters: vec![ParameterDefinition {
                        id: "urgency".to_string(),
                        prompt: "Urgency (1-5)?".to_string(),
                        mandatory: true,
                        kind: ParameterKind::Scale { min: 1, max: 5 },
                    }],
                }],
                parameters: vec![],
            },
            ProcessDefinition {
                id: "review".to_string(),
                name: "Review".to_string(),
                description: None,
                nodes: vec![],
                parameters: vec![ParameterDefinition {
                    id: "checked".to_string(),
                    prompt: "Checked aspects".to_string(),
                    mandatory: false,
                    kind: ParameterKind::Checklist {
                        options: vec!["legal".to_string(), "technical".to_string()],
                    },
                }],
            },
            ProcessDefinition {
                id: "publish".to_string(),
                name: "Publish".to_string(),
                description: None,
                nodes: vec![],
                parameters: vec![ParameterDefinition {
                    id: "summary".to_string(),
                    prompt: "Closing summary".to_string(),
                    mandatory: true,
                    kind: ParameterKind::Text,
                }],
            },
        ],
        dependencies: vec![
            DependencyDefinition {
                id: "d1".to_string(),
                predecessor_id: "intake".to_string(),
                successor_id: "review".to_string(),
                trigger: Some("intake complete".to_string()),
            },
            DependencyDefinition {
                id: "d2".to_string(),
                predecessor_id: "review".to_string(),
                successor_id: "publish".to_string(),
                trigger: Some("on approval".to_string()),
            },
        ],
        ..Default::default()
    }
}

/// Builds the chain for a playbook, panicking on validation errors.
#[allow(dead_code)]
pub fn build_chain(playbook: PlaybookDefinition) -> ProcessChain {
    ChainBuilder::new(playbook)
        .build()
        .expect("Failed to build chain")
}

/// A playbook document JSON string matching the persistence export format.
#[allow(dead_code)]
pub const REVIEW_DOCUMENT_JSON: &str = r#"{
    "id": "pb-doc",
    "name": "Documented playbook",
    "status": "published",
    "processes": [
        {
            "id": "draft",
            "name": "Draft",
            "nodes": [
                {
                    "id": "n1",
                    "name": "Write draft",
                    "type": "task",
                    "parameters": [
                        {
                            "id": "word-count",
                            "prompt": "Word count?",
                            "mandatory": true,
                            "type": "number",
                            "unit": "words"
                        }
                    ]
                }
            ]
        },
        {
            "id": "edit",
            "name": "Edit",
            "parameters": [
                {
                    "id": "passes",
                    "prompt": "Editing passes?",
                    "type": "scale",
                    "min": 1,
                    "max": 3
                }
            ]
        }
    ],
    "dependencies": [
        {
            "id": "d1",
            "parentProcessId": "draft",
            "processId": "edit",
            "trigger": "draft complete"
        }
    ]
}"#;
