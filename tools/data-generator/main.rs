use clap::Parser;
use rand::Rng;
use rand::rngs::ThreadRng;
use tebiki::data::{
    DependencyDocument, NodeDocument, ParameterDocument, PlaybookDocument, ProcessDocument,
};
use std::fs;

/// A CLI tool to generate sample playbook documents for the Tebiki navigator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_playbook.json")]
    output: String,

    /// The number of processes in the generated chain
    #[arg(long, default_value_t = 5)]
    processes: usize,

    /// The maximum number of parameters to attach to each process
    #[arg(long, default_value_t = 3)]
    max_parameters: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.processes == 0 {
        eprintln!("Error: --processes must be at least 1");
        std::process::exit(1);
    }

    println!(
        "Generating a playbook with {} chained processes...",
        cli.processes
    );

    let document = generate_playbook(&mut rng, cli.processes, cli.max_parameters);

    let json_output = serde_json::to_string_pretty(&document)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved playbook to '{}'",
        cli.output
    );

    Ok(())
}

const PROCESS_NAMES: &[&str] = &[
    "Intake",
    "Qualification",
    "Review",
    "Approval",
    "Provisioning",
    "Handover",
    "Follow-up",
];

const TRIGGERS: &[&str] = &[
    "previous step complete",
    "on approval",
    "documents received",
    "after sign-off",
];

fn generate_playbook(rng: &mut ThreadRng, processes: usize, max_parameters: usize) -> PlaybookDocument {
    let process_docs: Vec<ProcessDocument> = (0..processes)
        .map(|i| {
            let name = PROCESS_NAMES[i % PROCESS_NAMES.len()];
            ProcessDocument {
                id: format!("p-{:04}", i + 1),
                name: format!("{} {}", name, i / PROCESS_NAMES.len() + 1),
                description: None,
                nodes: vec![NodeDocument {
                    id: format!("n-{:04}", i + 1),
                    name: format!("{} task", name),
                    kind: "task".to_string(),
                    documentation: None,
                    parameters: generate_parameters(rng, i, max_parameters),
                }],
                parameters: vec![],
            }
        })
        .collect();

    let dependencies = (1..processes)
        .map(|i| DependencyDocument {
            id: format!("d-{:04}", i),
            predecessor_id: format!("p-{:04}", i),
            successor_id: format!("p-{:04}", i + 1),
            trigger: if rng.random_bool(0.5) {
                Some(TRIGGERS[rng.random_range(0..TRIGGERS.len())].to_string())
            } else {
                None
            },
        })
        .collect();

    PlaybookDocument {
        id: "pb-generated".to_string(),
        name: "Generated playbook".to_string(),
        status: Some("draft".to_string()),
        deleted: false,
        processes: process_docs,
        dependencies,
    }
}

fn generate_parameters(
    rng: &mut ThreadRng,
    process_index: usize,
    max_parameters: usize,
) -> Vec<ParameterDocument> {
    let count = rng.random_range(0..=max_parameters);
    (0..count)
        .map(|j| {
            let id = format!("par-{:04}-{}", process_index + 1, j);
            match rng.random_range(0..4) {
                0 => ParameterDocument {
                    id,
                    prompt: "Which items were checked?".to_string(),
                    mandatory: rng.random_bool(0.3),
                    kind: "checklist".to_string(),
                    options: vec!["option a".to_string(), "option b".to_string()],
                    min: None,
                    max: None,
                    unit: None,
                },
                1 => ParameterDocument {
                    id,
                    prompt: "Confidence level?".to_string(),
                    mandatory: rng.random_bool(0.3),
                    kind: "scale".to_string(),
                    options: vec![],
                    min: Some(1),
                    max: Some(5),
                    unit: None,
                },
                2 => ParameterDocument {
                    id,
                    prompt: "Measured duration?".to_string(),
                    mandatory: rng.random_bool(0.3),
                    kind: "number".to_string(),
                    options: vec![],
                    min: None,
                    max: None,
                    unit: Some("minutes".to_string()),
                },
                _ => ParameterDocument {
                    id,
                    prompt: "Notes".to_string(),
                    mandatory: false,
                    kind: "text".to_string(),
                    options: vec![],
                    min: None,
                    max: None,
                    unit: None,
                },
            }
        })
        .collect()
}
