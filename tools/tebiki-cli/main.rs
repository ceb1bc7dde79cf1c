use clap::Parser;
use tebiki::event::EventMeta;
use tebiki::prelude::*;
use std::fs;
use std::io::{self, Write};

/// A validation and navigation CLI for linear business-process playbooks
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the playbook document JSON file
    playbook_path: Option<String>,

    /// Path to write the finished event record JSON to
    #[arg(short, long)]
    event_out: Option<String>,

    /// Walk the chain interactively, answering parameters as you go
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    let cli = Cli::parse();

    let document = match &cli.playbook_path {
        Some(path) => PlaybookDocument::from_file(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to load playbook from '{}': {}", path, e))
        }),
        None => {
            println!("No playbook file provided. Using default mock playbook.");
            PlaybookDocument::default()
        }
    };

    let playbook = document
        .into_playbook()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert playbook: {}", e)));
    let chain = ChainBuilder::new(playbook)
        .build()
        .unwrap_or_else(|e| exit_with_error(&format!("Chain validation failed: {}", e)));

    println!(
        "Validated '{}': {} processes",
        chain.playbook_name(),
        chain.len()
    );
    println!("  -> {}", OutlineFormatter::format_chain(&chain));

    if cli.human {
        run_walk(chain, cli.event_out);
    }
}

/// Steps through the chain interactively, prompting for each parameter and
/// finishing into an event record.
fn run_walk(chain: ProcessChain, event_out: Option<String>) {
    let total = chain.len();
    let mut navigator = Navigator::new(chain);

    loop {
        let view = navigator.view();
        println!(
            "\n{}",
            OutlineFormatter::format_step(navigator.current_step(), view.position, total)
        );
        if let Some(description) = &view.process.description {
            println!("  {}", description);
        }

        let parameters: Vec<ParameterDefinition> = view.parameters().cloned().collect();
        for parameter in &parameters {
            prompt_for_response(&mut navigator, parameter);
        }

        if navigator.at_end() {
            println!("\nEnd of chain reached.");
            break;
        }
        let answer = prompt_for_input("Continue? [n]ext / [b]ack / [s]ave", Some("n"));
        match answer.trim() {
            "b" => {
                if navigator.retreat().is_none() {
                    println!("Already at the first process.");
                }
            }
            "s" => break,
            _ => {
                navigator.advance();
            }
        }
    }

    let name = prompt_for_input("Event name", Some("Walkthrough"));
    let owner_id = prompt_for_input("Owner id", Some("local-user"));
    let event = navigator
        .finish(EventMeta {
            name,
            description: None,
            owner_id,
        })
        .unwrap_or_else(|e| exit_with_error(&format!("Could not finish walk: {}", e)));

    let json = event
        .to_json()
        .unwrap_or_else(|e| exit_with_error(&format!("Could not serialize event: {}", e)));

    match event_out {
        Some(path) => {
            fs::write(&path, json).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write event to '{}': {}", path, e))
            });
            println!("Saved event record to '{}'", path);
        }
        None => println!("\n{}", json),
    }
}

/// Prompts until a response parses and validates for the parameter's kind.
/// An empty answer skips optional parameters.
fn prompt_for_response(navigator: &mut Navigator, parameter: &ParameterDefinition) {
    if let ParameterKind::Checklist { options } = &parameter.kind {
        println!("  choices: {}", options.join(", "));
    }

    loop {
        let suffix = if parameter.mandatory { "" } else { " (optional)" };
        let answer = prompt_for_input(&format!("{}{}", parameter.prompt, suffix), None);
        if answer.is_empty() && !parameter.mandatory {
            return;
        }

        let value = match &parameter.kind {
            ParameterKind::Checklist { .. } => {
                ResponseValue::Selection(
                    answer
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect(),
                )
            }
            ParameterKind::Scale { .. } => match answer.trim().parse::<i64>() {
                Ok(v) => ResponseValue::Scale(v),
                Err(_) => {
                    println!("Please enter a whole number.");
                    continue;
                }
            },
            ParameterKind::Number { .. } => match answer.trim().parse::<f64>() {
                Ok(v) => ResponseValue::Number(v),
                Err(_) => {
                    println!("Please enter a number.");
                    continue;
                }
            },
            ParameterKind::Text => ResponseValue::Text(answer.clone()),
        };

        match navigator.record(&parameter.id, value) {
            Ok(()) => return,
            Err(e) => println!("{}", e),
        }
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
