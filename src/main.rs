use tebiki::prelude::*;
use std::env;
use std::fs;

fn main() {
    // Create output directory
    const TMP_DIR: &str = "tmp";
    if let Err(e) = fs::create_dir_all(TMP_DIR) {
        eprintln!("Failed to create tmp directory: {}", e);
        std::process::exit(1);
    }

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: cargo run -- [path/to/playbook.json]");
        std::process::exit(1);
    }

    // Load the playbook document
    let document = if let Some(playbook_path) = args.get(1) {
        println!("Loading playbook from: {}", playbook_path);
        match PlaybookDocument::from_file(playbook_path) {
            Ok(document) => document,
            Err(e) => {
                eprintln!("Failed to load playbook from '{}': {}", playbook_path, e);
                std::process::exit(1);
            }
        }
    } else {
        println!("No playbook file provided. Using default mock playbook.");
        PlaybookDocument::default()
    };

    // Conversion and chain building phase
    println!("\nValidating playbook chain...");

    let playbook = match document.into_playbook() {
        Ok(playbook) => playbook,
        Err(e) => {
            eprintln!("Failed to convert playbook document: {}", e);
            std::process::exit(1);
        }
    };

    let playbook_name = playbook.name.clone();
    let chain = match ChainBuilder::new(playbook).build() {
        Ok(chain) => chain,
        Err(e) => {
            eprintln!("Chain validation failed: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Validation successful! '{}' walks {} processes.",
        playbook_name,
        chain.len()
    );
    println!("  -> {}", OutlineFormatter::format_chain(&chain));

    for (position, step) in chain.iter().enumerate() {
        println!(
            "  {}",
            OutlineFormatter::format_step(step, position, chain.len())
        );
    }

    // Persist the validated walk order
    let snapshot_path = format!("{}/compiled_chain.bin", TMP_DIR);
    if let Err(e) = chain.to_compiled().save(&snapshot_path) {
        eprintln!("Failed to save chain snapshot: {}", e);
        std::process::exit(1);
    }
    println!("\n  -> Wrote chain snapshot to '{}'", snapshot_path);
}
