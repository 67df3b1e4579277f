use clap::{Parser, Subcommand};
use nagare::prelude::*;
use std::process::ExitCode;

/// Inspect a persisted workflow snapshot: validate its structure or print
/// the execution-time analytics the editor's charts would render.
#[derive(Parser)]
#[command(name = "nagare-cli", version, about)]
struct Cli {
    /// Path to the workflow snapshot JSON file
    workflow: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run structural validation and print the error report
    Validate,
    /// Print the per-node, cumulative, and per-type analytics tables
    Stats,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (_, store) = PersistenceManager::open(Box::new(FileStore::new(&cli.workflow)));
    if store.nodes().is_empty() && store.edges().is_empty() {
        println!(
            "No workflow found at '{}' (missing or unreadable snapshot); treating as empty.",
            cli.workflow
        );
    }

    match cli.command {
        Command::Validate => run_validate(&store),
        Command::Stats => run_stats(&store),
    }
}

fn run_validate(store: &GraphStore) -> ExitCode {
    let report = validate(&store.snapshot());
    println!(
        "Validated {} node(s) and {} edge(s).",
        store.nodes().len(),
        store.edges().len()
    );
    if report.is_clean() {
        println!("Workflow is structurally valid.");
        return ExitCode::SUCCESS;
    }
    println!("Validation errors:");
    for error in &report.errors {
        println!("  - {}", error);
    }
    ExitCode::FAILURE
}

fn run_stats(store: &GraphStore) -> ExitCode {
    let analytics = aggregate(store.nodes());

    println!("Execution time per node:");
    for (point, cumulative) in analytics.per_node.iter().zip(&analytics.cumulative) {
        println!(
            "  {:<24} {:>10.1} ms  (cumulative {:>10.1} ms)",
            point.label, point.value, cumulative
        );
    }

    println!("Execution time by node type:");
    for slice in &analytics.per_type {
        println!("  {:<24} {:>10.1} ms", slice.kind, slice.total);
    }

    println!("Total: {:.1} ms", analytics.total);
    ExitCode::SUCCESS
}
