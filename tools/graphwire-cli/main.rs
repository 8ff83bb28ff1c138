use clap::{Parser, Subcommand, ValueEnum};
use graphwire::model::is_editor_document;
use graphwire::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// The two document shapes the CLI understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatCli {
    /// Editor workflow with `nodes` and `edges`
    Editor,
    /// Execution API workflow keyed by node id
    Api,
}

/// Convert node-graph workflows between the editor and execution API formats
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log every synthesized edge and wired input
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert an editor workflow to the execution API format
    ToApi {
        /// Path to the editor workflow JSON file
        input: PathBuf,
        /// Where to write the result (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Fail on malformed graphs instead of converting best-effort
        #[arg(long)]
        strict: bool,
        /// Ignore `edges` and use only each node's own inputs
        #[arg(long)]
        no_merge_edges: bool,
    },
    /// Convert an execution API workflow to the editor format
    ToEditor {
        /// Path to the execution workflow JSON file
        input: PathBuf,
        /// Where to write the result (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Fail on non-numeric node ids and dangling connections
        #[arg(long)]
        strict: bool,
    },
    /// Report every structural problem in a workflow
    Validate {
        /// Path to the workflow JSON file
        input: PathBuf,
        /// Document format (detected from the content if omitted; pass it
        /// explicitly for an API workflow with a node keyed "nodes")
        #[arg(short, long, value_enum)]
        format: Option<FormatCli>,
    },
    /// Print a readable listing of the workflow's nodes and wiring
    Summary {
        /// Path to the workflow JSON file
        input: PathBuf,
        /// Document format (detected from the content if omitted; pass it
        /// explicitly for an API workflow with a node keyed "nodes")
        #[arg(short, long, value_enum)]
        format: Option<FormatCli>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::ToApi {
            input,
            output,
            strict,
            no_merge_edges,
        } => {
            let converter = Converter::builder()
                .strict(strict)
                .merge_edges(!no_merge_edges)
                .build();
            run_to_api(&input, output.as_deref(), &converter);
        }
        Command::ToEditor {
            input,
            output,
            strict,
        } => {
            let converter = Converter::builder().strict(strict).build();
            run_to_editor(&input, output.as_deref(), &converter);
        }
        Command::Validate { input, format } => run_validate(&input, format),
        Command::Summary { input, format } => run_summary(&input, format),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_to_api(input: &Path, output: Option<&Path>, converter: &Converter) {
    let start = Instant::now();
    let workflow = EditorWorkflow::from_file(input)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load editor workflow: {}", e)));

    let api = converter
        .to_execution_format(&workflow)
        .unwrap_or_else(|e| exit_with_error(&format!("Conversion failed: {}", e)));
    info!(
        nodes = api.len(),
        edges = workflow.edges.len(),
        elapsed = ?start.elapsed(),
        "converted editor workflow to execution format"
    );

    let json = api
        .to_json_pretty()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize result: {}", e)));
    write_output(output, &json);
}

fn run_to_editor(input: &Path, output: Option<&Path>, converter: &Converter) {
    let start = Instant::now();
    let api = ExecutionWorkflow::from_file(input)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load execution workflow: {}", e)));

    let workflow = converter
        .to_editor_format(&api)
        .unwrap_or_else(|e| exit_with_error(&format!("Conversion failed: {}", e)));
    info!(
        nodes = workflow.nodes.len(),
        edges = workflow.edges.len(),
        elapsed = ?start.elapsed(),
        "converted execution workflow to editor format"
    );

    let json = workflow
        .to_json_pretty()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize result: {}", e)));
    write_output(output, &json);
}

fn run_validate(input: &Path, format: Option<FormatCli>) {
    let (node_count, issues) = match load(input, format) {
        Loaded::Editor(workflow) => (workflow.nodes.len(), validate_editor(&workflow)),
        Loaded::Api(api) => (api.len(), validate_execution(&api)),
    };

    if issues.is_empty() {
        println!("No issues found in {} nodes.", node_count);
        return;
    }

    println!("Found {} issue(s):", issues.len());
    for issue in &issues {
        println!("  -> {}", issue);
    }
    std::process::exit(1);
}

fn run_summary(input: &Path, format: Option<FormatCli>) {
    let text = match load(input, format) {
        Loaded::Editor(workflow) => SummaryFormatter::format_editor(&workflow),
        Loaded::Api(api) => SummaryFormatter::format_execution(&api),
    };
    println!("{}", text);
}

enum Loaded {
    Editor(EditorWorkflow),
    Api(ExecutionWorkflow),
}

/// Reads a workflow of either format, sniffing the format when not given.
fn load(input: &Path, format: Option<FormatCli>) -> Loaded {
    let content = fs::read_to_string(input).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read '{}': {}", input.display(), e))
    });
    let format = format.unwrap_or_else(|| detect_format(&content));

    match format {
        FormatCli::Editor => Loaded::Editor(
            EditorWorkflow::from_json(&content).unwrap_or_else(|e| exit_with_error(&e.to_string())),
        ),
        FormatCli::Api => Loaded::Api(
            ExecutionWorkflow::from_json(&content)
                .unwrap_or_else(|e| exit_with_error(&e.to_string())),
        ),
    }
}

fn detect_format(content: &str) -> FormatCli {
    let raw: serde_json::Value = serde_json::from_str(content)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse workflow JSON: {}", e)));
    if is_editor_document(&raw) {
        FormatCli::Editor
    } else {
        FormatCli::Api
    }
}

fn write_output(output: Option<&Path>, json: &str) {
    match output {
        Some(path) => {
            fs::write(path, json).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write '{}': {}", path.display(), e))
            });
            println!("Wrote '{}'", path.display());
        }
        None => println!("{}", json),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
