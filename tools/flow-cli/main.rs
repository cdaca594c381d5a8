use clap::{Parser, ValueEnum};
use signalvault::prelude::*;
use std::fs;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// How the built graph is printed.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

/// Builds an emergency flow graph from a document-flow payload
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the document-flow JSON payload
    flow_path: Option<String>,

    /// Optional TOML file overriding the default flow policy
    #[arg(short, long)]
    policy: Option<String>,

    /// How to print the resulting graph
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Present a search response JSON file instead of building a flow graph
    #[arg(short, long, conflicts_with = "flow_path")]
    search: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(search_path) = cli.search {
        run_search(&search_path);
        return;
    }

    let flow_path = cli.flow_path.unwrap_or_else(|| {
        exit_with_error("A flow payload path is required (or use --search <file>).")
    });
    run_flow(&flow_path, cli.policy.as_deref(), cli.format);
}

fn run_flow(flow_path: &str, policy_path: Option<&str>, format: OutputFormat) {
    let start = Instant::now();

    let policy = match policy_path {
        Some(path) => FlowPolicy::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load policy: {}", e))),
        None => FlowPolicy::default(),
    };

    let payload = fs::read_to_string(flow_path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read flow file '{}': {}", flow_path, e))
    });

    let flow = DocumentFlow::from_json_lenient(&payload);
    let graph = FlowView::new(policy).load(&flow);

    match format {
        OutputFormat::Json => {
            let json = graph
                .to_json()
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialise graph: {}", e)));
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("Document: {}", display_or_dash(&flow.filename));
            println!("Query:    {}", display_or_dash(&flow.query));
            println!("Raw steps: {}\n", flow.steps.len());
            println!("{}", visualize_graph(&graph));
            println!("\nBuilt in {:?}", start.elapsed());
        }
    }
}

fn run_search(search_path: &str) {
    let payload = fs::read_to_string(search_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read search response '{}': {}",
            search_path, e
        ))
    });

    let outcome = SearchView::present_json(&payload);
    println!("{}\n", outcome.status);
    for entry in &outcome.entries {
        let link = if entry.clickable { " [flow]" } else { "" };
        match entry.score {
            Some(score) => println!("📄 {} (score {}){}", entry.title, score, link),
            None => println!("📄 {}", entry.title),
        }
        if !entry.snippet.is_empty() {
            println!("   {}", entry.snippet);
        }
    }
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
