use clap::Parser;
use rand::{Rng, rngs::ThreadRng, seq::IndexedRandom};
use serde_json::{Value, json};
use signalvault::policy::DEFAULT_MAX_STEP_LENGTH;
use std::fs;

/// A CLI tool to generate noisy document-flow payloads for the flow builder
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_flow.json")]
    output: String,

    /// The minimum number of raw steps to generate
    #[arg(long, default_value_t = 0)]
    min: usize,

    /// The maximum number of raw steps to generate
    #[arg(long, default_value_t = 12)]
    max: usize,

    /// Probability that any generated step is noise rather than an action
    #[arg(long, default_value_t = 0.35)]
    noise: f64,
}

const ACTIONS: &[&str] = &[
    "Apply firm pressure to the wound with a clean cloth.",
    "Check whether the person is breathing.",
    "Call emergency services and give your exact location.",
    "Move to higher ground away from moving water.",
    "Cover your nose and mouth with a damp cloth.",
    "Rinse the burn under cool running water for 20 minutes.",
    "Keep the injured person warm and still.",
    "Signal rescuers with a whistle or a bright cloth.",
    "Turn off gas and electricity at the mains if it is safe.",
    "Stay low to the floor to avoid smoke.",
];

const BOILERPLATE: &[&str] = &[
    "Note: this guide does not replace professional medical advice.",
    "See also: Chapter 4, Shelter.",
    "Copyright 2021 Regional Emergency Office. All rights reserved.",
    "NOTE that local procedures may differ.",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.min > cli.max {
        eprintln!(
            "Error: --min ({}) cannot be greater than --max ({})",
            cli.min, cli.max
        );
        std::process::exit(1);
    }
    if !(0.0..=1.0).contains(&cli.noise) {
        eprintln!("Error: --noise must be between 0 and 1, got {}", cli.noise);
        std::process::exit(1);
    }

    let count = rng.random_range(cli.min..=cli.max);
    println!("Generating {} raw step(s) (noise ratio {})...", count, cli.noise);

    let steps: Vec<Value> = (0..count)
        .map(|_| {
            if rng.random_bool(cli.noise) {
                generate_noise(&mut rng)
            } else {
                generate_action(&mut rng)
            }
        })
        .collect();

    let payload = json!({
        "filename": "generated_guide.txt",
        "query": "emergency",
        "steps": steps,
    });

    fs::write(&cli.output, serde_json::to_string_pretty(&payload)?)?;
    println!(
        "Successfully generated and saved flow payload to '{}'",
        cli.output
    );

    Ok(())
}

fn generate_action(rng: &mut ThreadRng) -> Value {
    let action = ACTIONS.choose(rng).copied().unwrap_or("Stay calm.");
    Value::String(action.to_string())
}

/// One of the kinds of junk extraction is known to emit.
fn generate_noise(rng: &mut ThreadRng) -> Value {
    match rng.random_range(0..4) {
        0 => Value::String(BOILERPLATE.choose(rng).copied().unwrap_or("Note.").to_string()),
        1 => Value::String(generate_prose(rng)),
        2 => Value::String(String::new()),
        _ => Value::Null,
    }
}

/// Joins random actions into a paragraph at least as long as the default
/// step-length threshold.
fn generate_prose(rng: &mut ThreadRng) -> String {
    let mut prose = String::new();
    while prose.chars().count() < DEFAULT_MAX_STEP_LENGTH {
        if !prose.is_empty() {
            prose.push(' ');
        }
        prose.push_str(ACTIONS.choose(rng).copied().unwrap_or("Stay calm."));
    }
    prose
}
