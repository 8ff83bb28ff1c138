use clap::Parser;
use graphwire::prelude::*;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde_json::{Value, json};
use std::fs;

/// Node classes the generator draws from, with the sockets each one wires.
const NODE_CLASSES: &[(&str, &[&str])] = &[
    ("CheckpointLoaderSimple", &[]),
    ("CLIPTextEncode", &["clip"]),
    ("EmptyLatentImage", &[]),
    ("KSampler", &["model", "positive", "negative", "latent_image"]),
    ("VAEDecode", &["samples", "vae"]),
    ("SaveImage", &["images"]),
];

const PROMPT_WORDS: &[&str] = &[
    "castle", "forest", "sunset", "portrait", "neon", "watercolor", "mountain", "harbor",
];

/// A CLI tool to generate well-formed execution workflows for fixtures and benchmarks
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_workflow.json")]
    output: String,

    /// How many nodes to generate
    #[arg(short, long, default_value_t = 12)]
    nodes: u32,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Write the editor format instead of the execution format
    #[arg(long)]
    editor: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.nodes == 0 {
        eprintln!("Error: --nodes must be at least 1");
        std::process::exit(1);
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!("Generating a workflow with {} nodes...", cli.nodes);
    let api = generate_workflow(&mut rng, cli.nodes);

    let json_output = if cli.editor {
        to_editor_format(&api).to_json_pretty()?
    } else {
        api.to_json_pretty()?
    };
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved workflow to '{}'",
        cli.output
    );

    Ok(())
}

/// Node 1 is always a checkpoint loader so every later socket has a source.
/// Every connection points at an earlier node, so the graph is acyclic.
fn generate_workflow(rng: &mut StdRng, count: u32) -> ExecutionWorkflow {
    let mut workflow = ExecutionWorkflow::new();

    for id in 1..=count {
        let (class_type, sockets) = if id == 1 {
            NODE_CLASSES[0]
        } else {
            *NODE_CLASSES.choose(rng).unwrap_or(&NODE_CLASSES[0])
        };

        let mut node = ExecutionNode::new(class_type);
        for (name, value) in literal_inputs(rng, class_type) {
            node = node.with_input(name, InputValue::Literal(value));
        }
        for socket in sockets {
            let source = rng.random_range(1..id);
            let output = rng.random_range(0..3);
            node = node.with_input(*socket, InputValue::connection(source, output));
        }
        if rng.random_bool(0.3) {
            node = node.with_title(format!("{} #{}", class_type, id));
        }

        workflow.insert(id, node);
    }

    workflow
}

fn literal_inputs(rng: &mut StdRng, class_type: &str) -> Vec<(&'static str, Value)> {
    match class_type {
        "CheckpointLoaderSimple" => vec![(
            "ckpt_name",
            json!(format!("model_{}.safetensors", rng.random_range(1..=5))),
        )],
        "CLIPTextEncode" => {
            let words: Vec<&str> = (0..4)
                .filter_map(|_| PROMPT_WORDS.choose(rng).copied())
                .collect();
            vec![("text", json!(words.join(", ")))]
        }
        "EmptyLatentImage" => {
            let side = *[512, 768, 1024].choose(rng).unwrap_or(&512);
            vec![
                ("width", json!(side)),
                ("height", json!(side)),
                ("batch_size", json!(1)),
            ]
        }
        "KSampler" => vec![
            ("seed", json!(rng.random::<u32>())),
            ("steps", json!(rng.random_range(10..=50))),
            ("cfg", json!(rng.random_range(10..=120) as f64 / 10.0)),
            (
                "sampler_name",
                json!(*["euler", "euler_ancestral", "dpmpp_2m"].choose(rng).unwrap_or(&"euler")),
            ),
            ("scheduler", json!("normal")),
            ("denoise", json!(1.0)),
        ],
        "SaveImage" => vec![("filename_prefix", json!("graphwire"))],
        _ => vec![],
    }
}
