//! Sketch - circuit-to-firmware compiler
//!
//! Compiles a circuit sketch file into microcontroller source.
//!
//! # Usage
//!
//! ```bash
//! sketch blink.sketch -o blink.ino
//! sketch blink.sketch --used-pins
//! ```

use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};

use circuit_sketch::{
    circuit::{available_pins, used_pins},
    codegen::{compile_with, CodegenConfig},
    dsl,
    error::{Result, SketchError},
    Circuit, ComponentKind, PinId,
};

/// Circuit sketch compiler
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the sketch description file
    #[arg(value_name = "SKETCH_FILE")]
    sketch_file: PathBuf,

    /// Write generated source to this file instead of stdout
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Omit the explanatory comments from generated source
    #[arg(long)]
    no_comments: bool,

    /// Print claimed and free pins instead of generated source
    #[arg(long)]
    used_pins: bool,

    /// Enable debug messages
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if args.verbose {
        builder.filter(None, log::LevelFilter::Debug);
    } else {
        builder.filter(None, log::LevelFilter::Warn);
    }
    builder.init();

    // Parse the sketch file
    let ast = dsl::parse_file(&args.sketch_file)?;
    let pin_space: Vec<PinId> = match &ast.pins {
        Some(pins) => pins.iter().map(|p| PinId::new(p.as_str())).collect(),
        None => PinId::reference_set(),
    };

    // Build the circuit
    let circuit = Circuit::from_sketch(ast)?;
    info!(
        "loaded {} components from {}",
        circuit.len(),
        args.sketch_file.display()
    );

    if args.used_pins {
        print_pin_report(&circuit, &pin_space);
        return Ok(());
    }

    let config = CodegenConfig::new().with_annotations(!args.no_comments);
    let source = compile_with(&circuit, &config);

    match &args.output {
        Some(path) => {
            std::fs::write(path, &source).map_err(|e| SketchError::OutputError {
                path: path.display().to_string(),
                source: e,
            })?;
            info!("wrote {}", path.display());
        }
        None => print!("{}", source),
    }

    Ok(())
}

fn print_pin_report(circuit: &Circuit, pin_space: &[PinId]) {
    let used = used_pins(circuit);
    for pin in used.iter().filter(|pin| !pin_space.contains(*pin)) {
        warn!("pin {} is outside the pin space", pin);
    }

    let join = |pins: Vec<String>| pins.join(" ");
    println!(
        "used: {}",
        join(used.iter().map(PinId::to_string).collect())
    );
    println!(
        "free: {}",
        join(
            available_pins(circuit, ComponentKind::Light, pin_space)
                .iter()
                .map(PinId::to_string)
                .collect()
        )
    );
}
