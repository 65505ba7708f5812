#![deny(missing_docs)]
//! A command-line interface for the Enigma rotor machine.

use clap::{Args, Parser, Subcommand};
use enigma_core::{Machine, catalog};
use log::{error, info};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Encode a message with rotors I, II, III at positions m, c, k\nenigma-cli --positions mck encode enigmarevealed\n\n# Decode it again with the same settings\nenigma-cli --positions mck decode qmjidomzwzsfjr\n\n# Encode a file, dropping spaces and punctuation first\nenigma-cli --rotors IV,V,II --reflector C encode --strip --input ./message.txt --output ./message.enc\n\n# List the available rotors and reflectors\nenigma-cli catalog"
)]
struct Cli {
    /// Rotor names from the catalog, leftmost first.
    #[arg(long, global = true, value_delimiter = ',', default_values = ["I", "II", "III"])]
    rotors: Vec<String>,

    /// Reflector name from the catalog.
    #[arg(long, global = true, default_value = "B")]
    reflector: String,

    /// Start positions as three letters, leftmost first.
    #[arg(long, global = true, default_value = "aaa")]
    positions: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text with the configured machine
    Encode(TextArgs),
    /// Decode text with the configured machine
    Decode(TextArgs),
    /// List the rotors and reflectors in the catalog
    Catalog,
}

#[derive(Args)]
struct TextArgs {
    /// The text to process. If omitted, it is read from --input or stdin.
    #[arg(conflicts_with = "input")]
    text: Option<String>,

    /// Path to a file holding the text. Trailing line breaks are ignored.
    #[arg(short, long, value_name = "INPUT_FILE")]
    input: Option<PathBuf>,

    /// Path to write the result to. If omitted, the result is printed.
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    output: Option<PathBuf>,

    /// Lowercase every ASCII letter and drop all other characters first.
    #[arg(long)]
    strip: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Catalog => print_catalog(),
        Commands::Encode(args) => process(&cli, args, "Encoding"),
        Commands::Decode(args) => process(&cli, args, "Decoding"),
    }
}

fn print_catalog() {
    println!("Rotors:");
    for spec in catalog::ROTORS {
        println!("  {:<5} {}  notch {}", spec.name, spec.wiring, spec.notch);
    }
    println!();
    println!("Reflectors:");
    for spec in catalog::REFLECTORS {
        println!("  {:<5} {}", spec.name, spec.wiring);
    }
}

fn process(cli: &Cli, args: &TextArgs, action: &str) {
    let mut machine = build_machine(cli);

    let raw = read_text(args).unwrap_or_else(|e| {
        error!("Failed to read input: {e}");
        std::process::exit(1);
    });
    let text = if args.strip { strip(&raw) } else { raw };

    info!(
        "{action} {} letters with rotors {} and reflector {} from '{}'",
        text.chars().count(),
        cli.rotors.join(","),
        cli.reflector,
        machine.positions()
    );
    let result = machine.encode(&text).unwrap_or_else(|e| {
        error!("{action} failed: {e}");
        std::process::exit(1);
    });
    info!("Rotors finished at '{}'", machine.positions());

    match &args.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &result) {
                error!("Failed to write output file '{}': {e}", path.display());
                std::process::exit(1);
            }
            info!("Result written to '{}'", path.display());
        }
        None => println!("{result}"),
    }
}

fn build_machine(cli: &Cli) -> Machine {
    let names: Vec<&str> = cli.rotors.iter().map(String::as_str).collect();
    let Ok(rotors) = <[&str; 3]>::try_from(names.as_slice()) else {
        error!("Exactly 3 rotors are required, got {}", names.len());
        std::process::exit(1);
    };
    Machine::from_catalog(rotors, &cli.reflector, &cli.positions).unwrap_or_else(|e| {
        error!("Invalid machine settings: {e}");
        std::process::exit(1);
    })
}

fn read_text(args: &TextArgs) -> io::Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    let content = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    Ok(content.trim_end_matches(['\r', '\n']).to_string())
}

fn strip(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
