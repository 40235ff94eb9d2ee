use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mips_codec::{
    Registry,
    shell::{self, Shell, commands::parse_word},
};

#[derive(Parser, Debug)]
#[command(
    name = "mips-codec",
    version,
    about = "MIPS32 assembler and disassembler"
)]
struct Args {
    /// Log what the codec is doing (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode machine words into mnemonics
    Decode {
        /// Words in decimal, 0x hex, 0b binary or 0d decimal
        #[arg(required = true, value_parser = parse_word)]
        words: Vec<u32>,

        /// Do not print the column titles
        #[arg(long)]
        headerless: bool,
    },
    /// Encode a mnemonic into a machine word
    Encode {
        /// The mnemonic, e.g. "add $t1, $t2, $t3"
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        mnemonic: Vec<String>,
    },
    /// List every supported instruction
    List,
    /// Start an interactive shell
    Shell,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let registry = Registry::global();

    match args.command {
        Command::Decode { words, headerless } => {
            if !headerless {
                println!("{}", shell::HEADER);
            }
            for word in words {
                println!("{}", shell::render_row(&registry.decode(word)));
            }
        }
        Command::Encode { mnemonic } => {
            let result = registry.encode(&mnemonic.join(" "));
            println!("{}", shell::render_encoded(&result));
            if result.is_err() {
                return ExitCode::FAILURE;
            }
        }
        Command::List => {
            for line in shell::render_listing(registry) {
                println!("{line}");
            }
        }
        Command::Shell => match Shell::new() {
            Ok(mut shell) => shell.run(),
            Err(err) => {
                eprintln!("Could not start the shell: {err}");
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}
