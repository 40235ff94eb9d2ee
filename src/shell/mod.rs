pub mod commands;

use clap::Parser;
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::debug;

use crate::{
    error::EncodeError,
    instruction::{DecodedInstruction, Instruction, Registry},
    register::Register,
};

pub use commands::{ShellArgs, ShellCommand};

const HISTORY_FILE: &str = ".mips_history";

/// Column titles of the table printed by `decode`
pub const HEADER: &str = "word       fmt  decimal                      \
                          hexadecimal                  mnemonic";

/// One table row for a decoded word: the word, its format, both
/// decompositions and the mnemonic. Violations follow the mnemonic.
pub fn render_row(decoded: &DecodedInstruction) -> String {
    let word = decoded.word();
    let format = decoded.format();

    let (decimal, hexadecimal) = match format {
        Some(format) => {
            let decomposition = format.decompose(word);
            (decomposition.decimal(), decomposition.hexadecimal())
        }
        None => ("-".to_string(), "-".to_string()),
    };
    let format = format.map_or_else(|| "?".to_string(), |f| f.to_string());
    let mnemonic = decoded.mnemonic().unwrap_or("<unrecognized>");

    let mut row = format!(
        "0x{word:08x} {format:<4} {decimal:<28} {hexadecimal:<28} {mnemonic}"
    );

    let violations = decoded.violations();
    if !violations.is_empty() {
        row.push_str(&format!("  ({})", violations.join("; ")));
    }

    row
}

/// The outcome of `encode`, as printed to the user
pub fn render_encoded(result: &Result<Instruction, EncodeError>) -> String {
    match result {
        Ok(instruction) => {
            format!("0x{:08x}  {}", instruction.word(), instruction.mnemonic())
        }
        Err(err) => format!("error: {err}"),
    }
}

/// One line per instruction: its name, its operand pattern and what it does
pub fn render_listing(registry: &Registry) -> Vec<String> {
    registry
        .descriptors()
        .map(|descriptor| {
            format!(
                "{:<8} {:<8} {:<28} {}",
                descriptor.name(),
                descriptor.format().to_string(),
                descriptor.to_string(),
                descriptor.description()
            )
        })
        .collect()
}

/// One line per register: its name, its index and its conventional use
pub fn render_registers() -> Vec<String> {
    Register::all()
        .map(|register| {
            format!(
                "{:>5}  ${:<2}  {}",
                register.name(),
                register.index(),
                register.description()
            )
        })
        .collect()
}

/// An interactive loop reading commands from the terminal.
pub struct Shell {
    /// Rustyline instance for command line input, with no special
    /// configuration.
    editor: DefaultEditor,

    registry: &'static Registry,
}

impl Shell {
    pub fn new() -> Result<Self, ReadlineError> {
        let mut editor = DefaultEditor::new()?;
        if let Err(err) = editor.load_history(HISTORY_FILE) {
            debug!(%err, "no shell history loaded");
        }

        Ok(Shell {
            editor,
            registry: Registry::global(),
        })
    }

    /// Reads and runs commands until the user quits
    pub fn run(&mut self) {
        loop {
            // Ctrl-C or Ctrl-D
            let Some(line) = self.read_line() else {
                break;
            };

            if line.is_empty() {
                continue;
            }

            match ShellArgs::try_parse_from(line.split_whitespace()) {
                Ok(args) => {
                    if self.handle_command(args.command) {
                        break;
                    }
                }
                Err(e) => {
                    // Unknown command or bad arguments, show clap's message
                    let _ = e.print();
                }
            }
        }

        if let Err(err) = self.editor.save_history(HISTORY_FILE) {
            debug!(%err, "could not save shell history");
        }
    }

    /// Runs one command. Returns true when the shell should exit.
    fn handle_command(&mut self, command: ShellCommand) -> bool {
        match command {
            ShellCommand::Decode { words } => {
                println!("{HEADER}");
                for word in words {
                    println!("{}", render_row(&self.registry.decode(word)));
                }
            }
            ShellCommand::Encode { mnemonic } => {
                let text = mnemonic.join(" ");
                println!("{}", render_encoded(&self.registry.encode(&text)));
            }
            ShellCommand::List => {
                for line in render_listing(self.registry) {
                    println!("{line}");
                }
            }
            ShellCommand::Registers => {
                for line in render_registers() {
                    println!("{line}");
                }
            }
            ShellCommand::Quit => return true,
        }

        false
    }

    /// Read a line from the user
    fn read_line(&mut self) -> Option<String> {
        match self.editor.readline("> ") {
            Ok(line) => {
                let line = line.trim().to_string();

                // Add the line to the history
                let _ = self.editor.add_history_entry(&line);

                Some(line)
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => None,
            Err(err) => {
                println!("Error reading line: {err}");
                Some(String::new())
            }
        }
    }
}
