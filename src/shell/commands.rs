use clap::{Parser, Subcommand};

use crate::mnemonic::literal;

#[derive(Parser, Debug)]
#[command(multicall = true, name = "")]
pub struct ShellArgs {
    /// Shell command
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum ShellCommand {
    /// Decode one or more machine words
    #[command(name = "decode", alias = "d", about = "Decode machine words")]
    Decode {
        /// Words to decode, in decimal, 0x hex, 0b binary or 0d decimal
        #[arg(required = true, value_parser = parse_word)]
        words: Vec<u32>,
    },
    /// Encode a mnemonic into a machine word
    #[command(name = "encode", alias = "e", about = "Encode a mnemonic")]
    Encode {
        /// The mnemonic, e.g. add $t1, $t2, $t3
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        mnemonic: Vec<String>,
    },
    /// List every supported instruction
    #[command(name = "list", alias = "l", about = "List instructions")]
    List,
    /// Show the general-purpose registers and their conventional use
    #[command(
        name = "registers",
        alias = "r",
        about = "Show the registers"
    )]
    Registers,
    /// Quit the shell
    #[command(name = "quit", alias = "q", about = "Quit the shell")]
    Quit,
}

/// Reads a machine word written in any of the operand number bases
pub fn parse_word(text: &str) -> Result<u32, String> {
    literal::parse(text).map_err(|err| err.to_string())
}
