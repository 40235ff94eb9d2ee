//! Translation between MIPS32 machine words and their mnemonics.
//!
//! ```
//! let instruction = mips_codec::encode("addi $sp, $sp, -8").unwrap();
//! assert_eq!(instruction.word(), 0x23bd_fff8);
//!
//! let decoded = mips_codec::decode(0x23bd_fff8);
//! assert_eq!(decoded.mnemonic(), Some("addi $sp, $sp, -8"));
//! ```

pub mod bits;
pub mod error;
pub mod instruction;
pub mod mnemonic;
pub mod register;
pub mod shell;

#[cfg(test)]
mod test_utils;

pub use error::{EncodeError, LiteralError, RegistryError, SyntaxError};
pub use instruction::{
    DecodedInstruction, Format, Hint, Instruction, InstructionDescriptor,
    Registry,
};
pub use mnemonic::mnemonic_equals;
pub use register::Register;

/// Decodes `word` with the registry of every supported instruction.
pub fn decode(word: u32) -> DecodedInstruction<'static> {
    Registry::global().decode(word)
}

/// Encodes `text` with the registry of every supported instruction.
pub fn encode(text: &str) -> Result<Instruction<'static>, EncodeError> {
    Registry::global().encode(text)
}
