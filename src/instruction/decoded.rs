use super::Instruction;
use crate::instruction::Format;

/// The outcome of decoding a machine word. Decoding never fails: a word is
/// either recognized, recognized with suspicious field values, or not
/// recognized at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedInstruction<'a> {
    Valid(Instruction<'a>),

    /// The word names a known instruction, but fields its pattern requires
    /// to be zero are not. Violations are listed in a fixed order.
    PartiallyValid {
        instruction: Instruction<'a>,
        violations: Vec<String>,
    },

    /// No instruction uses this encoding. `format` is the format of the
    /// instructions sharing the word's opcode, when there are any.
    Unrecognized { word: u32, format: Option<Format> },
}

impl<'a> DecodedInstruction<'a> {
    pub fn word(&self) -> u32 {
        match self {
            DecodedInstruction::Valid(instruction)
            | DecodedInstruction::PartiallyValid { instruction, .. } => {
                instruction.word()
            }
            DecodedInstruction::Unrecognized { word, .. } => *word,
        }
    }

    pub fn instruction(&self) -> Option<&Instruction<'a>> {
        match self {
            DecodedInstruction::Valid(instruction)
            | DecodedInstruction::PartiallyValid { instruction, .. } => {
                Some(instruction)
            }
            DecodedInstruction::Unrecognized { .. } => None,
        }
    }

    pub fn into_instruction(self) -> Option<Instruction<'a>> {
        match self {
            DecodedInstruction::Valid(instruction)
            | DecodedInstruction::PartiallyValid { instruction, .. } => {
                Some(instruction)
            }
            DecodedInstruction::Unrecognized { .. } => None,
        }
    }

    pub fn mnemonic(&self) -> Option<&str> {
        self.instruction().map(Instruction::mnemonic)
    }

    /// The format the word was read in, or inferred from its opcode
    pub fn format(&self) -> Option<Format> {
        match self {
            DecodedInstruction::Unrecognized { format, .. } => *format,
            _ => self.instruction().map(Instruction::format),
        }
    }

    pub fn violations(&self) -> &[String] {
        match self {
            DecodedInstruction::PartiallyValid { violations, .. } => violations,
            _ => &[],
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, DecodedInstruction::Valid(_))
    }

    pub fn is_partially_valid(&self) -> bool {
        matches!(self, DecodedInstruction::PartiallyValid { .. })
    }

    pub fn is_unrecognized(&self) -> bool {
        matches!(self, DecodedInstruction::Unrecognized { .. })
    }
}
