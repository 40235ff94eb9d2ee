use crate::instruction::Format;

/// Why an operand number could not be read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LiteralError {
    #[error("Empty numeric literal")]
    Empty,

    #[error("Invalid digit {digit:?} in numeric literal {text:?}")]
    InvalidDigit { text: String, digit: char },
}

/// What is wrong with the text of a mnemonic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("Empty mnemonic")]
    Empty,

    #[error("Illegal characters: {0:?}")]
    IllegalCharacters(Vec<char>),

    #[error("Parentheses are only allowed in I-format instructions")]
    IllegalParentheses,

    #[error("Expected {expected} arguments, got {actual}")]
    ArgumentCount { expected: usize, actual: usize },

    #[error("Expected {expected} commas, got {actual}")]
    CommaCount { expected: usize, actual: usize },

    #[error("Invalid register {0:?}")]
    InvalidRegister(String),

    #[error("Invalid number {text:?}: {source}")]
    InvalidNumber { text: String, source: LiteralError },

    #[error("Invalid address {0:?}, expected N(base)")]
    InvalidAddress(String),

    #[error("Unknown prefetch hint {0}")]
    UnknownHint(u32),
}

/// Why a mnemonic could not be turned into a machine word.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("Malformed mnemonic {mnemonic:?}: {reason}")]
    Malformed { mnemonic: String, reason: SyntaxError },

    #[error("Unknown instruction {0:?}")]
    UnknownInstruction(String),
}

impl EncodeError {
    /// The syntax problem, for malformed mnemonics
    pub fn syntax(&self) -> Option<&SyntaxError> {
        match self {
            EncodeError::Malformed { reason, .. } => Some(reason),
            EncodeError::UnknownInstruction(_) => None,
        }
    }
}

/// A mistake in an instruction table. These never depend on user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Instruction {0} shares its opcode but has no discriminant")]
    MissingDiscriminant(String),

    #[error("Instruction {name} has the same encoding as {existing}")]
    DuplicateKey { name: String, existing: String },

    #[error("Instruction {0} is already registered")]
    DuplicateName(String),

    #[error("Unknown role {role:?} in pattern {pattern:?}")]
    UnknownRole { pattern: String, role: String },

    #[error("Role {role} has no field in the {format} format")]
    RoleNotInFormat { role: String, format: Format },

    #[error("Pattern {0:?} does not start with iname")]
    MissingIname(String),
}
