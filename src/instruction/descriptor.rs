use std::fmt;

use super::{
    DecodedInstruction, Format, Instruction,
    codec::{Codec, Role},
};
use crate::error::{EncodeError, RegistryError};

/// The secondary field telling apart instructions that share an opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Discriminant {
    None,
    /// Opcodes 0x00 (SPECIAL) and 0x1c (SPECIAL2)
    Funct(u8),
    /// Opcode 0x01 (REGIMM)
    Rt(u8),
}

/// What sort of instruction a descriptor names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Branch,
    Trap,
    Jump,
    JumpAndLink,
    Shift,
    Load,
    Store,
    Exception,
}

/// A canonical mnemonic and the word it encodes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example {
    pub mnemonic: &'static str,
    pub word: u32,
}

/// The immutable template of one instruction: how its word is laid out,
/// how it is written and how it is told apart from its neighbours.
#[derive(Debug, Clone)]
pub struct InstructionDescriptor {
    name: &'static str,
    opcode: u8,
    discriminant: Discriminant,
    format: Format,
    pattern: &'static str,
    codec: Codec,
    kind: Option<Kind>,
    description: &'static str,
    example: Option<Example>,
}

impl InstructionDescriptor {
    /// Starts describing instruction `name`, written as `pattern`, e.g.
    /// `"iname rd, rs, rt"`.
    pub fn builder(
        name: &'static str,
        opcode: u8,
        format: Format,
        pattern: &'static str,
    ) -> DescriptorBuilder {
        DescriptorBuilder {
            name,
            opcode,
            format,
            pattern,
            discriminant: Discriminant::None,
            kind: None,
            description: "",
            example: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    pub fn discriminant(&self) -> Discriminant {
        self.discriminant
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// The operand roles, in the order they are written
    pub fn roles(&self) -> &[Role] {
        self.codec.roles()
    }

    pub fn kind(&self) -> Option<Kind> {
        self.kind
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn example(&self) -> Option<Example> {
        self.example
    }

    pub(crate) fn codec(&self) -> &Codec {
        &self.codec
    }

    /// Renders `word` as this instruction
    pub fn decode(&self, word: u32) -> DecodedInstruction<'_> {
        self.codec.render(self, word)
    }

    /// Reads `text` as this instruction
    pub fn encode(&self, text: &str) -> Result<Instruction<'_>, EncodeError> {
        self.codec.parse(self, text)
    }
}

impl PartialEq for InstructionDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.opcode == other.opcode
            && self.discriminant == other.discriminant
            && self.format == other.format
    }
}

impl Eq for InstructionDescriptor {}

impl fmt::Display for InstructionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pattern.replacen("iname", self.name, 1))
    }
}

pub struct DescriptorBuilder {
    name: &'static str,
    opcode: u8,
    format: Format,
    pattern: &'static str,
    discriminant: Discriminant,
    kind: Option<Kind>,
    description: &'static str,
    example: Option<Example>,
}

impl DescriptorBuilder {
    pub fn funct(mut self, funct: u8) -> Self {
        self.discriminant = Discriminant::Funct(funct);
        self
    }

    pub fn rt(mut self, rt: u8) -> Self {
        self.discriminant = Discriminant::Rt(rt);
        self
    }

    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub fn example(mut self, mnemonic: &'static str, word: u32) -> Self {
        self.example = Some(Example { mnemonic, word });
        self
    }

    /// Checks the pattern against the format and freezes the descriptor
    pub fn build(self) -> Result<InstructionDescriptor, RegistryError> {
        let codec = Codec::new(self.format, self.pattern)?;

        Ok(InstructionDescriptor {
            name: self.name,
            opcode: self.opcode,
            discriminant: self.discriminant,
            format: self.format,
            pattern: self.pattern,
            codec,
            kind: self.kind,
            description: self.description,
            example: self.example,
        })
    }
}
