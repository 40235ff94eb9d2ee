pub mod codec;
pub mod decoded;
pub mod descriptor;
pub mod format;
pub mod hint;
pub mod registry;
mod table;
pub mod word;

use std::fmt;

pub use codec::Role;
pub use decoded::DecodedInstruction;
pub use descriptor::{Discriminant, Example, InstructionDescriptor, Kind};
pub use format::{Decomposition, Field, Fields, Format};
pub use hint::Hint;
pub use registry::Registry;
pub use word::MachineWord;

/// A concrete instruction: a machine word together with its mnemonic and
/// the descriptor both were derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction<'a> {
    descriptor: &'a InstructionDescriptor,
    word: u32,
    mnemonic: String,
    hint: Option<Hint>,
}

impl<'a> Instruction<'a> {
    pub(crate) fn new(
        descriptor: &'a InstructionDescriptor,
        word: u32,
        mnemonic: String,
        hint: Option<Hint>,
    ) -> Self {
        Instruction {
            descriptor,
            word,
            mnemonic,
            hint,
        }
    }

    /// Builds an instance of `descriptor` from operand field values.
    ///
    /// The opcode and discriminant always come from the descriptor, and
    /// fields no operand writes are left at zero, so the result is always
    /// a valid encoding. `Target` holds the raw field, already shifted for
    /// `jal`.
    pub fn instantiate(
        descriptor: &'a InstructionDescriptor,
        fields: &Fields,
    ) -> Self {
        let codec = descriptor.codec();
        let mut packed = codec.fixed_fields(descriptor);

        for (&field, &value) in fields {
            if codec.writes(field) {
                packed.insert(field, value);
            }
        }

        let word = descriptor.format().pack(&packed);
        let (mnemonic, hint) = codec.mnemonic(descriptor, word);

        Instruction::new(descriptor, word, mnemonic, hint)
    }

    pub fn descriptor(&self) -> &'a InstructionDescriptor {
        self.descriptor
    }

    pub fn name(&self) -> &'static str {
        self.descriptor.name()
    }

    pub fn format(&self) -> Format {
        self.descriptor.format()
    }

    pub fn word(&self) -> u32 {
        self.word
    }

    /// A typed view over the word's fields
    pub fn machine_word(&self) -> MachineWord {
        MachineWord::from(self.word)
    }

    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    /// The cache hint of a `pref`, when it is a known one
    pub fn hint(&self) -> Option<Hint> {
        self.hint
    }

    pub fn fields(&self) -> Fields {
        self.format().unpack(self.word)
    }

    pub fn decompose(&self) -> Decomposition {
        self.format().decompose(self.word)
    }
}

impl fmt::Display for Instruction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let decomposition = self.decompose();

        write!(
            f,
            "0x{:08x} {} {} {} {}",
            self.word,
            self.format(),
            decomposition.decimal(),
            decomposition.hexadecimal(),
            self.mnemonic
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_instantiate() {
        let registry = Registry::global();
        let add = registry.lookup_by_name("add").unwrap();

        let fields: Fields =
            [(Field::Rd, 9), (Field::Rs, 10), (Field::Rt, 11)].into();
        let instruction = Instruction::instantiate(add, &fields);

        assert_eq!(instruction.word(), r_type(0x20, 9, 11, 10));
        assert_eq!(instruction.mnemonic(), "add $t1, $t2, $t3");
    }

    #[test]
    fn test_instantiate_ignores_identity_and_stray_fields() {
        let registry = Registry::global();
        let jr = registry.lookup_by_name("jr").unwrap();

        let fields: Fields = [
            (Field::Opcode, 0x3f),
            (Field::Funct, 0x20),
            (Field::Rs, 31),
            (Field::Shamt, 5),
        ]
        .into();
        let instruction = Instruction::instantiate(jr, &fields);

        assert_eq!(instruction.word(), 0x03e0_0008);
        assert_eq!(instruction.mnemonic(), "jr $ra");
    }

    #[test]
    fn test_fields() {
        let instruction =
            Registry::global().encode("addi $sp, $sp, -8").unwrap();
        let fields = instruction.fields();

        assert_eq!(fields[&Field::Opcode], 8);
        assert_eq!(fields[&Field::Rs], 29);
        assert_eq!(fields[&Field::Rt], 29);
        assert_eq!(fields[&Field::Immediate], 0xfff8);
        assert_eq!(instruction.machine_word().simm16(), -8);
    }

    #[test]
    fn test_display() {
        let instruction =
            Registry::global().encode("mul $t1, $t0, $at").unwrap();

        assert_eq!(
            instruction.to_string(),
            "0x71014802 R [28 8 1 9 0 2] [0x1c 8 1 9 0 2] mul $t1, $t0, $at"
        );
    }
}
