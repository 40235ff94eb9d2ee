use std::{collections::HashMap, sync::LazyLock};

use tracing::{debug, trace};

use super::{
    DecodedInstruction, Format, Instruction, InstructionDescriptor,
    descriptor::Discriminant, table, word::MachineWord,
};
use crate::{
    error::{EncodeError, RegistryError, SyntaxError},
    mnemonic,
};

/// Opcode of the SPECIAL group, told apart by funct
const SPECIAL: u8 = 0x00;
/// Opcode of the REGIMM group, told apart by rt
const REGIMM: u8 = 0x01;
/// Opcode of the SPECIAL2 group, told apart by funct
const SPECIAL2: u8 = 0x1c;

/// The instruction owning the all-zero word
const NOP: &str = "nop";

static GLOBAL: LazyLock<Registry> = LazyLock::new(|| {
    Registry::primordial()
        .unwrap_or_else(|err| panic!("invalid instruction table: {err}"))
});

/// Lookup tables from names and machine words to instruction descriptors.
///
/// Words are looked up in one of four buckets, depending on their opcode:
/// SPECIAL and SPECIAL2 by funct, REGIMM by rt, and everything else by the
/// opcode alone. The all-zero word always decodes to `nop`.
#[derive(Debug, Default)]
pub struct Registry {
    descriptors: Vec<InstructionDescriptor>,
    by_name: HashMap<&'static str, usize>,
    special: HashMap<u8, usize>,
    special2: HashMap<u8, usize>,
    regimm: HashMap<u8, usize>,
    by_opcode: HashMap<u8, usize>,
    formats: HashMap<u8, Format>,
    nop: Option<usize>,
}

impl Registry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every supported instruction
    pub fn primordial() -> Result<Self, RegistryError> {
        let mut registry = Registry::new();

        for descriptor in table::descriptors()? {
            registry.register(descriptor)?;
        }

        debug!(
            instructions = registry.descriptors.len(),
            "built instruction registry"
        );

        Ok(registry)
    }

    /// The process-wide registry of every supported instruction, built on
    /// first use.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    pub fn register(
        &mut self,
        descriptor: InstructionDescriptor,
    ) -> Result<(), RegistryError> {
        let name = descriptor.name();
        if self.by_name.contains_key(name) {
            return Err(RegistryError::DuplicateName(name.to_string()));
        }

        let index = self.descriptors.len();

        if name == NOP {
            self.nop = Some(index);
        } else {
            let (bucket, key) = self.bucket_for(&descriptor)?;
            if let Some(&existing) = bucket.get(&key) {
                return Err(RegistryError::DuplicateKey {
                    name: name.to_string(),
                    existing: self.descriptors[existing].name().to_string(),
                });
            }

            self.bucket_mut(descriptor.opcode()).insert(key, index);
        }

        self.formats
            .entry(descriptor.opcode())
            .or_insert(descriptor.format());
        self.by_name.insert(name, index);
        self.descriptors.push(descriptor);

        trace!(name, index, "registered instruction");
        Ok(())
    }

    /// The bucket `descriptor` belongs in, and its key there
    fn bucket_for(
        &self,
        descriptor: &InstructionDescriptor,
    ) -> Result<(&HashMap<u8, usize>, u8), RegistryError> {
        let opcode = descriptor.opcode();
        let name = descriptor.name();
        let missing = || RegistryError::MissingDiscriminant(name.to_string());

        match (opcode, descriptor.discriminant()) {
            (SPECIAL, Discriminant::Funct(funct)) => Ok((&self.special, funct)),
            (SPECIAL2, Discriminant::Funct(funct)) => {
                Ok((&self.special2, funct))
            }
            (REGIMM, Discriminant::Rt(rt)) => Ok((&self.regimm, rt)),
            (SPECIAL | SPECIAL2 | REGIMM, _) => Err(missing()),
            (opcode, _) => Ok((&self.by_opcode, opcode)),
        }
    }

    fn bucket_mut(&mut self, opcode: u8) -> &mut HashMap<u8, usize> {
        match opcode {
            SPECIAL => &mut self.special,
            SPECIAL2 => &mut self.special2,
            REGIMM => &mut self.regimm,
            _ => &mut self.by_opcode,
        }
    }

    /// Finds the instruction encoded by `word`
    pub fn lookup_by_word(&self, word: u32) -> Option<&InstructionDescriptor> {
        if word == 0 {
            return self.nop.map(|index| &self.descriptors[index]);
        }

        let view = MachineWord::from(word);
        let index = match view.opcode() {
            SPECIAL => self.special.get(&view.funct()),
            SPECIAL2 => self.special2.get(&view.funct()),
            REGIMM => self.regimm.get(&view.rt()),
            opcode => self.by_opcode.get(&opcode),
        }?;

        Some(&self.descriptors[*index])
    }

    pub fn lookup_by_name(&self, name: &str) -> Option<&InstructionDescriptor> {
        self.by_name.get(name).map(|&index| &self.descriptors[index])
    }

    /// The format used by instructions with this opcode, if any is
    /// registered
    pub fn format_of_opcode(&self, opcode: u8) -> Option<Format> {
        self.formats.get(&opcode).copied()
    }

    /// Every registered instruction, in registration order
    pub fn descriptors(&self) -> impl Iterator<Item = &InstructionDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn decode(&self, word: u32) -> DecodedInstruction<'_> {
        match self.lookup_by_word(word) {
            Some(descriptor) => descriptor.decode(word),
            None => {
                let opcode = MachineWord::from(word).opcode();
                debug!(word, opcode, "unrecognized word");

                DecodedInstruction::Unrecognized {
                    word,
                    format: self.format_of_opcode(opcode),
                }
            }
        }
    }

    pub fn encode(&self, text: &str) -> Result<Instruction<'_>, EncodeError> {
        let malformed = |reason| EncodeError::Malformed {
            mnemonic: text.to_string(),
            reason,
        };

        let normalized = mnemonic::normalize(text);
        if normalized.is_empty() {
            return Err(malformed(SyntaxError::Empty));
        }

        let name = mnemonic::name(&normalized);
        let Some(descriptor) = self.lookup_by_name(name) else {
            // The descriptor checks characters itself when there is one
            mnemonic::validate_character_set(text).map_err(malformed)?;
            debug!(name, "unknown instruction");
            return Err(EncodeError::UnknownInstruction(name.to_string()));
        };

        descriptor.encode(text).inspect_err(|err| {
            debug!(text, %err, "could not encode");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{instruction::Kind, test_utils::*};

    fn descriptor(
        name: &'static str,
        opcode: u8,
        format: Format,
        pattern: &'static str,
    ) -> crate::instruction::descriptor::DescriptorBuilder {
        InstructionDescriptor::builder(name, opcode, format, pattern)
    }

    #[test]
    fn test_register_requires_discriminant() {
        let mut registry = Registry::new();
        let add = descriptor("add", SPECIAL, Format::R, "iname rd, rs, rt")
            .build()
            .unwrap();

        assert_eq!(
            registry.register(add),
            Err(RegistryError::MissingDiscriminant("add".to_string()))
        );

        let bltz = descriptor("bltz", REGIMM, Format::I, "iname rs, offset")
            .funct(0)
            .build()
            .unwrap();
        assert!(matches!(
            registry.register(bltz),
            Err(RegistryError::MissingDiscriminant(_))
        ));
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut registry = Registry::new();
        let add = || {
            descriptor("add", SPECIAL, Format::R, "iname rd, rs, rt")
                .funct(0x20)
                .build()
                .unwrap()
        };

        registry.register(add()).unwrap();
        assert_eq!(
            registry.register(add()),
            Err(RegistryError::DuplicateName("add".to_string()))
        );

        let alias = descriptor("plus", SPECIAL, Format::R, "iname rd, rs, rt")
            .funct(0x20)
            .build()
            .unwrap();
        assert_eq!(
            registry.register(alias),
            Err(RegistryError::DuplicateKey {
                name: "plus".to_string(),
                existing: "add".to_string(),
            })
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_primordial_builds() {
        let registry = Registry::primordial().unwrap();

        assert!(!registry.is_empty());
        assert_eq!(registry.len(), Registry::global().len());
    }

    #[test]
    fn test_zero_is_nop() {
        let registry = Registry::global();

        assert_eq!(registry.lookup_by_word(0).unwrap().name(), "nop");
        let decoded = registry.decode(0);
        assert!(decoded.is_valid());
        assert_eq!(decoded.mnemonic(), Some("nop"));

        // sll with a shift amount is not nop
        let decoded = registry.decode(r_type_shift(0x00, 9, 10, 4));
        assert_eq!(decoded.mnemonic(), Some("sll $t1, $t2, 4"));
    }

    #[test]
    fn test_buckets() {
        let registry = Registry::global();
        let name = |word| registry.lookup_by_word(word).map(|d| d.name());

        assert_eq!(name(r_type(0x20, 9, 11, 10)), Some("add"));
        assert_eq!(name(special2(0x02, 2, 2, 4)), Some("mul"));
        assert_eq!(name(regimm(0x00, 9, 5)), Some("bltz"));
        assert_eq!(name(regimm(0x01, 9, 5)), Some("bgez"));
        assert_eq!(name(i_type(0x23, 9, 10, 4)), Some("lw"));
        assert_eq!(name(j_type(0x03, 0x10)), Some("jal"));
    }

    #[test]
    fn test_unrecognized() {
        let registry = Registry::global();

        // opcode 0x13 (COP1X) is not supported
        let decoded = registry.decode(0x4c00_0000);
        assert_eq!(
            decoded,
            DecodedInstruction::Unrecognized {
                word: 0x4c00_0000,
                format: None
            }
        );

        // funct 0x01 is unused in SPECIAL
        let decoded = registry.decode(r_type(0x01, 9, 10, 11));
        assert_eq!(decoded.format(), Some(Format::R));
        assert!(decoded.is_unrecognized());

        // rt 0x1f is unused in REGIMM
        let decoded = registry.decode(regimm(0x1f, 9, 5));
        assert_eq!(decoded.format(), Some(Format::I));
    }

    #[test]
    fn test_format_of_opcode() {
        let registry = Registry::global();

        assert_eq!(registry.format_of_opcode(0x00), Some(Format::R));
        assert_eq!(registry.format_of_opcode(0x02), Some(Format::J));
        assert_eq!(registry.format_of_opcode(0x23), Some(Format::I));
        assert_eq!(registry.format_of_opcode(0x3f), Some(Format::Exit));
        assert_eq!(registry.format_of_opcode(0x13), None);
    }

    #[test]
    fn test_encode_checks_characters_first() {
        let registry = Registry::global();

        let err = registry.encode("fo#o $t1").unwrap_err();
        assert_eq!(
            err.syntax(),
            Some(&SyntaxError::IllegalCharacters(vec!['#']))
        );

        let err = registry.encode("foo $t1").unwrap_err();
        assert_eq!(err, EncodeError::UnknownInstruction("foo".to_string()));
    }

    #[test]
    fn test_descriptors_in_order() {
        let registry = Registry::global();
        let first = registry.descriptors().next().unwrap();

        assert_eq!(first.name(), "nop");
        assert!(
            registry
                .descriptors()
                .any(|d| d.kind() == Some(Kind::JumpAndLink))
        );
    }
}
