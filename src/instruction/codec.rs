use std::fmt;

use tracing::{debug, trace};

use super::{
    DecodedInstruction, Field, Fields, Format, Hint, Instruction,
    InstructionDescriptor, Kind, descriptor::Discriminant, word::MachineWord,
};
use crate::{
    error::{EncodeError, RegistryError, SyntaxError},
    mnemonic::{self, literal},
    register::{REGISTERS, Register},
};

/// The part an operand plays in a mnemonic, and the field it lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Rd,
    Rs,
    Rt,
    Shamt,
    Funct,
    /// A signed 16-bit immediate
    Offset,
    /// `N(base)`: a signed 16-bit immediate plus a base register in RS
    Address,
    /// The 26-bit target of a jump
    Target,
    /// A `pref` cache hint, held in RT
    Hint,
}

impl Role {
    fn from_name(name: &str) -> Option<Self> {
        let role = match name {
            "rd" => Role::Rd,
            "rs" => Role::Rs,
            "rt" => Role::Rt,
            "shamt" => Role::Shamt,
            "funct" => Role::Funct,
            "offset" => Role::Offset,
            "address" => Role::Address,
            "target" => Role::Target,
            "hint" => Role::Hint,
            _ => return None,
        };
        Some(role)
    }

    pub fn name(self) -> &'static str {
        match self {
            Role::Rd => "rd",
            Role::Rs => "rs",
            Role::Rt => "rt",
            Role::Shamt => "shamt",
            Role::Funct => "funct",
            Role::Offset => "offset",
            Role::Address => "address",
            Role::Target => "target",
            Role::Hint => "hint",
        }
    }

    /// The fields an operand in this role writes
    pub fn fields(self) -> &'static [Field] {
        match self {
            Role::Rd => &[Field::Rd],
            Role::Rs => &[Field::Rs],
            Role::Rt | Role::Hint => &[Field::Rt],
            Role::Shamt => &[Field::Shamt],
            Role::Funct => &[Field::Funct],
            Role::Offset => &[Field::Immediate],
            Role::Address => &[Field::Immediate, Field::Rs],
            Role::Target => &[Field::Target],
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fields that must read zero in an R-format word unless an operand
/// covers them, in the order they are reported.
const IMPLICIT_ZEROES: [Field; 4] =
    [Field::Shamt, Field::Rd, Field::Rt, Field::Rs];

/// Renders and parses every instruction of one shape. Built from a format
/// and an operand pattern such as `"iname rt, address"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codec {
    format: Format,
    roles: Vec<Role>,
}

impl Codec {
    pub fn new(format: Format, pattern: &str) -> Result<Self, RegistryError> {
        let tokens = mnemonic::tokenize(pattern);
        let Some((first, rest)) = tokens.split_first() else {
            return Err(RegistryError::MissingIname(pattern.to_string()));
        };
        if first != "iname" {
            return Err(RegistryError::MissingIname(pattern.to_string()));
        }

        let mut roles = Vec::with_capacity(rest.len());
        for token in rest {
            let role = Role::from_name(token).ok_or_else(|| {
                RegistryError::UnknownRole {
                    pattern: pattern.to_string(),
                    role: token.clone(),
                }
            })?;

            if !role.fields().iter().all(|&field| format.has_field(field)) {
                return Err(RegistryError::RoleNotInFormat {
                    role: role.name().to_string(),
                    format,
                });
            }

            roles.push(role);
        }

        Ok(Codec { format, roles })
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn expected_arguments(&self) -> usize {
        self.roles.len()
    }

    pub fn expected_commas(&self) -> usize {
        self.roles.len().saturating_sub(1)
    }

    /// Whether some operand writes `field`
    pub fn writes(&self, field: Field) -> bool {
        self.roles.iter().any(|role| role.fields().contains(&field))
    }

    /// `jal` targets are written as byte addresses but stored in words
    fn shifts_target(&self, descriptor: &InstructionDescriptor) -> bool {
        self.format == Format::J
            && descriptor.kind() == Some(Kind::JumpAndLink)
    }

    /// Fields that identify the instruction rather than its operands
    pub fn fixed_fields(&self, descriptor: &InstructionDescriptor) -> Fields {
        let mut fields = Fields::new();
        let opcode = descriptor.opcode() as u32;

        if self.format == Format::Exit {
            fields.insert(Field::Code, opcode << 26);
        } else {
            fields.insert(Field::Opcode, opcode);
        }

        match descriptor.discriminant() {
            Discriminant::None => {}
            Discriminant::Funct(funct) => {
                fields.insert(Field::Funct, funct as u32);
            }
            Discriminant::Rt(rt) => {
                fields.insert(Field::Rt, rt as u32);
            }
        }

        fields
    }

    /// Turns `word` into text according to `descriptor`.
    pub fn render<'d>(
        &self,
        descriptor: &'d InstructionDescriptor,
        word: u32,
    ) -> DecodedInstruction<'d> {
        let (text, hint) = self.mnemonic(descriptor, word);
        let instruction = Instruction::new(descriptor, word, text, hint);
        let violations = self.violations(MachineWord::from(word));

        if violations.is_empty() {
            DecodedInstruction::Valid(instruction)
        } else {
            trace!(word, ?violations, "partially valid word");
            DecodedInstruction::PartiallyValid {
                instruction,
                violations,
            }
        }
    }

    /// The text of `word`, and its cache hint if it carries a known one
    pub(crate) fn mnemonic(
        &self,
        descriptor: &InstructionDescriptor,
        word: u32,
    ) -> (String, Option<Hint>) {
        let view = MachineWord::from(word);
        let mut hint = None;

        let arguments: Vec<String> = self
            .roles
            .iter()
            .map(|&role| match role {
                Role::Rd => register_name(view.rd()).to_string(),
                Role::Rs => register_name(view.rs()).to_string(),
                Role::Rt => register_name(view.rt()).to_string(),
                Role::Shamt => view.shamt().to_string(),
                Role::Funct => view.funct().to_string(),
                Role::Hint => {
                    hint = Hint::from_value(view.hint() as u32);
                    view.hint().to_string()
                }
                Role::Offset => view.simm16().to_string(),
                Role::Target => {
                    if self.shifts_target(descriptor) {
                        (view.jump_target() << 2).to_string()
                    } else {
                        view.jump_target().to_string()
                    }
                }
                Role::Address => {
                    let bare = self.roles.contains(&Role::Rs)
                        || descriptor.name() == "lui";
                    if bare {
                        view.simm16().to_string()
                    } else {
                        let base = register_name(view.rs());
                        format!("{}({base})", view.simm16())
                    }
                }
            })
            .collect();

        let mut text = descriptor.name().to_string();
        if !arguments.is_empty() {
            text.push(' ');
            text.push_str(&arguments.join(", "));
        }

        (text, hint)
    }

    fn violations(&self, view: MachineWord) -> Vec<String> {
        match self.format {
            Format::R => {}
            // Everything below the opcode
            Format::Exit if view.jump_target() != 0 => {
                return vec![format!(
                    "Expected code to be zero below the opcode. Got {:#x}",
                    view.jump_target()
                )];
            }
            _ => return Vec::new(),
        }

        IMPLICIT_ZEROES
            .into_iter()
            .filter(|&field| !self.writes(field))
            .filter_map(|field| {
                let value = match field {
                    Field::Shamt => view.shamt(),
                    Field::Rd => view.rd(),
                    Field::Rt => view.rt(),
                    _ => view.rs(),
                };
                (value != 0).then(|| {
                    format!("Expected {field} to be zero. Got {value}")
                })
            })
            .collect()
    }

    /// Reads `text` as an instance of `descriptor`.
    ///
    /// Checks run in a fixed order: characters, parentheses, argument
    /// count and then comma count. The first failing check is reported.
    pub fn parse<'d>(
        &self,
        descriptor: &'d InstructionDescriptor,
        text: &str,
    ) -> Result<Instruction<'d>, EncodeError> {
        let malformed = |reason: SyntaxError| EncodeError::Malformed {
            mnemonic: text.to_string(),
            reason,
        };

        if text.trim().is_empty() {
            return Err(malformed(SyntaxError::Empty));
        }

        mnemonic::validate_character_set(text).map_err(malformed)?;
        mnemonic::validate_parentheses_allowed(&self.roles, text)
            .map_err(malformed)?;

        let tokens = mnemonic::tokenize(text);
        let Some((iname, arguments)) = tokens.split_first() else {
            return Err(malformed(SyntaxError::Empty));
        };
        if iname != descriptor.name() {
            return Err(EncodeError::UnknownInstruction(iname.clone()));
        }

        let actual = mnemonic::count_arguments(text);
        if actual != self.expected_arguments() {
            return Err(malformed(SyntaxError::ArgumentCount {
                expected: self.expected_arguments(),
                actual,
            }));
        }

        let commas = mnemonic::count_commas(text);
        if commas != self.expected_commas() {
            return Err(malformed(SyntaxError::CommaCount {
                expected: self.expected_commas(),
                actual: commas,
            }));
        }

        let mut fields = self.fixed_fields(descriptor);
        let mut hint = None;

        for (&role, argument) in self.roles.iter().zip(arguments) {
            match role {
                Role::Rd | Role::Rs | Role::Rt => {
                    let index = register(argument).map_err(malformed)?;
                    fields.insert(role.fields()[0], index);
                }
                Role::Shamt | Role::Funct | Role::Offset => {
                    let value = number(argument).map_err(malformed)?;
                    fields.insert(role.fields()[0], value);
                }
                Role::Target => {
                    let target = number(argument).map_err(malformed)?;
                    let target = if self.shifts_target(descriptor) {
                        if target & 0b11 != 0 {
                            debug!(target, "jump target is not word aligned");
                        }
                        target >> 2
                    } else {
                        target
                    };
                    fields.insert(Field::Target, target);
                }
                Role::Hint => {
                    let value = number(argument).map_err(malformed)?;
                    let known = Hint::from_value(value)
                        .ok_or(SyntaxError::UnknownHint(value))
                        .map_err(malformed)?;
                    hint = Some(known);
                    fields.insert(Field::Rt, value);
                }
                Role::Address => {
                    let (offset, base) = address(argument).map_err(malformed)?;
                    fields.insert(Field::Immediate, offset);
                    fields.insert(Field::Rs, base);
                }
            }
        }

        let word = self.format.pack(&fields);
        trace!(text, word, "encoded");

        let text = mnemonic::join(&tokens);
        Ok(Instruction::new(descriptor, word, text, hint))
    }
}

fn register_name(index: u8) -> &'static str {
    REGISTERS[(index & 0x1f) as usize]
}

fn register(text: &str) -> Result<u32, SyntaxError> {
    Register::parse(text)
        .map(Register::index)
        .ok_or_else(|| SyntaxError::InvalidRegister(text.to_string()))
}

fn number(text: &str) -> Result<u32, SyntaxError> {
    literal::parse(text).map_err(|source| SyntaxError::InvalidNumber {
        text: text.to_string(),
        source,
    })
}

/// Splits `N(base)` into its immediate and base register index. A bare
/// `N` uses `$zero`, a bare `(base)` an immediate of zero.
fn address(text: &str) -> Result<(u32, u32), SyntaxError> {
    let (offset, base) = mnemonic::split_address(text)
        .ok_or_else(|| SyntaxError::InvalidAddress(text.to_string()))?;

    let offset = if offset.is_empty() && base.is_some() {
        0
    } else {
        number(offset)?
    };

    let base = match base {
        Some(base) => register(base)?,
        None => Register::ZERO.index(),
    };

    Ok((offset, base))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(
        name: &'static str,
        opcode: u8,
        format: Format,
        pattern: &'static str,
    ) -> InstructionDescriptor {
        InstructionDescriptor::builder(name, opcode, format, pattern)
            .build()
            .unwrap()
    }

    #[test]
    fn test_roles() {
        let codec = Codec::new(Format::I, "iname rt, address").unwrap();

        assert_eq!(codec.roles(), &[Role::Rt, Role::Address]);
        assert_eq!(codec.expected_arguments(), 2);
        assert_eq!(codec.expected_commas(), 1);
        assert!(codec.writes(Field::Rs));
        assert!(codec.writes(Field::Immediate));
        assert!(!codec.writes(Field::Rd));
    }

    #[test]
    fn test_no_operands() {
        let codec = Codec::new(Format::R, "iname").unwrap();

        assert!(codec.roles().is_empty());
        assert_eq!(codec.expected_commas(), 0);
    }

    #[test]
    fn test_target_outside_j_format() {
        assert_eq!(
            Codec::new(Format::I, "iname target"),
            Err(RegistryError::RoleNotInFormat {
                role: "target".to_string(),
                format: Format::I,
            })
        );
    }

    #[test]
    fn test_address_renders_base() {
        let lw = descriptor("lw", 0x23, Format::I, "iname rt, address");

        let decoded = lw.decode(0x8fbf_0004);
        assert_eq!(decoded.mnemonic(), Some("lw $ra, 4($sp)"));

        let decoded = lw.decode(0x8d49_fffc);
        assert_eq!(decoded.mnemonic(), Some("lw $t1, -4($t2)"));
    }

    #[test]
    fn test_address_without_base() {
        let lw = descriptor("lw", 0x23, Format::I, "iname rt, address");

        let instruction = lw.encode("lw $t1, 16").unwrap();
        assert_eq!(instruction.word(), 0x8c09_0010);

        let instruction = lw.encode("lw $t1, ($sp)").unwrap();
        assert_eq!(instruction.word(), 0x8fa9_0000);
    }

    #[test]
    fn test_malformed_address() {
        let lw = descriptor("lw", 0x23, Format::I, "iname rt, address");

        let err = lw.encode("lw $t1, 4($sp").unwrap_err();
        assert_eq!(
            err.syntax(),
            Some(&SyntaxError::InvalidAddress("4($sp".to_string()))
        );

        let err = lw.encode("lw $t1, 4($xx)").unwrap_err();
        assert_eq!(
            err.syntax(),
            Some(&SyntaxError::InvalidRegister("$xx".to_string()))
        );
    }

    #[test]
    fn test_invalid_operands() {
        let add = descriptor("add", 0x00, Format::R, "iname rd, rs, rt");

        let err = add.encode("add $t1, $t2, 5").unwrap_err();
        assert_eq!(
            err.syntax(),
            Some(&SyntaxError::InvalidRegister("5".to_string()))
        );

        let sll = descriptor("sll", 0x00, Format::R, "iname rd, rt, shamt");
        let err = sll.encode("sll $t1, $t2, $t3").unwrap_err();
        assert!(matches!(
            err.syntax(),
            Some(SyntaxError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_wrong_name() {
        let add = descriptor("add", 0x00, Format::R, "iname rd, rs, rt");

        assert_eq!(
            add.encode("sub $t1, $t2, $t3").unwrap_err(),
            EncodeError::UnknownInstruction("sub".to_string())
        );
    }

    #[test]
    fn test_empty() {
        let nop = descriptor("nop", 0x00, Format::R, "iname");

        let err = nop.encode("   ").unwrap_err();
        assert_eq!(err.syntax(), Some(&SyntaxError::Empty));
    }

    #[test]
    fn test_violations_order() {
        let syscall = descriptor("syscall", 0x00, Format::R, "iname");

        // rs = 1, rt = 2, rd = 3, shamt = 4
        let word = (1 << 21) | (2 << 16) | (3 << 11) | (4 << 6) | 0x0c;
        let decoded = syscall.decode(word);

        assert_eq!(
            decoded.violations(),
            &[
                "Expected shamt to be zero. Got 4",
                "Expected rd to be zero. Got 3",
                "Expected rt to be zero. Got 2",
                "Expected rs to be zero. Got 1",
            ]
        );
    }

    #[test]
    fn test_no_violations_outside_r_format() {
        let addi = descriptor("addi", 0x08, Format::I, "iname rt, rs, offset");

        assert!(addi.decode(0x23bd_fff8).is_valid());
    }

    #[test]
    fn test_exit_code_bits() {
        let exit = descriptor("exit", 0x3f, Format::Exit, "iname");

        assert!(exit.decode(0xfc00_0000).is_valid());

        let decoded = exit.decode(0xfc00_0001);
        assert_eq!(decoded.mnemonic(), Some("exit"));
        assert_eq!(
            decoded.violations(),
            ["Expected code to be zero below the opcode. Got 0x1"]
        );
    }

    #[test]
    fn test_parentheses_outside_address() {
        let addi = descriptor("addi", 0x08, Format::I, "iname rt, rs, offset");
        let beq = descriptor("beq", 0x04, Format::I, "iname rs, rt, offset");
        let lw = descriptor("lw", 0x23, Format::I, "iname rt, address");

        for (descriptor, text) in [
            (&addi, "addi $t1, $t2, 4($t3)"),
            (&beq, "beq $t1, $t2, (4)"),
            (&lw, "lw ($t1), 4"),
        ] {
            assert_eq!(
                descriptor.encode(text).unwrap_err().syntax(),
                Some(&SyntaxError::IllegalParentheses),
                "{text}"
            );
        }
    }
}
