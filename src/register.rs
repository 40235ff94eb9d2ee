use std::fmt;

/// Symbolic names of the general-purpose registers, by index
pub const REGISTERS: [&str; 32] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", "$t0", "$t1",
    "$t2", "$t3", "$t4", "$t5", "$t6", "$t7", "$s0", "$s1", "$s2", "$s3",
    "$s4", "$s5", "$s6", "$s7", "$t8", "$t9", "$k0", "$k1", "$gp", "$sp",
    "$fp", "$ra",
];

/// One of the 32 general-purpose registers.
///
/// Registers are written with a leading `$`, either symbolically (`$t1`) or
/// by index (`$9`). Both spellings parse to the same register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Register(u8);

impl Register {
    pub const ZERO: Register = Register(0);

    /// Looks up the register with the given index, if there is one
    pub fn from_index(index: u32) -> Option<Self> {
        (index < 32).then_some(Register(index as u8))
    }

    /// Parses `$name` or `$n`. Anything else is `None`.
    pub fn parse(text: &str) -> Option<Self> {
        let bare = text.strip_prefix('$')?;

        if !bare.is_empty() && bare.bytes().all(|b| b.is_ascii_digit()) {
            return bare.parse().ok().and_then(Self::from_index);
        }

        REGISTERS
            .iter()
            .position(|&name| name == text)
            .map(|index| Register(index as u8))
    }

    pub fn index(self) -> u32 {
        self.0 as u32
    }

    /// The symbolic name, e.g. `$t1`
    pub fn name(self) -> &'static str {
        REGISTERS[self.0 as usize]
    }

    /// The conventional use of the register
    pub fn description(self) -> &'static str {
        match self.0 {
            0 => "Constant 0",
            1 => "Reserved for the assembler",
            2 | 3 => "Function results and expression evaluation",
            4..=7 => "Function argument",
            8..=15 | 24 | 25 => "Temporary, not preserved across calls",
            16..=23 => "Saved temporary, preserved across calls",
            26 | 27 => "Reserved for the OS kernel",
            28 => "Pointer to the global area",
            29 => "Stack pointer",
            30 => "Frame pointer",
            _ => "Return address",
        }
    }

    /// Whether two spellings name the same register. Text that is not a
    /// register never equals anything.
    pub fn equals(a: &str, b: &str) -> bool {
        match (Self::parse(a), Self::parse(b)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Iterates over all registers in index order
    pub fn all() -> impl Iterator<Item = Register> {
        (0..32).map(Register)
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbolic() {
        assert_eq!(Register::parse("$zero"), Some(Register(0)));
        assert_eq!(Register::parse("$t1"), Some(Register(9)));
        assert_eq!(Register::parse("$ra"), Some(Register(31)));
    }

    #[test]
    fn test_parse_numeric() {
        assert_eq!(Register::parse("$0"), Some(Register(0)));
        assert_eq!(Register::parse("$9"), Some(Register(9)));
        assert_eq!(Register::parse("$31"), Some(Register(31)));
        assert_eq!(Register::parse("$32"), None);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for text in ["", "$", "t1", "$t10", "$T1", "$-1", "9"] {
            assert_eq!(Register::parse(text), None, "{text:?}");
        }
    }

    #[test]
    fn test_names_round_trip() {
        for register in Register::all() {
            assert_eq!(Register::parse(register.name()), Some(register));
            assert_eq!(
                Register::parse(&format!("${}", register.index())),
                Some(register)
            );
        }
    }

    #[test]
    fn test_equals() {
        assert!(Register::equals("$t1", "$9"));
        assert!(Register::equals("$sp", "$29"));
        assert!(!Register::equals("$t1", "$t2"));
        assert!(!Register::equals("$t1", "9"));
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(Register::ZERO.description(), "Constant 0");
        assert_eq!(Register(29).description(), "Stack pointer");
        assert_eq!(Register(31).description(), "Return address");
    }
}
