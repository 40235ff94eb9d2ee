use bitfield::bitfield;

bitfield! {
    /// A 32-bit MIPS machine word, providing access to every field any of
    /// the formats may carry. Which accessors are meaningful depends on the
    /// word's format.
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MachineWord(u32);
    impl Debug;

    /// The opcode field (6 bits), present in every format
    pub u8, opcode, _: 31, 26;

    /// The RS field (5 bits), the first source register, or the base
    /// register of a load/store
    pub u8, rs, _: 25, 21;

    /// The RT field (5 bits), the second source or the destination of
    /// I-type instructions. For opcode 0x01 it selects the instruction.
    pub u8, rt, _: 20, 16;

    /// The hint field of `pref` shares its bits with RT
    pub u8, hint, _: 20, 16;

    /// The RD field (5 bits), the destination of R-type instructions
    pub u8, rd, _: 15, 11;

    /// The SHAMT field (5 bits), the amount for shift operations
    pub u8, shamt, _: 10, 6;

    /// The funct field (6 bits), a secondary opcode
    pub u8, funct, _: 5, 0;

    /// The immediate field (16 bits), zero-extended
    pub u16, imm16, _: 15, 0;

    /// The immediate field (16 bits), sign-extended to 32 bits
    pub i16, into i32, simm16, _: 15, 0;

    /// The target field (26 bits) of jump instructions
    pub jump_target, _: 25, 0;
}

impl MachineWord {
    /// Returns the raw 32-bit value
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for MachineWord {
    fn from(value: u32) -> Self {
        MachineWord(value)
    }
}

impl From<MachineWord> for u32 {
    fn from(word: MachineWord) -> Self {
        word.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_r_type_fields() {
        // add $t1, $t2, $t3
        let word = MachineWord(0x014b_4820);

        assert_eq!(word.opcode(), 0);
        assert_eq!(word.rs(), 10);
        assert_eq!(word.rt(), 11);
        assert_eq!(word.rd(), 9);
        assert_eq!(word.shamt(), 0);
        assert_eq!(word.funct(), 0x20);
    }

    #[test]
    fn test_i_type_fields() {
        // addi $sp, $sp, -8
        let word = MachineWord(0x23bd_fff8);

        assert_eq!(word.opcode(), 8);
        assert_eq!(word.rs(), 29);
        assert_eq!(word.rt(), 29);
        assert_eq!(word.imm16(), 0xfff8);
        assert_eq!(word.simm16(), -8);
    }

    #[test]
    fn test_j_type_fields() {
        let word = MachineWord(0x0c10_0000);

        assert_eq!(word.opcode(), 3);
        assert_eq!(word.jump_target(), 0x10_0000);
    }
}
