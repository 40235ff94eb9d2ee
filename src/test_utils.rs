#![allow(dead_code)]

/// Encodes a MIPS I-Type instruction.
pub fn i_type(opcode: u32, rt: usize, rs: usize, immediate: u16) -> u32 {
    (opcode << 26)
        | ((rs as u32) << 21)
        | ((rt as u32) << 16)
        | (immediate as u32)
}

/// Encodes a REGIMM (opcode 0x01) instruction, selected by `rt`.
pub fn regimm(rt: u32, rs: usize, offset: u16) -> u32 {
    (0x01 << 26) | ((rs as u32) << 21) | (rt << 16) | (offset as u32)
}

/// Encodes a MIPS R-Type instruction with a shift amount.
pub fn r_type_shift(funct: u32, rd: usize, rt: usize, shamt: usize) -> u32 {
    // SPECIAL R-Type, opcode 0x00
    ((rt as u32) << 16) | ((rd as u32) << 11) | ((shamt as u32) << 6) | funct
}

/// Encodes a MIPS R-Type instruction with a three-register format.
pub fn r_type(funct: u32, rd: usize, rt: usize, rs: usize) -> u32 {
    // SPECIAL R-Type, opcode 0x00
    ((rs as u32) << 21) | ((rt as u32) << 16) | ((rd as u32) << 11) | funct
}

/// Encodes a SPECIAL2 (opcode 0x1c) instruction.
pub fn special2(funct: u32, rd: usize, rt: usize, rs: usize) -> u32 {
    (0x1c << 26) | r_type(funct, rd, rt, rs)
}

/// Encodes a MIPS J-Type instruction from its raw 26-bit target field.
pub fn j_type(opcode: u32, target: u32) -> u32 {
    (opcode << 26) | (target & 0x03ff_ffff)
}
