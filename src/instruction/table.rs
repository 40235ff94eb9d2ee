use super::{
    Format, InstructionDescriptor, Kind, descriptor::DescriptorBuilder,
};
use crate::error::RegistryError;

fn special(
    name: &'static str,
    funct: u8,
    pattern: &'static str,
) -> DescriptorBuilder {
    InstructionDescriptor::builder(name, 0x00, Format::R, pattern).funct(funct)
}

fn special2(
    name: &'static str,
    funct: u8,
    pattern: &'static str,
) -> DescriptorBuilder {
    InstructionDescriptor::builder(name, 0x1c, Format::R, pattern).funct(funct)
}

fn regimm(name: &'static str, rt: u8) -> DescriptorBuilder {
    InstructionDescriptor::builder(name, 0x01, Format::I, "iname rs, offset")
        .rt(rt)
}

fn immediate(
    name: &'static str,
    opcode: u8,
    pattern: &'static str,
) -> DescriptorBuilder {
    InstructionDescriptor::builder(name, opcode, Format::I, pattern)
}

fn jump(name: &'static str, opcode: u8) -> DescriptorBuilder {
    InstructionDescriptor::builder(name, opcode, Format::J, "iname target")
}

/// Every supported instruction, in registration order.
pub fn descriptors() -> Result<Vec<InstructionDescriptor>, RegistryError> {
    const RD_RS_RT: &str = "iname rd, rs, rt";
    const RD_RT_SHAMT: &str = "iname rd, rt, shamt";
    const RD_RT_RS: &str = "iname rd, rt, rs";
    const RS_RT: &str = "iname rs, rt";
    const RS_RT_OFFSET: &str = "iname rs, rt, offset";
    const RS_OFFSET: &str = "iname rs, offset";
    const RT_RS_OFFSET: &str = "iname rt, rs, offset";
    const RT_ADDRESS: &str = "iname rt, address";

    let builders = vec![
        InstructionDescriptor::builder("nop", 0x00, Format::R, "iname")
            .description("No operation")
            .example("nop", 0x0000_0000),
        //
        // SPECIAL, by funct
        //
        special("sll", 0x00, RD_RT_SHAMT)
            .kind(Kind::Shift)
            .description("Shift left logical")
            .example("sll $t1, $t2, 10", 0x000a_4a80),
        special("srl", 0x02, RD_RT_SHAMT)
            .kind(Kind::Shift)
            .description("Shift right logical")
            .example("srl $t1, $t2, 10", 0x000a_4a82),
        special("sra", 0x03, RD_RT_SHAMT)
            .kind(Kind::Shift)
            .description("Shift right arithmetic")
            .example("sra $t1, $t2, 10", 0x000a_4a83),
        special("sllv", 0x04, RD_RT_RS)
            .kind(Kind::Shift)
            .description("Shift left logical by a register amount")
            .example("sllv $t1, $t2, $t3", 0x016a_4804),
        special("srlv", 0x06, RD_RT_RS)
            .kind(Kind::Shift)
            .description("Shift right logical by a register amount")
            .example("srlv $t1, $t2, $t3", 0x016a_4806),
        special("srav", 0x07, RD_RT_RS)
            .kind(Kind::Shift)
            .description("Shift right arithmetic by a register amount")
            .example("srav $t1, $t2, $t3", 0x016a_4807),
        special("jr", 0x08, "iname rs")
            .kind(Kind::Jump)
            .description("Jump to the address in a register")
            .example("jr $t1", 0x0120_0008),
        special("jalr", 0x09, "iname rd, rs")
            .kind(Kind::JumpAndLink)
            .description("Jump to the address in rs, return address in rd")
            .example("jalr $t1, $t2", 0x0140_4809),
        special("movz", 0x0a, RD_RS_RT)
            .description("Move rs to rd if rt is zero")
            .example("movz $t1, $t2, $t3", 0x014b_480a),
        special("movn", 0x0b, RD_RS_RT)
            .description("Move rs to rd if rt is not zero")
            .example("movn $t1, $t2, $t3", 0x014b_480b),
        special("syscall", 0x0c, "iname")
            .kind(Kind::Exception)
            .description("System call")
            .example("syscall", 0x0000_000c),
        special("break", 0x0d, "iname")
            .kind(Kind::Exception)
            .description("Breakpoint")
            .example("break", 0x0000_000d),
        special("sync", 0x0f, "iname")
            .description("Order loads and stores")
            .example("sync", 0x0000_000f),
        special("mfhi", 0x10, "iname rd")
            .description("Move from HI")
            .example("mfhi $t1", 0x0000_4810),
        special("mthi", 0x11, "iname rs")
            .description("Move to HI")
            .example("mthi $t1", 0x0120_0011),
        special("mflo", 0x12, "iname rd")
            .description("Move from LO")
            .example("mflo $t1", 0x0000_4812),
        special("mtlo", 0x13, "iname rs")
            .description("Move to LO")
            .example("mtlo $t1", 0x0120_0013),
        special("mult", 0x18, RS_RT)
            .description("Signed multiplication into HI and LO")
            .example("mult $t1, $t2", 0x012a_0018),
        special("multu", 0x19, RS_RT)
            .description("Unsigned multiplication into HI and LO")
            .example("multu $t1, $t2", 0x012a_0019),
        special("div", 0x1a, RS_RT)
            .description("Signed division, quotient in LO, remainder in HI")
            .example("div $t1, $t2", 0x012a_001a),
        special("divu", 0x1b, RS_RT)
            .description("Unsigned division, quotient in LO, remainder in HI")
            .example("divu $t1, $t2", 0x012a_001b),
        special("add", 0x20, RD_RS_RT)
            .description("Addition, trapping on overflow")
            .example("add $t1, $t2, $t3", 0x014b_4820),
        special("addu", 0x21, RD_RS_RT)
            .description("Addition without overflow")
            .example("addu $t1, $t2, $t3", 0x014b_4821),
        special("sub", 0x22, RD_RS_RT)
            .description("Subtraction, trapping on overflow")
            .example("sub $t1, $t2, $t3", 0x014b_4822),
        special("subu", 0x23, RD_RS_RT)
            .description("Subtraction without overflow")
            .example("subu $t1, $t2, $t3", 0x014b_4823),
        special("and", 0x24, RD_RS_RT)
            .description("Bitwise and")
            .example("and $t1, $t2, $t3", 0x014b_4824),
        special("or", 0x25, RD_RS_RT)
            .description("Bitwise or")
            .example("or $t1, $t2, $t3", 0x014b_4825),
        special("xor", 0x26, RD_RS_RT)
            .description("Bitwise exclusive or")
            .example("xor $t1, $t2, $t3", 0x014b_4826),
        special("nor", 0x27, RD_RS_RT)
            .description("Bitwise not or")
            .example("nor $t1, $t2, $t3", 0x014b_4827),
        special("slt", 0x2a, RD_RS_RT)
            .description("Set rd to 1 if rs < rt (signed)")
            .example("slt $t1, $t2, $t3", 0x014b_482a),
        special("sltu", 0x2b, RD_RS_RT)
            .description("Set rd to 1 if rs < rt (unsigned)")
            .example("sltu $t1, $t2, $t3", 0x014b_482b),
        special("tge", 0x30, RS_RT)
            .kind(Kind::Trap)
            .description("Trap if rs >= rt (signed)")
            .example("tge $t1, $t2", 0x012a_0030),
        special("tgeu", 0x31, RS_RT)
            .kind(Kind::Trap)
            .description("Trap if rs >= rt (unsigned)")
            .example("tgeu $t1, $t2", 0x012a_0031),
        special("tlt", 0x32, RS_RT)
            .kind(Kind::Trap)
            .description("Trap if rs < rt (signed)")
            .example("tlt $t1, $t2", 0x012a_0032),
        special("tltu", 0x33, RS_RT)
            .kind(Kind::Trap)
            .description("Trap if rs < rt (unsigned)")
            .example("tltu $t1, $t2", 0x012a_0033),
        special("teq", 0x34, RS_RT)
            .kind(Kind::Trap)
            .description("Trap if rs == rt")
            .example("teq $t1, $t2", 0x012a_0034),
        special("tne", 0x36, RS_RT)
            .kind(Kind::Trap)
            .description("Trap if rs != rt")
            .example("tne $t1, $t2", 0x012a_0036),
        //
        // REGIMM, by rt
        //
        regimm("bltz", 0x00)
            .kind(Kind::Branch)
            .description("Branch if rs < 0")
            .example("bltz $t1, 5", 0x0520_0005),
        regimm("bgez", 0x01)
            .kind(Kind::Branch)
            .description("Branch if rs >= 0")
            .example("bgez $t1, 5", 0x0521_0005),
        regimm("bltzl", 0x02)
            .kind(Kind::Branch)
            .description("Branch likely if rs < 0")
            .example("bltzl $t1, 5", 0x0522_0005),
        regimm("bgezl", 0x03)
            .kind(Kind::Branch)
            .description("Branch likely if rs >= 0")
            .example("bgezl $t1, 5", 0x0523_0005),
        regimm("tgei", 0x08)
            .kind(Kind::Trap)
            .description("Trap if rs >= immediate (signed)")
            .example("tgei $t1, 5", 0x0528_0005),
        regimm("tgeiu", 0x09)
            .kind(Kind::Trap)
            .description("Trap if rs >= immediate (unsigned)")
            .example("tgeiu $t1, 5", 0x0529_0005),
        regimm("tlti", 0x0a)
            .kind(Kind::Trap)
            .description("Trap if rs < immediate (signed)")
            .example("tlti $t1, 5", 0x052a_0005),
        regimm("tltiu", 0x0b)
            .kind(Kind::Trap)
            .description("Trap if rs < immediate (unsigned)")
            .example("tltiu $t1, 5", 0x052b_0005),
        regimm("teqi", 0x0c)
            .kind(Kind::Trap)
            .description("Trap if rs == immediate")
            .example("teqi $t1, 5", 0x052c_0005),
        regimm("tnei", 0x0e)
            .kind(Kind::Trap)
            .description("Trap if rs != immediate")
            .example("tnei $t1, 5", 0x052e_0005),
        regimm("bltzal", 0x10)
            .kind(Kind::Branch)
            .description("Branch and link if rs < 0")
            .example("bltzal $t1, 10", 0x0530_000a),
        regimm("bgezal", 0x11)
            .kind(Kind::Branch)
            .description("Branch and link if rs >= 0")
            .example("bgezal $t1, 10", 0x0531_000a),
        regimm("bltzall", 0x12)
            .kind(Kind::Branch)
            .description("Branch likely and link if rs < 0")
            .example("bltzall $t1, 10", 0x0532_000a),
        regimm("bgezall", 0x13)
            .kind(Kind::Branch)
            .description("Branch likely and link if rs >= 0")
            .example("bgezall $t1, 10", 0x0533_000a),
        //
        // Jumps
        //
        jump("j", 0x02)
            .kind(Kind::Jump)
            .description("Jump")
            .example("j 4", 0x0800_0004),
        jump("jal", 0x03)
            .kind(Kind::JumpAndLink)
            .description("Jump and link, target given as a byte address")
            .example("jal 4", 0x0c00_0001),
        //
        // I-Type, by opcode
        //
        immediate("beq", 0x04, RS_RT_OFFSET)
            .kind(Kind::Branch)
            .description("Branch if rs == rt")
            .example("beq $t1, $t2, 4", 0x112a_0004),
        immediate("bne", 0x05, RS_RT_OFFSET)
            .kind(Kind::Branch)
            .description("Branch if rs != rt")
            .example("bne $t1, $t2, 4", 0x152a_0004),
        immediate("blez", 0x06, RS_OFFSET)
            .kind(Kind::Branch)
            .description("Branch if rs <= 0")
            .example("blez $t1, 4", 0x1920_0004),
        immediate("bgtz", 0x07, RS_OFFSET)
            .kind(Kind::Branch)
            .description("Branch if rs > 0")
            .example("bgtz $t1, 4", 0x1d20_0004),
        immediate("addi", 0x08, RT_RS_OFFSET)
            .description("Add immediate, trapping on overflow")
            .example("addi $t1, $t2, 4", 0x2149_0004),
        immediate("addiu", 0x09, RT_RS_OFFSET)
            .description("Add immediate without overflow")
            .example("addiu $t1, $t2, 4", 0x2549_0004),
        immediate("slti", 0x0a, RT_RS_OFFSET)
            .description("Set rt to 1 if rs < immediate (signed)")
            .example("slti $t1, $t2, 4", 0x2949_0004),
        immediate("sltiu", 0x0b, RT_RS_OFFSET)
            .description("Set rt to 1 if rs < immediate (unsigned)")
            .example("sltiu $t1, $t2, 4", 0x2d49_0004),
        immediate("andi", 0x0c, RT_RS_OFFSET)
            .description("Bitwise and with an immediate")
            .example("andi $t1, $t2, 4", 0x3149_0004),
        immediate("ori", 0x0d, RT_RS_OFFSET)
            .description("Bitwise or with an immediate")
            .example("ori $t1, $t2, 4", 0x3549_0004),
        immediate("xori", 0x0e, RT_RS_OFFSET)
            .description("Bitwise exclusive or with an immediate")
            .example("xori $t1, $t2, 4", 0x3949_0004),
        immediate("lui", 0x0f, "iname rt, offset")
            .description("Load the immediate into the upper half of rt")
            .example("lui $t1, 4", 0x3c09_0004),
        immediate("beql", 0x14, RS_RT_OFFSET)
            .kind(Kind::Branch)
            .description("Branch likely if rs == rt")
            .example("beql $t1, $t2, 6", 0x512a_0006),
        immediate("bnel", 0x15, RS_RT_OFFSET)
            .kind(Kind::Branch)
            .description("Branch likely if rs != rt")
            .example("bnel $t1, $t2, 6", 0x552a_0006),
        immediate("blezl", 0x16, RS_OFFSET)
            .kind(Kind::Branch)
            .description("Branch likely if rs <= 0")
            .example("blezl $t1, 6", 0x5920_0006),
        immediate("bgtzl", 0x17, RS_OFFSET)
            .kind(Kind::Branch)
            .description("Branch likely if rs > 0")
            .example("bgtzl $t1, 6", 0x5d20_0006),
        //
        // SPECIAL2, by funct
        //
        special2("madd", 0x00, RS_RT)
            .description("Multiply and add to HI and LO")
            .example("madd $t1, $t2", 0x712a_0000),
        special2("maddu", 0x01, RS_RT)
            .description("Multiply and add to HI and LO (unsigned)")
            .example("maddu $t1, $t2", 0x712a_0001),
        special2("mul", 0x02, RD_RS_RT)
            .description("Multiply, low word into rd")
            .example("mul $v0, $a0, $v0", 0x7082_1002),
        special2("msub", 0x04, RS_RT)
            .description("Multiply and subtract from HI and LO")
            .example("msub $t1, $t2", 0x712a_0004),
        special2("msubu", 0x05, RS_RT)
            .description("Multiply and subtract from HI and LO (unsigned)")
            .example("msubu $t1, $t2", 0x712a_0005),
        special2("clz", 0x20, "iname rd, rs")
            .description("Count leading zeroes")
            .example("clz $t1, $t2", 0x7140_4820),
        special2("clo", 0x21, "iname rd, rs")
            .description("Count leading ones")
            .example("clo $t1, $t2", 0x7140_4821),
        //
        // Loads and stores
        //
        immediate("lb", 0x20, RT_ADDRESS)
            .kind(Kind::Load)
            .description("Load byte, sign-extended")
            .example("lb $t1, 7($t2)", 0x8149_0007),
        immediate("lh", 0x21, RT_ADDRESS)
            .kind(Kind::Load)
            .description("Load halfword, sign-extended")
            .example("lh $t1, 8($t2)", 0x8549_0008),
        immediate("lwl", 0x22, RT_ADDRESS)
            .kind(Kind::Load)
            .description("Load word left")
            .example("lwl $t1, 9($t2)", 0x8949_0009),
        immediate("lw", 0x23, RT_ADDRESS)
            .kind(Kind::Load)
            .description("Load word")
            .example("lw $t1, 10($t2)", 0x8d49_000a),
        immediate("lbu", 0x24, RT_ADDRESS)
            .kind(Kind::Load)
            .description("Load byte, zero-extended")
            .example("lbu $t1, 11($t2)", 0x9149_000b),
        immediate("lhu", 0x25, RT_ADDRESS)
            .kind(Kind::Load)
            .description("Load halfword, zero-extended")
            .example("lhu $t1, 12($t2)", 0x9549_000c),
        immediate("lwr", 0x26, RT_ADDRESS)
            .kind(Kind::Load)
            .description("Load word right")
            .example("lwr $t1, 13($t2)", 0x9949_000d),
        immediate("sb", 0x28, RT_ADDRESS)
            .kind(Kind::Store)
            .description("Store byte")
            .example("sb $t1, 4($t2)", 0xa149_0004),
        immediate("sh", 0x29, RT_ADDRESS)
            .kind(Kind::Store)
            .description("Store halfword")
            .example("sh $t1, 4($t2)", 0xa549_0004),
        immediate("swl", 0x2a, RT_ADDRESS)
            .kind(Kind::Store)
            .description("Store word left")
            .example("swl $t1, 4($t2)", 0xa949_0004),
        immediate("sw", 0x2b, RT_ADDRESS)
            .kind(Kind::Store)
            .description("Store word")
            .example("sw $ra, 4($sp)", 0xafbf_0004),
        immediate("swr", 0x2e, RT_ADDRESS)
            .kind(Kind::Store)
            .description("Store word right")
            .example("swr $ra, 4($sp)", 0xbbbf_0004),
        immediate("ll", 0x30, RT_ADDRESS)
            .kind(Kind::Load)
            .description("Load linked word")
            .example("ll $ra, 4($sp)", 0xc3bf_0004),
        immediate("lwc1", 0x31, RT_ADDRESS)
            .kind(Kind::Load)
            .description("Load word to coprocessor 1")
            .example("lwc1 $ra, 4($sp)", 0xc7bf_0004),
        immediate("lwc2", 0x32, RT_ADDRESS)
            .kind(Kind::Load)
            .description("Load word to coprocessor 2")
            .example("lwc2 $ra, 4($sp)", 0xcbbf_0004),
        immediate("pref", 0x33, "iname hint, address")
            .description("Prefetch into the cache")
            .example("pref 1, 2($sp)", 0xcfa1_0002),
        immediate("ldc1", 0x35, RT_ADDRESS)
            .kind(Kind::Load)
            .description("Load doubleword to coprocessor 1")
            .example("ldc1 $t1, 4($sp)", 0xd7a9_0004),
        immediate("ldc2", 0x36, RT_ADDRESS)
            .kind(Kind::Load)
            .description("Load doubleword to coprocessor 2")
            .example("ldc2 $t1, 4($sp)", 0xdba9_0004),
        immediate("sc", 0x38, RT_ADDRESS)
            .kind(Kind::Store)
            .description("Store conditional word")
            .example("sc $t1, 4($sp)", 0xe3a9_0004),
        immediate("swc1", 0x39, RT_ADDRESS)
            .kind(Kind::Store)
            .description("Store word from coprocessor 1")
            .example("swc1 $t1, 4($sp)", 0xe7a9_0004),
        immediate("swc2", 0x3a, RT_ADDRESS)
            .kind(Kind::Store)
            .description("Store word from coprocessor 2")
            .example("swc2 $t1, 4($sp)", 0xeba9_0004),
        immediate("sdc1", 0x3d, RT_ADDRESS)
            .kind(Kind::Store)
            .description("Store doubleword from coprocessor 1")
            .example("sdc1 $t1, 4($sp)", 0xf7a9_0004),
        immediate("sdc2", 0x3e, RT_ADDRESS)
            .kind(Kind::Store)
            .description("Store doubleword from coprocessor 2")
            .example("sdc2 $t1, 4($sp)", 0xfba9_0004),
        //
        // Simulator
        //
        InstructionDescriptor::builder("exit", 0x3f, Format::Exit, "iname")
            .description("Stop the simulation")
            .example("exit", 0xfc00_0000),
    ];

    builders.into_iter().map(DescriptorBuilder::build).collect()
}
