use std::{collections::BTreeMap, fmt};

use crate::bits;

/// A named bit-field of a machine word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Opcode,
    Rs,
    Rt,
    Rd,
    Shamt,
    Funct,
    /// The 16-bit immediate of I-type words (offsets and addresses)
    Immediate,
    /// The 26-bit target of J-type words
    Target,
    /// The whole word, as seen by the EXIT format
    Code,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Opcode => "op",
            Field::Rs => "rs",
            Field::Rt => "rt",
            Field::Rd => "rd",
            Field::Shamt => "shamt",
            Field::Funct => "funct",
            Field::Immediate => "immediate",
            Field::Target => "target",
            Field::Code => "code",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Field values of a word, keyed by field. Absent fields are zero.
pub type Fields = BTreeMap<Field, u32>;

/// The bit-field layout family a machine word belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    R,
    I,
    J,
    Exit,
}

const R_LAYOUT: [(Field, u32); 6] = [
    (Field::Opcode, 6),
    (Field::Rs, 5),
    (Field::Rt, 5),
    (Field::Rd, 5),
    (Field::Shamt, 5),
    (Field::Funct, 6),
];

const I_LAYOUT: [(Field, u32); 4] = [
    (Field::Opcode, 6),
    (Field::Rs, 5),
    (Field::Rt, 5),
    (Field::Immediate, 16),
];

const J_LAYOUT: [(Field, u32); 2] = [(Field::Opcode, 6), (Field::Target, 26)];

const EXIT_LAYOUT: [(Field, u32); 1] = [(Field::Code, 32)];

impl Format {
    /// The ordered (field, width) pairs of this format, most significant
    /// field first. Widths always sum to 32.
    pub fn layout(self) -> &'static [(Field, u32)] {
        match self {
            Format::R => &R_LAYOUT,
            Format::I => &I_LAYOUT,
            Format::J => &J_LAYOUT,
            Format::Exit => &EXIT_LAYOUT,
        }
    }

    /// Whether `field` is part of this format's layout
    pub fn has_field(self, field: Field) -> bool {
        self.layout().iter().any(|&(f, _)| f == field)
    }

    /// Iterates over (field, width, shift) triples, where `shift` is the
    /// position of the field's least significant bit.
    fn positions(self) -> impl Iterator<Item = (Field, u32, u32)> {
        let mut next = 32;

        self.layout().iter().map(move |&(field, width)| {
            next -= width;
            (field, width, next)
        })
    }

    /// Lays out every field of this format at its fixed position. Missing
    /// fields are zero, values wider than their field are truncated.
    pub fn pack(self, fields: &Fields) -> u32 {
        self.positions().fold(0, |word, (field, width, shift)| {
            let value = fields.get(&field).copied().unwrap_or(0);
            word | bits::place(value, width, shift)
        })
    }

    /// Splits `word` into the fields of this format. The exact inverse of
    /// `pack`.
    pub fn unpack(self, word: u32) -> Fields {
        self.positions()
            .map(|(field, width, shift)| {
                let high = shift + width - 1;
                (field, bits::extract(word as u64, high, shift))
            })
            .collect()
    }

    /// Splits `word` into the fields of this format, in layout order.
    pub fn decompose(self, word: u32) -> Decomposition {
        Decomposition(
            self.positions()
                .map(|(_, width, shift)| {
                    bits::extract(word as u64, shift + width - 1, shift)
                })
                .collect(),
        )
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Format::R => "R",
            Format::I => "I",
            Format::J => "J",
            Format::Exit => "EXIT",
        };
        f.write_str(name)
    }
}

/// The field values of a word in layout order, e.g. `0x71014802` in the R
/// format decomposes into `[28 8 1 9 0 2]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition(Vec<u32>);

impl Decomposition {
    pub fn values(&self) -> &[u32] {
        &self.0
    }

    /// Every field in decimal, e.g. `[28 8 1 9 0 2]`
    pub fn decimal(&self) -> String {
        let parts: Vec<String> = self.0.iter().map(u32::to_string).collect();
        format!("[{}]", parts.join(" "))
    }

    /// Every field in hexadecimal, e.g. `[0x1c 8 1 9 0 2]`. Values below 10
    /// read the same in both bases and carry no prefix.
    pub fn hexadecimal(&self) -> String {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|&value| {
                if value > 9 {
                    format!("{value:#x}")
                } else {
                    value.to_string()
                }
            })
            .collect();
        format!("[{}]", parts.join(" "))
    }
}
