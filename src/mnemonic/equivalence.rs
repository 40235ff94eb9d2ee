use super::{literal, split_address, tokenize};
use crate::{error::LiteralError, register::Register};

/// Whether two mnemonics denote the same instruction text.
///
/// Tokens are compared position by position. Two tokens match when they
/// are identical, when both name the same register (`$t1` and `$9`), or
/// when both are `N(base)` addresses with numerically equal immediates and
/// matching base registers (`0x10($sp)` and `16($sp)`). Bare numbers are
/// only equal when written identically.
pub fn mnemonic_equals(a: &str, b: &str) -> bool {
    let ours = tokenize(a);
    let theirs = tokenize(b);

    ours.len() == theirs.len()
        && ours
            .iter()
            .zip(theirs.iter())
            .all(|(x, y)| tokens_equal(x, y))
}

fn tokens_equal(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }

    if a.starts_with('$') || b.starts_with('$') {
        return Register::equals(a, b);
    }

    addresses_equal(a, b)
}

fn addresses_equal(a: &str, b: &str) -> bool {
    let (Some((a_offset, Some(a_base))), Some((b_offset, Some(b_base)))) =
        (split_address(a), split_address(b))
    else {
        return false;
    };

    let offsets_equal = match (offset(a_offset), offset(b_offset)) {
        (Ok(x), Ok(y)) => x == y,
        _ => false,
    };

    offsets_equal && (a_base == b_base || Register::equals(a_base, b_base))
}

/// `($sp)` has an implicit immediate of zero
fn offset(text: &str) -> Result<u32, LiteralError> {
    if text.is_empty() {
        Ok(0)
    } else {
        literal::parse(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical() {
        assert!(mnemonic_equals("add $t1, $t2, $t3", "add $t1, $t2, $t3"));
        assert!(mnemonic_equals("nop", "nop"));
    }

    #[test]
    fn test_formatting_is_ignored() {
        assert!(mnemonic_equals("add $t1,$t2,$t3", "  add $t1, $t2,  $t3"));
        assert!(mnemonic_equals("lw $t1, 4 ($sp)", "lw $t1, 4($sp)"));
    }

    #[test]
    fn test_register_aliases() {
        assert!(mnemonic_equals("add $t1, $t2, $t3", "add $9, $10, $11"));
        assert!(mnemonic_equals("jr $ra", "jr $31"));
        assert!(!mnemonic_equals("jr $ra", "jr $30"));
    }

    #[test]
    fn test_addresses() {
        assert!(mnemonic_equals("lw $t1, 0x10($sp)", "lw $t1, 16($sp)"));
        assert!(mnemonic_equals("lw $t1, 16($29)", "lw $9, 0b10000($sp)"));
        // The hint is a bare number
        assert!(!mnemonic_equals("pref 0x01, 0x02($sp)", "pref 1, 2($sp)"));
        assert!(mnemonic_equals("pref 1, 0x02($sp)", "pref 1, 2($sp)"));
        assert!(!mnemonic_equals("lw $t1, 16($sp)", "lw $t1, 16($fp)"));
        assert!(mnemonic_equals("lw $t1, ($sp)", "lw $t1, 0($sp)"));
        assert!(mnemonic_equals("lw $t1,($sp)", "lw $t1, 0x0($29)"));
        assert!(!mnemonic_equals("lw $t1, ($sp)", "lw $t1, 4($sp)"));
        assert!(!mnemonic_equals("lw $t1, 16($sp)", "lw $t1, 17($sp)"));
    }

    #[test]
    fn test_bare_numbers_are_textual() {
        assert!(!mnemonic_equals("sll $t1, $t2, 0xa", "sll $t1, $t2, 10"));
        assert!(mnemonic_equals("sll $t1, $t2, 10", "sll $t1, $t2, 10"));
    }

    #[test]
    fn test_mismatches() {
        assert!(!mnemonic_equals("add $t1, $t2, $t3", "addu $t1, $t2, $t3"));
        assert!(!mnemonic_equals("add $t1, $t2, $t3", "add $t1, $t2"));
        assert!(!mnemonic_equals("jr $t1", "jr 9"));
        assert!(!mnemonic_equals("jr $foo", "jr $bar"));
    }
}
