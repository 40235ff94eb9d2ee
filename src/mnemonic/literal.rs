use crate::error::LiteralError;

/// Reads an operand number.
///
/// Accepts an optional leading `-` followed by a decimal number, or by a
/// number prefixed with `0x` (hex), `0b` (binary) or `0d` (decimal). Prefixes
/// are case-insensitive. Values wrap modulo 2^32, and a leading `-` negates
/// in two's complement, so `-8` reads as `0xfffffff8`.
pub fn parse(text: &str) -> Result<u32, LiteralError> {
    let text = text.trim();
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let (radix, digits) = split_radix(unsigned);
    if digits.is_empty() {
        return Err(LiteralError::Empty);
    }

    let mut value = 0u32;
    for digit in digits.chars() {
        let Some(d) = digit.to_digit(radix) else {
            return Err(LiteralError::InvalidDigit {
                text: text.to_string(),
                digit,
            });
        };
        value = value.wrapping_mul(radix).wrapping_add(d);
    }

    Ok(if negative { value.wrapping_neg() } else { value })
}

fn split_radix(text: &str) -> (u32, &str) {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return (10, text);
    }

    match bytes[1].to_ascii_lowercase() {
        b'x' => (16, &text[2..]),
        b'b' => (2, &text[2..]),
        b'd' => (10, &text[2..]),
        _ => (10, text),
    }
}
