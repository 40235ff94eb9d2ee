/// Returns bits `high..=low` of `word`, zero-indexed from the least
/// significant bit.
///
/// The word is carried in a `u64` so callers can pass values that were
/// widened from signed or unsigned 32-bit integers without worrying about
/// sign extension. Only the low 32 bits are ever looked at.
///
/// Panics if `high < low` or `high > 31`. Both are mistakes in the caller's
/// field layout, never something a user can trigger.
pub fn extract(word: u64, high: u32, low: u32) -> u32 {
    assert!(
        high >= low,
        "high bit ({high}) must not be below the low bit ({low})"
    );
    assert!(high <= 31, "high bit ({high}) must be at most 31");

    let word = word & 0xffff_ffff;
    let width = high - low + 1;

    ((word >> low) as u32) & mask(width)
}

/// A mask with the `width` lowest bits set.
pub fn mask(width: u32) -> u32 {
    assert!(width <= 32, "a field cannot be wider than 32 bits: {width}");

    if width == 32 {
        u32::MAX
    } else {
        (1 << width) - 1
    }
}

/// Truncates `value` to `width` bits and moves it `shift` bits to the left.
pub fn place(value: u32, width: u32, shift: u32) -> u32 {
    assert!(
        width + shift <= 32,
        "field of width {width} at bit {shift} does not fit in 32 bits"
    );

    if width == 0 {
        return 0;
    }

    (value & mask(width)) << shift
}
