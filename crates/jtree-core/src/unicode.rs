//! Single-codepoint UTF-8 conversion used by the string productions.

/// Decode the first codepoint of `bytes`, returning it with its encoded length.
///
/// Fails on empty input, on a truncated sequence and on anything that is not
/// well-formed UTF-8 (overlong forms, surrogates, values above U+10FFFF).
pub fn decode_codepoint(bytes: &[u8]) -> Option<(char, usize)> {
    let len = match *bytes.first()? {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return None,
    };
    let sequence = bytes.get(..len)?;
    let ch = std::str::from_utf8(sequence).ok()?.chars().next()?;
    Some((ch, len))
}

/// Append the UTF-8 encoding of `codepoint` to `out`.
///
/// Returns `false`, leaving `out` untouched, when `codepoint` is not a Unicode
/// scalar value (a lone surrogate or anything above U+10FFFF).
pub fn encode_codepoint(codepoint: u32, out: &mut String) -> bool {
    match char::from_u32(codepoint) {
        Some(ch) => {
            out.push(ch);
            true
        }
        None => false,
    }
}
