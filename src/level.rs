pub type Level = i64;

/// Parses a level string the way the grid markup and storage values are
/// written: optional leading whitespace and sign, then the longest run of
/// base-10 digits. Anything after the digits is ignored. Returns `None` when
/// no digit is present; values past the `i64` range saturate.
pub fn parse_level(raw: &str) -> Option<Level> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let run = digits.bytes().take_while(u8::is_ascii_digit).count();
    if run == 0 {
        return None;
    }

    let value = digits[..run].bytes().fold(0 as Level, |acc, digit| {
        let digit = Level::from(digit - b'0');
        if negative {
            acc.saturating_mul(10).saturating_sub(digit)
        } else {
            acc.saturating_mul(10).saturating_add(digit)
        }
    });

    Some(value)
}

/// A level is unlocked only when both sides parsed and `level <= max`.
pub fn is_unlocked(level: Option<Level>, max_level: Option<Level>) -> bool {
    matches!((level, max_level), (Some(level), Some(max)) if level <= max)
}
