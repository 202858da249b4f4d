//! Flag emoji rendering from two-letter country codes.

/// Offset from an ASCII uppercase letter to its regional indicator symbol.
const REGIONAL_INDICATOR_OFFSET: u32 = 0x1F1A5;

/// Fallback shown for codes with no flag rendering.
const WHITE_FLAG: &str = "\u{1F3F3}\u{FE0F}";

/// Renders the flag emoji for a country code.
///
/// Codes with no standard regional-indicator flag get an explicit override
/// (currently only Kosovo); anything that is not two ASCII letters falls back
/// to a white flag.
pub fn flag_emoji(code: &str) -> String {
    let upper = code.trim().to_ascii_uppercase();
    if upper == "XK" {
        return "\u{1F1FD}\u{1F1F0}".to_string();
    }

    let bytes = upper.as_bytes();
    if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_uppercase) {
        return WHITE_FLAG.to_string();
    }

    let first = char::from_u32(u32::from(bytes[0]) + REGIONAL_INDICATOR_OFFSET);
    let second = char::from_u32(u32::from(bytes[1]) + REGIONAL_INDICATOR_OFFSET);
    match (first, second) {
        (Some(first), Some(second)) => format!("{first}{second}"),
        _ => WHITE_FLAG.to_string(),
    }
}
