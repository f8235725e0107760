//! Arabic script classification
//!
//! Decides whether a fragment of text contains characters from the Arabic
//! Unicode blocks. All ranges live in the Basic Multilingual Plane.

use std::ops::RangeInclusive;

/// Codepoint ranges treated as Arabic script
pub const TARGET_RANGES: &[RangeInclusive<char>] = &[
    '\u{0600}'..='\u{06FF}', // Arabic
    '\u{0750}'..='\u{077F}', // Arabic Supplement
    '\u{08A0}'..='\u{08FF}', // Arabic Extended-A
    '\u{FB50}'..='\u{FDFF}', // Arabic Presentation Forms-A
    '\u{FE70}'..='\u{FEFF}', // Arabic Presentation Forms-B
];

/// Check if a single character falls inside one of the target ranges
#[inline]
pub fn is_target_char(ch: char) -> bool {
    TARGET_RANGES.iter().any(|range| range.contains(&ch))
}

/// Check if the text contains at least one Arabic-script character
///
/// Empty text never matches. No normalization or trimming is applied.
pub fn is_target_script(text: &str) -> bool {
    text.chars().any(is_target_char)
}
