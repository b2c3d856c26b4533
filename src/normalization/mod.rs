mod config;

pub use config::NormalizationConfig;

use crate::error::NormalizationError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Control, format (zero-width, bidi overrides, BOM), private use, unassigned
    // and line/paragraph separator characters.
    static ref UNSAFE_CHARACTERS: Regex =
        Regex::new(r"[\p{Cc}\p{Cf}\p{Co}\p{Cn}\p{Zl}\p{Zp}]").unwrap();
}

/// Removes cosmetic characters from `input` and rejects values that still contain
/// characters that are unsafe to hand to a downstream system.
///
/// No length or alphabet check is done here, an empty result is valid.
pub fn clean(input: &str, config: &NormalizationConfig) -> Result<String, NormalizationError> {
    let value = strip(input, config);

    match UNSAFE_CHARACTERS.find(&value) {
        Some(unsafe_match) => {
            let index = value[..unsafe_match.start()].chars().count();
            let character = unsafe_match.as_str().chars().next().unwrap_or_default();
            Err(NormalizationError::UnsafeCharacter { character, index })
        }
        None => Ok(value),
    }
}

/// Same as [clean], but unsafe characters are dropped instead of failing.
pub fn clean_lossy(input: &str, config: &NormalizationConfig) -> String {
    let value = strip(input, config);
    UNSAFE_CHARACTERS.replace_all(&value, "").into_owned()
}

fn strip(input: &str, config: &NormalizationConfig) -> String {
    input
        .chars()
        .map(|c| if config.fold_unicode { fold_char(c) } else { c })
        .filter(|c| !config.delete_chars.contains(*c))
        .collect()
}

/// Maps look-alike characters commonly produced by IMEs and word processors to
/// their ASCII counterpart.
fn fold_char(c: char) -> char {
    match c {
        // fullwidth digits
        '\u{FF10}'..='\u{FF19}' => {
            char::from_digit(c as u32 - 0xFF10, 10).unwrap_or(c)
        }
        // hyphens, dashes and minus signs
        '\u{2010}'..='\u{2015}' | '\u{2212}' | '\u{FE58}' | '\u{FE63}' | '\u{FF0D}' => '-',
        // space separators
        '\u{00A0}' | '\u{2000}'..='\u{200A}' | '\u{202F}' | '\u{205F}' | '\u{3000}' => ' ',
        _ => c,
    }
}
