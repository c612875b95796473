//! DOM `keyCode` values used by the built-in bindings.
//!
//! Browsers disagree on a few punctuation keys, so both variants are listed.

pub const ESCAPE: u32 = 27;
pub const SPACE: u32 = 32;

/// `=` / `+` on the main row (Chrome, Safari).
pub const EQUAL: u32 = 187;
/// `=` / `+` on the main row (Firefox).
pub const EQUAL_FIREFOX: u32 = 61;
pub const NUMPAD_ADD: u32 = 107;

/// `-` / `_` on the main row (Chrome, Safari).
pub const MINUS: u32 = 189;
/// `-` / `_` on the main row (Firefox).
pub const MINUS_FIREFOX: u32 = 173;
pub const NUMPAD_SUBTRACT: u32 = 109;

/// Keys that speed the simulation up.
pub fn is_plus(key_code: u32) -> bool {
    matches!(key_code, EQUAL | EQUAL_FIREFOX | NUMPAD_ADD)
}

/// Keys that slow the simulation down.
pub fn is_minus(key_code: u32) -> bool {
    matches!(key_code, MINUS | MINUS_FIREFOX | NUMPAD_SUBTRACT)
}
