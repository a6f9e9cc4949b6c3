//! Team color validation.

/// Whether `value` is a 6-digit hex RGB color of the form `#rrggbb`.
///
/// Both upper- and lowercase hex digits are accepted; shorthand (`#fff`)
/// and alpha channels are not.
pub fn is_hex_color(value: &str) -> bool {
    let Some(hex) = value.strip_prefix('#') else {
        return false;
    };
    hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit())
}
