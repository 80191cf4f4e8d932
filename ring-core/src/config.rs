//! Konfigurations-Helfer
//!
//! Werte kommen zur Build-Zeit als Strings (env!/option_env!) und werden
//! hier in `const fn` geparst, damit sie in Konstanten landen können.

/// Default Blink-Zeit in Millisekunden
pub const DEFAULT_BLINK_TIME_MS: u64 = 500;

/// Parst eine Dezimalzahl für eine Zeitangabe in Millisekunden
///
/// Leere, ungültige, zu große oder 0-Werte ergeben `default`.
pub const fn parse_millis(value: &str, default: u64) -> u64 {
    let bytes = value.as_bytes();
    if bytes.is_empty() {
        return default;
    }

    let mut result: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if !b.is_ascii_digit() {
            return default;
        }
        result = match result.checked_mul(10) {
            Some(v) => match v.checked_add((b - b'0') as u64) {
                Some(v) => v,
                None => return default,
            },
            None => return default,
        };
        i += 1;
    }

    if result == 0 { default } else { result }
}

/// Blink-Zeit aus einem optionalen Build-Zeit-Wert
pub const fn blink_time_ms(value: Option<&str>) -> u64 {
    match value {
        Some(v) => parse_millis(v, DEFAULT_BLINK_TIME_MS),
        None => DEFAULT_BLINK_TIME_MS,
    }
}
