//! Tolerant numeric coercion for loosely typed source columns.
//!
//! Source tables store numbers inconsistently: real JSON numbers, numeric
//! strings, strings with a trailing `%`, or nulls. Anything that does not
//! coerce cleanly becomes `None` instead of failing the whole row.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerce a JSON value to a finite f64.
pub fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let trimmed = s.trim().trim_end_matches('%').trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Coerce a JSON value to a non-negative whole number.
pub fn coerce_u32(value: &Value) -> Option<u32> {
    let n = coerce_number(value)?;
    if n < 0.0 || n.fract() != 0.0 || n > u32::MAX as f64 {
        return None;
    }
    Some(n as u32)
}

pub fn de_opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(coerce_u32))
}

pub fn de_u32_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(de_opt_u32(deserializer)?.unwrap_or(0))
}

/// Pull the first decimal number out of free text such as `"1.98m"` or
/// `"198 cm"`.
///
/// A `-` directly before the first digit is kept. A comma followed by one or
/// two digits is a decimal point (`"2,01"`); any other comma between digits
/// is a thousands separator (`"1,980"`).
pub fn first_number_in(text: &str) -> Option<f64> {
    let chars: Vec<char> = text.trim().chars().collect();
    let start = chars.iter().position(char::is_ascii_digit)?;

    let mut token = String::new();
    if start > 0 && chars[start - 1] == '-' {
        token.push('-');
    }

    let mut seen_decimal = false;
    let mut i = start;
    while i < chars.len() {
        let c = chars[i];
        if c.is_ascii_digit() {
            token.push(c);
        } else if c == '.' && !seen_decimal {
            seen_decimal = true;
            token.push('.');
        } else if c == ',' && !seen_decimal {
            let digits = chars[i + 1..]
                .iter()
                .take_while(|c| c.is_ascii_digit())
                .count();
            match digits {
                0 => break,
                1 | 2 => {
                    seen_decimal = true;
                    token.push('.');
                }
                _ => {}
            }
        } else {
            break;
        }
        i += 1;
    }

    token
        .trim_end_matches('.')
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}
