//! Product specification values

use serde::{Deserialize, Serialize};

/// Spec keys compared numerically when ranking related products.
pub const COMPARABLE_SPEC_KEYS: [&str; 5] = ["wattage", "capacity", "power", "output_power", "max_power"];

/// A single spec value as it arrives from the catalog: a bare number, a
/// string with an embedded unit (`"550W"`), or anything else JSON allows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl SpecValue {
    /// Numeric value via [`parse_leading_number`].
    pub fn as_number(&self) -> Option<f64> { parse_leading_number(self) }
}

impl From<f64> for SpecValue { fn from(v: f64) -> Self { Self::Number(v) } }
impl From<i64> for SpecValue { fn from(v: i64) -> Self { Self::Number(v as f64) } }
impl From<&str> for SpecValue { fn from(v: &str) -> Self { Self::Text(v.to_string()) } }
impl From<String> for SpecValue { fn from(v: String) -> Self { Self::Text(v) } }

/// Extracts the numeric value of a spec.
///
/// Numbers pass through unchanged. Strings are read up to the end of their
/// leading numeric portion after any leading whitespace, so `"550W"` gives
/// `550.0` and `"5.5 kWh"` gives `5.5`. Returns `None` when there is no
/// leading number or the result is not finite.
pub fn parse_leading_number(value: &SpecValue) -> Option<f64> {
    match value {
        SpecValue::Number(n) if n.is_finite() => Some(*n),
        SpecValue::Text(s) => parse_leading_str(s),
        _ => None,
    }
}

fn parse_leading_str(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if frac_digits > 0 || int_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> SpecValue { SpecValue::from(s) }

    #[test]
    fn test_numbers_pass_through() {
        assert_eq!(parse_leading_number(&SpecValue::Number(600.0)), Some(600.0));
        assert_eq!(parse_leading_number(&SpecValue::Number(f64::NAN)), None);
        assert_eq!(SpecValue::from(48i64).as_number(), Some(48.0));
        assert_eq!(text("48V").as_number(), Some(48.0));
    }

    #[test]
    fn test_strings_with_units() {
        assert_eq!(parse_leading_number(&text("550W")), Some(550.0));
        assert_eq!(parse_leading_number(&text("  5.5 kWh")), Some(5.5));
        assert_eq!(parse_leading_number(&text("-12V")), Some(-12.0));
        assert_eq!(parse_leading_number(&text(".5A")), Some(0.5));
        assert_eq!(parse_leading_number(&text("10.W")), Some(10.0));
        assert_eq!(parse_leading_number(&text("1e3W")), Some(1000.0));
        assert_eq!(parse_leading_number(&text("3kW")), Some(3.0));
    }

    #[test]
    fn test_no_leading_digits() {
        assert_eq!(parse_leading_number(&text("monocrystalline")), None);
        assert_eq!(parse_leading_number(&text("W550")), None);
        assert_eq!(parse_leading_number(&text("")), None);
        assert_eq!(parse_leading_number(&text("-")), None);
        assert_eq!(parse_leading_number(&text(".")), None);
        assert_eq!(parse_leading_number(&SpecValue::Other(serde_json::Value::Bool(true))), None);
    }

    #[test]
    fn test_untagged_deserialize() {
        let v: Vec<SpecValue> = serde_json::from_str(r#"[550, "550W", null]"#).unwrap();
        assert_eq!(v[0], SpecValue::Number(550.0));
        assert_eq!(v[1], text("550W"));
        assert_eq!(v[2], SpecValue::Other(serde_json::Value::Null));
    }
}
