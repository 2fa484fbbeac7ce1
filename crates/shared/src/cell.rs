use serde::{Deserialize, Serialize};
use std::fmt;

/// A single scalar stored in a dataset row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

/// Renders the value the way it shows up inside a tile: booleans and nulls
/// produce no text, integral numbers drop the fraction.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null | CellValue::Bool(_) => Ok(()),
            CellValue::Number(n) => write_number(f, *n),
            CellValue::Text(text) => f.write_str(text),
        }
    }
}

/// Magnitudes outside `[1e-6, 1e21)` switch to exponent notation with an
/// explicit sign, `1e+21` and `1.5e-7`.
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        return f.write_str("NaN");
    }
    if n.is_infinite() {
        return f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if n == 0.0 {
        return f.write_str("0");
    }

    let magnitude = n.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{n:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(f, "{mantissa}e+{exponent}")
            }
            _ => f.write_str(&formatted),
        };
    }

    write!(f, "{n}")
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

/// Text for a value that may be absent from its row. Absent values render
/// empty, same as null.
pub fn display_text(value: Option<&CellValue>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}
