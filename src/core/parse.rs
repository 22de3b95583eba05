use crate::domain::model::{ConversionKind, ConversionRequest};
use crate::utils::error::ParseError;

/// Parse user text into a conversion request.
///
/// Surrounding whitespace is ignored. The rest must be a complete decimal or
/// scientific-notation literal that denotes a finite number; `NaN`, infinity
/// spellings and literals that overflow are rejected.
pub fn parse_input(kind: ConversionKind, raw: &str) -> Result<ConversionRequest, ParseError> {
    let value = parse_number(raw).ok_or_else(|| ParseError::new(kind, raw))?;
    Ok(ConversionRequest::new(kind, value, raw))
}

fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // f64::from_str 也接受 "inf" / "NaN"，需額外排除
    let value: f64 = trimmed.parse().ok()?;
    value.is_finite().then_some(value)
}
