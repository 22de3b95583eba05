/// Maximum number of fraction digits in a rendered result.
pub const MAX_FRACTION_DIGITS: usize = 3;

/// Render a converted value with at most three decimals ("#.###").
///
/// Rounding is half-to-even on the exact binary value. Trailing fraction zeros
/// are dropped and no digit grouping is applied. A negative value that rounds
/// to zero keeps its sign (`-0`).
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let symbol = if value > 0.0 { "∞" } else { "-∞" };
        return symbol.to_string();
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value);
    let trimmed = match fixed.find('.') {
        Some(_) => fixed.trim_end_matches('0').trim_end_matches('.'),
        None => fixed.as_str(),
    };
    trimmed.to_string()
}
