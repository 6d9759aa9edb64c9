/// Parses a stored numeric string, yielding `0.0` for anything that is not a finite number.
///
/// Grade points and credits are kept as text; blank or garbage values must count as zero
/// rather than fail the request.
pub fn parse_number_or_zero(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parses stored marks as an integer, truncating any fractional part and yielding `0`
/// when the value is not numeric.
pub fn parse_marks_or_zero(value: &str) -> i64 {
    parse_number_or_zero(value).trunc() as i64
}
