/// Formats `value` with `precision` significant digits the way C's `%g` does:
/// fixed notation for decimal exponents in `-4..precision`, scientific
/// notation otherwise, with trailing zeros removed in both cases.
#[must_use]
pub fn format_significant(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exponent.unsigned_abs()
        );
    }

    let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
    strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
}

/// Same as [`format_significant`] but always carries a sign, like `%+g`.
#[must_use]
pub fn format_significant_signed(value: f64, precision: usize) -> String {
    let formatted = format_significant(value, precision);

    if formatted.starts_with('-') || value.is_nan() {
        formatted
    } else {
        format!("+{}", formatted)
    }
}

fn strip_trailing_zeros(number: &str) -> &str {
    if !number.contains('.') {
        return number;
    }

    number.trim_end_matches('0').trim_end_matches('.')
}
