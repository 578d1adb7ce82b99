/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Number formatting
//!
//! Energies are printed in the "general" notation of C's `%g`: a fixed number
//! of significant digits, trailing zeros removed, switching to scientific
//! notation for very small or very large magnitudes.

/// Significant digits used when printing an energy
pub const DEFAULT_PRECISION: usize = 6;

/// Format `value` with `precision` significant digits in `%g` notation
///
/// Scientific notation is used when the decimal exponent is below -4 or at
/// least `precision`. The exponent always carries a sign and two digits.
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let precision = precision.max(1);

    // Round once in scientific form so the exponent reflects carries like 9.9999995 -> 10
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn strip_trailing_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
