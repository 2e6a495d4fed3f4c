use rust_decimal::{Decimal, RoundingStrategy};

/// Formats `value` with exactly `decimal_places` fraction digits.
///
/// Rounds the exact binary value half away from zero, so `0.125` becomes
/// `"0.13"` and `1.005` (stored as `1.00499..`) becomes `"1.00"`.
#[must_use]
pub fn to_fixed(value: f64, decimal_places: u32) -> String {
    let places = decimal_places.min(20);
    let Some(decimal) = Decimal::from_f64_retain(value) else {
        return to_fixed_exact(value, places as usize);
    };
    let mut rounded =
        decimal.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(places);
    // Large magnitudes cannot carry every requested fraction digit in 96 bits.
    if rounded.scale() != places {
        return to_fixed_exact(value, places as usize);
    }
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
        if value < 0.0 {
            return format!("-{rounded}");
        }
    }
    rounded.to_string()
}

/// Digit-string rounding over the full decimal expansion of `value`.
fn to_fixed_exact(value: f64, places: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    // 1074 fraction digits print any finite f64 exactly.
    let expanded = format!("{:.1074}", value.abs());
    let (int_part, frac_part) = expanded.split_once('.').unwrap_or((expanded.as_str(), ""));
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(places))
        .collect();
    let mut int_len = int_part.len();

    if frac_part.as_bytes().get(places).is_some_and(|digit| *digit >= b'5') {
        let mut position = digits.len();
        loop {
            if position == 0 {
                digits.insert(0, b'1');
                int_len += 1;
                break;
            }
            position -= 1;
            if digits[position] == b'9' {
                digits[position] = b'0';
            } else {
                digits[position] += 1;
                break;
            }
        }
    }

    let mut text = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        text.push('-');
    }
    for (index, digit) in digits.iter().enumerate() {
        if index == int_len {
            text.push('.');
        }
        text.push(char::from(*digit));
    }
    text
}

/// Shortest round-trip text for a bare number; integral values have no fraction part.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Covers negative zero.
        return "0".to_owned();
    }
    value.to_string()
}

/// Joins prefix, body and suffix without reallocating when both are empty.
#[must_use]
pub fn decorate_label(prefix: &str, body: String, suffix: &str) -> String {
    if prefix.is_empty() && suffix.is_empty() {
        return body;
    }
    let mut text = String::with_capacity(prefix.len() + body.len() + suffix.len());
    text.push_str(prefix);
    text.push_str(&body);
    text.push_str(suffix);
    text
}
