//! Thousands-separator number formatting.

/// Formats `value` with `,` between every three digits of the integer part.
///
/// The digits come from the shortest representation that round-trips the value, so
/// `1000500.0` becomes `1,000,500` and `1234.5` becomes `1,234.5`.
pub fn commaf(value: f64) -> String {
    let plain = value.abs().to_string();
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (plain.as_str(), None),
    };

    let mut out = String::with_capacity(plain.len() + int_part.len() / 3 + 1);
    if value.is_sign_negative() && value != 0.0 {
        out.push('-');
    }
    let lead = match int_part.len() % 3 {
        0 => 3,
        n => n,
    };
    for (i, ch) in int_part.chars().enumerate() {
        if i >= lead && (i - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}
