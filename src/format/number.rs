//! Number abbreviation and grouping

/// Abbreviate a count with a K/M suffix
///
/// Always returns a string. Values below one thousand are printed in
/// their shortest numeric form (`999`, `12.5`) rather than returned as a
/// number.
pub fn format_number(n: f64) -> String {
    if n >= 1_000_000.0 {
        format!("{}M", to_fixed(n / 1_000_000.0, 1))
    } else if n >= 1_000.0 {
        format!("{}K", to_fixed(n / 1_000.0, 1))
    } else {
        n.to_string()
    }
}

/// Render with a fixed number of decimals, ties rounded away from zero
///
/// `format!("{:.1}")` rounds exact halves to even (`1.25` gives `1.2`);
/// dashboard values round them up (`1.3`).
pub fn to_fixed(value: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;
    format!("{:.*}", decimals, rounded)
}

/// Render a number with comma thousands separators (en-US style)
///
/// At most three fraction digits are kept, trailing zeros dropped.
pub fn group_thousands(n: f64) -> String {
    if !n.is_finite() {
        return n.to_string();
    }

    let fixed = format!("{:.3}", n.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if !frac_part.is_empty() {
        grouped.push('.');
        grouped.push_str(frac_part);
    }

    if n < 0.0 && grouped.chars().any(|c| c != '0' && c != ',' && c != '.') {
        grouped.insert(0, '-');
    }

    grouped
}
