//! Digit grouping shared by the formatters

/// Render `|value|` with a fixed number of decimals and thousands groups.
///
/// Returns whether a minus sign is needed alongside the digits. A value
/// that rounds to zero is never negative. Non-finite input renders as zero.
pub(crate) fn group_digits(value: f64, decimals: usize, group: char, decimal: char) -> (bool, String) {
    let value = if value.is_finite() { value } else { 0.0 };
    let fixed = format!("{:.*}", decimals, value.abs());

    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    let len = int_part.len();
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(group);
        }
        out.push(ch);
    }
    if let Some(frac_part) = frac_part {
        out.push(decimal);
        out.push_str(frac_part);
    }

    let non_zero = fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    (value < 0.0 && non_zero, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_boundaries() {
        assert_eq!(group_digits(999.0, 0, ',', '.').1, "999");
        assert_eq!(group_digits(1000.0, 0, ',', '.').1, "1,000");
        assert_eq!(group_digits(100_000.0, 0, ',', '.').1, "100,000");
        assert_eq!(group_digits(1_000_000.0, 2, '.', ',').1, "1.000.000,00");
    }

    #[test]
    fn test_sign_reporting() {
        assert_eq!(group_digits(-12.0, 0, ',', '.'), (true, "12".to_string()));
        assert_eq!(group_digits(-0.0, 2, ',', '.'), (false, "0.00".to_string()));
    }
}
