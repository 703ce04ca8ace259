//! Number formatting for the page and the chart axis

/// Round to a whole number and insert thousands separators (1234567.8 -> "1,234,568")
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round();
    if !rounded.is_finite() {
        return rounded.to_string();
    }
    let digits = format!("{:.0}", rounded.abs());

    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    let grouped: String = result.chars().rev().collect();

    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Two decimal places, for rates already expressed in percent
pub fn format_percent(value: f64) -> String {
    format!("{:.2}", value)
}
