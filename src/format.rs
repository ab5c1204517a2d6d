//! Display helpers shared by shells.

use chrono::NaiveDate;

/// Whole-unit amount with comma grouping: `1234567.0` -> `"1,234,567"`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "0".to_string();
    }
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Rate as a whole percentage, truncated: `0.075` -> `"7%"`.
pub fn format_percentage(rate: f64) -> String {
    // Nudge past float noise so 0.29 stays 29, not 28.
    let percent = (rate * 100.0 + 1e-9).trunc() as i64;
    format!("{}%", percent)
}

/// `Jan 05, 2026`.
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}
