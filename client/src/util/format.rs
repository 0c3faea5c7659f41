//! Display formatting for prices and timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// `1499.5` -> `"1 499.50 ₽"`.
#[must_use]
pub fn format_price(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{cents} ₽")
}

/// `"2024-03-01T10:15:30.123Z"` -> `"2024-03-01 10:15"`. Unrecognized input
/// is returned unchanged.
#[must_use]
pub fn format_timestamp(raw: &str) -> String {
    let Some((date, time)) = raw.split_once('T') else {
        return raw.to_owned();
    };
    match time.get(..5) {
        Some(hm) if hm.as_bytes().get(2) == Some(&b':') => format!("{date} {hm}"),
        _ => raw.to_owned(),
    }
}
