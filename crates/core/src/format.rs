//! Display formatting for numbers, fuel volumes, and currency amounts.
//! Matches the mobile app's conventions: thousands grouped with spaces,
//! liters to one decimal, whole rubles.

/// Round half-up: exact halves go toward positive infinity, the rounding
/// the display layer has always used.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Insert space separators into the integer digits of an already
/// formatted number: `"1234567.8"` → `"1 234 567.8"`.
fn group_thousands(formatted: &str) -> String {
    let (sign, rest) = match formatted.strip_prefix('-') {
        Some(stripped) => ("-", stripped),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (rest, None),
    };

    let digits = int_part.len();
    let mut grouped = String::with_capacity(formatted.len() + digits / 3);
    grouped.push_str(sign);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

/// Format a number for display: space-grouped thousands, rounded to an
/// integer, or kept to one decimal with `with_decimals`.
pub fn format_number(value: f64, with_decimals: bool) -> String {
    let formatted = if with_decimals {
        format!("{value:.1}")
    } else {
        format!("{}", round_half_up(value))
    };
    group_thousands(&formatted)
}

/// Format a fuel volume: one decimal, liter suffix.
pub fn format_fuel(liters: f64) -> String {
    format!("{liters:.1} л")
}

/// Format a currency amount: whole rubles, space-grouped.
pub fn format_currency(amount: f64) -> String {
    format!("{} ₽", format_number(amount, false))
}
