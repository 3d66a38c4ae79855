/// Format a balance for display, e.g. `1234.5` → `"$1,234.50"`.
///
/// Balances arrive from the API as JSON numbers; rendering rounds to
/// cents and groups thousands.
pub fn format_balance(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{frac:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_amounts() {
        assert_eq!(format_balance(10.0), "$10.00");
        assert_eq!(format_balance(0.0), "$0.00");
    }

    #[test]
    fn formats_cents_and_grouping() {
        assert_eq!(format_balance(1234.5), "$1,234.50");
        assert_eq!(format_balance(1_000_000.0), "$1,000,000.00");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(format_balance(-3.2), "-$3.20");
    }

    #[test]
    fn rounds_to_cents() {
        assert_eq!(format_balance(9.999), "$10.00");
    }
}
