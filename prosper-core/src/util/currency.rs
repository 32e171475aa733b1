/// Format whole dollars like `$12,000` or `-$60`.
pub fn format_usd(amount: impl Into<i64>) -> String {
    let amount = amount.into();
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}${grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_thousands() {
        assert_eq!(format_usd(0), "$0");
        assert_eq!(format_usd(900), "$900");
        assert_eq!(format_usd(8_000_u32), "$8,000");
        assert_eq!(format_usd(12_000), "$12,000");
        assert_eq!(format_usd(1_234_567), "$1,234,567");
    }

    #[test]
    fn negative_amounts() {
        assert_eq!(format_usd(-60), "-$60");
        assert_eq!(format_usd(-3_500), "-$3,500");
    }
}
