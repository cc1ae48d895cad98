use jiff::{Timestamp, civil::Date, tz::TimeZone};
use rust_decimal::Decimal;

/// Format a monetary amount with a currency symbol and two decimal places.
pub fn format_money(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

/// Render a timestamp in the viewer's time zone, e.g. "August 6, 2026".
pub fn format_timestamp(timestamp: Timestamp) -> String {
    timestamp
        .to_zoned(TimeZone::system())
        .strftime("%B %d, %Y")
        .to_string()
}

pub fn format_date(date: Date) -> String {
    date.strftime("%B %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_is_rounded_to_cents() {
        assert_eq!(format_money(Decimal::new(12345, 3)), "$12.35");
        assert_eq!(format_money(Decimal::new(5, 0)), "$5.00");
    }

    #[test]
    fn date_formatting() {
        assert_eq!(
            format_date(jiff::civil::date(2026, 8, 3)),
            "August 03, 2026"
        );
    }
}
