//! Amount Formatting
//!
//! Amounts travel through the system in minor units and are only converted
//! to a decimal string at the display edge.

use rust_decimal::Decimal;

/// Format an amount in minor units as a two-decimal string (2300 -> "23.00").
pub fn format_minor_units(amount: i64) -> String {
    Decimal::new(amount, 2).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_dollar_amounts() {
        assert_eq!(format_minor_units(2300), "23.00");
        assert_eq!(format_minor_units(2500), "25.00");
        assert_eq!(format_minor_units(2800), "28.00");
    }

    #[test]
    fn test_sub_dollar_amounts() {
        assert_eq!(format_minor_units(5), "0.05");
        assert_eq!(format_minor_units(99), "0.99");
        assert_eq!(format_minor_units(0), "0.00");
    }

    #[test]
    fn test_non_round_amounts() {
        assert_eq!(format_minor_units(2301), "23.01");
        assert_eq!(format_minor_units(100), "1.00");
    }
}
