use rust_decimal::Decimal;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Displays a number rounded to zero decimal places with `,` between every group of
/// three digits, e.g. `1500000.5` as `1,500,000`.
///
/// Rounding is half-to-even, so `2.5` displays as `2` and `3.5` as `4`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Thousands(pub Decimal);

impl From<Decimal> for Thousands {
    fn from(value: Decimal) -> Self {
        Thousands(value)
    }
}

impl From<u64> for Thousands {
    fn from(value: u64) -> Self {
        Thousands(Decimal::from(value))
    }
}

impl From<usize> for Thousands {
    fn from(value: usize) -> Self {
        Thousands(Decimal::from(value))
    }
}

impl Display for Thousands {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let rounded = self.0.round_dp(0);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
        let digits = rounded.abs().trunc().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

        for (index, digit) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        write!(formatter, "{}{}", sign, grouped)
    }
}
