use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary value to the nearest whole unit, half-up.
///
/// Result values are displayed as whole currency units, so every figure
/// the calculator emits passes through this before leaving the core.
pub fn round_to_unit(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a whole-unit amount for display: "$" prefix and dot thousands
/// grouping ("$1.234.500"), matching the es-ES rendering of the web form.
pub fn format_amount(amount: Decimal) -> String {
    let units = round_to_unit(amount);
    let raw = units.abs().to_string();

    let mut grouped = String::with_capacity(raw.len() + raw.len() / 3 + 2);
    for (i, digit) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    if units.is_sign_negative() && !units.is_zero() {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}
