// Pricing calculation input/output types.
//
// A CalculationInput is built fresh from the raw form strings at submission
// time, validated, consumed to produce exactly one CalculationResult or one
// ValidationError, then discarded. Nothing persists across submissions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::AppError;

/// Tax selection offered by the form. The wire values mirror the form's
/// option values ("none", "0", "10", "22").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxRate {
    /// "Sin IVA" — no tax applied
    #[serde(rename = "none")]
    None,
    /// "Exento 0%"
    #[serde(rename = "0")]
    Exempt,
    /// "Mínimo 10%"
    #[serde(rename = "10")]
    Reduced,
    /// "Básico 22%"
    #[serde(rename = "22")]
    Standard,
}

impl TaxRate {
    /// Tax rate as a fraction of the pre-tax selling price.
    /// `None` and `Exempt` both apply zero tax.
    pub fn fraction(&self) -> Decimal {
        match self {
            TaxRate::None | TaxRate::Exempt => Decimal::ZERO,
            TaxRate::Reduced => Decimal::new(10, 2),  // 0.10
            TaxRate::Standard => Decimal::new(22, 2), // 0.22
        }
    }

    /// Percent label for display ("0", "10", "22").
    pub fn percent_label(&self) -> &'static str {
        match self {
            TaxRate::None | TaxRate::Exempt => "0",
            TaxRate::Reduced => "10",
            TaxRate::Standard => "22",
        }
    }
}

impl std::str::FromStr for TaxRate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(TaxRate::None),
            "0" => Ok(TaxRate::Exempt),
            "10" => Ok(TaxRate::Reduced),
            "22" => Ok(TaxRate::Standard),
            _ => Err(format!("Invalid tax selection: {}", s)),
        }
    }
}

/// Validated-shape pricing input, one per form submission.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationInput {
    /// Total purchase cost
    pub total_amount: Decimal,
    /// Number of units purchased
    pub quantity: i64,
    /// Desired profit margin as a percentage of selling price
    pub margin_percent: Decimal,
    /// Tax applied to the final price
    pub tax_rate: TaxRate,
}

impl CalculationInput {
    /// Builds an input from the raw form field strings.
    ///
    /// A string that fails to parse as a number is treated as 0, which then
    /// fails the corresponding positivity check during calculation.
    pub fn from_form(amount: &str, quantity: &str, margin: &str, tax_rate: TaxRate) -> Self {
        Self {
            total_amount: amount.trim().parse().unwrap_or(Decimal::ZERO),
            quantity: quantity.trim().parse().unwrap_or(0),
            margin_percent: margin.trim().parse().unwrap_or(Decimal::ZERO),
            tax_rate,
        }
    }
}

/// The five derived figures, each already rounded to the nearest whole unit.
///
/// Fields are rounded independently, so the identities
/// `selling_price_with_tax = selling_price + tax_amount` and
/// `profit = selling_price - unit_cost` can be off by one unit after
/// rounding. That matches the form's observed behavior and is intentional.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    pub unit_cost: Decimal,
    pub profit: Decimal,
    pub selling_price: Decimal,
    pub tax_amount: Decimal,
    pub selling_price_with_tax: Decimal,
}

/// Closed set of pricing validation failures. Checks short-circuit, so a
/// submission reports at most one of these.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Amount must be greater than 0")]
    AmountNotPositive,

    #[error("Quantity must be greater than 0")]
    QuantityNotPositive,

    #[error("Margin must be between 0% and 100% (exclusive)")]
    MarginOutOfRange,
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}
