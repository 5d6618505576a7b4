use rust_decimal::Decimal;

use crate::core::money;
use crate::modules::pricing::models::{CalculationInput, CalculationResult, ValidationError};

/// PricingCalculator derives a selling price from purchase cost, quantity,
/// desired margin and tax selection.
///
/// Margin here is profit as a fraction of the selling price, not of cost,
/// hence `selling_price = unit_cost / (1 - margin)`.
pub struct PricingCalculator;

impl PricingCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Validates the input and computes the five result figures.
    ///
    /// Validation short-circuits on the first failure. Each output is rounded
    /// to the nearest whole unit independently; the unrounded identities may
    /// therefore be off by one unit in the rounded output.
    pub fn calculate(
        &self,
        input: &CalculationInput,
    ) -> Result<CalculationResult, ValidationError> {
        if input.total_amount <= Decimal::ZERO {
            return Err(ValidationError::AmountNotPositive);
        }

        if input.quantity <= 0 {
            return Err(ValidationError::QuantityNotPositive);
        }

        // Margin must lie strictly inside (0, 100); the denominator below is
        // then strictly positive.
        if input.margin_percent <= Decimal::ZERO || input.margin_percent >= Decimal::ONE_HUNDRED {
            return Err(ValidationError::MarginOutOfRange);
        }

        let margin_fraction = input.margin_percent / Decimal::ONE_HUNDRED;
        let unit_cost = input.total_amount / Decimal::from(input.quantity);
        let selling_price = unit_cost / (Decimal::ONE - margin_fraction);
        let tax_amount = selling_price * input.tax_rate.fraction();
        let selling_price_with_tax = selling_price + tax_amount;
        let profit = selling_price - unit_cost;

        Ok(CalculationResult {
            unit_cost: money::round_to_unit(unit_cost),
            profit: money::round_to_unit(profit),
            selling_price: money::round_to_unit(selling_price),
            tax_amount: money::round_to_unit(tax_amount),
            selling_price_with_tax: money::round_to_unit(selling_price_with_tax),
        })
    }
}

impl Default for PricingCalculator {
    fn default() -> Self {
        Self::new()
    }
}
