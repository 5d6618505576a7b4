//! Pricing controller for HTTP endpoints
//!
//! Exposes the calculator to the form frontend. Fields arrive as the raw
//! strings the form collected; the calculator re-validates regardless of any
//! widget-side constraints.

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{money, AppError};
use crate::modules::pricing::models::{CalculationInput, TaxRate};
use crate::modules::pricing::services::PricingCalculator;

/// Raw form fields as submitted
#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    /// Total purchase cost, decimal string with up to 2 decimal places
    pub amount: String,
    /// Positive integer string
    pub quantity: String,
    /// Decimal string with up to 1 decimal place
    pub margin: String,
    /// One of "none", "0", "10", "22"
    pub tax: TaxRate,
}

/// Display-formatted counterparts of the five result figures
#[derive(Debug, Serialize)]
pub struct DisplayFigures {
    pub unit_cost: String,
    pub profit: String,
    pub selling_price: String,
    pub tax_amount: String,
    pub selling_price_with_tax: String,
}

#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub unit_cost: Decimal,
    pub profit: Decimal,
    pub selling_price: Decimal,
    pub tax_amount: Decimal,
    pub selling_price_with_tax: Decimal,
    /// Percent label of the applied tax ("0", "10", "22")
    pub tax_percent: &'static str,
    pub display: DisplayFigures,
}

/// Run one pricing calculation
///
/// POST /pricing/calculate
pub async fn calculate(
    request: web::Json<CalculateRequest>,
) -> Result<HttpResponse, AppError> {
    let input = CalculationInput::from_form(
        &request.amount,
        &request.quantity,
        &request.margin,
        request.tax,
    );

    let result = PricingCalculator::new().calculate(&input).map_err(|err| {
        tracing::debug!(error = %err, "Pricing input rejected");
        AppError::from(err)
    })?;

    tracing::info!(
        selling_price = %result.selling_price,
        tax = request.tax.percent_label(),
        "Calculation completed"
    );

    Ok(HttpResponse::Ok().json(CalculateResponse {
        display: DisplayFigures {
            unit_cost: money::format_amount(result.unit_cost),
            profit: money::format_amount(result.profit),
            selling_price: money::format_amount(result.selling_price),
            tax_amount: money::format_amount(result.tax_amount),
            selling_price_with_tax: money::format_amount(result.selling_price_with_tax),
        },
        unit_cost: result.unit_cost,
        profit: result.profit,
        selling_price: result.selling_price,
        tax_amount: result.tax_amount,
        selling_price_with_tax: result.selling_price_with_tax,
        tax_percent: request.tax.percent_label(),
    }))
}

/// Configure pricing routes
pub fn configure_pricing_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/pricing").route("/calculate", web::post().to(calculate)));
}
