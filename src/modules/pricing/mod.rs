pub mod controllers;
pub mod models;
pub mod services;

pub use models::{CalculationInput, CalculationResult, TaxRate, ValidationError};
pub use services::PricingCalculator;
