pub mod calculation;

pub use calculation::{CalculationInput, CalculationResult, TaxRate, ValidationError};
