pub mod pricing;
pub mod sessions;
