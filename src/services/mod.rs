pub mod pricing_service;
pub mod validation_service;
