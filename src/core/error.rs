use thiserror::Error;

/// Errors that can occur while computing recommendations
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("Invalid weight for {location}: {value}")]
    InvalidWeight { location: &'static str, value: f64 },
}
