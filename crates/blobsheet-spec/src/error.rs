//! Error types for validating sheet parameters.

use thiserror::Error;

/// Errors raised by the data model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    /// Scale factor outside the supported range.
    #[error("scale factor {scale} is out of range (expected 1..={max})")]
    InvalidScale { scale: u32, max: u32 },

    /// Output path does not name a PNG file.
    #[error("output path '{0}' must have a .png extension")]
    OutputNotPng(String),
}
