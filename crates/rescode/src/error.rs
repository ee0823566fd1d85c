//! Error types.
//!
//! Lookup itself never fails. These types cover the two places where a
//! caller asks for a `Result`: turning a failed native call into an error
//! value, and parsing a code typed by a human.

use thiserror::Error;

use crate::{Descriptor, ResultCode};

/// Result type for checked native calls.
pub type RescodeResult<T> = Result<T, ResultError>;

/// A failed result code together with everything the registry knows
/// about it.
///
/// Displays as the descriptor's canonical rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{descriptor}")]
pub struct ResultError {
    descriptor: Descriptor,
}

impl ResultError {
    pub fn new(descriptor: Descriptor) -> Self {
        Self { descriptor }
    }

    #[inline]
    pub fn code(&self) -> ResultCode {
        self.descriptor.code()
    }

    #[inline]
    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    pub fn into_descriptor(self) -> Descriptor {
        self.descriptor
    }
}

impl From<Descriptor> for ResultError {
    fn from(descriptor: Descriptor) -> Self {
        Self::new(descriptor)
    }
}

/// Errors from parsing a [`ResultCode`] out of text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCodeError {
    #[error("empty result code")]
    Empty,

    #[error("invalid hexadecimal result code: {0}")]
    InvalidHex(String),

    #[error("invalid decimal result code: {0}")]
    InvalidDecimal(String),

    #[error("result code out of 32-bit range: {0}")]
    OutOfRange(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_error_display_is_descriptor() {
        let d = Descriptor::new_static(
            ResultCode::from_u32(0x8000_4005),
            "General",
            "E_FAIL",
            "Unspecified error",
        );
        let err = ResultError::from(d.clone());
        assert_eq!(err.to_string(), d.to_string());
        assert_eq!(err.code(), ResultCode::from_u32(0x8000_4005));
        assert_eq!(err.descriptor().api_code(), "E_FAIL");
    }

    #[test]
    fn parse_error_display() {
        assert_eq!(ParseCodeError::Empty.to_string(), "empty result code");
        assert_eq!(
            ParseCodeError::InvalidHex("0xZZ".into()).to_string(),
            "invalid hexadecimal result code: 0xZZ"
        );
    }
}
