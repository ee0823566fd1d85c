//! The raw 32-bit status value returned by native calls.
//!
//! Layout follows the HRESULT convention:
//!
//! ```text
//!  31  30..27  26............16  15...............0
//! ┌───┬───────┬────────────────┬──────────────────┐
//! │ S │ flags │    facility    │       code       │
//! └───┴───────┴────────────────┴──────────────────┘
//! ```
//!
//! The facility is the 11-bit field only. SDK headers often quote it with
//! the reserved `X` flag (bit 27) folded in, e.g. DXGI's `0x87A` is
//! facility `0x7A` here.
//!
//! `S` (bit 31) set means failure. Everything else is opaque to the
//! registry, which only uses the value as a hashable key.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCodeError;

/// A 32-bit signed status value. Negative means failure.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ResultCode(i32);

impl ResultCode {
    /// Severity bit.
    pub const FAILURE_BIT: u32 = 0x8000_0000;

    /// Wrap a raw signed value.
    #[inline]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Wrap an unsigned bit pattern, e.g. `0x8000_4005`.
    ///
    /// ```
    /// use rescode::ResultCode;
    /// assert_eq!(ResultCode::from_u32(0x8000_4005).raw(), -2147467259);
    /// ```
    #[inline]
    pub const fn from_u32(bits: u32) -> Self {
        Self(bits as i32)
    }

    /// The raw signed value.
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// The unsigned bit pattern.
    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.0 as u32
    }

    /// `true` if the severity bit is set.
    #[inline]
    pub const fn is_failure(self) -> bool {
        self.0 < 0
    }

    #[inline]
    pub const fn is_success(self) -> bool {
        !self.is_failure()
    }

    /// Facility field (bits 16..=26).
    #[inline]
    pub const fn facility(self) -> u16 {
        ((self.as_u32() >> 16) & 0x7FF) as u16
    }

    /// Low 16 bits.
    #[inline]
    pub const fn code_part(self) -> u16 {
        (self.as_u32() & 0xFFFF) as u16
    }
}

impl From<i32> for ResultCode {
    #[inline]
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

impl From<u32> for ResultCode {
    #[inline]
    fn from(bits: u32) -> Self {
        Self::from_u32(bits)
    }
}

impl From<ResultCode> for i32 {
    #[inline]
    fn from(code: ResultCode) -> Self {
        code.0
    }
}

// ── Formatting ────────────────────────────────────────────────────

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.as_u32())
    }
}

impl fmt::Debug for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResultCode(0x{:08X})", self.as_u32())
    }
}

impl fmt::UpperHex for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.as_u32(), f)
    }
}

impl fmt::LowerHex for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.as_u32(), f)
    }
}

// ── Parsing ───────────────────────────────────────────────────────

impl FromStr for ResultCode {
    type Err = ParseCodeError;

    /// Accepts `0x`-prefixed hex (unsigned bit pattern) or decimal in
    /// either the `i32` or `u32` range.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseCodeError::Empty);
        }

        if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            let hex = hex.replace('_', "");
            if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(ParseCodeError::InvalidHex(s.to_string()));
            }
            return u32::from_str_radix(&hex, 16)
                .map(Self::from_u32)
                .map_err(|_| ParseCodeError::OutOfRange(s.to_string()));
        }

        let wide: i64 = s
            .parse()
            .map_err(|_| ParseCodeError::InvalidDecimal(s.to_string()))?;
        if let Ok(raw) = i32::try_from(wide) {
            Ok(Self(raw))
        } else if let Ok(bits) = u32::try_from(wide) {
            Ok(Self::from_u32(bits))
        } else {
            Err(ParseCodeError::OutOfRange(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E_FAIL: ResultCode = ResultCode::from_u32(0x8000_4005);

    #[test]
    fn signed_and_unsigned_views() {
        assert_eq!(E_FAIL.raw(), -2147467259);
        assert_eq!(E_FAIL.as_u32(), 0x8000_4005);
        assert_eq!(ResultCode::new(-2147467259), E_FAIL);
    }

    #[test]
    fn severity() {
        assert!(E_FAIL.is_failure());
        assert!(ResultCode::new(0).is_success());
        assert!(ResultCode::new(1).is_success());
    }

    #[test]
    fn fields() {
        let dxgi = ResultCode::from_u32(0x887A_0004);
        assert_eq!(dxgi.facility(), 0x7A);
        assert_eq!(ResultCode::from_u32(0xFFFF_0000).facility(), 0x7FF);
        assert_eq!(dxgi.code_part(), 0x0004);
        assert_eq!(E_FAIL.facility(), 0);
        assert_eq!(E_FAIL.code_part(), 0x4005);
    }

    #[test]
    fn display_is_padded_upper_hex() {
        assert_eq!(format!("{}", E_FAIL), "0x80004005");
        assert_eq!(format!("{}", ResultCode::new(1)), "0x00000001");
        assert_eq!(format!("{:x}", ResultCode::from_u32(0x887A_000A)), "887a000a");
        assert_eq!(format!("{:?}", E_FAIL), "ResultCode(0x80004005)");
    }

    #[test]
    fn parse_hex() {
        assert_eq!("0x80004005".parse::<ResultCode>(), Ok(E_FAIL));
        assert_eq!("0X8000_4005".parse::<ResultCode>(), Ok(E_FAIL));
        assert_eq!(" 0x1 ".parse::<ResultCode>(), Ok(ResultCode::new(1)));
    }

    #[test]
    fn parse_decimal() {
        assert_eq!("-2147467259".parse::<ResultCode>(), Ok(E_FAIL));
        assert_eq!("2147500037".parse::<ResultCode>(), Ok(E_FAIL));
        assert_eq!("0".parse::<ResultCode>(), Ok(ResultCode::new(0)));
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<ResultCode>(), Err(ParseCodeError::Empty));
        assert!(matches!("0xZZ".parse::<ResultCode>(), Err(ParseCodeError::InvalidHex(_))));
        assert!(matches!("0x".parse::<ResultCode>(), Err(ParseCodeError::InvalidHex(_))));
        assert!(matches!("0x1_0000_0000".parse::<ResultCode>(), Err(ParseCodeError::OutOfRange(_))));
        assert!(matches!("abc".parse::<ResultCode>(), Err(ParseCodeError::InvalidDecimal(_))));
        assert!(matches!("4294967296".parse::<ResultCode>(), Err(ParseCodeError::OutOfRange(_))));
    }
}
