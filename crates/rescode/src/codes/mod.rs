//! Bundled descriptor tables.
//!
//! | Table     | Module      | Facility | Contents                          |
//! |-----------|-------------|----------|-----------------------------------|
//! | `GENERAL` | `"General"` | 0 / 7    | COM-style `S_*` / `E_*` codes     |
//! | `DXGI`    | `"DXGI"`    | 0x7A     | DXGI errors and status codes      |
//!
//! Both are registered by `ResultRegistry::new` unless
//! `RegistryConfig::preload_bundled` is off.
//!
//! # Usage
//!
//! ```rust
//! use rescode::codes::*;
//!
//! assert_eq!(E_FAIL.api_code(), "E_FAIL");
//! assert!(DXGI_ERROR_DEVICE_REMOVED.code().is_failure());
//! ```

mod general;
mod dxgi;

pub use general::*;
pub use dxgi::*;

use crate::ProviderHandle;

/// Every bundled table, in registration order.
pub fn bundled() -> [ProviderHandle; 2] {
    [GENERAL, DXGI]
}
