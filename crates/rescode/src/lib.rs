//! # rescode: result-code descriptor registry
//!
//! Maps raw 32-bit status codes (HRESULT-style) returned by native calls to
//! a [`Descriptor`]: owning module, symbolic API code, and a human-readable
//! message. Meant for diagnostics and error messages, so lookup never fails.
//!
//! ## Design
//!
//! - **Providers** own static descriptor tables and hand the registry a
//!   [`ProviderHandle`]. Registration is cheap bookkeeping; tables are copied
//!   into the cache on the first lookup that needs them.
//! - **Platform lookup** ([`PlatformMessages`]) is asked first. On Windows it
//!   is the system message table; elsewhere it is absent.
//! - **Unknown** codes degrade to `Module: [Unknown], ApiCode: [Unknown]`.
//!
//! ## Quick Start
//!
//! ```rust
//! use rescode::{descriptor_table, RegistryConfig, ResultCode, ResultRegistry};
//!
//! descriptor_table! {
//!     pub static NET: module = "Net" {
//!         NET_E_RESET = 0x8765_0001 => "Connection reset by peer",
//!     }
//! }
//!
//! let registry = ResultRegistry::new(RegistryConfig::new().platform_lookup(false));
//! registry.register_provider(NET);
//!
//! let d = registry.find(ResultCode::from_u32(0x8765_0001));
//! assert_eq!(
//!     d.to_string(),
//!     "HRESULT: [0x87650001], Module: [Net], ApiCode: [NET_E_RESET], Message: Connection reset by peer"
//! );
//!
//! let unknown = registry.find(ResultCode::from_u32(0x8765_00FF));
//! assert_eq!(unknown.description(), "Unknown error");
//! ```
//!
//! ## Environment
//!
//! | Variable                  | Default | Effect                              |
//! |---------------------------|---------|-------------------------------------|
//! | `RESCODE_PLATFORM_LOOKUP` | on      | Ask the OS message table first      |
//! | `RESCODE_PRELOAD_BUNDLED` | on      | Register `codes::GENERAL` and `codes::DXGI` |

mod code;
mod descriptor;
mod provider;
mod config;
mod error;
mod registry;

pub mod codes;
pub mod platform;

// ── Public API ────────────────────────────────────────────────────

pub use code::ResultCode;
pub use descriptor::{Descriptor, UNKNOWN, UNKNOWN_DESCRIPTION};
pub use provider::ProviderHandle;
pub use config::RegistryConfig;
pub use error::{ParseCodeError, RescodeResult, ResultError};
pub use platform::{NoPlatformMessages, PlatformMessages, SystemMessages};
pub use registry::ResultRegistry;
