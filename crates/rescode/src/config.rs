//! Registry configuration
//!
//! Library defaults with runtime environment overrides.
//!
//! # Example
//!
//! ```rust
//! use rescode::RegistryConfig;
//!
//! // Defaults with env overrides
//! let config = RegistryConfig::from_env();
//!
//! // Or customize programmatically
//! let config = RegistryConfig::from_env()
//!     .platform_lookup(false)
//!     .preload_bundled(true);
//! ```

/// Env var: ask the OS for messages before consulting providers.
pub const ENV_PLATFORM_LOOKUP: &str = "RESCODE_PLATFORM_LOOKUP";

/// Env var: register the bundled code tables at construction.
pub const ENV_PRELOAD_BUNDLED: &str = "RESCODE_PRELOAD_BUNDLED";

/// Registry configuration with builder pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Consult the platform message table first
    pub platform_lookup: bool,
    /// Register `codes::GENERAL` and `codes::DXGI` on construction
    pub preload_bundled: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl RegistryConfig {
    /// Library defaults, ignoring the environment.
    pub const fn new() -> Self {
        Self {
            platform_lookup: true,
            preload_bundled: true,
        }
    }

    /// Library defaults with environment overrides.
    ///
    /// Environment variables (all optional):
    /// - `RESCODE_PLATFORM_LOOKUP` - Consult the OS message table (0/1)
    /// - `RESCODE_PRELOAD_BUNDLED` - Register bundled tables (0/1)
    pub fn from_env() -> Self {
        let defaults = Self::new();
        Self {
            platform_lookup: env_get_bool(ENV_PLATFORM_LOOKUP, defaults.platform_lookup),
            preload_bundled: env_get_bool(ENV_PRELOAD_BUNDLED, defaults.preload_bundled),
        }
    }

    /// Enable or disable the platform lookup
    pub fn platform_lookup(mut self, enable: bool) -> Self {
        self.platform_lookup = enable;
        self
    }

    /// Enable or disable registration of the bundled tables
    pub fn preload_bundled(mut self, enable: bool) -> Self {
        self.preload_bundled = enable;
        self
    }
}

/// Accepts "1", "true", "yes", "on" (case-insensitive) as true.
/// Any other value is false; unset returns the default.
fn env_get_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(val) => matches!(val.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn library_defaults() {
        let c = RegistryConfig::new();
        assert!(c.platform_lookup);
        assert!(c.preload_bundled);
    }

    #[test]
    fn builder() {
        let c = RegistryConfig::new().platform_lookup(false).preload_bundled(false);
        assert!(!c.platform_lookup);
        assert!(!c.preload_bundled);
    }

    #[test]
    fn env_bool_unset_returns_default() {
        assert!(env_get_bool("__RESCODE_TEST_UNSET__", true));
        assert!(!env_get_bool("__RESCODE_TEST_UNSET__", false));
    }

    #[test]
    fn env_bool_variants() {
        let key = "__RESCODE_TEST_BOOL__";
        for (val, expected) in [("1", true), ("TRUE", true), ("on", true), (" yes ", true),
                                ("0", false), ("off", false), ("garbage", false)] {
            std::env::set_var(key, val);
            assert_eq!(env_get_bool(key, !expected), expected, "value {val:?}");
        }
        std::env::remove_var(key);
    }
}
