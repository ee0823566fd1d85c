//! Resolve a result code to its [`Descriptor`].
//!
//! # Lookup order
//!
//! ```text
//! find(code)
//!   │
//!   ├─ platform.message(code) ── Some(msg) ──► Descriptor{Unknown, Unknown, msg}
//!   │        (no lock held)
//!   ▼
//! state.read() ── pending empty? ── yes ──► cache[code] or Descriptor::unknown
//!   │ no
//!   ▼
//! state.write() → expand pending in registration order → downgrade → cache[code]
//! ```
//!
//! Providers are only expanded on the first lookup that gets past the
//! platform step. Expansion inserts a descriptor only if its code is not
//! cached yet, so the first registered provider wins on duplicates.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::OnceLock;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, trace};

use crate::codes;
use crate::error::{RescodeResult, ResultError};
use crate::platform::{self, PlatformMessages, SystemMessages};
use crate::{Descriptor, ProviderHandle, RegistryConfig, ResultCode};

/// Mutable registry state. Always accessed under `ResultRegistry::state`.
#[derive(Default)]
struct State {
    /// Registered but not yet expanded, in registration order.
    pending: Vec<ProviderHandle>,
    /// Names of providers already copied into `cache`.
    expanded: HashSet<&'static str>,
    cache: HashMap<ResultCode, Descriptor>,
}

impl State {
    fn is_known(&self, provider: &ProviderHandle) -> bool {
        self.expanded.contains(provider.name()) || self.pending.contains(provider)
    }

    fn expand_pending(&mut self) {
        for provider in std::mem::take(&mut self.pending) {
            let mut inserted = 0usize;
            let mut skipped = 0usize;

            for descriptor in provider.descriptors() {
                match self.cache.entry(descriptor.code()) {
                    Entry::Vacant(slot) => {
                        slot.insert(descriptor.clone());
                        inserted += 1;
                    }
                    Entry::Occupied(existing) => {
                        trace!(
                            code = %descriptor.code(),
                            provider = provider.name(),
                            kept = existing.get().api_code(),
                            dropped = descriptor.api_code(),
                            "duplicate result code skipped"
                        );
                        skipped += 1;
                    }
                }
            }

            self.expanded.insert(provider.name());
            debug!(provider = provider.name(), inserted, skipped, "expanded descriptor provider");
        }
    }
}

/// Shared code → descriptor registry.
///
/// Thread-safe. One `RwLock` covers the pending providers and the cache;
/// the platform lookup runs outside it.
///
/// # Example
///
/// ```
/// use rescode::{codes, RegistryConfig, ResultRegistry};
///
/// let registry = ResultRegistry::new(RegistryConfig::new().platform_lookup(false));
/// let d = registry.find(codes::E_INVALIDARG.code());
/// assert_eq!(d.module(), "General");
/// assert_eq!(d.api_code(), "E_INVALIDARG");
/// ```
pub struct ResultRegistry {
    platform: Option<Box<dyn PlatformMessages>>,
    state: RwLock<State>,
}

static GLOBAL: OnceLock<ResultRegistry> = OnceLock::new();

impl ResultRegistry {
    /// Create a registry using the OS message table (if enabled).
    pub fn new(config: RegistryConfig) -> Self {
        Self::with_platform(config, SystemMessages)
    }

    /// Create a registry with an injected platform lookup.
    ///
    /// The lookup is only consulted when `config.platform_lookup` is set.
    pub fn with_platform<P>(config: RegistryConfig, platform: P) -> Self
    where
        P: PlatformMessages + 'static,
    {
        let registry = Self {
            platform: config
                .platform_lookup
                .then(|| Box::new(platform) as Box<dyn PlatformMessages>),
            state: RwLock::new(State::default()),
        };

        if config.preload_bundled {
            for provider in codes::bundled() {
                registry.register_provider(provider);
            }
        }

        registry
    }

    /// Process-wide registry, built from `RegistryConfig::from_env()` on
    /// first use and never torn down.
    ///
    /// Prefer passing a `&ResultRegistry` explicitly where possible.
    pub fn global() -> &'static ResultRegistry {
        GLOBAL.get_or_init(|| Self::new(RegistryConfig::from_env()))
    }

    /// Queue a provider for lazy expansion.
    ///
    /// Registering a provider that is already pending or expanded has no
    /// effect.
    pub fn register_provider(&self, provider: ProviderHandle) {
        let mut state = self.state.write();
        if state.is_known(&provider) {
            trace!(provider = provider.name(), "provider already registered");
            return;
        }
        debug!(
            provider = provider.name(),
            descriptors = provider.len(),
            "registered descriptor provider"
        );
        state.pending.push(provider);
    }

    /// Describe `code`. Never fails.
    ///
    /// A platform message takes precedence over provider tables; codes
    /// nobody knows get [`Descriptor::unknown`].
    pub fn find(&self, code: ResultCode) -> Descriptor {
        if let Some(message) = self.platform_message(code) {
            trace!(%code, "platform message");
            return Descriptor::from_platform(code, message);
        }

        self.expanded_state()
            .cache
            .get(&code)
            .cloned()
            .unwrap_or_else(|| Descriptor::unknown(code))
    }

    /// Pass success codes through; turn failures into a [`ResultError`].
    ///
    /// ```
    /// use rescode::{codes, RegistryConfig, ResultRegistry};
    ///
    /// let registry = ResultRegistry::new(RegistryConfig::new().platform_lookup(false));
    /// assert!(registry.check(codes::S_FALSE.code()).is_ok());
    ///
    /// let err = registry.check(codes::E_POINTER.code()).unwrap_err();
    /// assert_eq!(err.descriptor().api_code(), "E_POINTER");
    /// ```
    pub fn check(&self, code: ResultCode) -> RescodeResult<ResultCode> {
        if code.is_failure() {
            Err(ResultError::new(self.find(code)))
        } else {
            Ok(code)
        }
    }

    /// `true` if `provider` is pending or already expanded.
    pub fn is_registered(&self, provider: &ProviderHandle) -> bool {
        self.state.read().is_known(provider)
    }

    /// Providers registered but not yet expanded.
    pub fn pending_len(&self) -> usize {
        self.state.read().pending.len()
    }

    /// Descriptors currently cached. Does not expand pending providers.
    pub fn cached_len(&self) -> usize {
        self.state.read().cache.len()
    }

    /// Every provider descriptor, sorted by code. Expands pending providers.
    pub fn descriptors(&self) -> Vec<Descriptor> {
        let mut all: Vec<Descriptor> = self.expanded_state().cache.values().cloned().collect();
        all.sort();
        all
    }

    /// All provider descriptors rendered one per line.
    pub fn dump_string(&self) -> String {
        let mut out = String::new();
        for descriptor in self.descriptors() {
            out.push_str(&descriptor.to_string());
            out.push('\n');
        }
        out
    }

    fn platform_message(&self, code: ResultCode) -> Option<String> {
        let platform = self.platform.as_ref()?;
        platform::normalize(platform.message(code))
    }

    /// Read guard over a state with no pending providers.
    fn expanded_state(&self) -> RwLockReadGuard<'_, State> {
        let state = self.state.read();
        if state.pending.is_empty() {
            return state;
        }
        drop(state);

        // Another thread may have expanded in between; expand_pending is
        // a no-op then.
        let mut state = self.state.write();
        state.expand_pending();
        RwLockWriteGuard::downgrade(state)
    }
}

impl Default for ResultRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl fmt::Debug for ResultRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("ResultRegistry")
            .field("platform_lookup", &self.platform.is_some())
            .field("pending", &state.pending)
            .field("expanded", &state.expanded.len())
            .field("cached", &state.cache.len())
            .finish()
    }
}
