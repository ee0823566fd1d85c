use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::ResultCode;

/// Module / API code used for descriptors that no provider knows about.
pub const UNKNOWN: &str = "Unknown";

/// Description used when neither the platform nor a provider has a message.
pub const UNKNOWN_DESCRIPTION: &str = "Unknown error";

/// Diagnostic metadata attached to a [`ResultCode`].
///
/// Identity is the code alone: equality, hashing and ordering ignore
/// `module`, `api_code` and `description`. Two descriptors built
/// independently for `0x80004005` compare equal even if their text differs.
///
/// Static tables use [`Descriptor::new_static`]; descriptors synthesized at
/// lookup time own their strings.
#[derive(Clone)]
pub struct Descriptor {
    code: ResultCode,
    module: Cow<'static, str>,
    api_code: Cow<'static, str>,
    description: Cow<'static, str>,
}

impl Descriptor {
    /// Build a descriptor from static strings, usable in `const` items.
    ///
    /// ```
    /// use rescode::{Descriptor, ResultCode};
    /// const E_FAIL: Descriptor = Descriptor::new_static(
    ///     ResultCode::from_u32(0x8000_4005), "General", "E_FAIL", "Unspecified error");
    /// assert_eq!(E_FAIL.api_code(), "E_FAIL");
    /// ```
    pub const fn new_static(
        code: ResultCode,
        module: &'static str,
        api_code: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            code,
            module: Cow::Borrowed(module),
            api_code: Cow::Borrowed(api_code),
            description: Cow::Borrowed(description),
        }
    }

    pub fn new(
        code: ResultCode,
        module: impl Into<Cow<'static, str>>,
        api_code: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            code,
            module: module.into(),
            api_code: api_code.into(),
            description: description.into(),
        }
    }

    /// Sentinel returned for codes nobody can describe.
    pub const fn unknown(code: ResultCode) -> Self {
        Self::new_static(code, UNKNOWN, UNKNOWN, UNKNOWN_DESCRIPTION)
    }

    /// Descriptor carrying a message from the platform's system lookup.
    pub fn from_platform(code: ResultCode, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(code, UNKNOWN, UNKNOWN, message)
    }

    #[inline]
    pub fn code(&self) -> ResultCode {
        self.code
    }

    /// Module that owns the code (`"Unknown"` if not from a provider).
    #[inline]
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Symbolic API name, e.g. `DXGI_ERROR_DEVICE_REMOVED`.
    #[inline]
    pub fn api_code(&self) -> &str {
        &self.api_code
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Compare against a bare code. Only the code takes part.
    #[inline]
    pub fn is(&self, code: ResultCode) -> bool {
        self.code == code
    }

    /// `true` for descriptors produced by [`Descriptor::unknown`] or
    /// [`Descriptor::from_platform`].
    pub fn is_unknown_module(&self) -> bool {
        self.module == UNKNOWN
    }
}

impl From<&Descriptor> for ResultCode {
    #[inline]
    fn from(descriptor: &Descriptor) -> Self {
        descriptor.code
    }
}

// ── Identity by code ──────────────────────────────────────────────

impl PartialEq for Descriptor {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Descriptor {}

impl Hash for Descriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl PartialOrd for Descriptor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Descriptor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code.cmp(&other.code)
    }
}

// ── Rendering ─────────────────────────────────────────────────────

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HRESULT: [{}], Module: [{}], ApiCode: [{}], Message: {}",
            self.code, self.module, self.api_code, self.description
        )
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("code", &self.code)
            .field("module", &self.module)
            .field("api_code", &self.api_code)
            .field("description", &self.description)
            .finish()
    }
}
