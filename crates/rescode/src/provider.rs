//! Descriptor providers.
//!
//! A provider is a module that owns a fixed, ordered table of
//! [`Descriptor`]s. It hands the registry a [`ProviderHandle`]; the table is
//! only copied into the registry cache the first time a lookup needs it.
//!
//! Tables are normally declared with [`descriptor_table!`](crate::descriptor_table).

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::Descriptor;

/// Reference to a provider's descriptor table.
///
/// Identity is the `name`. Registering two handles with the same name is
/// the same as registering one, so names must be unique per table; the
/// `descriptor_table!` macro uses `module_path!()` for that.
#[derive(Clone, Copy)]
pub struct ProviderHandle {
    name: &'static str,
    descriptors: &'static [Descriptor],
}

impl ProviderHandle {
    pub const fn new(name: &'static str, descriptors: &'static [Descriptor]) -> Self {
        Self { name, descriptors }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The table, in declaration order.
    #[inline]
    pub fn descriptors(&self) -> &'static [Descriptor] {
        self.descriptors
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl PartialEq for ProviderHandle {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ProviderHandle {}

impl Hash for ProviderHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Debug for ProviderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.name, self.descriptors.len())
    }
}

/// Declare a provider table.
///
/// Emits one `pub const` [`Descriptor`] per entry (the constant's name is
/// also its API code) and a `pub static` [`ProviderHandle`] listing them in
/// order.
///
/// ```
/// use rescode::{descriptor_table, ResultRegistry, RegistryConfig};
///
/// descriptor_table! {
///     /// Codes from the audio subsystem.
///     pub static AUDIO: module = "Audio" {
///         AUDIO_E_NO_DEVICE = 0x8889_0001 => "No audio endpoint is available",
///         AUDIO_E_BUSY      = 0x8889_0002 => "The device is in use",
///     }
/// }
///
/// let registry = ResultRegistry::new(RegistryConfig::new().platform_lookup(false));
/// registry.register_provider(AUDIO);
/// assert_eq!(registry.find(AUDIO_E_BUSY.code()).api_code(), "AUDIO_E_BUSY");
/// ```
#[macro_export]
macro_rules! descriptor_table {
    (
        $(#[$meta:meta])*
        $vis:vis static $handle:ident : module = $module:literal {
            $(
                $(#[$item_meta:meta])*
                $name:ident = $code:literal => $desc:literal
            ),* $(,)?
        }
    ) => {
        $(
            $(#[$item_meta])*
            $vis const $name: $crate::Descriptor = $crate::Descriptor::new_static(
                $crate::ResultCode::from_u32($code),
                $module,
                stringify!($name),
                $desc,
            );
        )*

        $(#[$meta])*
        $vis static $handle: $crate::ProviderHandle = $crate::ProviderHandle::new(
            concat!(module_path!(), "::", stringify!($handle)),
            {
                // Own static so the array is promoted to 'static.
                static TABLE: &[$crate::Descriptor] = &[$($name),*];
                TABLE
            },
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ResultCode;

    descriptor_table! {
        static ALPHA: module = "Alpha" {
            ALPHA_E_ONE = 0x8100_0001 => "first",
            ALPHA_E_TWO = 0x8100_0002 => "second",
        }
    }

    descriptor_table! {
        static EMPTY: module = "Empty" {}
    }

    #[test]
    fn macro_builds_consts() {
        assert_eq!(ALPHA_E_ONE.code(), ResultCode::from_u32(0x8100_0001));
        assert_eq!(ALPHA_E_ONE.module(), "Alpha");
        assert_eq!(ALPHA_E_ONE.api_code(), "ALPHA_E_ONE");
        assert_eq!(ALPHA_E_TWO.description(), "second");
    }

    #[test]
    fn handle_lists_in_order() {
        let codes: Vec<_> = ALPHA.descriptors().iter().map(|d| d.api_code()).collect();
        assert_eq!(codes, ["ALPHA_E_ONE", "ALPHA_E_TWO"]);
        assert_eq!(ALPHA.len(), 2);
        assert!(EMPTY.is_empty());
    }

    #[test]
    fn handle_name_is_module_qualified() {
        assert!(ALPHA.name().ends_with("::ALPHA"));
        assert!(ALPHA.name().starts_with("rescode"));
    }

    #[test]
    fn non_empty_table_is_static() {
        let table: &'static [Descriptor] = ALPHA.descriptors();
        assert_eq!(table[0], ALPHA_E_ONE);
        assert_eq!(table[1].description(), "second");
    }

    #[test]
    fn identity_by_name() {
        static OTHER: [Descriptor; 0] = [];
        let same = ProviderHandle::new(ALPHA.name(), &OTHER);
        assert_eq!(same, ALPHA);
        assert_ne!(ALPHA, EMPTY);
    }
}
