//! Platform system-message lookup.
//!
//! The registry asks the platform first. On Windows that is
//! `FormatMessageW(FORMAT_MESSAGE_FROM_SYSTEM)`; other targets have no
//! facility for HRESULT text, so [`SystemMessages`] answers `None` there.
//!
//! Any `Fn(ResultCode) -> Option<String>` can stand in for the platform,
//! which is how tests inject messages.

use crate::ResultCode;

/// Source of OS-provided descriptions for result codes.
///
/// Implementations may be slow (they can call into the OS); the registry
/// never calls them while holding its lock.
pub trait PlatformMessages: Send + Sync {
    /// Message for `code`, or `None` if the platform has nothing.
    fn message(&self, code: ResultCode) -> Option<String>;
}

impl<F> PlatformMessages for F
where
    F: Fn(ResultCode) -> Option<String> + Send + Sync,
{
    #[inline]
    fn message(&self, code: ResultCode) -> Option<String> {
        self(code)
    }
}

/// Lookup that never answers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPlatformMessages;

impl PlatformMessages for NoPlatformMessages {
    #[inline]
    fn message(&self, _code: ResultCode) -> Option<String> {
        None
    }
}

/// The host OS message table.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemMessages;

impl PlatformMessages for SystemMessages {
    fn message(&self, code: ResultCode) -> Option<String> {
        sys::format_message(code)
    }
}

/// Trim trailing line breaks and reject blank messages.
pub(crate) fn normalize(message: Option<String>) -> Option<String> {
    let message = message?;
    let trimmed = message.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == message.len() {
        Some(message)
    } else {
        Some(trimmed.to_string())
    }
}

cfg_if::cfg_if! {
    if #[cfg(windows)] {
        mod sys {
            use crate::ResultCode;
            use windows_sys::Win32::System::Diagnostics::Debug::{
                FormatMessageW, FORMAT_MESSAGE_FROM_SYSTEM, FORMAT_MESSAGE_IGNORE_INSERTS,
            };

            const BUFFER_LEN: usize = 1024;

            pub(super) fn format_message(code: ResultCode) -> Option<String> {
                let mut buffer = [0u16; BUFFER_LEN];
                // SAFETY: buffer is valid for BUFFER_LEN u16 writes; no
                // source or insert arguments are read with IGNORE_INSERTS.
                let len = unsafe {
                    FormatMessageW(
                        FORMAT_MESSAGE_FROM_SYSTEM | FORMAT_MESSAGE_IGNORE_INSERTS,
                        core::ptr::null(),
                        code.as_u32(),
                        0,
                        buffer.as_mut_ptr(),
                        BUFFER_LEN as u32,
                        core::ptr::null(),
                    )
                };
                if len == 0 {
                    return None;
                }
                let len = (len as usize).min(BUFFER_LEN);
                Some(String::from_utf16_lossy(&buffer[..len]))
            }
        }
    } else {
        mod sys {
            use crate::ResultCode;

            #[inline]
            pub(super) fn format_message(_code: ResultCode) -> Option<String> {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_is_a_lookup() {
        let lookup = |code: ResultCode| (code.raw() == 7).then(|| "seven".to_string());
        assert_eq!(lookup.message(ResultCode::new(7)).as_deref(), Some("seven"));
        assert_eq!(lookup.message(ResultCode::new(8)), None);
    }

    #[test]
    fn none_never_answers() {
        assert_eq!(NoPlatformMessages.message(ResultCode::from_u32(0x8000_4005)), None);
    }

    #[test]
    fn normalize_trims_and_rejects_blank() {
        assert_eq!(normalize(None), None);
        assert_eq!(normalize(Some(String::new())), None);
        assert_eq!(normalize(Some(" \r\n".to_string())), None);
        assert_eq!(normalize(Some("Access is denied.\r\n".to_string())).as_deref(), Some("Access is denied."));
        assert_eq!(normalize(Some("ok".to_string())).as_deref(), Some("ok"));
    }

    #[cfg(not(windows))]
    #[test]
    fn system_lookup_is_absent_off_windows() {
        assert_eq!(SystemMessages.message(ResultCode::from_u32(0x8007_0005)), None);
    }

    #[cfg(windows)]
    #[test]
    fn system_lookup_knows_access_denied() {
        let msg = SystemMessages.message(ResultCode::from_u32(0x8007_0005));
        assert!(msg.is_some_and(|m| !m.trim().is_empty()));
    }
}
