//! General COM-style result codes.
//!
//! Facility 0 (`FACILITY_NULL`) and 7 (`FACILITY_WIN32`) values that nearly
//! every native API can return.

use crate::descriptor_table;

descriptor_table! {
    /// Codes shared by every native module.
    pub static GENERAL: module = "General" {
        // ── Success ───────────────────────────────────────────────
        S_OK           = 0x0000_0000 => "The operation completed successfully",
        S_FALSE        = 0x0000_0001 => "The operation completed with a false result",

        // ── Facility NULL ─────────────────────────────────────────
        E_NOTIMPL      = 0x8000_4001 => "Not implemented",
        E_NOINTERFACE  = 0x8000_4002 => "No such interface supported",
        E_POINTER      = 0x8000_4003 => "Invalid pointer",
        E_ABORT        = 0x8000_4004 => "Operation aborted",
        E_FAIL         = 0x8000_4005 => "Unspecified error",
        E_UNEXPECTED   = 0x8000_FFFF => "Catastrophic failure",

        // ── Facility WIN32 ────────────────────────────────────────
        E_ACCESSDENIED = 0x8007_0005 => "General access denied error",
        E_HANDLE       = 0x8007_0006 => "Invalid handle",
        E_OUTOFMEMORY  = 0x8007_000E => "Out of memory",
        E_INVALIDARG   = 0x8007_0057 => "Invalid arguments",
    }
}
