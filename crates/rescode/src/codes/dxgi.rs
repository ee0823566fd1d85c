//! DXGI result codes (facility `0x7A`, quoted as `0x87A` in the SDK headers).

use crate::descriptor_table;

descriptor_table! {
    /// DXGI errors and status codes.
    pub static DXGI: module = "DXGI" {
        // ── Status ────────────────────────────────────────────────
        DXGI_STATUS_OCCLUDED                    = 0x087A_0001 => "The window content is not visible",
        DXGI_STATUS_MODE_CHANGED                = 0x087A_0007 => "The desktop display mode has been changed",
        DXGI_STATUS_MODE_CHANGE_IN_PROGRESS     = 0x087A_0008 => "A display mode change is in progress",

        // ── Errors ────────────────────────────────────────────────
        DXGI_ERROR_INVALID_CALL                 = 0x887A_0001 => "The application provided invalid parameter data",
        DXGI_ERROR_NOT_FOUND                    = 0x887A_0002 => "The object was not found",
        DXGI_ERROR_MORE_DATA                    = 0x887A_0003 => "The buffer supplied is not big enough to hold the requested data",
        DXGI_ERROR_UNSUPPORTED                  = 0x887A_0004 => "The requested functionality is not supported by the device or the driver",
        DXGI_ERROR_DEVICE_REMOVED               = 0x887A_0005 => "The video card has been physically removed from the system, or a driver upgrade occurred",
        DXGI_ERROR_DEVICE_HUNG                  = 0x887A_0006 => "The device failed due to a badly formed command",
        DXGI_ERROR_DEVICE_RESET                 = 0x887A_0007 => "The device was reset and must be recreated",
        DXGI_ERROR_WAS_STILL_DRAWING            = 0x887A_000A => "The GPU was busy at the moment when a call was made to perform an operation",
        DXGI_ERROR_FRAME_STATISTICS_DISJOINT    = 0x887A_000B => "An event interrupted the gathering of presentation statistics",
        DXGI_ERROR_GRAPHICS_VIDPN_SOURCE_IN_USE = 0x887A_000C => "The output is already in use by another device",
        DXGI_ERROR_DRIVER_INTERNAL_ERROR        = 0x887A_0020 => "The driver encountered a problem and was put into the device removed state",
        DXGI_ERROR_NONEXCLUSIVE                 = 0x887A_0021 => "A global counter resource is in use",
        DXGI_ERROR_NOT_CURRENTLY_AVAILABLE      = 0x887A_0022 => "The resource or request is not currently available",
        DXGI_ERROR_REMOTE_CLIENT_DISCONNECTED   = 0x887A_0023 => "The remote desktop client has been disconnected",
        DXGI_ERROR_REMOTE_OUTOFMEMORY           = 0x887A_0024 => "The remote desktop client is out of memory",
        DXGI_ERROR_ACCESS_LOST                  = 0x887A_0026 => "The desktop duplication interface is invalid",
        DXGI_ERROR_WAIT_TIMEOUT                 = 0x887A_0027 => "The time-out interval elapsed before the next desktop frame was available",
        DXGI_ERROR_SESSION_DISCONNECTED         = 0x887A_0028 => "The Remote Desktop Services session is disconnected",
        DXGI_ERROR_RESTRICT_TO_OUTPUT_STALE     = 0x887A_0029 => "The output restriction of the swap chain is stale",
        DXGI_ERROR_CANNOT_PROTECT_CONTENT       = 0x887A_002A => "Content protection is not available",
        DXGI_ERROR_ACCESS_DENIED                = 0x887A_002B => "Access to the shared resource was denied",
        DXGI_ERROR_NAME_ALREADY_EXISTS          = 0x887A_002C => "The supplied name is already in use",
        DXGI_ERROR_SDK_COMPONENT_MISSING        = 0x887A_002D => "The operation depends on an SDK component that is missing",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facility_is_dxgi() {
        for d in DXGI.descriptors() {
            assert_eq!(d.code().facility(), 0x7A, "{}", d.api_code());
            assert_eq!(d.module(), "DXGI");
        }
    }

    #[test]
    fn status_vs_error() {
        assert!(DXGI_STATUS_OCCLUDED.code().is_success());
        assert!(DXGI_ERROR_DEVICE_REMOVED.code().is_failure());
    }

    #[test]
    fn table_codes_unique() {
        let mut codes: Vec<_> = DXGI.descriptors().iter().map(|d| d.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), DXGI.len());
    }
}
