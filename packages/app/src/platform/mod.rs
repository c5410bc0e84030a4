// Platform module - host-specific capabilities
// The speech capability lives here; the host (web view, native shell)
// injects its own implementation of the synthesizer trait.

pub mod tts;

/// Name of the current platform
pub fn get_platform() -> &'static str {
    #[cfg(target_os = "android")]
    return "android";

    #[cfg(target_os = "ios")]
    return "ios";

    #[cfg(target_os = "windows")]
    return "windows";

    #[cfg(target_os = "macos")]
    return "macos";

    #[cfg(target_os = "linux")]
    return "linux";

    #[cfg(not(any(
        target_os = "android",
        target_os = "ios",
        target_os = "windows",
        target_os = "macos",
        target_os = "linux"
    )))]
    return "unknown";
}
