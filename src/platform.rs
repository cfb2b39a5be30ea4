//! Method-call channel answering host platform queries.

use std::fmt;

pub const GET_PLATFORM_VERSION: &str = "getPlatformVersion";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// The channel has no handler for this method
    NotImplemented(String),
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::NotImplemented(method) => {
                write!(f, "Method not implemented: {}", method)
            }
        }
    }
}

impl std::error::Error for PlatformError {}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformChannel;

impl PlatformChannel {
    pub fn handle(&self, method: &str) -> Result<String, PlatformError> {
        match method {
            GET_PLATFORM_VERSION => Ok(platform_version()),
            other => Err(PlatformError::NotImplemented(other.to_string())),
        }
    }
}

/// `"<OS name> <release>"`.
pub fn platform_version() -> String {
    format!("{} {}", os_name(), os_release())
}

fn os_name() -> &'static str {
    match std::env::consts::OS {
        "linux" => "Linux",
        "macos" => "macOS",
        "windows" => "Windows",
        "ios" => "iOS",
        "android" => "Android",
        "freebsd" => "FreeBSD",
        other => other,
    }
}

#[cfg(target_os = "linux")]
fn os_release() -> String {
    std::fs::read_to_string("/proc/sys/kernel/osrelease")
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|_| std::env::consts::FAMILY.to_string())
}

#[cfg(not(target_os = "linux"))]
fn os_release() -> String {
    std::env::consts::FAMILY.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_starts_with_os_name() {
        let version = PlatformChannel
            .handle(GET_PLATFORM_VERSION)
            .expect("platform version is always available");
        assert!(version.starts_with(os_name()));
        assert!(version.len() > os_name().len() + 1);
    }

    #[test]
    fn unknown_method_is_not_implemented() {
        let err = PlatformChannel.handle("getBatteryLevel").unwrap_err();
        assert_eq!(err, PlatformError::NotImplemented("getBatteryLevel".into()));
        assert_eq!(err.to_string(), "Method not implemented: getBatteryLevel");
    }
}
