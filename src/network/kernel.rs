//! Kernel family classification.

use std::fmt;

/// A group of kernels sharing network-configuration conventions.
///
/// The family decides which enumeration backend and which command-output
/// parser apply. Kernels outside every family resolve to "not found".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelFamily {
    /// Linux kernels: `/sys/class/net` and net-tools `ifconfig`.
    Linux,
    /// BSD-derived kernels, including Darwin: BSD `ifconfig`.
    Bsd,
    /// Windows NT kernels: `getmac` CSV table.
    Windows,
}

impl KernelFamily {
    /// Classifies a kernel name (case-insensitive).
    ///
    /// Returns `None` for kernels with no known family; callers must not
    /// guess a default.
    ///
    /// # Examples
    ///
    /// ```
    /// use macfact::network::KernelFamily;
    ///
    /// assert_eq!(KernelFamily::from_kernel("Linux"), Some(KernelFamily::Linux));
    /// assert_eq!(KernelFamily::from_kernel("Darwin"), Some(KernelFamily::Bsd));
    /// assert_eq!(KernelFamily::from_kernel("Plan9"), None);
    /// ```
    #[must_use]
    pub fn from_kernel(kernel: &str) -> Option<Self> {
        match kernel.trim().to_ascii_lowercase().as_str() {
            "linux" => Some(Self::Linux),
            "freebsd" | "openbsd" | "netbsd" | "dragonfly" | "gnu/kfreebsd" | "darwin" => {
                Some(Self::Bsd)
            }
            "windows" | "winnt" | "windows_nt" => Some(Self::Windows),
            _ => None,
        }
    }
}

impl fmt::Display for KernelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linux => write!(f, "Linux"),
            Self::Bsd => write!(f, "BSD"),
            Self::Windows => write!(f, "Windows"),
        }
    }
}

/// Returns the conventional kernel name of the host this binary was built
/// for (`Linux`, `Darwin`, `FreeBSD`, `windows`, ...).
///
/// Unrecognized targets are reported by their Rust OS name, which
/// [`KernelFamily::from_kernel`] then rejects.
#[must_use]
pub fn host_kernel() -> &'static str {
    kernel_name_for_os(std::env::consts::OS)
}

fn kernel_name_for_os(os: &'static str) -> &'static str {
    match os {
        "linux" | "android" => "Linux",
        "macos" | "ios" => "Darwin",
        "freebsd" => "FreeBSD",
        "openbsd" => "OpenBSD",
        "netbsd" => "NetBSD",
        "dragonfly" => "DragonFly",
        "windows" => "windows",
        "solaris" | "illumos" => "SunOS",
        _ => os,
    }
}
