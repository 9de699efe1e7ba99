//! Interface candidates produced by enumeration.

use std::fmt;

/// A network interface as reported by an enumeration backend, before its
/// address has been validated.
///
/// Candidates are transient: they are produced in source order during one
/// resolution and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceCandidate {
    /// Interface identifier (e.g., "eth0", "lo", "Wi-Fi").
    pub name: String,
    /// The address text exactly as the backend reported it, or `None` if
    /// the lookup for this interface failed.
    pub raw_address: Option<String>,
}

impl InterfaceCandidate {
    /// Creates a candidate with a raw address.
    #[must_use]
    pub fn new(name: impl Into<String>, raw_address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_address: Some(raw_address.into()),
        }
    }

    /// Creates a candidate whose address could not be looked up.
    #[must_use]
    pub fn without_address(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_address: None,
        }
    }

    /// Returns the raw address as a string slice, if any.
    #[must_use]
    pub fn raw_address(&self) -> Option<&str> {
        self.raw_address.as_deref()
    }
}

impl fmt::Display for InterfaceCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.raw_address {
            Some(raw) => write!(f, "{} ({raw})", self.name),
            None => write!(f, "{} (no address)", self.name),
        }
    }
}
