//! Interface filtering by name.
//!
//! # Design
//!
//! - **Pure Matcher**: [`NameRegexFilter`] only answers "does this interface
//!   match?" without include/exclude semantics.
//! - **Filter Chain**: [`FilterChain`] combines matchers:
//!   - Exclude filters: AND logic (must pass ALL excludes)
//!   - Include filters: OR logic (pass ANY include, empty = match all)
//! - **Decorator**: [`FilteredSource`] applies filtering transparently
//!   to any [`InterfaceSource`] implementation, preserving order and
//!   laziness.

use regex::Regex;

use super::{Candidates, InterfaceCandidate, InterfaceSource};

/// Trait for filtering interface candidates.
///
/// Filters must be `Send + Sync` so a resolver can be shared across threads.
pub trait InterfaceFilter: Send + Sync {
    /// Returns `true` if the candidate should be considered, `false` to skip it.
    fn matches(&self, candidate: &InterfaceCandidate) -> bool;
}

// ============================================================================
// FilterChain - Include OR / Exclude AND semantics
// ============================================================================

/// Filter chain with include/exclude semantics.
///
/// Evaluation order:
/// 1. **Exclude filters (AND)**: Any match → reject.
/// 2. **Include filters (OR)**: Any match → accept. Empty includes = accept all.
///
/// An empty chain accepts every candidate.
///
/// # Examples
///
/// ```
/// use macfact::network::filter::{FilterChain, InterfaceFilter, NameRegexFilter};
/// use macfact::network::InterfaceCandidate;
///
/// let chain = FilterChain::new()
///     .exclude(NameRegexFilter::new(r"^docker").unwrap())
///     .include(NameRegexFilter::new(r"^(eth|en)").unwrap());
///
/// let eth0 = InterfaceCandidate::new("eth0", "00:12:3f:be:22:01");
/// let docker0 = InterfaceCandidate::new("docker0", "02:42:5c:1a:7b:9e");
/// let wlan0 = InterfaceCandidate::new("wlan0", "00:12:3f:be:22:02");
///
/// assert!(chain.matches(&eth0));
/// assert!(!chain.matches(&docker0)); // Excluded
/// assert!(!chain.matches(&wlan0));   // Not included
/// ```
#[derive(Default)]
pub struct FilterChain {
    includes: Vec<Box<dyn InterfaceFilter>>,
    excludes: Vec<Box<dyn InterfaceFilter>>,
}

impl FilterChain {
    /// Creates an empty filter chain (matches all candidates).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an include filter (OR semantics).
    #[must_use]
    pub fn include<F: InterfaceFilter + 'static>(mut self, filter: F) -> Self {
        self.includes.push(Box::new(filter));
        self
    }

    /// Adds an exclude filter (any match rejects).
    #[must_use]
    pub fn exclude<F: InterfaceFilter + 'static>(mut self, filter: F) -> Self {
        self.excludes.push(Box::new(filter));
        self
    }

    /// Returns the number of include filters.
    #[must_use]
    pub fn include_count(&self) -> usize {
        self.includes.len()
    }

    /// Returns the number of exclude filters.
    #[must_use]
    pub fn exclude_count(&self) -> usize {
        self.excludes.len()
    }

    /// Returns true if no filters are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.includes.is_empty() && self.excludes.is_empty()
    }
}

impl InterfaceFilter for FilterChain {
    fn matches(&self, candidate: &InterfaceCandidate) -> bool {
        if self.excludes.iter().any(|f| f.matches(candidate)) {
            return false;
        }

        self.includes.is_empty() || self.includes.iter().any(|f| f.matches(candidate))
    }
}

impl std::fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterChain")
            .field("include_count", &self.includes.len())
            .field("exclude_count", &self.excludes.len())
            .finish()
    }
}

// ============================================================================
// NameRegexFilter - Pure matcher by name pattern
// ============================================================================

/// Matches candidates whose interface name matches a regex.
///
/// # Examples
///
/// ```
/// use macfact::network::filter::{InterfaceFilter, NameRegexFilter};
/// use macfact::network::InterfaceCandidate;
///
/// let filter = NameRegexFilter::new(r"^veth").unwrap();
///
/// assert!(filter.matches(&InterfaceCandidate::without_address("veth1a2b")));
/// assert!(!filter.matches(&InterfaceCandidate::without_address("eth0")));
/// ```
#[derive(Debug, Clone)]
pub struct NameRegexFilter {
    pattern: Regex,
}

impl NameRegexFilter {
    /// Creates a name filter with the given regex pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the regex pattern is invalid.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Returns a reference to the regex pattern.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Regex is not a const type
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

impl InterfaceFilter for NameRegexFilter {
    fn matches(&self, candidate: &InterfaceCandidate) -> bool {
        self.pattern.is_match(&candidate.name)
    }
}

// ============================================================================
// FilteredSource - Decorator over any InterfaceSource
// ============================================================================

/// A source decorator that drops candidates rejected by a filter.
///
/// Filtering happens while iterating, so the inner source's laziness is
/// kept: skipped candidates are still produced by the inner source, but
/// nothing past the consumer's stopping point is.
#[derive(Debug)]
pub struct FilteredSource<S, F> {
    inner: S,
    filter: F,
}

impl<S, F> FilteredSource<S, F> {
    /// Creates a new filtered source.
    #[must_use]
    pub const fn new(inner: S, filter: F) -> Self {
        Self { inner, filter }
    }
}

impl<S: InterfaceSource, F: InterfaceFilter> InterfaceSource for FilteredSource<S, F> {
    fn candidates(&self) -> Candidates<'_> {
        Box::new(self.inner.candidates().filter(|candidate| {
            let keep = self.filter.matches(candidate);
            if !keep {
                tracing::trace!("Interface {} filtered out by name", candidate.name);
            }
            keep
        }))
    }
}

// Blanket implementation: any &T where T: InterfaceFilter also implements InterfaceFilter
impl<T: InterfaceFilter + ?Sized> InterfaceFilter for &T {
    fn matches(&self, candidate: &InterfaceCandidate) -> bool {
        (*self).matches(candidate)
    }
}

impl InterfaceFilter for Box<dyn InterfaceFilter> {
    fn matches(&self, candidate: &InterfaceCandidate) -> bool {
        self.as_ref().matches(candidate)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
