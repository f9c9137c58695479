//! Source-address admission filter.
//!
//! Matching is a raw string-prefix comparison. "10.0.0" blocks
//! "10.0.0.7" and also "10.0.0100.3"; there is no CIDR arithmetic.

use lbsim_core::Request;

/// Returns true if `address` starts with any of `blocked_prefixes`.
///
/// Case-sensitive, no normalization. An empty prefix list blocks nothing.
pub fn is_blocked<S: AsRef<str>>(address: &str, blocked_prefixes: &[S]) -> bool {
    blocked_prefixes
        .iter()
        .any(|prefix| address.starts_with(prefix.as_ref()))
}

/// Admission policy over a fixed set of blocked prefixes.
#[derive(Debug, Clone, Default)]
pub struct AdmissionFilter {
    blocked_prefixes: Vec<String>,
}

impl AdmissionFilter {
    pub fn new(blocked_prefixes: Vec<String>) -> Self {
        Self { blocked_prefixes }
    }

    pub fn is_blocked(&self, address: &str) -> bool {
        is_blocked(address, &self.blocked_prefixes)
    }

    /// Whether a request may enter the backlog.
    pub fn admits(&self, request: &Request) -> bool {
        !self.is_blocked(request.source_address())
    }

    pub fn blocked_prefixes(&self) -> &[String] {
        &self.blocked_prefixes
    }
}
