//! # API Versions
//!
//! A version is a path-prefix convention: `/api/v1/...` and `/api/v2/...`
//! address independent handler generations of the same collection name.
//! Nothing else hangs off the version, no negotiation and no deprecation.

use std::fmt;

/// One API generation, addressed as the `v<N>` path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApiVersion(u32);

impl ApiVersion {
    /// The first generation
    pub const V1: Self = Self(1);

    /// Create a version from its generation number (must be non-zero)
    pub fn new(generation: u32) -> Option<Self> {
        if generation == 0 {
            None
        } else {
            Some(Self(generation))
        }
    }

    /// Parse a path segment of the form `v<N>`
    pub fn parse(segment: &str) -> Option<Self> {
        let digits = segment.strip_prefix('v')?;
        if digits.is_empty() || digits.starts_with('0') {
            return None;
        }
        digits.parse::<u32>().ok().and_then(Self::new)
    }

    /// Generation number
    pub fn generation(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}
