//! Resolved lookup request: terms, domain needles, level and limit

use std::collections::BTreeSet;

/// Canonical prefix every domain needle carries.
pub const DOMAIN_PREFIX: &str = "MASVS-";

/// Domain code selected by the resilience level.
pub const RESILIENCE_DOMAIN: &str = "MASVS-RESILIENCE";

/// Profile tag selected by the resilience level.
pub const RESILIENCE_PROFILE: &str = "MAS-R";

/// Default number of records printed.
pub const DEFAULT_LIMIT: usize = 20;

/// MAS profile context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    L1,
    L2,
    R,
}

impl Level {
    /// `L1` and `L2` have no per-control mapping in the dataset and never filter.
    pub fn is_advisory(self) -> bool {
        matches!(self, Level::L1 | Level::L2)
    }
}

/// Upper-case a raw domain token and ensure it carries [`DOMAIN_PREFIX`].
///
/// ```ignore
/// normalize_domain("network")        // → "MASVS-NETWORK"
/// normalize_domain("masvs-storage")  // → "MASVS-STORAGE"
/// ```
pub fn normalize_domain(raw: &str) -> String {
    let upper = raw.to_uppercase();
    if upper.starts_with(DOMAIN_PREFIX) {
        upper
    } else {
        format!("{}{}", DOMAIN_PREFIX, upper)
    }
}

/// A lookup request after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Lower-cased free-text terms, all of which must match
    pub terms: Vec<String>,
    /// Normalized domain needles, any of which may match
    pub domains: BTreeSet<String>,
    pub level: Option<Level>,
    pub limit: usize,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            terms: Vec::new(),
            domains: BTreeSet::new(),
            level: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.terms = terms.into_iter().map(|t| t.as_ref().to_lowercase()).collect();
        self
    }

    pub fn with_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.domains = domains
            .into_iter()
            .map(|d| normalize_domain(d.as_ref()))
            .collect();
        self
    }

    pub fn with_level(mut self, level: Option<Level>) -> Self {
        self.level = level;
        self
    }

    /// Negative limits print nothing.
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("network", "MASVS-NETWORK")]
    #[case("NETWORK", "MASVS-NETWORK")]
    #[case("masvs-storage", "MASVS-STORAGE")]
    #[case("MASVS-CRYPTO", "MASVS-CRYPTO")]
    #[case("", "MASVS-")]
    fn test_normalize_domain(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_domain(raw), expected);
    }

    #[test]
    fn given_levels_when_checking_advisory_then_only_l1_l2() {
        assert!(Level::L1.is_advisory());
        assert!(Level::L2.is_advisory());
        assert!(!Level::R.is_advisory());
    }

    #[test]
    fn given_mixed_case_terms_when_building_then_lowercased() {
        let query = Query::new().with_terms(["TLS", "Pinning"]);
        assert_eq!(query.terms, vec!["tls", "pinning"]);
    }

    #[test]
    fn given_duplicate_domains_when_building_then_collapsed() {
        let query = Query::new().with_domains(["network", "MASVS-NETWORK"]);
        assert_eq!(query.domains.len(), 1);
    }

    #[test]
    fn given_negative_limit_when_building_then_zero() {
        assert_eq!(Query::new().with_limit(-5).limit, 0);
        assert_eq!(Query::new().with_limit(3).limit, 3);
    }

    #[test]
    fn given_default_query_then_no_filters_and_default_limit() {
        let query = Query::default();
        assert!(query.terms.is_empty());
        assert!(query.domains.is_empty());
        assert_eq!(query.level, None);
        assert_eq!(query.limit, DEFAULT_LIMIT);
    }
}
