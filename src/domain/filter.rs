//! Filter engine: match predicates over catalog controls
//!
//! A control passes when it satisfies every active dimension. Domain needles
//! are OR'ed; text terms are AND'ed.

use std::collections::BTreeSet;

use crate::domain::entities::Control;
use crate::domain::query::{
    Level, Query, DOMAIN_PREFIX, RESILIENCE_DOMAIN, RESILIENCE_PROFILE,
};

/// True if the control matches any of the normalized domain needles.
pub fn matches_domain(control: &Control, needles: &BTreeSet<String>) -> bool {
    let domain_id = control.domain_id_or_empty().to_uppercase();
    let domain_title = control.domain_title_or_empty().to_lowercase();
    let prefix = DOMAIN_PREFIX.to_lowercase();

    needles.iter().any(|needle| {
        if domain_id.contains(needle.as_str()) {
            return true;
        }
        let bare = needle.to_lowercase().replace(&prefix, "");
        domain_title.contains(&bare)
    })
}

/// True if the control satisfies the level filter; advisory levels always pass.
pub fn matches_level(control: &Control, level: Level) -> bool {
    match level {
        Level::L1 | Level::L2 => true,
        Level::R => {
            control.domain_id_or_empty().to_uppercase() == RESILIENCE_DOMAIN
                || control.profiles_hint.iter().any(|h| h == RESILIENCE_PROFILE)
        }
    }
}

/// Lower-cased search text built from every textual field of the control.
pub fn haystack(control: &Control) -> String {
    let opt = |v: &Option<String>| v.as_deref().unwrap_or("").to_owned();
    [
        opt(&control.control_id),
        opt(&control.statement),
        opt(&control.description),
        opt(&control.domain_id),
        opt(&control.domain_title),
        control.profiles_hint.join(" "),
    ]
    .join(" ")
    .to_lowercase()
}

/// True if every (already lower-cased) term occurs in the haystack.
pub fn matches_terms(control: &Control, terms: &[String]) -> bool {
    if terms.is_empty() {
        return true;
    }
    let text = haystack(control);
    terms.iter().all(|term| text.contains(term.as_str()))
}

/// Evaluate all active dimensions of the query against one control.
pub fn matches(control: &Control, query: &Query) -> bool {
    if !query.domains.is_empty() && !matches_domain(control, &query.domains) {
        return false;
    }
    if let Some(level) = query.level {
        if !matches_level(control, level) {
            return false;
        }
    }
    matches_terms(control, &query.terms)
}

/// Select matching controls, sorted ascending by `control_id`.
///
/// The sort is stable, so controls sharing an id keep catalog order.
pub fn filter_controls<'a>(controls: &'a [Control], query: &Query) -> Vec<&'a Control> {
    let mut results: Vec<&Control> = controls.iter().filter(|c| matches(c, query)).collect();
    results.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
    results
}
