//! Simulated search crawl.
//!
//! Risky queries are hidden everywhere except the follower view, which
//! always sees the account. Other placements are weighted coin flips.

use rand::RngExt;

use crate::types::SearchPlacement;

/// Terms that mark a query as likely to trip search filtering.
pub const RISKY_TERMS: &[&str] = &["crypto", "giveaway", "follow"];

pub const FOLLOWER_VIEW: &str = "Logged In (Follower View)";

/// `(context, probability found for a non-risky query)`, in report order.
pub const PLACEMENTS: &[(&str, f64)] = &[
    ("Incognito Mode - Top Tab", 0.7),
    ("Incognito Mode - Latest Tab", 0.8),
    ("Logged In (Non-Follower View)", 1.0),
    (FOLLOWER_VIEW, 1.0),
    ("Global Search (US Region)", 0.9),
    ("Hashtag Feed", 1.0),
];

pub fn is_risky(query: &str) -> bool {
    let query = query.to_lowercase();
    RISKY_TERMS.iter().any(|term| query.contains(term))
}

pub fn simulate_crawl<R: RngExt>(query: &str, rng: &mut R) -> Vec<SearchPlacement> {
    let risky = is_risky(query);
    PLACEMENTS
        .iter()
        .map(|&(context, chance)| {
            let found = if context == FOLLOWER_VIEW {
                true
            } else if risky {
                false
            } else {
                rng.random_bool(chance)
            };
            SearchPlacement {
                context: context.to_string(),
                found,
            }
        })
        .collect()
}
