//! Prompts for the search-visibility check and query variations.

use super::{bulleted, numbered};
use crate::schema::Schema;
use crate::types::{SearchPlacement, SearchStatus};

const CHECK_RULES: &[&str] = &[
    "If not found in Incognito (Top or Latest) but found for logged-in users, it's likely a \"Ghost Ban\" or \"De-ranking\".",
    "If not found anywhere, it's a \"Search Ban\".",
    "If found everywhere, it's \"Visible\".",
];
const CHECK_REQUESTS: &[&str] = &[
    "A visibility score (0-100).",
    "A status (VISIBLE, LIMITED_VISIBILITY, SEARCH_BANNED).",
    "A concise 2-sentence analysis explaining the result to the user.",
];

const VARIATION_KINDS: &[&str] = &[
    "Hashtag Focus (converting keywords to tags)",
    "Broad Match (natural language / related terms)",
    "Exact/Technical (using quotes or operators if applicable, or just strict keywords)",
];
const VARIATION_FORMAT: &[&str] = &[
    "\"type\": string (e.g. \"Hashtag Test\")",
    "\"query\": string (the search string)",
];

pub fn build_check_prompt(query: &str, placements: &[SearchPlacement]) -> String {
    let crawl = placements
        .iter()
        .map(|p| {
            let seen = if p.found { "VISIBLE" } else { "NOT FOUND" };
            format!("- {}: {}", p.context, seen)
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Analyze the search visibility of a tweet based on these crawl results.\n\
         Query: \"{query}\"\n\n\
         Crawl Data:\n{crawl}\n\n\
         Rules:\n{rules}\n\n\
         Provide:\n{requests}\n",
        rules = bulleted(CHECK_RULES),
        requests = numbered(CHECK_REQUESTS),
    )
}

pub fn check_schema() -> Schema {
    Schema::object([
        ("score", Schema::number()),
        ("status", Schema::enumeration(SearchStatus::VALUES)),
        ("aiAnalysis", Schema::string()),
    ])
}

pub fn build_variations_prompt(query: &str) -> String {
    format!(
        "Generate {count} diverse search query variations for Twitter/X based on this input: \"{query}\".\n\
         The goal is to test search visibility across different indexing methods.\n\n\
         Variations needed:\n{kinds}\n\n\
         Return strictly a JSON array of objects with:\n{format}\n",
        count = VARIATION_KINDS.len(),
        kinds = numbered(VARIATION_KINDS),
        format = bulleted(VARIATION_FORMAT),
    )
}

pub fn variations_schema() -> Schema {
    Schema::array(Schema::object([
        ("type", Schema::string()),
        ("query", Schema::string()),
    ]))
}
