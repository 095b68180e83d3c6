//! Prompt text and output schemas for the five structured tasks.
//!
//! Each submodule exposes `build_prompt(..)` and `schema()`. The schema's
//! shape mirrors the record in [`crate::types`] that the reply decodes into,
//! and enum lists come from that record's `VALUES` so the two cannot drift.

pub mod analysis;
pub mod draft;
pub mod fix;
pub mod search;

/// Render a numbered task list, one item per line.
fn numbered(items: &[&str]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a bulleted list, one item per line.
fn bulleted(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}
