//! Canned results used whenever a model reply is missing or unusable.
//!
//! Every function here is synchronous and infallible, and returns a record
//! that is complete enough for the report to render meaningfully.

use chrono::{DateTime, Utc};

use crate::types::{
    ActionPlanItem, ActionStatus, AnalysisResult, ContentFormat, ContentIdea, EstimatedReach,
    FixRecommendation, Impact, PostingStrategy, RiskFlag, SearchPlacement, SearchQueryVariation,
    SearchStatus, SearchTestResult, SearchVerdict, Severity, TweetVariation, VisibilityStatus,
};

pub fn analysis(now: DateTime<Utc>) -> AnalysisResult {
    let timestamp = now.to_rfc3339();
    AnalysisResult {
        health_score: 65.0,
        status: VisibilityStatus::AtRisk,
        summary: "Analysis suggests potential visibility throttling due to irregular engagement spikes."
            .to_string(),
        flags: vec![
            RiskFlag {
                id: "1".to_string(),
                severity: Severity::Warning,
                title: "Inconsistent Posting".to_string(),
                description: "Gaps in posting history detected.".to_string(),
                timestamp: timestamp.clone(),
            },
            RiskFlag {
                id: "2".to_string(),
                severity: Severity::Info,
                title: "Media Usage Low".to_string(),
                description: "Tweets with media are performing 3x better.".to_string(),
                timestamp,
            },
        ],
        action_plan: vec![
            ActionPlanItem {
                day: "Day 1".to_string(),
                action: "Reply to 5 large accounts in your niche".to_string(),
                impact: Impact::High,
                status: ActionStatus::Pending,
            },
            ActionPlanItem {
                day: "Day 2".to_string(),
                action: "Post a thread with 3+ images".to_string(),
                impact: Impact::Medium,
                status: ActionStatus::Pending,
            },
        ],
        posting_strategy: PostingStrategy {
            best_times: vec!["9:00 AM EST".to_string(), "4:00 PM EST".to_string()],
            content_mix: "70% text, 30% video".to_string(),
        },
        content_ideas: vec![
            ContentIdea {
                topic: "Industry Myths".to_string(),
                hook: "Everything you know about X is wrong.".to_string(),
                format: ContentFormat::Thread,
                estimated_reach: EstimatedReach::High,
            },
            ContentIdea {
                topic: "Behind the Scenes".to_string(),
                hook: "My desk setup for max productivity.".to_string(),
                format: ContentFormat::Image,
                estimated_reach: EstimatedReach::Medium,
            },
        ],
    }
}

pub fn draft_variations() -> Vec<TweetVariation> {
    vec![TweetVariation {
        style: "Error".to_string(),
        text: "Could not optimize at this time.".to_string(),
        reasoning: "Network error".to_string(),
    }]
}

pub fn fix() -> FixRecommendation {
    FixRecommendation {
        title: "Manual Review Required".to_string(),
        steps: vec![
            "Wait 24 hours".to_string(),
            "Avoid posting links".to_string(),
            "Engage with verified accounts".to_string(),
        ],
        template: None,
    }
}

pub fn search_verdict() -> SearchVerdict {
    SearchVerdict {
        score: 50.0,
        status: SearchStatus::LimitedVisibility,
        ai_analysis: "AI Analysis unavailable. Raw data indicates mixed visibility.".to_string(),
    }
}

/// Keeps the real crawl data; only the interpretation is canned.
pub fn search_result(
    query: &str,
    placements: Vec<SearchPlacement>,
    now: DateTime<Utc>,
) -> SearchTestResult {
    SearchTestResult {
        query: query.to_string(),
        timestamp: now,
        placements,
        verdict: search_verdict(),
    }
}

pub fn search_variations(query: &str) -> Vec<SearchQueryVariation> {
    let hashtag: String = query.chars().filter(|c| !c.is_whitespace()).collect();
    vec![
        SearchQueryVariation {
            kind: "Hashtag Test".to_string(),
            query: format!("#{hashtag}"),
        },
        SearchQueryVariation {
            kind: "Broad Match".to_string(),
            query: format!("{query} viral"),
        },
        SearchQueryVariation {
            kind: "Exact Phrase".to_string(),
            query: format!("\"{query}\""),
        },
    ]
}
