//! Records exchanged with the model and rendered by the front end.
//!
//! Every enumerated field is a closed serde enum, so a reply carrying an
//! unknown tag fails to deserialize instead of leaking an arbitrary string
//! into the report. Each enum exposes its wire values through `VALUES`, which
//! the schema builders in [`crate::prompts`] use for their `enum` lists.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One day of account activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricData {
    pub date: NaiveDate,
    pub impressions: u64,
    pub engagements: u64,
    pub likes: u64,
    pub replies: u64,
    pub retweets: u64,
    pub profile_visits: u64,
}

/// Two comparable periods of daily metrics plus derived account stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementMetrics {
    /// Oldest first, one record per day, ending today.
    pub current_period: Vec<MetricData>,
    pub previous_period: Vec<MetricData>,
    pub total_followers: u64,
    /// Signed percentage.
    pub follower_growth: f64,
    /// Percentage of impressions that turned into engagements.
    pub average_engagement_rate: f64,
    /// Average replies per day.
    pub reply_ratio: f64,
}

impl EngagementMetrics {
    pub fn current_impressions(&self) -> u64 {
        self.current_period.iter().map(|d| d.impressions).sum()
    }

    pub fn previous_impressions(&self) -> u64 {
        self.previous_period.iter().map(|d| d.impressions).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisibilityStatus {
    Healthy,
    AtRisk,
    Shadowbanned,
    Restricted,
}

impl VisibilityStatus {
    pub const VALUES: &'static [&'static str] = &["HEALTHY", "AT_RISK", "SHADOWBANNED", "RESTRICTED"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "HEALTHY",
            Self::AtRisk => "AT_RISK",
            Self::Shadowbanned => "SHADOWBANNED",
            Self::Restricted => "RESTRICTED",
        }
    }
}

/// Flag severity. Sorts most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    pub const VALUES: &'static [&'static str] = &["critical", "warning", "info"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFlag {
    pub id: String,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    /// ISO-8601, as written by the model.
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    pub const VALUES: &'static [&'static str] = &["High", "Medium", "Low"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    Pending,
    Completed,
}

impl ActionStatus {
    pub const VALUES: &'static [&'static str] = &["pending", "completed"];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionPlanItem {
    pub day: String,
    pub action: String,
    pub impact: Impact,
    pub status: ActionStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostingStrategy {
    pub best_times: Vec<String>,
    pub content_mix: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFormat {
    Thread,
    Image,
    Poll,
    Text,
}

impl ContentFormat {
    pub const VALUES: &'static [&'static str] = &["thread", "image", "poll", "text"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Thread => "thread",
            Self::Image => "image",
            Self::Poll => "poll",
            Self::Text => "text",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstimatedReach {
    High,
    Medium,
}

impl EstimatedReach {
    pub const VALUES: &'static [&'static str] = &["High", "Medium"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentIdea {
    pub topic: String,
    pub hook: String,
    pub format: ContentFormat,
    pub estimated_reach: EstimatedReach,
}

/// The model's verdict on an account scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// 0–100.
    pub health_score: f64,
    pub status: VisibilityStatus,
    pub summary: String,
    pub flags: Vec<RiskFlag>,
    pub action_plan: Vec<ActionPlanItem>,
    pub posting_strategy: PostingStrategy,
    pub content_ideas: Vec<ContentIdea>,
}

impl AnalysisResult {
    /// Flags ordered most severe first. Ties keep the model's order.
    pub fn flags_by_severity(&self) -> Vec<&RiskFlag> {
        let mut flags: Vec<&RiskFlag> = self.flags.iter().collect();
        flags.sort_by_key(|f| f.severity);
        flags
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TweetVariation {
    pub style: String,
    pub text: String,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixRecommendation {
    pub title: String,
    pub steps: Vec<String>,
    /// A post to copy-paste, when one helps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

/// One observation point in a search crawl.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPlacement {
    pub context: String,
    pub found: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchStatus {
    Visible,
    LimitedVisibility,
    SearchBanned,
}

impl SearchStatus {
    pub const VALUES: &'static [&'static str] = &["VISIBLE", "LIMITED_VISIBILITY", "SEARCH_BANNED"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Visible => "VISIBLE",
            Self::LimitedVisibility => "LIMITED_VISIBILITY",
            Self::SearchBanned => "SEARCH_BANNED",
        }
    }
}

/// The model's reading of a crawl.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchVerdict {
    /// 0–100.
    pub score: f64,
    pub status: SearchStatus,
    pub ai_analysis: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchTestResult {
    pub query: String,
    pub timestamp: DateTime<Utc>,
    pub placements: Vec<SearchPlacement>,
    #[serde(flatten)]
    pub verdict: SearchVerdict,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQueryVariation {
    #[serde(rename = "type")]
    pub kind: String,
    pub query: String,
}
