use serde_json::json;

use super::numbered;
use crate::schema::Schema;
use crate::types::{
    ActionStatus, ContentFormat, EngagementMetrics, EstimatedReach, Impact, Severity,
    VisibilityStatus,
};

/// Days of the current period quoted verbatim in the prompt.
const RECENT_DAYS: usize = 7;

const INTRO: &str = "You are a senior Social Media Algorithmic Analyst. Analyze the following Twitter/X account metrics for shadowban risks, visibility issues, and growth opportunities.";
const TASKS: &[&str] = &[
    "Calculate Health Score (0-100).",
    "Determine Visibility Status.",
    "Identify risk flags.",
    "Create action plan.",
    "Suggest posting strategy.",
    "Generate 3 specific high-potential content ideas based on current trends for this account type.",
];

pub fn build_prompt(metrics: &EngagementMetrics) -> String {
    let period = &metrics.current_period;
    let recent: Vec<serde_json::Value> = period
        .iter()
        .skip(period.len().saturating_sub(RECENT_DAYS))
        .map(|d| json!({"d": d.date, "imp": d.impressions, "eng": d.engagements}))
        .collect();

    let avg_impressions = if period.is_empty() {
        0
    } else {
        metrics.current_impressions() / period.len() as u64
    };

    format!(
        "{intro}\n\nData Summary:\n\
         - Total Followers: {followers} (Growth: {growth}%)\n\
         - Avg Engagement Rate: {rate:.2}%\n\
         - Avg Daily Replies: {replies:.1}\n\
         - Recent {days} Days Performance: {recent}\n\
         - {total_days} Day Avg Impressions: {avg}\n\n\
         Task:\n{tasks}\n",
        intro = INTRO,
        followers = metrics.total_followers,
        growth = metrics.follower_growth,
        rate = metrics.average_engagement_rate,
        replies = metrics.reply_ratio,
        days = RECENT_DAYS,
        recent = serde_json::Value::Array(recent),
        total_days = period.len().saturating_sub(1),
        avg = avg_impressions,
        tasks = numbered(TASKS),
    )
}

pub fn schema() -> Schema {
    let flag = Schema::object([
        ("id", Schema::string()),
        ("severity", Schema::enumeration(Severity::VALUES)),
        ("title", Schema::string()),
        ("description", Schema::string()),
        ("timestamp", Schema::string()),
    ]);
    let action = Schema::object([
        ("day", Schema::string()),
        ("action", Schema::string()),
        ("impact", Schema::enumeration(Impact::VALUES)),
        ("status", Schema::enumeration(ActionStatus::VALUES)),
    ]);
    let strategy = Schema::object([
        ("bestTimes", Schema::array(Schema::string())),
        ("contentMix", Schema::string()),
    ]);
    let idea = Schema::object([
        ("topic", Schema::string()),
        ("hook", Schema::string()),
        ("format", Schema::enumeration(ContentFormat::VALUES)),
        ("estimatedReach", Schema::enumeration(EstimatedReach::VALUES)),
    ]);

    Schema::object([
        ("healthScore", Schema::number()),
        ("status", Schema::enumeration(VisibilityStatus::VALUES)),
        ("summary", Schema::string()),
        ("flags", Schema::array(flag)),
        ("actionPlan", Schema::array(action)),
        ("postingStrategy", strategy),
        ("contentIdeas", Schema::array(idea)),
    ])
}
