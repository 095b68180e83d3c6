//! Plain-text rendering of scan and task results for the terminal.
//!
//! Every function returns a `String` so the layout can be tested without
//! capturing stdout.

use crate::consts::{format_number, percent_change};
use crate::session::SelectedFlag;
use crate::types::{
    AnalysisResult, ContentIdea, EngagementMetrics, RiskFlag, SearchQueryVariation,
    SearchTestResult, Severity, TweetVariation, VisibilityStatus,
};

/// Widest trend bar, in characters.
const BAR_WIDTH: u64 = 30;

fn severity_marker(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "✗",
        Severity::Warning => "!",
        Severity::Info => "·",
    }
}

fn flag_line(n: usize, flag: &RiskFlag) -> String {
    format!(
        "  {n}. {} [{}] {}: {}",
        severity_marker(flag.severity),
        flag.severity.as_str(),
        flag.title,
        flag.description
    )
}

/// "High" only when the account is already shadowbanned.
pub fn shadowban_risk(status: VisibilityStatus) -> &'static str {
    match status {
        VisibilityStatus::Shadowbanned => "High",
        _ => "Low",
    }
}

pub fn overview(handle: &str, metrics: &EngagementMetrics, analysis: &AnalysisResult) -> String {
    let mut out = String::new();
    let current = metrics.current_impressions();
    let previous = metrics.previous_impressions();
    let trend = match percent_change(previous, current) {
        Some(change) => format!("{change:+.1}% vs previous period"),
        None => "no previous period".to_string(),
    };

    out.push_str(&format!("  @{handle}\n"));
    out.push_str(&format!(
        "  health    {:.0}/100 ({})\n",
        analysis.health_score,
        analysis.status.as_str()
    ));
    out.push_str(&format!(
        "  shadowban risk {}\n",
        shadowban_risk(analysis.status)
    ));
    out.push_str(&format!("  summary   {}\n", analysis.summary));
    out.push_str(&format!(
        "  followers {} ({:+.1}%)\n",
        format_number(metrics.total_followers),
        metrics.follower_growth
    ));
    out.push_str(&format!(
        "  impressions {} ({trend})\n",
        format_number(current)
    ));
    out.push_str(&format!(
        "  engagement {:.2}%   replies/day {:.1}\n",
        metrics.average_engagement_rate, metrics.reply_ratio
    ));

    out.push_str("\n  flags\n");
    out.push_str(&flags(analysis));

    out.push_str("\n  action plan\n");
    for item in &analysis.action_plan {
        out.push_str(&format!(
            "  - {}: {} ({} impact)\n",
            item.day,
            item.action,
            item.impact.as_str()
        ));
    }

    out.push_str(&format!(
        "\n  best times  {}\n  content mix {}\n",
        analysis.posting_strategy.best_times.join(", "),
        analysis.posting_strategy.content_mix
    ));
    out
}

/// Daily impressions and engagements for the current period, oldest first.
/// Bars are scaled to the period's busiest day.
pub fn trend(metrics: &EngagementMetrics) -> String {
    let days = &metrics.current_period;
    if days.is_empty() {
        return "  no daily data\n".to_string();
    }
    let peak = days.iter().map(|d| d.impressions).max().unwrap_or(0).max(1);

    let mut out = format!("  {:<10} {:>11} {:>11}\n", "date", "impressions", "engagements");
    for day in days {
        let width = (day.impressions * BAR_WIDTH / peak) as usize;
        out.push_str(&format!(
            "  {} {:>11} {:>11} {}\n",
            day.date.format("%Y-%m-%d"),
            format_number(day.impressions),
            format_number(day.engagements),
            "█".repeat(width)
        ));
    }
    out
}

/// Flags numbered in severity order, the same order `/fix <n>` uses.
pub fn flags(analysis: &AnalysisResult) -> String {
    let sorted = analysis.flags_by_severity();
    if sorted.is_empty() {
        return "  no risk flags\n".to_string();
    }
    let mut out = String::new();
    for (i, flag) in sorted.iter().enumerate() {
        out.push_str(&flag_line(i + 1, flag));
        out.push('\n');
    }
    out
}

pub fn fix(selected: &SelectedFlag) -> String {
    let mut out = format!("  {} → {}\n", selected.flag.title, selected.fix.title);
    for (i, step) in selected.fix.steps.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, step));
    }
    if let Some(template) = &selected.fix.template {
        out.push_str(&format!("\n  template:\n  {template}\n"));
    }
    out
}

pub fn tweet_variations(variations: &[TweetVariation]) -> String {
    variations
        .iter()
        .map(|v| format!("  [{}]\n  {}\n  why: {}\n\n", v.style, v.text, v.reasoning))
        .collect()
}

pub fn search_result(result: &SearchTestResult) -> String {
    let mut out = format!(
        "  \"{}\"  {:.0}/100 ({})\n",
        result.query,
        result.verdict.score,
        result.verdict.status.as_str()
    );
    for p in &result.placements {
        let mark = if p.found { "✓" } else { "✗" };
        out.push_str(&format!("  {mark} {}\n", p.context));
    }
    out.push_str(&format!("\n  {}\n", result.verdict.ai_analysis));
    out
}

pub fn query_variations(variations: &[SearchQueryVariation]) -> String {
    variations
        .iter()
        .map(|v| format!("  {:<14} {}\n", v.kind, v.query))
        .collect()
}

pub fn content_ideas(ideas: &[ContentIdea]) -> String {
    if ideas.is_empty() {
        return "  no content ideas\n".to_string();
    }
    ideas
        .iter()
        .map(|idea| {
            format!(
                "  {} ({}, {} reach)\n    \"{}\"\n",
                idea.topic,
                idea.format.as_str(),
                idea.estimated_reach.as_str(),
                idea.hook
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback;
    use crate::simulate::series::build_metrics;
    use crate::types::{MetricData, SearchPlacement, SearchStatus, SearchVerdict};
    use chrono::{NaiveDate, Utc};

    fn day(d: u32, impressions: u64, engagements: u64) -> MetricData {
        MetricData {
            date: NaiveDate::from_ymd_opt(2026, 10, d).unwrap(),
            impressions,
            engagements,
            likes: 0,
            replies: 0,
            retweets: 0,
            profile_visits: 0,
        }
    }

    #[test]
    fn overview_shows_every_section() {
        let analysis = fallback::analysis(Utc::now());
        let metrics = build_metrics(vec![], vec![], 28);
        let text = overview("ferris", &metrics, &analysis);
        assert!(text.contains("@ferris"));
        assert!(text.contains("65/100 (AT_RISK)"));
        assert!(text.contains("shadowban risk Low"));
        assert!(text.contains("12,450"));
        assert!(text.contains("no previous period"));
        assert!(text.contains("Inconsistent Posting"));
        assert!(text.contains("Day 1: Reply to 5 large accounts"));
        assert!(text.contains("9:00 AM EST, 4:00 PM EST"));
    }

    #[test]
    fn shadowban_risk_is_high_only_when_shadowbanned() {
        assert_eq!(shadowban_risk(VisibilityStatus::Shadowbanned), "High");
        for status in [
            VisibilityStatus::Healthy,
            VisibilityStatus::AtRisk,
            VisibilityStatus::Restricted,
        ] {
            assert_eq!(shadowban_risk(status), "Low");
        }

        let mut analysis = fallback::analysis(Utc::now());
        analysis.status = VisibilityStatus::Shadowbanned;
        let text = overview("ferris", &build_metrics(vec![], vec![], 28), &analysis);
        assert!(text.contains("shadowban risk High"));
    }

    #[test]
    fn trend_lists_days_oldest_first_with_scaled_bars() {
        let metrics = build_metrics(
            vec![day(16, 1_500, 40), day(17, 3_000, 90), day(18, 750, 10)],
            vec![],
            28,
        );
        let text = trend(&metrics);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("impressions"));
        assert!(lines[1].starts_with("  2026-10-16"));
        assert!(lines[1].contains("1,500"));
        assert!(lines[2].starts_with("  2026-10-17"));
        assert!(lines[2].contains("3,000"));
        assert!(lines[3].starts_with("  2026-10-18"));

        let bar = |line: &str| line.chars().filter(|c| *c == '█').count();
        assert_eq!(bar(lines[2]), 30);
        assert_eq!(bar(lines[1]), 15);
        assert_eq!(bar(lines[3]), 7);
    }

    #[test]
    fn trend_without_data_says_so() {
        assert_eq!(trend(&build_metrics(vec![], vec![], 28)), "  no daily data\n");
        let flat = build_metrics(vec![day(18, 0, 0)], vec![], 28);
        assert!(trend(&flat).contains("2026-10-18"));
    }

    #[test]
    fn flags_are_numbered_by_severity() {
        let analysis = fallback::analysis(Utc::now());
        let text = flags(&analysis);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("  1. ! [warning]"));
        assert!(lines[1].starts_with("  2. · [info]"));
    }

    #[test]
    fn fix_includes_template_when_present() {
        let mut selected = SelectedFlag {
            flag: fallback::analysis(Utc::now()).flags[0].clone(),
            fix: fallback::fix(),
        };
        assert!(!fix(&selected).contains("template"));
        selected.fix.template = Some("We're back!".to_string());
        let text = fix(&selected);
        assert!(text.contains("3. Engage with verified accounts"));
        assert!(text.contains("We're back!"));
    }

    #[test]
    fn search_result_marks_placements() {
        let result = SearchTestResult {
            query: "giveaway promo".to_string(),
            timestamp: Utc::now(),
            placements: vec![
                SearchPlacement {
                    context: "Hashtag Feed".to_string(),
                    found: false,
                },
                SearchPlacement {
                    context: "Logged In (Follower View)".to_string(),
                    found: true,
                },
            ],
            verdict: SearchVerdict {
                score: 12.0,
                status: SearchStatus::SearchBanned,
                ai_analysis: "Hidden from search.".to_string(),
            },
        };
        let text = search_result(&result);
        assert!(text.contains("12/100 (SEARCH_BANNED)"));
        assert!(text.contains("✗ Hashtag Feed"));
        assert!(text.contains("✓ Logged In (Follower View)"));
    }

    #[test]
    fn empty_ideas_say_so() {
        assert_eq!(content_ideas(&[]), "  no content ideas\n");
        let text = content_ideas(&fallback::analysis(Utc::now()).content_ideas);
        assert!(text.contains("Industry Myths (thread, High reach)"));
    }
}
