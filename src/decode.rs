//! Strict decoding of model replies.
//!
//! A reply is accepted only if it deserializes into the full record (every
//! required field present and well-typed, every enum tag in its closed set)
//! and then passes [`Validate`]. Anything else is an error the service turns
//! into the task's fallback.

use serde::de::DeserializeOwned;
use std::collections::HashSet;

use crate::error::GenerateError;
use crate::types::{
    AnalysisResult, FixRecommendation, SearchQueryVariation, SearchVerdict, TweetVariation,
};

/// Post-parse checks serde cannot express. May normalize the value.
pub trait Validate: Sized {
    fn validate(self) -> Result<Self, GenerateError>;
}

/// Parse `text` as `T` and validate it.
pub fn decode<T>(text: &str) -> Result<T, GenerateError>
where
    T: DeserializeOwned + Validate,
{
    let json = extract_json(text);
    if json.is_empty() {
        return Err(GenerateError::EmptyResponse);
    }
    let value: T = serde_json::from_str(json)?;
    value.validate()
}

/// Extract JSON from text that may be wrapped in markdown code fences.
pub fn extract_json(text: &str) -> &str {
    let trimmed = text.trim();

    if let Some(after) = trimmed.strip_prefix("```json")
        && let Some(json) = after.strip_suffix("```")
    {
        return json.trim();
    }
    if let Some(after) = trimmed.strip_prefix("```")
        && let Some(json) = after.strip_suffix("```")
    {
        return json.trim();
    }

    trimmed
}

fn check_score(name: &str, score: f64) -> Result<(), GenerateError> {
    if !score.is_finite() || !(0.0..=100.0).contains(&score) {
        return Err(GenerateError::invalid(format!("{name} {score} is outside 0-100")));
    }
    Ok(())
}

impl Validate for AnalysisResult {
    fn validate(self) -> Result<Self, GenerateError> {
        check_score("healthScore", self.health_score)?;

        let mut seen = HashSet::new();
        for flag in &self.flags {
            if !seen.insert(flag.id.as_str()) {
                return Err(GenerateError::invalid(format!("duplicate flag id {:?}", flag.id)));
            }
        }
        Ok(self)
    }
}

impl Validate for FixRecommendation {
    fn validate(mut self) -> Result<Self, GenerateError> {
        if self.steps.is_empty() {
            return Err(GenerateError::invalid("fix has no steps"));
        }
        if self.steps.iter().any(|s| s.trim().is_empty()) {
            return Err(GenerateError::invalid("fix has a blank step"));
        }
        // The model is told to leave the template empty when no post is needed.
        if self.template.as_deref().is_some_and(|t| t.trim().is_empty()) {
            self.template = None;
        }
        Ok(self)
    }
}

impl Validate for SearchVerdict {
    fn validate(self) -> Result<Self, GenerateError> {
        check_score("score", self.score)?;
        Ok(self)
    }
}

impl Validate for Vec<TweetVariation> {
    fn validate(self) -> Result<Self, GenerateError> {
        if self.is_empty() {
            return Err(GenerateError::invalid("no variations returned"));
        }
        if self.iter().any(|v| v.text.trim().is_empty()) {
            return Err(GenerateError::invalid("variation with blank text"));
        }
        Ok(self)
    }
}

impl Validate for Vec<SearchQueryVariation> {
    fn validate(self) -> Result<Self, GenerateError> {
        if self.is_empty() {
            return Err(GenerateError::invalid("no query variations returned"));
        }
        if self.iter().any(|v| v.query.trim().is_empty()) {
            return Err(GenerateError::invalid("query variation with blank query"));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SearchStatus, Severity, VisibilityStatus};
    use serde_json::json;

    fn analysis_json() -> serde_json::Value {
        json!({
            "healthScore": 72,
            "status": "HEALTHY",
            "summary": "Looks fine.",
            "flags": [
                {"id": "f1", "severity": "critical", "title": "Spam", "description": "d", "timestamp": "2025-01-01T00:00:00Z"},
                {"id": "f2", "severity": "info", "title": "Media", "description": "d", "timestamp": "2025-01-01T00:00:00Z"}
            ],
            "actionPlan": [
                {"day": "Day 1", "action": "Reply more", "impact": "High", "status": "pending"}
            ],
            "postingStrategy": {"bestTimes": ["9:00 AM"], "contentMix": "all threads"},
            "contentIdeas": [
                {"topic": "t", "hook": "h", "format": "poll", "estimatedReach": "Medium"}
            ]
        })
    }

    #[test]
    fn decodes_complete_analysis() {
        let result: AnalysisResult = decode(&analysis_json().to_string()).unwrap();
        assert_eq!(result.health_score, 72.0);
        assert_eq!(result.status, VisibilityStatus::Healthy);
        assert_eq!(result.flags[0].severity, Severity::Critical);
        assert_eq!(result.content_ideas.len(), 1);
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let mut value = analysis_json();
        value.as_object_mut().unwrap().remove("postingStrategy");
        let err = decode::<AnalysisResult>(&value.to_string()).unwrap_err();
        assert!(matches!(err, GenerateError::Decode(_)));
    }

    #[test]
    fn out_of_set_enum_is_rejected() {
        let mut value = analysis_json();
        value["flags"][0]["severity"] = json!("catastrophic");
        assert!(decode::<AnalysisResult>(&value.to_string()).is_err());

        let mut value = analysis_json();
        value["status"] = json!("BANNED");
        assert!(decode::<AnalysisResult>(&value.to_string()).is_err());
    }

    #[test]
    fn mistyped_field_is_rejected() {
        let mut value = analysis_json();
        value["healthScore"] = json!("seventy");
        assert!(decode::<AnalysisResult>(&value.to_string()).is_err());
    }

    #[test]
    fn out_of_range_score_is_rejected() {
        let mut value = analysis_json();
        value["healthScore"] = json!(140);
        let err = decode::<AnalysisResult>(&value.to_string()).unwrap_err();
        assert!(err.to_string().contains("outside 0-100"));
    }

    #[test]
    fn duplicate_flag_ids_are_rejected() {
        let mut value = analysis_json();
        value["flags"][1]["id"] = json!("f1");
        let err = decode::<AnalysisResult>(&value.to_string()).unwrap_err();
        assert!(err.to_string().contains("duplicate flag id"));
    }

    #[test]
    fn fix_without_steps_is_rejected() {
        let err = decode::<FixRecommendation>(r#"{"title": "t", "steps": []}"#).unwrap_err();
        assert!(matches!(err, GenerateError::Invalid(_)));
        assert!(decode::<FixRecommendation>(r#"{"title": "t", "steps": ["  "]}"#).is_err());
    }

    #[test]
    fn empty_template_becomes_none() {
        let fix: FixRecommendation =
            decode(r#"{"title": "t", "steps": ["one"], "template": ""}"#).unwrap();
        assert!(fix.template.is_none());

        let fix: FixRecommendation =
            decode(r#"{"title": "t", "steps": ["one"], "template": "Sorry all"}"#).unwrap();
        assert_eq!(fix.template.as_deref(), Some("Sorry all"));
    }

    #[test]
    fn verdict_decodes_and_checks_range() {
        let verdict: SearchVerdict =
            decode(r#"{"score": 10, "status": "SEARCH_BANNED", "aiAnalysis": "Hidden."}"#).unwrap();
        assert_eq!(verdict.status, SearchStatus::SearchBanned);
        assert!(decode::<SearchVerdict>(r#"{"score": -1, "status": "VISIBLE", "aiAnalysis": "x"}"#).is_err());
    }

    #[test]
    fn empty_batches_are_rejected() {
        assert!(decode::<Vec<TweetVariation>>("[]").is_err());
        assert!(decode::<Vec<SearchQueryVariation>>("[]").is_err());
    }

    #[test]
    fn variation_type_field_is_renamed() {
        let vars: Vec<SearchQueryVariation> =
            decode(r##"[{"type": "Hashtag Test", "query": "#rust"}]"##).unwrap();
        assert_eq!(vars[0].kind, "Hashtag Test");
    }

    #[test]
    fn blank_text_is_empty_response() {
        let err = decode::<SearchVerdict>("   \n").unwrap_err();
        assert!(matches!(err, GenerateError::EmptyResponse));
    }

    #[test]
    fn fenced_reply_is_unwrapped() {
        let text = "```json\n{\"score\": 90, \"status\": \"VISIBLE\", \"aiAnalysis\": \"ok\"}\n```";
        let verdict: SearchVerdict = decode(text).unwrap();
        assert_eq!(verdict.score, 90.0);
    }

    #[test]
    fn extract_json_plain() {
        assert_eq!(extract_json(r#"{"a": 1}"#), r#"{"a": 1}"#);
    }

    #[test]
    fn extract_json_with_plain_fence() {
        let input = "```\n{\"a\": 1}\n```";
        assert_eq!(extract_json(input), r#"{"a": 1}"#);
    }

    #[test]
    fn extract_json_no_closing_fence_returns_as_is() {
        let input = "```json\n{\"a\": 1}";
        assert_eq!(extract_json(input), input.trim());
    }
}
