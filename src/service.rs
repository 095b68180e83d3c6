//! The five structured model tasks, each with a guaranteed result.
//!
//! Every operation resolves to a complete record. When the model call fails,
//! returns nothing, or returns something that does not decode and validate,
//! the task's canned value from [`crate::fallback`] is returned instead and
//! the cause is logged. Nothing is retried.

use chrono::Utc;
use serde::de::DeserializeOwned;
use std::sync::{Arc, Mutex};
use tracing::Span;

use crate::decode::{Validate, decode};
use crate::error::GenerateError;
use crate::fallback;
use crate::generator::{GenerateRequest, Generator, Task, TokenUsage};
use crate::prompts;
use crate::schema::Schema;
use crate::simulate::Simulator;
use crate::types::{
    AnalysisResult, EngagementMetrics, FixRecommendation, RiskFlag, SearchQueryVariation,
    SearchTestResult, SearchVerdict, TweetVariation,
};

/// Constructed once at startup and shared by reference with whatever needs it.
pub struct AnalysisService {
    generator: Arc<dyn Generator>,
    simulator: Simulator,
    model: String,
    usage: Mutex<TokenUsage>,
}

impl AnalysisService {
    pub fn new(generator: Arc<dyn Generator>, simulator: Simulator, model: impl Into<String>) -> Self {
        Self {
            generator,
            simulator,
            model: model.into(),
            usage: Mutex::new(TokenUsage::default()),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Tokens spent by every call made through this service.
    pub fn usage(&self) -> TokenUsage {
        self.usage.lock().map(|u| *u).unwrap_or_default()
    }

    /// Collect a fresh set of account metrics.
    pub async fn ingest(&self) -> EngagementMetrics {
        self.simulator.ingest().await
    }

    #[tracing::instrument(skip_all, fields(task = %Task::AnalyzeAccount, origin = tracing::field::Empty))]
    pub async fn analyze_account(&self, metrics: &EngagementMetrics) -> AnalysisResult {
        let result = self
            .generate(
                Task::AnalyzeAccount,
                prompts::analysis::build_prompt(metrics),
                prompts::analysis::schema(),
            )
            .await;
        settle(result, || fallback::analysis(Utc::now()))
    }

    /// Always calls the model, even for an empty draft.
    #[tracing::instrument(skip_all, fields(task = %Task::OptimizeDraft, origin = tracing::field::Empty))]
    pub async fn optimize_draft(&self, draft: &str) -> Vec<TweetVariation> {
        let result = self
            .generate(
                Task::OptimizeDraft,
                prompts::draft::build_prompt(draft),
                prompts::draft::schema(),
            )
            .await;
        settle(result, fallback::draft_variations)
    }

    #[tracing::instrument(skip_all, fields(task = %Task::FixFlag, flag = %flag.id, origin = tracing::field::Empty))]
    pub async fn get_fix_for_flag(&self, flag: &RiskFlag) -> FixRecommendation {
        let result = self
            .generate(
                Task::FixFlag,
                prompts::fix::build_prompt(flag),
                prompts::fix::schema(),
            )
            .await;
        settle(result, fallback::fix)
    }

    /// Crawl for `query`, then have the model interpret the placements.
    #[tracing::instrument(skip_all, fields(task = %Task::SearchCheck, origin = tracing::field::Empty))]
    pub async fn run_search_check(&self, query: &str) -> SearchTestResult {
        let placements = self.simulator.crawl(query).await;

        let result: Result<SearchVerdict, _> = self
            .generate(
                Task::SearchCheck,
                prompts::search::build_check_prompt(query, &placements),
                prompts::search::check_schema(),
            )
            .await;

        match result {
            Ok(verdict) => {
                Span::current().record("origin", "model");
                SearchTestResult {
                    query: query.to_string(),
                    timestamp: Utc::now(),
                    placements,
                    verdict,
                }
            }
            Err(e) => {
                Span::current().record("origin", "fallback");
                tracing::warn!(error = %e, "model reply unusable, using canned result");
                fallback::search_result(query, placements, Utc::now())
            }
        }
    }

    #[tracing::instrument(skip_all, fields(task = %Task::SearchVariations, origin = tracing::field::Empty))]
    pub async fn generate_search_variations(&self, query: &str) -> Vec<SearchQueryVariation> {
        let result = self
            .generate(
                Task::SearchVariations,
                prompts::search::build_variations_prompt(query),
                prompts::search::variations_schema(),
            )
            .await;
        settle(result, || fallback::search_variations(query))
    }

    /// One model call, decoded and validated into `T`.
    async fn generate<T>(&self, task: Task, prompt: String, schema: Schema) -> Result<T, GenerateError>
    where
        T: DeserializeOwned + Validate,
    {
        let request = GenerateRequest {
            task,
            model: self.model.clone(),
            prompt,
            schema,
        };

        let generation = self.generator.generate(&request).await?;

        if let Some(usage) = generation.usage
            && let Ok(mut total) = self.usage.lock()
        {
            total.add(usage);
        }

        if generation.text.trim().is_empty() {
            return Err(GenerateError::EmptyResponse);
        }
        decode(&generation.text)
    }
}

/// Take the model's value, or log why not and use the fallback.
fn settle<T>(result: Result<T, GenerateError>, fallback: impl FnOnce() -> T) -> T {
    match result {
        Ok(value) => {
            Span::current().record("origin", "model");
            value
        }
        Err(e) => {
            Span::current().record("origin", "fallback");
            tracing::warn!(error = %e, "model reply unusable, using canned result");
            fallback()
        }
    }
}
