//! Runtime configuration for the analysis service.
//!
//! Built from CLI flags (with environment fallbacks) in `main`. Nothing is
//! read from or written to disk.

use std::sync::Arc;

use crate::consts::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::generator::gemini::GeminiGenerator;
use crate::service::AnalysisService;
use crate::simulate::Simulator;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Gemini API key. Without one every task returns its fallback.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    /// Seed for the simulated data; entropy when absent.
    pub seed: Option<u64>,
    /// Whether the simulated ingest and crawl pause like real network calls.
    pub simulate_delays: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            seed: None,
            simulate_delays: true,
        }
    }
}

impl ServiceConfig {
    /// The key, if one was given and it is not blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    pub fn key_status(&self) -> &'static str {
        match self.api_key() {
            Some(_) => "configured ✓",
            None => "not configured (canned results only)",
        }
    }

    pub fn simulation_label(&self) -> String {
        let seed = match self.seed {
            Some(seed) => format!("seed {seed}"),
            None => "random".to_string(),
        };
        let delays = if self.simulate_delays { "" } else { ", no delay" };
        format!("simulated ({seed}{delays})")
    }

    pub fn simulator(&self) -> Simulator {
        let simulator = match self.seed {
            Some(seed) => Simulator::seeded(seed),
            None => Simulator::new(),
        };
        if self.simulate_delays {
            simulator
        } else {
            simulator.without_delays()
        }
    }

    /// Wire a Gemini-backed service. A missing key still yields a working
    /// service; its generator simply fails every call.
    pub fn build_service(&self) -> AnalysisService {
        if self.api_key().is_none() {
            tracing::warn!("no API key configured, every task will use its canned result");
        }
        let generator = GeminiGenerator::with_base_url(self.api_key().unwrap_or_default(), &self.base_url);
        AnalysisService::new(Arc::new(generator), self.simulator(), self.model.clone())
    }
}
