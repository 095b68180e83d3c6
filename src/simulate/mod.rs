//! Stand-ins for real data collection: a synthetic metrics ingest and a
//! simulated search crawl, each with an artificial delay.

pub mod crawl;
pub mod series;

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Mutex;
use std::time::Duration;

use crate::consts::{CRAWL_DELAY, INGEST_DELAY, PERIOD_DAYS};
use crate::types::{EngagementMetrics, SearchPlacement};

/// Owns the random source and the artificial latencies.
///
/// Seed it for reproducible output; zero the delays for tests.
pub struct Simulator {
    rng: Mutex<StdRng>,
    ingest_delay: Duration,
    crawl_delay: Duration,
}

impl Simulator {
    /// Seeded from entropy, with the default delays.
    pub fn new() -> Self {
        Self::seeded(rand::random())
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            ingest_delay: INGEST_DELAY,
            crawl_delay: CRAWL_DELAY,
        }
    }

    pub fn with_delays(mut self, ingest: Duration, crawl: Duration) -> Self {
        self.ingest_delay = ingest;
        self.crawl_delay = crawl;
        self
    }

    pub fn without_delays(self) -> Self {
        self.with_delays(Duration::ZERO, Duration::ZERO)
    }

    /// Fresh metrics for two consecutive periods ending today.
    pub async fn ingest(&self) -> EngagementMetrics {
        pause(self.ingest_delay).await;

        let today = Utc::now().date_naive();
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        let current = series::generate_time_series(PERIOD_DAYS, today, &mut *rng);
        let previous = series::generate_time_series(PERIOD_DAYS, today, &mut *rng);
        drop(rng);

        tracing::debug!(days = current.len(), "ingested synthetic metrics");
        series::build_metrics(current, previous, PERIOD_DAYS)
    }

    /// Where `query` shows up, per placement.
    pub async fn crawl(&self, query: &str) -> Vec<SearchPlacement> {
        pause(self.crawl_delay).await;

        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        let placements = crawl::simulate_crawl(query, &mut *rng);
        tracing::debug!(
            query,
            risky = crawl::is_risky(query),
            found = placements.iter().filter(|p| p.found).count(),
            "simulated search crawl"
        );
        placements
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
