//! The connected-account flow: connect and scan, rescan, pick a flag to fix,
//! disconnect. All state is in memory and replaced wholesale per action.

use anyhow::{Context, Result, bail};

use crate::credentials::{Credentials, normalize_handle};
use crate::service::AnalysisService;
use crate::types::{AnalysisResult, EngagementMetrics, FixRecommendation, RiskFlag};

/// A flag the user chose to fix, with its lazily fetched remedy.
#[derive(Debug, Clone)]
pub struct SelectedFlag {
    pub flag: RiskFlag,
    pub fix: FixRecommendation,
}

struct Connected {
    handle: String,
    // Only held so it can be dropped on disconnect; never read back.
    _credentials: Credentials,
    metrics: EngagementMetrics,
    analysis: AnalysisResult,
    selected: Option<SelectedFlag>,
}

#[derive(Default)]
pub struct Session {
    connected: Option<Connected>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_connected(&self) -> bool {
        self.connected.is_some()
    }

    /// Validate the credentials, then ingest and analyse the account.
    ///
    /// On error the session is left as it was.
    pub async fn connect(
        &mut self,
        service: &AnalysisService,
        credentials: Credentials,
        handle: &str,
    ) -> Result<()> {
        let handle = normalize_handle(handle)?;
        credentials
            .validate()
            .context("failed to scan account, check the credentials and try again")?;

        let metrics = service.ingest().await;
        let analysis = service.analyze_account(&metrics).await;
        tracing::info!(
            handle = %handle,
            health_score = analysis.health_score,
            flags = analysis.flags.len(),
            "account scanned"
        );

        self.connected = Some(Connected {
            handle,
            _credentials: credentials,
            metrics,
            analysis,
            selected: None,
        });
        Ok(())
    }

    /// Re-ingest and re-analyse. Clears the selected flag, since the flag
    /// list is replaced.
    pub async fn rescan(&mut self, service: &AnalysisService) -> Result<()> {
        let Some(connected) = self.connected.as_mut() else {
            bail!("not connected");
        };
        let metrics = service.ingest().await;
        let analysis = service.analyze_account(&metrics).await;
        connected.metrics = metrics;
        connected.analysis = analysis;
        connected.selected = None;
        Ok(())
    }

    /// Select the flag at `index` in severity order and fetch its fix.
    ///
    /// Re-selecting the current flag reuses its fix; any other flag triggers
    /// a new request and replaces the cached one.
    pub async fn select_flag(
        &mut self,
        service: &AnalysisService,
        index: usize,
    ) -> Result<&SelectedFlag> {
        let Some(connected) = self.connected.as_mut() else {
            bail!("not connected");
        };
        let flag = connected
            .analysis
            .flags_by_severity()
            .get(index)
            .map(|f| (*f).clone())
            .with_context(|| {
                format!(
                    "no flag #{} ({} flags)",
                    index + 1,
                    connected.analysis.flags.len()
                )
            })?;

        let cached = connected
            .selected
            .as_ref()
            .is_some_and(|s| s.flag.id == flag.id);
        if !cached {
            let fix = service.get_fix_for_flag(&flag).await;
            connected.selected = Some(SelectedFlag { flag, fix });
        }

        connected
            .selected
            .as_ref()
            .context("flag selection was not recorded")
    }

    /// Drop credentials and every scan result.
    pub fn disconnect(&mut self) {
        if let Some(connected) = self.connected.take() {
            tracing::info!(handle = %connected.handle, "disconnected");
        }
    }

    pub fn handle(&self) -> Option<&str> {
        self.connected.as_ref().map(|c| c.handle.as_str())
    }

    pub fn metrics(&self) -> Option<&EngagementMetrics> {
        self.connected.as_ref().map(|c| &c.metrics)
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.connected.as_ref().map(|c| &c.analysis)
    }

    pub fn selected(&self) -> Option<&SelectedFlag> {
        self.connected.as_ref().and_then(|c| c.selected.as_ref())
    }
}
