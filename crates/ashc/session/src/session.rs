use crate::error::SessionError;
use ashc_causal::{CausalEdge, CausalGraph, MonotonicityViolation, PredictedOutcome};
use ashc_compiler::{AdaptiveCompiler, AdaptiveEvidence, CompilerConfig};
use ashc_economy::{Bet, BetId, Citation, Economy, ResolutionOutcome};
use ashc_evidence::{Generator, Verifier};
use ashc_stopping::{PriorSeeder, StoppingConfig};
use ashc_types::{CancelToken, Nudge};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Session-level settings.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SessionConfig {
    pub stopping: StoppingConfig,
    pub compiler: CompilerConfig,
    /// Stake ceiling; actual stake scales with claimed confidence.
    pub max_stake: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            stopping: StoppingConfig::default(),
            compiler: CompilerConfig::default(),
            max_stake: 1.0,
        }
    }
}

/// One compile-and-bet cycle.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CycleReport {
    pub adaptive: AdaptiveEvidence,
    pub bet: Bet,
}

/// Baseline-vs-nudged comparison, already folded into the causal graph.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NudgeTrial {
    pub baseline: AdaptiveEvidence,
    pub nudged: AdaptiveEvidence,
    pub edge: CausalEdge,
}

/// One compiling session.
///
/// Owns the economy and causal graph for its lifetime; collaborators are
/// shared handles. The emergency-stop token aborts any in-flight
/// compilation cooperatively.
pub struct AshcSession {
    generator: Arc<dyn Generator>,
    verifier: Arc<dyn Verifier>,
    seeder: Option<Arc<dyn PriorSeeder>>,
    config: SessionConfig,
    economy: Economy,
    graph: CausalGraph,
    emergency_stop: CancelToken,
}

impl AshcSession {
    pub fn new(generator: Arc<dyn Generator>, verifier: Arc<dyn Verifier>) -> Self {
        Self {
            generator,
            verifier,
            seeder: None,
            config: SessionConfig::default(),
            economy: Economy::new(),
            graph: CausalGraph::new(),
            emergency_stop: CancelToken::new(),
        }
    }

    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_seeder(mut self, seeder: Arc<dyn PriorSeeder>) -> Self {
        self.seeder = Some(seeder);
        self
    }

    pub fn with_economy(mut self, economy: Economy) -> Self {
        self.economy = economy;
        self
    }

    pub fn with_graph(mut self, graph: CausalGraph) -> Self {
        self.graph = graph;
        self
    }

    /// Shared handle to the emergency-stop flag.
    pub fn emergency_stop_handle(&self) -> CancelToken {
        self.emergency_stop.clone()
    }

    pub fn trigger_emergency_stop(&self) {
        self.emergency_stop.cancel();
    }

    pub fn is_stopped(&self) -> bool {
        self.emergency_stop.is_cancelled()
    }

    fn compiler(&self, nudge: Option<Nudge>) -> AdaptiveCompiler {
        let mut compiler = AdaptiveCompiler::new(
            Arc::clone(&self.generator),
            Arc::clone(&self.verifier),
        )
        .with_config(self.config.compiler);
        if let Some(seeder) = &self.seeder {
            compiler = compiler.with_seeder(Arc::clone(seeder));
        }
        if let Some(nudge) = nudge {
            compiler = compiler.with_nudge(nudge);
        }
        compiler
    }

    /// Adaptive compilation under the session's emergency stop.
    pub async fn compile(
        &self,
        spec_text: &str,
        nudge: Option<Nudge>,
    ) -> Result<AdaptiveEvidence, SessionError> {
        if self.is_stopped() {
            return Err(SessionError::Stopped);
        }
        // Child token: a terminal stop decision must not trip the
        // session-wide flag.
        let cancel = CancelToken::new();
        let session_stop = self.emergency_stop.clone();
        let watcher = cancel.clone();
        let guard = tokio::spawn(async move {
            loop {
                if session_stop.is_cancelled() {
                    watcher.cancel();
                    return;
                }
                tokio::time::sleep(std::time::Duration::from_millis(5)).await;
            }
        });

        let result = self
            .compiler(nudge)
            .compile_with_cancel(spec_text, self.config.stopping, cancel)
            .await;
        guard.abort();
        Ok(result?)
    }

    /// Compile and immediately stake a bet on the outcome: confidence is
    /// the posterior mean at stop time, stake proportional to confidence.
    pub async fn run_cycle(
        &self,
        spec_text: &str,
        nudge: Option<Nudge>,
        citations: Vec<Citation>,
    ) -> Result<CycleReport, SessionError> {
        let adaptive = self.compile(spec_text, nudge).await?;
        let confidence = adaptive.posterior_mean;
        let stake = Economy::proportional_stake(confidence, self.config.max_stake);
        let bet = self
            .economy
            .place_bet(
                adaptive.evidence.spec.clone(),
                confidence,
                stake,
                citations,
            )
            .await?;
        info!(
            spec = %adaptive.evidence.spec,
            confidence,
            stake,
            tier = %adaptive.tier,
            "cycle complete, bet staked"
        );
        Ok(CycleReport { adaptive, bet })
    }

    /// Resolve a cycle's bet once ground truth arrives. Settlement,
    /// credibility update, and causal penalty propagation happen here.
    pub async fn resolve(
        &self,
        bet_id: &BetId,
        success: bool,
    ) -> Result<ResolutionOutcome, SessionError> {
        Ok(self.economy.resolve(bet_id, success).await?)
    }

    /// Compile the specification twice — without and with the nudge — and
    /// record the observed outcome delta in the causal graph.
    pub async fn trial_nudge(
        &self,
        spec_text: &str,
        nudge: Nudge,
    ) -> Result<NudgeTrial, SessionError> {
        let baseline = self.compile(spec_text, None).await?;
        let nudged = self.compile(spec_text, Some(nudge.clone())).await?;
        let edge = self
            .graph
            .learn(&nudge, &baseline.evidence, &nudged.evidence);
        info!(nudge = %nudge.id, delta = edge.delta, "nudge trial recorded");
        Ok(NudgeTrial {
            baseline,
            nudged,
            edge,
        })
    }

    /// Predict the effect of a nudge from session history.
    pub fn predict_nudge(&self, nudge: &Nudge) -> PredictedOutcome {
        self.graph.predict(nudge)
    }

    /// Audit the learned graph for causal monotonicity violations.
    pub fn audit_monotonicity(&self) -> Vec<MonotonicityViolation> {
        self.graph.audit_monotonicity()
    }

    pub async fn credibility(&self) -> f64 {
        self.economy.credibility().await
    }

    pub fn economy(&self) -> &Economy {
        &self.economy
    }

    pub fn graph(&self) -> &CausalGraph {
        &self.graph
    }
}
