use crate::config::CompilerConfig;
use crate::error::CompileError;
use crate::output::AdaptiveEvidence;
use crate::pipeline::{run_pipeline, PipelineJob};
use ashc_evidence::{Evidence, EvidenceError, Generator, Verifier};
use ashc_stopping::{BetaPrior, ConfidenceTier, PriorSeeder, StoppingConfig, StoppingState};
use ashc_types::{CancelToken, Nudge, SpecFingerprint};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Adaptive evidence compiler.
///
/// Generates one candidate at a time, verifies it immediately, and consults
/// the stopping engine after every run; the next candidate is only requested
/// on a `Continue` decision. A terminal decision seals the evidence first
/// and then cancels the shared token, so a pipeline that finishes late can
/// never append — the sealed evidence refuses it even if the collaborator
/// ignores the token.
pub struct AdaptiveCompiler {
    generator: Arc<dyn Generator>,
    verifier: Arc<dyn Verifier>,
    config: CompilerConfig,
    seeder: Option<Arc<dyn PriorSeeder>>,
    nudge: Option<Nudge>,
}

impl AdaptiveCompiler {
    pub fn new(generator: Arc<dyn Generator>, verifier: Arc<dyn Verifier>) -> Self {
        Self {
            generator,
            verifier,
            config: CompilerConfig::default(),
            seeder: None,
            nudge: None,
        }
    }

    pub fn with_config(mut self, config: CompilerConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the prior from an external pre-verification pass before any run.
    pub fn with_seeder(mut self, seeder: Arc<dyn PriorSeeder>) -> Self {
        self.seeder = Some(seeder);
        self
    }

    /// Apply one nudge to every generation in this compilation.
    pub fn with_nudge(mut self, nudge: Nudge) -> Self {
        self.nudge = Some(nudge);
        self
    }

    /// Compile until the stopping rule reaches a terminal decision.
    pub async fn compile(
        &self,
        spec_text: &str,
        stopping: StoppingConfig,
    ) -> Result<AdaptiveEvidence, CompileError> {
        self.compile_with_cancel(spec_text, stopping, CancelToken::new())
            .await
    }

    /// Compile with a caller-held token; cancelling it aborts the
    /// compilation with an error rather than fabricating a verdict.
    pub async fn compile_with_cancel(
        &self,
        spec_text: &str,
        stopping: StoppingConfig,
        cancel: CancelToken,
    ) -> Result<AdaptiveEvidence, CompileError> {
        let spec = SpecFingerprint::of_spec(spec_text);
        let mut evidence = Evidence::new(spec.clone());
        let spec_text: Arc<str> = Arc::from(spec_text);

        let prior = match &self.seeder {
            Some(seeder) => match seeder.seed_prior(&spec_text).await {
                Ok(prior) => {
                    debug!(mean = prior.mean(), "prior seeded");
                    prior
                }
                Err(err) => {
                    // Seeding is advisory; a failed seeder costs extra
                    // samples, not the compilation.
                    warn!(error = %err, "prior seeding failed; using uniform prior");
                    BetaPrior::uniform()
                }
            },
            None => BetaPrior::uniform(),
        };
        let mut state = StoppingState::with_prior(prior, stopping);

        let mut variation: u32 = 0;
        let mut decision = state.decision();
        while !decision.is_terminal() {
            let run = run_pipeline(PipelineJob {
                generator: Arc::clone(&self.generator),
                verifier: Arc::clone(&self.verifier),
                spec_text: Arc::clone(&spec_text),
                spec: spec.clone(),
                variation,
                nudge: self.nudge.clone(),
                limits: self.config.limits,
                cancel: cancel.clone(),
            })
            .await;

            let run = match run {
                Some(run) => run,
                None => return Err(CompileError::Evidence(EvidenceError::Cancelled)),
            };

            let passed = run.passed;
            evidence.append(run)?;
            decision = state.next_decision(passed);
            debug!(
                variation,
                passed,
                samples = state.samples(),
                lead = state.lead(),
                posterior_mean = state.posterior().mean(),
                decision = %decision,
                "sample consumed"
            );
            variation += 1;
        }

        // Seal before cancelling: the append guard, not collaborator
        // cooperation, is what closes the completion race.
        evidence.seal();
        cancel.cancel();

        let posterior_mean = state.posterior().mean();
        let tier = ConfidenceTier::classify(state.posterior());
        info!(
            spec = %spec,
            samples = evidence.len(),
            decision = %decision,
            posterior_mean,
            tier = %tier,
            "adaptive compilation stopped"
        );

        Ok(AdaptiveEvidence {
            evidence,
            decision,
            tier,
            posterior_mean,
            converged: decision.converged(),
        })
    }
}
