use crate::config::CompilerConfig;
use crate::error::CompileError;
use crate::output::AshcOutput;
use crate::pipeline::{run_pipeline, PipelineJob};
use ashc_evidence::{Evidence, Generator, Verifier};
use ashc_types::{CancelToken, Nudge, SpecFingerprint};
use std::sync::Arc;
use tracing::debug;

/// Fixed-N evidence compiler.
///
/// All N variations are requested up front and executed with bounded
/// parallelism. Pipelines are spawned in waves of `parallelism` and their
/// results awaited in variation-index order, so run insertion into the
/// evidence is deterministic regardless of completion order inside a wave.
pub struct EvidenceCompiler {
    generator: Arc<dyn Generator>,
    verifier: Arc<dyn Verifier>,
    config: CompilerConfig,
}

impl EvidenceCompiler {
    pub fn new(generator: Arc<dyn Generator>, verifier: Arc<dyn Verifier>) -> Self {
        Self {
            generator,
            verifier,
            config: CompilerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: CompilerConfig) -> Self {
        self.config = config;
        self
    }

    /// Compile N un-nudged variations.
    pub async fn compile(&self, spec_text: &str, n: u32) -> Result<AshcOutput, CompileError> {
        self.compile_with_nudges(spec_text, vec![None; n as usize])
            .await
    }

    /// Compile one variation per entry, each with its own optional nudge.
    pub async fn compile_with_nudges(
        &self,
        spec_text: &str,
        nudges: Vec<Option<Nudge>>,
    ) -> Result<AshcOutput, CompileError> {
        let spec = SpecFingerprint::of_spec(spec_text);
        let mut evidence = Evidence::new(spec.clone());
        // One token for the whole compilation; fixed-N never cancels it,
        // but collaborators still get a real token to honor.
        let cancel = CancelToken::new();
        let spec_text: Arc<str> = Arc::from(spec_text);

        let assignments: Vec<(u32, Option<Nudge>)> = nudges
            .into_iter()
            .enumerate()
            .map(|(i, nudge)| (i as u32, nudge))
            .collect();

        for wave in assignments.chunks(self.config.parallelism) {
            debug!(
                wave_size = wave.len(),
                first_variation = wave[0].0,
                "dispatching pipeline wave"
            );
            let handles: Vec<_> = wave
                .iter()
                .map(|(variation, nudge)| {
                    tokio::spawn(run_pipeline(PipelineJob {
                        generator: Arc::clone(&self.generator),
                        verifier: Arc::clone(&self.verifier),
                        spec_text: Arc::clone(&spec_text),
                        spec: spec.clone(),
                        variation: *variation,
                        nudge: nudge.clone(),
                        limits: self.config.limits,
                        cancel: cancel.clone(),
                    }))
                })
                .collect();

            // Awaiting in spawn order keeps evidence order == variation order.
            for handle in handles {
                match handle.await {
                    Ok(Some(run)) => {
                        debug!(variation = run.variation, passed = run.passed, "run recorded");
                        evidence.append(run)?;
                    }
                    // Only a cancelled pipeline returns no run, and fixed-N
                    // never cancels the token.
                    Ok(None) => {}
                    Err(join_err) => return Err(CompileError::Worker(join_err.to_string())),
                }
            }
        }

        let agreement_score = evidence.agreement_score();
        Ok(AshcOutput {
            evidence,
            agreement_score,
        })
    }
}
