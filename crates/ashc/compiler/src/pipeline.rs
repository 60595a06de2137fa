use ashc_evidence::{EvidenceError, Generator, Run, Verifier};
use ashc_types::{CallLimits, CancelToken, Nudge, SpecFingerprint};
use std::sync::Arc;
use std::time::Instant;
use tracing::warn;

/// One generation+verification pipeline invocation.
pub(crate) struct PipelineJob {
    pub generator: Arc<dyn Generator>,
    pub verifier: Arc<dyn Verifier>,
    pub spec_text: Arc<str>,
    pub spec: SpecFingerprint,
    pub variation: u32,
    pub nudge: Option<Nudge>,
    pub limits: CallLimits,
    pub cancel: CancelToken,
}

/// Execute one pipeline: generate, then verify, under per-call deadlines.
///
/// Returns `None` only when the shared token was cancelled — a cancelled
/// pipeline must not produce a run. Every other collaborator failure
/// (timeout, crash, budget overrun) is recorded as a failed run so the
/// sample is never silently dropped.
pub(crate) async fn run_pipeline(job: PipelineJob) -> Option<Run> {
    let started = Instant::now();
    let nudge_id = job.nudge.as_ref().map(|n| n.id.clone());

    if job.cancel.is_cancelled() {
        return None;
    }

    let generated = tokio::time::timeout(
        job.limits.generate_deadline(),
        job.generator
            .generate(&job.spec_text, job.nudge.as_ref(), &job.limits, &job.cancel),
    )
    .await;

    let candidate = match generated {
        Err(_) => {
            warn!(variation = job.variation, "generation deadline exceeded");
            return Some(Run::collaborator_failure(
                job.spec,
                job.variation,
                nudge_id,
                "generation timed out",
                started.elapsed().as_millis() as u64,
            ));
        }
        Ok(Err(EvidenceError::Cancelled)) if job.cancel.is_cancelled() => return None,
        Ok(Err(err)) => {
            warn!(variation = job.variation, error = %err, "generation failed");
            return Some(Run::collaborator_failure(
                job.spec,
                job.variation,
                nudge_id,
                format!("generation failed: {}", err),
                started.elapsed().as_millis() as u64,
            ));
        }
        Ok(Ok(candidate)) => candidate,
    };

    if job.cancel.is_cancelled() {
        return None;
    }

    let verified = tokio::time::timeout(
        job.limits.verify_deadline(),
        job.verifier.verify(&candidate, &job.cancel),
    )
    .await;

    match verified {
        Err(_) => {
            warn!(variation = job.variation, "verification deadline exceeded");
            Some(Run::collaborator_failure(
                job.spec,
                job.variation,
                nudge_id,
                "verification timed out",
                started.elapsed().as_millis() as u64,
            ))
        }
        Ok(Err(EvidenceError::Cancelled)) if job.cancel.is_cancelled() => None,
        Ok(Err(err)) => {
            warn!(variation = job.variation, error = %err, "verification failed");
            Some(Run::collaborator_failure(
                job.spec,
                job.variation,
                nudge_id,
                format!("verification failed: {}", err),
                started.elapsed().as_millis() as u64,
            ))
        }
        Ok(Ok(report)) => Some(Run::verified(
            job.spec,
            job.variation,
            nudge_id,
            candidate.fingerprint,
            report,
            started.elapsed().as_millis() as u64,
        )),
    }
}
