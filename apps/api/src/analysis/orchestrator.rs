//! CV Analysis: orchestrates the three section analyses.
//!
//! Flow: build prompts → three concurrent model calls (each with its own
//! rate-limit retry) → join → score each response → weighted overall score.
//!
//! All-or-nothing: one failed section fails the whole analysis. The caller only
//! ever sees an `AnalysisOutcome`; errors are folded into `Failure`.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::analysis::models::{
    AnalysisOutcome, AnalysisRequest, AnalysisResult, Section, SectionResult,
};
use crate::analysis::prompts::build_prompt;
use crate::analysis::retry::{run_with_retry, Delay, RetryPolicy, TokioDelay};
use crate::analysis::scoring::{build_section, overall_score};
use crate::llm_client::{LlmError, TextGenerator};

/// User-facing text of every `Failure` outcome.
pub const FAILURE_MESSAGE: &str =
    "An error occurred while analyzing the CV. Please try again later.";

/// One section's model call failed for good (after any retries).
#[derive(Debug, Error)]
#[error("{section} analysis failed: {source}")]
pub struct SectionError {
    pub section: Section,
    #[source]
    pub source: LlmError,
}

/// Stateless between calls; safe to share behind an `Arc` and call concurrently.
pub struct Analyzer {
    generator: Arc<dyn TextGenerator>,
    delay: Arc<dyn Delay>,
    policy: RetryPolicy,
}

impl Analyzer {
    /// Production wiring: default retry policy, real tokio timer.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self::with_retry(generator, Arc::new(TokioDelay), RetryPolicy::default())
    }

    pub fn with_retry(
        generator: Arc<dyn TextGenerator>,
        delay: Arc<dyn Delay>,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            generator,
            delay,
            policy,
        }
    }

    /// Analyzes `content` (already sanitized) for `job_role`.
    pub async fn analyze(&self, content: &str, job_role: &str) -> AnalysisOutcome {
        let request = AnalysisRequest {
            content: content.to_string(),
            job_role: job_role.to_string(),
        };

        info!(
            "Analyzing CV for role '{}' ({} chars)",
            request.job_role,
            request.content.len()
        );

        match self.run(&request).await {
            Ok(analysis) => {
                info!(
                    "CV analysis complete: overall={} skills={} experience={} education={}",
                    analysis.overall_score,
                    analysis.skills.score,
                    analysis.experience.score,
                    analysis.education.score
                );
                AnalysisOutcome::Success { analysis }
            }
            Err(e) => AnalysisOutcome::Failure {
                message: FAILURE_MESSAGE.to_string(),
                cause: e.to_string(),
            },
        }
    }

    async fn run(&self, request: &AnalysisRequest) -> Result<AnalysisResult, SectionError> {
        let (skills, experience, education) = tokio::try_join!(
            self.analyze_section(Section::Skills, request),
            self.analyze_section(Section::Experience, request),
            self.analyze_section(Section::Education, request),
        )?;

        let overall_score = overall_score(skills.score, experience.score, education.score);

        Ok(AnalysisResult {
            skills,
            experience,
            education,
            overall_score,
        })
    }

    async fn analyze_section(
        &self,
        section: Section,
        request: &AnalysisRequest,
    ) -> Result<SectionResult, SectionError> {
        let prompt = build_prompt(section, request);
        let prompt = prompt.as_str();
        let generator = self.generator.as_ref();

        let raw = run_with_retry(&self.policy, self.delay.as_ref(), section.as_str(), move || {
            generator.generate(prompt)
        })
        .await
        .map_err(|source| SectionError { section, source })?;

        Ok(build_section(raw))
    }
}
