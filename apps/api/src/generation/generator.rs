//! Content Generation: turns the user's form into AI-written résumé content.
//!
//! Flow: optimized experience → summary → cover letter, one upstream call each,
//! run sequentially. The cover letter prompt is built from the first two results.
//!
//! Upstream failures never abort the pipeline. Each call yields a
//! `GeneratedText`, and a failed call is carried forward as `Failed(reason)`.

use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};

use crate::generation::prompts::{
    COVER_LETTER_PROMPT_TEMPLATE, EXPERIENCE_PROMPT_TEMPLATE, SUMMARY_PROMPT_TEMPLATE,
};
use crate::llm_client::prompts::{fill_template, CAREER_ADVISOR_PERSONA, NO_PREAMBLE_INSTRUCTION};
use crate::llm_client::TextGenerator;
use crate::models::history::GenerationRecord;
use crate::models::resume::{GeneratedText, ResumeForm};

/// The three pieces of generated content for one form submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedContent {
    pub optimized_experience: GeneratedText,
    pub summary: GeneratedText,
    pub cover_letter: GeneratedText,
}

impl GeneratedContent {
    pub fn into_record(self, job_title: &str) -> GenerationRecord {
        GenerationRecord {
            job_title: job_title.to_string(),
            summary: self.summary,
            experience: self.optimized_experience,
            cover_letter: self.cover_letter,
            timestamp: Utc::now(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Individual generators
// ────────────────────────────────────────────────────────────────────────────

pub async fn generate_optimized_experience(
    generator: &dyn TextGenerator,
    job_title: &str,
    work_experience: &str,
) -> GeneratedText {
    let prompt = fill_template(
        EXPERIENCE_PROMPT_TEMPLATE,
        &[
            ("persona", CAREER_ADVISOR_PERSONA),
            ("no_preamble", NO_PREAMBLE_INSTRUCTION),
            ("job_title", job_title),
            ("work_experience", work_experience),
        ],
    );
    run(generator, "experience", &prompt).await
}

pub async fn generate_summary(
    generator: &dyn TextGenerator,
    job_title: &str,
    skills: &str,
    work_experience: &str,
    education: &str,
) -> GeneratedText {
    let prompt = fill_template(
        SUMMARY_PROMPT_TEMPLATE,
        &[
            ("job_title", job_title),
            ("skills", skills),
            ("work_experience", work_experience),
            ("education", education),
        ],
    );
    run(generator, "summary", &prompt).await
}

/// Failed context is left out of the prompt rather than passed along as
/// error text.
pub async fn generate_cover_letter(
    generator: &dyn TextGenerator,
    full_name: &str,
    job_title: &str,
    summary: &GeneratedText,
    optimized_experience: &GeneratedText,
) -> GeneratedText {
    let prompt = fill_template(
        COVER_LETTER_PROMPT_TEMPLATE,
        &[
            ("full_name", full_name),
            ("job_title", job_title),
            ("summary", summary.ok_or_empty()),
            ("experience", optimized_experience.ok_or_empty()),
        ],
    );
    run(generator, "cover letter", &prompt).await
}

async fn run(generator: &dyn TextGenerator, what: &str, prompt: &str) -> GeneratedText {
    match generator.complete(prompt).await {
        Ok(text) => {
            info!("Generated {what} ({} chars)", text.len());
            GeneratedText::Ok(text)
        }
        Err(e) => {
            warn!("Generation of {what} failed: {e}");
            GeneratedText::Failed(e.to_string())
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs the full generation pipeline for one validated form.
pub async fn generate_content(
    generator: &dyn TextGenerator,
    form: &ResumeForm,
) -> GeneratedContent {
    info!("Generating content for target title '{}'", form.job_title);

    let optimized_experience =
        generate_optimized_experience(generator, &form.job_title, &form.work_experience).await;
    let summary = generate_summary(
        generator,
        &form.job_title,
        &form.skills,
        &form.work_experience,
        &form.education,
    )
    .await;
    let cover_letter = generate_cover_letter(
        generator,
        &form.full_name,
        &form.job_title,
        &summary,
        &optimized_experience,
    )
    .await;

    GeneratedContent {
        optimized_experience,
        summary,
        cover_letter,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::llm_client::{LlmError, ModelInfo, TextGenerator};

    /// Answers every prompt from a fixed script and records what it was asked.
    /// A prompt containing `fail_on` gets an API error instead.
    pub struct ScriptedGenerator {
        pub prompts: Mutex<Vec<String>>,
        pub fail_on: Option<&'static str>,
    }

    impl ScriptedGenerator {
        pub fn new() -> Self {
            Self {
                prompts: Mutex::new(Vec::new()),
                fail_on: None,
            }
        }

        pub fn failing_on(marker: &'static str) -> Self {
            Self {
                fail_on: Some(marker),
                ..Self::new()
            }
        }

        pub fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            if let Some(marker) = self.fail_on {
                if prompt.contains(marker) {
                    return Err(LlmError::Api {
                        status: 503,
                        message: "over capacity".to_string(),
                    });
                }
            }
            let reply = if prompt.contains("rewrite and enhance") {
                "Optimized experience"
            } else if prompt.contains("resume summary") {
                "Generated summary"
            } else {
                "Generated cover letter"
            };
            Ok(reply.to_string())
        }

        async fn list_models(&self) -> Result<Vec<ModelInfo>, LlmError> {
            Ok(vec![ModelInfo {
                id: "scripted".to_string(),
                owned_by: None,
                active: Some(true),
                context_window: None,
            }])
        }
    }
}
