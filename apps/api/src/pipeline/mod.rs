//! Prompt Pipelines: validated input → templated prompt → one LLM call → validated output.
//!
//! Every pipeline is a marker type implementing `PromptPipeline`; `run` is the
//! single executor they share. Input is re-checked against its schema before it
//! is rendered, and the model's response is never trusted until it passes the
//! output schema. No retries, no state between calls.

pub mod career_skills;
pub mod career_suggestion;
pub mod chatbot;
pub mod prompts;
pub mod roadmap;
pub mod skills_gap;
pub mod template;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, OUTPUT_SHAPE_INSTRUCTION};
use crate::llm_client::{parse_json_output, LlmError, LlmProvider};
use crate::schema::{validate, validate_typed, Schema, SchemaViolation};

pub use career_skills::CareerSkills;
pub use career_suggestion::CareerSuggestion;
pub use chatbot::Chatbot;
pub use roadmap::RoadmapGeneration;
pub use skills_gap::SkillsGap;

/// Configuration of one pipeline: its schemas and its template text.
pub trait PromptPipeline {
    type Input: Schema + Serialize + Sync;
    type Output: Schema + DeserializeOwned;

    const NAME: &'static str;
    /// Template with `{dotted.path}` placeholders over the input's wire form.
    const TEMPLATE: &'static str;
    const SYSTEM: &'static str = JSON_ONLY_SYSTEM;
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{pipeline}: input rejected: {source}")]
    InputRejected {
        pipeline: &'static str,
        #[source]
        source: SchemaViolation,
    },

    #[error("{pipeline}: generation failed: {source}")]
    Generation {
        pipeline: &'static str,
        #[source]
        source: LlmError,
    },

    #[error("{pipeline}: output rejected: {source}")]
    OutputRejected {
        pipeline: &'static str,
        #[source]
        source: SchemaViolation,
    },
}

/// Renders the template and appends the required output shape.
pub fn build_prompt<P: PromptPipeline>(wire_input: &Value) -> String {
    let body = template::render(P::TEMPLATE, wire_input);
    let shape = P::Output::shape();
    let notes = shape
        .field_notes()
        .into_iter()
        .map(|note| format!("- {note}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}\n\n{OUTPUT_SHAPE_INSTRUCTION}\n{:#}\n\nField notes:\n{notes}",
        body.trim_end(),
        shape.skeleton()
    )
}

/// Executes one pipeline call.
pub async fn run<P: PromptPipeline>(
    llm: &dyn LlmProvider,
    input: &P::Input,
) -> Result<P::Output, PipelineError> {
    let wire = validate_typed(input).map_err(|source| PipelineError::InputRejected {
        pipeline: P::NAME,
        source,
    })?;

    let prompt = build_prompt::<P>(&wire);
    info!(pipeline = P::NAME, prompt_chars = prompt.len(), "Running prompt pipeline");

    let text = llm
        .complete(&prompt, P::SYSTEM)
        .await
        .map_err(|source| PipelineError::Generation {
            pipeline: P::NAME,
            source,
        })?;

    let raw = parse_json_output(&text).map_err(|e| PipelineError::OutputRejected {
        pipeline: P::NAME,
        source: SchemaViolation::single("$", format!("response is not valid JSON: {e}")),
    })?;

    validate::<P::Output>(raw).map_err(|source| {
        warn!(pipeline = P::NAME, "Model output failed schema: {source}");
        PipelineError::OutputRejected {
            pipeline: P::NAME,
            source,
        }
    })
}
