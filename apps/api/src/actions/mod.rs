//! Action Layer: the only entry points the HTTP surface and the session
//! orchestrator call into the pipelines. Each action delegates to exactly one
//! pipeline and adds no logic of its own.

pub mod handlers;

use crate::llm_client::LlmProvider;
use crate::pipeline::career_skills::CareerSkillsInput;
use crate::pipeline::{
    run, CareerSkills, CareerSuggestion, Chatbot, PipelineError, RoadmapGeneration, SkillsGap,
};
use crate::schema::career::CareerSuggestionResult;
use crate::schema::chatbot::{ChatbotInput, ChatbotReply};
use crate::schema::profile::StudentProfile;
use crate::schema::roadmap::{RoadmapInput, RoadmapResult};
use crate::schema::skills_gap::{SkillsGapInput, SkillsGapResult};

pub async fn get_career_suggestions(
    llm: &dyn LlmProvider,
    profile: &StudentProfile,
) -> Result<CareerSuggestionResult, PipelineError> {
    run::<CareerSuggestion>(llm, profile).await
}

pub async fn get_skills_for_career(
    llm: &dyn LlmProvider,
    career_name: &str,
) -> Result<Vec<String>, PipelineError> {
    let input = CareerSkillsInput {
        career_name: career_name.to_string(),
    };
    Ok(run::<CareerSkills>(llm, &input).await?.skills)
}

pub async fn get_skills_gap(
    llm: &dyn LlmProvider,
    input: &SkillsGapInput,
) -> Result<SkillsGapResult, PipelineError> {
    run::<SkillsGap>(llm, input).await
}

pub async fn get_personalized_roadmap(
    llm: &dyn LlmProvider,
    input: &RoadmapInput,
) -> Result<RoadmapResult, PipelineError> {
    run::<RoadmapGeneration>(llm, input).await
}

pub async fn get_chatbot_response(
    llm: &dyn LlmProvider,
    input: &ChatbotInput,
) -> Result<ChatbotReply, PipelineError> {
    run::<Chatbot>(llm, input).await
}
