//! Session Orchestrator: one student's journey through the four pipelines.
//!
//! Profile → Careers → Gap → Roadmap. Each step is entered only after the
//! pipeline call that produces it succeeds; on failure the journey stays where
//! it was so the same step can be retried. Restart is the only way back.

pub mod handlers;
pub mod store;

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::actions;
use crate::errors::{AppError, GENERATION_FAILURE_MESSAGE};
use crate::llm_client::LlmProvider;
use crate::pipeline::PipelineError;
use crate::presentation::{roadmap_view, skills_gap_view, RoadmapView, SkillsGapView};
use crate::profile_form::{FormError, FormPage, ProfileDraft, ProfileFormController};
use crate::schema::career::CareerSuggestionResult;
use crate::schema::profile::{StudentProfile, SUGGESTED_INDUSTRIES};
use crate::schema::roadmap::{Demographics, RoadmapInput, RoadmapResult, RoadmapStudentProfile};
use crate::schema::skills_gap::{SkillsGapInput, SkillsGapResult};
use crate::schema::SchemaViolation;

pub use store::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JourneyStep {
    Profile,
    Careers,
    Gap,
    Roadmap,
}

impl fmt::Display for JourneyStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            JourneyStep::Profile => "profile",
            JourneyStep::Careers => "careers",
            JourneyStep::Gap => "gap",
            JourneyStep::Roadmap => "roadmap",
        })
    }
}

/// Results held at each step. Later steps carry everything earlier ones did.
#[derive(Debug, Clone, PartialEq)]
enum Journey {
    Profile,
    Careers {
        profile: StudentProfile,
        suggestions: CareerSuggestionResult,
    },
    Gap {
        profile: StudentProfile,
        suggestions: CareerSuggestionResult,
        career: String,
        gap: SkillsGapResult,
    },
    Roadmap {
        profile: StudentProfile,
        suggestions: CareerSuggestionResult,
        career: String,
        gap: SkillsGapResult,
        roadmap: RoadmapResult,
    },
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("cannot {action} while the journey is at the {step} step")]
    InvalidTransition {
        action: &'static str,
        step: JourneyStep,
    },

    #[error("'{0}' is not one of the suggested careers")]
    UnknownCareer(String),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Generation(#[from] PipelineError),
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            // Every pipeline failure surfaces the same way, whatever its cause.
            SessionError::Generation(e) => AppError::Generation(e.to_string()),
            SessionError::Form(FormError::Invalid(violation)) => AppError::Validation(violation),
            SessionError::Form(FormError::BadPatch(message)) => {
                AppError::Validation(SchemaViolation::single("$", message))
            }
            SessionError::Form(e) => AppError::Conflict(e.to_string()),
            SessionError::UnknownCareer(career) => AppError::Validation(SchemaViolation::single(
                "career",
                format!("'{career}' is not one of the suggested careers"),
            )),
            e @ SessionError::InvalidTransition { .. } => AppError::Conflict(e.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    created_at: DateTime<Utc>,
    form: ProfileFormController,
    journey: Journey,
    last_error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            form: ProfileFormController::new(),
            journey: Journey::Profile,
            last_error: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn step(&self) -> JourneyStep {
        match self.journey {
            Journey::Profile => JourneyStep::Profile,
            Journey::Careers { .. } => JourneyStep::Careers,
            Journey::Gap { .. } => JourneyStep::Gap,
            Journey::Roadmap { .. } => JourneyStep::Roadmap,
        }
    }

    pub fn profile(&self) -> Option<&StudentProfile> {
        match &self.journey {
            Journey::Profile => None,
            Journey::Careers { profile, .. }
            | Journey::Gap { profile, .. }
            | Journey::Roadmap { profile, .. } => Some(profile),
        }
    }

    pub fn career_suggestions(&self) -> Option<&CareerSuggestionResult> {
        match &self.journey {
            Journey::Profile => None,
            Journey::Careers { suggestions, .. }
            | Journey::Gap { suggestions, .. }
            | Journey::Roadmap { suggestions, .. } => Some(suggestions),
        }
    }

    pub fn selected_career(&self) -> Option<&str> {
        match &self.journey {
            Journey::Gap { career, .. } | Journey::Roadmap { career, .. } => Some(career),
            _ => None,
        }
    }

    pub fn skills_gap(&self) -> Option<&SkillsGapResult> {
        match &self.journey {
            Journey::Gap { gap, .. } | Journey::Roadmap { gap, .. } => Some(gap),
            _ => None,
        }
    }

    pub fn roadmap(&self) -> Option<&RoadmapResult> {
        match &self.journey {
            Journey::Roadmap { roadmap, .. } => Some(roadmap),
            _ => None,
        }
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn form(&self) -> &ProfileFormController {
        &self.form
    }

    /// The draft is editable only until it has been submitted.
    pub fn form_mut(&mut self) -> Result<&mut ProfileFormController, SessionError> {
        self.expect_step(JourneyStep::Profile, "edit the profile form")?;
        Ok(&mut self.form)
    }

    /// Submits the completed form and asks for career suggestions.
    pub async fn submit_profile(&mut self, llm: &dyn LlmProvider) -> Result<(), SessionError> {
        self.expect_step(JourneyStep::Profile, "submit the profile")?;
        let profile = self.form.submit()?;

        match actions::get_career_suggestions(llm, &profile).await {
            Ok(suggestions) => {
                info!(
                    session = %self.id,
                    count = suggestions.suggested_careers.len(),
                    "Career suggestions ready"
                );
                self.last_error = None;
                self.journey = Journey::Careers {
                    profile,
                    suggestions,
                };
                Ok(())
            }
            Err(e) => Err(self.generation_failed(e)),
        }
    }

    /// Fetches the skills the career needs, then analyses the gap against the
    /// student's own skills.
    pub async fn select_career(
        &mut self,
        llm: &dyn LlmProvider,
        career: &str,
    ) -> Result<(), SessionError> {
        let Journey::Careers {
            profile,
            suggestions,
        } = &self.journey
        else {
            return Err(self.invalid("select a career"));
        };
        if !suggestions.contains(career) {
            return Err(SessionError::UnknownCareer(career.to_string()));
        }

        let outcome = async {
            let career_path_skills = actions::get_skills_for_career(llm, career).await?;
            let input = SkillsGapInput {
                student_skills: profile.combined_skills(),
                career_path_skills,
                career_path_name: career.to_string(),
            };
            actions::get_skills_gap(llm, &input).await
        }
        .await;

        match outcome {
            Ok(gap) => {
                info!(session = %self.id, career, "Skills gap ready");
                self.journey = Journey::Gap {
                    profile: profile.clone(),
                    suggestions: suggestions.clone(),
                    career: career.to_string(),
                    gap,
                };
                self.last_error = None;
                Ok(())
            }
            Err(e) => Err(self.generation_failed(e)),
        }
    }

    pub async fn generate_roadmap(&mut self, llm: &dyn LlmProvider) -> Result<(), SessionError> {
        let Journey::Gap {
            profile,
            suggestions,
            career,
            gap,
        } = &self.journey
        else {
            return Err(self.invalid("generate a roadmap"));
        };

        let input = roadmap_input(profile, career, gap);
        match actions::get_personalized_roadmap(llm, &input).await {
            Ok(roadmap) => {
                info!(
                    session = %self.id,
                    steps = roadmap.roadmap.len(),
                    "Roadmap ready"
                );
                self.journey = Journey::Roadmap {
                    profile: profile.clone(),
                    suggestions: suggestions.clone(),
                    career: career.clone(),
                    gap: gap.clone(),
                    roadmap,
                };
                self.last_error = None;
                Ok(())
            }
            Err(e) => Err(self.generation_failed(e)),
        }
    }

    /// Discards every result and starts over with an empty draft.
    pub fn restart(&mut self) {
        info!(session = %self.id, from = %self.step(), "Journey restarted");
        self.form = ProfileFormController::new();
        self.journey = Journey::Profile;
        self.last_error = None;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let career = self.selected_career().unwrap_or_default();
        SessionSnapshot {
            id: self.id,
            created_at: self.created_at,
            step: self.step(),
            pending: false,
            form: FormSnapshot {
                page: self.form.page(),
                page_title: self.form.page().title(),
                progress: self.form.progress(),
                stream_visible: self.form.stream_visible(),
                draft: self.form.draft().clone(),
                suggested_industries: SUGGESTED_INDUSTRIES,
            },
            profile: self.profile().cloned(),
            career_suggestions: self.career_suggestions().cloned(),
            selected_career: self.selected_career().map(str::to_string),
            skills_gap: self.skills_gap().map(|gap| skills_gap_view(career, gap)),
            roadmap: self.roadmap().map(|roadmap| roadmap_view(career, roadmap)),
            last_error: self.last_error.clone(),
        }
    }

    fn expect_step(&self, step: JourneyStep, action: &'static str) -> Result<(), SessionError> {
        if self.step() == step {
            Ok(())
        } else {
            Err(self.invalid(action))
        }
    }

    fn invalid(&self, action: &'static str) -> SessionError {
        SessionError::InvalidTransition {
            action,
            step: self.step(),
        }
    }

    fn generation_failed(&mut self, err: PipelineError) -> SessionError {
        warn!(session = %self.id, step = %self.step(), error = %err, "Journey step failed");
        self.last_error = Some(GENERATION_FAILURE_MESSAGE.to_string());
        SessionError::Generation(err)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub page: FormPage,
    pub page_title: &'static str,
    pub progress: f32,
    pub stream_visible: bool,
    pub draft: ProfileDraft,
    pub suggested_industries: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub step: JourneyStep,
    pub pending: bool,
    pub form: FormSnapshot,
    pub profile: Option<StudentProfile>,
    pub career_suggestions: Option<CareerSuggestionResult>,
    pub selected_career: Option<String>,
    pub skills_gap: Option<SkillsGapView>,
    pub roadmap: Option<RoadmapView>,
    pub last_error: Option<String>,
}

/// Restates the profile, the selected career and its missing skills in the
/// roadmap pipeline's input shape.
pub fn roadmap_input(profile: &StudentProfile, career: &str, gap: &SkillsGapResult) -> RoadmapInput {
    let personal = &profile.personal;
    let goals = &profile.goals;

    let assessment_results = BTreeMap::from([
        ("personality".to_string(), json!(goals.personality.as_str())),
        ("logicalScore".to_string(), json!(goals.logical_score)),
        ("verbalScore".to_string(), json!(goals.verbal_score)),
        ("creativityScore".to_string(), json!(goals.creativity_score)),
    ]);

    RoadmapInput {
        student_profile: RoadmapStudentProfile {
            demographics: Demographics {
                age: personal.age.trim().parse::<u32>().ok().filter(|age| *age <= 150),
                location: format!("{} ({})", personal.location, personal.location_type),
                education_level: profile.education.level.to_string(),
            },
            interests: profile
                .skills
                .hobbies
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            assessment_results,
            skills: profile.combined_skills(),
        },
        career_suggestions: vec![career.to_string()],
        skill_gaps: BTreeMap::from([(career.to_string(), gap.missing_skills.clone())]),
    }
}
