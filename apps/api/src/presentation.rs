//! View models for rendered pipeline results.
//!
//! Raw results are kept untouched in the session; these views apply the
//! display rules (empty states, link detection, missing-vs-overlap precedence).

use serde::Serialize;

use crate::schema::roadmap::RoadmapResult;
use crate::schema::skills_gap::SkillsGapResult;

pub const NO_MISSING_SKILLS: &str = "No missing skills identified. Great job!";
pub const NO_OVERLAP_SKILLS: &str = "No overlapping skills found.";

const USER_LEVEL_HAVE: u8 = 100;
const USER_LEVEL_MISSING: u8 = 20;
const REQUIRED_LEVEL: u8 = 100;
/// The coverage chart needs more points than this to be worth drawing.
const MIN_CHART_POINTS: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillBar {
    pub skill: String,
    pub user: u8,
    pub required: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsGapView {
    pub career_name: String,
    pub missing_skills: Vec<String>,
    pub overlap_skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_empty_message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlap_empty_message: Option<&'static str>,
    pub chart: Vec<SkillBar>,
    pub chart_visible: bool,
    pub summary: String,
}

/// A skill reported as both missing and overlapping is shown as missing only.
pub fn skills_gap_view(career_name: &str, gap: &SkillsGapResult) -> SkillsGapView {
    let missing = dedup(&gap.missing_skills);
    let overlap: Vec<String> = dedup(&gap.overlap_skills)
        .into_iter()
        .filter(|s| !missing.contains(s))
        .collect();

    let chart: Vec<SkillBar> = missing
        .iter()
        .map(|skill| (skill, USER_LEVEL_MISSING))
        .chain(overlap.iter().map(|skill| (skill, USER_LEVEL_HAVE)))
        .map(|(skill, user)| SkillBar {
            skill: skill.clone(),
            user,
            required: REQUIRED_LEVEL,
        })
        .collect();

    SkillsGapView {
        career_name: career_name.to_string(),
        missing_empty_message: missing.is_empty().then_some(NO_MISSING_SKILLS),
        overlap_empty_message: overlap.is_empty().then_some(NO_OVERLAP_SKILLS),
        missing_skills: missing,
        overlap_skills: overlap,
        chart_visible: chart.len() > MIN_CHART_POINTS,
        chart,
        summary: gap.analysis_summary.clone(),
    }
}

fn dedup(skills: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(skills.len());
    for skill in skills {
        if !out.contains(skill) {
            out.push(skill.clone());
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Resource {
    Link(String),
    Text(String),
}

impl Resource {
    /// Anything starting with `http` is rendered as a link.
    pub fn classify(resource: &str) -> Self {
        if resource.starts_with("http") {
            Resource::Link(resource.to_string())
        } else {
            Resource::Text(resource.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapStepView {
    pub number: usize,
    pub title: String,
    pub description: String,
    pub resources: Vec<Resource>,
    pub estimated_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapView {
    pub career_name: String,
    pub steps: Vec<RoadmapStepView>,
}

/// Steps keep the order the pipeline returned them in.
pub fn roadmap_view(career_name: &str, roadmap: &RoadmapResult) -> RoadmapView {
    RoadmapView {
        career_name: career_name.to_string(),
        steps: roadmap
            .roadmap
            .iter()
            .enumerate()
            .map(|(i, step)| RoadmapStepView {
                number: i + 1,
                title: step.title.clone(),
                description: step.description.clone(),
                resources: step.resources.iter().map(|r| Resource::classify(r)).collect(),
                estimated_time: step.estimated_time.clone(),
            })
            .collect(),
    }
}
