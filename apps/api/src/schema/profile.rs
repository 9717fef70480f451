//! StudentProfile: the canonical input collected by the four-page form.
//!
//! Also the input of the career-suggestion pipeline, which receives it verbatim.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Field, FieldViolation, Schema, Shape};

label_enum!(
    /// Where the student lives.
    LocationType {
        Urban => "Urban",
        Rural => "Rural",
    }
);

label_enum!(
    EducationLevel {
        Class10 => "Class 10",
        Class12 => "Class 12",
        Diploma => "Diploma",
        Bachelors => "Bachelors Degree",
        Masters => "Masters Degree",
        Phd => "PhD",
    }
);

label_enum!(
    Stream {
        Science => "Science",
        Commerce => "Commerce",
        Humanities => "Arts/Humanities",
        Engineering => "Engineering",
        Medical => "Medical",
        Other => "Other",
    }
);

label_enum!(
    LearningStyle {
        Visual => "Visual",
        Auditory => "Auditory",
        Kinaesthetic => "Kinaesthetic",
        ReadingWriting => "Reading/Writing",
    }
);

label_enum!(
    /// Holland-style personality type.
    Personality {
        Analytical => "Analytical",
        Creative => "Creative",
        Social => "Social",
        Enterprising => "Enterprising",
        Conventional => "Conventional",
    }
);

label_enum!(
    WorkStyle {
        Office => "Office",
        Remote => "Remote",
        Hybrid => "Hybrid",
        Flexible => "Flexible",
    }
);

impl EducationLevel {
    /// Levels where the student has chosen an academic stream.
    pub fn requires_stream(self) -> bool {
        matches!(
            self,
            EducationLevel::Class12 | EducationLevel::Diploma | EducationLevel::Bachelors
        )
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::LABELS
            .iter()
            .position(|l| *l == label)
            .map(|i| ALL_LEVELS[i])
    }
}

const ALL_LEVELS: [EducationLevel; 6] = [
    EducationLevel::Class10,
    EducationLevel::Class12,
    EducationLevel::Diploma,
    EducationLevel::Bachelors,
    EducationLevel::Masters,
    EducationLevel::Phd,
];

/// Industries offered by the form. Free-text industries are accepted too.
pub const SUGGESTED_INDUSTRIES: &[&str] = &[
    "Information Technology",
    "Healthcare",
    "Finance",
    "Education",
    "Engineering",
    "Arts & Entertainment",
    "Manufacturing",
    "E-commerce & Retail",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub age: String,
    pub gender: String,
    pub location: String,
    pub location_type: LocationType,
    pub languages: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationBackground {
    #[serde(rename = "education")]
    pub level: EducationLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<Stream>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board: Option<String>,
    pub grades: String,
    pub learning_style: LearningStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsInterests {
    pub tech_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub hobbies: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AptitudeGoals {
    pub personality: Personality,
    pub logical_score: u8,
    pub verbal_score: u8,
    pub creativity_score: u8,
    pub short_term_goals: String,
    pub long_term_goals: String,
    pub work_style: WorkStyle,
    pub industries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub personal: PersonalInfo,
    pub education: EducationBackground,
    pub skills: SkillsInterests,
    pub goals: AptitudeGoals,
}

impl StudentProfile {
    /// Technical skills followed by soft skills, in entry order.
    pub fn combined_skills(&self) -> Vec<String> {
        self.skills
            .tech_skills
            .iter()
            .chain(self.skills.soft_skills.iter())
            .cloned()
            .collect()
    }
}

pub fn personal_shape() -> Shape {
    Shape::Object(vec![
        Field::required("age", Shape::text()).message("Please enter your age."),
        Field::required("gender", Shape::text()).message("Please select a gender."),
        Field::required("location", Shape::text()).message("Please enter your location."),
        Field::required("locationType", Shape::OneOf(LocationType::LABELS))
            .message("Please select a location type."),
        Field::required("languages", Shape::text_min(3))
            .message("Please list the languages you speak."),
    ])
}

pub fn education_shape() -> Shape {
    Shape::Object(vec![
        Field::required("education", Shape::OneOf(EducationLevel::LABELS))
            .message("Please select your education level."),
        Field::optional("stream", Shape::OneOf(Stream::LABELS)),
        Field::optional("board", Shape::text()),
        Field::required("grades", Shape::text()).message("Please enter your grades/CGPA."),
        Field::required("learningStyle", Shape::OneOf(LearningStyle::LABELS))
            .message("Please select your learning style."),
    ])
}

pub fn skills_shape() -> Shape {
    Shape::Object(vec![
        Field::required("techSkills", Shape::list_between(Shape::text(), 1, None))
            .message("Please list at least one technical skill."),
        Field::required("softSkills", Shape::list_between(Shape::text(), 1, None))
            .message("Please list at least one soft skill."),
        Field::required("hobbies", Shape::text_min(10)).message("Tell us more about your hobbies."),
    ])
}

pub fn goals_shape() -> Shape {
    let aptitude = || Shape::Integer { min: 0, max: 100 };
    Shape::Object(vec![
        Field::required("personality", Shape::OneOf(Personality::LABELS))
            .message("Please select a personality type."),
        Field::required("logicalScore", aptitude()),
        Field::required("verbalScore", aptitude()),
        Field::required("creativityScore", aptitude()),
        Field::required("shortTermGoals", Shape::text_min(10))
            .message("Describe your short-term goals."),
        Field::required("longTermGoals", Shape::text_min(10))
            .message("Describe your long-term goals."),
        Field::required("workStyle", Shape::OneOf(WorkStyle::LABELS))
            .message("Please select a preferred work style."),
        Field::required("industries", Shape::list_between(Shape::text(), 1, None))
            .message("Select at least one industry."),
    ])
}

/// The stream is required exactly when the chosen level implies one.
pub fn refine_education(education: &Value, path: &str, out: &mut Vec<FieldViolation>) {
    let level = education
        .get("education")
        .and_then(Value::as_str)
        .and_then(EducationLevel::from_label);
    let stream_given = education
        .get("stream")
        .and_then(Value::as_str)
        .is_some_and(|s| !s.trim().is_empty());

    if level.is_some_and(EducationLevel::requires_stream) && !stream_given {
        out.push(FieldViolation::new(
            format!("{path}.stream"),
            "Please select your academic stream.",
        ));
    }
}

impl Schema for StudentProfile {
    fn shape() -> Shape {
        Shape::Object(vec![
            Field::required("personal", personal_shape()),
            Field::required("education", education_shape()),
            Field::required("skills", skills_shape()),
            Field::required("goals", goals_shape()),
        ])
    }

    fn refine(value: &Value, out: &mut Vec<FieldViolation>) {
        if let Some(education) = value.get("education") {
            refine_education(education, "education", out);
        }
    }

    /// A stream sent alongside a level that has none is discarded.
    fn tidy(value: &mut Value) {
        let Some(education) = value.get_mut("education").and_then(Value::as_object_mut) else {
            return;
        };
        let keeps_stream = education
            .get("education")
            .and_then(Value::as_str)
            .and_then(EducationLevel::from_label)
            .is_some_and(EducationLevel::requires_stream);
        if !keeps_stream {
            education.remove("stream");
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn sample_profile() -> StudentProfile {
        StudentProfile {
            personal: PersonalInfo {
                age: "17".to_string(),
                gender: "Female".to_string(),
                location: "Nagpur".to_string(),
                location_type: LocationType::Urban,
                languages: "English, Hindi, Marathi".to_string(),
            },
            education: EducationBackground {
                level: EducationLevel::Class12,
                stream: Some(Stream::Science),
                board: Some("CBSE".to_string()),
                grades: "91%".to_string(),
                learning_style: LearningStyle::Visual,
            },
            skills: SkillsInterests {
                tech_skills: vec!["Python".to_string(), "Excel".to_string()],
                soft_skills: vec!["Public Speaking".to_string()],
                hobbies: "Chess, reading tech blogs, robotics club".to_string(),
            },
            goals: AptitudeGoals {
                personality: Personality::Analytical,
                logical_score: 82,
                verbal_score: 64,
                creativity_score: 55,
                short_term_goals: "Clear JEE and join a good engineering college".to_string(),
                long_term_goals: "Work on machine learning systems in healthcare".to_string(),
                work_style: WorkStyle::Hybrid,
                industries: vec!["Information Technology".to_string(), "Healthcare".to_string()],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::sample_profile;
    use super::*;
    use crate::schema::{check, validate, validate_typed};
    use serde_json::json;

    #[test]
    fn test_sample_profile_is_valid() {
        assert!(validate_typed(&sample_profile()).is_ok());
    }

    #[test]
    fn test_wire_names_match_client_contract() {
        let wire = serde_json::to_value(sample_profile()).unwrap();
        assert_eq!(wire["personal"]["locationType"], "Urban");
        assert_eq!(wire["education"]["education"], "Class 12");
        assert_eq!(wire["education"]["learningStyle"], "Visual");
        assert_eq!(wire["goals"]["logicalScore"], 82);
    }

    #[test]
    fn test_stream_required_for_class_12() {
        let mut profile = sample_profile();
        profile.education.stream = None;
        let err = validate_typed(&profile).unwrap_err();
        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].path, "education.stream");
    }

    #[test]
    fn test_stream_not_required_for_class_10() {
        let mut profile = sample_profile();
        profile.education.level = EducationLevel::Class10;
        profile.education.stream = None;
        assert!(validate_typed(&profile).is_ok());
    }

    #[test]
    fn test_stream_dropped_for_level_without_one() {
        let mut wire = serde_json::to_value(sample_profile()).unwrap();
        wire["education"]["education"] = json!("Class 10");
        let profile: StudentProfile = validate(wire).unwrap();
        assert_eq!(profile.education.level, EducationLevel::Class10);
        assert_eq!(profile.education.stream, None);

        let mut typed = sample_profile();
        typed.education.level = EducationLevel::Class10;
        let wire = validate_typed(&typed).unwrap();
        assert!(wire["education"].get("stream").is_none());
    }

    #[test]
    fn test_blank_stream_and_board_deserialize_as_absent() {
        let mut wire = serde_json::to_value(sample_profile()).unwrap();
        wire["education"]["education"] = json!("Masters Degree");
        wire["education"]["stream"] = json!("");
        wire["education"]["board"] = json!("");
        let profile: StudentProfile = validate(wire).unwrap();
        assert_eq!(profile.education.stream, None);
        assert_eq!(profile.education.board, None);
    }

    #[test]
    fn test_empty_draft_reports_every_section() {
        let wire = json!({
            "personal": {"age": "", "gender": "", "location": "", "locationType": "", "languages": ""},
            "education": {"education": "", "grades": "", "learningStyle": ""},
            "skills": {"techSkills": [], "softSkills": [], "hobbies": ""},
            "goals": {
                "personality": "", "logicalScore": 50, "verbalScore": 50, "creativityScore": 50,
                "shortTermGoals": "", "longTermGoals": "", "workStyle": "", "industries": []
            }
        });
        let err = check::<StudentProfile>(&wire).unwrap_err();
        // 5 personal + 3 education + 3 skills + 5 goals
        assert_eq!(err.violations.len(), 16);
        assert!(err
            .violations
            .iter()
            .any(|v| v.path == "skills.hobbies" && v.message == "Tell us more about your hobbies."));
    }

    #[test]
    fn test_aptitude_out_of_range_rejected() {
        let mut wire = serde_json::to_value(sample_profile()).unwrap();
        wire["goals"]["verbalScore"] = json!(101);
        let err = check::<StudentProfile>(&wire).unwrap_err();
        assert_eq!(err.violations[0].path, "goals.verbalScore");
    }

    #[test]
    fn test_education_level_labels_round_trip() {
        for label in EducationLevel::LABELS {
            let level = EducationLevel::from_label(label).unwrap();
            assert_eq!(level.as_str(), *label);
        }
        assert!(EducationLevel::from_label("Bachelor's Degree").is_none());
    }

    #[test]
    fn test_combined_skills_keeps_entry_order() {
        assert_eq!(
            sample_profile().combined_skills(),
            vec!["Python", "Excel", "Public Speaking"]
        );
    }
}
