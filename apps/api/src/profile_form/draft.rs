//! The in-progress profile edited across the four form pages.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

const DEFAULT_APTITUDE: u8 = 50;

/// Flat, partially-filled profile. Empty strings mean "not answered yet".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileDraft {
    // Personal
    pub age: String,
    pub gender: String,
    pub location: String,
    pub location_type: String,
    pub languages: String,
    // Education
    pub education: String,
    pub stream: String,
    pub board: String,
    pub grades: String,
    pub learning_style: String,
    // Skills
    pub tech_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub hobbies: String,
    // Goals
    pub personality: String,
    pub logical_score: u8,
    pub verbal_score: u8,
    pub creativity_score: u8,
    pub short_term_goals: String,
    pub long_term_goals: String,
    pub work_style: String,
    pub industries: Vec<String>,
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self {
            age: String::new(),
            gender: String::new(),
            location: String::new(),
            location_type: String::new(),
            languages: String::new(),
            education: String::new(),
            stream: String::new(),
            board: String::new(),
            grades: String::new(),
            learning_style: String::new(),
            tech_skills: Vec::new(),
            soft_skills: Vec::new(),
            hobbies: String::new(),
            personality: String::new(),
            logical_score: DEFAULT_APTITUDE,
            verbal_score: DEFAULT_APTITUDE,
            creativity_score: DEFAULT_APTITUDE,
            short_term_goals: String::new(),
            long_term_goals: String::new(),
            work_style: String::new(),
            industries: Vec::new(),
        }
    }
}

impl ProfileDraft {
    /// Sectioned wire form matching `StudentProfile`. The stream is left out
    /// unless `include_stream` is set.
    pub fn to_wire(&self, include_stream: bool) -> Value {
        let mut education = json!({
            "education": self.education,
            "board": self.board,
            "grades": self.grades,
            "learningStyle": self.learning_style,
        });
        if include_stream {
            education["stream"] = json!(self.stream);
        }

        json!({
            "personal": {
                "age": self.age,
                "gender": self.gender,
                "location": self.location,
                "locationType": self.location_type,
                "languages": self.languages,
            },
            "education": education,
            "skills": {
                "techSkills": self.tech_skills,
                "softSkills": self.soft_skills,
                "hobbies": self.hobbies,
            },
            "goals": {
                "personality": self.personality,
                "logicalScore": self.logical_score,
                "verbalScore": self.verbal_score,
                "creativityScore": self.creativity_score,
                "shortTermGoals": self.short_term_goals,
                "longTermGoals": self.long_term_goals,
                "workStyle": self.work_style,
                "industries": self.industries,
            }
        })
    }

    /// Merges camelCase fields from `patch` into the draft.
    /// Unknown keys and wrongly typed values are rejected without changing anything.
    pub fn merged(&self, patch: &Map<String, Value>) -> Result<Self, String> {
        let mut current = match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => return Err("draft could not be serialized".to_string()),
        };
        for (key, value) in patch {
            if !current.contains_key(key) {
                return Err(format!("unknown draft field '{key}'"));
            }
            current.insert(key.clone(), value.clone());
        }
        let mut draft: Self =
            serde_json::from_value(Value::Object(current)).map_err(|e| e.to_string())?;
        draft.tech_skills = normalize_entries(draft.tech_skills);
        draft.soft_skills = normalize_entries(draft.soft_skills);
        draft.industries = normalize_entries(draft.industries);
        Ok(draft)
    }
}

/// Trims entries, dropping blanks and repeats. First occurrence wins.
pub fn normalize_entries(entries: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(entries.len());
    for entry in entries {
        let entry = entry.trim();
        if !entry.is_empty() && !out.iter().any(|e| e == entry) {
            out.push(entry.to_string());
        }
    }
    out
}

/// Appends a trimmed entry unless it is blank or already present.
pub fn add_entry(entries: &mut Vec<String>, entry: &str) -> bool {
    let entry = entry.trim();
    if entry.is_empty() || entries.iter().any(|e| e == entry) {
        return false;
    }
    entries.push(entry.to_string());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_aptitude_is_fifty() {
        let draft = ProfileDraft::default();
        assert_eq!(
            (draft.logical_score, draft.verbal_score, draft.creativity_score),
            (50, 50, 50)
        );
        assert!(draft.tech_skills.is_empty());
    }

    #[test]
    fn test_merge_updates_only_named_fields() {
        let patch = json!({"age": "16", "techSkills": [" Python ", "", "Python", "C"]});
        let draft = ProfileDraft::default()
            .merged(patch.as_object().unwrap())
            .unwrap();
        assert_eq!(draft.age, "16");
        assert_eq!(draft.tech_skills, vec!["Python", "C"]);
        assert_eq!(draft.logical_score, 50);
    }

    #[test]
    fn test_merge_rejects_unknown_and_mistyped_fields() {
        let draft = ProfileDraft::default();
        assert!(draft
            .merged(json!({"favouriteColour": "blue"}).as_object().unwrap())
            .is_err());
        assert!(draft
            .merged(json!({"logicalScore": 300}).as_object().unwrap())
            .is_err());
    }

    #[test]
    fn test_add_entry_keeps_insertion_order() {
        let mut skills = Vec::new();
        assert!(add_entry(&mut skills, "Figma"));
        assert!(add_entry(&mut skills, " Python "));
        assert!(!add_entry(&mut skills, "Figma"));
        assert!(!add_entry(&mut skills, "   "));
        assert_eq!(skills, vec!["Figma", "Python"]);
    }

    #[test]
    fn test_wire_form_omits_hidden_stream() {
        let mut draft = ProfileDraft::default();
        draft.stream = "Science".to_string();
        assert!(draft.to_wire(false)["education"].get("stream").is_none());
        assert_eq!(draft.to_wire(true)["education"]["stream"], "Science");
    }
}
