//! Profile Form Controller: the four-page wizard over one `ProfileDraft`.
//!
//! Personal → Education → Skills → Goals. A page is validated only when the
//! student asks to move forward; going back never validates. The state is a
//! plain value owned by the session, so transitions are testable on their own.

pub mod draft;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::schema::profile::{
    education_shape, goals_shape, personal_shape, refine_education, skills_shape, EducationLevel,
    StudentProfile,
};
use crate::schema::{validate, SchemaViolation, Shape};

pub use draft::ProfileDraft;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormPage {
    Personal,
    Education,
    Skills,
    Goals,
}

impl FormPage {
    pub const COUNT: usize = 4;

    pub fn index(self) -> usize {
        match self {
            FormPage::Personal => 0,
            FormPage::Education => 1,
            FormPage::Skills => 2,
            FormPage::Goals => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FormPage::Personal => "Personal Information",
            FormPage::Education => "Education Background",
            FormPage::Skills => "Skills & Interests",
            FormPage::Goals => "Aptitude & Goals",
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            FormPage::Personal => Some(FormPage::Education),
            FormPage::Education => Some(FormPage::Skills),
            FormPage::Skills => Some(FormPage::Goals),
            FormPage::Goals => None,
        }
    }

    fn previous(self) -> Self {
        match self {
            FormPage::Personal | FormPage::Education => FormPage::Personal,
            FormPage::Skills => FormPage::Education,
            FormPage::Goals => FormPage::Skills,
        }
    }

    /// Key of this page's section in the profile wire form.
    fn section(self) -> &'static str {
        match self {
            FormPage::Personal => "personal",
            FormPage::Education => "education",
            FormPage::Skills => "skills",
            FormPage::Goals => "goals",
        }
    }

    fn shape(self) -> Shape {
        match self {
            FormPage::Personal => personal_shape(),
            FormPage::Education => education_shape(),
            FormPage::Skills => skills_shape(),
            FormPage::Goals => goals_shape(),
        }
    }
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error("{0}")]
    Invalid(#[from] SchemaViolation),

    #[error("already on the last page")]
    NoNextPage,

    #[error("the profile can only be submitted from the last page")]
    NotOnLastPage,

    #[error("invalid draft update: {0}")]
    BadPatch(String),
}

/// Which skill list an entry edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillList {
    Technical,
    Soft,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileFormController {
    page: FormPage,
    draft: ProfileDraft,
}

impl Default for ProfileFormController {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileFormController {
    pub fn new() -> Self {
        Self {
            page: FormPage::Personal,
            draft: ProfileDraft::default(),
        }
    }

    pub fn page(&self) -> FormPage {
        self.page
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    /// Percentage of the wizard reached, counting the current page.
    pub fn progress(&self) -> f32 {
        (self.page.index() + 1) as f32 / FormPage::COUNT as f32 * 100.0
    }

    /// The stream field exists only for levels that imply a stream choice.
    pub fn stream_visible(&self) -> bool {
        EducationLevel::from_label(&self.draft.education)
            .is_some_and(EducationLevel::requires_stream)
    }

    /// Applies a partial update. A hidden stream is cleared on the spot.
    pub fn apply_patch(&mut self, patch: &Map<String, Value>) -> Result<(), FormError> {
        self.draft = self.draft.merged(patch).map_err(FormError::BadPatch)?;
        self.sync_stream();
        Ok(())
    }

    pub fn add_skill(&mut self, list: SkillList, skill: &str) -> bool {
        draft::add_entry(self.skills_mut(list), skill)
    }

    pub fn remove_skill(&mut self, list: SkillList, skill: &str) {
        let skill = skill.trim();
        self.skills_mut(list).retain(|s| s != skill);
    }

    /// Selects the industry if absent, deselects it otherwise.
    pub fn toggle_industry(&mut self, industry: &str) {
        let industry = industry.trim();
        let industries = &mut self.draft.industries;
        if let Some(pos) = industries.iter().position(|i| i == industry) {
            industries.remove(pos);
        } else {
            draft::add_entry(industries, industry);
        }
    }

    fn skills_mut(&mut self, list: SkillList) -> &mut Vec<String> {
        match list {
            SkillList::Technical => &mut self.draft.tech_skills,
            SkillList::Soft => &mut self.draft.soft_skills,
        }
    }

    fn sync_stream(&mut self) {
        if !self.stream_visible() {
            self.draft.stream.clear();
        }
    }

    fn wire(&self) -> Value {
        self.draft.to_wire(self.stream_visible())
    }

    /// Validates one page's fields against its section of the profile schema.
    pub fn validate_page(&self, page: FormPage) -> Result<(), SchemaViolation> {
        let wire = self.wire();
        let section = page.section();
        let value = &wire[section];

        let mut violations = Vec::new();
        page.shape().check(value, section, &mut violations);
        if page == FormPage::Education {
            refine_education(value, section, &mut violations);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaViolation { violations })
        }
    }

    pub fn next(&mut self) -> Result<FormPage, FormError> {
        let next = self.page.next().ok_or(FormError::NoNextPage)?;
        self.validate_page(self.page)?;
        self.page = next;
        Ok(next)
    }

    pub fn back(&mut self) -> FormPage {
        self.page = self.page.previous();
        self.page
    }

    /// Produces the immutable profile. Only allowed from the last page.
    pub fn submit(&self) -> Result<StudentProfile, FormError> {
        if self.page != FormPage::Goals {
            return Err(FormError::NotOnLastPage);
        }
        Ok(validate::<StudentProfile>(self.wire())?)
    }
}
