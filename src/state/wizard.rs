//! Start-learning wizard: role, purpose, and content-stage state.
//!
//! DESIGN
//! ======
//! The stage is derived from which selections are set rather than stored,
//! so state and navigation cannot disagree. Selecting a purpose stores the
//! whole catalog value (payload included); the content stage is a total
//! dispatch over `(role, purpose.kind)` that bottoms out in a fallback view
//! instead of panicking.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use std::collections::HashSet;

use crate::catalog::{
    self, Purpose, PurposeKind, PurposePayload, ResourceLink, Role, Section, StudentScore, TopicCard,
};

/// Which wizard screen renders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WizardStage {
    #[default]
    RoleSelect,
    PurposeSelect,
    Content,
}

/// Wizard selections. Created fresh with its page and never persisted.
#[derive(Clone, Debug, Default)]
pub struct WizardState {
    pub role: Option<Role>,
    pub purpose: Option<Purpose>,
    /// Career-picker selection; cleared whenever the purpose changes.
    pub selected_skills: HashSet<String>,
    pub earned_rewards: Vec<String>,
}

impl WizardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage derived from the current selections.
    #[must_use]
    pub fn stage(&self) -> WizardStage {
        if self.purpose.is_some() {
            WizardStage::Content
        } else if self.role.is_some() {
            WizardStage::PurposeSelect
        } else {
            WizardStage::RoleSelect
        }
    }

    /// Choose a role; any previous purpose belongs to the old role and is dropped.
    pub fn select_role(&mut self, role: Role) {
        self.role = Some(role);
        self.purpose = None;
        self.selected_skills.clear();
    }

    /// Choose a purpose, entering the content stage fresh.
    pub fn select_purpose(&mut self, purpose: Purpose) {
        self.selected_skills.clear();
        self.purpose = Some(purpose);
    }

    /// Step one stage back, discarding the selections made past it.
    pub fn back(&mut self) {
        if self.purpose.is_some() {
            self.purpose = None;
            self.selected_skills.clear();
        } else {
            self.role = None;
        }
    }

    /// Replace the skill selection with the picker's finalized set.
    pub fn set_selected_skills(&mut self, skills: HashSet<String>) {
        self.selected_skills = skills;
    }

    /// Selected skills in the catalog's skill-list order, not toggle order.
    #[must_use]
    pub fn ordered_skills(&self) -> Vec<String> {
        catalog::career_skills()
            .iter()
            .filter(|skill| self.selected_skills.contains(**skill))
            .map(|skill| (*skill).to_owned())
            .collect()
    }

    /// Record an earned reward.
    pub fn award(&mut self, reward: String) {
        self.earned_rewards.push(reward);
    }

    /// View model for the content stage, or `None` before a purpose is set.
    #[must_use]
    pub fn content_view(&self) -> Option<ContentView> {
        self.purpose.as_ref().map(|purpose| dispatch_content(self.role, purpose))
    }
}

/// What the content stage renders.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentView {
    pub heading: String,
    pub description: String,
    pub body: ContentBody,
}

/// Body variants for the content stage.
#[derive(Clone, Debug, PartialEq)]
pub enum ContentBody {
    /// The full sectioned learning-path catalog.
    Paths(&'static [Section]),
    /// A fixed icon-card grid (exam prep, course tools).
    TopicCards(&'static [TopicCard]),
    /// The career skill picker with its downstream flowchart.
    SkillPicker,
    /// The gamified quiz.
    Quiz,
    /// Teaching resource links plus the embedded helper bot.
    Resources(Vec<ResourceLink>),
    /// Student performance rows.
    Scores(Vec<StudentScore>),
    /// Nothing to show; the description carries the prompt.
    Empty,
}

/// Total content dispatch. Combinations without a dedicated view get the
/// role-appropriate fallback; this function never panics.
#[must_use]
pub fn dispatch_content(role: Option<Role>, purpose: &Purpose) -> ContentView {
    match (role, purpose.kind) {
        (Some(Role::Student), PurposeKind::LearnSkill) => ContentView {
            heading: "Learn a New Skill".to_owned(),
            description: "Choose your learning path".to_owned(),
            body: ContentBody::Paths(catalog::sections()),
        },
        (Some(Role::Student), PurposeKind::ExamPrep) => ContentView {
            heading: purpose.title.to_owned(),
            description: "Prepare effectively for your upcoming exams".to_owned(),
            body: ContentBody::TopicCards(catalog::exam_prep_topics()),
        },
        (Some(Role::Student), PurposeKind::AdvanceCareer) => ContentView {
            heading: "Select Skills to Advance Your Career".to_owned(),
            description: "Choose the skills you want to gain:".to_owned(),
            body: ContentBody::SkillPicker,
        },
        (Some(Role::Student), PurposeKind::GamifiedLearning) => ContentView {
            heading: "Gamified Learning Experience".to_owned(),
            description: "Enjoy interactive and engaging learning with achievements.".to_owned(),
            body: ContentBody::Quiz,
        },
        (Some(Role::Teacher), PurposeKind::TeachingMethods) => ContentView {
            heading: "Enhance My Teaching Methods".to_owned(),
            description: "Use AI-driven tools to improve your teaching.".to_owned(),
            body: ContentBody::Resources(match &purpose.payload {
                PurposePayload::Resources(links) => links.clone(),
                _ => Vec::new(),
            }),
        },
        (Some(Role::Teacher), PurposeKind::CreateCourses) => ContentView {
            heading: purpose.title.to_owned(),
            description: "Create engaging courses for your students".to_owned(),
            body: ContentBody::TopicCards(catalog::course_tool_topics()),
        },
        (Some(Role::Teacher), PurposeKind::StudentPerformance) => ContentView {
            heading: "Monitor Student Performance".to_owned(),
            description: "Get insights into student learning behavior.".to_owned(),
            body: ContentBody::Scores(match &purpose.payload {
                PurposePayload::Scores(rows) => rows.clone(),
                _ => Vec::new(),
            }),
        },
        (Some(Role::Teacher), _) => fallback_view(purpose, "Select a teaching tool to begin"),
        _ => fallback_view(purpose, "Select a learning path to begin"),
    }
}

fn fallback_view(purpose: &Purpose, prompt: &str) -> ContentView {
    ContentView {
        heading: purpose.title.to_owned(),
        description: prompt.to_owned(),
        body: ContentBody::Empty,
    }
}
