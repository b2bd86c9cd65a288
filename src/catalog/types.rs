//! Canonical data model for the static learning-content catalog.
//!
//! DESIGN
//! ======
//! The shipped catalog asset mixes several topic encodings that accumulated
//! over time (bare strings, objects keyed `title` or `name`, a single `url`
//! versus a `resources` list). Loading normalizes everything into these
//! types once, so rendering and dispatch code never branch on shape.

use serde::Deserialize;

/// Who the learner said they are on the first wizard stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Student,
    Teacher,
}

impl Role {
    /// Display label for role-selection cards.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Teacher => "Teacher",
        }
    }
}

/// Discriminant for the purpose-specific content a selection unlocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PurposeKind {
    LearnSkill,
    ExamPrep,
    AdvanceCareer,
    GamifiedLearning,
    TeachingMethods,
    CreateCourses,
    StudentPerformance,
}

/// A selectable reason for joining, shown on the purpose-selection stage.
///
/// Selecting one stores the whole value in the wizard, payload included, so
/// the content stage reads its data from the selection rather than looking
/// anything up again.
#[derive(Clone, Debug, PartialEq)]
pub struct Purpose {
    pub kind: PurposeKind,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub payload: PurposePayload,
}

/// Extra data a purpose carries into its content view.
#[derive(Clone, Debug, PartialEq)]
pub enum PurposePayload {
    None,
    /// Marks the gamified purpose; rewards start empty and are earned in the quiz.
    Rewards,
    Resources(Vec<ResourceLink>),
    Scores(Vec<StudentScore>),
}

/// A named external reference attached to topics, entries, and purposes.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ResourceLink {
    pub name: String,
    pub url: String,
}

/// One student row in the performance payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentScore {
    pub name: &'static str,
    pub score: u32,
}

/// A top-level catalog grouping ("Fundamentals", "Security", ...).
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub title: String,
    pub entries: Vec<ContentEntry>,
}

/// One keyed content block inside a section ("HTML", "CSS", ...).
#[derive(Clone, Debug, PartialEq)]
pub struct ContentEntry {
    pub key: String,
    pub description: String,
    /// Reading list shown with the entry card.
    pub resources: Vec<ResourceLink>,
    pub topics: Vec<Topic>,
}

/// A single teachable unit, normalized from the asset's mixed encodings.
#[derive(Clone, Debug, PartialEq)]
pub struct Topic {
    pub title: String,
    pub description: Option<String>,
    /// External references; a raw single `url` becomes one link named after the topic.
    pub links: Vec<ResourceLink>,
}

/// Icon + title card for the fixed exam-prep and course-tool grids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TopicCard {
    pub icon: &'static str,
    pub title: &'static str,
}

/// One multiple-choice question in the gamified quiz.
#[derive(Clone, Copy, Debug)]
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub answer: &'static str,
}
