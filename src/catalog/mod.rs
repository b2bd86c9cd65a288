//! Static learning-content catalog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read-only data queried by the start-learning wizard: the sectioned
//! learning-path tree (embedded JSON, normalized at load), role-keyed
//! purpose tables, and the fixed activity lists. Nothing here is mutated
//! after load.

pub mod activities;
pub mod paths;
pub mod purposes;
pub mod types;

pub use activities::{career_skills, course_tool_topics, exam_prep_topics, quiz_questions};
pub use paths::sections;
pub use purposes::purposes_for;
pub use types::{
    ContentEntry, Purpose, PurposeKind, PurposePayload, QuizQuestion, ResourceLink, Role, Section,
    StudentScore, Topic, TopicCard,
};
