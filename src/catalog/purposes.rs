//! Role-keyed purpose tables for the start-learning wizard.

#[cfg(test)]
#[path = "purposes_test.rs"]
mod purposes_test;

use std::sync::LazyLock;

use super::types::{Purpose, PurposeKind, PurposePayload, ResourceLink, Role, StudentScore};

static STUDENT_PURPOSES: LazyLock<Vec<Purpose>> = LazyLock::new(|| {
    vec![
        Purpose {
            kind: PurposeKind::LearnSkill,
            icon: "📚",
            title: "Learn a New Skill",
            description: "Gain knowledge in a specific subject or field.",
            payload: PurposePayload::None,
        },
        Purpose {
            kind: PurposeKind::ExamPrep,
            icon: "🎯",
            title: "Prepare for an Exam",
            description: "Study for school, university, or certification exams.",
            payload: PurposePayload::None,
        },
        Purpose {
            kind: PurposeKind::AdvanceCareer,
            icon: "🚀",
            title: "Advance My Career",
            description: "Improve skills for job opportunities or promotions.",
            payload: PurposePayload::None,
        },
        Purpose {
            kind: PurposeKind::GamifiedLearning,
            icon: "🏆",
            title: "Gamified Learning Experience",
            description: "Enjoy interactive and engaging learning with achievements.",
            payload: PurposePayload::Rewards,
        },
    ]
});

static TEACHER_PURPOSES: LazyLock<Vec<Purpose>> = LazyLock::new(|| {
    vec![
        Purpose {
            kind: PurposeKind::TeachingMethods,
            icon: "🏫",
            title: "Enhance My Teaching Methods",
            description: "Use AI-driven tools to improve my teaching.",
            payload: PurposePayload::Resources(vec![
                link("Edutopia", "https://www.edutopia.org/"),
                link("Khan Academy", "https://www.khanacademy.org/"),
                link("Coursera for Educators", "https://www.coursera.org/educators"),
                link("Teaching Strategies", "https://www.teachingstrategies.com/"),
            ]),
        },
        Purpose {
            kind: PurposeKind::CreateCourses,
            icon: "👨‍🏫",
            title: "Create & Share Courses",
            description: "Design learning materials and track student progress.",
            payload: PurposePayload::None,
        },
        Purpose {
            kind: PurposeKind::StudentPerformance,
            icon: "📊",
            title: "Monitor Student Performance",
            description: "Get insights into student learning behavior.",
            payload: PurposePayload::Scores(vec![
                StudentScore { name: "Purnima", score: 85 },
                StudentScore { name: "Sandeep", score: 90 },
                StudentScore { name: "Aranya", score: 78 },
                StudentScore { name: "Abhay", score: 92 },
            ]),
        },
    ]
});

fn link(name: &str, url: &str) -> ResourceLink {
    ResourceLink {
        name: name.to_owned(),
        url: url.to_owned(),
    }
}

/// Purposes offered to a role on the second wizard stage.
pub fn purposes_for(role: Role) -> &'static [Purpose] {
    match role {
        Role::Student => &STUDENT_PURPOSES,
        Role::Teacher => &TEACHER_PURPOSES,
    }
}
