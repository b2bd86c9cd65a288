//! Fixed activity tables: topic-card grids, career skills, and the quiz bank.

#[cfg(test)]
#[path = "activities_test.rs"]
mod activities_test;

use super::types::{QuizQuestion, TopicCard};

const EXAM_PREP_TOPICS: &[TopicCard] = &[
    TopicCard { icon: "📝", title: "Practice Tests" },
    TopicCard { icon: "📚", title: "Study Materials" },
    TopicCard { icon: "✍️", title: "Mock Exams" },
];

const COURSE_TOOL_TOPICS: &[TopicCard] = &[
    TopicCard { icon: "🏗️", title: "Course Builder" },
    TopicCard { icon: "📚", title: "Content Library" },
    TopicCard { icon: "📊", title: "Assessment Tools" },
];

/// Skills offered by the career picker, in the order the flowchart uses.
const CAREER_SKILLS: &[&str] = &["JavaScript", "React", "Node.js", "CSS", "Python"];

const QUIZ_QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        prompt: "What is React?",
        options: &["A framework", "A library", "A database", "A language"],
        answer: "A library",
    },
    QuizQuestion {
        prompt: "What is JSX?",
        options: &["A syntax extension", "A component", "A hook", "A state"],
        answer: "A syntax extension",
    },
];

/// Topic cards for the exam-preparation view.
pub fn exam_prep_topics() -> &'static [TopicCard] {
    EXAM_PREP_TOPICS
}

/// Topic cards for the course-creation view.
pub fn course_tool_topics() -> &'static [TopicCard] {
    COURSE_TOOL_TOPICS
}

/// Selectable skills for the career picker.
pub fn career_skills() -> &'static [&'static str] {
    CAREER_SKILLS
}

/// Question bank for the gamified quiz.
pub fn quiz_questions() -> &'static [QuizQuestion] {
    QUIZ_QUESTIONS
}
