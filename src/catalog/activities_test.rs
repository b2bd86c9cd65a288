use super::*;

#[test]
fn exam_prep_topics_are_the_fixed_three() {
    let titles: Vec<&str> = exam_prep_topics().iter().map(|t| t.title).collect();
    assert_eq!(titles, vec!["Practice Tests", "Study Materials", "Mock Exams"]);
}

#[test]
fn course_tool_topics_are_the_fixed_three() {
    let titles: Vec<&str> = course_tool_topics().iter().map(|t| t.title).collect();
    assert_eq!(titles, vec!["Course Builder", "Content Library", "Assessment Tools"]);
}

#[test]
fn career_skills_keep_catalog_order() {
    assert_eq!(career_skills(), &["JavaScript", "React", "Node.js", "CSS", "Python"]);
}

#[test]
fn quiz_answers_appear_in_their_options() {
    for question in quiz_questions() {
        assert!(question.options.contains(&question.answer), "{}", question.prompt);
    }
}

#[test]
fn quiz_has_two_questions() {
    assert_eq!(quiz_questions().len(), 2);
    assert_eq!(quiz_questions()[0].prompt, "What is React?");
}
