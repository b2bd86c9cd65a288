use super::*;
use crate::catalog::quiz_questions;

#[test]
fn correct_answer_scores_and_earns_a_reward() {
    let questions = quiz_questions();
    let mut quiz = QuizState::new();
    quiz.answer(questions, "A library");
    assert_eq!(quiz.score, 1);
    assert_eq!(quiz.rewards, vec!["🏆 Reward for Question 1".to_owned()]);
    assert_eq!(quiz.current, 1);
    assert!(!quiz.completed);
}

#[test]
fn wrong_answer_advances_without_reward() {
    let questions = quiz_questions();
    let mut quiz = QuizState::new();
    quiz.answer(questions, "A framework");
    assert_eq!(quiz.score, 0);
    assert!(quiz.rewards.is_empty());
    assert_eq!(quiz.current, 1);
}

#[test]
fn answering_every_question_completes_the_run() {
    let questions = quiz_questions();
    let mut quiz = QuizState::new();
    quiz.answer(questions, "A library");
    quiz.answer(questions, "A syntax extension");
    assert!(quiz.completed);
    assert_eq!(quiz.score, 2);
    assert_eq!(quiz.rewards.len(), 2);
    assert_eq!(quiz.rewards[1], "🏆 Reward for Question 2");
}

#[test]
fn answers_after_completion_are_ignored() {
    let questions = quiz_questions();
    let mut quiz = QuizState::new();
    quiz.answer(questions, "A library");
    quiz.answer(questions, "A syntax extension");
    quiz.answer(questions, "A library");
    assert_eq!(quiz.score, 2);
    assert_eq!(quiz.current, 1);
}

#[test]
fn progress_tracks_answered_share() {
    let questions = quiz_questions();
    let mut quiz = QuizState::new();
    assert!((quiz.progress_percent(questions.len()) - 0.0).abs() < f64::EPSILON);
    quiz.answer(questions, "A library");
    assert!((quiz.progress_percent(questions.len()) - 50.0).abs() < f64::EPSILON);
    quiz.answer(questions, "A hook");
    assert!((quiz.progress_percent(questions.len()) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn progress_with_no_questions_is_zero() {
    let quiz = QuizState::new();
    assert!((quiz.progress_percent(0) - 0.0).abs() < f64::EPSILON);
}

#[test]
fn restart_returns_to_the_initial_state() {
    let questions = quiz_questions();
    let mut quiz = QuizState::new();
    quiz.answer(questions, "A library");
    quiz.answer(questions, "A syntax extension");
    quiz.restart();
    assert_eq!(quiz, QuizState::new());
}
