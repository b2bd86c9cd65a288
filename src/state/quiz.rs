//! Gamified quiz progression: scoring, rewards, and completion.

#[cfg(test)]
#[path = "quiz_test.rs"]
mod quiz_test;

use crate::catalog::QuizQuestion;

/// Position and results of one quiz run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizState {
    /// Index of the question currently shown.
    pub current: usize,
    pub score: usize,
    /// One reward per correctly answered question.
    pub rewards: Vec<String>,
    pub completed: bool,
}

impl QuizState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer the current question and advance, completing after the last one.
    pub fn answer(&mut self, questions: &[QuizQuestion], choice: &str) {
        if self.completed {
            return;
        }
        let Some(question) = questions.get(self.current) else {
            self.completed = true;
            return;
        };
        if choice == question.answer {
            self.score += 1;
            self.rewards.push(format!("🏆 Reward for Question {}", self.current + 1));
        }
        if self.current + 1 < questions.len() {
            self.current += 1;
        } else {
            self.completed = true;
        }
    }

    /// Share of questions answered, as a 0-100 bar width.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_percent(&self, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        let answered = if self.completed { total } else { self.current };
        (answered as f64 / total as f64) * 100.0
    }

    /// Reset to a fresh run.
    pub fn restart(&mut self) {
        *self = Self::default();
    }
}
