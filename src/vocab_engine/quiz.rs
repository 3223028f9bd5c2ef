//! Multiple-choice quiz session.
//!
//! ```text
//! NotStarted ──advance()──▶ InProgress(i) ──answer()──▶ InProgress(i), input locked
//!                               ▲                               │ feedback delay
//!                               └──────── advance() ◀───────────┘
//!                                  (Completed once i == len)
//! ```
//!
//! A question accepts exactly one answer: after `answer()` the options stay
//! locked until the feedback delay has elapsed and the session has moved on.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::vocab_engine::{
    helpers::percentage,
    models::{AnswerRecord, Question, TestMode},
    scheduler::Scheduler,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizState {
    NotStarted,
    InProgress { current_index: usize },
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuizEvent {
    NextQuestion,
}

/// One wrong answer together with its 1-based question number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncorrectAnswer {
    pub number: usize,
    pub record: AnswerRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub incorrect_count: usize,
    /// Wrong answers in the order they were given.
    pub incorrect: Vec<IncorrectAnswer>,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    mode: TestMode,
    questions: Vec<Question>,
    current_index: usize,
    score: usize,
    answer_history: Vec<AnswerRecord>,
    state: QuizState,
    feedback_delay_ms: u64,
    scheduler: Scheduler<QuizEvent>,
}

impl QuizSession {
    /// A fresh session over `questions`; call [`advance`](Self::advance) to show the first one.
    pub fn new(mode: TestMode, questions: Vec<Question>, feedback_delay_ms: u64) -> Self {
        QuizSession {
            mode,
            questions,
            current_index: 0,
            score: 0,
            answer_history: Vec::new(),
            state: QuizState::NotStarted,
            feedback_delay_ms,
            scheduler: Scheduler::new(),
        }
    }

    /// Show the question at the current index, or complete the quiz when
    /// there are none left.
    pub fn advance(&mut self) -> Option<&Question> {
        if self.state == QuizState::Completed {
            return None;
        }
        if self.current_index >= self.questions.len() {
            self.state = QuizState::Completed;
            info!(
                mode = %self.mode,
                score = self.score,
                total = self.questions.len(),
                "quiz completed"
            );
            return None;
        }
        self.state = QuizState::InProgress { current_index: self.current_index };
        debug!(index = self.current_index, "showing question");
        self.questions.get(self.current_index)
    }

    /// Record `selected` as the answer to the current question.
    ///
    /// Returns `None` without touching any state when no question is showing
    /// or the current one was already answered.
    pub fn answer(&mut self, selected: &str) -> Option<&AnswerRecord> {
        if self.is_input_locked() {
            debug!(selected, "answer ignored: input locked");
            return None;
        }
        let question = self.questions.get(self.current_index)?;
        let is_correct = question.is_correct(selected);
        let record = AnswerRecord {
            prompt_text: question.prompt_text.clone(),
            selected: selected.to_string(),
            correct_answer: question.correct_answer.clone(),
            is_correct,
        };
        if is_correct {
            self.score += 1;
        }
        debug!(index = self.current_index, is_correct, "answer recorded");
        self.answer_history.push(record);
        self.scheduler.schedule(self.feedback_delay_ms, QuizEvent::NextQuestion);
        self.answer_history.last()
    }

    /// Let `dt_ms` of simulated time pass, firing any due continuation.
    pub fn tick(&mut self, dt_ms: u64) {
        let until = self.scheduler.now_ms() + dt_ms;
        while let Some(event) = self.scheduler.pop_due(until) {
            match event {
                QuizEvent::NextQuestion => {
                    self.current_index += 1;
                    self.advance();
                }
            }
        }
        self.scheduler.advance_to(until);
    }

    /// Replay the same questions from the first one with a clean score.
    pub fn restart(&mut self) -> Option<&Question> {
        self.scheduler.cancel_all();
        self.current_index = 0;
        self.score = 0;
        self.answer_history.clear();
        self.state = QuizState::NotStarted;
        debug!(total = self.questions.len(), "quiz restarted");
        self.advance()
    }

    /// Results, once the quiz has completed.
    pub fn summary(&self) -> Option<QuizSummary> {
        if self.state != QuizState::Completed {
            return None;
        }
        let total = self.questions.len();
        let incorrect: Vec<IncorrectAnswer> = self
            .answer_history
            .iter()
            .enumerate()
            .filter(|(_, r)| !r.is_correct)
            .map(|(i, r)| IncorrectAnswer { number: i + 1, record: r.clone() })
            .collect();
        Some(QuizSummary {
            score: self.score,
            total,
            percentage: percentage(self.score, total),
            incorrect_count: total - self.score,
            incorrect,
        })
    }

    /// True while no answer may be given: before start, after completion, and
    /// during the feedback window of an answered question.
    pub fn is_input_locked(&self) -> bool {
        match self.state {
            QuizState::InProgress { current_index } => self.answer_history.len() > current_index,
            QuizState::NotStarted | QuizState::Completed => true,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            QuizState::InProgress { current_index } => self.questions.get(current_index),
            _ => None,
        }
    }

    /// The answer given to the question on screen, while its feedback shows.
    pub fn current_answer(&self) -> Option<&AnswerRecord> {
        match self.state {
            QuizState::InProgress { current_index } => self.answer_history.get(current_index),
            _ => None,
        }
    }

    /// `"Question 3 of 10"`.
    pub fn progress_label(&self) -> String {
        let shown = (self.current_index + 1).min(self.questions.len());
        format!("Question {} of {}", shown, self.questions.len())
    }

    pub fn mode(&self) -> TestMode {
        self.mode
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answer_history(&self) -> &[AnswerRecord] {
        &self.answer_history
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    /// Continuations still queued; zero once the session is idle.
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending_count()
    }
}
