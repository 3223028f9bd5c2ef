//! # vocab_drill
//!
//! Self-test engine for an English–Thai vocabulary trainer.
//!
//! Two static data files (a word list and synonym groups) feed three test
//! modes: a multiple-choice quiz, flip cards, and a matching-pairs game. The
//! crate holds only the logic; a rendering layer drives it through a handful
//! of entry points and draws the JSON projections in [`ui_adapter`].
//!
//! ## How it works
//!
//! 1. Load a [`VocabularyStore`] from `vocabulary.json` and `synonym.json`.
//! 2. Hand it to a [`Trainer`], which gates every test screen on the data and
//!    owns the single active session.
//! 3. Start a quiz ([`TestMode`] + [`QuestionCount`]), flashcards, or a match
//!    game, feed it clicks, and call `tick(dt_ms)` from the host's timer so the
//!    feedback and check delays elapse.
//!
//! ## Key properties
//!
//! - **Deterministic**: pass `Some(seed)` to [`Trainer::new`] to reproduce
//!   every shuffle, question set and board.
//! - **Correct option sets**: each question has its answer exactly once and no
//!   repeated distractors; synonym questions never offer another synonym of
//!   the same headword as a distractor.
//! - **No stale callbacks**: each session owns its deferred continuations, so
//!   tearing it down cancels them all.
//!
//! ## Quick start
//!
//! ```rust
//! use vocab_drill::{EngineConfig, QuestionCount, TestMode, Trainer, VocabularyStore};
//!
//! let vocabulary = r#"[
//!     {"eng": "cat", "thai": "แมว", "part": "noun"},
//!     {"eng": "dog", "thai": "สุนัข", "part": "noun"},
//!     {"eng": "bird", "thai": "นก", "part": "noun"},
//!     {"eng": "fish", "thai": "ปลา", "part": "noun"}
//! ]"#;
//! let store = VocabularyStore::from_json(vocabulary, "[]").unwrap();
//!
//! let mut trainer = Trainer::new(EngineConfig::default(), Some(42)).unwrap();
//! trainer.install(Ok(store)).unwrap();
//! trainer.start_quiz(TestMode::SourceToTarget, QuestionCount::Max).unwrap();
//!
//! let quiz = trainer.quiz_mut().unwrap();
//! let answer = quiz.current_question().unwrap().correct_answer.clone();
//! assert!(quiz.answer(&answer).unwrap().is_correct);
//!
//! trainer.tick(1500);
//! assert_eq!(trainer.quiz().unwrap().current_index(), 1);
//! ```

pub mod error;
pub mod ui_adapter;
pub mod vocab_engine;

// Convenience re-exports so callers can use `vocab_drill::Trainer`
// directly without reaching into `vocab_engine::`.
pub use error::{EngineError, Result};
pub use vocab_engine::{
    generate_options, generate_questions, generate_synonym_options, ActiveTest, AnswerRecord,
    CardSide, CardVisual, EngineConfig, FlashcardDeck, LoadReport, MatchCard, MatchGame,
    MatchState, MatchSummary, Question, QuestionCount, QuizSession, QuizState, QuizSummary,
    Resolution, Screen, SelectOutcome, SynonymGroup, TestMode, Trainer, VocabularyStore,
    WordEntry,
};

#[cfg(test)]
mod tests;
