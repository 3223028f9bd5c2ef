//! Core engine: data store, question generation and the three test sessions.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: word entries, synonym groups, questions, match cards |
//! | `store`      | JSON loading, duplicate policy, sorted listings |
//! | `shuffle`    | Fisher-Yates shuffle and sampling without replacement |
//! | `options`    | Answer option sets (general + two-tier synonym variant) |
//! | `generator`  | Question sets per test mode, question-count resolution |
//! | `scheduler`  | Deferred continuations on a simulated clock |
//! | `quiz`       | Multiple-choice session state machine and results |
//! | `match_game` | Matching-pairs state machine, scoring and timer |
//! | `flashcards` | Shuffled flip-card deck |
//! | `config`     | Delays, rewards and default sizes |
//! | `helpers`    | Percentages, `mm:ss`, prompt labels |
//! | `trainer`    | Screen controller owning the data and the active session |

pub mod config;
pub mod flashcards;
pub mod generator;
pub mod helpers;
pub mod match_game;
pub mod models;
pub mod options;
pub mod quiz;
pub mod scheduler;
pub mod shuffle;
pub mod store;
pub mod trainer;

// Re-export the public API surface so callers can use
// `vocab_engine::generate_questions` without reaching into sub-modules.
pub use config::EngineConfig;
pub use flashcards::FlashcardDeck;
pub use generator::{generate_questions, QuestionCount};
pub use match_game::{CardVisual, MatchGame, MatchState, MatchSummary, Resolution, SelectOutcome};
pub use models::{AnswerRecord, CardSide, MatchCard, Question, SynonymGroup, TestMode, WordEntry};
pub use options::{generate_options, generate_synonym_options};
pub use quiz::{QuizSession, QuizState, QuizSummary};
pub use store::{LoadReport, VocabularyStore};
pub use trainer::{ActiveTest, Screen, Trainer};
