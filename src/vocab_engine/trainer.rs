//! Screen controller: owns the loaded data and the one active session.
//!
//! Every test screen is gated on the data having loaded. Starting a test,
//! going back to test selection, or switching screens drops whatever session
//! was active, and with it every continuation that session had queued.

use std::path::Path;

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::error::{EngineError, Result};
use crate::vocab_engine::{
    config::EngineConfig,
    flashcards::FlashcardDeck,
    generator::{generate_questions, source_size, QuestionCount},
    match_game::MatchGame,
    models::TestMode,
    quiz::QuizSession,
    store::VocabularyStore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Home,
    Vocabulary,
    Synonym,
    Test,
}

impl Screen {
    /// Screens that need the data files.
    pub fn requires_data(self) -> bool {
        matches!(self, Screen::Vocabulary | Screen::Synonym | Screen::Test)
    }
}

#[derive(Debug, Clone, Default)]
pub enum ActiveTest {
    #[default]
    Idle,
    Quiz(QuizSession),
    Flashcards(FlashcardDeck),
    Match(MatchGame),
}

#[derive(Debug)]
pub struct Trainer {
    store: Option<VocabularyStore>,
    config: EngineConfig,
    rng: StdRng,
    screen: Screen,
    active: ActiveTest,
}

impl Trainer {
    /// A trainer with no data yet. Pass a seed to make every session reproducible.
    ///
    /// Fails with [`EngineError::InvalidConfig`] when `config` does not validate.
    pub fn new(config: EngineConfig, rng_seed: Option<u64>) -> Result<Self> {
        config.validate()?;
        let rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Trainer { store: None, config, rng, screen: Screen::Home, active: ActiveTest::Idle })
    }

    /// Install the outcome of a data load. A failed load leaves the gate closed.
    ///
    /// New data ends whatever session was running on the old data.
    pub fn install(&mut self, loaded: Result<VocabularyStore>) -> Result<()> {
        match loaded {
            Ok(store) => {
                self.teardown();
                info!(
                    words = store.words().len(),
                    groups = store.groups().len(),
                    "data available"
                );
                self.store = Some(store);
                Ok(())
            }
            Err(e) => {
                error!("failed to load vocabulary data: {e}");
                Err(e)
            }
        }
    }

    pub fn load_dir(&mut self, dir: &Path) -> Result<()> {
        self.install(VocabularyStore::load_dir(dir))
    }

    pub fn is_data_loaded(&self) -> bool {
        self.store.is_some()
    }

    pub fn store(&self) -> Result<&VocabularyStore> {
        self.store.as_ref().ok_or(EngineError::DataNotLoaded)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn active(&self) -> &ActiveTest {
        &self.active
    }

    /// Switch screens, tearing down any active session.
    pub fn show(&mut self, screen: Screen) -> Result<()> {
        if screen.requires_data() && !self.is_data_loaded() {
            return Err(EngineError::DataNotLoaded);
        }
        self.teardown();
        self.screen = screen;
        debug!(?screen, "screen shown");
        Ok(())
    }

    /// Generate a fresh question set and start a quiz on it.
    pub fn start_quiz(&mut self, mode: TestMode, count: QuestionCount) -> Result<()> {
        let store = self.store.as_ref().ok_or(EngineError::DataNotLoaded)?;
        let wanted = count.resolve(source_size(store, mode), self.config.default_question_count);
        let questions =
            generate_questions(store, mode, wanted, self.config.option_count, &mut self.rng)?;
        info!(%mode, questions = questions.len(), "quiz started");

        let mut session = QuizSession::new(mode, questions, self.config.feedback_delay_ms);
        session.advance();
        self.begin(ActiveTest::Quiz(session));
        Ok(())
    }

    pub fn start_flashcards(&mut self) -> Result<()> {
        let store = self.store.as_ref().ok_or(EngineError::DataNotLoaded)?;
        let deck = FlashcardDeck::new(store.words(), &mut self.rng)?;
        info!(cards = deck.len(), "flashcards started");
        self.begin(ActiveTest::Flashcards(deck));
        Ok(())
    }

    /// Deal a match board; `None` uses the configured default pair count.
    pub fn start_match(&mut self, pair_count: Option<usize>) -> Result<()> {
        let store = self.store.as_ref().ok_or(EngineError::DataNotLoaded)?;
        let pairs = pair_count.unwrap_or(self.config.default_pair_count);
        let game = MatchGame::new(store.words(), pairs, &self.config, &mut self.rng)?;
        self.begin(ActiveTest::Match(game));
        Ok(())
    }

    /// Deal a new board of the same size as the current match game.
    pub fn restart_match(&mut self) -> Result<()> {
        let store = self.store.as_ref().ok_or(EngineError::DataNotLoaded)?;
        if let ActiveTest::Match(game) = &mut self.active {
            game.restart(store.words(), &mut self.rng)?;
        }
        Ok(())
    }

    /// Replay the active quiz's questions from the start.
    pub fn restart_quiz(&mut self) {
        if let ActiveTest::Quiz(session) = &mut self.active {
            session.restart();
        }
    }

    /// Leave the running test and return to the test picker.
    pub fn back_to_selection(&mut self) {
        self.teardown();
    }

    /// Forward simulated time to the active session.
    pub fn tick(&mut self, dt_ms: u64) {
        match &mut self.active {
            ActiveTest::Quiz(session) => session.tick(dt_ms),
            ActiveTest::Match(game) => game.tick(dt_ms),
            ActiveTest::Flashcards(_) | ActiveTest::Idle => {}
        }
    }

    pub fn quiz(&self) -> Option<&QuizSession> {
        match &self.active {
            ActiveTest::Quiz(session) => Some(session),
            _ => None,
        }
    }

    pub fn quiz_mut(&mut self) -> Option<&mut QuizSession> {
        match &mut self.active {
            ActiveTest::Quiz(session) => Some(session),
            _ => None,
        }
    }

    pub fn match_game(&self) -> Option<&MatchGame> {
        match &self.active {
            ActiveTest::Match(game) => Some(game),
            _ => None,
        }
    }

    pub fn match_game_mut(&mut self) -> Option<&mut MatchGame> {
        match &mut self.active {
            ActiveTest::Match(game) => Some(game),
            _ => None,
        }
    }

    pub fn flashcards(&self) -> Option<&FlashcardDeck> {
        match &self.active {
            ActiveTest::Flashcards(deck) => Some(deck),
            _ => None,
        }
    }

    pub fn flashcards_mut(&mut self) -> Option<&mut FlashcardDeck> {
        match &mut self.active {
            ActiveTest::Flashcards(deck) => Some(deck),
            _ => None,
        }
    }

    /// Reshuffle the active flashcard deck.
    pub fn shuffle_flashcards(&mut self) {
        if let ActiveTest::Flashcards(deck) = &mut self.active {
            deck.shuffle(&mut self.rng);
        }
    }

    fn begin(&mut self, test: ActiveTest) {
        self.teardown();
        self.screen = Screen::Test;
        self.active = test;
    }

    fn teardown(&mut self) {
        if let ActiveTest::Match(game) = &mut self.active {
            game.teardown();
        }
        if !matches!(self.active, ActiveTest::Idle) {
            debug!("active session torn down");
        }
        self.active = ActiveTest::Idle;
    }
}
