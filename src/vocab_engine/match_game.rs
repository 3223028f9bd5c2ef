//! Matching-pairs game.
//!
//! The board holds two cards per vocabulary entry, one [`CardSide::Source`]
//! and one [`CardSide::Target`] sharing a `pair_id`. The player picks two
//! cards; after a short check delay the pair is judged:
//!
//! | Outcome  | Cards                          | Score                      |
//! |----------|--------------------------------|----------------------------|
//! | match    | both become matched for good   | `+match_reward`            |
//! | mismatch | flagged wrong, then idle again | `-mismatch_penalty`, min 0 |
//!
//! Once every pair is matched the game completes after a final delay. An
//! elapsed-seconds counter runs from deal until the last match.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{EngineError, Result};
use crate::vocab_engine::{
    config::EngineConfig,
    helpers::format_elapsed,
    models::{CardSide, MatchCard, WordEntry},
    scheduler::{Scheduler, TaskId},
    shuffle::{sample, shuffle},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchState {
    InProgress,
    Completed,
}

/// How a card should be drawn right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardVisual {
    Idle,
    Selected,
    Wrong,
    Matched,
}

/// What a click on a card did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Nothing changed: matched card, unknown id, full selection, or game over.
    Ignored,
    Selected,
    Deselected,
    /// Second card picked; the pair will be judged after the check delay.
    PairPending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Matched { pair_id: u32 },
    Mismatched,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchEvent {
    Resolve,
    ClearWrong,
    Complete,
    TimerTick,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairResult {
    pub source: String,
    pub target: String,
    pub matched: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub score: u32,
    pub matched_pairs: usize,
    pub total_pairs: usize,
    pub elapsed_secs: u64,
    /// Pairs in order of first appearance on the board.
    pub pairs: Vec<PairResult>,
}

#[derive(Debug, Clone)]
pub struct MatchGame {
    cards: Vec<MatchCard>,
    selected: Vec<u32>,
    wrong: Vec<u32>,
    matched_pairs: usize,
    total_pairs: usize,
    score: u32,
    elapsed_secs: u64,
    state: MatchState,
    completion_scheduled: bool,
    config: EngineConfig,
    scheduler: Scheduler<MatchEvent>,
    resolve_task: Option<TaskId>,
    wrong_task: Option<TaskId>,
    timer_task: Option<TaskId>,
}

/// Two cards per entry, ids `2i` / `2i + 1`, in shuffled order.
fn deal<R: Rng + ?Sized>(words: &[WordEntry], pair_count: usize, rng: &mut R) -> Vec<MatchCard> {
    let chosen = sample(words, pair_count, rng);
    let mut cards: Vec<MatchCard> = chosen
        .into_iter()
        .enumerate()
        .flat_map(|(i, w)| {
            let pair_id = i as u32;
            [
                MatchCard {
                    id: pair_id * 2,
                    display_text: w.term,
                    side: CardSide::Source,
                    pair_id,
                    is_matched: false,
                },
                MatchCard {
                    id: pair_id * 2 + 1,
                    display_text: w.translation,
                    side: CardSide::Target,
                    pair_id,
                    is_matched: false,
                },
            ]
        })
        .collect();
    shuffle(&mut cards, rng);
    cards
}

impl MatchGame {
    /// Deal a board of `pair_count` pairs (clamped to `1..=words.len()`) and
    /// start the elapsed-time counter.
    pub fn new<R: Rng + ?Sized>(
        words: &[WordEntry],
        pair_count: usize,
        config: &EngineConfig,
        rng: &mut R,
    ) -> Result<Self> {
        if words.is_empty() {
            return Err(EngineError::EmptySource { source_name: "vocabulary entries" });
        }
        let total_pairs = pair_count.clamp(1, words.len());
        let mut game = MatchGame {
            cards: deal(words, total_pairs, rng),
            selected: Vec::with_capacity(2),
            wrong: Vec::new(),
            matched_pairs: 0,
            total_pairs,
            score: 0,
            elapsed_secs: 0,
            state: MatchState::InProgress,
            completion_scheduled: false,
            config: config.clone(),
            scheduler: Scheduler::new(),
            resolve_task: None,
            wrong_task: None,
            timer_task: None,
        };
        game.start_timer();
        info!(pairs = total_pairs, "match game dealt");
        Ok(game)
    }

    /// Deal a fresh board with the same number of pairs as this one.
    pub fn restart<R: Rng + ?Sized>(&mut self, words: &[WordEntry], rng: &mut R) -> Result<()> {
        *self = MatchGame::new(words, self.total_pairs, &self.config, rng)?;
        Ok(())
    }

    /// Handle a click on card `id`.
    pub fn select_card(&mut self, id: u32) -> SelectOutcome {
        if self.state != MatchState::InProgress {
            return SelectOutcome::Ignored;
        }
        let Some(card) = self.cards.iter().find(|c| c.id == id) else {
            debug!(id, "select ignored: unknown card");
            return SelectOutcome::Ignored;
        };
        if card.is_matched {
            return SelectOutcome::Ignored;
        }
        if let Some(pos) = self.selected.iter().position(|&s| s == id) {
            self.selected.remove(pos);
            // A pair that is no longer complete must not be judged.
            if let Some(task) = self.resolve_task.take() {
                self.scheduler.cancel(task);
            }
            return SelectOutcome::Deselected;
        }
        if self.selected.len() >= 2 {
            debug!(id, "select ignored: pair already pending");
            return SelectOutcome::Ignored;
        }

        self.selected.push(id);
        self.wrong.retain(|&w| w != id);
        if self.selected.len() == 2 {
            let task = self.scheduler.schedule(self.config.match_check_delay_ms, MatchEvent::Resolve);
            self.resolve_task = Some(task);
            SelectOutcome::PairPending
        } else {
            SelectOutcome::Selected
        }
    }

    /// Judge the two selected cards. Does nothing unless exactly two are
    /// selected. The selection is always empty afterwards.
    pub fn resolve(&mut self) -> Option<Resolution> {
        if self.selected.len() != 2 {
            return None;
        }
        if let Some(task) = self.resolve_task.take() {
            self.scheduler.cancel(task);
        }
        let (a, b) = (self.selected[0], self.selected[1]);
        self.selected.clear();

        let pair_of = |id: u32| self.cards.iter().find(|c| c.id == id).map(|c| c.pair_id);
        let (pa, pb) = (pair_of(a)?, pair_of(b)?);

        if pa == pb {
            for card in self.cards.iter_mut().filter(|c| c.id == a || c.id == b) {
                card.is_matched = true;
            }
            self.matched_pairs += 1;
            self.score += self.config.match_reward;
            debug!(pair_id = pa, score = self.score, "pair matched");
            if self.matched_pairs == self.total_pairs && !self.completion_scheduled {
                self.completion_scheduled = true;
                self.stop_timer();
                self.scheduler.schedule(self.config.match_complete_delay_ms, MatchEvent::Complete);
            }
            Some(Resolution::Matched { pair_id: pa })
        } else {
            self.score = self.score.saturating_sub(self.config.mismatch_penalty);
            self.wrong = vec![a, b];
            if let Some(task) = self.wrong_task.take() {
                self.scheduler.cancel(task);
            }
            self.wrong_task = Some(self.scheduler.schedule(self.config.wrong_flash_ms, MatchEvent::ClearWrong));
            debug!(a, b, score = self.score, "pair mismatched");
            Some(Resolution::Mismatched)
        }
    }

    /// Let `dt_ms` of simulated time pass, firing any due continuation.
    pub fn tick(&mut self, dt_ms: u64) {
        let until = self.scheduler.now_ms() + dt_ms;
        while let Some(event) = self.scheduler.pop_due(until) {
            match event {
                MatchEvent::Resolve => {
                    self.resolve_task = None;
                    self.resolve();
                }
                MatchEvent::ClearWrong => {
                    self.wrong_task = None;
                    self.wrong.clear();
                }
                MatchEvent::Complete => {
                    if self.state == MatchState::InProgress {
                        self.state = MatchState::Completed;
                        info!(
                            score = self.score,
                            elapsed = %format_elapsed(self.elapsed_secs),
                            "match game completed"
                        );
                    }
                }
                MatchEvent::TimerTick => self.elapsed_secs += 1,
            }
        }
        self.scheduler.advance_to(until);
    }

    /// Stop every pending continuation and the timer.
    pub fn teardown(&mut self) {
        self.scheduler.cancel_all();
        self.resolve_task = None;
        self.wrong_task = None;
        self.timer_task = None;
    }

    pub fn card_visual(&self, id: u32) -> Option<CardVisual> {
        let card = self.cards.iter().find(|c| c.id == id)?;
        Some(if card.is_matched {
            CardVisual::Matched
        } else if self.selected.contains(&id) {
            CardVisual::Selected
        } else if self.wrong.contains(&id) {
            CardVisual::Wrong
        } else {
            CardVisual::Idle
        })
    }

    /// Results; available at any point, final once the game has completed.
    pub fn summary(&self) -> MatchSummary {
        let mut pairs: Vec<(u32, PairResult)> = Vec::with_capacity(self.total_pairs);
        for card in &self.cards {
            if pairs.iter().any(|(id, _)| *id == card.pair_id) {
                continue;
            }
            let text_of = |side: CardSide| {
                self.cards
                    .iter()
                    .find(|c| c.pair_id == card.pair_id && c.side == side)
                    .map(|c| c.display_text.clone())
                    .unwrap_or_default()
            };
            pairs.push((
                card.pair_id,
                PairResult {
                    source: text_of(CardSide::Source),
                    target: text_of(CardSide::Target),
                    matched: card.is_matched,
                },
            ));
        }
        MatchSummary {
            score: self.score,
            matched_pairs: self.matched_pairs,
            total_pairs: self.total_pairs,
            elapsed_secs: self.elapsed_secs,
            pairs: pairs.into_iter().map(|(_, p)| p).collect(),
        }
    }

    pub fn cards(&self) -> &[MatchCard] {
        &self.cards
    }

    pub fn selected(&self) -> &[u32] {
        &self.selected
    }

    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    pub fn total_pairs(&self) -> usize {
        self.total_pairs
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// Elapsed time as `mm:ss`.
    pub fn elapsed_label(&self) -> String {
        format_elapsed(self.elapsed_secs)
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn is_timer_running(&self) -> bool {
        self.timer_task.is_some_and(|t| self.scheduler.is_pending(t))
    }

    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending_count()
    }

    fn start_timer(&mut self) {
        self.stop_timer();
        self.timer_task = Some(
            self.scheduler
                .schedule_repeating(self.config.timer_period_ms, MatchEvent::TimerTick),
        );
    }

    fn stop_timer(&mut self) {
        if let Some(task) = self.timer_task.take() {
            self.scheduler.cancel(task);
        }
    }
}
