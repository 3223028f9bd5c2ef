use rand::Rng;
use serde::Serialize;

use crate::error::{EngineError, Result};
use crate::vocab_engine::{models::WordEntry, shuffle::{shuffle, shuffled}};

/// A shuffled stack of vocabulary cards, term on the front, translation on the back.
#[derive(Debug, Clone, Serialize)]
pub struct FlashcardDeck {
    cards: Vec<WordEntry>,
    index: usize,
    flipped: bool,
}

impl FlashcardDeck {
    pub fn new<R: Rng + ?Sized>(words: &[WordEntry], rng: &mut R) -> Result<Self> {
        if words.is_empty() {
            return Err(EngineError::EmptySource { source_name: "vocabulary entries" });
        }
        Ok(FlashcardDeck { cards: shuffled(words, rng), index: 0, flipped: false })
    }

    pub fn current(&self) -> &WordEntry {
        &self.cards[self.index]
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Step forward; stays put on the last card. Returns whether it moved.
    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.index += 1;
        self.flipped = false;
        true
    }

    /// Step back; stays put on the first card. Returns whether it moved.
    pub fn prev(&mut self) -> bool {
        if !self.can_prev() {
            return false;
        }
        self.index -= 1;
        self.flipped = false;
        true
    }

    /// Reshuffle the whole deck and go back to the first card, face down.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        shuffle(&mut self.cards, rng);
        self.index = 0;
        self.flipped = false;
    }

    pub fn can_prev(&self) -> bool {
        self.index > 0
    }

    pub fn can_next(&self) -> bool {
        self.index + 1 < self.cards.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// `"3 / 40"`.
    pub fn counter(&self) -> String {
        format!("{} / {}", self.index + 1, self.cards.len())
    }
}
