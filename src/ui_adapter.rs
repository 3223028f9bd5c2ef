//! Read-only JSON projections of session state for a rendering layer.
//!
//! Nothing here mutates a session; a view is rebuilt from scratch after every
//! state change and handed to whatever draws the screen.

use serde_json::{json, Value};

use crate::vocab_engine::{
    flashcards::FlashcardDeck,
    helpers::format_elapsed,
    match_game::{CardVisual, MatchGame, MatchState},
    quiz::{QuizSession, QuizState},
};

/// Per-option colouring while an answer's feedback is showing.
fn option_status(option: &str, correct: &str, selected: Option<&str>) -> &'static str {
    match selected {
        None => "open",
        Some(_) if option == correct => "correct",
        Some(s) if s == option => "incorrect",
        Some(_) => "disabled",
    }
}

/// The question on screen with its options, or `null` fields once the quiz ended.
pub fn quiz_view(session: &QuizSession) -> Value {
    let Some(question) = session.current_question() else {
        return json!({
            "mode": session.mode(),
            "completed": session.state() == QuizState::Completed,
            "question": Value::Null,
            "options": [],
            "score": session.score(),
        });
    };

    let selected = session.current_answer().map(|r| r.selected.as_str());
    let options: Vec<Value> = question
        .options
        .iter()
        .map(|o| {
            json!({
                "text": o,
                "enabled": !session.is_input_locked(),
                "status": option_status(o, &question.correct_answer, selected),
            })
        })
        .collect();

    json!({
        "mode": session.mode(),
        "completed": false,
        "progress": session.progress_label(),
        "question": question.display_prompt(),
        "options": options,
        "score": session.score(),
    })
}

/// Results screen for a finished quiz; `None` while it is still running.
pub fn quiz_results_view(session: &QuizSession) -> Option<Value> {
    let summary = session.summary()?;
    let incorrect: Vec<Value> = summary
        .incorrect
        .iter()
        .map(|i| {
            json!({
                "number": i.number,
                "prompt": i.record.prompt_text,
                "selected": i.record.selected,
                "correct": i.record.correct_answer,
            })
        })
        .collect();
    Some(json!({
        "score": summary.score,
        "total": summary.total,
        "percentage": summary.percentage,
        "correct_count": summary.score,
        "incorrect_count": summary.incorrect_count,
        "incorrect": incorrect,
    }))
}

/// Board cards with their visual state, score and timer.
pub fn match_board_view(game: &MatchGame) -> Value {
    let cards: Vec<Value> = game
        .cards()
        .iter()
        .map(|c| {
            let visual = game.card_visual(c.id).unwrap_or(CardVisual::Idle);
            json!({
                "id": c.id,
                "text": c.display_text,
                "side": c.side,
                "visual": visual,
            })
        })
        .collect();
    json!({
        "cards": cards,
        "score": game.score(),
        "matched_pairs": game.matched_pairs(),
        "total_pairs": game.total_pairs(),
        "timer": game.elapsed_label(),
        "completed": game.state() == MatchState::Completed,
    })
}

/// Results screen for a finished match game; `None` while it is still running.
pub fn match_results_view(game: &MatchGame) -> Option<Value> {
    if game.state() != MatchState::Completed {
        return None;
    }
    let summary = game.summary();
    let pairs: Vec<Value> = summary
        .pairs
        .iter()
        .enumerate()
        .map(|(i, p)| {
            json!({
                "number": i + 1,
                "source": p.source,
                "target": p.target,
                "matched": p.matched,
            })
        })
        .collect();
    Some(json!({
        "score": summary.score,
        "matched_pairs": summary.matched_pairs,
        "total_pairs": summary.total_pairs,
        "time": format_elapsed(summary.elapsed_secs),
        "pairs": pairs,
    }))
}

pub fn flashcard_view(deck: &FlashcardDeck) -> Value {
    let card = deck.current();
    json!({
        "front": card.term,
        "back": card.translation,
        "parts_of_speech": card.parts_label(),
        "flipped": deck.is_flipped(),
        "counter": deck.counter(),
        "can_prev": deck.can_prev(),
        "can_next": deck.can_next(),
    })
}
