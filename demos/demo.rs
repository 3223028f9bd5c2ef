//! Quiz walkthrough over the bundled data files.
//!
//! Run with: `cargo run --example demo`
//!
//! Set `RUST_LOG=vocab_drill=debug` to see every scheduled continuation.
//!
//! 1. **Listings**: the vocabulary in two alphabetical columns and the
//!    synonym groups, as the listing screens show them.
//! 2. **One quiz per mode**: five questions each, fixed seed. The first
//!    option is always picked so some answers come out wrong and the results
//!    screen has something to list.
//! 3. **Flashcards**: the first three cards, flipped.

use std::path::Path;

use tracing_subscriber::EnvFilter;
use vocab_drill::{ui_adapter, EngineConfig, QuestionCount, Screen, TestMode, Trainer};

fn print_quiz(trainer: &mut Trainer, mode: TestMode) -> vocab_drill::Result<()> {
    trainer.start_quiz(mode, QuestionCount::Custom(5))?;
    let feedback = trainer.config().feedback_delay_ms;

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{mode}]");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    while let Some(quiz) = trainer.quiz_mut() {
        let Some(question) = quiz.current_question().cloned() else {
            break;
        };
        println!("  {}  Q: {}", quiz.progress_label(), question.display_prompt());
        for opt in &question.options {
            let marker = if *opt == question.correct_answer { "✓" } else { " " };
            println!("     {marker} {opt}");
        }
        if let Some(record) = quiz.answer(&question.options[0]) {
            let verdict = if record.is_correct { "correct" } else { "wrong" };
            println!("  → picked {} ({verdict})", record.selected);
        }
        println!();
        trainer.tick(feedback);
    }

    if let Some(results) = trainer.quiz().and_then(ui_adapter::quiz_results_view) {
        println!("  Results: {results:#}");
    }
    println!();
    trainer.back_to_selection();
    Ok(())
}

fn main() -> vocab_drill::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vocab_drill=info")),
        )
        .init();

    let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    let mut trainer = Trainer::new(EngineConfig::default(), Some(2024))?;
    trainer.load_dir(&data_dir)?;

    // ── Listings ───────────────────────────────────────────────────────────
    trainer.show(Screen::Vocabulary)?;
    let store = trainer.store()?;
    let (left, right) = store.vocabulary_columns();
    println!();
    println!("══ Vocabulary ({} words) ══", store.words().len());
    for (i, entry) in left.iter().enumerate() {
        let other = right
            .get(i)
            .map(|e| format!("{} - {}", e.term, e.translation))
            .unwrap_or_default();
        println!("  {:<28}{other}", format!("{} - {}", entry.term, entry.translation));
    }
    println!();
    println!("══ Synonyms ══");
    for group in store.sorted_synonyms() {
        println!("  {} ({}): {}", group.headword, group.translation, group.synonyms.join(", "));
    }
    println!();

    // ── Quizzes ────────────────────────────────────────────────────────────
    for mode in [TestMode::SourceToTarget, TestMode::TargetToSource, TestMode::Synonym] {
        print_quiz(&mut trainer, mode)?;
    }

    // ── Flashcards ─────────────────────────────────────────────────────────
    trainer.start_flashcards()?;
    if let Some(deck) = trainer.flashcards_mut() {
        println!("══ Flashcards ══");
        for _ in 0..3 {
            deck.flip();
            let card = deck.current();
            println!("  {}  {} → {} [{}]", deck.counter(), card.term, card.translation, card.parts_label());
            deck.next();
        }
    }
    Ok(())
}
