//! Matching-pairs game played by a scripted player.
//!
//! Run with: `cargo run --example match_game`
//!
//! The player first flips two cards from different pairs (a mismatch costs
//! points, never below zero), then finds every pair in turn. Time is driven
//! by `tick`, so the timer and the check delays advance exactly as a host
//! clock would drive them.

use std::path::Path;

use tracing_subscriber::EnvFilter;
use vocab_drill::{ui_adapter, EngineConfig, MatchGame, Trainer};

/// Card ids of `pair_id`.
fn pair_ids(game: &MatchGame, pair_id: u32) -> Vec<u32> {
    game.cards().iter().filter(|c| c.pair_id == pair_id).map(|c| c.id).collect()
}

fn print_board(game: &MatchGame) {
    let view = ui_adapter::match_board_view(game);
    println!(
        "  score {}  pairs {}/{}  time {}",
        view["score"], view["matched_pairs"], view["total_pairs"], view["timer"]
    );
    for card in game.cards() {
        let visual = game.card_visual(card.id).map(|v| format!("{v:?}")).unwrap_or_default();
        println!("    #{:<3} {:<14} {:<8} {visual}", card.id, card.display_text, card.side.to_string());
    }
    println!();
}

fn main() -> vocab_drill::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vocab_drill=info")),
        )
        .init();

    let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    let mut trainer = Trainer::new(EngineConfig::default(), Some(7))?;
    trainer.load_dir(&data_dir)?;
    trainer.start_match(Some(4))?;

    let check = trainer.config().match_check_delay_ms;
    let finish = trainer.config().match_complete_delay_ms;
    let think_ms = 2_300;

    if let Some(game) = trainer.match_game() {
        println!("══ Fresh board ══");
        print_board(game);
    }

    // One deliberate mismatch.
    if let Some(game) = trainer.match_game_mut() {
        let a = pair_ids(game, 0)[0];
        let b = pair_ids(game, 1)[0];
        game.select_card(a);
        game.select_card(b);
    }
    trainer.tick(check);
    if let Some(game) = trainer.match_game() {
        println!("══ After a mismatch ══");
        print_board(game);
    }

    let total = trainer.match_game().map_or(0, |g| g.total_pairs() as u32);
    for pair_id in 0..total {
        trainer.tick(think_ms);
        if let Some(game) = trainer.match_game_mut() {
            for id in pair_ids(game, pair_id) {
                game.select_card(id);
            }
        }
        trainer.tick(check);
    }
    trainer.tick(finish);

    if let Some(results) = trainer.match_game().and_then(ui_adapter::match_results_view) {
        println!("══ Results ══");
        println!("{results:#}");
    }
    Ok(())
}
