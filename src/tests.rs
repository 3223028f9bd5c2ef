//! Cross-module tests for the `vocab_drill` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! # Coverage
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Options | Four unique options holding the answer once; concrete cat/dog/bird/fish case |
//! | Questions | Count clamping; distinct prompts, shared translations included; synonym answers drawn from the group |
//! | Synonym distractors | Never the headword or a synonym of the same group |
//! | Quiz | Score equals correct records; monotonic score; restart replays same set |
//! | Match | 12-card board for 6 entries; score floor; single completion |
//! | Trainer | Config validation; data gate; teardown on navigation and reload; determinism per seed |
//! | UI adapter | Option lockout and board projection |

use std::collections::{HashMap, HashSet};

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{
    generate_options, generate_questions, ui_adapter, CardSide, EngineConfig, EngineError,
    MatchGame, MatchState, QuestionCount, QuizState, Screen, TestMode, Trainer, VocabularyStore,
};

// ── helpers ──────────────────────────────────────────────────────────────────

const VOCABULARY_JSON: &str = include_str!("../data/vocabulary.json");
const SYNONYM_JSON: &str = include_str!("../data/synonym.json");

/// Store built from the bundled sample data.
pub(crate) fn sample_store() -> VocabularyStore {
    VocabularyStore::from_json(VOCABULARY_JSON, SYNONYM_JSON).expect("sample data parses")
}

fn loaded_trainer(seed: u64) -> Trainer {
    let mut trainer = Trainer::new(EngineConfig::default(), Some(seed)).unwrap();
    trainer.install(Ok(sample_store())).unwrap();
    trainer
}

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

const ALL_MODES: [TestMode; 3] = [TestMode::SourceToTarget, TestMode::TargetToSource, TestMode::Synonym];

// ── options ──────────────────────────────────────────────────────────────────

#[test]
fn cat_dog_bird_fish_options_are_a_permutation() {
    let pool = strings(&["แมว", "สุนัข", "นก", "ปลา"]);
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut opts = generate_options("แมว", &pool, 4, &mut rng);
        opts.sort();
        let mut expected = pool.clone();
        expected.sort();
        assert_eq!(opts, expected, "seed={seed}");
    }
}

#[test]
fn every_generated_question_has_one_correct_unique_option_set() {
    let store = sample_store();
    for mode in ALL_MODES {
        for seed in SEEDS {
            let mut rng = StdRng::seed_from_u64(seed);
            let qs = generate_questions(&store, mode, 100, 4, &mut rng).unwrap();
            for q in &qs {
                assert_eq!(q.options.len(), 4, "{mode:?} seed={seed} prompt={}", q.prompt_text);
                let correct = q.options.iter().filter(|o| **o == q.correct_answer).count();
                assert_eq!(correct, 1, "{mode:?} seed={seed}");
                let unique: HashSet<&String> = q.options.iter().collect();
                assert_eq!(unique.len(), q.options.len(), "{mode:?} seed={seed}");
            }
        }
    }
}

// ── question generation ──────────────────────────────────────────────────────

#[test]
fn question_count_matches_request_and_prompts_are_distinct() {
    let store = sample_store();
    for mode in ALL_MODES {
        for count in [1usize, 3, 5] {
            let mut rng = StdRng::seed_from_u64(count as u64);
            let qs = generate_questions(&store, mode, count, 4, &mut rng).unwrap();
            assert_eq!(qs.len(), count, "{mode:?}");
            let prompts: HashSet<&str> = qs.iter().map(|q| q.prompt_text.as_str()).collect();
            assert_eq!(prompts.len(), count, "duplicate prompt in {mode:?}");
        }
    }
}

#[test]
fn oversized_request_yields_every_item_once() {
    let store = sample_store();
    let mut rng = StdRng::seed_from_u64(3);
    let qs = generate_questions(&store, TestMode::SourceToTarget, 1000, 4, &mut rng).unwrap();
    assert_eq!(qs.len(), store.words().len());
    let qs = generate_questions(&store, TestMode::Synonym, 1000, 4, &mut rng).unwrap();
    assert_eq!(qs.len(), store.quiz_groups().len());
}

#[test]
fn prompt_and_answer_follow_the_mode_direction() {
    let store = sample_store();
    let mut rng = StdRng::seed_from_u64(5);
    for q in generate_questions(&store, TestMode::SourceToTarget, 12, 4, &mut rng).unwrap() {
        let entry = store.words().iter().find(|w| w.term == q.prompt_text).unwrap();
        assert_eq!(q.correct_answer, entry.translation);
    }
    for q in generate_questions(&store, TestMode::TargetToSource, 12, 4, &mut rng).unwrap() {
        assert!(store
            .words()
            .iter()
            .any(|w| w.translation == q.prompt_text && w.term == q.correct_answer));
    }
}

#[test]
fn shared_translation_is_asked_once_with_a_single_correct_option() {
    let vocabulary = r#"[
        {"eng": "cat", "thai": "แมว", "part": "noun"},
        {"eng": "kitty", "thai": "แมว", "part": "noun"},
        {"eng": "dog", "thai": "สุนัข", "part": "noun"},
        {"eng": "bird", "thai": "นก", "part": "noun"},
        {"eng": "fish", "thai": "ปลา", "part": "noun"}
    ]"#;
    let store = VocabularyStore::from_json(vocabulary, "[]").unwrap();
    for seed in 0..50u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let qs = generate_questions(&store, TestMode::TargetToSource, 5, 4, &mut rng).unwrap();
        assert_eq!(qs.len(), 4, "seed={seed}");
        let prompts: HashSet<&str> = qs.iter().map(|q| q.prompt_text.as_str()).collect();
        assert_eq!(prompts.len(), qs.len(), "duplicate prompt (seed={seed})");

        let q = qs.iter().find(|q| q.prompt_text == "แมว").unwrap();
        assert!(["cat", "kitty"].contains(&q.correct_answer.as_str()));
        let cat_like = q.options.iter().filter(|o| ["cat", "kitty"].contains(&o.as_str())).count();
        assert_eq!(cat_like, 1, "both cat and kitty offered (seed={seed})");
        assert_eq!(q.options.len(), 4);
    }
}

// ── synonym distractors ──────────────────────────────────────────────────────

#[test]
fn synonym_distractors_never_come_from_the_same_group() {
    let store = sample_store();
    for seed in 0..30u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        for q in generate_questions(&store, TestMode::Synonym, 100, 4, &mut rng).unwrap() {
            let group = store.find_group(&q.prompt_text).unwrap();
            assert!(group.synonyms.contains(&q.correct_answer));
            for o in q.options.iter().filter(|o| **o != q.correct_answer) {
                assert!(
                    !group.contains_word(o),
                    "distractor {o} belongs to {} (seed={seed})",
                    group.headword
                );
            }
        }
    }
}

#[test]
fn happy_question_picks_glad_or_joyful_and_never_offers_the_group() {
    let vocabulary = r#"[
        {"eng": "cat", "thai": "แมว", "part": "noun"},
        {"eng": "happy", "thai": "มีความสุข", "part": "adjective"}
    ]"#;
    let synonyms = r#"[
        {"word": "happy", "thai": "มีความสุข", "synonyms": ["glad", "joyful"]},
        {"word": "big", "thai": "ใหญ่", "synonyms": ["large", "huge"]},
        {"word": "fast", "thai": "เร็ว", "synonyms": ["quick", "rapid"]}
    ]"#;
    let store = VocabularyStore::from_json(vocabulary, synonyms).unwrap();
    let mut answers = HashSet::new();
    for seed in 0..40u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let qs = generate_questions(&store, TestMode::Synonym, 3, 4, &mut rng).unwrap();
        let q = qs.iter().find(|q| q.prompt_text == "happy").unwrap();
        assert!(["glad", "joyful"].contains(&q.correct_answer.as_str()));
        answers.insert(q.correct_answer.clone());
        for o in q.options.iter().filter(|o| **o != q.correct_answer) {
            assert!(!["glad", "joyful", "happy"].contains(&o.as_str()), "bad distractor {o}");
        }
        assert_eq!(q.display_prompt(), "happy (มีความสุข)");
    }
    assert_eq!(answers.len(), 2, "correct answer should vary across seeds");
}

// ── quiz session ─────────────────────────────────────────────────────────────

#[test]
fn quiz_score_counts_correct_records_and_never_decreases() {
    let mut trainer = loaded_trainer(11);
    trainer.start_quiz(TestMode::TargetToSource, QuestionCount::Custom(8)).unwrap();
    let mut last_score = 0;
    for i in 0..8 {
        let quiz = trainer.quiz_mut().unwrap();
        let q = quiz.current_question().unwrap().clone();
        let pick = if i % 3 == 0 {
            q.options.iter().find(|o| **o != q.correct_answer).unwrap().clone()
        } else {
            q.correct_answer.clone()
        };
        quiz.answer(&pick);
        assert!(quiz.score() >= last_score);
        last_score = quiz.score();
        let correct_records = quiz.answer_history().iter().filter(|r| r.is_correct).count();
        assert_eq!(quiz.score(), correct_records);
        trainer.tick(1500);
    }
    let quiz = trainer.quiz().unwrap();
    assert_eq!(quiz.state(), QuizState::Completed);
    let summary = quiz.summary().unwrap();
    assert_eq!(summary.score, 5);
    assert_eq!(summary.incorrect.iter().map(|i| i.number).collect::<Vec<_>>(), vec![1, 4, 7]);
}

#[test]
fn restart_replays_questions_while_new_test_regenerates() {
    let mut trainer = loaded_trainer(21);
    trainer.start_quiz(TestMode::SourceToTarget, QuestionCount::Custom(5)).unwrap();
    let first = trainer.quiz().unwrap().questions().to_vec();

    let quiz = trainer.quiz_mut().unwrap();
    let answer = quiz.current_question().unwrap().correct_answer.clone();
    quiz.answer(&answer);
    trainer.tick(1500);

    trainer.restart_quiz();
    let quiz = trainer.quiz().unwrap();
    assert_eq!(quiz.questions(), first.as_slice());
    assert_eq!(quiz.current_index(), 0);
    assert_eq!(quiz.score(), 0);
    assert!(quiz.answer_history().is_empty());

    trainer.start_quiz(TestMode::SourceToTarget, QuestionCount::Custom(5)).unwrap();
    let second = trainer.quiz().unwrap().questions().to_vec();
    assert_ne!(first, second, "a new test should draw a new question set");
}

// ── match game ───────────────────────────────────────────────────────────────

#[test]
fn six_entries_make_twelve_cards_in_six_pairs() {
    let store = sample_store();
    let mut rng = StdRng::seed_from_u64(4);
    let game = MatchGame::new(&store.words()[..6], 6, &EngineConfig::default(), &mut rng).unwrap();
    assert_eq!(game.cards().len(), 12);
    let mut sides: HashMap<u32, Vec<CardSide>> = HashMap::new();
    for c in game.cards() {
        sides.entry(c.pair_id).or_default().push(c.side);
    }
    assert_eq!(sides.len(), 6);
    for s in sides.values() {
        let mut s = s.clone();
        s.sort_by_key(|side| *side == CardSide::Target);
        assert_eq!(s, vec![CardSide::Source, CardSide::Target]);
    }
    let ids: HashSet<u32> = game.cards().iter().map(|c| c.id).collect();
    assert_eq!(ids.len(), 12);
}

#[test]
fn match_scoring_and_single_completion() {
    let mut trainer = loaded_trainer(8);
    trainer.start_match(Some(3)).unwrap();

    // Two mismatches from zero stay at zero.
    for _ in 0..2 {
        let game = trainer.match_game_mut().unwrap();
        let a = game.cards().iter().find(|c| c.pair_id == 0).unwrap().id;
        let b = game.cards().iter().find(|c| c.pair_id == 1).unwrap().id;
        game.select_card(a);
        game.select_card(b);
        trainer.tick(500);
    }
    assert_eq!(trainer.match_game().unwrap().score(), 0);

    for pair_id in 0..3 {
        let game = trainer.match_game_mut().unwrap();
        let ids: Vec<u32> =
            game.cards().iter().filter(|c| c.pair_id == pair_id).map(|c| c.id).collect();
        game.select_card(ids[0]);
        game.select_card(ids[1]);
        trainer.tick(500);
    }
    let game = trainer.match_game().unwrap();
    assert_eq!(game.score(), 30);
    assert_eq!(game.state(), MatchState::InProgress);
    assert!(ui_adapter::match_results_view(game).is_none());

    trainer.tick(1000);
    let game = trainer.match_game().unwrap();
    assert_eq!(game.state(), MatchState::Completed);
    let results = ui_adapter::match_results_view(game).unwrap();
    assert_eq!(results["matched_pairs"], 3);
    assert_eq!(results["pairs"].as_array().unwrap().len(), 3);

    trainer.tick(10_000);
    assert_eq!(trainer.match_game().unwrap().state(), MatchState::Completed);
}

#[test]
fn restart_match_keeps_the_same_pair_count() {
    let mut trainer = loaded_trainer(2);
    trainer.start_match(Some(4)).unwrap();
    trainer.tick(3000);
    trainer.restart_match().unwrap();
    let game = trainer.match_game().unwrap();
    assert_eq!(game.total_pairs(), 4);
    assert_eq!(game.elapsed_secs(), 0);
    assert_eq!(game.pending_tasks(), 1, "exactly one timer after restart");
}

// ── trainer ──────────────────────────────────────────────────────────────────

#[test]
fn gated_screens_need_loaded_data() {
    let mut trainer = Trainer::new(EngineConfig::default(), Some(1)).unwrap();
    assert!(trainer.show(Screen::Home).is_ok());
    for screen in [Screen::Vocabulary, Screen::Synonym, Screen::Test] {
        assert!(matches!(trainer.show(screen), Err(EngineError::DataNotLoaded)));
    }
    assert!(matches!(
        trainer.start_quiz(TestMode::Synonym, QuestionCount::Default),
        Err(EngineError::DataNotLoaded)
    ));
    assert!(matches!(trainer.start_match(None), Err(EngineError::DataNotLoaded)));
    assert!(matches!(trainer.start_flashcards(), Err(EngineError::DataNotLoaded)));
}

#[test]
fn failed_load_keeps_the_gate_closed() {
    let mut trainer = Trainer::new(EngineConfig::default(), Some(1)).unwrap();
    let result = trainer.install(VocabularyStore::from_json("not json", "[]"));
    assert!(matches!(result, Err(EngineError::Parse { .. })));
    assert!(!trainer.is_data_loaded());
    assert!(trainer.show(Screen::Vocabulary).is_err());
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let config = EngineConfig { option_count: 1, ..EngineConfig::default() };
    assert!(matches!(Trainer::new(config, Some(1)), Err(EngineError::InvalidConfig(_))));
    let config = EngineConfig { timer_period_ms: 0, ..EngineConfig::default() };
    assert!(matches!(Trainer::new(config, None), Err(EngineError::InvalidConfig(_))));
}

#[test]
fn installing_new_data_ends_the_running_session() {
    let mut trainer = loaded_trainer(10);
    trainer.start_match(Some(4)).unwrap();
    assert!(trainer.match_game().is_some());

    let smaller = VocabularyStore::from_json(
        r#"[{"eng": "cat", "thai": "แมว"}, {"eng": "dog", "thai": "สุนัข"}]"#,
        "[]",
    )
    .unwrap();
    trainer.install(Ok(smaller)).unwrap();
    assert!(trainer.match_game().is_none());
    trainer.restart_match().unwrap();
    assert!(trainer.match_game().is_none());

    trainer.start_match(None).unwrap();
    assert_eq!(trainer.match_game().unwrap().total_pairs(), 2);
}

#[test]
fn default_question_count_is_ten() {
    let mut trainer = loaded_trainer(3);
    trainer.start_quiz(TestMode::SourceToTarget, QuestionCount::Default).unwrap();
    assert_eq!(trainer.quiz().unwrap().questions().len(), 10);
    trainer.start_quiz(TestMode::Synonym, QuestionCount::Default).unwrap();
    assert_eq!(trainer.quiz().unwrap().questions().len(), 6);
}

#[test]
fn navigating_away_drops_the_session_and_its_pending_work() {
    let mut trainer = loaded_trainer(9);
    trainer.start_quiz(TestMode::SourceToTarget, QuestionCount::Custom(3)).unwrap();
    let quiz = trainer.quiz_mut().unwrap();
    let answer = quiz.current_question().unwrap().correct_answer.clone();
    quiz.answer(&answer);
    assert_eq!(quiz.pending_tasks(), 1);

    trainer.show(Screen::Vocabulary).unwrap();
    assert!(trainer.quiz().is_none());
    trainer.tick(5000);
    assert!(trainer.quiz().is_none());

    trainer.start_match(None).unwrap();
    trainer.back_to_selection();
    assert!(trainer.match_game().is_none());
}

#[test]
fn same_seed_reproduces_the_same_session() {
    let make = |seed| {
        let mut t = loaded_trainer(seed);
        t.start_quiz(TestMode::Synonym, QuestionCount::Max).unwrap();
        t.quiz().unwrap().questions().to_vec()
    };
    assert_eq!(make(12345), make(12345));
}

#[test]
fn flashcards_cover_the_whole_vocabulary() {
    let mut trainer = loaded_trainer(6);
    trainer.start_flashcards().unwrap();
    let total = trainer.store().unwrap().words().len();
    let deck = trainer.flashcards_mut().unwrap();
    assert_eq!(deck.len(), total);
    let mut seen = HashSet::new();
    loop {
        seen.insert(deck.current().term.clone());
        if !deck.next() {
            break;
        }
    }
    assert_eq!(seen.len(), total);
    trainer.shuffle_flashcards();
    assert_eq!(trainer.flashcards().unwrap().index(), 0);
}

#[test]
fn configured_option_count_and_delay_reach_the_quiz() {
    let config = EngineConfig::from_json_str(r#"{"option_count": 3, "feedback_delay_ms": 200}"#).unwrap();
    let mut trainer = Trainer::new(config, Some(4)).unwrap();
    trainer.install(Ok(sample_store())).unwrap();
    trainer.start_quiz(TestMode::SourceToTarget, QuestionCount::Custom(2)).unwrap();

    let quiz = trainer.quiz_mut().unwrap();
    let q = quiz.current_question().unwrap().clone();
    assert_eq!(q.options.len(), 3);
    quiz.answer(&q.correct_answer);
    trainer.tick(200);
    assert_eq!(trainer.quiz().unwrap().current_index(), 1);
}

// ── ui adapter ───────────────────────────────────────────────────────────────

#[test]
fn quiz_view_locks_options_after_an_answer() {
    let mut trainer = loaded_trainer(13);
    trainer.start_quiz(TestMode::SourceToTarget, QuestionCount::Custom(2)).unwrap();

    let view = ui_adapter::quiz_view(trainer.quiz().unwrap());
    assert_eq!(view["progress"], "Question 1 of 2");
    assert!(view["options"].as_array().unwrap().iter().all(|o| o["enabled"] == true));

    let quiz = trainer.quiz_mut().unwrap();
    let answer = quiz.current_question().unwrap().correct_answer.clone();
    quiz.answer(&answer);
    let view = ui_adapter::quiz_view(trainer.quiz().unwrap());
    let options = view["options"].as_array().unwrap();
    assert!(options.iter().all(|o| o["enabled"] == false));
    assert_eq!(options.iter().filter(|o| o["status"] == "correct").count(), 1);
    assert_eq!(options.iter().filter(|o| o["status"] == "incorrect").count(), 0);
}

#[test]
fn board_view_reports_every_card() {
    let mut trainer = loaded_trainer(17);
    trainer.start_match(Some(5)).unwrap();
    trainer.tick(2000);
    let view = ui_adapter::match_board_view(trainer.match_game().unwrap());
    assert_eq!(view["cards"].as_array().unwrap().len(), 10);
    assert_eq!(view["total_pairs"], 5);
    assert_eq!(view["timer"], "00:02");
    assert!(view["cards"].as_array().unwrap().iter().all(|c| c["visual"] == "idle"));
}
