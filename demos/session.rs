//! Scripted training session.
//!
//! Run with: `cargo run --example session`
//! (set `RUST_LOG=debug` to see the engine's drill and campaign logging)
//!
//! The demo walks through the main surfaces of `preflop_drill_gen`:
//!
//! 1. **Stateless drills**: one seeded `generate_drill` per training mode.
//! 2. **Session play**: a `TrainingSession` answering from a fixed policy, so
//!    some hands are right and some wrong, with adaptive pacing switched on.
//! 3. **Feedback payload**: the JSON handed to a UI for the last hand.
//! 4. **Persistence**: progress saved to a `MemoryStore` and restored.

use preflop_drill_gen::{
    generate_drill, presentation,
    training_engine::{
        editor::{RangeEdit, RangeEditor},
        models::Position,
        storage::MemoryStore,
    },
    Action, HandTier, SessionConfig, StrategyBook, TrainingMode, TrainingRequest,
    TrainingSession,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const MODES: [TrainingMode; 6] = [
    TrainingMode::Rfi,
    TrainingMode::MttRfi,
    TrainingMode::Defense,
    TrainingMode::Vs3Bet,
    TrainingMode::Custom,
    TrainingMode::Campaign,
];

/// A deliberately naive player: raise monsters, call marginal hands, fold trash.
fn naive_policy(tier: HandTier) -> Action {
    match tier {
        HandTier::Monster  => Action::Raise,
        HandTier::Marginal => Action::Call,
        HandTier::Trash    => Action::Fold,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::try_init().ok();
    let book = StrategyBook::bundled()?;

    // ── 1. one drill per mode ───────────────────────────────────────────────
    println!("=== Stateless drills ===");
    for (i, mode) in MODES.into_iter().enumerate() {
        let request = TrainingRequest { rng_seed: Some(100 + i as u64), ..TrainingRequest::new(mode) };
        let drill = generate_drill(&request, &book, None);
        let villain = drill
            .scenario
            .villain
            .map(|v| format!(" vs {}", v.key()))
            .unwrap_or_default();
        println!(
            "{:<12} {:<8} {} ({:<4}) at {}{} -> {}",
            drill.drill_id, mode, drill.hand, drill.code, drill.scenario.hero.key(), villain, drill.correct,
        );
    }

    // ── 2. session play ─────────────────────────────────────────────────────
    println!("\n=== Session (defense, adaptive) ===");
    let config = SessionConfig { mode: TrainingMode::Defense, adaptive: true, ..SessionConfig::default() };
    let mut session = TrainingSession::new(config, book.clone());
    let mut rng = StdRng::seed_from_u64(2024);
    let mut last = None;
    for _ in 0..12 {
        let tier = session.deal(&mut rng).tier;
        if let Some(result) = session.submit(naive_policy(tier)) {
            let mark = if result.is_correct { "+" } else { " " };
            println!(
                "[{mark}] {:<4} {:<8} played {:<5} correct {:<5} streak {}",
                result.drill.code, result.drill.tier, result.submitted, result.correct, result.streak,
            );
            last = Some(result);
        }
    }

    // ── 3. feedback payload ─────────────────────────────────────────────────
    if let Some(result) = &last {
        let grid = session.grid_for(&result.drill);
        let payload = presentation::to_feedback_json(result, &grid);
        println!("\n=== Feedback ===\n{}", payload["summary"]);
        println!("grid cells: {}", grid.len());
    }

    // ── 4. custom range + persistence ───────────────────────────────────────
    let mut editor = RangeEditor::from_range(session.custom_range());
    editor.apply(RangeEdit::Preset(Position::CO), &book);
    editor.apply(RangeEdit::Pairs, &book);
    session.save_custom_range(editor.to_range());
    println!("\n=== Custom range ===\n{}", session.custom_range().to_wire());

    let mut store = MemoryStore::new();
    session.persist(&mut store)?;
    let mut restored = TrainingSession::new(SessionConfig::default(), book);
    restored.restore(&store);
    println!(
        "\nrestored: {} hands played, {} distinct codes tracked",
        restored.total_hands(),
        restored.hand_stats().len(),
    );
    for (code, record) in restored.hand_stats() {
        println!("  {:<4} {}-{} {}", code.to_string(), record.win_count, record.loss_count, record.mastery());
    }
    Ok(())
}
