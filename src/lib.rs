//! # preflop_drill_gen
//!
//! An offline preflop decision trainer. Each drill deals a two-card hand into a
//! table scenario (open-raise, big blind defense, facing a 3-bet, or a
//! player-defined range), asks for fold / call / raise, and judges the answer
//! against a bundled strategy chart.
//!
//! ## How it works
//!
//! 1. Build a [`TrainingRequest`] with a mode, the current difficulty state and
//!    an optional RNG seed, or keep a [`TrainingSession`] that tracks that
//!    state for you.
//! 2. A hand is drawn (rejection-sampled by streak when adaptive difficulty is
//!    on), a scenario is built for the mode, and the correct action is looked
//!    up from the chart.
//! 3. After the player answers, [`TrainingSession::submit`] returns a
//!    [`HandResult`] and [`presentation::to_feedback_json`] renders it together
//!    with the full 13x13 strategy grid.
//!
//! ## Quick start
//!
//! ```rust
//! use preflop_drill_gen::{
//!     generate_drill, Action, SessionConfig, StrategyBook, TrainingMode, TrainingRequest,
//!     TrainingSession,
//! };
//! use rand::SeedableRng;
//!
//! let book = StrategyBook::bundled().expect("bundled chart parses");
//!
//! // Stateless, seeded:
//! let request = TrainingRequest { rng_seed: Some(42), ..TrainingRequest::new(TrainingMode::Rfi) };
//! let drill = generate_drill(&request, &book, None);
//! println!("{} at {}: {}", drill.code, drill.scenario.hero.key(), drill.correct);
//!
//! // Stateful session:
//! let mut session = TrainingSession::new(SessionConfig::default(), book);
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! session.deal(&mut rng);
//! let result = session.submit(Action::Fold).expect("a hand is in play");
//! println!("correct: {} (streak {})", result.is_correct, result.streak);
//! ```

pub mod presentation;
pub mod training_engine;

// Convenience re-exports so callers can use `preflop_drill_gen::generate_drill`
// directly without reaching into `training_engine::`.
pub use training_engine::{
    generate_drill, Action, Card, DifficultyState, Drill, GameType, Hand, HandCode, HandRecord,
    HandResult, HandTier, Mastery, Position, Range, Scenario, ScenarioKind, SessionConfig,
    StrategyBook, TrainerError, TrainingMode, TrainingRequest, TrainingSession,
};
