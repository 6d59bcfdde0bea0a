//! Core training engine: dealing, range logic, strategy lookup and session state.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: cards, hand codes, positions, modes, scenarios, actions |
//! | `deck`      | 52-card deck and uniform two-card dealing |
//! | `evaluator` | Monster / marginal / trash tiering of the 169 hand codes |
//! | `range`     | Range token grammar, membership and expansion |
//! | `strategy`  | Bundled strategy chart, keyed by game type and scenario |
//! | `scenario`  | Random scenario construction per training mode |
//! | `resolver`  | Correct action for a code in a scenario, plus the 13x13 grid |
//! | `adaptive`  | Streak-driven difficulty bands and rejection sampling |
//! | `campaign`  | Level ladder and level-up bookkeeping |
//! | `generator` | Stateless `generate_drill()` entry point |
//! | `session`   | Stateful controller: deal, submit, persist, restore |
//! | `editor`    | Bulk and per-cell edits of a custom range |
//! | `storage`   | Key/value persistence seam |
//! | `config`    | Session settings with defaults |
//! | `error`     | `TrainerError` |

pub mod adaptive;
pub mod campaign;
pub mod config;
pub mod deck;
pub mod editor;
pub mod error;
pub mod evaluator;
pub mod generator;
pub mod models;
pub mod range;
pub mod resolver;
pub mod scenario;
pub mod session;
pub mod storage;
pub mod strategy;

pub use config::SessionConfig;
pub use error::TrainerError;
pub use generator::{generate_drill, Drill, TrainingRequest};
pub use models::{
    Action, Card, DifficultyState, GameType, Hand, HandCode, HandRecord, HandTier, Mastery,
    Position, Scenario, ScenarioKind, TrainingMode,
};
pub use range::Range;
pub use session::{HandResult, TrainingSession};
pub use strategy::StrategyBook;
