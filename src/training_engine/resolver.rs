use serde::{Deserialize, Serialize};

use crate::training_engine::{
    models::{Action, GameType, HandCode, Scenario, ScenarioKind, TrainingMode},
    range::{in_range, Range},
    strategy::{ActionRanges, StrategyBook, StrategyTable},
};

/// The single correct action for `code` in `scenario`.
///
/// Raise is checked first, then call, and anything else folds. A missing
/// table entry or an absent custom range also folds.
pub fn correct_action(
    scenario: &Scenario,
    code: &HandCode,
    mode: TrainingMode,
    custom: Option<&Range>,
    book: &StrategyBook,
) -> Action {
    if mode == TrainingMode::Custom {
        return custom_action(custom, code);
    }

    let tables = match scenario.game_type {
        GameType::CashGame   => &book.cash_6max,
        GameType::Tournament => &book.mtt_9max,
    };

    match scenario.kind {
        ScenarioKind::Rfi => match lookup(&tables.rfi, scenario) {
            Some(ranges) if ranges.raise.contains(code) => Action::Raise,
            _ => Action::Fold,
        },
        ScenarioKind::Vs3Bet  => three_way(lookup(&tables.vs_3bet, scenario), code),
        ScenarioKind::Defense => three_way(lookup(&tables.defense, scenario), code),
        ScenarioKind::Custom  => custom_action(custom, code),
    }
}

fn custom_action(custom: Option<&Range>, code: &HandCode) -> Action {
    if in_range(custom, code) { Action::Raise } else { Action::Fold }
}

fn lookup<'a>(table: &'a StrategyTable, scenario: &Scenario) -> Option<&'a ActionRanges> {
    let key = scenario.lookup_key.as_deref()?;
    let ranges = table.get(key);
    if ranges.is_none() {
        log::debug!("no strategy entry for '{key}'; folding");
    }
    ranges
}

fn three_way(ranges: Option<&ActionRanges>, code: &HandCode) -> Action {
    let Some(ranges) = ranges else {
        return Action::Fold;
    };
    if ranges.raise.contains(code) {
        Action::Raise
    } else if in_range(ranges.call.as_ref(), code) {
        Action::Call
    } else {
        Action::Fold
    }
}

/// A timed-out hand is always wrong, whatever the correct action was.
pub fn judge(submitted: Action, correct: Action) -> bool {
    submitted != Action::Timeout && submitted == correct
}

// ---------------------------------------------------------------------------
// Strategy grid
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub code: HandCode,
    pub action: Action,
}

/// Correct action for all 169 codes in grid order, for the feedback matrix.
pub fn strategy_grid(
    scenario: &Scenario,
    mode: TrainingMode,
    custom: Option<&Range>,
    book: &StrategyBook,
) -> Vec<GridCell> {
    HandCode::all()
        .map(|code| GridCell {
            code,
            action: correct_action(scenario, &code, mode, custom, book),
        })
        .collect()
}
