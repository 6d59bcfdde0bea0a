//! Reference strategy charts: read-only tables mapping a lookup key (`"BTN"`,
//! `"BB_vs_CO"`, `"HJ_vs_BTN"`) to the ranges that raise and call. Anything
//! outside both ranges folds.

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

use crate::training_engine::{error::TrainerError, range::Range};

const BUNDLED_RANGES: &str = include_str!("data/ranges.json");

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRanges {
    pub raise: Range,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call: Option<Range>,
}

pub type StrategyTable = BTreeMap<String, ActionRanges>;

/// The tables for one table format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSet {
    pub rfi: StrategyTable,
    pub defense: StrategyTable,
    pub vs_3bet: StrategyTable,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyBook {
    pub cash_6max: TableSet,
    pub mtt_9max: TableSet,
}

impl StrategyBook {
    pub fn from_json(json: &str) -> Result<StrategyBook, TrainerError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The chart shipped with the crate.
    pub fn bundled() -> Result<StrategyBook, TrainerError> {
        StrategyBook::from_json(BUNDLED_RANGES)
    }
}
