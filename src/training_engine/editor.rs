//! Explicit-list editing of the player's custom range.
//!
//! The editor works on one code per hand, so a compact range is exploded on
//! the way in. Additive edits never introduce duplicates.

use serde::{Deserialize, Serialize};

use crate::training_engine::{
    models::{HandCode, Position, Rank, Shape},
    range::Range,
    strategy::StrategyBook,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeEdit {
    Clear,
    /// Select all 169 hands.
    Fill,
    Pairs,
    Suited,
    Offsuit,
    /// Every hand made of two cards from AKQJT.
    Broadway,
    Toggle(HandCode),
    /// Replace the selection with the 6-max open-raise chart for a seat.
    Preset(Position),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeEditor {
    codes: Vec<HandCode>,
}

impl RangeEditor {
    pub fn from_range(range: &Range) -> RangeEditor {
        RangeEditor { codes: range.expand() }
    }

    pub fn codes(&self) -> &[HandCode] {
        &self.codes
    }

    pub fn contains(&self, code: &HandCode) -> bool {
        self.codes.contains(code)
    }

    pub fn to_range(&self) -> Range {
        self.codes.iter().copied().collect()
    }

    pub fn apply(&mut self, edit: RangeEdit, book: &StrategyBook) {
        match edit {
            RangeEdit::Clear => self.codes.clear(),
            RangeEdit::Fill => self.codes = HandCode::all().collect(),
            RangeEdit::Pairs => self.extend(|c| c.shape == Shape::Pair),
            RangeEdit::Suited => self.extend(|c| c.shape == Shape::Suited),
            RangeEdit::Offsuit => self.extend(|c| c.shape == Shape::Offsuit),
            RangeEdit::Broadway => self.extend(|c| c.low >= Rank::TEN),
            RangeEdit::Toggle(code) => {
                if let Some(i) = self.codes.iter().position(|c| *c == code) {
                    self.codes.remove(i);
                } else {
                    self.codes.push(code);
                }
            }
            RangeEdit::Preset(position) => match book.cash_6max.rfi.get(position.key()) {
                Some(chart) => self.codes = chart.raise.expand(),
                None => log::warn!("no open-raise preset for {}", position.key()),
            },
        }
    }

    fn extend(&mut self, pick: impl Fn(&HandCode) -> bool) {
        for code in HandCode::all().filter(|c| pick(c)) {
            if !self.codes.contains(&code) {
                self.codes.push(code);
            }
        }
    }
}
