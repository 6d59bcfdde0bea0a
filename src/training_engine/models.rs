use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::training_engine::error::TrainerError;

// ---------------------------------------------------------------------------
// Card primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suit::Clubs => write!(f, "c"),
            Suit::Diamonds => write!(f, "d"),
            Suit::Hearts => write!(f, "h"),
            Suit::Spades => write!(f, "s"),
        }
    }
}

/// Rank 2..=14 where 14 = Ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(pub u8);

impl Rank {
    pub const TEN: Rank = Rank(10);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);
    pub const ACE: Rank = Rank(14);

    /// All thirteen ranks, highest first (the order of the range grid).
    pub fn descending() -> impl Iterator<Item = Rank> {
        (2u8..=14).rev().map(Rank)
    }

    pub fn symbol(self) -> &'static str {
        match self.0 {
            2 => "2", 3 => "3", 4 => "4", 5 => "5", 6 => "6",
            7 => "7", 8 => "8", 9 => "9", 10 => "T",
            11 => "J", 12 => "Q", 13 => "K", 14 => "A",
            _ => "?",
        }
    }

    /// Parse a single rank character. Only the canonical upper-case symbols
    /// are accepted.
    pub fn from_char(c: char) -> Option<Rank> {
        let value = match c {
            '2'..='9' => c as u8 - b'0',
            'T' => 10,
            'J' => 11,
            'Q' => 12,
            'K' => 13,
            'A' => 14,
            _ => return None,
        };
        Some(Rank(value))
    }

    /// Zero-based position in the low-to-high ordering (2 = 0, A = 12).
    pub fn index(self) -> u8 {
        self.0.saturating_sub(2)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

// ---------------------------------------------------------------------------
// Hands and canonical hand codes
// ---------------------------------------------------------------------------

/// Two distinct hole cards, stored highest rank first. Serialized as a
/// two-card array; decoding goes through [`Hand::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[Card; 2]", into = "[Card; 2]")]
pub struct Hand {
    cards: [Card; 2],
}

impl Hand {
    /// Returns `None` when both cards are the same card.
    pub fn new(a: Card, b: Card) -> Option<Hand> {
        if a == b {
            return None;
        }
        let cards = if b.rank > a.rank { [b, a] } else { [a, b] };
        Some(Hand { cards })
    }

    pub fn cards(&self) -> [Card; 2] {
        self.cards
    }

    pub fn code(&self) -> HandCode {
        let [a, b] = self.cards;
        let shape = if a.rank == b.rank {
            Shape::Pair
        } else if a.suit == b.suit {
            Shape::Suited
        } else {
            Shape::Offsuit
        };
        HandCode { high: a.rank, low: b.rank, shape }
    }
}

impl TryFrom<[Card; 2]> for Hand {
    type Error = TrainerError;

    fn try_from([a, b]: [Card; 2]) -> Result<Self, Self::Error> {
        Hand::new(a, b).ok_or_else(|| TrainerError::DuplicateCard(a.to_string()))
    }
}

impl From<Hand> for [Card; 2] {
    fn from(hand: Hand) -> [Card; 2] {
        hand.cards
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.cards[0], self.cards[1])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Shape {
    Pair,
    Suited,
    Offsuit,
}

/// Strategically unique identity of a starting hand: `"AA"`, `"AKs"`, `"T9o"`.
///
/// Always canonical: `high >= low`, and `shape == Pair` exactly when the ranks
/// are equal. There are 169 distinct codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HandCode {
    pub high: Rank,
    pub low: Rank,
    pub shape: Shape,
}

impl HandCode {
    pub fn pair(rank: Rank) -> HandCode {
        HandCode { high: rank, low: rank, shape: Shape::Pair }
    }

    /// Ranks may come in either order. Equal ranks give the pair.
    pub fn suited(a: Rank, b: Rank) -> HandCode {
        HandCode::unpaired(a, b, Shape::Suited)
    }

    /// Ranks may come in either order. Equal ranks give the pair.
    pub fn offsuit(a: Rank, b: Rank) -> HandCode {
        HandCode::unpaired(a, b, Shape::Offsuit)
    }

    fn unpaired(a: Rank, b: Rank, shape: Shape) -> HandCode {
        match a.cmp(&b) {
            Ordering::Equal   => HandCode::pair(a),
            Ordering::Greater => HandCode { high: a, low: b, shape },
            Ordering::Less    => HandCode { high: b, low: a, shape },
        }
    }

    pub fn is_pair(&self) -> bool {
        self.shape == Shape::Pair
    }

    /// Lenient parse used by the range engine: anything that is not a
    /// canonical code yields `None` instead of an error.
    pub fn parse(s: &str) -> Option<HandCode> {
        let mut chars = s.chars();
        let high = Rank::from_char(chars.next()?)?;
        let low = Rank::from_char(chars.next()?)?;
        let shape = match (chars.next(), chars.next()) {
            (None, _) if high == low => Shape::Pair,
            (Some('s'), None) if high > low => Shape::Suited,
            (Some('o'), None) if high > low => Shape::Offsuit,
            _ => return None,
        };
        Some(HandCode { high, low, shape })
    }

    /// All 169 codes in grid order: row-major over ranks high-to-low, with
    /// pairs on the diagonal, suited above it and offsuit below it.
    pub fn all() -> impl Iterator<Item = HandCode> {
        Rank::descending().flat_map(|row| {
            Rank::descending().map(move |col| {
                if row == col {
                    HandCode::pair(row)
                } else if row > col {
                    HandCode::suited(row, col)
                } else {
                    HandCode::offsuit(col, row)
                }
            })
        })
    }
}

impl fmt::Display for HandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shape {
            Shape::Pair    => write!(f, "{}{}", self.high, self.low),
            Shape::Suited  => write!(f, "{}{}s", self.high, self.low),
            Shape::Offsuit => write!(f, "{}{}o", self.high, self.low),
        }
    }
}

impl FromStr for HandCode {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HandCode::parse(s.trim()).ok_or_else(|| TrainerError::InvalidHandCode(s.to_string()))
    }
}

impl TryFrom<String> for HandCode {
    type Error = TrainerError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<HandCode> for String {
    fn from(code: HandCode) -> String {
        code.to_string()
    }
}

// ---------------------------------------------------------------------------
// Table / game metadata
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameType {
    /// 6-max cash game.
    CashGame,
    /// 9-max tournament.
    Tournament,
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameType::CashGame => write!(f, "Cash Game"),
            GameType::Tournament => write!(f, "Tournament"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    UTG,
    UTG1,
    UTG2,
    LJ,   // Lojack
    HJ,   // Hijack
    CO,   // Cutoff
    BTN,  // Button
    SB,   // Small Blind
    BB,   // Big Blind
}

/// 6-max seats in action order; the big blind is last.
pub const POSITIONS_6MAX: &[Position] = &[
    Position::UTG, Position::HJ, Position::CO,
    Position::BTN, Position::SB, Position::BB,
];

/// 9-max seats in action order; the big blind is last.
pub const POSITIONS_9MAX: &[Position] = &[
    Position::UTG, Position::UTG1, Position::UTG2,
    Position::LJ, Position::HJ, Position::CO,
    Position::BTN, Position::SB, Position::BB,
];

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::UTG  => "UTG",
            Position::UTG1 => "UTG+1",
            Position::UTG2 => "UTG+2",
            Position::LJ   => "Lojack",
            Position::HJ   => "Hijack",
            Position::CO   => "Cutoff",
            Position::BTN  => "Button",
            Position::SB   => "Small Blind",
            Position::BB   => "Big Blind",
        };
        write!(f, "{}", s)
    }
}

impl Position {
    /// Short name used in strategy-table lookup keys (`"BTN"`, `"BB_vs_CO"`).
    pub fn key(self) -> &'static str {
        match self {
            Position::UTG  => "UTG",
            Position::UTG1 => "UTG1",
            Position::UTG2 => "UTG2",
            Position::LJ   => "LJ",
            Position::HJ   => "HJ",
            Position::CO   => "CO",
            Position::BTN  => "BTN",
            Position::SB   => "SB",
            Position::BB   => "BB",
        }
    }
}

// ---------------------------------------------------------------------------
// Training modes, scenarios and actions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainingMode {
    #[serde(rename = "rfi")]
    Rfi,
    #[serde(rename = "mtt_rfi")]
    MttRfi,
    #[serde(rename = "def")]
    Defense,
    #[serde(rename = "vs_3bet")]
    Vs3Bet,
    #[serde(rename = "custom")]
    Custom,
    #[serde(rename = "campaign")]
    Campaign,
}

impl TrainingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            TrainingMode::Rfi      => "rfi",
            TrainingMode::MttRfi   => "mtt_rfi",
            TrainingMode::Defense  => "def",
            TrainingMode::Vs3Bet   => "vs_3bet",
            TrainingMode::Custom   => "custom",
            TrainingMode::Campaign => "campaign",
        }
    }

    /// Single-decision modes are the only ones the adaptive filter applies to.
    pub fn is_adaptive_eligible(self) -> bool {
        matches!(self, TrainingMode::Rfi | TrainingMode::Defense)
    }
}

impl fmt::Display for TrainingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TrainingMode {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rfi"      => Ok(TrainingMode::Rfi),
            "mtt_rfi"  => Ok(TrainingMode::MttRfi),
            "def"      => Ok(TrainingMode::Defense),
            "vs_3bet"  => Ok(TrainingMode::Vs3Bet),
            "custom"   => Ok(TrainingMode::Custom),
            "campaign" => Ok(TrainingMode::Campaign),
            other      => Err(TrainerError::UnknownMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioKind {
    Rfi,
    Defense,
    Vs3Bet,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VillainAction {
    Raise,
    ThreeBet,
}

/// One positional decision spot. Built fresh per hand and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub kind: ScenarioKind,
    pub game_type: GameType,
    pub hero: Position,
    pub villain: Option<Position>,
    pub villain_action: Option<VillainAction>,
    /// Key into the strategy tables; `None` for custom-range scenarios.
    pub lookup_key: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Fold,
    Call,
    Raise,
    /// Synthesized by the session clock when the player does not act in time.
    Timeout,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Fold    => write!(f, "fold"),
            Action::Call    => write!(f, "call"),
            Action::Raise   => write!(f, "raise"),
            Action::Timeout => write!(f, "timeout"),
        }
    }
}

/// Qualitative strength bucket used only to pace difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandTier {
    Monster,
    Marginal,
    Trash,
}

impl fmt::Display for HandTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandTier::Monster  => write!(f, "monster"),
            HandTier::Marginal => write!(f, "marginal"),
            HandTier::Trash    => write!(f, "trash"),
        }
    }
}

/// Caller-owned pacing state read by the adaptive hand generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyState {
    pub streak: u32,
    pub adaptive: bool,
}

/// Per-code outcome tally. Accepts the short `w`/`l` keys of older saves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandRecord {
    #[serde(alias = "w")]
    pub win_count: u32,
    #[serde(alias = "l")]
    pub loss_count: u32,
}

impl HandRecord {
    pub fn total(&self) -> u32 {
        self.win_count + self.loss_count
    }

    /// Share of correct answers, or `None` before the code has been played.
    pub fn win_rate(&self) -> Option<f64> {
        match self.total() {
            0 => None,
            n => Some(f64::from(self.win_count) / f64::from(n)),
        }
    }

    /// Whole-percent win rate, rounded half up.
    pub fn win_percent(&self) -> Option<u32> {
        let n = u64::from(self.total());
        if n == 0 {
            return None;
        }
        let percent = (u64::from(self.win_count) * 200 + n) / (2 * n);
        Some(percent as u32)
    }

    pub fn mastery(&self) -> Mastery {
        match self.win_percent() {
            None              => Mastery::NoData,
            Some(p) if p < 50 => Mastery::Leak,
            Some(p) if p > 80 => Mastery::Mastered,
            Some(_)           => Mastery::Ok,
        }
    }
}

/// Per-code verdict for the stats view. Thresholds apply to the rounded
/// percentage: below 50 leaks, above 80 is mastered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mastery {
    NoData,
    Leak,
    Ok,
    Mastered,
}

impl fmt::Display for Mastery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mastery::NoData   => write!(f, "No Data"),
            Mastery::Leak     => write!(f, "LEAK"),
            Mastery::Ok       => write!(f, "OK"),
            Mastery::Mastered => write!(f, "MASTERED"),
        }
    }
}
