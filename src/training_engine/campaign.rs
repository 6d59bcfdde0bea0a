//! Campaign ladder: a fixed sequence of levels, each cleared by reaching a
//! streak target on that level's scenarios.

use serde::{Deserialize, Serialize};

use crate::training_engine::models::Position;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LevelConfig {
    /// Open-raise spots restricted to `allowed` hero seats.
    Rfi { allowed: Vec<Position> },
    /// Big-blind defense against a single raise.
    Defense,
    /// 60% open-raise, 40% defense.
    Mixed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignLevel {
    pub name: String,
    /// Consecutive correct answers needed to clear the level.
    pub target: u32,
    pub config: LevelConfig,
}

impl CampaignLevel {
    fn new(name: &str, target: u32, config: LevelConfig) -> CampaignLevel {
        CampaignLevel { name: name.to_string(), target, config }
    }
}

pub fn bundled_levels() -> Vec<CampaignLevel> {
    use Position::*;
    vec![
        CampaignLevel::new("Button Basics", 5, LevelConfig::Rfi { allowed: vec![BTN] }),
        CampaignLevel::new("Late Position", 8, LevelConfig::Rfi { allowed: vec![CO, BTN] }),
        CampaignLevel::new("Full Table Opens", 10, LevelConfig::Rfi { allowed: vec![UTG, HJ, CO, BTN, SB] }),
        CampaignLevel::new("Big Blind Defense", 10, LevelConfig::Defense),
        CampaignLevel::new("Final Exam", 15, LevelConfig::Mixed),
    ]
}

/// Where the player stands on the ladder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignProgress {
    pub level_index: usize,
    pub streak: u32,
}

impl CampaignProgress {
    /// Record one judged hand. Returns the index of the level just cleared,
    /// if any. The last level can be played forever but never advances.
    pub fn record(&mut self, correct: bool, levels: &[CampaignLevel]) -> Option<usize> {
        if !correct {
            self.streak = 0;
            return None;
        }
        self.streak += 1;
        let level = levels.get(self.level_index)?;
        if self.streak >= level.target && self.level_index + 1 < levels.len() {
            let cleared = self.level_index;
            self.level_index += 1;
            self.streak = 0;
            log::debug!("campaign level '{}' cleared", level.name);
            return Some(cleared);
        }
        None
    }

    pub fn current<'a>(&self, levels: &'a [CampaignLevel]) -> Option<&'a CampaignLevel> {
        levels.get(self.level_index)
    }
}
