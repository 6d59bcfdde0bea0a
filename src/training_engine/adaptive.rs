//! Streak-gated rejection sampling.
//!
//! | Streak   | Band         | Accepted tiers        |
//! |----------|--------------|-----------------------|
//! | 0..5     | `Open`       | any                   |
//! | 5..15    | `Borderline` | anything but monster/trash |
//! | 15..     | `Edge`       | marginal only         |
//!
//! The filter only runs in the single-decision modes (RFI, defense) with
//! adaptive pacing switched on. Draws are capped; when the cap is hit the last
//! draw is returned as-is.

use rand::Rng;

use crate::training_engine::{
    deck::deal_hand,
    evaluator::classify,
    models::{DifficultyState, Hand, HandTier, TrainingMode},
};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyBand {
    Open,
    Borderline,
    Edge,
}

impl DifficultyBand {
    pub fn for_streak(streak: u32) -> DifficultyBand {
        match streak {
            0..=4  => DifficultyBand::Open,
            5..=14 => DifficultyBand::Borderline,
            _      => DifficultyBand::Edge,
        }
    }

    pub fn accepts(self, tier: HandTier) -> bool {
        match self {
            DifficultyBand::Open       => true,
            DifficultyBand::Borderline => !matches!(tier, HandTier::Monster | HandTier::Trash),
            DifficultyBand::Edge       => tier == HandTier::Marginal,
        }
    }
}

/// Band to apply for this mode and pacing state, or `None` when every hand is
/// accepted unfiltered.
pub fn active_band(mode: TrainingMode, state: &DifficultyState) -> Option<DifficultyBand> {
    if !state.adaptive || !mode.is_adaptive_eligible() {
        return None;
    }
    Some(DifficultyBand::for_streak(state.streak))
}

pub fn generate_hand<R: Rng>(rng: &mut R, mode: TrainingMode, state: &DifficultyState) -> Hand {
    generate_hand_with_limit(rng, mode, state, DEFAULT_MAX_ATTEMPTS)
}

pub fn generate_hand_with_limit<R: Rng>(
    rng: &mut R,
    mode: TrainingMode,
    state: &DifficultyState,
    max_attempts: u32,
) -> Hand {
    let mut hand = deal_hand(rng);
    let Some(band) = active_band(mode, state) else {
        return hand;
    };

    for attempt in 1..max_attempts.max(1) {
        let tier = classify(&hand.code());
        if band.accepts(tier) {
            return hand;
        }
        log::trace!("rejected {} ({tier}) for {band:?}, attempt {attempt}", hand.code());
        hand = deal_hand(rng);
    }

    if !band.accepts(classify(&hand.code())) {
        log::debug!("draw limit {max_attempts} reached for {band:?}; keeping {}", hand.code());
    }
    hand
}
