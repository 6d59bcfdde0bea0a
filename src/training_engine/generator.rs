use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::training_engine::{
    adaptive::{generate_hand_with_limit, DEFAULT_MAX_ATTEMPTS},
    campaign::CampaignLevel,
    evaluator::classify,
    models::{Action, DifficultyState, Hand, HandCode, HandTier, Scenario, TrainingMode},
    range::Range,
    resolver::correct_action,
    scenario::next_scenario,
    strategy::StrategyBook,
};

/// Everything needed to generate one drill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingRequest {
    pub mode: TrainingMode,
    pub difficulty: DifficultyState,
    /// Only read in campaign mode.
    pub campaign_level: Option<CampaignLevel>,
    pub rng_seed: Option<u64>,
}

impl TrainingRequest {
    /// Defaults: streak 0, adaptive off, no campaign level, entropy seed.
    pub fn new(mode: TrainingMode) -> TrainingRequest {
        TrainingRequest {
            mode,
            difficulty: DifficultyState::default(),
            campaign_level: None,
            rng_seed: None,
        }
    }
}

/// One dealt hand in its scenario, with the answer already resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drill {
    pub drill_id: String,
    pub mode: TrainingMode,
    pub scenario: Scenario,
    pub hand: Hand,
    pub code: HandCode,
    pub tier: HandTier,
    pub correct: Action,
}

fn make_drill_id(mode: TrainingMode, rng: &mut impl RngCore) -> String {
    let prefix = match mode {
        TrainingMode::Rfi      => "RF",
        TrainingMode::MttRfi   => "MT",
        TrainingMode::Defense  => "DF",
        TrainingMode::Vs3Bet   => "3B",
        TrainingMode::Custom   => "CU",
        TrainingMode::Campaign => "CP",
    };
    format!("{}-{:08X}", prefix, rng.next_u32())
}

/// Draw a hand, build its scenario and resolve the correct action.
///
/// The hand is drawn before the scenario, so a seeded `rng` reproduces both.
pub fn deal_drill<R: Rng>(
    rng: &mut R,
    mode: TrainingMode,
    difficulty: &DifficultyState,
    level: Option<&CampaignLevel>,
    custom: Option<&Range>,
    book: &StrategyBook,
    max_attempts: u32,
) -> Drill {
    let drill_id = make_drill_id(mode, rng);
    let hand = generate_hand_with_limit(rng, mode, difficulty, max_attempts);
    let scenario = next_scenario(rng, mode, level);
    let code = hand.code();
    let correct = correct_action(&scenario, &code, mode, custom, book);
    log::debug!(
        "{drill_id}: {} {code} at {} -> {correct}",
        mode, scenario.hero.key()
    );
    Drill {
        drill_id,
        mode,
        tier: classify(&code),
        scenario,
        hand,
        code,
        correct,
    }
}

/// Single entry point for stateless callers.
pub fn generate_drill(
    request: &TrainingRequest,
    book: &StrategyBook,
    custom: Option<&Range>,
) -> Drill {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    deal_drill(
        &mut rng,
        request.mode,
        &request.difficulty,
        request.campaign_level.as_ref(),
        custom,
        book,
        DEFAULT_MAX_ATTEMPTS,
    )
}
