use rand::Rng;

use crate::training_engine::{
    campaign::{CampaignLevel, LevelConfig},
    models::{
        GameType, Position, Scenario, ScenarioKind, TrainingMode, VillainAction,
        POSITIONS_6MAX, POSITIONS_9MAX,
    },
};

// ---------------------------------------------------------------------------
// Position helpers
// ---------------------------------------------------------------------------

/// 6-max seats that can act before the big blind.
fn seats_6max() -> &'static [Position] {
    &POSITIONS_6MAX[..POSITIONS_6MAX.len() - 1]
}

fn seats_9max() -> &'static [Position] {
    &POSITIONS_9MAX[..POSITIONS_9MAX.len() - 1]
}

fn pick<R: Rng>(rng: &mut R, pool: &[Position]) -> Position {
    pool[rng.gen_range(0..pool.len())]
}

// ---------------------------------------------------------------------------
// Scenario builders
// ---------------------------------------------------------------------------

pub fn rfi(hero: Position, game_type: GameType) -> Scenario {
    Scenario {
        kind: ScenarioKind::Rfi,
        game_type,
        hero,
        villain: None,
        villain_action: None,
        lookup_key: Some(hero.key().to_string()),
    }
}

pub fn defense(villain: Position) -> Scenario {
    Scenario {
        kind: ScenarioKind::Defense,
        game_type: GameType::CashGame,
        hero: Position::BB,
        villain: Some(villain),
        villain_action: Some(VillainAction::Raise),
        lookup_key: Some(format!("BB_vs_{}", villain.key())),
    }
}

pub fn custom(hero: Position) -> Scenario {
    Scenario {
        kind: ScenarioKind::Custom,
        game_type: GameType::CashGame,
        hero,
        villain: None,
        villain_action: None,
        lookup_key: None,
    }
}

/// Hero opened from `hero` and faces a 3-bet from a later seat. With no later
/// seat the spot becomes a plain button open.
pub fn vs_3bet<R: Rng>(rng: &mut R, hero: Position) -> Scenario {
    let later = POSITIONS_6MAX
        .iter()
        .position(|&p| p == hero)
        .map_or(&[][..], |i| &POSITIONS_6MAX[i + 1..]);

    if later.is_empty() {
        log::debug!("no seat can 3-bet {}; dealing a button open instead", hero.key());
        return rfi(Position::BTN, GameType::CashGame);
    }

    let villain = pick(rng, later);
    Scenario {
        kind: ScenarioKind::Vs3Bet,
        game_type: GameType::CashGame,
        hero,
        villain: Some(villain),
        villain_action: Some(VillainAction::ThreeBet),
        lookup_key: Some(format!("{}_vs_{}", hero.key(), villain.key())),
    }
}

// ---------------------------------------------------------------------------
// Main generator
// ---------------------------------------------------------------------------

/// Build the next scenario for `mode`. `level` is only read in campaign mode;
/// a campaign without a level plays as a mixed level.
pub fn next_scenario<R: Rng>(
    rng: &mut R,
    mode: TrainingMode,
    level: Option<&CampaignLevel>,
) -> Scenario {
    match mode {
        TrainingMode::Rfi     => rfi(pick(rng, seats_6max()), GameType::CashGame),
        TrainingMode::MttRfi  => rfi(pick(rng, seats_9max()), GameType::Tournament),
        TrainingMode::Defense => defense(pick(rng, seats_6max())),
        TrainingMode::Custom  => custom(pick(rng, seats_6max())),
        TrainingMode::Vs3Bet  => {
            let hero = pick(rng, seats_6max());
            vs_3bet(rng, hero)
        }
        TrainingMode::Campaign => match level.map(|l| &l.config) {
            Some(LevelConfig::Rfi { allowed }) => {
                let pool = if allowed.is_empty() { seats_6max() } else { allowed.as_slice() };
                rfi(pick(rng, pool), GameType::CashGame)
            }
            Some(LevelConfig::Defense) => defense(pick(rng, seats_6max())),
            Some(LevelConfig::Mixed) | None => {
                if rng.gen_bool(0.6) {
                    rfi(pick(rng, seats_6max()), GameType::CashGame)
                } else {
                    defense(pick(rng, seats_6max()))
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training_engine::campaign::bundled_levels;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn rfi_mode_uses_non_blind_seats() {
        let mut rng = rng();
        let mut seen = HashSet::new();
        for _ in 0..500 {
            let s = next_scenario(&mut rng, TrainingMode::Rfi, None);
            assert_eq!(s.kind, ScenarioKind::Rfi);
            assert_ne!(s.hero, Position::BB);
            assert_eq!(s.lookup_key.as_deref(), Some(s.hero.key()));
            seen.insert(s.hero);
        }
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn mtt_rfi_covers_eight_seats() {
        let mut rng = rng();
        let seen: HashSet<Position> = (0..1000)
            .map(|_| next_scenario(&mut rng, TrainingMode::MttRfi, None))
            .inspect(|s| assert_eq!(s.game_type, GameType::Tournament))
            .map(|s| s.hero)
            .collect();
        assert_eq!(seen.len(), 8);
        assert!(!seen.contains(&Position::BB));
    }

    #[test]
    fn defense_hero_is_always_big_blind() {
        let mut rng = rng();
        for _ in 0..200 {
            let s = next_scenario(&mut rng, TrainingMode::Defense, None);
            assert_eq!(s.hero, Position::BB);
            let villain = s.villain.unwrap();
            assert_ne!(villain, Position::BB);
            assert_eq!(s.lookup_key, Some(format!("BB_vs_{}", villain.key())));
        }
    }

    #[test]
    fn vs_3bet_villain_sits_after_hero() {
        let mut rng = rng();
        let seat = |p: Position| POSITIONS_6MAX.iter().position(|&q| q == p).unwrap();
        for _ in 0..500 {
            let s = next_scenario(&mut rng, TrainingMode::Vs3Bet, None);
            assert_eq!(s.kind, ScenarioKind::Vs3Bet);
            let villain = s.villain.unwrap();
            assert!(seat(villain) > seat(s.hero));
            assert_eq!(s.villain_action, Some(VillainAction::ThreeBet));
        }
    }

    #[test]
    fn vs_3bet_from_last_seat_degrades_to_button_open() {
        let s = vs_3bet(&mut rng(), Position::BB);
        assert_eq!(s, rfi(Position::BTN, GameType::CashGame));
        // small blind can only be 3-bet by the big blind
        let s = vs_3bet(&mut rng(), Position::SB);
        assert_eq!(s.lookup_key.as_deref(), Some("SB_vs_BB"));
    }

    #[test]
    fn custom_has_no_lookup_key() {
        let s = next_scenario(&mut rng(), TrainingMode::Custom, None);
        assert_eq!(s.kind, ScenarioKind::Custom);
        assert!(s.lookup_key.is_none());
    }

    #[test]
    fn campaign_follows_level_config() {
        let levels = bundled_levels();
        let mut rng = rng();
        for _ in 0..100 {
            let s = next_scenario(&mut rng, TrainingMode::Campaign, Some(&levels[0]));
            assert_eq!(s, rfi(Position::BTN, GameType::CashGame));
            let s = next_scenario(&mut rng, TrainingMode::Campaign, Some(&levels[3]));
            assert_eq!(s.kind, ScenarioKind::Defense);
        }
    }

    #[test]
    fn mixed_campaign_deals_both_kinds() {
        let levels = bundled_levels();
        let mut rng = rng();
        let kinds: HashSet<_> = (0..200)
            .map(|_| next_scenario(&mut rng, TrainingMode::Campaign, Some(&levels[4])).kind)
            .collect();
        assert!(kinds.contains(&ScenarioKind::Rfi));
        assert!(kinds.contains(&ScenarioKind::Defense));
        assert_eq!(kinds.len(), 2);
    }
}
