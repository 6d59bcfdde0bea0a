//! Session controller: owns the mutable training state and threads it through
//! the stateless engine one hand at a time.

use std::collections::BTreeMap;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::training_engine::{
    campaign::{bundled_levels, CampaignLevel, CampaignProgress},
    config::SessionConfig,
    error::TrainerError,
    generator::{deal_drill, Drill},
    models::{Action, DifficultyState, HandCode, HandRecord, Mastery, TrainingMode},
    range::Range,
    resolver::{judge, strategy_grid, GridCell},
    storage::{
        load_json, store_json, KeyValueStore, KEY_CAMPAIGN_LEVEL, KEY_CUSTOM_RANGE,
        KEY_HAND_STATS, KEY_STREAK, KEY_TOTAL_HANDS,
    },
    strategy::StrategyBook,
};

pub type HandStats = BTreeMap<HandCode, HandRecord>;

/// What the presentation layer receives once a hand is judged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandResult {
    pub drill: Drill,
    pub submitted: Action,
    pub correct: Action,
    pub is_correct: bool,
    /// Streak after this hand.
    pub streak: u32,
    /// Set when this hand cleared a campaign level.
    pub level_cleared: Option<CampaignLevel>,
    /// Tally for this code, including this hand.
    pub record: HandRecord,
}

pub struct TrainingSession {
    book: StrategyBook,
    levels: Vec<CampaignLevel>,
    mode: TrainingMode,
    difficulty: DifficultyState,
    max_draw_attempts: u32,
    campaign: CampaignProgress,
    custom_range: Range,
    hand_stats: HandStats,
    total_hands: u64,
    current: Option<Drill>,
}

impl TrainingSession {
    pub fn new(config: SessionConfig, book: StrategyBook) -> TrainingSession {
        TrainingSession {
            book,
            levels: bundled_levels(),
            mode: config.mode,
            difficulty: DifficultyState { streak: 0, adaptive: config.adaptive },
            max_draw_attempts: config.max_draw_attempts,
            campaign: CampaignProgress::default(),
            custom_range: config.custom_range,
            hand_stats: HandStats::new(),
            total_hands: 0,
            current: None,
        }
    }

    /// Replace the campaign ladder. Progress restarts at the first level.
    pub fn with_levels(mut self, levels: Vec<CampaignLevel>) -> TrainingSession {
        self.levels = levels;
        self.campaign = CampaignProgress::default();
        self
    }

    // ── accessors ───────────────────────────────────────────────────────────

    pub fn mode(&self) -> TrainingMode {
        self.mode
    }

    pub fn difficulty(&self) -> DifficultyState {
        self.difficulty
    }

    pub fn campaign(&self) -> CampaignProgress {
        self.campaign
    }

    pub fn current_level(&self) -> Option<&CampaignLevel> {
        self.campaign.current(&self.levels)
    }

    pub fn custom_range(&self) -> &Range {
        &self.custom_range
    }

    pub fn hand_stats(&self) -> &HandStats {
        &self.hand_stats
    }

    pub fn total_hands(&self) -> u64 {
        self.total_hands
    }

    pub fn current(&self) -> Option<&Drill> {
        self.current.as_ref()
    }

    pub fn book(&self) -> &StrategyBook {
        &self.book
    }

    // ── settings ────────────────────────────────────────────────────────────

    /// Switching mode starts both streaks over and abandons the hand in play.
    pub fn set_mode(&mut self, mode: TrainingMode) {
        self.mode = mode;
        self.difficulty.streak = 0;
        self.campaign.streak = 0;
        self.current = None;
    }

    /// The hand in play was drawn under the old band, so it is dropped.
    pub fn set_adaptive(&mut self, adaptive: bool) {
        self.difficulty.adaptive = adaptive;
        self.current = None;
    }

    /// Saving an edited range resets the streak.
    pub fn save_custom_range(&mut self, range: Range) {
        self.custom_range = range;
        self.difficulty.streak = 0;
        self.current = None;
    }

    /// Verdict for one code from the stored tally.
    pub fn mastery(&self, code: &HandCode) -> Mastery {
        self.hand_stats.get(code).copied().unwrap_or_default().mastery()
    }

    /// Verdict for all 169 codes in grid order.
    pub fn mastery_grid(&self) -> Vec<(HandCode, Mastery)> {
        HandCode::all().map(|code| (code, self.mastery(&code))).collect()
    }

    pub fn reset_stats(&mut self) {
        self.hand_stats.clear();
    }

    // ── play ────────────────────────────────────────────────────────────────

    pub fn deal<R: Rng>(&mut self, rng: &mut R) -> &Drill {
        let level = match self.mode {
            TrainingMode::Campaign => self.campaign.current(&self.levels),
            _ => None,
        };
        let drill = deal_drill(
            rng,
            self.mode,
            &self.difficulty,
            level,
            Some(&self.custom_range),
            &self.book,
            self.max_draw_attempts,
        );
        self.current.insert(drill)
    }

    /// Judge `action` against the hand in play. `None` if nothing was dealt.
    pub fn submit(&mut self, action: Action) -> Option<HandResult> {
        let drill = self.current.take()?;
        let is_correct = judge(action, drill.correct);

        self.total_hands += 1;
        let record = self.hand_stats.entry(drill.code).or_default();
        if is_correct {
            record.win_count += 1;
            self.difficulty.streak += 1;
        } else {
            record.loss_count += 1;
            self.difficulty.streak = 0;
        }
        let record = *record;

        let level_cleared = match self.mode {
            TrainingMode::Campaign => self
                .campaign
                .record(is_correct, &self.levels)
                .and_then(|i| self.levels.get(i).cloned()),
            _ => None,
        };

        Some(HandResult {
            correct: drill.correct,
            drill,
            submitted: action,
            is_correct,
            streak: self.difficulty.streak,
            level_cleared,
            record,
        })
    }

    /// Correct action for every code in the scenario currently in play.
    pub fn grid_for(&self, drill: &Drill) -> Vec<GridCell> {
        strategy_grid(&drill.scenario, drill.mode, Some(&self.custom_range), &self.book)
    }

    // ── persistence ─────────────────────────────────────────────────────────

    pub fn persist<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<(), TrainerError> {
        store_json(store, KEY_CUSTOM_RANGE, &self.custom_range)?;
        store_json(store, KEY_STREAK, &self.difficulty.streak)?;
        store_json(store, KEY_HAND_STATS, &self.hand_stats)?;
        store_json(store, KEY_CAMPAIGN_LEVEL, &self.campaign.level_index)?;
        store_json(store, KEY_TOTAL_HANDS, &self.total_hands)?;
        Ok(())
    }

    /// Load whatever progress the store holds. Values that fail to decode are
    /// logged and left at their current setting.
    pub fn restore<S: KeyValueStore + ?Sized>(&mut self, store: &S) {
        if let Some(range) = load_or_warn(store, KEY_CUSTOM_RANGE) {
            self.custom_range = range;
        }
        if let Some(streak) = load_or_warn(store, KEY_STREAK) {
            self.difficulty.streak = streak;
        }
        if let Some(stats) = load_or_warn(store, KEY_HAND_STATS) {
            self.hand_stats = stats;
        }
        if let Some(level) = load_or_warn::<usize, _>(store, KEY_CAMPAIGN_LEVEL) {
            self.campaign = CampaignProgress {
                level_index: level.min(self.levels.len().saturating_sub(1)),
                streak: 0,
            };
        }
        if let Some(total) = load_or_warn(store, KEY_TOTAL_HANDS) {
            self.total_hands = total;
        }
    }
}

fn load_or_warn<T, S>(store: &S, key: &str) -> Option<T>
where
    T: serde::de::DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match load_json(store, key) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("ignoring stored '{key}': {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training_engine::{campaign::LevelConfig, models::Position, storage::MemoryStore};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn book() -> StrategyBook {
        StrategyBook::bundled().unwrap()
    }

    fn session(mode: TrainingMode) -> TrainingSession {
        let config = SessionConfig { mode, ..SessionConfig::default() };
        TrainingSession::new(config, book())
    }

    #[test]
    fn correct_answers_build_the_streak_and_misses_reset_it() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut s = session(TrainingMode::Rfi);
        for expected in 1..=3 {
            let correct = s.deal(&mut rng).correct;
            let result = s.submit(correct).unwrap();
            assert!(result.is_correct);
            assert_eq!(result.streak, expected);
        }
        s.deal(&mut rng);
        let result = s.submit(Action::Timeout).unwrap();
        assert!(!result.is_correct);
        assert_eq!(s.difficulty().streak, 0);
        assert_eq!(s.total_hands(), 4);
        let wins: u32 = s.hand_stats().values().map(|r| r.win_count).sum();
        let losses: u32 = s.hand_stats().values().map(|r| r.loss_count).sum();
        assert_eq!((wins, losses), (3, 1));
    }

    #[test]
    fn submit_without_a_deal_is_ignored() {
        let mut s = session(TrainingMode::Rfi);
        assert!(s.submit(Action::Fold).is_none());
        let mut rng = StdRng::seed_from_u64(2);
        s.deal(&mut rng);
        assert!(s.submit(Action::Fold).is_some());
        assert!(s.submit(Action::Fold).is_none(), "a hand is judged once");
    }

    #[test]
    fn mode_change_and_range_save_reset_streak() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut s = session(TrainingMode::Defense);
        let correct = s.deal(&mut rng).correct;
        s.submit(correct);
        assert_eq!(s.difficulty().streak, 1);
        s.set_mode(TrainingMode::Custom);
        assert_eq!(s.difficulty().streak, 0);

        let correct = s.deal(&mut rng).correct;
        s.submit(correct);
        s.save_custom_range(Range::new(["AA"]));
        assert_eq!(s.difficulty().streak, 0);
        assert!(s.current().is_none());
    }

    #[test]
    fn campaign_level_up_is_reported() {
        let levels = vec![
            CampaignLevel { name: "one".into(), target: 2, config: LevelConfig::Rfi { allowed: vec![Position::BTN] } },
            CampaignLevel { name: "two".into(), target: 2, config: LevelConfig::Defense },
        ];
        let mut rng = StdRng::seed_from_u64(4);
        let mut s = session(TrainingMode::Campaign).with_levels(levels);

        let drill = s.deal(&mut rng).clone();
        assert_eq!(drill.scenario.hero, Position::BTN);
        assert!(s.submit(drill.correct).unwrap().level_cleared.is_none());

        let correct = s.deal(&mut rng).correct;
        let cleared = s.submit(correct).unwrap().level_cleared;
        assert_eq!(cleared.map(|l| l.name), Some("one".to_string()));
        assert_eq!(s.current_level().map(|l| l.name.as_str()), Some("two"));
        assert_eq!(s.deal(&mut rng).scenario.hero, Position::BB);
    }

    #[test]
    fn progress_survives_a_persist_restore_cycle() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut s = session(TrainingMode::Rfi);
        s.save_custom_range(Range::new(["QQ+", "AKs"]));
        for _ in 0..5 {
            let correct = s.deal(&mut rng).correct;
            s.submit(correct);
        }
        let mut store = MemoryStore::new();
        s.persist(&mut store).unwrap();

        let mut restored = session(TrainingMode::Rfi);
        restored.restore(&store);
        assert_eq!(restored.custom_range(), s.custom_range());
        assert_eq!(restored.difficulty().streak, 5);
        assert_eq!(restored.hand_stats(), s.hand_stats());
        assert_eq!(restored.total_hands(), 5);
    }

    #[test]
    fn corrupt_values_fall_back_to_current_state() {
        let mut store = MemoryStore::new();
        store.set(KEY_HAND_STATS, "{not json".into()).unwrap();
        store.set(KEY_CUSTOM_RANGE, r#"["AA","KK"]"#.into()).unwrap();
        store.set(KEY_CAMPAIGN_LEVEL, "99".into()).unwrap();

        let mut s = session(TrainingMode::Campaign);
        s.restore(&store);
        assert!(s.hand_stats().is_empty());

        // tallies saved by the older short-key format
        store.set(KEY_HAND_STATS, r#"{"AKs":{"w":2,"l":1}}"#.into()).unwrap();
        s.restore(&store);
        assert_eq!(s.custom_range().tokens(), ["AA", "KK"]);
        let aks = HandCode::parse("AKs").unwrap();
        assert_eq!(s.hand_stats()[&aks], HandRecord { win_count: 2, loss_count: 1 });
        assert_eq!(s.campaign().level_index, bundled_levels().len() - 1);

        store.set(KEY_STREAK, "oops".into()).unwrap();
        s.restore(&store);
        assert_eq!(s.difficulty().streak, 0);
    }

    #[test]
    fn toggling_adaptive_drops_the_hand_in_play() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut s = session(TrainingMode::Rfi);
        s.deal(&mut rng);
        s.set_adaptive(true);
        assert!(s.current().is_none());
        assert!(s.submit(Action::Fold).is_none());
        assert!(s.difficulty().adaptive);
    }

    #[test]
    fn mastery_follows_the_tally() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut s = session(TrainingMode::Rfi);
        let drill = s.deal(&mut rng).clone();
        assert_eq!(s.mastery(&drill.code), Mastery::NoData);
        let result = s.submit(drill.correct).unwrap();
        assert_eq!(result.record, HandRecord { win_count: 1, loss_count: 0 });
        assert_eq!(s.mastery(&drill.code), Mastery::Mastered);

        let grid = s.mastery_grid();
        assert_eq!(grid.len(), 169);
        assert_eq!(grid.iter().filter(|(_, m)| *m != Mastery::NoData).count(), 1);
    }

    /// Store that refuses every write.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, key: &str, _value: String) -> Result<(), TrainerError> {
            Err(TrainerError::Storage { key: key.to_string(), reason: "read-only".into() })
        }

        fn remove(&mut self, _key: &str) {}
    }

    #[test]
    fn persist_reports_a_failed_write() {
        let s = session(TrainingMode::Rfi);
        let err = s.persist(&mut ReadOnlyStore).unwrap_err();
        match err {
            TrainerError::Storage { key, .. } => assert_eq!(key, KEY_CUSTOM_RANGE),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn grid_matches_the_drill_answer() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut s = session(TrainingMode::Vs3Bet);
        let drill = s.deal(&mut rng).clone();
        let grid = s.grid_for(&drill);
        assert_eq!(grid.len(), 169);
        let cell = grid.iter().find(|c| c.code == drill.code).unwrap();
        assert_eq!(cell.action, drill.correct);
    }
}
