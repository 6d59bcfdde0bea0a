use crate::training_engine::models::{HandCode, HandTier, Rank, Shape};

/// Bucket a code into a pacing tier. First matching rule wins:
///
/// 1. **Monster**: TT+, AK/AQ/AJ of either suitedness, KQs.
/// 2. **Marginal**: 22-99, suited aces with a kicker below T, suited hands
///    with a gap of at most two whose top rank is 5..=Q, and the offsuit
///    broadways A2o-A6o, KQo, KJo, QJo.
/// 3. **Trash**: everything else.
///
/// The thresholds drive the adaptive generator, so they are exact.
pub fn classify(code: &HandCode) -> HandTier {
    if is_monster(code) {
        HandTier::Monster
    } else if is_marginal(code) {
        HandTier::Marginal
    } else {
        HandTier::Trash
    }
}

fn is_monster(code: &HandCode) -> bool {
    let HandCode { high, low, shape } = *code;
    match shape {
        Shape::Pair => high >= Rank::TEN,
        _ if high == Rank::ACE => low >= Rank::JACK,
        Shape::Suited => high == Rank::KING && low == Rank::QUEEN,
        Shape::Offsuit => false,
    }
}

fn is_marginal(code: &HandCode) -> bool {
    let HandCode { high, low, shape } = *code;
    match shape {
        Shape::Pair => high < Rank::TEN,
        Shape::Suited if high == Rank::ACE => low < Rank::TEN,
        Shape::Suited => {
            // rank index 3..=10 is 5 through Q
            high.0.abs_diff(low.0) <= 2 && (3..=10).contains(&high.index())
        }
        Shape::Offsuit => match (high, low.0) {
            (Rank::ACE, 7..=10)  => false,
            (Rank::ACE, _)       => true,
            (Rank::KING, 11..=12) => true,
            (Rank::QUEEN, 11)    => true,
            _                    => false,
        },
    }
}
