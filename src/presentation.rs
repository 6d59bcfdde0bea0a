use serde_json::{json, Value};

use crate::training_engine::{
    generator::Drill,
    models::{Action, Card, ScenarioKind, TrainingMode},
    resolver::GridCell,
    session::HandResult,
};

/// Card string for the client: rank 10 is spelled out ("10s"), everything
/// else uses the compact form ("As", "Kh").
fn to_client_card(c: &Card) -> String {
    if c.rank.0 == 10 {
        format!("10{}", c.suit)
    } else {
        c.to_string()
    }
}

fn card_json(id: usize, c: &Card) -> Value {
    json!({ "id": id, "card": to_client_card(c), "rank": c.rank.symbol(), "suit": c.suit.to_string() })
}

/// Button label for an action. Raising over a single open is a 3-bet.
fn action_label(action: Action, mode: TrainingMode) -> &'static str {
    match action {
        Action::Raise if mode == TrainingMode::Defense => "3-Bet",
        Action::Raise   => "Raise",
        Action::Call    => "Call",
        Action::Fold    => "Fold",
        Action::Timeout => "Timeout",
    }
}

/// Only spots with a villain raise offer a call button.
fn call_available(kind: ScenarioKind) -> bool {
    matches!(kind, ScenarioKind::Defense | ScenarioKind::Vs3Bet)
}

/// Table state for a hand waiting on the player's decision. The answer is
/// deliberately absent.
pub fn to_drill_json(drill: &Drill) -> Value {
    let s = &drill.scenario;
    let [c1, c2] = drill.hand.cards();
    json!({
        "drill_id": drill.drill_id,
        "mode": drill.mode,
        "game_type": s.game_type.to_string(),
        "hero_position": s.hero.key(),
        "villain_position": s.villain.map(|p| p.key()),
        "villain_action": s.villain_action,
        "cards": [card_json(0, &c1), card_json(1, &c2)],
        "hand_code": drill.code,
        "call_available": call_available(s.kind),
    })
}

/// Feedback payload for a judged hand, including the full strategy matrix.
pub fn to_feedback_json(result: &HandResult, grid: &[GridCell]) -> Value {
    let drill = &result.drill;
    let s = &drill.scenario;
    let vs = s.villain.map(|v| format!(" vs {}", v.key())).unwrap_or_default();
    let summary = format!(
        "{} should {} {}{}",
        s.hero.key(),
        action_label(result.correct, drill.mode),
        drill.code,
        vs,
    );

    let cells: Vec<Value> = grid
        .iter()
        .map(|cell| {
            json!({
                "code": cell.code,
                "action": cell.action,
                "is_current": cell.code == drill.code,
            })
        })
        .collect();

    json!({
        "drill": to_drill_json(drill),
        "tier": drill.tier,
        "submitted": result.submitted,
        "correct": result.correct,
        "is_correct": result.is_correct,
        "streak": result.streak,
        "summary": summary,
        "level_cleared": result.level_cleared.as_ref().map(|l| l.name.as_str()),
        "hand_stats": {
            "win_count": result.record.win_count,
            "loss_count": result.record.loss_count,
            "win_percent": result.record.win_percent(),
            "mastery": result.record.mastery(),
        },
        "show_call_legend": call_available(s.kind),
        "grid": cells,
    })
}
