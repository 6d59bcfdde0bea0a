use rand::Rng;
use crate::training_engine::models::{Card, Hand, Rank, Suit};

/// The 52 cards in rank-major order.
pub fn full_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| (2u8..=14).map(move |r| Card { rank: Rank(r), suit }))
        .collect()
}

/// Draw one card uniformly at random, with replacement.
pub fn random_card<R: Rng>(rng: &mut R) -> Card {
    Card {
        rank: Rank(rng.gen_range(2..=14)),
        suit: Suit::ALL[rng.gen_range(0..Suit::ALL.len())],
    }
}

/// Draw two distinct cards. The second card is redrawn until it differs from
/// the first.
pub fn deal_hand<R: Rng>(rng: &mut R) -> Hand {
    let first = random_card(rng);
    loop {
        if let Some(hand) = Hand::new(first, random_card(rng)) {
            return hand;
        }
    }
}
