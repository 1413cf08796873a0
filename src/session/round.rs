use rand::Rng;

use super::shuffle::{
    shuffle,
    shuffle_with,
};
use crate::core::models::Card;

/// Build the ordered sequence for one round. Always starts from a fresh
/// shuffle; with `prioritize_negative` the first negative-scored card found
/// in the shuffled order (not the most negative one) is pulled to the front.
/// A deliberate partial ordering: one weak card surfaces immediately, the
/// rest stay shuffled.
pub fn build_round(cards: &[Card], prioritize_negative: bool) -> Vec<Card> {
    front_load_negative(shuffle(cards), prioritize_negative)
}

pub fn build_round_with<R: Rng>(
    cards: &[Card],
    prioritize_negative: bool,
    rng: &mut R,
) -> Vec<Card> {
    front_load_negative(shuffle_with(cards, rng), prioritize_negative)
}

fn front_load_negative(mut round: Vec<Card>, prioritize_negative: bool) -> Vec<Card> {
    if prioritize_negative {
        if let Some(position) = round.iter().position(|card| card.score < 0) {
            if position > 0 {
                let negative = round.remove(position);
                round.insert(0, negative);
            }
        }
    }
    round
}

#[cfg(test)]
mod tests {
    use rand::{
        rngs::StdRng,
        SeedableRng,
    };

    use super::*;
    use crate::core::models::FieldMap;

    fn card(id: &str, score: i64) -> Card {
        Card { id: id.into(), content: FieldMap::new(), score, extra: FieldMap::new() }
    }

    #[test]
    fn empty_input_builds_empty_round() {
        assert!(build_round(&[], true).is_empty());
    }

    #[test]
    fn first_negative_in_shuffle_order_leads_the_round() {
        let cards = vec![card("a", 0), card("b", -1), card("c", 2), card("d", -5)];
        for seed in 0..64 {
            let shuffled = shuffle_with(&cards, &mut StdRng::seed_from_u64(seed));
            let round = build_round_with(&cards, true, &mut StdRng::seed_from_u64(seed));

            let first_negative =
                shuffled.iter().find(|c| c.score < 0).map(|c| c.id.clone()).unwrap();
            assert_eq!(round[0].id, first_negative, "seed {seed}");
            assert_eq!(round.len(), cards.len());
        }
    }

    #[test]
    fn without_prioritization_the_shuffle_stands() {
        let cards = vec![card("a", 0), card("b", -1), card("c", 2)];
        for seed in 0..16 {
            let shuffled = shuffle_with(&cards, &mut StdRng::seed_from_u64(seed));
            let round = build_round_with(&cards, false, &mut StdRng::seed_from_u64(seed));
            let ids = |cs: &[Card]| cs.iter().map(|c| c.id.clone()).collect::<Vec<_>>();
            assert_eq!(ids(&round), ids(&shuffled));
        }
    }

    #[test]
    fn all_positive_round_is_a_plain_shuffle() {
        let cards = vec![card("a", 0), card("b", 3), card("c", 2)];
        let round = build_round(&cards, true);
        assert_eq!(round.len(), 3);
        assert!(round.iter().all(|c| c.score >= 0));
    }
}
