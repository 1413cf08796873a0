use rand::Rng;

use super::round::{
    build_round,
    build_round_with,
};
use crate::core::models::{
    Card,
    CardPatch,
    Deck,
};

/// Where the session currently stands. The terminal phases are re-entered on
/// every render until the session is replaced; there is no automatic reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Showing the card at `index`.
    InRound,
    /// The deck was empty at start; nothing was ever reviewable.
    Completed,
    /// A round ended with no negative card left anywhere in the snapshot.
    AllPositiveCleared,
}

/// Subtitle derivation, computed purely from the current snapshot. This can
/// read "negative review" even while a positive-only round is in progress if
/// stale negatives exist elsewhere in the snapshot; the reference client
/// behaves the same way and the display is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    NegativeReview { count: usize },
    Round { round: u32 },
}

/// One live review pass over a deck. Cards are copied out of the deck at
/// start; nothing is written back except through server-confirmed merges.
#[derive(Debug, Clone)]
pub struct ReviewSession {
    pub deck_id: String,
    pub deck_name: String,
    cards: Vec<Card>,
    round_cards: Vec<Card>,
    index: usize,
    round: u32,
    phase: SessionPhase,
}

impl ReviewSession {
    pub fn start(deck: &Deck) -> Self {
        Self::from_round(deck, build_round(&deck.cards, true))
    }

    pub fn start_with<R: Rng>(deck: &Deck, rng: &mut R) -> Self {
        Self::from_round(deck, build_round_with(&deck.cards, true, rng))
    }

    fn from_round(deck: &Deck, round_cards: Vec<Card>) -> Self {
        let phase =
            if round_cards.is_empty() { SessionPhase::Completed } else { SessionPhase::InRound };
        Self {
            deck_id: deck.id.clone(),
            deck_name: deck.name.clone(),
            cards: deck.cards.clone(),
            round_cards,
            index: 0,
            round: 1,
            phase,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn finished(&self) -> bool {
        self.phase != SessionPhase::InRound
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn round_len(&self) -> usize {
        self.round_cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn round_cards(&self) -> &[Card] {
        &self.round_cards
    }

    /// The card under review, or `None` when finished or the cursor sits at
    /// the rollover position. Callers treat `None` as a no-op trigger.
    pub fn current_card(&self) -> Option<&Card> {
        if self.finished() {
            return None;
        }
        self.round_cards.get(self.index)
    }

    pub fn negatives(&self) -> usize {
        self.cards.iter().filter(|card| card.score < 0).count()
    }

    pub fn status(&self) -> SessionStatus {
        let negatives = self.negatives();
        if negatives > 0 {
            SessionStatus::NegativeReview { count: negatives }
        } else {
            SessionStatus::Round { round: self.round }
        }
    }

    /// Move the cursor one step. At the end of the round, either finish (no
    /// negatives anywhere in the snapshot) or rebuild the next round from
    /// the negative subset with the weakest-first bias.
    pub fn advance(&mut self) {
        self.advance_inner(None::<&mut rand::rngs::ThreadRng>);
    }

    pub fn advance_with<R: Rng>(&mut self, rng: &mut R) {
        self.advance_inner(Some(rng));
    }

    fn advance_inner<R: Rng>(&mut self, rng: Option<&mut R>) {
        if self.finished() {
            return;
        }
        self.index += 1;
        if self.index < self.round_cards.len() {
            return;
        }

        let negatives: Vec<Card> =
            self.cards.iter().filter(|card| card.score < 0).cloned().collect();
        if negatives.is_empty() {
            self.phase = SessionPhase::AllPositiveCleared;
            return;
        }

        self.round += 1;
        self.round_cards = match rng {
            Some(rng) => build_round_with(&negatives, true, rng),
            None => build_round(&negatives, true),
        };
        self.index = 0;
    }

    /// In-place replace-by-id merge of a server-confirmed card into both the
    /// full snapshot and the current round sequence. Keeps `round_cards`
    /// referentially consistent with `cards`.
    pub fn merge_card(&mut self, patch: &CardPatch) {
        for card in self.cards.iter_mut().chain(self.round_cards.iter_mut()) {
            if card.id == patch.id {
                card.merge(patch);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::FieldMap;

    fn card(id: &str, score: i64) -> Card {
        Card { id: id.into(), content: FieldMap::new(), score, extra: FieldMap::new() }
    }

    fn deck(cards: Vec<Card>) -> Deck {
        Deck { id: "d1".into(), name: "Test".into(), cards }
    }

    #[test]
    fn empty_deck_completes_immediately() {
        let session = ReviewSession::start(&deck(Vec::new()));
        assert_eq!(session.phase(), SessionPhase::Completed);
        assert!(session.finished());
        assert!(session.current_card().is_none());
    }

    #[test]
    fn exhausting_an_all_positive_round_clears_the_session() {
        let mut session = ReviewSession::start(&deck(vec![
            card("a", 0),
            card("b", 1),
            card("c", 2),
        ]));
        session.advance();
        session.advance();
        assert_eq!(session.index(), 2);
        assert_eq!(session.phase(), SessionPhase::InRound);

        session.advance();
        assert_eq!(session.phase(), SessionPhase::AllPositiveCleared);
        assert!(session.finished());
        assert!(session.current_card().is_none());
    }

    #[test]
    fn rollover_rebuilds_round_from_negative_subset() {
        let mut session = ReviewSession::start(&deck(vec![
            card("a", 1),
            card("b", -1),
            card("c", 0),
        ]));
        session.advance();
        session.advance();
        session.advance();

        assert_eq!(session.phase(), SessionPhase::InRound);
        assert_eq!(session.round(), 2);
        assert_eq!(session.index(), 0);
        assert_eq!(session.round_len(), 1);
        assert_eq!(session.current_card().unwrap().id, "b");
    }

    #[test]
    fn status_prefers_negative_review_over_round_label() {
        let session =
            ReviewSession::start(&deck(vec![card("a", -1), card("b", -3), card("c", 0)]));
        assert_eq!(session.status(), SessionStatus::NegativeReview { count: 2 });

        let clean = ReviewSession::start(&deck(vec![card("a", 0), card("b", 2)]));
        assert_eq!(clean.status(), SessionStatus::Round { round: 1 });
    }

    #[test]
    fn merge_card_updates_snapshot_and_round_in_place() {
        let mut session = ReviewSession::start(&deck(vec![card("a", -1), card("b", 0)]));
        let patch: CardPatch =
            serde_json::from_str(r#"{"id":"a","aciertos":0}"#).unwrap();
        session.merge_card(&patch);

        assert!(session.cards().iter().all(|c| c.score >= 0));
        let in_round = session.round_cards().iter().find(|c| c.id == "a").unwrap();
        assert_eq!(in_round.score, 0);
    }
}
