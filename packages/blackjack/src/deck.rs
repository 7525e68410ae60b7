use crate::Card;
use rand::seq::SliceRandom;
use rand::Rng;

pub const DECK_SIZE: usize = 52;

/// Anything a round can draw cards from. `None` means the source is depleted.
pub trait CardSource {
    fn deal_card(&mut self) -> Option<Card>;
}

/// A single 52-card deck. The top of the deck is the end of `cards`.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Fresh deck in canonical order, unshuffled.
    pub fn new() -> Self {
        Self {
            cards: Self::canonical_cards(),
        }
    }

    /// Deck that deals exactly `cards`, first element first.
    pub fn stacked(cards: Vec<Card>) -> Self {
        let mut cards = cards;
        cards.reverse();
        Self { cards }
    }

    fn canonical_cards() -> Vec<Card> {
        (0..DECK_SIZE).rev().map(Card::from_index).collect()
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Put all 52 cards back, in canonical order.
    pub fn reinit(&mut self) {
        self.cards = Self::canonical_cards();
    }

    pub fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.reinit();
        self.shuffle(rng);
        log::info!("Deck reshuffled ({} cards)", self.cards.len());
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl CardSource for Deck {
    fn deal_card(&mut self) -> Option<Card> {
        let card = self.cards.pop();
        if card.is_none() {
            log::debug!("Deck depleted");
        }
        card
    }
}
