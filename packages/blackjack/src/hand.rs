use crate::{scoring, Card};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cards held by one party for the current round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// The first card dealt, shown face up for the dealer.
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    pub fn score(&self) -> u32 {
        scoring::score(&self.cards)
    }

    pub fn is_soft(&self) -> bool {
        scoring::is_soft(&self.cards)
    }

    pub fn is_busted(&self) -> bool {
        scoring::is_busted(&self.cards)
    }

    pub fn is_natural(&self) -> bool {
        scoring::is_natural(&self.cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for card in &self.cards {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
            first = false;
        }
        Ok(())
    }
}
