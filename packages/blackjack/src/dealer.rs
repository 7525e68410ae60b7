use crate::{CardSource, Hand};

pub const DEALER_STANDS_AT: u32 = 17;

pub fn dealer_should_hit(hand: &Hand, stand_at: u32) -> bool {
    hand.score() < stand_at
}

/// Standard dealer: draw while below 17.
pub fn dealer_play<D: CardSource + ?Sized>(hand: &mut Hand, deck: &mut D) {
    dealer_play_to(hand, deck, DEALER_STANDS_AT);
}

/// Draw into the dealer's hand until it reaches `stand_at` or the deck runs out.
/// The hand is re-scored after every card.
pub fn dealer_play_to<D: CardSource + ?Sized>(hand: &mut Hand, deck: &mut D, stand_at: u32) {
    while dealer_should_hit(hand, stand_at) {
        match deck.deal_card() {
            Some(card) => {
                hand.add_card(card);
                log::debug!("Dealer draws {card}, total {}", hand.score());
            }
            None => {
                log::warn!("Deck ran out during dealer turn, dealer stands on {}", hand.score());
                break;
            }
        }
    }
}
