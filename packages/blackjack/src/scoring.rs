use crate::Card;

pub const BLACKJACK: u32 = 21;

const SOFT_ACE_BONUS: u32 = 10;

/// Point total of a hand.
///
/// Non-Ace cards are summed first. If that sum is at most 10, exactly one Ace
/// counts as 11 and every other Ace counts as 1; otherwise every Ace counts
/// as 1. The soft Ace is granted in a single pass and is not demoted again
/// if the remaining Aces push the total past 21, so `{10, A, A}` scores 22.
pub fn score(cards: &[Card]) -> u32 {
    let (base, aces) = split_aces(cards);
    match aces {
        0 => base,
        n if base + 11 <= BLACKJACK => base + 11 + (n - 1),
        n => base + n,
    }
}

fn split_aces(cards: &[Card]) -> (u32, u32) {
    cards.iter().fold((0, 0), |(base, aces), card| {
        if card.is_ace() {
            (base, aces + 1)
        } else {
            (base + card.value(), aces)
        }
    })
}

/// True when one Ace is currently counted as 11.
pub fn is_soft(cards: &[Card]) -> bool {
    let (base, aces) = split_aces(cards);
    aces > 0 && score(cards) == base + aces + SOFT_ACE_BONUS
}

pub fn is_busted(cards: &[Card]) -> bool {
    score(cards) > BLACKJACK
}

/// Two-card 21.
pub fn is_natural(cards: &[Card]) -> bool {
    cards.len() == 2 && score(cards) == BLACKJACK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    fn cards(ranks: &[Rank]) -> Vec<Card> {
        ranks
            .iter()
            .zip(Suit::ALL.iter().cycle())
            .map(|(&rank, &suit)| Card::new(rank, suit))
            .collect()
    }

    #[test]
    fn test_empty_hand_scores_zero() {
        assert_eq!(score(&[]), 0);
    }

    #[test]
    fn test_no_aces_is_plain_sum() {
        let hand = vec![
            Card::new(Rank::Seven, Suit::Clubs),
            Card::new(Rank::King, Suit::Diamonds),
        ];
        assert_eq!(score(&hand), 17);
    }

    #[test]
    fn test_single_soft_ace() {
        let hand = vec![
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Nine, Suit::Diamonds),
        ];
        assert_eq!(score(&hand), 20);
        assert!(is_soft(&hand));
    }

    #[test]
    fn test_single_hard_ace() {
        let hand = vec![
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Diamonds),
            Card::new(Rank::Five, Suit::Clubs),
        ];
        assert_eq!(score(&hand), 16);
        assert!(!is_soft(&hand));
    }

    #[test]
    fn test_ace_with_base_of_exactly_ten() {
        assert_eq!(score(&cards(&[Rank::Ace, Rank::Four, Rank::Six])), 21);
    }

    #[test]
    fn test_two_aces() {
        assert_eq!(score(&cards(&[Rank::Ace, Rank::Ace])), 12);
        assert_eq!(score(&cards(&[Rank::Ace, Rank::Ace, Rank::Nine])), 21);
    }

    #[test]
    fn test_greedy_soft_ace_is_not_demoted() {
        // base 10 grants the soft ace, the second ace then busts the hand
        let hand = cards(&[Rank::Ten, Rank::Ace, Rank::Ace]);
        assert_eq!(score(&hand), 22);
        assert!(is_busted(&hand));
    }

    #[test]
    fn test_many_aces() {
        let hand = cards(&[Rank::Ace; 12]);
        assert_eq!(score(&hand), 22);
        let hard = cards(&[Rank::King, Rank::Two, Rank::Ace, Rank::Ace, Rank::Ace]);
        assert_eq!(score(&hard), 15);
    }

    #[test]
    fn test_score_does_not_change_between_calls() {
        let hand = cards(&[Rank::Ace, Rank::Six]);
        assert_eq!(score(&hand), score(&hand));
        assert_eq!(hand.len(), 2);
    }

    #[test]
    fn test_is_natural() {
        assert!(is_natural(&cards(&[Rank::Ace, Rank::King])));
        assert!(!is_natural(&cards(&[Rank::Ace, Rank::Ace, Rank::Nine])));
        assert!(!is_natural(&cards(&[Rank::King, Rank::Queen])));
    }
}
