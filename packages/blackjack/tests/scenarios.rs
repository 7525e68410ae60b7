use blackjack::{
    run_round, score, Card, Deck, Decision, Hand, Ledger, Rank, RoundOutcome, Suit, WagerLedger,
};

fn c(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn hand(cards: &[Card]) -> Hand {
    Hand::from_cards(cards.to_vec())
}

fn scripted(moves: Vec<Decision>) -> impl FnMut(&Hand, &Card) -> Decision {
    let mut moves = moves.into_iter();
    move |_: &Hand, _: &Card| moves.next().unwrap_or(Decision::Stand)
}

#[test]
fn natural_against_dealer_drawing_to_twenty_one_is_a_half_push() {
    let mut player = hand(&[c(Rank::Ace, Suit::Hearts), c(Rank::King, Suit::Clubs)]);
    let mut dealer = hand(&[c(Rank::Nine, Suit::Diamonds), c(Rank::Four, Suit::Spades)]);
    let mut deck = Deck::stacked(vec![c(Rank::Eight, Suit::Clubs)]);
    let mut ledger = Ledger::new(1_000);
    ledger.place_bet(100);

    let outcome = run_round(
        &mut player,
        &mut dealer,
        &mut deck,
        &mut ledger,
        &mut scripted(vec![]),
    );

    assert_eq!(outcome, RoundOutcome::PushBlackjack);
    assert_eq!(ledger.balance(), 1_050);
    assert_eq!(ledger.current_bet(), 0);
}

#[test]
fn natural_against_dealer_seventeen_pays_in_full() {
    let mut player = hand(&[c(Rank::Ace, Suit::Hearts), c(Rank::King, Suit::Clubs)]);
    let mut dealer = hand(&[c(Rank::Nine, Suit::Diamonds), c(Rank::Eight, Suit::Spades)]);
    let mut deck = Deck::stacked(vec![c(Rank::Four, Suit::Clubs)]);
    let mut ledger = Ledger::new(1_000);
    ledger.place_bet(100);

    let outcome = run_round(
        &mut player,
        &mut dealer,
        &mut deck,
        &mut ledger,
        &mut scripted(vec![]),
    );

    assert_eq!(outcome, RoundOutcome::PlayerBlackjack);
    assert_eq!(ledger.balance(), 1_100);
    assert_eq!(deck.len(), 1);
}

#[test]
fn standing_on_fifteen_against_dealer_seventeen_loses_the_bet() {
    let mut player = hand(&[c(Rank::Seven, Suit::Clubs), c(Rank::Eight, Suit::Diamonds)]);
    let mut dealer = hand(&[c(Rank::Six, Suit::Hearts), c(Rank::Five, Suit::Spades)]);
    let mut deck = Deck::stacked(vec![c(Rank::Six, Suit::Diamonds)]);
    let mut ledger = Ledger::new(1_000);
    ledger.place_bet(100);

    let outcome = run_round(
        &mut player,
        &mut dealer,
        &mut deck,
        &mut ledger,
        &mut scripted(vec![Decision::Stand]),
    );

    assert_eq!(outcome, RoundOutcome::DealerWin);
    assert_eq!(ledger.balance(), 900);
    assert!(player.is_empty());
    assert!(dealer.is_empty());
}

#[test]
fn hitting_ten_to_twenty_beats_dealer_eighteen() {
    let mut player = hand(&[c(Rank::Five, Suit::Clubs), c(Rank::Five, Suit::Diamonds)]);
    let mut dealer = hand(&[c(Rank::Nine, Suit::Hearts), c(Rank::Nine, Suit::Diamonds)]);
    let mut deck = Deck::stacked(vec![c(Rank::King, Suit::Spades), c(Rank::Two, Suit::Spades)]);
    let mut ledger = Ledger::new(1_000);
    ledger.place_bet(100);

    let outcome = run_round(
        &mut player,
        &mut dealer,
        &mut deck,
        &mut ledger,
        &mut scripted(vec![Decision::Hit, Decision::Stand]),
    );

    assert_eq!(outcome, RoundOutcome::PlayerWin);
    assert_eq!(ledger.balance(), 1_100);
    assert_eq!(deck.len(), 1);
}

#[test]
fn over_balance_bet_goes_all_in_and_a_loss_ends_the_game() {
    let mut player = hand(&[c(Rank::Ten, Suit::Clubs), c(Rank::Six, Suit::Diamonds)]);
    let mut dealer = hand(&[c(Rank::Ten, Suit::Hearts), c(Rank::Seven, Suit::Diamonds)]);
    let mut deck = Deck::new();
    let mut ledger = Ledger::new(60);
    assert_eq!(ledger.place_bet(100), 60);

    let outcome = run_round(
        &mut player,
        &mut dealer,
        &mut deck,
        &mut ledger,
        &mut scripted(vec![Decision::Stand]),
    );

    assert_eq!(outcome, RoundOutcome::DealerWin);
    assert!(ledger.is_broke());
}

#[test]
fn score_is_pure() {
    let cards = [c(Rank::Ace, Suit::Spades), c(Rank::Ace, Suit::Diamonds), c(Rank::Nine, Suit::Clubs)];
    let first = score(&cards);
    let second = score(&cards);
    assert_eq!(first, 21);
    assert_eq!(first, second);
}
