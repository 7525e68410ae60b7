use crate::dealer::dealer_play_to;
use crate::scoring::BLACKJACK;
use crate::{Card, CardSource, Hand, RoundOutcome, RoundSummary, TableRules, WagerLedger};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A player's choice during their turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Hit,
    Stand,
}

/// Supplies hit/stand decisions. `decide` may block while waiting on a human.
pub trait PlayerDecider {
    fn decide(&mut self, player: &Hand, dealer_up: &Card) -> Decision;

    /// Called once the round is settled, before the hands are cleared.
    fn round_finished(&mut self, _summary: &RoundSummary) {}
}

impl<F> PlayerDecider for F
where
    F: FnMut(&Hand, &Card) -> Decision,
{
    fn decide(&mut self, player: &Hand, dealer_up: &Card) -> Decision {
        self(player, dealer_up)
    }
}

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    PlayerTurn,
    Finished(RoundOutcome),
}

/// One round of play over already-dealt hands and an already-placed bet.
///
/// The round settles the ledger exactly once, on the transition into
/// [`RoundPhase::Finished`].
pub struct Round<'a, D: CardSource + ?Sized, L: WagerLedger + ?Sized> {
    player: &'a mut Hand,
    dealer: &'a mut Hand,
    deck: &'a mut D,
    ledger: &'a mut L,
    stand_at: u32,
    bet: u64,
    phase: RoundPhase,
}

impl<'a, D: CardSource + ?Sized, L: WagerLedger + ?Sized> Round<'a, D, L> {
    /// Start the round. A player total of 21 on the deal resolves it immediately.
    ///
    /// Panics if either hand holds fewer than two cards.
    pub fn begin(
        player: &'a mut Hand,
        dealer: &'a mut Hand,
        deck: &'a mut D,
        ledger: &'a mut L,
        rules: &TableRules,
    ) -> Self {
        assert!(player.len() >= 2, "player hand has not been dealt");
        assert!(dealer.len() >= 2, "dealer hand has not been dealt");

        let bet = ledger.current_bet();
        let mut round = Self {
            player,
            dealer,
            deck,
            ledger,
            stand_at: rules.dealer_stands_at,
            bet,
            phase: RoundPhase::PlayerTurn,
        };
        log::debug!(
            "Round begins: player {} ({}), dealer shows {}, bet {bet}",
            round.player,
            round.player.score(),
            round.dealer_up_card()
        );

        if round.player.score() == BLACKJACK {
            round.resolve_twenty_one();
        }
        round
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self.phase {
            RoundPhase::Finished(outcome) => Some(outcome),
            RoundPhase::PlayerTurn => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.outcome().is_some()
    }

    pub fn player_hand(&self) -> &Hand {
        &*self.player
    }

    pub fn dealer_hand(&self) -> &Hand {
        &*self.dealer
    }

    pub fn dealer_up_card(&self) -> &Card {
        &self.dealer.cards()[0]
    }

    /// Deal the player one card. An empty deck ends the turn as a stand.
    pub fn hit(&mut self) -> RoundPhase {
        self.expect_player_turn();

        let Some(card) = self.deck.deal_card() else {
            log::warn!("Deck ran out on a hit, player stands on {}", self.player.score());
            return self.stand();
        };
        self.player.add_card(card);
        let total = self.player.score();
        log::debug!("Player draws {card}, total {total}");

        match total.cmp(&BLACKJACK) {
            Ordering::Equal => self.resolve_twenty_one(),
            Ordering::Greater => self.finish(RoundOutcome::PlayerBust),
            Ordering::Less => {}
        }
        self.phase
    }

    /// End the player's turn and play out the dealer.
    pub fn stand(&mut self) -> RoundPhase {
        self.expect_player_turn();

        dealer_play_to(&mut *self.dealer, &mut *self.deck, self.stand_at);
        let dealer_total = self.dealer.score();
        let player_total = self.player.score();

        let outcome = if dealer_total > BLACKJACK {
            RoundOutcome::DealerBust
        } else {
            match player_total.cmp(&dealer_total) {
                Ordering::Greater => RoundOutcome::PlayerWin,
                Ordering::Less => RoundOutcome::DealerWin,
                Ordering::Equal => RoundOutcome::Push,
            }
        };
        self.finish(outcome);
        self.phase
    }

    /// Player holds 21: the dealer plays out and only a dealer 21 stops the payout.
    fn resolve_twenty_one(&mut self) {
        dealer_play_to(&mut *self.dealer, &mut *self.deck, self.stand_at);
        let outcome = if self.dealer.score() == BLACKJACK {
            RoundOutcome::PushBlackjack
        } else {
            RoundOutcome::PlayerBlackjack
        };
        self.finish(outcome);
    }

    fn finish(&mut self, outcome: RoundOutcome) {
        self.ledger.settle(outcome);
        self.phase = RoundPhase::Finished(outcome);
        log::info!(
            "{outcome:?}: player {} vs dealer {}, balance {}",
            self.player.score(),
            self.dealer.score(),
            self.ledger.balance()
        );
    }

    fn expect_player_turn(&self) {
        assert_eq!(
            self.phase,
            RoundPhase::PlayerTurn,
            "player acted after the round finished"
        );
    }

    pub fn summary(&self) -> Option<RoundSummary> {
        let outcome = self.outcome()?;
        Some(RoundSummary {
            outcome,
            player_cards: self.player.cards().to_vec(),
            dealer_cards: self.dealer.cards().to_vec(),
            player_score: self.player.score(),
            dealer_score: self.dealer.score(),
            bet: self.bet,
            balance_after: self.ledger.balance(),
        })
    }

    /// Clear both hands and hand back the outcome.
    ///
    /// Panics if the round has not finished.
    pub fn conclude(self) -> RoundOutcome {
        let outcome = self
            .outcome()
            .unwrap_or_else(|| panic!("round concluded during the player's turn"));
        self.player.clear();
        self.dealer.clear();
        outcome
    }
}

/// Play a full round with the default table rules.
pub fn run_round<D, L, P>(
    player: &mut Hand,
    dealer: &mut Hand,
    deck: &mut D,
    ledger: &mut L,
    decider: &mut P,
) -> RoundOutcome
where
    D: CardSource + ?Sized,
    L: WagerLedger + ?Sized,
    P: PlayerDecider + ?Sized,
{
    run_round_with(&TableRules::default(), player, dealer, deck, ledger, decider).outcome
}

/// Play a full round, asking `decider` for every player decision.
pub fn run_round_with<D, L, P>(
    rules: &TableRules,
    player: &mut Hand,
    dealer: &mut Hand,
    deck: &mut D,
    ledger: &mut L,
    decider: &mut P,
) -> RoundSummary
where
    D: CardSource + ?Sized,
    L: WagerLedger + ?Sized,
    P: PlayerDecider + ?Sized,
{
    let mut round = Round::begin(player, dealer, deck, ledger, rules);
    while !round.is_finished() {
        match decider.decide(round.player_hand(), round.dealer_up_card()) {
            Decision::Hit => round.hit(),
            Decision::Stand => round.stand(),
        };
    }

    let summary = round
        .summary()
        .unwrap_or_else(|| panic!("finished round has no summary"));
    decider.round_finished(&summary);
    round.conclude();
    summary
}
