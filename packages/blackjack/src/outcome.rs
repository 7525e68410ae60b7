use crate::Card;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal result of a round. Exactly one is produced per round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Player reached 21 and the dealer did not.
    PlayerBlackjack,
    /// Player and dealer both reached 21.
    PushBlackjack,
    PlayerBust,
    DealerBust,
    PlayerWin,
    DealerWin,
    Push,
}

/// Ledger operation that settles a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Settlement {
    PayFull,
    PayHalf,
    Forfeit,
}

impl RoundOutcome {
    pub fn settlement(&self) -> Settlement {
        match self {
            RoundOutcome::PlayerBlackjack | RoundOutcome::DealerBust | RoundOutcome::PlayerWin => {
                Settlement::PayFull
            }
            RoundOutcome::PushBlackjack | RoundOutcome::Push => Settlement::PayHalf,
            RoundOutcome::PlayerBust | RoundOutcome::DealerWin => Settlement::Forfeit,
        }
    }

    pub fn is_blackjack(&self) -> bool {
        matches!(
            self,
            RoundOutcome::PlayerBlackjack | RoundOutcome::PushBlackjack
        )
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            RoundOutcome::PlayerBlackjack => "Blackjack! You win",
            RoundOutcome::PushBlackjack => "Both hit 21, push",
            RoundOutcome::PlayerBust => "Bust! You lose",
            RoundOutcome::DealerBust => "Dealer busts, you win",
            RoundOutcome::PlayerWin => "You win",
            RoundOutcome::DealerWin => "Dealer wins",
            RoundOutcome::Push => "Push",
        };
        f.write_str(msg)
    }
}

/// Snapshot of a finished round, taken before the hands are cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub outcome: RoundOutcome,
    pub player_cards: Vec<Card>,
    pub dealer_cards: Vec<Card>,
    pub player_score: u32,
    pub dealer_score: u32,
    pub bet: u64,
    pub balance_after: u64,
}

impl RoundSummary {
    /// Signed change in balance caused by this round.
    pub fn net(&self) -> i64 {
        match self.outcome.settlement() {
            Settlement::PayFull => self.bet as i64,
            Settlement::PayHalf => (self.bet / 2) as i64,
            Settlement::Forfeit => -(self.bet as i64),
        }
    }
}
