use crate::{PayoutRatio, RoundOutcome, Settlement};
use serde::{Deserialize, Serialize};

/// Token bookkeeping for one player's wagers.
pub trait WagerLedger {
    /// Open a bet, clamped to the balance. Returns the amount actually staked.
    fn place_bet(&mut self, amount: u64) -> u64;
    fn current_bet(&self) -> u64;
    fn balance(&self) -> u64;
    /// Credit the full bet on top of the stake.
    fn pay_full(&mut self);
    /// Credit half the bet, rounded down.
    fn pay_half(&mut self);
    /// Lose the bet.
    fn forfeit(&mut self);

    fn settle(&mut self, outcome: RoundOutcome) {
        match outcome.settlement() {
            Settlement::PayFull => self.pay_full(),
            Settlement::PayHalf => self.pay_half(),
            Settlement::Forfeit => self.forfeit(),
        }
    }
}

/// `balance` is the authoritative total. An open bet stays counted in it
/// until settlement; a forfeit is the only operation that removes tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    balance: u64,
    current_bet: u64,
}

impl Ledger {
    pub fn new(balance: u64) -> Self {
        Self {
            balance,
            current_bet: 0,
        }
    }

    pub fn is_broke(&self) -> bool {
        self.balance == 0
    }

    fn close_bet(&mut self) -> u64 {
        std::mem::take(&mut self.current_bet)
    }
}

impl WagerLedger for Ledger {
    fn place_bet(&mut self, amount: u64) -> u64 {
        assert_eq!(self.current_bet, 0, "bet placed while another bet is open");
        self.current_bet = amount.min(self.balance);
        if self.current_bet < amount {
            log::debug!("Bet of {amount} clamped to balance {}", self.balance);
        }
        self.current_bet
    }

    fn current_bet(&self) -> u64 {
        self.current_bet
    }

    fn balance(&self) -> u64 {
        self.balance
    }

    fn pay_full(&mut self) {
        let bet = self.close_bet();
        self.balance += PayoutRatio::ONE_TO_ONE.calculate_payout(bet);
    }

    fn pay_half(&mut self) {
        let bet = self.close_bet();
        self.balance += PayoutRatio::ONE_TO_TWO.calculate_payout(bet);
    }

    fn forfeit(&mut self) {
        let bet = self.close_bet();
        self.balance -= bet;
    }
}
