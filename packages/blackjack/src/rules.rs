use serde::{Deserialize, Serialize};

/// Payout multiplier as a ratio of the stake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutRatio {
    pub numerator: u16,
    pub denominator: u16,
}

impl PayoutRatio {
    pub const ONE_TO_ONE: Self = Self {
        numerator: 1,
        denominator: 1,
    };
    pub const ONE_TO_TWO: Self = Self {
        numerator: 1,
        denominator: 2,
    };

    pub fn new(numerator: u16, denominator: u16) -> Result<Self, &'static str> {
        if denominator == 0 {
            return Err("Denominator cannot be zero");
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Rounds down.
    pub fn calculate_payout(&self, bet: u64) -> u64 {
        (bet as u128 * self.numerator as u128 / self.denominator as u128) as u64
    }
}

/// Configurable table settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRules {
    /// Dealer draws while below this total
    pub dealer_stands_at: u32,

    /// Tokens the player sits down with
    pub starting_balance: u64,

    /// Smallest bet the table accepts
    pub min_bet: u64,
}

impl Default for TableRules {
    fn default() -> Self {
        Self {
            dealer_stands_at: crate::DEALER_STANDS_AT,
            starting_balance: 500,
            min_bet: 1,
        }
    }
}
