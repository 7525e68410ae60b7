use crate::{RoundSummary, Settlement};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Running totals across the rounds played at a table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub rounds: u32,
    pub wins: u32,
    pub pushes: u32,
    pub losses: u32,
    pub blackjacks: u32,
    pub net_winnings: i64,
}

impl SessionStats {
    pub fn record(&mut self, summary: &RoundSummary) {
        self.rounds += 1;
        match summary.outcome.settlement() {
            Settlement::PayFull => self.wins += 1,
            Settlement::PayHalf => self.pushes += 1,
            Settlement::Forfeit => self.losses += 1,
        }
        if summary.outcome.is_blackjack() {
            self.blackjacks += 1;
        }
        self.net_winnings += summary.net();
    }
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const WIDTH: usize = 40;
        const TEXT_WIDTH: usize = 28;
        const NUM_WIDTH: usize = WIDTH - TEXT_WIDTH;

        writeln!(f, "{:-^WIDTH$}", "stats")?;
        writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}", "rounds played:", self.rounds)?;
        writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}", "rounds won:", self.wins)?;
        writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}", "rounds pushed:", self.pushes)?;
        writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}", "rounds lost:", self.losses)?;
        writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}", "blackjacks:", self.blackjacks)?;
        writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}", "net winnings:", self.net_winnings)?;
        write!(f, "{}", "-".repeat(WIDTH))
    }
}
