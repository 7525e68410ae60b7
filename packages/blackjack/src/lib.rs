mod card;
mod dealer;
mod deck;
mod error;
mod hand;
mod input;
mod ledger;
mod outcome;
mod round;
mod rules;
mod scoring;
mod stats;
mod table;

pub use card::{Card, Rank, Suit};
pub use dealer::{dealer_play, dealer_play_to, dealer_should_hit, DEALER_STANDS_AT};
pub use deck::{CardSource, Deck, DECK_SIZE};
pub use error::{InputError, TableError};
pub use hand::Hand;
pub use input::{parse_bet, parse_decision, parse_yes_no};
pub use ledger::{Ledger, WagerLedger};
pub use outcome::{RoundOutcome, RoundSummary, Settlement};
pub use round::{run_round, run_round_with, Decision, PlayerDecider, Round, RoundPhase};
pub use rules::{PayoutRatio, TableRules};
pub use scoring::{is_busted, is_natural, is_soft, score, BLACKJACK};
pub use stats::SessionStats;
pub use table::Table;
