//! Line-based prompts. Every retry loop for bad input lives here.

use blackjack::{
    parse_bet, parse_decision, parse_yes_no, Card, Decision, Hand, PlayerDecider, RoundSummary,
};
use std::io::{self, BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
    json: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, json: bool) -> Self {
        Self {
            input,
            output,
            json,
        }
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// `None` once the input is closed.
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    pub fn ask_bet(&mut self, balance: u64, min_bet: u64) -> io::Result<Option<u64>> {
        loop {
            let Some(line) = self.ask(&format!("Balance {balance}. Your bet (or 'all'): "))? else {
                return Ok(None);
            };
            match parse_bet(&line, balance, min_bet) {
                Ok(bet) => {
                    if bet > balance {
                        self.say(&format!("* Only {balance} available, going all in *"))?;
                    }
                    return Ok(Some(bet));
                }
                Err(e) => self.say(&format!("* {e} *\n"))?,
            }
        }
    }

    pub fn ask_decision(&mut self) -> io::Result<Option<Decision>> {
        loop {
            let Some(line) = self.ask("Hit or stand? (h/s) ")? else {
                return Ok(None);
            };
            match parse_decision(&line) {
                Ok(decision) => return Ok(Some(decision)),
                Err(e) => self.say(&format!("* {e}, enter h/hit or s/stand *\n"))?,
            }
        }
    }

    pub fn ask_play_again(&mut self) -> io::Result<bool> {
        loop {
            let Some(line) = self.ask("Do you want to play again? (y/n) ")? else {
                return Ok(false);
            };
            match parse_yes_no(&line) {
                Ok(answer) => return Ok(answer),
                Err(_) => self.say("* You need to enter one of the following: y/yes, n/no *\n")?,
            }
        }
    }

    fn show_turn(&mut self, player: &Hand, dealer_up: &Card) -> io::Result<Option<Decision>> {
        self.say(&format!("Dealer shows {dealer_up}"))?;
        self.say(&format!("You hold {player}  ({})", player.score()))?;
        self.ask_decision()
    }

    fn show_summary(&mut self, summary: &RoundSummary) -> io::Result<()> {
        if self.json {
            let line = serde_json::to_string(summary)
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
            return self.say(&line);
        }
        let player = Hand::from_cards(summary.player_cards.clone());
        let dealer = Hand::from_cards(summary.dealer_cards.clone());
        self.say(&format!("Dealer: {dealer}  ({})", summary.dealer_score))?;
        self.say(&format!("You:    {player}  ({})", summary.player_score))?;
        self.say(&format!("{}. Balance: {}\n", summary.outcome, summary.balance_after))
    }
}

impl<R: BufRead, W: Write> PlayerDecider for Console<R, W> {
    fn decide(&mut self, player: &Hand, dealer_up: &Card) -> Decision {
        match self.show_turn(player, dealer_up) {
            Ok(Some(decision)) => decision,
            Ok(None) => {
                log::warn!("Input closed mid-round, standing");
                Decision::Stand
            }
            Err(e) => {
                log::error!("Terminal error mid-round, standing: {e}");
                Decision::Stand
            }
        }
    }

    fn round_finished(&mut self, summary: &RoundSummary) {
        if let Err(e) = self.show_summary(summary) {
            log::error!("Failed to print round result: {e}");
        }
    }
}
