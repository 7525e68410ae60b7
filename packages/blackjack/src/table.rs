use crate::round::run_round_with;
use crate::{
    Card, CardSource, Deck, Hand, Ledger, PlayerDecider, RoundSummary, SessionStats, TableError,
    TableRules, WagerLedger,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Cards needed for the opening deal: two each.
const CARDS_PER_DEAL: usize = 4;

/// A single seat against the dealer. Owns the deck, the ledger and both hands
/// across rounds.
pub struct Table {
    rules: TableRules,
    deck: Deck,
    ledger: Ledger,
    player: Hand,
    dealer: Hand,
    rng: ChaCha8Rng,
    stats: SessionStats,
}

impl Table {
    pub fn new(rules: TableRules) -> Self {
        Self::with_rng(rules, ChaCha8Rng::from_entropy())
    }

    /// Same seed, same shuffles.
    pub fn with_seed(rules: TableRules, seed: u64) -> Self {
        Self::with_rng(rules, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(rules: TableRules, mut rng: ChaCha8Rng) -> Self {
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);
        Self::assemble(rules, deck, rng)
    }

    /// Table dealing from a prepared deck. Reshuffles still draw from `seed`.
    pub fn with_deck(rules: TableRules, deck: Deck, seed: u64) -> Self {
        Self::assemble(rules, deck, ChaCha8Rng::seed_from_u64(seed))
    }

    fn assemble(rules: TableRules, deck: Deck, rng: ChaCha8Rng) -> Self {
        Self {
            ledger: Ledger::new(rules.starting_balance),
            rules,
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            rng,
            stats: SessionStats::default(),
        }
    }

    pub fn rules(&self) -> &TableRules {
        &self.rules
    }

    pub fn balance(&self) -> u64 {
        self.ledger.balance()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn cards_left(&self) -> usize {
        self.deck.len()
    }

    pub fn is_game_over(&self) -> bool {
        self.ledger.is_broke()
    }

    /// Take a bet, deal, and play one round to completion.
    pub fn play_round<P>(&mut self, bet: u64, decider: &mut P) -> Result<RoundSummary, TableError>
    where
        P: PlayerDecider + ?Sized,
    {
        if self.ledger.is_broke() {
            return Err(TableError::GameOver);
        }
        if bet < self.rules.min_bet {
            return Err(TableError::BetBelowMinimum {
                bet,
                min: self.rules.min_bet,
            });
        }

        if self.deck.len() < CARDS_PER_DEAL {
            self.deck.reshuffle(&mut self.rng);
        }

        let staked = self.ledger.place_bet(bet);
        log::info!("Bet placed: {staked} of {}", self.ledger.balance());
        self.deal();

        let summary = run_round_with(
            &self.rules,
            &mut self.player,
            &mut self.dealer,
            &mut self.deck,
            &mut self.ledger,
            decider,
        );
        self.stats.record(&summary);

        if self.ledger.is_broke() {
            log::info!("Player is out of tokens after {} rounds", self.stats.rounds);
        }
        Ok(summary)
    }

    fn deal(&mut self) {
        debug_assert!(self.player.is_empty() && self.dealer.is_empty());
        for _ in 0..2 {
            let card = self.draw();
            self.player.add_card(card);
            let card = self.draw();
            self.dealer.add_card(card);
        }
    }

    fn draw(&mut self) -> Card {
        loop {
            if let Some(card) = self.deck.deal_card() {
                return card;
            }
            self.deck.reshuffle(&mut self.rng);
        }
    }
}
