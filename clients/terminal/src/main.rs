mod prompt;

use blackjack::{Table, TableError, TableRules, DEALER_STANDS_AT};
use clap::Parser;
use prompt::Console;
use std::io::{self, BufRead, Write};

type BoxErr = Box<dyn std::error::Error + Send + Sync>;

#[derive(Parser)]
#[command(name = "blackjack", about = "Play blackjack against the dealer in your terminal")]
struct Cli {
    /// Tokens you sit down with
    #[arg(long, env = "BLACKJACK_STARTING_BALANCE", default_value = "500")]
    starting_balance: u64,

    /// Smallest bet the table accepts
    #[arg(long, env = "BLACKJACK_MIN_BET", default_value = "1")]
    min_bet: u64,

    /// Dealer draws while below this total
    #[arg(long, env = "BLACKJACK_DEALER_STANDS_AT", default_value_t = DEALER_STANDS_AT)]
    dealer_stands_at: u32,

    /// Seed the shuffle for a reproducible session
    #[arg(long, env = "BLACKJACK_SEED")]
    seed: Option<u64>,

    /// Print each round result as a JSON line
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl Cli {
    fn rules(&self) -> TableRules {
        TableRules {
            dealer_stands_at: self.dealer_stands_at,
            starting_balance: self.starting_balance,
            min_bet: self.min_bet,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let rules = cli.rules();
    log::info!("Table rules: {rules:?}");

    let mut table = match cli.seed {
        Some(seed) => Table::with_seed(rules, seed),
        None => Table::new(rules),
    };

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), cli.json);

    if let Err(e) = play(&mut table, &mut console) {
        log::error!("Game aborted: {e}");
        std::process::exit(1);
    }
}

fn play<R: BufRead, W: Write>(table: &mut Table, console: &mut Console<R, W>) -> Result<(), BoxErr> {
    console.say("Welcome to the blackjack table!\n")?;

    loop {
        let Some(bet) = console.ask_bet(table.balance(), table.rules().min_bet)? else {
            break;
        };

        match table.play_round(bet, console) {
            Ok(_) => {}
            Err(e @ TableError::BetBelowMinimum { .. }) => {
                console.say(&format!("* {e} *\n"))?;
                continue;
            }
            Err(TableError::GameOver) => break,
        }

        if table.is_game_over() {
            console.say("You are out of tokens. Game over!")?;
            break;
        }
        if !console.ask_play_again()? {
            console.say("\nThanks for playing! See you next time!")?;
            break;
        }
    }

    console.say(&table.stats().to_string())?;
    Ok(())
}
