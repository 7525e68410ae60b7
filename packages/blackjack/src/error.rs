use thiserror::Error;

/// Rejected player input. Always recoverable by asking again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("'{0}' is not a whole number of tokens")]
    NotANumber(String),
    #[error("bet must be at least {min}")]
    BelowMinimum { min: u64 },
    #[error("'{0}' is not a valid choice")]
    UnknownChoice(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("balance is empty, game over")]
    GameOver,
    #[error("bet of {bet} is below the table minimum of {min}")]
    BetBelowMinimum { bet: u64, min: u64 },
}
