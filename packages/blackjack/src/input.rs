use crate::{Decision, InputError};

/// Parse a bet typed at the prompt. `all` stakes the whole balance; amounts
/// above the balance are accepted and clamped when the bet is placed.
pub fn parse_bet(text: &str, balance: u64, min_bet: u64) -> Result<u64, InputError> {
    let text = text.trim();
    let bet = match text.to_lowercase().as_str() {
        "all" | "all-in" => balance,
        _ => text
            .parse::<u64>()
            .map_err(|_| InputError::NotANumber(text.to_string()))?,
    };
    if bet < min_bet.max(1) {
        return Err(InputError::BelowMinimum {
            min: min_bet.max(1),
        });
    }
    Ok(bet)
}

pub fn parse_decision(text: &str) -> Result<Decision, InputError> {
    match text.trim().to_lowercase().as_str() {
        "h" | "hit" => Ok(Decision::Hit),
        "s" | "stand" => Ok(Decision::Stand),
        other => Err(InputError::UnknownChoice(other.to_string())),
    }
}

pub fn parse_yes_no(text: &str) -> Result<bool, InputError> {
    match text.trim().to_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        other => Err(InputError::UnknownChoice(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bet_number() {
        assert_eq!(parse_bet(" 120\n", 500, 1), Ok(120));
    }

    #[test]
    fn test_parse_bet_above_balance_is_accepted() {
        assert_eq!(parse_bet("900", 500, 1), Ok(900));
    }

    #[test]
    fn test_parse_bet_all_in() {
        assert_eq!(parse_bet("ALL", 340, 1), Ok(340));
    }

    #[test]
    fn test_parse_bet_rejects_garbage() {
        assert_eq!(
            parse_bet("ten", 500, 1),
            Err(InputError::NotANumber("ten".to_string()))
        );
        assert!(matches!(parse_bet("-5", 500, 1), Err(InputError::NotANumber(_))));
    }

    #[test]
    fn test_parse_bet_minimum() {
        assert_eq!(parse_bet("0", 500, 0), Err(InputError::BelowMinimum { min: 1 }));
        assert_eq!(parse_bet("4", 500, 5), Err(InputError::BelowMinimum { min: 5 }));
    }

    #[test]
    fn test_parse_decision() {
        assert_eq!(parse_decision("H"), Ok(Decision::Hit));
        assert_eq!(parse_decision("stand "), Ok(Decision::Stand));
        assert!(parse_decision("double").is_err());
    }

    #[test]
    fn test_parse_yes_no() {
        assert_eq!(parse_yes_no("Yes"), Ok(true));
        assert_eq!(parse_yes_no("n"), Ok(false));
        assert!(parse_yes_no("maybe").is_err());
    }
}
