use super::play::{MAX_NUMBER, MIN_NUMBER, PlayPayload, PlayRequest};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single violated rule, addressed by the field it applies to.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: String) -> Self {
        Self {
            field: field.to_string(),
            message,
        }
    }
}

/// The payload delivered on the errors queue: every violated rule for the
/// rejected request, in rule order. Never empty.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ErrorResult {
    pub errors: Vec<ValidationError>,
}

/// Checks every rule against the raw payload and collects all violations
/// before answering; a request that fails any rule never reaches the engine.
///
/// Rules, in reported order:
/// - `bet` must be present and strictly positive
/// - `number` must be present and at least [`MIN_NUMBER`]
/// - `number` must be at most [`MAX_NUMBER`]
pub fn validate(payload: &PlayPayload) -> Result<PlayRequest, ErrorResult> {
    let mut errors = Vec::new();

    let bet = match payload.bet {
        Some(bet) if bet > Decimal::ZERO => Some(bet),
        _ => {
            errors.push(ValidationError::new(
                "bet",
                "Bet must be bigger than 0".to_string(),
            ));
            None
        }
    };

    let number = match payload.number {
        Some(number) => {
            if number < MIN_NUMBER {
                errors.push(ValidationError::new(
                    "number",
                    format!("Number should not be less than {MIN_NUMBER}"),
                ));
            }
            if number > MAX_NUMBER {
                errors.push(ValidationError::new(
                    "number",
                    format!("Number should not be greater than {MAX_NUMBER}"),
                ));
            }
            (MIN_NUMBER..=MAX_NUMBER).contains(&number).then_some(number)
        }
        None => {
            errors.push(ValidationError::new(
                "number",
                format!("Number should not be less than {MIN_NUMBER}"),
            ));
            None
        }
    };

    match (bet, number) {
        (Some(bet), Some(number)) => Ok(PlayRequest { bet, number }),
        _ => Err(ErrorResult { errors }),
    }
}
