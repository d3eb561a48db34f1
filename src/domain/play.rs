use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Smallest number a player may pick; also the lower bound of the roll.
pub const MIN_NUMBER: i32 = 1;
/// Largest number a player may pick; also the upper bound of the roll.
pub const MAX_NUMBER: i32 = 100;

/// A play message as it arrives on the inbound channel.
///
/// Both fields are optional so that absent values can be reported as
/// validation errors instead of being rejected during deserialization.
/// Use [`validate`](super::validation::validate) to turn a payload into a
/// [`PlayRequest`].
#[derive(Debug, Deserialize, PartialEq, Clone, Copy, Default)]
pub struct PlayPayload {
    pub bet: Option<Decimal>,
    pub number: Option<i32>,
}

/// A validated request for one round: a positive stake and a chosen number
/// within [`MIN_NUMBER`]..=[`MAX_NUMBER`].
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct PlayRequest {
    pub bet: Decimal,
    pub number: i32,
}

/// The outcome of one round. `winning_amount` is zero exactly when the
/// player loses, otherwise the payout rounded to 2 decimal places.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct PlayResponse {
    #[serde(with = "rust_decimal::serde::float")]
    pub winning_amount: Decimal,
}

impl PlayResponse {
    pub fn new(winning_amount: Decimal) -> Self {
        Self { winning_amount }
    }
}
