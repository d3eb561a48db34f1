use crate::domain::play::{MAX_NUMBER, MIN_NUMBER, PlayRequest, PlayResponse};
use crate::domain::ports::OutcomeGeneratorBox;
use crate::error::Result;
use rust_decimal::{Decimal, RoundingStrategy};

/// Multiplier numerator fixing the theoretical return at 99%.
const PAYOUT_NUMERATOR: i32 = 99;

/// Plays a single round per request.
///
/// `GameEngine` owns the outcome generator port and is the only place the
/// payout formula lives. It holds no mutable state, so one instance can be
/// shared across any number of concurrent rounds.
pub struct GameEngine {
    outcome_generator: OutcomeGeneratorBox,
}

impl GameEngine {
    /// Creates a new `GameEngine` drawing outcomes from the given generator.
    pub fn new(outcome_generator: OutcomeGeneratorBox) -> Self {
        Self { outcome_generator }
    }

    /// Plays one round for an already-validated request.
    ///
    /// Draws a roll in `[1, 100]`; the player wins iff their number is
    /// strictly greater than the roll. A losing round pays zero. A range
    /// error from the generator is a contract defect and is propagated.
    pub fn handle(&self, request: &PlayRequest) -> Result<PlayResponse> {
        let roll = self.outcome_generator.get_in_range(MIN_NUMBER, MAX_NUMBER)?;
        if request.number > roll {
            Ok(PlayResponse::new(Self::calculate_win(request)))
        } else {
            Ok(PlayResponse::new(Decimal::ZERO))
        }
    }

    /// Computes the payout for a winning round.
    ///
    /// The multiplier is `99 / (100 - number)`, rounded to 2 decimal places
    /// half-up *before* it is applied to the bet; the product is then rounded
    /// the same way. The intermediate rounding is part of the payout contract
    /// and must not be collapsed into a single rounding step. At number 100
    /// the payout is a flat `bet x 99` ceiling.
    fn calculate_win(request: &PlayRequest) -> Decimal {
        let numerator = Decimal::from(PAYOUT_NUMERATOR);
        if request.number == MAX_NUMBER {
            return round_half_up(request.bet * numerator);
        }
        let multiplier = round_half_up(numerator / Decimal::from(MAX_NUMBER - request.number));
        round_half_up(request.bet * multiplier)
    }
}

/// Rounds to 2 decimal places, half away from zero.
fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
