use highroll::application::engine::GameEngine;
use highroll::domain::play::PlayRequest;
use highroll::infrastructure::rng::FixedOutcomeGenerator;
use rust_decimal::Decimal;

pub fn engine_with_roll(roll: i32) -> GameEngine {
    GameEngine::new(Box::new(FixedOutcomeGenerator::new(roll)))
}

pub fn request(bet: Decimal, number: i32) -> PlayRequest {
    PlayRequest { bet, number }
}
