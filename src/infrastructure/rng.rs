use crate::domain::ports::OutcomeGenerator;
use crate::error::{GameError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

fn check_range(min: i32, max: i32) -> Result<()> {
    if min > max {
        return Err(GameError::InvalidRange { min, max });
    }
    Ok(())
}

/// Production outcome generator backed by `rand::thread_rng()`.
///
/// The thread-local RNG gives every calling thread its own independently
/// seeded state, so concurrent draws need no locking and cannot repeat or
/// correlate across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngOutcomeGenerator;

impl ThreadRngOutcomeGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl OutcomeGenerator for ThreadRngOutcomeGenerator {
    fn get_in_range(&self, min: i32, max: i32) -> Result<i32> {
        check_range(min, max)?;
        Ok(rand::thread_rng().gen_range(min..=max))
    }
}

/// Deterministic outcome generator for reproducible test runs.
///
/// Draws come from a seeded `StdRng`; two generators built from the same seed
/// produce the same sequence. The mutex keeps concurrent draws from
/// interleaving mid-step.
pub struct SeededOutcomeGenerator {
    rng: Mutex<StdRng>,
}

impl SeededOutcomeGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl OutcomeGenerator for SeededOutcomeGenerator {
    fn get_in_range(&self, min: i32, max: i32) -> Result<i32> {
        check_range(min, max)?;
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(rng.gen_range(min..=max))
    }
}

/// Outcome generator that always returns the same roll.
///
/// Stands in for the randomness source when a test needs to script the
/// round's outcome.
#[derive(Debug, Clone, Copy)]
pub struct FixedOutcomeGenerator {
    roll: i32,
}

impl FixedOutcomeGenerator {
    pub fn new(roll: i32) -> Self {
        Self { roll }
    }
}

impl OutcomeGenerator for FixedOutcomeGenerator {
    fn get_in_range(&self, min: i32, max: i32) -> Result<i32> {
        check_range(min, max)?;
        Ok(self.roll)
    }
}
