//! Application layer containing the core game logic.
//!
//! This module defines the `GameEngine` which plays a single round: it draws
//! an outcome through the injected generator port and computes the payout.
//! Validation happens at the boundary before a request ever reaches it.

pub mod engine;
