//! Kalaha engine library.
//!
//! Exposes the board representation, turn resolution, selection validation,
//! game registry, and protocol modules for use by integration tests and the
//! binary entry points.

pub mod board;
pub mod engine;
pub mod game;
pub mod movegen;
pub mod protocol;
pub mod resolve;
pub mod selfplay;
pub mod validate;
