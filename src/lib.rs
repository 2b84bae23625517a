pub mod board;
pub mod cards;
pub mod constants;
pub mod decider;
pub mod engine;
pub mod error;
pub mod player;
pub mod property;
pub mod rng;
pub mod settings;
pub mod types;
