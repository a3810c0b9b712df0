//! Backend for a collection of browser casual games.
//!
//! The one substantive piece is the response generator for
//! the Turing Test game mode: per request it either calls
//! the configured language-model provider or degrades to a
//! deterministic local generator, shaping the "humanness" of
//! the output by a difficulty level in 1..=6.

pub mod error;
pub mod config;
pub mod providers;
pub mod request;
pub mod fallback;
pub mod generator;
pub mod routes;

pub use fallback::ResponseCategory;
pub use generator::ResponseGenerator;
