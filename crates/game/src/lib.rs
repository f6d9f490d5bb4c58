//! Game controller for the chess core.
//!
//! Sits between a presentation layer and the engine: validates proposed
//! human moves against the pseudo-legal move list, applies moves by board
//! replacement, alternates sides, and invokes the search engine when the
//! automated side is to move. Also carries the game settings and the
//! one-shot ambient-music cue the presentation layer may wire up.

pub mod audio;
pub mod config;
pub mod game;

pub use audio::{MusicCue, AMBIENT_MUSIC};
pub use config::GameConfig;
pub use game::{Game, GameStatus, Proposal};
