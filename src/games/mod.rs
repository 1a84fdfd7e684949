//! # Game Logic
//!
//! Rules for the two minigames, free of any drawing or input handling so they
//! can be played and tested directly.

pub mod hand_cricket;
pub mod maze;
