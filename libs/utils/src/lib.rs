//! Text and terminal utilities shared by the crates in this repo.

pub mod term;
pub mod text;
