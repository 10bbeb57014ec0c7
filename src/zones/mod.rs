//! Card piles.
//!
//! Each game has two shared ordered zones: the face-down draw pile and the
//! face-up discard pile. Hands live on `Player`.

pub mod pile;

pub use pile::Pile;
