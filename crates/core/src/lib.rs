//! Trip journal domain logic.
//!
//! Pure computation and repository contracts for the photo album suggestion
//! engine. Nothing in this crate talks to a database directly; persistence is
//! reached through the traits in [`album_suggestion::repository`].

pub mod album_suggestion;
pub mod error;
pub mod geo;
pub mod types;
