//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource. Handlers
//! delegate to services in `tripjournal_core` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod album_suggestions;
