//! Caller identity: HS256 access tokens.

pub mod jwt;
