//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod album_repo;
pub mod photo_repo;
pub mod trip_repo;

pub use album_repo::AlbumRepo;
pub use photo_repo::PhotoRepo;
pub use trip_repo::TripRepo;
