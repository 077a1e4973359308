//! Drag country shapes over the globe and watch them keep their true size.
//!
//! The geometric engine lives in the member crates; this crate re-exports
//! them and adds the drag [`session`] that ties features, drop targets, and
//! celestial bodies together.

pub mod session;

pub use truesize_config as config;
pub use truesize_core as primitives;
pub use truesize_export as export;
pub use truesize_geometry as geometry;
pub use truesize_sphere as sphere;
