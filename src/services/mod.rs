//! External interactions
//!
//! The only outside surface this app has: reading the offer catalog the
//! extraction pipeline wrote to disk.

pub mod catalog;

pub use catalog::load_offers;
