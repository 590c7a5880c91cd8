//! Server communication: wire types and REST helpers.

pub mod api;
pub mod types;
