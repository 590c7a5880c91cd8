//! Routed pages.

pub mod members;
