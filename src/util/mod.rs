//! Small reusable primitives shared across components.

pub mod avatar;
pub mod transition;
