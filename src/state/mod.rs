//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`requests`, `orgs`, `toast`) so individual
//! components can depend on small focused models, and the accept/decline
//! state machine stays testable without a rendering layer.

pub mod orgs;
pub mod requests;
pub mod toast;
