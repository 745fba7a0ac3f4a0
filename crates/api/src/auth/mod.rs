//! Session primitives.
//!
//! - [`session`] -- signed NGO session token generation and validation.

pub mod session;
