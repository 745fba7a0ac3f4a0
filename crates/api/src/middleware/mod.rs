//! Request extractors.
//!
//! - [`session::NgoSession`] -- requires a valid NGO session Bearer token.

pub mod session;
