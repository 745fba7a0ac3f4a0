//! Flood-relief village directory core.
//!
//! Pure filter/sort/validate logic for the NGO dashboard. No I/O and no
//! framework dependencies; callers own the record list and pass it in.

pub mod directory;
pub mod error;
pub mod pledge;
pub mod seed;
pub mod stats;
pub mod types;
pub mod village;
