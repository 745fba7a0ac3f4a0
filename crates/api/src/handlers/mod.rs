//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to `relief_core` and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod pledges;
pub mod session;
pub mod villages;
