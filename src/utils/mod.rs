//! Low-level helpers shared by the rest of the crate.
//!
//! Nothing in here is part of the public API.

pub(crate) mod ct;

pub(crate) use ct::ConstantTimeEq;
