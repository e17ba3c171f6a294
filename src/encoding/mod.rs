//! Text encodings of derived values.
//!
//! Currently includes the PHC string format used to persist password
//! hashes together with the parameters needed to verify them.

pub mod phc;

/// Re-export of the PHC digest type.
pub use phc::PhcString;
