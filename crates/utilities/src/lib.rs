//! Utility types and functions for the REFA toolset.
//!
//! Forbid unsafe code in this crate.
#![forbid(unsafe_code)]

mod error;
mod timing;

pub use error::*;
pub use random_test::*;
pub use timing::*;
