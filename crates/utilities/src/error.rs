use std::error::Error;

/// The error type used throughout the toolset.
///
/// This is a boxed trait object such that `?` can combine the various
/// underlying error types, for example `std::io::Error`, the thiserror enums
/// of the individual crates and plain string messages.
pub type RefaError = Box<dyn Error + Send + Sync>;
