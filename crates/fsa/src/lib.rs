//!
//! A crate containing finite state automata loaded from a tabular description
//! format.
//!
//! This crate does not use unsafe code.

#![forbid(unsafe_code)]

mod finite_state_automaton;
mod fsa_builder;
mod io_fsa;
mod random_fsa;

pub use finite_state_automaton::*;
pub use fsa_builder::*;
pub use io_fsa::*;
pub use random_fsa::*;
