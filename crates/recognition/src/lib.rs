#![doc = include_str!("../README.md")]

mod recognize;

pub use recognize::*;
