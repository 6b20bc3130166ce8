//! Goodness-of-fit metrics for regression predictions

#![deny(unused_imports)]
#![warn(missing_docs)]

#[macro_use]
extern crate log;

mod error;
mod r_squared;

pub use error::{InvalidType, Result, ScoreError};
pub use r_squared::r_squared;
