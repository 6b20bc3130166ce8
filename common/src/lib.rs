//! This crate provides common funcionality shared by the scorer and the plotting helpers

#![deny(unused_imports, unused_crate_dependencies)]
#![warn(missing_docs)]

mod array_like;

pub use array_like::{ArrayLike, Shape};
