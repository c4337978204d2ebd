#![doc = include_str!("../README.md")]
#![no_std]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]

#[cfg(test)]
#[macro_use]
extern crate alloc;

pub(crate) type Kbn<T> = compensated_summation::KahanBabuskaNeumaier<T>;

mod error;
pub use error::Error;

mod validate;

mod descriptive;
pub use descriptive::{mean, sample_stddev, sample_variance, sum};

mod partial_moments;
pub use partial_moments::{hpm, lpm};
