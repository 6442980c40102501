#![doc = include_str!("../README.md")]
#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod hyst_vec;
pub mod policy;

pub use self::{
    error::{Error, Result},
    hyst_vec::{HystVec, IntoIter},
    policy::DEFAULT_CAPACITY,
};
