pub mod any;
pub mod check;
pub mod generator;
pub mod primitive;

pub use crate::{
    any::Any,
    check::{check, check_seeded, Failure},
    generator::{Constant, Generator, IntoGenerator, State},
};

#[cfg(test)]
mod tests;
