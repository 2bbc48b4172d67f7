pub mod error;
pub mod maybe;
pub mod result;

pub use crate::{
    error::{Error, ErrorMsg, Variant},
    maybe::{none, some, Maybe, Nothing, NOTHING},
    result::{err, ok, Result},
};

#[cfg(test)]
mod tests;
