pub mod result;

use super::*;
use fredis_check::{Any, Constant, Generator};
use std::panic::{self, UnwindSafe};

pub const COUNT: usize = 1000;

pub fn maybe<G: Generator>(generator: G) -> impl Generator<Item = Maybe<G::Item>> {
    Any((generator.map(some), Constant(NOTHING).map(Maybe::from)))
}

pub fn result<G: Generator, H: Generator>(
    value: G,
    error: H,
) -> impl Generator<Item = Result<G::Item, H::Item>> {
    Any((value.map(Result::Ok), error.map(Result::Err)))
}

/// Runs `run` and returns the message of the panic it raised, if any.
pub fn panic_message<T>(run: impl FnOnce() -> T + UnwindSafe) -> Option<String> {
    let payload = panic::catch_unwind(run).err()?;
    match payload.downcast::<String>() {
        Ok(message) => Some(*message),
        Err(payload) => payload.downcast_ref::<&str>().map(|message| message.to_string()),
    }
}
