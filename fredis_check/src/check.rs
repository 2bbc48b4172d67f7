use crate::generator::Generator;
use std::{error, fmt, result};

/// First generated item that did not satisfy a property.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Failure<T> {
    pub index: usize,
    pub item: T,
}

pub type Result<T> = result::Result<(), Failure<T>>;

/// Runs `property` against `count` samples of `generator`.
pub fn check<G: Generator, P: FnMut(&G::Item) -> bool>(
    generator: G,
    count: usize,
    property: P,
) -> Result<G::Item> {
    verify(generator.sample(count), property)
}

/// Same as [`check`] with a fixed seed.
pub fn check_seeded<G: Generator, P: FnMut(&G::Item) -> bool>(
    generator: G,
    count: usize,
    seed: u64,
    property: P,
) -> Result<G::Item> {
    verify(generator.sample_seeded(count, seed), property)
}

fn verify<T, P: FnMut(&T) -> bool>(items: impl Iterator<Item = T>, mut property: P) -> Result<T> {
    for (index, item) in items.enumerate() {
        if !property(&item) {
            return Err(Failure { index, item });
        }
    }
    Ok(())
}

impl<T: fmt::Debug> fmt::Display for Failure<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "property failed at sample {} for {:?}", self.index, self.item)
    }
}

impl<T: fmt::Debug> error::Error for Failure<T> {}
