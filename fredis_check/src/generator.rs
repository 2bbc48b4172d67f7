use fastrand::Rng;
use std::{iter::FromIterator, marker::PhantomData, ops::Range};

/// Types that have a canonical generator.
pub trait IntoGenerator {
    type Item;
    type Generator: Generator<Item = Self::Item>;

    fn generator() -> Self::Generator;

    #[inline]
    fn generate(state: &mut State) -> Self::Item {
        Self::generator().generate(state)
    }
}

pub trait Generator {
    type Item;
    fn generate(&mut self, state: &mut State) -> Self::Item;

    #[inline]
    fn map<T, F: FnMut(Self::Item) -> T>(self, map: F) -> Map<Self, T, F>
    where
        Self: Sized,
    {
        Map(self, map, PhantomData)
    }

    #[inline]
    fn bind<G: Generator, F: FnMut(Self::Item) -> G>(self, bind: F) -> Flatten<Map<Self, G, F>>
    where
        Self: Sized,
    {
        self.map(bind).flatten()
    }

    #[inline]
    fn flatten(self) -> Flatten<Self>
    where
        Self: Sized,
        Self::Item: Generator,
    {
        Flatten(self)
    }

    #[inline]
    fn collect<F: FromIterator<Self::Item>>(self) -> Many<Count, Self, F>
    where
        Self: Sized,
    {
        Many(Count, self, PhantomData)
    }

    #[inline]
    fn sample(self, count: usize) -> Sample<Self>
    where
        Self: Sized,
    {
        self.sample_with(count, Rng::new())
    }

    /// Samples from a fixed seed so that a failing run can be replayed.
    #[inline]
    fn sample_seeded(self, count: usize, seed: u64) -> Sample<Self>
    where
        Self: Sized,
    {
        self.sample_with(count, Rng::with_seed(seed))
    }

    #[inline]
    fn sample_with(self, count: usize, random: Rng) -> Sample<Self>
    where
        Self: Sized,
    {
        Sample {
            generator: self,
            index: 0,
            count,
            random,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct State {
    pub random: Rng,
    /// Ratio in `[0, 1]` that grows with the sample index; generators scale their output
    /// with it so that early samples stay small.
    pub size: f64,
}

pub struct Sample<G> {
    generator: G,
    random: Rng,
    index: usize,
    count: usize,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Constant<T>(pub T);
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Map<G, T, F>(pub G, pub F, PhantomData<T>);
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Flatten<G>(pub G);
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Many<C, G, F>(pub C, pub G, PhantomData<F>);
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Count;

impl Count {
    pub const RANGE: Range<usize> = 0..64;
}

impl State {
    pub fn new(seed: u64) -> Self {
        Self {
            random: Rng::with_seed(seed),
            size: 1.,
        }
    }
}

impl<G: Generator> Iterator for Sample<G> {
    type Item = G::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.count {
            let size = (self.index as f64 / self.count as f64).min(1.);
            self.index += 1;
            let mut state = State {
                random: self.random.fork(),
                size,
            };
            Some(self.generator.generate(&mut state))
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl<G: Generator> ExactSizeIterator for Sample<G> {
    #[inline]
    fn len(&self) -> usize {
        self.count - self.index
    }
}

impl IntoGenerator for String {
    type Item = Self;
    type Generator = Many<Count, <char as IntoGenerator>::Generator, Self>;
    #[inline]
    fn generator() -> Self::Generator {
        char::generator().collect()
    }
}

impl<G: IntoGenerator> IntoGenerator for Vec<G> {
    type Item = Vec<G::Item>;
    type Generator = Many<Count, G::Generator, Self::Item>;
    #[inline]
    fn generator() -> Self::Generator {
        G::generator().collect()
    }
}

impl<T: Clone> Generator for Constant<T> {
    type Item = T;
    #[inline]
    fn generate(&mut self, _: &mut State) -> Self::Item {
        self.0.clone()
    }
}

impl Generator for Count {
    type Item = usize;
    #[inline]
    fn generate(&mut self, state: &mut State) -> Self::Item {
        let end = (Count::RANGE.end as f64 * state.size).ceil() as usize;
        state.random.usize(Count::RANGE.start..=end.min(Count::RANGE.end))
    }
}

impl<G: Generator, T, F: FnMut(G::Item) -> T> Generator for Map<G, T, F> {
    type Item = T;
    #[inline]
    fn generate(&mut self, state: &mut State) -> Self::Item {
        (self.1)(self.0.generate(state))
    }
}

impl<G: Generator> Generator for Flatten<G>
where
    G::Item: Generator,
{
    type Item = <G::Item as Generator>::Item;
    #[inline]
    fn generate(&mut self, state: &mut State) -> Self::Item {
        self.0.generate(state).generate(state)
    }
}

impl<T: Clone, const N: usize> Generator for [T; N] {
    type Item = T;
    #[inline]
    fn generate(&mut self, state: &mut State) -> Self::Item {
        self[state.random.usize(0..N)].clone()
    }
}

impl<C: Generator<Item = usize>, G: Generator, F: FromIterator<G::Item>> Generator
    for Many<C, G, F>
{
    type Item = F;
    #[inline]
    fn generate(&mut self, state: &mut State) -> Self::Item {
        let count = self.0.generate(state);
        Iterator::map(0..count, |_| self.1.generate(state)).collect()
    }
}

macro_rules! tuple {
    ($($p:ident, $t:ident),*) => {
        impl<$($t: IntoGenerator,)*> IntoGenerator for ($($t,)*) {
            type Item = ($($t::Item,)*);
            type Generator = ($($t::Generator,)*);
            #[inline]
            fn generator() -> Self::Generator {
                ($($t::generator(),)*)
            }
        }

        impl<$($t: Generator,)*> Generator for ($($t,)*) {
            type Item = ($($t::Item,)*);
            #[inline]
            fn generate(&mut self, _state: &mut State) -> Self::Item {
                let ($($p,)*) = self;
                ($($p.generate(_state),)*)
            }
        }
    };
}

fredis_macro::recurse_8!(tuple);
