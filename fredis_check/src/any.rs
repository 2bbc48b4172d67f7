use crate::generator::{Generator, State};

/// Picks one of its generators uniformly and yields that generator's item.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub struct Any<G>(pub G);

impl<G: Generator, const N: usize> Generator for Any<[G; N]> {
    type Item = Option<G::Item>;

    fn generate(&mut self, state: &mut State) -> Self::Item {
        if N == 0 {
            None
        } else {
            Some(self.0[state.random.usize(..N)].generate(state))
        }
    }
}

impl<G: Generator> Generator for Any<Vec<G>> {
    type Item = Option<G::Item>;

    fn generate(&mut self, state: &mut State) -> Self::Item {
        if self.0.is_empty() {
            None
        } else {
            let index = state.random.usize(..self.0.len());
            Some(self.0[index].generate(state))
        }
    }
}

macro_rules! tuple {
    () => {};
    ($p:ident, $t:ident $(,$ps:ident, $ts:ident)*) => {
        impl<$t: Generator, $($ts: Generator<Item = $t::Item>,)*> Generator for Any<($t, $($ts,)*)> {
            type Item = $t::Item;

            fn generate(&mut self, state: &mut State) -> Self::Item {
                let ($p, $($ps,)*) = &mut self.0;
                let count = fredis_macro::count!($p $(,$ps)*);
                let mut _index = state.random.u8(..count);
                if _index == 0 {
                    return $p.generate(state);
                }
                $(
                    _index -= 1;
                    if _index == 0 {
                        return $ps.generate(state);
                    }
                )*
                unreachable!()
            }
        }
    };
}

fredis_macro::recurse_8!(tuple);
