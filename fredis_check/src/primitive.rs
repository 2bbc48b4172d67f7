use crate::generator::{Generator, IntoGenerator, State};
use std::{
    marker::PhantomData,
    ops::{self, Bound, RangeBounds},
};

/// Generates any value of `T`, growing with [`State::size`].
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub struct Full<T>(PhantomData<T>);

/// Inclusive range with validated bounds.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub struct Range<T> {
    start: T,
    end: T,
}

impl<T> Copy for Full<T> {}
impl<T> Clone for Full<T> {
    fn clone(&self) -> Self {
        Self(PhantomData)
    }
}

impl<T> Full<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

#[inline]
fn special<T: Copy>(values: &[T], state: &mut State) -> T {
    values[state.random.usize(..values.len())]
}

impl IntoGenerator for bool {
    type Item = Self;
    type Generator = [bool; 2];
    fn generator() -> Self::Generator {
        [false, true]
    }
}

macro_rules! range {
    ($t:ty, $r:ty) => {
        impl Generator for $r {
            type Item = $t;

            fn generate(&mut self, state: &mut State) -> Self::Item {
                match Range::<$t>::new(self.clone()) {
                    Some(mut range) => range.generate(state),
                    None => panic!("empty range '{:?}'", self),
                }
            }
        }
    };
}

macro_rules! ranges {
    ($t:ident) => {
        impl IntoGenerator for $t {
            type Item = $t;
            type Generator = Full<$t>;
            fn generator() -> Self::Generator {
                Full::new()
            }
        }

        range!($t, ops::Range<$t>);
        range!($t, ops::RangeInclusive<$t>);
        range!($t, ops::RangeFrom<$t>);
        range!($t, ops::RangeTo<$t>);
        range!($t, ops::RangeToInclusive<$t>);
    };
}

mod character {
    use super::*;
    use std::convert::TryFrom;

    impl Full<char> {
        const SPECIAL: [char; 3] = ['\u{0000}', char::MAX, char::REPLACEMENT_CHARACTER];
    }

    impl Range<char> {
        pub fn new(range: impl RangeBounds<char>) -> Option<Self> {
            let start = match range.start_bound() {
                Bound::Included(&bound) => bound,
                Bound::Excluded(&bound) => char::try_from((bound as u32).checked_add(1)?).ok()?,
                Bound::Unbounded => '\u{0000}',
            };
            let end = match range.end_bound() {
                Bound::Included(&bound) => bound,
                Bound::Excluded(&bound) => char::try_from((bound as u32).checked_sub(1)?).ok()?,
                Bound::Unbounded => char::MAX,
            };
            if end < start {
                None
            } else {
                Some(Self { start, end })
            }
        }
    }

    impl Generator for Range<char> {
        type Item = char;

        fn generate(&mut self, state: &mut State) -> Self::Item {
            state.random.char(self.start..=self.end)
        }
    }

    impl Generator for Full<char> {
        type Item = char;

        fn generate(&mut self, state: &mut State) -> Self::Item {
            match state.random.u8(..) {
                0..=239 => state.random.char(' '..='~'),
                240..=254 => state.random.char(..),
                255 => special(&Full::<char>::SPECIAL, state),
            }
        }
    }

    ranges!(char);
}

mod number {
    use super::*;

    macro_rules! integer {
        ($t:ident) => {
            impl Full<$t> {
                const SPECIAL: [$t; 3] = [0 as $t, $t::MIN, $t::MAX];
            }

            impl Range<$t> {
                pub fn new(range: impl RangeBounds<$t>) -> Option<Self> {
                    let start = match range.start_bound() {
                        Bound::Included(&bound) => bound,
                        Bound::Excluded(&bound) => bound.checked_add(1 as $t)?,
                        Bound::Unbounded => $t::MIN,
                    };
                    let end = match range.end_bound() {
                        Bound::Included(&bound) => bound,
                        Bound::Excluded(&bound) => bound.checked_sub(1 as $t)?,
                        Bound::Unbounded => $t::MAX,
                    };
                    if end < start {
                        None
                    } else {
                        Some(Self { start, end })
                    }
                }

                /// Narrows the range toward zero (or toward its closest bound) by `size`.
                fn shrinked(&self, size: f64) -> Self {
                    let start = self.start as f64;
                    let end = self.end as f64;
                    let anchor = (0 as f64).max(start).min(end);
                    Self {
                        start: (anchor + (start - anchor) * size) as $t,
                        end: (anchor + (end - anchor) * size) as $t,
                    }
                }
            }

            impl Generator for Range<$t> {
                type Item = $t;

                #[inline]
                fn generate(&mut self, state: &mut State) -> Self::Item {
                    state.random.$t(self.start..=self.end)
                }
            }

            impl Generator for Full<$t> {
                type Item = $t;

                fn generate(&mut self, state: &mut State) -> Self::Item {
                    match state.random.u8(..) {
                        0..=249 => Range {
                            start: $t::MIN,
                            end: $t::MAX,
                        }
                        .shrinked(state.size)
                        .generate(state),
                        250..=255 => special(&Full::<$t>::SPECIAL, state),
                    }
                }
            }

            ranges!($t);
        };
        ($($t:ident),*) => { $(integer!($t);)* };
    }

    macro_rules! floating {
        ($t:ident) => {
            impl Full<$t> {
                const SPECIAL: [$t; 4] = [0 as $t, $t::MIN, $t::MAX, $t::EPSILON];
            }

            impl Range<$t> {
                /// Only finite bounds are accepted; `Unbounded` becomes `MIN` or `MAX`. An
                /// excluded bound moves to the adjacent representable value inside the range.
                pub fn new(range: impl RangeBounds<$t>) -> Option<Self> {
                    let start = match range.start_bound() {
                        Bound::Included(&bound) => bound,
                        Bound::Excluded(&bound) => Self::adjacent(bound, true),
                        Bound::Unbounded => $t::MIN,
                    };
                    let end = match range.end_bound() {
                        Bound::Included(&bound) => bound,
                        Bound::Excluded(&bound) => Self::adjacent(bound, false),
                        Bound::Unbounded => $t::MAX,
                    };
                    if start.is_finite() && end.is_finite() && start <= end {
                        Some(Self { start, end })
                    } else {
                        None
                    }
                }

                fn adjacent(value: $t, up: bool) -> $t {
                    if value.is_nan() || value.is_infinite() {
                        value
                    } else if value == 0 as $t {
                        let tiny = $t::from_bits(1);
                        if up { tiny } else { -tiny }
                    } else if (value > 0 as $t) == up {
                        $t::from_bits(value.to_bits() + 1)
                    } else {
                        $t::from_bits(value.to_bits() - 1)
                    }
                }
            }

            impl Generator for Range<$t> {
                type Item = $t;

                #[inline]
                fn generate(&mut self, state: &mut State) -> Self::Item {
                    let ratio = state.random.$t();
                    // Interpolates without computing 'end - start', which overflows for wide ranges.
                    let value = self.start * (1 as $t - ratio) + self.end * ratio;
                    value.max(self.start).min(self.end)
                }
            }

            impl Generator for Full<$t> {
                type Item = $t;

                fn generate(&mut self, state: &mut State) -> Self::Item {
                    match state.random.u8(..) {
                        0..=249 => {
                            let size = state.size as $t;
                            Range {
                                start: $t::MIN * size,
                                end: $t::MAX * size,
                            }
                            .generate(state)
                        }
                        250..=255 => special(&Full::<$t>::SPECIAL, state),
                    }
                }
            }

            ranges!($t);
        };
        ($($t:ident),*) => { $(floating!($t);)* };
    }

    integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
    floating!(f32, f64);
}
