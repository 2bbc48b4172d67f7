use crate::error::Error;
use std::cmp::Ordering;

/// A value of type `T`, or nothing.
///
/// `Empty` is declared first so that it orders before every `Present` value, both
/// between two `Maybe`s and against raw values.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Maybe<T> {
    Empty,
    Present(T),
}

/// Marker for the absence of a value; `maybe == NOTHING` holds when `maybe` is empty.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Nothing;

pub const NOTHING: Nothing = Nothing;

#[inline]
pub const fn some<T>(value: T) -> Maybe<T> {
    Maybe::Present(value)
}

#[inline]
pub const fn none<T>() -> Maybe<T> {
    Maybe::Empty
}

impl<T> Maybe<T> {
    #[inline]
    pub const fn has_value(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        !self.has_value()
    }

    /// # Panics
    /// With [`Error::EmptyAccess`] if `self` is empty.
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Empty => Error::EmptyAccess.raise(),
        }
    }

    /// # Panics
    /// With [`Error::EmptyAccess`] if `self` is empty.
    #[inline]
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Empty => Error::EmptyAccess.raise(),
        }
    }

    #[inline]
    pub fn otherwise<U: Into<T>>(self, default: U) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Empty => default.into(),
        }
    }

    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, map: F) -> Maybe<U> {
        match self {
            Maybe::Present(value) => Maybe::Present(map(value)),
            Maybe::Empty => Maybe::Empty,
        }
    }

    #[inline]
    pub fn flat_map<U, F: FnOnce(T) -> Maybe<U>>(self, map: F) -> Maybe<U> {
        match self {
            Maybe::Present(value) => map(value),
            Maybe::Empty => Maybe::Empty,
        }
    }

    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Empty => Maybe::Empty,
        }
    }

    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }

    /// Compares the value with `other`. Works for any `U` that `T` compares with, including
    /// types that `compare!` was not applied to. Always false when empty.
    #[inline]
    pub fn eq_value<U: ?Sized>(&self, other: &U) -> bool
    where
        T: PartialEq<U>,
    {
        match self {
            Maybe::Present(value) => value == other,
            Maybe::Empty => false,
        }
    }

    /// Orders the value against `other`. Empty orders before every value.
    #[inline]
    pub fn cmp_value<U: ?Sized>(&self, other: &U) -> Option<Ordering>
    where
        T: PartialOrd<U>,
    {
        match self {
            Maybe::Present(value) => value.partial_cmp(other),
            Maybe::Empty => Some(Ordering::Less),
        }
    }
}

impl<T: Clone> Maybe<&T> {
    #[inline]
    pub fn cloned(self) -> Maybe<T> {
        self.map(T::clone)
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Maybe::Empty
    }
}

impl<T> From<Nothing> for Maybe<T> {
    #[inline]
    fn from(_: Nothing) -> Self {
        Maybe::Empty
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Maybe::Present(value),
            None => Maybe::Empty,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Present(value) => Some(value),
            Maybe::Empty => None,
        }
    }
}

impl<T> From<&Maybe<T>> for bool {
    #[inline]
    fn from(value: &Maybe<T>) -> Self {
        value.has_value()
    }
}

impl<T> PartialEq<Nothing> for Maybe<T> {
    #[inline]
    fn eq(&self, _: &Nothing) -> bool {
        self.is_empty()
    }
}

impl<T> PartialEq<Maybe<T>> for Nothing {
    #[inline]
    fn eq(&self, other: &Maybe<T>) -> bool {
        other.is_empty()
    }
}

/// Implements `==`, `<` and the other comparisons in both directions between
/// [`Maybe<T>`](crate::Maybe) and a raw type. Generic types list their parameters first,
/// in brackets. An empty `Maybe` is never equal to a value and orders before it.
///
/// ```
/// #[derive(PartialEq, PartialOrd)]
/// struct Meters(f64);
/// fredis::compare!(Meters);
///
/// assert!(fredis::some(Meters(1.0)) == Meters(1.0));
/// assert!(Meters(2.0) > fredis::some(Meters(1.0)));
/// assert!(fredis::none::<Meters>() < Meters(0.0));
/// ```
#[macro_export]
macro_rules! compare {
    (@impl [$($g:tt)*] $t:ty) => {
        impl<$($g)*> PartialEq<$t> for $crate::Maybe<T>
        where
            T: PartialEq<$t>,
        {
            #[inline]
            fn eq(&self, other: &$t) -> bool {
                self.eq_value(other)
            }
        }

        impl<$($g)*> PartialEq<$crate::Maybe<T>> for $t
        where
            $t: PartialEq<T>,
        {
            #[inline]
            fn eq(&self, other: &$crate::Maybe<T>) -> bool {
                match other {
                    $crate::Maybe::Present(value) => self == value,
                    $crate::Maybe::Empty => false,
                }
            }
        }

        impl<$($g)*> PartialOrd<$t> for $crate::Maybe<T>
        where
            T: PartialOrd<$t>,
        {
            #[inline]
            fn partial_cmp(&self, other: &$t) -> Option<::core::cmp::Ordering> {
                self.cmp_value(other)
            }
        }

        impl<$($g)*> PartialOrd<$crate::Maybe<T>> for $t
        where
            $t: PartialOrd<T>,
        {
            #[inline]
            fn partial_cmp(&self, other: &$crate::Maybe<T>) -> Option<::core::cmp::Ordering> {
                match other {
                    $crate::Maybe::Present(value) => self.partial_cmp(value),
                    $crate::Maybe::Empty => Some(::core::cmp::Ordering::Greater),
                }
            }
        }
    };
    ([$($l:lifetime),+] $t:ty) => {
        $crate::compare!(@impl [$($l,)+ T] $t);
    };
    ([$($u:ident),+] $t:ty) => {
        $crate::compare!(@impl [T, $($u),+] $t);
    };
    ($($t:ty),+ $(,)?) => {
        $($crate::compare!(@impl [T] $t);)+
    };
}

fredis_macro::primitives!(compare);
compare!(String);
compare!(['a] &'a str);
compare!([U] Vec<U>);
compare!([U] Option<U>);
