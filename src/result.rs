use crate::error::{Error, ErrorMsg, Variant, UNEXPECTED};
use std::any::Any;

/// A value of type `T`, or an error of type `E`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Result<T, E = ErrorMsg> {
    Ok(T),
    Err(E),
}

#[inline]
pub const fn ok<T>(value: T) -> Result<T> {
    Result::Ok(value)
}

#[inline]
pub fn err<T>(message: impl Into<ErrorMsg>) -> Result<T> {
    Result::Err(message.into())
}

impl<T, E> Result<T, E> {
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Result::Ok(_))
    }

    #[inline]
    pub const fn is_error(&self) -> bool {
        !self.is_ok()
    }

    /// # Panics
    /// With [`Error::WrongVariantAccess`] if `self` holds an error.
    #[inline]
    #[track_caller]
    pub fn get(&self) -> &T {
        match self {
            Result::Ok(value) => value,
            Result::Err(_) => Error::WrongVariantAccess(Variant::Ok).raise(),
        }
    }

    /// # Panics
    /// With [`Error::WrongVariantAccess`] if `self` holds an error.
    #[inline]
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Result::Ok(value) => value,
            Result::Err(_) => Error::WrongVariantAccess(Variant::Ok).raise(),
        }
    }

    /// # Panics
    /// With [`Error::WrongVariantAccess`] if `self` holds a value.
    #[inline]
    #[track_caller]
    pub fn get_error(&self) -> &E {
        match self {
            Result::Ok(_) => Error::WrongVariantAccess(Variant::Err).raise(),
            Result::Err(error) => error,
        }
    }

    /// # Panics
    /// With [`Error::WrongVariantAccess`] if `self` holds a value.
    #[inline]
    #[track_caller]
    pub fn into_error(self) -> E {
        match self {
            Result::Ok(_) => Error::WrongVariantAccess(Variant::Err).raise(),
            Result::Err(error) => error,
        }
    }

    /// Calls `then` with a reference to the value, if any, and returns a copy of `self`.
    #[inline]
    pub fn then<F: FnOnce(&T)>(&self, then: F) -> Self
    where
        Self: Clone,
    {
        if let Result::Ok(value) = self {
            then(value);
        }
        self.clone()
    }

    /// Moves the value, if any, into `then`. The result is consumed:
    ///
    /// ```compile_fail
    /// let result = fredis::ok(String::from("s1"));
    /// result.then_into(drop);
    /// result.then_into(drop);
    /// ```
    #[inline]
    pub fn then_into<F: FnOnce(T)>(self, then: F) {
        if let Result::Ok(value) = self {
            then(value);
        }
    }

    /// # Panics
    /// With [`Error::UnexpectedResult`] carrying `message` if `self` holds an error.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Result::Ok(value) => value,
            Result::Err(_) => Error::UnexpectedResult(message.into()).raise(),
        }
    }

    /// # Panics
    /// With [`Error::UnexpectedResult`] if `self` holds an error. The message is the
    /// error's own when `E` is [`ErrorMsg`] and [`UNEXPECTED`] otherwise.
    ///
    /// `E: 'static` is needed to recognize [`ErrorMsg`]. Errors that borrow, such as
    /// `Result<T, &'a E>`, go through [`Result::expect`] instead, or convert the error
    /// first with `map_error`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: 'static,
    {
        match self {
            Result::Ok(value) => value,
            Result::Err(error) => Error::UnexpectedResult(describe(&error)).raise(),
        }
    }

    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, map: F) -> Result<U, E> {
        match self {
            Result::Ok(value) => Result::Ok(map(value)),
            Result::Err(error) => Result::Err(error),
        }
    }

    #[inline]
    pub fn map_error<G, F: FnOnce(E) -> G>(self, map: F) -> Result<T, G> {
        match self {
            Result::Ok(value) => Result::Ok(value),
            Result::Err(error) => Result::Err(map(error)),
        }
    }

    #[inline]
    pub fn flat_map<U, F: FnOnce(T) -> Result<U, E>>(self, map: F) -> Result<U, E> {
        match self {
            Result::Ok(value) => map(value),
            Result::Err(error) => Result::Err(error),
        }
    }

    #[inline]
    pub const fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Result::Ok(value) => Result::Ok(value),
            Result::Err(error) => Result::Err(error),
        }
    }

    #[inline]
    pub fn into_std(self) -> std::result::Result<T, E> {
        self.into()
    }
}

fn describe<E: 'static>(error: &E) -> String {
    match (error as &dyn Any).downcast_ref::<ErrorMsg>() {
        Some(error) => error.message().into(),
        None => UNEXPECTED.into(),
    }
}

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
    #[inline]
    fn from(value: std::result::Result<T, E>) -> Self {
        match value {
            Ok(value) => Result::Ok(value),
            Err(error) => Result::Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for std::result::Result<T, E> {
    #[inline]
    fn from(value: Result<T, E>) -> Self {
        match value {
            Result::Ok(value) => Ok(value),
            Result::Err(error) => Err(error),
        }
    }
}
