use std::fmt;

/// Contract violations of the accessors of [`Maybe`](crate::Maybe) and
/// [`Result`](crate::Result). They are raised as panics at the caller's location and
/// never returned as values.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Error {
    EmptyAccess,
    /// Holds the variant that was requested.
    WrongVariantAccess(Variant),
    UnexpectedResult(String),
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Variant {
    Ok,
    Err,
}

/// Built-in error kind of [`Result`](crate::Result): a message, compared by its text.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ErrorMsg(String);

/// Failure message of `unwrap` when the error is not an [`ErrorMsg`].
pub const UNEXPECTED: &str = "unexpected error";

impl Error {
    #[cold]
    #[inline(never)]
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        panic!("{}", self)
    }
}

impl ErrorMsg {
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl Default for ErrorMsg {
    fn default() -> Self {
        Self::new("unknown error")
    }
}

impl From<&str> for ErrorMsg {
    #[inline]
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ErrorMsg {
    #[inline]
    fn from(message: String) -> Self {
        Self(message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyAccess => write!(f, "accessed the value of an empty 'Maybe'"),
            Error::WrongVariantAccess(Variant::Ok) => {
                write!(f, "accessed the value of a 'Result' that holds an error")
            }
            Error::WrongVariantAccess(Variant::Err) => {
                write!(f, "accessed the error of a 'Result' that holds a value")
            }
            Error::UnexpectedResult(message) => f.write_str(message),
        }
    }
}

impl fmt::Display for ErrorMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! error {
    ($t:ty) => {
        impl std::error::Error for $t {}
    };
}

error!(Error);
error!(ErrorMsg);
