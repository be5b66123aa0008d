use core::fmt;

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub struct Error {
    repr: Repr,
}

pub(crate) enum Repr {
    /// A fixed-width read needed more bytes than the buffer had left.
    Underrun { needed: usize, remaining: usize },
    Other(String),
}

impl From<String> for Repr {
    fn from(value: String) -> Self {
        Self::Other(value)
    }
}
impl<'a> From<&'a str> for Repr {
    fn from(value: &'a str) -> Self {
        Self::Other(value.into())
    }
}

impl Error {
    pub(crate) fn from(e: impl Into<Repr>) -> Self {
        Self { repr: e.into() }
    }

    pub(crate) fn underrun(needed: usize, remaining: usize) -> Self {
        Self {
            repr: Repr::Underrun { needed, remaining },
        }
    }

    /// Returns whether this error was caused by running out of input data.
    pub fn is_underrun(&self) -> bool {
        matches!(self.repr, Repr::Underrun { .. })
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Underrun { needed, remaining } => write!(
                f,
                "reached end of data while decoding JPEG segment (needed {needed} bytes, {remaining} remaining)"
            ),
            Repr::Other(s) => s.fmt(f),
        }
    }
}

impl std::error::Error for Error {}
