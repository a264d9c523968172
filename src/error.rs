use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The caller's root buffer cannot hold the maximum root count for the degree.
    BufferTooSmall { needed: usize, actual: usize },

    /// The coefficient list does not describe a linear, quadric or cubic equation.
    UnsupportedDegree { len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::BufferTooSmall { needed, actual } => write!(
                fmt,
                "root buffer holds {} values, but {} are required",
                actual, needed
            ),
            Error::UnsupportedDegree { len } => {
                write!(fmt, "expected 2, 3 or 4 coefficients, got {}", len)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_test() {
        assert_eq!(
            Error::BufferTooSmall { needed: 3, actual: 2 }.to_string(),
            "root buffer holds 2 values, but 3 are required"
        );
        assert_eq!(
            Error::UnsupportedDegree { len: 5 }.to_string(),
            "expected 2, 3 or 4 coefficients, got 5"
        );
    }
}
