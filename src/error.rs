/// An attribute value parsing error.
///
/// A value either parses completely or not at all, so there is nothing
/// to report beyond the failure itself. Malformed tokens, truncated input
/// and trailing garbage all collapse into this one error and the caller
/// is expected to fall back to a default/inherited value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Error;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "malformed attribute value")
    }
}

impl std::error::Error for Error {}
