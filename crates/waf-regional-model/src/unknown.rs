use std::fmt;

/// Wire text of an enum or error code that this version of the model does
/// not know.
///
/// Only the crate's parsers construct it, and they do so only after every
/// modeled value failed to match. A modeled value therefore always parses
/// to its named variant and never into an `Unknown` carrying the same text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownVariantValue(String);

impl UnknownVariantValue {
    pub(crate) fn new(value: &str) -> Self {
        Self(value.to_owned())
    }

    /// The text as received.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnknownVariantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
