use super::{Otherwise, Requirement};
use crate::check::Check;
use crate::error::Result;

/// Missing, zero-length and whitespace-only text are all empty
fn is_blank(text: Option<&str>) -> bool {
    text.is_none_or(|t| t.chars().all(char::is_whitespace))
}

impl Requirement {
    /// Require the text to be missing, empty or whitespace only
    pub fn be_empty<'a>(&self, text: impl Into<Option<&'a str>>, otherwise: Otherwise<'_>) -> Result {
        self.ensure(Check::BeEmpty, is_blank(text.into()), otherwise)
    }

    /// Require the text to have some non-whitespace content
    pub fn not_be_empty<'a>(
        &self,
        text: impl Into<Option<&'a str>>,
        otherwise: Otherwise<'_>,
    ) -> Result {
        self.ensure(Check::NotBeEmpty, !is_blank(text.into()), otherwise)
    }

    /// Require the collection to have no elements.
    ///
    /// Only the number of elements is considered, the elements themselves are
    /// never read.
    pub fn be_empty_collection<C>(&self, collection: C, otherwise: Otherwise<'_>) -> Result
    where
        C: IntoIterator,
        C::IntoIter: ExactSizeIterator,
    {
        let count = collection.into_iter().len();
        self.ensure(Check::BeEmpty, count == 0, otherwise)
    }

    /// Require the collection to have at least one element
    pub fn not_be_empty_collection<C>(&self, collection: C, otherwise: Otherwise<'_>) -> Result
    where
        C: IntoIterator,
        C::IntoIter: ExactSizeIterator,
    {
        let count = collection.into_iter().len();
        self.ensure(Check::NotBeEmpty, count > 0, otherwise)
    }
}
