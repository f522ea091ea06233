use super::{Otherwise, Requirement};
use crate::check::Check;
use crate::error::Result;
use crate::pattern::compile;

impl Requirement {
    /// Require some part of the value to match the regular expression.
    ///
    /// Returns [`Error::InvalidPattern`](`crate::Error::InvalidPattern`) if the
    /// pattern does not compile, regardless of the value.
    pub fn match_pattern(&self, value: &str, pattern: &str, otherwise: Otherwise<'_>) -> Result {
        let re = compile(pattern)?;
        self.ensure(Check::Match, re.is_match(value), otherwise)
    }

    /// Require no part of the value to match the regular expression
    pub fn not_match_pattern(
        &self,
        value: &str,
        pattern: &str,
        otherwise: Otherwise<'_>,
    ) -> Result {
        let re = compile(pattern)?;
        self.ensure(Check::NotMatch, !re.is_match(value), otherwise)
    }
}
