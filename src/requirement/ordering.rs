use super::{Otherwise, Requirement};
use crate::check::Check;
use crate::error::Result;

impl Requirement {
    /// Require `value >= bound`.
    ///
    /// Both operands have the same type and are compared in that type's own
    /// order. Floating point values are compared exactly, and a `NaN` operand
    /// never fulfills the requirement.
    pub fn be_greater_than_or_equal_to<T: PartialOrd>(
        &self,
        value: T,
        bound: T,
        otherwise: Otherwise<'_>,
    ) -> Result {
        self.ensure(Check::BeGreaterThanOrEqualTo, value >= bound, otherwise)
    }

    /// Require `value <= bound`.
    ///
    /// See [`Requirement::be_greater_than_or_equal_to`] for how values are compared.
    pub fn be_less_than_or_equal_to<T: PartialOrd>(
        &self,
        value: T,
        bound: T,
        otherwise: Otherwise<'_>,
    ) -> Result {
        self.ensure(Check::BeLessThanOrEqualTo, value <= bound, otherwise)
    }
}
