use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed catalog of checks a [`Requirement`](`crate::Requirement`) can evaluate.
///
/// The name of a check is part of the default failure message. Text and
/// collection variants of a check share the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Check {
    NotBeNull,
    BeNull,
    BeTrue,
    BeFalse,
    BeEmpty,
    NotBeEmpty,
    Match,
    NotMatch,
    BeGreaterThanOrEqualTo,
    BeLessThanOrEqualTo,
    BeUrl,
    BeEmail,
}

impl Check {
    /// Every check in the catalog
    pub const ALL: [Check; 12] = [
        Check::NotBeNull,
        Check::BeNull,
        Check::BeTrue,
        Check::BeFalse,
        Check::BeEmpty,
        Check::NotBeEmpty,
        Check::Match,
        Check::NotMatch,
        Check::BeGreaterThanOrEqualTo,
        Check::BeLessThanOrEqualTo,
        Check::BeUrl,
        Check::BeEmail,
    ];

    /// The name used in the default failure message
    pub fn name(&self) -> &'static str {
        match self {
            Check::NotBeNull => "NotBeNull",
            Check::BeNull => "BeNull",
            Check::BeTrue => "BeTrue",
            Check::BeFalse => "BeFalse",
            Check::BeEmpty => "BeEmpty",
            Check::NotBeEmpty => "NotBeEmpty",
            Check::Match => "Match",
            Check::NotMatch => "NotMatch",
            Check::BeGreaterThanOrEqualTo => "BeGreaterThanOrEqualTo",
            Check::BeLessThanOrEqualTo => "BeLessThanOrEqualTo",
            Check::BeUrl => "BeUrl",
            Check::BeEmail => "BeEmail",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
