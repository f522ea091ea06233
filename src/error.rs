use thiserror::Error;

use crate::check::Check;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Requirement \"{0}\" was not fulfilled")]
/// The default failure of a check when no error factory applies.
///
/// The message names the violated check and is stable across releases.
pub struct RequirementFailed(Check);

impl RequirementFailed {
    /// Create the failure for the given check
    pub fn new(check: Check) -> Self {
        Self(check)
    }

    /// The check that was not fulfilled
    pub fn check(&self) -> Check {
        self.0
    }
}

#[derive(Error, Debug)]
pub enum Error {
    /// A check was evaluated and its condition did not hold
    #[error(transparent)]
    RequirementFailed(#[from] RequirementFailed),

    /// The pattern given to a matching check could not be compiled.
    ///
    /// This is a problem with the check arguments, not a failed check.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A failure produced by a caller supplied error factory
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),

    /// A failure produced by a caller supplied factory returning [`anyhow::Error`]
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Wrap any error value as a caller supplied failure
    pub fn custom<E: std::error::Error + Send + Sync + 'static>(err: E) -> Self {
        Self::Other(Box::new(err))
    }

    /// Returns true if this is the default failure of a check
    pub fn is_requirement_failed(&self) -> bool {
        matches!(self, Self::RequirementFailed(_))
    }

    /// Returns the violated check for default failures
    pub fn check(&self) -> Option<Check> {
        match self {
            Self::RequirementFailed(failed) => Some(failed.check()),
            _ => None,
        }
    }

    /// Try to access a caller supplied failure as a concrete type
    pub fn downcast_ref<E: std::error::Error + Send + Sync + 'static>(&self) -> Option<&E> {
        match self {
            Self::Other(err) => err.downcast_ref::<E>(),
            Self::Anyhow(err) => err.downcast_ref::<E>(),
            _ => None,
        }
    }
}

pub type Result<T = ()> = std::result::Result<T, Error>;
