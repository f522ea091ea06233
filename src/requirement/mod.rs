use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::check::Check;
use crate::error::{Error, RequirementFailed, Result};

mod email;
mod emptiness;
mod matching;
mod ordering;
mod uri;

pub use uri::UriKind;

/// A per-call error factory.
///
/// When given to a check, it takes precedence over the factory bound to the
/// [`Requirement`]. The factory is only called if the check fails.
pub type Otherwise<'a> = Option<&'a dyn Fn() -> Error>;

type Factory = Arc<dyn Fn() -> Error + Send + Sync>;

static DEFAULT: Requirement = Requirement { factory: None };

/// Evaluates checks over values and reports the first one that does not hold.
///
/// A failed check returns, in order of precedence
///
/// - the error produced by the per-call factory given to the check
/// - the error produced by the factory bound with [`Requirement::to_with`]
/// - a [`RequirementFailed`] naming the check
///
/// Error factories are only called when a check fails.
///
/// ```rust
/// use requirements::{Requirement, Result};
///
/// fn greet(name: Option<&str>) -> Result<String> {
///     Requirement::to().not_be_null(name, None)?;
///     Requirement::to().not_be_empty(name, None)?;
///     Ok(format!("hello {}", name.unwrap_or_default()))
/// }
///
/// assert!(greet(Some("world")).is_ok());
/// assert_eq!(
///     greet(None).unwrap_err().to_string(),
///     "Requirement \"NotBeNull\" was not fulfilled"
/// );
/// ```
#[derive(Clone, Default)]
pub struct Requirement {
    factory: Option<Factory>,
}

impl Requirement {
    /// Get the shared requirement with no bound error factory
    pub fn to() -> &'static Requirement {
        &DEFAULT
    }

    /// Create a requirement that reports failed checks using the given factory
    ///
    /// ```rust
    /// use requirements::Requirement;
    ///
    /// let require = Requirement::to_with(|| anyhow::anyhow!("bad input"));
    /// let err = require.be_true(false, None).unwrap_err();
    /// assert_eq!(err.to_string(), "bad input");
    /// ```
    pub fn to_with<F, E>(factory: F) -> Self
    where
        F: Fn() -> E + Send + Sync + 'static,
        E: Into<Error>,
    {
        Self {
            factory: Some(Arc::new(move || -> Error { factory().into() })),
        }
    }

    /// Return `Ok` if the condition holds, or the failure for the check otherwise
    fn ensure(&self, check: Check, holds: bool, otherwise: Otherwise<'_>) -> Result {
        if holds {
            return Ok(());
        }

        Err(self.failure(check, otherwise))
    }

    fn failure(&self, check: Check, otherwise: Otherwise<'_>) -> Error {
        trace!(requirement = %check, "requirement not fulfilled");
        if let Some(create) = otherwise {
            return create();
        }

        if let Some(create) = &self.factory {
            return create();
        }

        RequirementFailed::new(check).into()
    }

    pub fn not_be_null<T>(&self, value: Option<T>, otherwise: Otherwise<'_>) -> Result {
        self.ensure(Check::NotBeNull, value.is_some(), otherwise)
    }

    pub fn be_null<T>(&self, value: Option<T>, otherwise: Otherwise<'_>) -> Result {
        self.ensure(Check::BeNull, value.is_none(), otherwise)
    }

    pub fn be_true(&self, condition: bool, otherwise: Otherwise<'_>) -> Result {
        self.ensure(Check::BeTrue, condition, otherwise)
    }

    pub fn be_false(&self, condition: bool, otherwise: Otherwise<'_>) -> Result {
        self.ensure(Check::BeFalse, !condition, otherwise)
    }
}

impl fmt::Debug for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Requirement")
            .field("factory", &self.factory.as_ref().map(|_| "Fn() -> Error"))
            .finish()
    }
}
