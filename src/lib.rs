#![cfg_attr(docsrs, feature(doc_cfg))]
//! requirements is a library of guard clauses: named checks that validate arguments and
//! invariants at runtime and report a structured failure when a condition does not hold.
//!
//! The library replaces ad-hoc `if !cond { return Err(...) }` blocks with intention revealing
//! checks such as `not_be_null`, `be_email` or `be_greater_than_or_equal_to`, each producing a
//! consistent failure that callers can customize.
//!
//! # Features
//!
//! - Fixed catalog of checks for presence, booleans, text and collection emptiness, regular
//!   expressions, ordering of numbers and dates, URLs and email addresses.
//! - Fail fast. A check returns the first failure as an [`Error`], to be propagated with `?`.
//! - Customizable failures. Bind an error factory to a [`Requirement`], or override it for a
//!   single check. Factories are only called when a check fails.
//! - Thread safe. Requirements are immutable and compiled patterns are shared across threads.
//!
//! For more detailed logging, the library uses the [tracing crate](https://crates.io/crates/tracing).
//!
//! # Requirement
//!
//! A [`Requirement`] evaluates checks. The shared default requirement reports a
//! [`RequirementFailed`] naming the violated check.
//!
//! ```rust
//! use requirements::{Requirement, Result, UriKind};
//!
//! fn register(email: &str, homepage: &str, age: u8) -> Result {
//!     let require = Requirement::to();
//!     require.be_email(email, None)?;
//!     require.be_url(homepage, UriKind::Absolute, None)?;
//!     require.be_greater_than_or_equal_to(age, 18, None)?;
//!     Ok(())
//! }
//!
//! assert!(register("user@example.com", "https://example.com", 30).is_ok());
//!
//! let err = register("user@example.com", "https://example.com", 12).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Requirement \"BeGreaterThanOrEqualTo\" was not fulfilled"
//! );
//! ```
//!
//! ## Custom failures
//!
//! The error returned by a failed check is chosen in order of precedence
//!
//! - the per-call factory given as the last argument of the check
//! - the factory bound to the requirement with [`Requirement::to_with`]
//! - the default [`RequirementFailed`]
//!
//! Any error type can be returned through [`Error::custom`], or converted from
//! [`anyhow::Error`](https://docs.rs/anyhow).
//!
//! ```rust
//! use requirements::{Error, Requirement};
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("invalid order: {0}")]
//! struct InvalidOrder(&'static str);
//!
//! let require = Requirement::to_with(|| Error::custom(InvalidOrder("generic")));
//!
//! let err = require.not_be_empty_collection(Vec::<u32>::new(), None).unwrap_err();
//! assert_eq!(err.to_string(), "invalid order: generic");
//!
//! let err = require
//!     .be_less_than_or_equal_to(12, 10, Some(&|| Error::custom(InvalidOrder("too many items"))))
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "invalid order: too many items");
//! assert!(err.downcast_ref::<InvalidOrder>().is_some());
//! ```
//!
//! ## Patterns
//!
//! [`Requirement::match_pattern`] and [`Requirement::not_match_pattern`] compile the pattern on
//! first use and reuse the compiled matcher afterwards. A pattern that does not compile is a
//! problem with the check itself and is reported as [`Error::InvalidPattern`] rather than a
//! failed check.

mod check;
mod error;
mod pattern;
mod requirement;

pub use check::Check;
pub use error::{Error, RequirementFailed, Result};
pub use requirement::{Otherwise, Requirement, UriKind};
