use email_address::EmailAddress;
use tracing::trace;

use super::{Otherwise, Requirement};
use crate::check::Check;
use crate::error::Result;
use crate::pattern::compile;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,6}$";

impl Requirement {
    /// Require the text to be a plain email address.
    ///
    /// The text must parse as an RFC 5322 address and also match a
    /// conservative `local@domain.tld` shape, so valid but unusual addresses
    /// (quoted local parts, display names, domain literals, non-ASCII
    /// domains) are rejected.
    pub fn be_email(&self, email: &str, otherwise: Otherwise<'_>) -> Result {
        if let Err(err) = email.parse::<EmailAddress>() {
            trace!(error = %err, "failed to parse email address");
            return Err(self.failure(Check::BeEmail, otherwise));
        }

        let re = compile(EMAIL_PATTERN)?;
        self.ensure(Check::BeEmail, re.is_match(email), otherwise)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("invalid contact")]
    struct InvalidContact;

    #[test]
    fn it_accepts_plain_addresses() {
        let require = Requirement::to();
        for email in [
            "user@example.com",
            "first.last+tag@mail.example.co",
            "a_b%c-d@sub.domain.museum",
        ] {
            assert!(require.be_email(email, None).is_ok(), "{email}");
        }
    }

    #[test]
    fn it_rejects_malformed_addresses() {
        let require = Requirement::to();
        for email in [
            "not-an-email",
            "user@@example.com",
            "user@",
            "@example.com",
            "",
            "user@example",
            "user@example.c",
        ] {
            let err = require.be_email(email, None).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Requirement \"BeEmail\" was not fulfilled",
                "{email}"
            );
        }
    }

    #[test]
    fn it_rejects_valid_but_unusual_addresses() {
        let require = Requirement::to();
        for email in ["\"quoted local\"@example.com", "user@[127.0.0.1]"] {
            assert!(require.be_email(email, None).is_err(), "{email}");
        }
    }

    #[test]
    fn it_replaces_parse_errors_with_the_selected_failure() {
        let require = Requirement::to_with(|| Error::custom(InvalidContact));
        let err = require.be_email("not-an-email", None).unwrap_err();
        assert!(err.downcast_ref::<InvalidContact>().is_some());

        // A domain literal is never accepted by the pattern
        let err = require.be_email("user@[127.0.0.1]", None).unwrap_err();
        assert!(err.downcast_ref::<InvalidContact>().is_some());
    }
}
