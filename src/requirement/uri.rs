use serde::{Deserialize, Serialize};
use url::{ParseError, Url};

use super::{Otherwise, Requirement};
use crate::check::Check;
use crate::error::Result;

/// Base used to resolve relative references. Any valid base works, it only
/// needs to accept every well formed reference.
const RELATIVE_BASE: &str = "http://localhost/";

/// The kinds of URL accepted by [`Requirement::be_url`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UriKind {
    /// A URL with a scheme, e.g. `https://example.com/path`
    Absolute,
    /// A reference resolved against some base, e.g. `/path?query` or `../up`
    Relative,
    /// Either of the above
    #[default]
    RelativeOrAbsolute,
}

impl UriKind {
    fn accepts(&self, url: &str) -> bool {
        match self {
            UriKind::Absolute => is_absolute(url),
            UriKind::Relative => is_relative(url),
            UriKind::RelativeOrAbsolute => is_absolute(url) || is_relative(url),
        }
    }
}

fn is_absolute(url: &str) -> bool {
    Url::parse(url).is_ok()
}

fn is_relative(url: &str) -> bool {
    // Text that fails to parse for any other reason is a malformed absolute URL
    matches!(Url::parse(url), Err(ParseError::RelativeUrlWithoutBase))
        && Url::parse(RELATIVE_BASE)
            .and_then(|base| base.join(url))
            .is_ok()
}

impl Requirement {
    /// Require the text to be a well formed URL of the given kind
    pub fn be_url(&self, url: &str, kind: UriKind, otherwise: Otherwise<'_>) -> Result {
        self.ensure(Check::BeUrl, kind.accepts(url), otherwise)
    }
}
