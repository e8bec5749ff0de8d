//! Pre-release identifiers

use std::cmp::Ordering;
use std::fmt;

use crate::error::VersionError;
use crate::options::SemanticOptions;
use crate::parser;
use crate::version::COMPONENT_MAX;

/// A single pre-release identifier: numeric or alphanumeric.
///
/// Numeric identifiers never exceed `2147483647` and always order before
/// alphanumeric ones. An all-digit identifier is always classified as
/// `Numeric`; construct `Text` values through [`PreRelease::text`] or the
/// parse entry points, which maintain that invariant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PreRelease {
    Numeric(u32),
    Text(String),
}

impl PreRelease {
    /// The numeric identifier `0`, the lowest possible pre-release.
    pub const ZERO: PreRelease = PreRelease::Numeric(0);

    /// Creates an alphanumeric identifier, rejecting input that a parse
    /// would have classified differently.
    pub fn text(identifier: impl Into<String>) -> Result<Self, VersionError> {
        let identifier = identifier.into();
        if identifier.is_empty() {
            return Err(VersionError::PreReleaseEmpty);
        }
        if parser::is_numeric(&identifier) {
            return Err(VersionError::PreReleaseInvalid);
        }
        if !parser::is_valid_identifier(&identifier) {
            return Err(VersionError::PreReleaseInvalid);
        }
        Ok(PreRelease::Text(identifier))
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, PreRelease::Numeric(_))
    }

    /// The numeric value, if this identifier is numeric.
    pub fn number(&self) -> Option<u32> {
        match self {
            PreRelease::Numeric(number) => Some(*number),
            PreRelease::Text(_) => None,
        }
    }

    /// Parses a single identifier under the strict grammar.
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        Self::parse_with(text, SemanticOptions::STRICT)
    }

    /// Parses a single identifier, honoring the leading-zeroes and
    /// whitespace relaxations.
    pub fn parse_with(text: &str, options: SemanticOptions) -> Result<Self, VersionError> {
        let text = if options.contains(SemanticOptions::ALLOW_INNER_WHITE) {
            text.trim()
        } else {
            text
        };
        if text.is_empty() {
            return Err(VersionError::PreReleaseEmpty);
        }
        if !parser::is_valid_identifier(text) {
            return Err(VersionError::PreReleaseInvalid);
        }
        Self::from_scanned(
            text,
            options.contains(SemanticOptions::ALLOW_LEADING_ZEROES),
        )
    }

    /// Classifies an identifier whose characters are already known valid.
    pub(crate) fn from_scanned(
        text: &str,
        allow_leading_zeroes: bool,
    ) -> Result<Self, VersionError> {
        if !parser::is_numeric(text) {
            return Ok(PreRelease::Text(text.to_owned()));
        }
        if !allow_leading_zeroes && text.len() > 1 && text.as_bytes()[0] == b'0' {
            return Err(VersionError::PreReleaseLeadingZeroes);
        }
        let mut number = 0u32;
        for &b in text.as_bytes() {
            number = number
                .checked_mul(10)
                .and_then(|n| n.checked_add((b - b'0') as u32))
                .filter(|&n| n <= COMPONENT_MAX)
                .ok_or(VersionError::PreReleaseTooBig)?;
        }
        Ok(PreRelease::Numeric(number))
    }
}

impl Ord for PreRelease {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (PreRelease::Numeric(a), PreRelease::Numeric(b)) => a.cmp(b),
            (PreRelease::Numeric(_), PreRelease::Text(_)) => Ordering::Less,
            (PreRelease::Text(_), PreRelease::Numeric(_)) => Ordering::Greater,
            (PreRelease::Text(a), PreRelease::Text(b)) => a.as_bytes().cmp(b.as_bytes()),
        }
    }
}

impl PartialOrd for PreRelease {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreRelease::Numeric(number) => write!(f, "{number}"),
            PreRelease::Text(text) => f.write_str(text),
        }
    }
}
