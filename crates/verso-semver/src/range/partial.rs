//! Partially-specified versions, the operand shape of range comparators.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{VersionError, VersionField};
use crate::format::FormatError;
use crate::options::SemanticOptions;
use crate::prerelease::PreRelease;
use crate::version::{self, COMPONENT_MAX};

/// One component of a [`PartialVersion`]: omitted, a wildcard, or a number.
///
/// Wildcards compare equal regardless of the character they were written
/// with; the character is only retained for round-tripping freshly parsed
/// input.
#[derive(Debug, Clone, Copy)]
pub enum PartialComponent {
    Omitted,
    Wildcard(char),
    Numeric(u32),
}

impl PartialComponent {
    /// The `x` wildcard.
    pub const X: PartialComponent = PartialComponent::Wildcard('x');

    pub fn numeric(value: u32) -> Result<Self, VersionError> {
        if value > COMPONENT_MAX {
            return Err(VersionError::ComponentTooBig);
        }
        Ok(PartialComponent::Numeric(value))
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, PartialComponent::Numeric(_))
    }

    pub fn is_omitted(&self) -> bool {
        matches!(self, PartialComponent::Omitted)
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, PartialComponent::Wildcard(_))
    }

    pub fn number(&self) -> Option<u32> {
        match self {
            PartialComponent::Numeric(value) => Some(*value),
            _ => None,
        }
    }

    /// The numeric value, treating omitted and wildcard components as `0`.
    pub fn value_or_zero(&self) -> u32 {
        self.number().unwrap_or(0)
    }

    /// Parses a single component text under the given options. Empty input
    /// maps to an omitted component.
    pub fn parse_with(text: &str, options: SemanticOptions) -> Result<Self, VersionError> {
        let mut text = text;
        if options.contains(SemanticOptions::ALLOW_LEADING_WHITE) {
            text = text.trim_start();
        }
        if options.contains(SemanticOptions::ALLOW_TRAILING_WHITE) {
            text = text.trim_end();
        }
        if text.is_empty() {
            return Ok(PartialComponent::Omitted);
        }
        let mut chars = text.chars();
        if let (Some(wildcard @ ('x' | 'X' | '*')), None) = (chars.next(), chars.next()) {
            return Ok(PartialComponent::Wildcard(wildcard));
        }
        if !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(VersionError::ComponentInvalid);
        }
        if !options.contains(SemanticOptions::ALLOW_LEADING_ZEROES)
            && text.len() > 1
            && text.as_bytes()[0] == b'0'
        {
            return Err(VersionError::ComponentLeadingZeroes);
        }
        let mut value = 0u32;
        for b in text.bytes() {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add((b - b'0') as u32))
                .filter(|&v| v <= COMPONENT_MAX)
                .ok_or(VersionError::ComponentTooBig)?;
        }
        Ok(PartialComponent::Numeric(value))
    }
}

fn is_class_char(c: char) -> bool {
    matches!(c, 'x' | 'X' | '*' | '0' | '_')
}

/// Resolves one run of class characters for a non-numeric component: the
/// originally parsed wildcard character wins when the run names it,
/// otherwise the run's last character decides (`_` meaning empty).
fn resolve_class_run(run: &[char], parsed: Option<char>) -> String {
    if let Some(wildcard) = parsed {
        if run[..run.len() - 1].contains(&wildcard) {
            return wildcard.to_string();
        }
    }
    match run[run.len() - 1] {
        '_' => String::new(),
        last => last.to_string(),
    }
}

impl PartialComponent {
    /// Formats the component under a wildcard format string.
    ///
    /// Runs of `x`/`X`/`*`/`0`/`_` print a numeric component's value; for a
    /// wildcard they print the originally parsed character when the run
    /// contains it and the run's last character otherwise; for an omitted
    /// component they print nothing when the run contains `_` and the run's
    /// last character otherwise. Backslash escapes and quoted literals work
    /// as in [`SemanticVersion::format`](crate::SemanticVersion::format);
    /// `"G"`/`"g"` is the canonical form.
    pub fn format(&self, format: &str) -> Result<String, FormatError> {
        if format.is_empty() {
            return Ok(String::new());
        }
        if format == "G" || format == "g" {
            return Ok(self.to_string());
        }
        let chars: Vec<char> = format.chars().collect();
        let resolve = |run: &[char]| match self {
            PartialComponent::Numeric(value) => value.to_string(),
            PartialComponent::Wildcard(wildcard) => resolve_class_run(run, Some(*wildcard)),
            PartialComponent::Omitted => {
                if run.contains(&'_') {
                    String::new()
                } else {
                    resolve_class_run(run, None)
                }
            }
        };
        if chars.iter().copied().all(is_class_char) {
            return Ok(resolve(&chars));
        }

        let mut output = String::new();
        let mut pos = 0;
        while pos < chars.len() {
            match chars[pos] {
                '\\' => {
                    pos += 1;
                    output.push(if pos < chars.len() { chars[pos] } else { '\\' });
                    pos += 1;
                }
                quote @ ('\'' | '"') => {
                    pos += 1;
                    let start = pos;
                    while pos < chars.len() && chars[pos] != quote {
                        pos += 1;
                    }
                    if pos >= chars.len() {
                        return Err(FormatError::UnterminatedQuote);
                    }
                    output.extend(&chars[start..pos]);
                    pos += 1;
                }
                c if is_class_char(c) => {
                    let start = pos;
                    while pos < chars.len() && is_class_char(chars[pos]) {
                        pos += 1;
                    }
                    output.push_str(&resolve(&chars[start..pos]));
                }
                literal => {
                    output.push(literal);
                    pos += 1;
                }
            }
        }
        Ok(output)
    }
}

impl PartialEq for PartialComponent {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PartialComponent::Omitted, PartialComponent::Omitted) => true,
            (PartialComponent::Wildcard(_), PartialComponent::Wildcard(_)) => true,
            (PartialComponent::Numeric(a), PartialComponent::Numeric(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for PartialComponent {}

impl Hash for PartialComponent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            PartialComponent::Omitted => 0u8.hash(state),
            PartialComponent::Wildcard(_) => 1u8.hash(state),
            PartialComponent::Numeric(value) => {
                2u8.hash(state);
                value.hash(state);
            }
        }
    }
}

impl Ord for PartialComponent {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(component: &PartialComponent) -> u8 {
            match component {
                PartialComponent::Omitted => 0,
                PartialComponent::Wildcard(_) => 1,
                PartialComponent::Numeric(_) => 2,
            }
        }
        match (self, other) {
            (PartialComponent::Numeric(a), PartialComponent::Numeric(b)) => a.cmp(b),
            (a, b) => rank(a).cmp(&rank(b)),
        }
    }
}

impl PartialOrd for PartialComponent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u32> for PartialComponent {
    fn from(value: u32) -> Self {
        PartialComponent::Numeric(value)
    }
}

impl fmt::Display for PartialComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartialComponent::Omitted => Ok(()),
            PartialComponent::Wildcard(wildcard) => write!(f, "{wildcard}"),
            PartialComponent::Numeric(value) => write!(f, "{value}"),
        }
    }
}

/// A version with omittable or wildcard components, used exclusively as a
/// range-comparator operand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartialVersion {
    major: PartialComponent,
    minor: PartialComponent,
    patch: PartialComponent,
    pre_releases: Vec<PreRelease>,
    build_metadata: Vec<String>,
}

impl PartialVersion {
    pub fn new(
        major: impl Into<PartialComponent>,
        minor: impl Into<PartialComponent>,
        patch: impl Into<PartialComponent>,
    ) -> Result<Self, VersionError> {
        Self::with_identifiers(major, minor, patch, Vec::new(), Vec::new())
    }

    pub fn with_identifiers(
        major: impl Into<PartialComponent>,
        minor: impl Into<PartialComponent>,
        patch: impl Into<PartialComponent>,
        pre_releases: Vec<PreRelease>,
        build_metadata: Vec<String>,
    ) -> Result<Self, VersionError> {
        let major = major.into();
        let minor = minor.into();
        let patch = patch.into();
        for (component, field) in [
            (&major, VersionField::Major),
            (&minor, VersionField::Minor),
            (&patch, VersionField::Patch),
        ] {
            if let PartialComponent::Numeric(value) = component {
                version::check_component(*value, field)?;
            }
        }
        for identifier in &build_metadata {
            version::validate_build_metadata(identifier)?;
        }
        Ok(PartialVersion {
            major,
            minor,
            patch,
            pre_releases,
            build_metadata,
        })
    }

    pub fn major(&self) -> PartialComponent {
        self.major
    }

    pub fn minor(&self) -> PartialComponent {
        self.minor
    }

    pub fn patch(&self) -> PartialComponent {
        self.patch
    }

    pub fn pre_releases(&self) -> &[PreRelease] {
        &self.pre_releases
    }

    pub fn build_metadata(&self) -> &[String] {
        &self.build_metadata
    }

    pub fn is_pre_release(&self) -> bool {
        !self.pre_releases.is_empty()
    }
}

impl From<&crate::version::SemanticVersion> for PartialVersion {
    fn from(version: &crate::version::SemanticVersion) -> Self {
        PartialVersion {
            major: PartialComponent::Numeric(version.major()),
            minor: PartialComponent::Numeric(version.minor()),
            patch: PartialComponent::Numeric(version.patch()),
            pre_releases: version.pre_releases().to_vec(),
            build_metadata: version.build_metadata().to_vec(),
        }
    }
}

impl fmt::Display for PartialVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.major)?;
        if !self.minor.is_omitted() {
            write!(f, ".{}", self.minor)?;
            if !self.patch.is_omitted() {
                write!(f, ".{}", self.patch)?;
            }
        }
        let mut first = true;
        for identifier in &self.pre_releases {
            f.write_str(if first { "-" } else { "." })?;
            write!(f, "{identifier}")?;
            first = false;
        }
        let mut first = true;
        for identifier in &self.build_metadata {
            f.write_str(if first { "+" } else { "." })?;
            f.write_str(identifier)?;
            first = false;
        }
        Ok(())
    }
}
