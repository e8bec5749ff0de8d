//! The concrete semantic version type and its ordering law

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use lazy_static::lazy_static;

use crate::error::{VersionError, VersionField};
use crate::parser;
use crate::prerelease::PreRelease;
use crate::range::PartialVersion;

/// Upper bound for every numeric component and numeric pre-release identifier.
pub(crate) const COMPONENT_MAX: u32 = i32::MAX as u32;

lazy_static! {
    static ref MIN_VALUE: SemanticVersion =
        SemanticVersion::new_unchecked(0, 0, 0, vec![PreRelease::ZERO], Vec::new());
    static ref MAX_VALUE: SemanticVersion = SemanticVersion::new_unchecked(
        COMPONENT_MAX,
        COMPONENT_MAX,
        COMPONENT_MAX,
        Vec::new(),
        Vec::new(),
    );
}

/// An immutable SemVer 2.0.0 version.
///
/// Build metadata is carried but excluded from equality, ordering and
/// hashing; see [`compare_with_metadata`] for the metadata-sensitive
/// secondary order.
#[derive(Debug, Clone)]
pub struct SemanticVersion {
    major: u32,
    minor: u32,
    patch: u32,
    pre_releases: Vec<PreRelease>,
    build_metadata: Vec<String>,
}

impl SemanticVersion {
    pub(crate) fn new_unchecked(
        major: u32,
        minor: u32,
        patch: u32,
        pre_releases: Vec<PreRelease>,
        build_metadata: Vec<String>,
    ) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
            pre_releases,
            build_metadata,
        }
    }

    /// Creates a plain release version without identifiers.
    pub fn new(major: u32, minor: u32, patch: u32) -> Result<Self, VersionError> {
        Self::with_identifiers(major, minor, patch, Vec::new(), Vec::new())
    }

    /// Creates a version with pre-release and build metadata identifiers.
    ///
    /// Every component must be at most `2147483647` and every build metadata
    /// identifier must be a non-empty run of `[A-Za-z0-9-]`.
    pub fn with_identifiers(
        major: u32,
        minor: u32,
        patch: u32,
        pre_releases: Vec<PreRelease>,
        build_metadata: Vec<String>,
    ) -> Result<Self, VersionError> {
        check_component(major, VersionField::Major)?;
        check_component(minor, VersionField::Minor)?;
        check_component(patch, VersionField::Patch)?;
        for identifier in &build_metadata {
            validate_build_metadata(identifier)?;
        }
        Ok(Self::new_unchecked(
            major,
            minor,
            patch,
            pre_releases,
            build_metadata,
        ))
    }

    /// The lowest value any real version can equal or exceed: `0.0.0-0`.
    pub fn min_value() -> &'static SemanticVersion {
        &MIN_VALUE
    }

    /// The highest representable version: `2147483647.2147483647.2147483647`.
    pub fn max_value() -> &'static SemanticVersion {
        &MAX_VALUE
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> u32 {
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

pub(crate) fn check_component(value: u32, field: VersionField) -> Result<(), VersionError> {
    if value > COMPONENT_MAX {
        return Err(VersionError::too_big(field));
    }
    Ok(())
}

pub(crate) fn validate_build_metadata(identifier: &str) -> Result<(), VersionError> {
    if identifier.is_empty() {
        return Err(VersionError::BuildMetadataEmpty);
    }
    if !parser::is_valid_identifier(identifier) {
        return Err(VersionError::BuildMetadataInvalid);
    }
    Ok(())
}

impl PartialEq for SemanticVersion {
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.pre_releases == other.pre_releases
    }
}

impl Eq for SemanticVersion {}

impl Hash for SemanticVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_releases.hash(state);
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| compare_pre_releases(&self.pre_releases, &other.pre_releases))
    }
}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A release (empty sequence) outranks any pre-release; otherwise compare
/// element-wise, shorter-prefix-loses.
fn compare_pre_releases(a: &[PreRelease], b: &[PreRelease]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }
    for (left, right) in a.iter().zip(b.iter()) {
        let ordering = left.cmp(right);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    a.len().cmp(&b.len())
}

/// Compares two versions, resolving ties by build metadata.
///
/// Metadata sequences compare element-wise by byte ordinal, like
/// pre-releases, except that *absent* metadata outranks present metadata.
pub fn compare_with_metadata(a: &SemanticVersion, b: &SemanticVersion) -> Ordering {
    let ordering = a.cmp(b);
    if ordering != Ordering::Equal {
        return ordering;
    }
    match (a.build_metadata.is_empty(), b.build_metadata.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }
    for (left, right) in a.build_metadata.iter().zip(b.build_metadata.iter()) {
        let ordering = left.as_bytes().cmp(right.as_bytes());
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    a.build_metadata.len().cmp(&b.build_metadata.len())
}

/// Equality that also requires identical build metadata sequences.
pub fn eq_with_metadata(a: &SemanticVersion, b: &SemanticVersion) -> bool {
    a == b && a.build_metadata == b.build_metadata
}

impl From<&PartialVersion> for SemanticVersion {
    /// Zeroes out wildcard and omitted components.
    fn from(partial: &PartialVersion) -> Self {
        SemanticVersion::new_unchecked(
            partial.major().value_or_zero(),
            partial.minor().value_or_zero(),
            partial.patch().value_or_zero(),
            partial.pre_releases().to_vec(),
            partial.build_metadata().to_vec(),
        )
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        let mut lead = '-';
        for pre_release in &self.pre_releases {
            write!(f, "{lead}{pre_release}")?;
            lead = '.';
        }
        lead = '+';
        for identifier in &self.build_metadata {
            write!(f, "{lead}{identifier}")?;
            lead = '.';
        }
        Ok(())
    }
}
